//! The druid side of the card: what it has measured, and what the card has
//! asked it to show.

use druid::kurbo::{BezPath, Rect};

use notchcard_lib::{ControlState, Icon, PathData, SizeOption, ViewBox, ViewPort};
use style_loader::StyleSheet;

/// Surface state shared between the card logic and the widget that paints it.
///
/// Geometry is in the widget's own coordinates.
#[derive(Debug)]
pub struct CardSurface {
    pub container: Option<Rect>,
    pub label: Option<Rect>,
    /// The outline in view space; the widget scales it when painting.
    pub outline: Option<BezPath>,
    pub button_left: f64,
    controls: [ControlState; 2],
    pub text: String,
    pub icon: Option<Icon>,
    pub styles: StyleSheet,
}

fn slot(size: SizeOption) -> usize {
    match size {
        SizeOption::Twenty => 0,
        SizeOption::TwentyFour => 1,
    }
}

impl CardSurface {
    pub fn new(styles: StyleSheet) -> CardSurface {
        CardSurface {
            container: None,
            label: None,
            outline: None,
            button_left: 0.0,
            controls: [ControlState::UNSELECTED; 2],
            text: String::new(),
            icon: None,
            styles,
        }
    }

    pub fn control(&self, size: SizeOption) -> ControlState {
        self.controls[slot(size)]
    }
}

impl ViewPort for CardSurface {
    fn label_rect(&self) -> Option<Rect> {
        self.label
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn has_button_group(&self) -> bool {
        true
    }

    fn has_surface(&self) -> bool {
        true
    }

    fn declared_view_width(&self) -> Option<f64> {
        Some(ViewBox::CARD_TOP.width)
    }

    fn set_path(&mut self, data: &str) -> bool {
        match data.parse::<PathData>() {
            Ok(path) => self.outline = Some(path.to_bezpath()),
            Err(e) => log::warn!("keeping previous outline, bad path data: {}", e),
        }
        true
    }

    fn set_button_offset(&mut self, left_px: f64) {
        self.button_left = left_px;
    }

    fn has_control(&self, _size: SizeOption) -> bool {
        true
    }

    fn set_control_state(&mut self, size: SizeOption, state: ControlState) {
        self.controls[slot(size)] = state;
    }

    fn set_text(&mut self, text: &str) -> bool {
        self.text.clear();
        self.text.push_str(text);
        true
    }

    fn set_icon(&mut self, icon: &Icon) -> bool {
        self.icon = Some(icon.clone());
        true
    }

    fn style_variable(&self, name: &str) -> Option<String> {
        self.styles.get(name).map(str::to_string)
    }
}
