//! An in-memory host for tests.

use std::collections::{BTreeSet, HashMap};

use piet::kurbo::Rect;

use crate::icon::Icon;
use crate::renderer::px_string;
use crate::selector::SizeOption;
use crate::viewport::{ControlState, ViewPort};

/// Models a page: elements are either present or not, controls carry a set
/// of class names, and every write is counted.
#[derive(Debug, Default)]
pub(crate) struct FakeViewPort {
    pub label: Option<Rect>,
    pub container: Option<Rect>,
    pub has_button_group: bool,
    pub button_left: Option<String>,
    pub has_surface: bool,
    pub has_path_element: bool,
    pub declared_width: Option<f64>,
    pub path: Option<String>,
    pub controls: HashMap<SizeOption, BTreeSet<&'static str>>,
    pub has_text: bool,
    pub text: Option<String>,
    pub has_icon: bool,
    pub icon: Option<String>,
    pub styles: HashMap<String, String>,
    pub mutations: usize,
    /// The kind of each write, in order.
    pub log: Vec<String>,
}

impl FakeViewPort {
    /// A complete card in a `container_width` wide container whose left edge
    /// is at x = 40, with the label ending `label_right` pixels into it.
    pub fn card(container_width: f64, label_right: f64) -> FakeViewPort {
        let left = 40.0;
        let mut controls = HashMap::new();
        for opt in &SizeOption::ALL {
            controls.insert(*opt, BTreeSet::new());
        }
        FakeViewPort {
            label: Some(Rect::new(left + 24.0, 120.0, left + label_right, 144.0)),
            container: Some(Rect::new(left, 100.0, left + container_width, 400.0)),
            has_button_group: true,
            has_surface: true,
            has_path_element: true,
            controls,
            has_text: true,
            has_icon: true,
            ..Default::default()
        }
    }

    pub fn set_style(&mut self, name: &str, value: &str) {
        self.styles.insert(name.to_string(), value.to_string());
    }

    pub fn remove_control(&mut self, size: SizeOption) {
        self.controls.remove(&size);
    }

    pub fn has_marker(&self, size: SizeOption, marker: &str) -> bool {
        self.controls
            .get(&size)
            .map(|classes| classes.contains(marker))
            .unwrap_or(false)
    }

    fn record(&mut self, kind: &str) {
        self.mutations += 1;
        self.log.push(kind.to_string());
    }
}

impl ViewPort for FakeViewPort {
    fn label_rect(&self) -> Option<Rect> {
        self.label
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn has_button_group(&self) -> bool {
        self.has_button_group
    }

    fn has_surface(&self) -> bool {
        self.has_surface
    }

    fn declared_view_width(&self) -> Option<f64> {
        self.declared_width
    }

    fn set_path(&mut self, data: &str) -> bool {
        if !self.has_path_element {
            return false;
        }
        self.path = Some(data.to_string());
        self.record("path");
        true
    }

    fn set_button_offset(&mut self, left_px: f64) {
        self.button_left = Some(px_string(left_px));
        self.record("offset");
    }

    fn has_control(&self, size: SizeOption) -> bool {
        self.controls.contains_key(&size)
    }

    fn set_control_state(&mut self, size: SizeOption, state: ControlState) {
        if let Some(classes) = self.controls.get_mut(&size) {
            classes.retain(|c| !["active", "expanded", "collapsed"].contains(c));
            classes.extend(state.markers());
        }
        self.record("control");
    }

    fn set_text(&mut self, text: &str) -> bool {
        if !self.has_text {
            return false;
        }
        self.text = Some(text.to_string());
        self.record("text");
        true
    }

    fn set_icon(&mut self, icon: &Icon) -> bool {
        if !self.has_icon {
            return false;
        }
        self.icon = Some(icon.to_svg());
        self.record("icon");
        true
    }

    fn style_variable(&self, name: &str) -> Option<String> {
        self.styles.get(name).cloned()
    }
}
