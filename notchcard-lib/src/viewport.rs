//! The boundary between the card and whatever is actually drawing it.

use piet::kurbo::Rect;

use crate::icon::Icon;
use crate::selector::SizeOption;

/// Visual state markers for a toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlState {
    pub active: bool,
    pub expanded: bool,
    pub collapsed: bool,
}

impl ControlState {
    /// The selected control: active, expanded, not collapsed.
    pub const SELECTED: ControlState = ControlState {
        active: true,
        expanded: true,
        collapsed: false,
    };

    /// The other control: collapsed and nothing else.
    pub const UNSELECTED: ControlState = ControlState {
        active: false,
        expanded: false,
        collapsed: true,
    };

    /// The names of the markers that are set, for hosts that track state as
    /// a set of class names.
    pub fn markers(self) -> impl Iterator<Item = &'static str> {
        let ControlState {
            active,
            expanded,
            collapsed,
        } = self;
        [
            ("active", active),
            ("expanded", expanded),
            ("collapsed", collapsed),
        ]
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .into_iter()
    }
}

/// Everything the card needs from its host.
///
/// Queries return `None` or `false` when the host has no such element; the
/// card treats that as a reason to do nothing, never as an error to report.
pub trait ViewPort {
    /// The label's bounding rect, in the same coordinates as the container's.
    fn label_rect(&self) -> Option<Rect>;
    fn container_rect(&self) -> Option<Rect>;
    fn has_button_group(&self) -> bool;
    /// Whether there is a surface to draw the outline on.
    fn has_surface(&self) -> bool;
    /// The logical width the surface maps onto the container, if it declares one.
    fn declared_view_width(&self) -> Option<f64>;

    /// Apply outline path data to the surface.
    ///
    /// Returns `false` if the surface has nowhere to put it.
    fn set_path(&mut self, data: &str) -> bool;
    /// Move the button group to `left_px` from the container's left edge.
    fn set_button_offset(&mut self, left_px: f64);

    fn has_control(&self, size: SizeOption) -> bool;
    fn set_control_state(&mut self, size: SizeOption, state: ControlState);
    /// Returns `false` if there is no text region.
    fn set_text(&mut self, text: &str) -> bool;
    /// Returns `false` if there is no icon region.
    fn set_icon(&mut self, icon: &Icon) -> bool;

    /// Look up a global style variable such as `--accent`.
    fn style_variable(&self, name: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        let selected = ControlState::SELECTED.markers().collect::<Vec<_>>();
        assert_eq!(selected, vec!["active", "expanded"]);
        let unselected = ControlState::UNSELECTED.markers().collect::<Vec<_>>();
        assert_eq!(unselected, vec!["collapsed"]);
    }
}
