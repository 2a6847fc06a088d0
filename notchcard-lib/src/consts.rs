//! shared constants

use piet::Color;

/// Width of the logical space the card outline is written in.
pub const VIEW_BOX_WIDTH: f64 = 500.0;
/// Height of the logical space; the outline ends on this line.
pub const VIEW_BOX_HEIGHT: f64 = 80.0;

/// Radius of the rounded corners where the top edge meets the notch.
pub const CORNER_RADIUS: f64 = 12.0;

/// Gap between the right edge of the label and the start of the notch, in pixels.
pub const LABEL_INSET_PX: f64 = 24.0;
/// Extra pixels that push the buttons from the notch wall into the notch.
pub const BUTTON_NUDGE_PX: f64 = 20.0;

/// The style variable that holds the accent colour.
pub const ACCENT_VARIABLE: &str = "--accent";
/// Used when the accent style variable is unset or unusable.
pub const DEFAULT_ACCENT: Color = Color::rgb8(0x5c, 0x3d, 0x52);

/// Fixed points of the outline, in logical units.
///
/// Only the notch position moves; everything here is tied to the 500 unit width.
pub(crate) mod outline {
    /// x where the top edge starts, after the top-left corner.
    pub const TOP_LEFT_START: f64 = 16.0;
    /// y of the bottom of the notch wall, before it curves out.
    pub const NOTCH_WALL_BOTTOM: f64 = 48.0;
    /// y of the notch floor.
    pub const NOTCH_FLOOR: f64 = 64.0;
    /// x where the notch floor ends and the top-right corner begins.
    pub const SHOULDER_X: f64 = 484.0;
    /// y where the left edge ends and the top-left corner begins.
    pub const LEFT_EDGE_TOP: f64 = 16.0;
}
