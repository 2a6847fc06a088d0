//! 'View space' is the fixed coordinate space in which the card outline is
//! described.
//!
//! The surface that draws the outline stretches view space to the pixel size
//! of the container, so a point in view space only becomes a pixel position
//! once we know how wide the container currently is.

use piet::kurbo::{Affine, Size};

use crate::consts::{VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};

/// The logical extent of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// The box the top of the card is drawn in.
    pub const CARD_TOP: ViewBox = ViewBox {
        width: VIEW_BOX_WIDTH,
        height: VIEW_BOX_HEIGHT,
    };

    /// The card's view box with a width declared by the surface, if it
    /// declared a usable one.
    pub fn with_declared_width(declared: Option<f64>) -> ViewBox {
        match declared {
            Some(width) if width.is_finite() && width > 0.0 => ViewBox {
                width,
                ..ViewBox::CARD_TOP
            },
            Some(width) => {
                log::debug!("ignoring declared view width {}", width);
                ViewBox::CARD_TOP
            }
            None => ViewBox::CARD_TOP,
        }
    }

    /// Convert a horizontal pixel offset to view space.
    pub fn x_from_pixels(&self, px: f64, container_width: f64) -> f64 {
        (px / container_width) * self.width
    }

    /// Convert a horizontal view space coordinate to pixels.
    pub fn x_to_pixels(&self, x: f64, container_width: f64) -> f64 {
        (x / self.width) * container_width
    }

    /// The transform that stretches this box over a surface of the given size.
    ///
    /// This does not preserve aspect ratio; the notch moves with the width
    /// while depths stay fixed relative to the height.
    pub fn affine(&self, surface: Size) -> Affine {
        let x_scale = surface.width / self.width;
        let y_scale = surface.height / self.height;
        Affine::new([x_scale, 0.0, 0.0, y_scale, 0.0, 0.0])
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        ViewBox::CARD_TOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use piet::kurbo::Point;

    #[test]
    fn pixels_round_trip() {
        let vbox = ViewBox::CARD_TOP;
        let x = vbox.x_from_pixels(200.0, 500.0);
        assert_eq!(x, 200.0);
        assert_eq!(vbox.x_from_pixels(150.0, 1000.0), 75.0);
        assert_eq!(vbox.x_to_pixels(75.0, 1000.0), 150.0);
    }

    #[test]
    fn declared_width_must_be_positive() {
        assert_eq!(ViewBox::with_declared_width(None).width, 500.0);
        assert_eq!(ViewBox::with_declared_width(Some(0.0)).width, 500.0);
        assert_eq!(ViewBox::with_declared_width(Some(f64::NAN)).width, 500.0);
        assert_eq!(ViewBox::with_declared_width(Some(250.0)).width, 250.0);
    }

    #[test]
    fn affine_stretches_width_only() {
        let affine = ViewBox::CARD_TOP.affine(Size::new(1000.0, 80.0));
        assert_eq!(affine * Point::new(500.0, 80.0), Point::new(1000.0, 80.0));
        assert_eq!(affine * Point::new(250.0, 12.0), Point::new(500.0, 12.0));
    }
}
