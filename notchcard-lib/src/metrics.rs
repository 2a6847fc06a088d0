//! Measurements read from the host on every update.

use piet::kurbo::Rect;

/// The box the card lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    pub width_px: f64,
}

/// Where the label ends, relative to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelMetrics {
    /// The label's right edge, measured from the container's left edge.
    pub right_edge_px: f64,
}

impl ContainerMetrics {
    pub fn from_rect(container: Rect) -> ContainerMetrics {
        ContainerMetrics {
            width_px: container.width(),
        }
    }
}

impl LabelMetrics {
    /// Both rects are expected in the same (viewport) coordinates.
    pub fn measure(label: Rect, container: Rect) -> LabelMetrics {
        LabelMetrics {
            right_edge_px: label.x1 - container.x0,
        }
    }

    /// Where the notch should begin if the label is followed by `inset` pixels.
    pub fn notch_start(&self, inset: f64) -> f64 {
        self.right_edge_px + inset
    }
}
