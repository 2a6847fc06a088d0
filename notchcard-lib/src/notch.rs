//! The shape of the top of the card.
//!
//! The outline is an 'L': full height to the left of the notch, where the
//! label sits, and a thin strip along the bottom to its right, with the two
//! size buttons sitting in the space above that strip.

use std::fmt;

use piet::kurbo::BezPath;

use crate::consts::{outline::*, CORNER_RADIUS};
use crate::design_space::ViewBox;
use crate::path::PathData;

/// The cut-out, described in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchGeometry {
    pub view_box: ViewBox,
    pub corner_radius: f64,
    /// The x position of the notch wall.
    pub notch_x: f64,
}

/// A generated outline and the geometry it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NotchPath {
    data: PathData,
    geometry: NotchGeometry,
}

impl NotchGeometry {
    /// Place the notch wall `fallback_left_px` pixels into a container that is
    /// `container_width_px` wide.
    pub fn new(container_width_px: f64, fallback_left_px: f64) -> NotchGeometry {
        let view_box = ViewBox::CARD_TOP;
        let notch_x = view_box.x_from_pixels(fallback_left_px, container_width_px);
        NotchGeometry {
            view_box,
            corner_radius: CORNER_RADIUS,
            notch_x,
        }
    }

    /// Where the top edge ends and the curve into the notch starts.
    pub fn top_edge_end(&self) -> f64 {
        self.notch_x - self.corner_radius
    }

    /// `false` if the notch wall is too close to the left edge to fit its
    /// corner. The outline is still generated, but it folds over itself.
    pub fn has_room_for_corner(&self) -> bool {
        self.notch_x >= self.corner_radius
    }

    /// The notch wall in pixels, given the width the surface actually uses
    /// for its view box.
    pub fn notch_x_pixels(&self, surface: ViewBox, container_width_px: f64) -> f64 {
        surface.x_to_pixels(self.notch_x, container_width_px)
    }

    fn outline(&self) -> PathData {
        let n = self.notch_x;
        let r = self.corner_radius;
        let h = self.top_edge_end();
        let right = self.view_box.width;
        let bottom = self.view_box.height;

        let mut data = PathData::new();
        data.move_to((TOP_LEFT_START, 0.0));
        data.horizontal_to(h);
        // down into the notch
        data.curve_to((h + 8.0, 0.0), (n, 8.0), (n, r));
        data.vertical_to(NOTCH_WALL_BOTTOM);
        // and back out along the floor
        data.curve_to((n, 56.0), (n + 8.0, NOTCH_FLOOR), (n + r, NOTCH_FLOOR));
        data.horizontal_to(SHOULDER_X);
        data.curve_to((492.0, NOTCH_FLOOR), (right, 72.0), (right, bottom));
        data.horizontal_to(0.0);
        data.vertical_to(LEFT_EDGE_TOP);
        data.curve_to((0.0, 7.0), (7.0, 0.0), (TOP_LEFT_START, 0.0));
        data.close();
        data
    }
}

/// Build the card's top outline for a container of the given width, with the
/// notch wall `fallback_left_px` pixels from its left edge.
///
/// This never fails; inputs outside `0..=container_width_px` produce an
/// outline that overlaps itself.
pub fn compute_notch_path(container_width_px: f64, fallback_left_px: f64) -> NotchPath {
    let geometry = NotchGeometry::new(container_width_px, fallback_left_px);
    if !geometry.has_room_for_corner() {
        log::warn!(
            "notch at {} leaves no room for a {} unit corner",
            geometry.notch_x,
            geometry.corner_radius
        );
    }
    NotchPath {
        data: geometry.outline(),
        geometry,
    }
}

impl NotchPath {
    pub fn geometry(&self) -> &NotchGeometry {
        &self.geometry
    }

    pub fn data(&self) -> &PathData {
        &self.data
    }

    /// The outline in view space, for surfaces that draw with kurbo.
    pub fn to_bezpath(&self) -> BezPath {
        self.data.to_bezpath()
    }
}

impl fmt::Display for NotchPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use piet::kurbo::Shape;

    fn count(path: &str, letter: char) -> usize {
        path.chars().filter(|c| *c == letter).count()
    }

    #[test]
    fn outline_for_a_500px_container() {
        let path = compute_notch_path(500.0, 200.0);
        assert_eq!(path.geometry().notch_x, 200.0);
        assert_eq!(
            path.to_string(),
            "M16 0 H188 C196 0 200 8 200 12 V48 C200 56 208 64 212 64 \
             H484 C492 64 500 72 500 80 H0 V16 C0 7 7 0 16 0 Z"
        );
    }

    #[test]
    fn notch_scales_with_container() {
        let path = compute_notch_path(1024.0, 256.0);
        assert_eq!(path.geometry().notch_x, 125.0);
        assert_eq!(path.data().first_horizontal(), Some(113.0));
        assert!(path.to_string().contains("C121 0 125 8 125 12"));
    }

    #[test]
    fn fractional_positions_are_kept() {
        let path = compute_notch_path(512.0, 101.0);
        assert_eq!(path.geometry().notch_x, 98.6328125);
        assert!(path.to_string().starts_with("M16 0 H86.6328125 C94.6328125 0"));
    }

    #[test]
    fn command_shape() {
        for &(width, left) in &[(500.0, 200.0), (320.0, 0.0), (1280.0, 1280.0), (640.0, 333.3)] {
            let path = compute_notch_path(width, left).to_string();
            assert_eq!(count(&path, 'M'), 1, "{}", path);
            assert_eq!(count(&path, 'H'), 3, "{}", path);
            assert_eq!(count(&path, 'V'), 2, "{}", path);
            assert_eq!(count(&path, 'C'), 4, "{}", path);
            assert!(path.ends_with('Z'));

            // the notch itself: top edge, curve down, wall, curve out
            let commands = compute_notch_path(width, left).data().commands().to_vec();
            assert!(matches!(commands[1], PathCommand::HorizontalTo(_)));
            assert!(matches!(commands[2], PathCommand::CurveTo(..)));
            assert!(matches!(commands[3], PathCommand::VerticalTo(_)));
            assert!(matches!(commands[4], PathCommand::CurveTo(..)));
        }
    }

    #[test]
    fn same_inputs_same_outline() {
        let one = compute_notch_path(733.0, 219.5).to_string();
        let two = compute_notch_path(733.0, 219.5).to_string();
        assert_eq!(one, two);
    }

    #[test]
    fn first_horizontal_recovers_the_notch() {
        for &(width, left) in &[(500.0, 200.0), (375.0, 181.0), (1440.0, 212.0), (999.0, 998.0)] {
            let path = compute_notch_path(width, left);
            let h = path.data().first_horizontal().unwrap();
            let recovered = ((h + CORNER_RADIUS) / 500.0) * width;
            assert!((recovered - left).abs() < 1e-9, "{} != {}", recovered, left);
        }
    }

    #[test]
    fn formatted_outline_parses_back() {
        // coordinates here are exact in single precision, which the parser reads
        let path = compute_notch_path(512.0, 101.0);
        let reparsed: PathData = path.to_string().parse().unwrap();
        assert_eq!(&reparsed, path.data());
    }

    #[test]
    fn crowded_notch_still_builds() {
        let geom = NotchGeometry::new(500.0, 5.0);
        assert!(!geom.has_room_for_corner());
        let path = compute_notch_path(500.0, 5.0).to_string();
        assert!(path.starts_with("M16 0 H-7 "));
    }

    #[test]
    fn bezpath_fills_the_view_box() {
        let bbox = compute_notch_path(500.0, 200.0).to_bezpath().bounding_box();
        assert!(bbox.x0.abs() < 1e-9);
        assert!(bbox.y0.abs() < 1e-9);
        assert!((bbox.x1 - 500.0).abs() < 1e-9);
        assert!((bbox.y1 - 80.0).abs() < 1e-9);
    }
}
