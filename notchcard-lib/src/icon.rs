//! The icon drawn for each size.
//!
//! Icons are kept as a list of simple shapes so that a host can either draw
//! them directly or ask for SVG markup.

use piet::kurbo::{Point, Rect, Size};
use piet::Color;
use svg::node::element::{Circle, Rectangle};
use svg::Document;

use crate::selector::SizeOption;
use crate::style::Paint;

/// The box every icon is drawn in.
pub const ICON_SIZE: Size = Size::new(36.0, 36.0);

#[derive(Debug, Clone)]
pub enum IconShape {
    Circle {
        center: Point,
        radius: f64,
        fill: Paint,
    },
    RoundedRect {
        rect: Rect,
        radius: f64,
        fill: Paint,
    },
}

#[derive(Debug, Clone)]
pub struct Icon {
    shapes: Vec<IconShape>,
}

fn rounded(x: f64, y: f64, width: f64, height: f64, radius: f64, fill: &Paint) -> IconShape {
    IconShape::RoundedRect {
        rect: Rect::from_origin_size((x, y), (width, height)),
        radius,
        fill: fill.clone(),
    }
}

impl Icon {
    /// The icon for `size`, filled with `accent`.
    pub fn for_size(size: SizeOption, accent: &Paint) -> Icon {
        let shapes = match size {
            // a pot, seen from the side
            SizeOption::TwentyFour => vec![
                rounded(6.0, 15.0, 24.0, 15.0, 2.5, accent),
                rounded(8.0, 11.0, 20.0, 5.0, 2.0, accent),
                rounded(15.0, 7.0, 6.0, 5.0, 2.0, accent),
            ],
            // a pan, seen from above
            SizeOption::Twenty => vec![
                IconShape::Circle {
                    center: Point::new(18.0, 18.0),
                    radius: 14.0,
                    fill: accent.clone(),
                },
                rounded(10.0, 10.0, 16.0, 16.0, 4.0, &Paint::solid(&Color::WHITE)),
            ],
        };
        Icon { shapes }
    }

    pub fn shapes(&self) -> &[IconShape] {
        &self.shapes
    }

    /// SVG markup for hosts that display icons as documents.
    pub fn to_svg(&self) -> String {
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, ICON_SIZE.width, ICON_SIZE.height))
            .set("xmlns", "http://www.w3.org/2000/svg");

        for shape in &self.shapes {
            document = match shape {
                IconShape::Circle {
                    center,
                    radius,
                    fill,
                } => document.add(
                    Circle::new()
                        .set("cx", center.x)
                        .set("cy", center.y)
                        .set("r", *radius)
                        .set("fill", fill.css()),
                ),
                IconShape::RoundedRect { rect, radius, fill } => document.add(
                    Rectangle::new()
                        .set("x", rect.x0)
                        .set("y", rect.y0)
                        .set("width", rect.width())
                        .set("height", rect.height())
                        .set("rx", *radius)
                        .set("fill", fill.css()),
                ),
            };
        }
        document.to_string()
    }
}
