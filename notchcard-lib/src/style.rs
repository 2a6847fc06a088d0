//! Colours from the host's style variables.

use css_color_parser::Color as CssColor;
use piet::Color;

use crate::consts::ACCENT_VARIABLE;
use crate::viewport::ViewPort;

/// A fill, both as the host wrote it and as something we can draw.
///
/// Markup gets the host's own value untouched; native painting gets the
/// parsed colour.
#[derive(Debug, Clone)]
pub struct Paint {
    css: String,
    color: Color,
}

impl Paint {
    /// A paint for a colour we chose ourselves.
    pub fn solid(color: &Color) -> Paint {
        Paint {
            css: hex_string(color),
            color: color.clone(),
        }
    }

    /// The value to use in markup.
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}

/// Parse a CSS colour value, ignoring surrounding whitespace. Empty values are
/// treated as unset.
///
/// Accepts anything a style sheet might hold: hex, `rgb()`, `hsl()` and the
/// named colours.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<CssColor>() {
        Ok(CssColor { r, g, b, a }) => {
            let alpha = (a.max(0.0).min(1.0) * 255.0).round() as u8;
            Some(Color::rgba8(r, g, b, alpha))
        }
        Err(e) => {
            log::warn!("unusable color '{}': {:?}", value, e);
            None
        }
    }
}

/// The accent paint.
///
/// Any non-empty `--accent` is used as written; `fallback` only stands in when
/// the variable is unset or empty, or for native painting of a value we
/// cannot parse.
pub fn resolve_accent(vport: &impl ViewPort, fallback: &Color) -> Paint {
    let raw = match vport.style_variable(ACCENT_VARIABLE) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => return Paint::solid(fallback),
    };
    let color = parse_color(&raw).unwrap_or_else(|| fallback.clone());
    Paint { css: raw, color }
}

/// Format a colour as `#rrggbb`, or `#rrggbbaa` if it is not opaque.
pub fn hex_string(color: &Color) -> String {
    let rgba = color.as_rgba_u32();
    if rgba & 0xff == 0xff {
        format!("#{:06x}", rgba >> 8)
    } else {
        format!("#{:08x}", rgba)
    }
}
