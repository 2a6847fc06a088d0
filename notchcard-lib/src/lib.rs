//! The core of a card whose top edge is cut away around its label.
//!
//! The outline is generated in a fixed logical space and handed to the host
//! through the [`ViewPort`] trait, which is the only place this crate touches
//! a real UI. Hosts forward their load, resize, and click events to a
//! [`Card`].

#[macro_use]
extern crate serde_derive;

mod card;
mod config;
mod design_space;
mod error;
mod icon;
mod metrics;
mod notch;
mod path;
mod renderer;
mod selector;
mod style;
mod viewport;

pub mod consts;

#[cfg(test)]
mod fake;

pub use card::{Card, CardEvent, CardState};
pub use config::CardConfig;
pub use design_space::ViewBox;
pub use error::{CardError, Collaborator, ConfigError};
pub use icon::{Icon, IconShape, ICON_SIZE};
pub use metrics::{ContainerMetrics, LabelMetrics};
pub use notch::{compute_notch_path, NotchGeometry, NotchPath};
pub use path::{PathCommand, PathData, PathParseError};
pub use renderer::{px_string, ButtonPlacement, NotchRenderer, NotchUpdate};
pub use selector::{SizeOption, SizeSelector, UnknownSize};
pub use style::{hex_string, parse_color, resolve_accent, Paint};
pub use viewport::{ControlState, ViewPort};
