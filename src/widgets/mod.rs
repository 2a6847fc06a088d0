//! Custom widgets.

mod card;

pub use card::CardWidget;
