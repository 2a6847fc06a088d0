//! Error types.

use std::fmt;

/// The host elements the card depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Label,
    Container,
    ButtonGroup,
    Surface,
    /// One of the two size toggles.
    Control,
}

/// Errors that can occur while updating the card.
///
/// None of these are fatal; [`Card`] logs and swallows them.
///
/// [`Card`]: crate::Card
#[derive(Debug)]
pub enum CardError {
    /// A host element was not there.
    MissingCollaborator(Collaborator),
}

/// Errors loading a [`CardConfig`].
///
/// [`CardConfig`]: crate::CardConfig
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidColor(String),
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Collaborator::Label => "label",
            Collaborator::Container => "container",
            Collaborator::ButtonGroup => "button group",
            Collaborator::Surface => "drawing surface",
            Collaborator::Control => "size control",
        };
        f.write_str(name)
    }
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingCollaborator(which) => write!(f, "missing {}", which),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error loading config: '{}'", e),
            Self::Json(e) => write!(f, "config is not valid: '{}'", e),
            Self::InvalidColor(s) => write!(f, "config contains invalid color '{}'", s),
        }
    }
}

impl std::error::Error for CardError {}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(src: std::io::Error) -> ConfigError {
        ConfigError::Io(src)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(src: serde_json::Error) -> ConfigError {
        ConfigError::Json(src)
    }
}
