//! Loading style variables from files.
//!
//! A style file declares named values, the way a page declares CSS custom
//! properties on its root element. Hosts look values up by name, and can
//! optionally watch the file and reload it when it changes.
//!
//! ## File format
//!
//! Each non-blank line holds one variable: a name starting with `--`, a
//! colon, and a value. A trailing `;` is allowed and ignored, as is anything
//! after a `//`.
//!
//! ## Example file
//!
//! ```text
//! // brand colours
//! --accent:       #5c3d52;
//! --card-radius:  12
//! ```
//!
//! ## Live reloading
//!
//! If you would like the host to pick up edits to the file, enable the
//! `notify` feature of this crate and use a [`StyleWatcher`].

mod parse;
#[cfg(feature = "notify")]
mod watch;

#[cfg(feature = "notify")]
pub use watch::StyleWatcher;

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// A set of style variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    vars: HashMap<String, String>,
}

impl StyleSheet {
    pub fn new() -> StyleSheet {
        StyleSheet::default()
    }

    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<StyleSheet, StyleLoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let sheet = contents.parse::<StyleSheet>()?;
        log::debug!("loaded {} style variables from {:?}", sheet.len(), path);
        Ok(sheet)
    }

    /// The raw value of `name`, such as `--accent`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromStr for StyleSheet {
    type Err = StyleLoadError;

    fn from_str(s: &str) -> Result<StyleSheet, StyleLoadError> {
        let mut vars = HashMap::new();
        for item in parse::iter_items(s) {
            let (name, val) = item?;
            if vars.insert(name.to_string(), val.to_string()).is_some() {
                log::warn!("style variable '{}' declared more than once", name);
            }
        }
        Ok(StyleSheet { vars })
    }
}

/// A type for errors that occur when loading style variables.
#[derive(Debug)]
pub enum StyleLoadError {
    IoError(std::io::Error),
    ParseLineError(String),
    #[cfg(feature = "notify")]
    WatchError(notify::Error),
}

impl std::fmt::Display for StyleLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::IoError(err) => write!(f, "io error loading styles: '{}'", err),
            Self::ParseLineError(s) => {
                write!(f, "Style file contained malformed line: '{}'", s.escape_debug())
            }
            #[cfg(feature = "notify")]
            Self::WatchError(e) => write!(f, "failed to watch style file: '{}'", e),
        }
    }
}

impl std::error::Error for StyleLoadError {}

impl From<std::io::Error> for StyleLoadError {
    fn from(src: std::io::Error) -> StyleLoadError {
        StyleLoadError::IoError(src)
    }
}

#[cfg(feature = "notify")]
impl From<notify::Error> for StyleLoadError {
    fn from(src: notify::Error) -> StyleLoadError {
        StyleLoadError::WatchError(src)
    }
}
