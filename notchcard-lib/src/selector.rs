//! The two size toggles.

use std::fmt;
use std::str::FromStr;

use piet::Color;

use crate::error::{CardError, Collaborator};
use crate::icon::Icon;
use crate::style;
use crate::viewport::{ControlState, ViewPort};

/// One of the two sizes the card can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeOption {
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "24")]
    TwentyFour,
}

/// Returned when parsing a size that is not `"20"` or `"24"`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSize(pub String);

impl SizeOption {
    pub const ALL: [SizeOption; 2] = [SizeOption::Twenty, SizeOption::TwentyFour];

    pub fn as_str(self) -> &'static str {
        match self {
            SizeOption::Twenty => "20",
            SizeOption::TwentyFour => "24",
        }
    }

    /// The option that is not this one.
    pub fn other(self) -> SizeOption {
        match self {
            SizeOption::Twenty => SizeOption::TwentyFour,
            SizeOption::TwentyFour => SizeOption::Twenty,
        }
    }

    /// The caption for this option's button.
    pub fn caption(self) -> &'static str {
        match self {
            SizeOption::Twenty => "20 cm",
            SizeOption::TwentyFour => "24 cm",
        }
    }

    /// The text shown in the card body while this option is selected.
    pub fn description(self) -> &'static str {
        match self {
            SizeOption::Twenty => {
                "Dummy content for 20 cm: Great for quick bites, omelettes, and snacks."
            }
            SizeOption::TwentyFour => {
                "Dummy content for 24 cm: Perfect for pancakes, eggs, and single-serve meals."
            }
        }
    }
}

impl Default for SizeOption {
    fn default() -> Self {
        SizeOption::TwentyFour
    }
}

impl FromStr for SizeOption {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "20" => Ok(SizeOption::Twenty),
            "24" => Ok(SizeOption::TwentyFour),
            other => Err(UnknownSize(other.to_string())),
        }
    }
}

impl fmt::Display for SizeOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown size '{}', expected '20' or '24'", self.0)
    }
}

impl std::error::Error for UnknownSize {}

/// Switches the card between its two sizes.
///
/// This owns no state of its own: which option is active lives on the
/// controls, and in [`CardState`].
///
/// [`CardState`]: crate::CardState
#[derive(Debug, Clone)]
pub struct SizeSelector {
    fallback_accent: Color,
}

impl SizeSelector {
    /// `fallback_accent` is used when the host has no usable `--accent`.
    pub fn new(fallback_accent: Color) -> SizeSelector {
        SizeSelector { fallback_accent }
    }

    /// Make `size` the active option.
    ///
    /// Both controls must exist. The text and icon regions are optional;
    /// whichever of them is missing is skipped.
    pub fn set_active_size(
        &self,
        vport: &mut impl ViewPort,
        size: SizeOption,
    ) -> Result<(), CardError> {
        if !SizeOption::ALL.iter().all(|opt| vport.has_control(*opt)) {
            return Err(CardError::MissingCollaborator(Collaborator::Control));
        }

        vport.set_control_state(size, ControlState::SELECTED);
        vport.set_control_state(size.other(), ControlState::UNSELECTED);

        if !vport.set_text(size.description()) {
            log::debug!("no text region for size {}", size);
        }

        let accent = style::resolve_accent(&*vport, &self.fallback_accent);
        let icon = Icon::for_size(size, &accent);
        if !vport.set_icon(&icon) {
            log::debug!("no icon region for size {}", size);
        }
        Ok(())
    }
}
