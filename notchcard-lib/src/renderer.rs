//! Keeping the outline and the buttons in step with the host's layout.

use crate::config::CardConfig;
use crate::consts::{BUTTON_NUDGE_PX, LABEL_INSET_PX};
use crate::design_space::ViewBox;
use crate::error::{CardError, Collaborator};
use crate::metrics::{ContainerMetrics, LabelMetrics};
use crate::notch::{compute_notch_path, NotchPath};
use crate::path::Num;
use crate::viewport::ViewPort;

/// Where the button group ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonPlacement {
    /// Inside the notch, this many pixels from the container's left edge.
    InNotch(f64),
    /// The notch could not be mapped back to pixels, so the buttons sit at
    /// the raw estimate taken from the label.
    Fallback(f64),
}

impl ButtonPlacement {
    pub fn left_px(self) -> f64 {
        match self {
            ButtonPlacement::InNotch(px) | ButtonPlacement::Fallback(px) => px,
        }
    }

    /// The offset as a CSS length, such as `"184px"`.
    pub fn to_css(self) -> String {
        px_string(self.left_px())
    }
}

/// Format a pixel length the way a style attribute expects it.
pub fn px_string(px: f64) -> String {
    format!("{}px", Num(px))
}

/// The result of a successful update.
#[derive(Debug, Clone)]
pub struct NotchUpdate {
    pub path: NotchPath,
    /// `false` if the surface had no element to take the path.
    pub path_applied: bool,
    pub placement: ButtonPlacement,
}

/// Computes the notch from the label's position and applies it.
#[derive(Debug, Clone)]
pub struct NotchRenderer {
    label_inset_px: f64,
    button_nudge_px: f64,
}

impl NotchRenderer {
    pub fn new(label_inset_px: f64, button_nudge_px: f64) -> NotchRenderer {
        NotchRenderer {
            label_inset_px,
            button_nudge_px,
        }
    }

    pub fn from_config(config: &CardConfig) -> NotchRenderer {
        NotchRenderer::new(config.label_inset_px, config.button_nudge_px)
    }

    /// Measure the label and container, redraw the outline, and move the
    /// buttons into the notch.
    ///
    /// If the host is missing any of the elements involved nothing is
    /// changed. Calling this again with the same layout leaves the host in
    /// the same state.
    pub fn update_notch_and_buttons(
        &self,
        vport: &mut impl ViewPort,
    ) -> Result<NotchUpdate, CardError> {
        let container_rect = vport
            .container_rect()
            .ok_or(CardError::MissingCollaborator(Collaborator::Container))?;
        let label = vport
            .label_rect()
            .ok_or(CardError::MissingCollaborator(Collaborator::Label))?;
        if !vport.has_button_group() {
            return Err(CardError::MissingCollaborator(Collaborator::ButtonGroup));
        }
        if !vport.has_surface() {
            return Err(CardError::MissingCollaborator(Collaborator::Surface));
        }

        let container = ContainerMetrics::from_rect(container_rect);
        let fallback_left =
            LabelMetrics::measure(label, container_rect).notch_start(self.label_inset_px);
        let path = compute_notch_path(container.width_px, fallback_left);

        let path_applied = vport.set_path(&path.to_string());
        if !path_applied {
            log::debug!("surface has no path element, outline not applied");
        }

        let surface = ViewBox::with_declared_width(vport.declared_view_width());
        let placement = self.place_buttons(&path, surface, container.width_px, fallback_left);
        vport.set_button_offset(placement.left_px());

        Ok(NotchUpdate {
            path,
            path_applied,
            placement,
        })
    }

    fn place_buttons(
        &self,
        path: &NotchPath,
        surface: ViewBox,
        container_width: f64,
        fallback_left: f64,
    ) -> ButtonPlacement {
        // measured from the notch wall, not from where the top edge ends
        let notch_px = path.geometry().notch_x_pixels(surface, container_width);
        if notch_px.is_finite() {
            ButtonPlacement::InNotch((notch_px + self.button_nudge_px).round().max(0.0))
        } else {
            log::debug!(
                "notch at {} does not map to pixels for width {}, using {}",
                path.geometry().notch_x,
                container_width,
                fallback_left
            );
            ButtonPlacement::Fallback(fallback_left)
        }
    }
}

impl Default for NotchRenderer {
    fn default() -> Self {
        NotchRenderer::new(LABEL_INSET_PX, BUTTON_NUDGE_PX)
    }
}
