//! The card as a whole: owns the page state and routes host events to the
//! renderer and the selector.

use crate::config::CardConfig;
use crate::error::ConfigError;
use crate::renderer::NotchRenderer;
use crate::selector::{SizeOption, SizeSelector};
use crate::viewport::ViewPort;

/// Things the host tells the card about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    /// The host has finished building the card's elements.
    Load,
    /// The host's size changed. Every resize triggers a full update.
    Resize,
    /// One of the size controls was clicked.
    Select(SizeOption),
}

/// What the card last applied to its host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardState {
    pub loaded: bool,
    /// `true` if both size controls were present at load, so clicks reach us.
    pub listening: bool,
    pub active_size: Option<SizeOption>,
    /// The last path data applied to the surface.
    pub path: Option<String>,
    /// The last button offset, as a CSS length.
    pub button_offset: Option<String>,
}

pub struct Card {
    renderer: NotchRenderer,
    selector: SizeSelector,
    default_size: SizeOption,
    state: CardState,
}

impl Card {
    pub fn new(config: &CardConfig) -> Result<Card, ConfigError> {
        Ok(Card {
            renderer: NotchRenderer::from_config(config),
            selector: SizeSelector::new(config.accent_color()?),
            default_size: config.default_size,
            state: CardState::default(),
        })
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    /// Handle an event from the host.
    ///
    /// This never fails; anything missing from the host is logged and skipped.
    pub fn handle_event(&mut self, vport: &mut impl ViewPort, event: CardEvent) {
        match event {
            CardEvent::Load if !self.state.loaded => self.load(vport),
            CardEvent::Resize if self.state.loaded => self.update_geometry(vport),
            CardEvent::Select(size) if self.state.listening => self.select(vport, size),
            other => log::debug!("ignoring {:?}", other),
        }
    }

    // geometry first, then listeners, then the default size
    fn load(&mut self, vport: &mut impl ViewPort) {
        self.update_geometry(vport);
        self.state.listening = SizeOption::ALL.iter().all(|opt| vport.has_control(*opt));
        if !self.state.listening {
            log::debug!("size controls missing, not listening for clicks");
        }
        self.state.loaded = true;
        self.select(vport, self.default_size);
    }

    fn update_geometry(&mut self, vport: &mut impl ViewPort) {
        match self.renderer.update_notch_and_buttons(vport) {
            Ok(update) => {
                if update.path_applied {
                    self.state.path = Some(update.path.to_string());
                }
                self.state.button_offset = Some(update.placement.to_css());
            }
            Err(e) => log::debug!("skipping notch update: {}", e),
        }
    }

    fn select(&mut self, vport: &mut impl ViewPort, size: SizeOption) {
        match self.selector.set_active_size(vport, size) {
            Ok(()) => self.state.active_size = Some(size),
            Err(e) => log::debug!("skipping size selection: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeViewPort;
    use piet::kurbo::Rect;

    fn card() -> Card {
        Card::new(&CardConfig::default()).unwrap()
    }

    #[test]
    fn load_draws_then_selects_default() {
        let mut card = card();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        card.handle_event(&mut vport, CardEvent::Load);

        let state = card.state();
        assert!(state.loaded);
        assert!(state.listening);
        assert_eq!(state.active_size, Some(SizeOption::TwentyFour));
        assert_eq!(state.button_offset.as_deref(), Some("220px"));
        assert_eq!(state.path, vport.path);
        assert!(vport.has_marker(SizeOption::TwentyFour, "active"));
        assert!(vport.has_marker(SizeOption::Twenty, "collapsed"));
        // the outline goes on before any control is touched
        assert_eq!(vport.log.first().map(String::as_str), Some("path"));
    }

    #[test]
    fn events_before_load_are_ignored() {
        let mut card = card();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        card.handle_event(&mut vport, CardEvent::Resize);
        card.handle_event(&mut vport, CardEvent::Select(SizeOption::Twenty));
        assert_eq!(vport.mutations, 0);
        assert_eq!(card.state(), &CardState::default());
    }

    #[test]
    fn resize_follows_the_container() {
        let mut card = card();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        card.handle_event(&mut vport, CardEvent::Load);

        vport.container = Some(Rect::new(40.0, 100.0, 1040.0, 400.0));
        card.handle_event(&mut vport, CardEvent::Resize);
        // notch stays 200px in, which is 100 units in a 1000px container
        assert!(vport.path.as_deref().unwrap().starts_with("M16 0 H88 "));
        assert_eq!(vport.button_left.as_deref(), Some("220px"));
        assert_eq!(card.state().active_size, Some(SizeOption::TwentyFour));
    }

    #[test]
    fn clicks_switch_sizes() {
        let mut card = card();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        card.handle_event(&mut vport, CardEvent::Load);
        card.handle_event(&mut vport, CardEvent::Select(SizeOption::Twenty));

        assert_eq!(card.state().active_size, Some(SizeOption::Twenty));
        assert!(vport.text.as_deref().unwrap().contains("20 cm"));
        assert!(vport.icon.as_deref().unwrap().contains("<circle"));

        card.handle_event(&mut vport, CardEvent::Select(SizeOption::TwentyFour));
        assert_eq!(card.state().active_size, Some(SizeOption::TwentyFour));
        assert!(!vport.has_marker(SizeOption::Twenty, "active"));
    }

    #[test]
    fn missing_label_still_selects() {
        let mut card = card();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        vport.label = None;
        card.handle_event(&mut vport, CardEvent::Load);

        assert!(vport.path.is_none());
        assert!(vport.button_left.is_none());
        assert!(card.state().path.is_none());
        assert_eq!(card.state().active_size, Some(SizeOption::TwentyFour));
    }

    #[test]
    fn no_controls_no_listening() {
        let mut card = card();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        vport.remove_control(SizeOption::TwentyFour);
        card.handle_event(&mut vport, CardEvent::Load);
        assert!(!card.state().listening);
        assert_eq!(card.state().active_size, None);

        let before = vport.mutations;
        card.handle_event(&mut vport, CardEvent::Select(SizeOption::Twenty));
        assert_eq!(vport.mutations, before);
    }

    #[test]
    fn second_load_is_ignored() {
        let mut card = card();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        card.handle_event(&mut vport, CardEvent::Load);
        card.handle_event(&mut vport, CardEvent::Select(SizeOption::Twenty));
        card.handle_event(&mut vport, CardEvent::Load);
        assert_eq!(card.state().active_size, Some(SizeOption::Twenty));
    }

    #[test]
    fn configured_default_size() {
        let config = CardConfig {
            default_size: SizeOption::Twenty,
            ..CardConfig::default()
        };
        let mut card = Card::new(&config).unwrap();
        let mut vport = FakeViewPort::card(500.0, 176.0);
        card.handle_event(&mut vport, CardEvent::Load);
        assert!(vport.has_marker(SizeOption::Twenty, "active"));
    }
}
