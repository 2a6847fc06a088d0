//! A window showing a notched card.

mod surface;
mod theme;
mod widgets;

use druid::widget::WidgetExt;
use druid::{AppLauncher, LocalizedString, Size, Widget, WindowDesc};

use notchcard_lib::consts::DEFAULT_ACCENT;
use notchcard_lib::{Card, CardConfig};
use style_loader::{StyleSheet, StyleWatcher};

use surface::CardSurface;
use widgets::CardWidget;

/// Set this to the path of a JSON file to change the card's settings.
const CONFIG_ENV_VAR: &str = "NOTCHCARD_CONFIG";
const CARD_LABEL: &str = "Cast iron pan";
const WINDOW_PADDING: f64 = 24.0;

fn main() {
    let config = load_config();
    let (styles, watcher) = load_styles(&config);
    let accent = config.accent_color().unwrap_or(DEFAULT_ACCENT);
    let card = match Card::new(&config) {
        Ok(card) => card,
        Err(e) => {
            eprintln!("Invalid card settings: '{}'", e);
            std::process::exit(1);
        }
    };

    let main_window = WindowDesc::new(move || make_ui(card, styles, accent, watcher))
        .title(LocalizedString::new("Notched card").with_placeholder("Notched card"))
        .window_size(Size::new(640.0, 320.0));

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| theme::configure_env(env))
        .use_simple_logger()
        .launch(())
        .expect("launch failed");
}

fn make_ui(
    card: Card,
    styles: StyleSheet,
    accent: druid::Color,
    watcher: Option<StyleWatcher>,
) -> impl Widget<()> {
    CardWidget::new(card, CardSurface::new(styles), accent, CARD_LABEL, watcher)
        .padding(WINDOW_PADDING)
}

/// If `NOTCHCARD_CONFIG` is set, load the settings it points to, otherwise
/// use the defaults.
fn load_config() -> CardConfig {
    let path = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => path,
        None => return CardConfig::default(),
    };
    match CardConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load settings from {:?}.\nError:'{}'", path, e);
            std::process::exit(1);
        }
    }
}

/// Load the style file named in the settings, and watch it for changes.
///
/// A missing or broken style file is not fatal; the card just falls back to
/// its default accent.
fn load_styles(config: &CardConfig) -> (StyleSheet, Option<StyleWatcher>) {
    let path = match config.style_path.as_ref() {
        Some(path) => path,
        None => return (StyleSheet::new(), None),
    };
    let styles = StyleSheet::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load styles from {:?}: '{}'", path, e);
        StyleSheet::new()
    });
    let watcher = match StyleWatcher::new(path) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            eprintln!("Not watching {:?} for changes: '{}'", path, e);
            None
        }
    };
    (styles, watcher)
}
