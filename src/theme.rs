//! Colors and other things that we like.

use druid::{Color, Env, FontDescriptor, FontFamily, Key};

pub const CARD_BACKGROUND: Key<Color> = Key::new("notchcard.card-background");
pub const LABEL_TEXT_COLOR: Key<Color> = Key::new("notchcard.label-text-color");
pub const BODY_TEXT_COLOR: Key<Color> = Key::new("notchcard.body-text-color");
pub const BUTTON_BACKGROUND: Key<Color> = Key::new("notchcard.button-background");
/// Caption colour on the active button, which is filled with the accent.
pub const ACTIVE_CAPTION_COLOR: Key<Color> = Key::new("notchcard.active-caption-color");
pub const CAPTION_COLOR: Key<Color> = Key::new("notchcard.caption-color");

pub const LABEL_FONT: Key<FontDescriptor> = Key::new("notchcard.label-font");
pub const BODY_FONT: Key<FontDescriptor> = Key::new("notchcard.body-font");
pub const CAPTION_FONT: Key<FontDescriptor> = Key::new("notchcard.caption-font");

pub mod colors {
    use druid::Color;

    pub const PAPER: Color = Color::rgb8(0xf4, 0xef, 0xea);
    pub const CARD: Color = Color::WHITE;
    pub const INK: Color = Color::rgb8(0x2b, 0x22, 0x28);
    pub const MUTED_INK: Color = Color::rgb8(0x5f, 0x56, 0x5c);
    pub const BUTTON: Color = Color::rgb8(0xe9, 0xe3, 0xe6);
}

pub fn configure_env(env: &mut Env) {
    env.set(CARD_BACKGROUND, colors::CARD);
    env.set(LABEL_TEXT_COLOR, colors::INK);
    env.set(BODY_TEXT_COLOR, colors::MUTED_INK);
    env.set(BUTTON_BACKGROUND, colors::BUTTON);
    env.set(ACTIVE_CAPTION_COLOR, Color::WHITE);
    env.set(CAPTION_COLOR, colors::INK);
    env.set(LABEL_FONT, FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(20.0));
    env.set(BODY_FONT, FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(15.0));
    env.set(CAPTION_FONT, FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(13.0));
    env.set(druid::theme::WINDOW_BACKGROUND_COLOR, colors::PAPER);
}
