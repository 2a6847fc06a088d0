//! The card widget

use std::time::Duration;

use druid::kurbo::{Affine, Circle};
use druid::widget::prelude::*;
use druid::{Color, Point, Rect, TextLayout, TimerToken};

use notchcard_lib::consts::VIEW_BOX_HEIGHT;
use notchcard_lib::{resolve_accent, Card, CardEvent, Icon, IconShape, SizeOption, ViewBox, ICON_SIZE};
use style_loader::StyleWatcher;

use crate::surface::CardSurface;
use crate::theme;

const DEFAULT_CARD_SIZE: Size = Size::new(560.0, 240.0);
/// The outline is drawn 1:1 vertically, so the band is as tall as the view box.
const TOP_BAND_HEIGHT: f64 = VIEW_BOX_HEIGHT;
const BODY_CORNER_RADIUS: f64 = 16.0;
const CONTENT_INSET: f64 = 24.0;

const BUTTON_TOP: f64 = 12.0;
const BUTTON_HEIGHT: f64 = 40.0;
const BUTTON_GAP: f64 = 8.0;
const EXPANDED_BUTTON_WIDTH: f64 = 76.0;
const COLLAPSED_BUTTON_WIDTH: f64 = 44.0;

const ICON_FRAME: Rect = Rect::new(24.0, 104.0, 72.0, 152.0);
const BODY_TEXT_X: f64 = 88.0;

const STYLE_POLL_INTERVAL: Duration = Duration::from_millis(500);

struct Caption {
    size: SizeOption,
    layout: TextLayout<String>,
}

/// A card with a notched top edge and two size buttons.
///
/// The widget measures itself and its label, and lets a [`Card`] decide what
/// the outline, buttons, text and icon should be.
pub struct CardWidget {
    card: Card,
    surface: CardSurface,
    fallback_accent: Color,
    label: TextLayout<String>,
    body: TextLayout<String>,
    captions: Vec<Caption>,
    last_size: Option<Size>,
    watcher: Option<StyleWatcher>,
    style_timer: TimerToken,
}

impl CardWidget {
    pub fn new(
        card: Card,
        surface: CardSurface,
        fallback_accent: Color,
        label: impl Into<String>,
        watcher: Option<StyleWatcher>,
    ) -> CardWidget {
        let mut label_layout = TextLayout::new();
        label_layout.set_text(label.into());
        label_layout.set_font(theme::LABEL_FONT);
        label_layout.set_text_color(theme::LABEL_TEXT_COLOR);

        let mut body = TextLayout::new();
        body.set_font(theme::BODY_FONT);
        body.set_text_color(theme::BODY_TEXT_COLOR);

        let captions = SizeOption::ALL
            .iter()
            .map(|size| {
                let mut layout = TextLayout::new();
                layout.set_font(theme::CAPTION_FONT);
                Caption {
                    size: *size,
                    layout,
                }
            })
            .collect();

        CardWidget {
            card,
            surface,
            fallback_accent,
            label: label_layout,
            body,
            captions,
            last_size: None,
            watcher,
            style_timer: TimerToken::INVALID,
        }
    }

    /// The buttons' hit areas, left to right.
    fn button_rects(&self) -> Vec<(SizeOption, Rect)> {
        let mut x = self.surface.button_left;
        SizeOption::ALL
            .iter()
            .map(|size| {
                let width = if self.surface.control(*size).expanded {
                    EXPANDED_BUTTON_WIDTH
                } else {
                    COLLAPSED_BUTTON_WIDTH
                };
                let rect = Rect::from_origin_size((x, BUTTON_TOP), (width, BUTTON_HEIGHT));
                x += width + BUTTON_GAP;
                (*size, rect)
            })
            .collect()
    }

    fn button_at(&self, pos: Point) -> Option<SizeOption> {
        self.button_rects()
            .into_iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(size, _)| size)
    }

    /// Pick up edits to the style file, and redraw the icon with the new accent.
    fn reload_styles(&mut self) -> bool {
        let result = match self.watcher.as_ref().and_then(StyleWatcher::poll) {
            Some(result) => result,
            None => return false,
        };
        match result {
            Ok(styles) => {
                self.surface.styles = styles;
                if let Some(size) = self.card.state().active_size {
                    self.card
                        .handle_event(&mut self.surface, CardEvent::Select(size));
                }
                true
            }
            Err(e) => {
                log::error!("failed to reload styles: '{}'", e);
                false
            }
        }
    }
}

impl Widget<()> for CardWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut (), _env: &Env) {
        match event {
            Event::MouseDown(mouse) if mouse.button.is_left() => {
                if let Some(size) = self.button_at(mouse.pos) {
                    self.card
                        .handle_event(&mut self.surface, CardEvent::Select(size));
                    ctx.request_paint();
                    ctx.set_handled();
                }
            }
            Event::Timer(token) if *token == self.style_timer => {
                if self.reload_styles() {
                    ctx.request_paint();
                }
                self.style_timer = ctx.request_timer(STYLE_POLL_INTERVAL);
            }
            _ => (),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &(), _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            if self.watcher.is_some() {
                self.style_timer = ctx.request_timer(STYLE_POLL_INTERVAL);
            }
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &(), _data: &(), _env: &Env) {}

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &(), env: &Env) -> Size {
        let size = if bc.is_width_bounded() && bc.is_height_bounded() {
            bc.max()
        } else {
            bc.constrain(DEFAULT_CARD_SIZE)
        };

        self.label.rebuild_if_needed(ctx.text(), env);
        let label_size = self.label.size();
        let label_origin = Point::new(
            CONTENT_INSET,
            ((TOP_BAND_HEIGHT - label_size.height) / 2.0).max(0.0),
        );
        self.surface.container = Some(size.to_rect());
        self.surface.label = Some(Rect::from_origin_size(label_origin, label_size));

        // the card only hears about real size changes
        if self.last_size != Some(size) {
            let event = match self.last_size {
                None => CardEvent::Load,
                Some(_) => CardEvent::Resize,
            };
            self.card.handle_event(&mut self.surface, event);
            self.last_size = Some(size);
        }
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &(), env: &Env) {
        let size = ctx.size();
        let card_bg = env.get(theme::CARD_BACKGROUND);

        // the body, squared off at the top where it meets the outline
        let body_bottom = size.height.max(TOP_BAND_HEIGHT + BODY_CORNER_RADIUS * 2.0);
        ctx.fill(
            Rect::new(0.0, TOP_BAND_HEIGHT, size.width, body_bottom - BODY_CORNER_RADIUS),
            &card_bg,
        );
        ctx.fill(
            Rect::new(
                0.0,
                body_bottom - BODY_CORNER_RADIUS * 2.0,
                size.width,
                body_bottom,
            )
            .to_rounded_rect(BODY_CORNER_RADIUS),
            &card_bg,
        );

        if let Some(outline) = &self.surface.outline {
            let to_screen = ViewBox::CARD_TOP.affine(Size::new(size.width, TOP_BAND_HEIGHT));
            ctx.fill(to_screen * outline.clone(), &card_bg);
        }

        if let Some(label) = self.surface.label {
            self.label.draw(ctx, label.origin());
        }

        let accent = resolve_accent(&self.surface, &self.fallback_accent);
        let button_bg = env.get(theme::BUTTON_BACKGROUND);
        for (size_opt, rect) in self.button_rects() {
            let state = self.surface.control(size_opt);
            let fill = if state.active { accent.color() } else { &button_bg };
            ctx.fill(rect.to_rounded_rect(BUTTON_HEIGHT / 2.0), fill);

            let caption = match self.captions.iter_mut().find(|c| c.size == size_opt) {
                Some(caption) => caption,
                None => continue,
            };
            let text = if state.expanded {
                size_opt.caption()
            } else {
                size_opt.as_str()
            };
            caption.layout.set_text(text.to_string());
            if state.active {
                caption.layout.set_text_color(theme::ACTIVE_CAPTION_COLOR);
            } else {
                caption.layout.set_text_color(theme::CAPTION_COLOR);
            }
            caption.layout.rebuild_if_needed(ctx.text(), env);
            let origin = rect.center() - caption.layout.size().to_vec2() / 2.0;
            caption.layout.draw(ctx, origin);
        }

        if let Some(icon) = &self.surface.icon {
            paint_icon(ctx, icon, ICON_FRAME);
        }

        self.body.set_text(self.surface.text.clone());
        self.body
            .set_wrap_width((size.width - BODY_TEXT_X - CONTENT_INSET).max(0.0));
        self.body.rebuild_if_needed(ctx.text(), env);
        self.body.draw(ctx, (BODY_TEXT_X, ICON_FRAME.y0));
    }
}

fn paint_icon(ctx: &mut PaintCtx, icon: &Icon, frame: Rect) {
    let scale = frame.width() / ICON_SIZE.width;
    ctx.with_save(|ctx| {
        ctx.transform(Affine::translate(frame.origin().to_vec2()) * Affine::scale(scale));
        for shape in icon.shapes() {
            match shape {
                IconShape::Circle {
                    center,
                    radius,
                    fill,
                } => ctx.fill(Circle::new(*center, *radius), fill.color()),
                IconShape::RoundedRect { rect, radius, fill } => {
                    ctx.fill(rect.to_rounded_rect(*radius), fill.color())
                }
            }
        }
    });
}
