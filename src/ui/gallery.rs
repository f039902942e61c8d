// SPDX-License-Identifier: MPL-2.0
//! Gallery widgets: main stage, thumbnail strip, counter and the modal.
//!
//! Everything rendered here is read from the controller's [`GalleryView`]
//! and image slots; widgets only emit [`Message`]s naming the node they
//! stand for.

use crate::app::Message;
use crate::config::THUMBNAIL_SIZE;
use crate::gallery::{GalleryController, GalleryView, NodeId, SlotState};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, container, image, mouse_area, Column, Container, Id, Row, Scrollable, Space, Stack,
    Text,
};
use iced::{Background, Border, Color, ContentFit, Element, Length, Theme};

/// Widget id of the horizontal thumbnail strip.
pub const THUMBS_SCROLLABLE_ID: &str = "gallery-thumbs";

pub struct ViewContext<'a> {
    pub gallery: &'a GalleryController,
    pub show_thumbnails: bool,
    pub fallback: Option<&'a image::Handle>,
    pub focused: Option<NodeId>,
}

/// Inline gallery: stage, controls, counter and thumbnails.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let markup = ctx.gallery.markup();
    let view = ctx.gallery.view();

    let stage_content: Element<'_, Message> = if view.main_image_visible {
        markup
            .main_image
            .map(|slot| slot_image(&ctx, slot))
            .unwrap_or_else(|| Space::new().into())
    } else if view.placeholder_visible {
        Text::new("No images to show")
            .size(typography::BODY)
            .color(palette::GRAY_200)
            .into()
    } else {
        Space::new().into()
    };

    let framed = Container::new(stage_content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(stage_style(
            markup.main_button.is_some() && ctx.focused == markup.main_button,
        ));

    let stage: Element<'_, Message> = match markup.stage {
        Some(surface) => gesture_surface(framed.into(), surface),
        None => framed.into(),
    };

    let mut controls = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);
    if view.nav_controls_visible {
        if let Some(prev) = markup.prev.first() {
            controls = controls.push(nav_button("◀", *prev, ctx.focused));
        }
    }
    if let Some(counter) = &view.counter_text {
        controls = controls.push(Text::new(counter.as_str()).size(typography::BODY));
    }
    if view.nav_controls_visible {
        if let Some(next) = markup.next.first() {
            controls = controls.push(nav_button("▶", *next, ctx.focused));
        }
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(stage)
        .push(controls);

    if ctx.show_thumbnails && view.thumbs_visible {
        column = column.push(thumbnails(&ctx, view));
    }

    column.width(Length::Fill).into()
}

/// Modal overlay, present only while the modal is open.
pub fn modal(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    let view = ctx.gallery.view();
    let modal = ctx.gallery.markup().modal.as_ref()?;
    if !view.modal_open {
        return None;
    }

    let image_content: Element<'_, Message> = modal
        .image
        .map(|slot| slot_image(&ctx, slot))
        .unwrap_or_else(|| Space::new().into());
    let framed = Container::new(image_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);
    let stage: Element<'_, Message> = match modal.stage {
        Some(surface) => gesture_surface(framed.into(), surface),
        None => framed.into(),
    };

    let mut header = Row::new().width(Length::Fill).push(Space::new().width(Length::Fill));
    if let Some(close) = modal.close {
        header = header.push(nav_button("✕", close, ctx.focused));
    }

    let mut footer = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);
    if view.nav_controls_visible {
        if let Some(prev) = modal.prev.first() {
            footer = footer.push(nav_button("◀", *prev, ctx.focused));
        }
    }
    if let Some(counter) = &view.modal_counter_text {
        footer = footer.push(
            Text::new(counter.as_str())
                .size(typography::BODY)
                .color(palette::WHITE),
        );
    }
    if view.nav_controls_visible {
        if let Some(next) = modal.next.first() {
            footer = footer.push(nav_button("▶", *next, ctx.focused));
        }
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(header)
        .push(stage)
        .push(footer)
        .width(Length::Fill)
        .height(Length::Fill);

    let scrim = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::BLACK
                })),
                ..Default::default()
            }),
    )
    .on_release(Message::Click(modal.overlay));

    Some(Stack::new().push(scrim).push(content).into())
}

fn thumbnails<'a>(ctx: &ViewContext<'a>, view: &'a GalleryView) -> Element<'a, Message> {
    let markup = ctx.gallery.markup();
    let mut row = Row::new().spacing(spacing::XS).padding(spacing::XXS);

    for (selector, state) in markup.selectors.iter().zip(&view.selectors) {
        let content: Element<'_, Message> = match selector.thumbnail {
            Some(slot) => slot_image(ctx, slot),
            None => Text::new(selector.label.as_deref().unwrap_or(""))
                .size(typography::CAPTION)
                .into(),
        };
        let focused = ctx.focused == Some(selector.control);
        row = row.push(
            button(
                Container::new(content)
                    .width(Length::Fixed(THUMBNAIL_SIZE))
                    .height(Length::Fixed(THUMBNAIL_SIZE))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            )
            .padding(spacing::XXS)
            .style(thumbnail_style(state.active, focused))
            .on_press(Message::Click(selector.control)),
        );
    }

    Scrollable::new(row)
        .id(Id::new(THUMBS_SCROLLABLE_ID))
        .direction(Direction::Horizontal(Scrollbar::default()))
        .width(Length::Fill)
        .into()
}

/// Wraps `content` so mouse input on it reaches the gesture recognizer.
fn gesture_surface(content: Element<'_, Message>, surface: NodeId) -> Element<'_, Message> {
    mouse_area(content)
        .on_move(move |position| Message::CursorMoved { surface, position })
        .on_press(Message::PointerPressed(surface))
        .on_release(Message::PointerReleased(surface))
        .on_right_press(Message::SecondaryPressed(surface))
        .on_middle_press(Message::SecondaryPressed(surface))
        .on_exit(Message::PointerExited(surface))
        .into()
}

fn slot_image<'a>(ctx: &ViewContext<'a>, slot: NodeId) -> Element<'a, Message> {
    let Some(state) = ctx.gallery.image(slot) else {
        return Space::new().into();
    };
    match slot_handle(state, ctx.fallback) {
        Some(handle) => image(handle)
            .content_fit(ContentFit::Contain)
            .opacity(if state.loading { opacity::LOADING } else { 1.0 })
            .into(),
        None => Text::new(state.alt.clone())
            .size(typography::CAPTION)
            .color(palette::GRAY_200)
            .into(),
    }
}

/// Handle to draw for `state`; `None` means show the alt text instead.
fn slot_handle(state: &SlotState, fallback: Option<&image::Handle>) -> Option<image::Handle> {
    if state.shows_fallback() {
        fallback.cloned()
    } else {
        Some(image::Handle::from_path(&state.source))
    }
}

fn nav_button(label: &str, node: NodeId, focused: Option<NodeId>) -> Element<'_, Message> {
    let is_focused = focused == Some(node);
    button(Text::new(label).size(typography::TITLE_LG))
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .style(move |theme: &Theme, status| {
        let mut style = button::secondary(theme, status);
        if is_focused {
            style.border = focus_border();
        }
        style
    })
    .on_press(Message::Click(node))
    .into()
}

fn focus_border() -> Border {
    Border {
        color: palette::PRIMARY_400,
        width: border::WIDTH_MD,
        radius: radius::SM.into(),
    }
}

fn stage_style(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: if focused {
            focus_border()
        } else {
            Border {
                color: palette::GRAY_700,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            }
        },
        ..Default::default()
    }
}

fn thumbnail_style(active: bool, focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            _ => Color::TRANSPARENT,
        };
        let border = if focused {
            focus_border()
        } else if active {
            Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                color: palette::GRAY_700,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            border,
            ..Default::default()
        }
    }
}
