// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery::{GalleryController, NodeId};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use iced::widget::{image, opaque, Column, Container, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a GalleryController,
    pub show_thumbnails: bool,
    pub fallback: Option<&'a image::Handle>,
    pub focused: Option<NodeId>,
    pub scroll_locked: bool,
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_ctx = || GalleryViewContext {
        gallery: ctx.gallery,
        show_thumbnails: ctx.show_thumbnails,
        fallback: ctx.fallback,
        focused: ctx.focused,
    };

    let mut column = Column::new().width(Length::Fill);
    if let Some(status) = ctx.status {
        column = column.push(
            Container::new(
                Text::new(status)
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            )
            .padding(spacing::XS),
        );
    }
    column = column.push(gallery::view(gallery_ctx()));

    // Page scrolling is off while a modal holds the scroll lock.
    let page: Element<'_, Message> = if ctx.scroll_locked {
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        Scrollable::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    match gallery::modal(gallery_ctx()) {
        Some(overlay) => Stack::new().push(page).push(opaque(overlay)).into(),
        None => page,
    }
}
