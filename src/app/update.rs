// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler feeds the page, then [`finish`] turns whatever the gallery
//! asked for (a thumbnail scroll, image loads) into tasks.

use super::probe::probe_image;
use super::Message;
use crate::gallery::{GalleryId, NodeId, Page, PointerButton, PointerEvent, PointerInput};
use crate::ui::gallery::THUMBS_SCROLLABLE_ID;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Point, Task};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub page: &'a mut Page,
    pub gallery: GalleryId,
    pub cursor_positions: &'a mut HashMap<NodeId, Point>,
    pub pressed: &'a mut Option<NodeId>,
    pub probes_in_flight: &'a mut HashSet<(NodeId, u64)>,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    let now = Instant::now();
    match message {
        Message::Click(node) => {
            ctx.page.click(node, now);
        }
        Message::Key(key) => {
            ctx.page.key(key, now);
        }
        Message::CursorMoved { surface, position } => {
            ctx.cursor_positions.insert(surface, position);
        }
        Message::PointerPressed(surface) => {
            *ctx.pressed = Some(surface);
            let event = pointer_at(ctx.cursor_positions, surface);
            ctx.page.pointer(surface, PointerInput::Down(event), now);
        }
        Message::SecondaryPressed(surface) => {
            let event = PointerEvent {
                button: PointerButton::Secondary,
                ..pointer_at(ctx.cursor_positions, surface)
            };
            ctx.page.pointer(surface, PointerInput::Down(event), now);
        }
        Message::PointerReleased(surface) => handle_release(ctx, surface, now),
        Message::PointerExited(surface) => {
            if ctx.pressed.take() == Some(surface) {
                ctx.page.pointer(surface, PointerInput::Cancel, now);
            }
            ctx.cursor_positions.remove(&surface);
        }
        Message::ImageProbed {
            slot,
            source,
            generation,
            ok,
        } => {
            ctx.probes_in_flight.remove(&(slot, generation));
            if ok {
                ctx.page.image_loaded(slot, &source, now);
            } else {
                ctx.page.image_failed(slot, &source, now);
            }
        }
        Message::Tick(instant) => ctx.page.advance(instant),
    }
    finish(ctx)
}

/// Pointer-up on a surface. A press and release on the main stage is also
/// a click on the main button, delivered after the gesture so a swipe can
/// suppress it.
fn handle_release(ctx: &mut UpdateContext<'_>, surface: NodeId, now: Instant) {
    let event = pointer_at(ctx.cursor_positions, surface);
    ctx.page.pointer(surface, PointerInput::Up(event), now);

    let was_pressed = ctx.pressed.take() == Some(surface);
    let markup = ctx.page.gallery(ctx.gallery).markup();
    let main = markup.main_button.filter(|_| markup.stage == Some(surface));
    if let (true, Some(main)) = (was_pressed, main) {
        ctx.page.click(main, now);
    }
}

fn pointer_at(positions: &HashMap<NodeId, Point>, surface: NodeId) -> PointerEvent {
    let position = positions.get(&surface).copied().unwrap_or(Point::ORIGIN);
    PointerEvent::mouse(position.x, position.y)
}

/// Collects follow-up work requested by the gallery.
pub fn finish(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut tasks = Vec::new();

    let gallery = ctx.page.gallery_mut(ctx.gallery);
    if let Some(origin) = gallery.take_scroll_request() {
        let selectors = &gallery.markup().selectors;
        if let Some(index) = selectors.iter().position(|s| s.control == origin) {
            tasks.push(operation::snap_to(
                Id::new(THUMBS_SCROLLABLE_ID),
                RelativeOffset {
                    x: thumbnail_offset(index, selectors.len()),
                    y: 0.0,
                },
            ));
        }
    }

    for (slot, source, generation) in gallery.binder().pending_loads() {
        if !ctx.probes_in_flight.insert((slot, generation)) {
            continue;
        }
        let source = source.to_string();
        tasks.push(Task::perform(
            probe_image(source.clone()),
            move |ok| Message::ImageProbed {
                slot,
                source: source.clone(),
                generation,
                ok,
            },
        ));
    }

    Task::batch(tasks)
}

/// Relative scroll position that brings thumbnail `index` of `count` into view.
pub fn thumbnail_offset(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_offset_spans_strip() {
        assert_eq!(thumbnail_offset(0, 5), 0.0);
        assert_eq!(thumbnail_offset(2, 5), 0.5);
        assert_eq!(thumbnail_offset(4, 5), 1.0);
    }

    #[test]
    fn thumbnail_offset_single_or_empty_is_origin() {
        assert_eq!(thumbnail_offset(0, 1), 0.0);
        assert_eq!(thumbnail_offset(0, 0), 0.0);
    }
}
