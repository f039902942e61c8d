// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses that no widget captured become gallery keys; a tick
//! runs while the page has deferred gallery work.

use super::Message;
use crate::config::SCHEDULER_TICK_MS;
use crate::gallery::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes uncaptured key presses to the gallery.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Some(Message::Key(map_key(&key)))
            }
            _ => None,
        }
    })
}

/// Ticks the scheduler while tasks are pending.
pub fn create_tick_subscription(has_pending_tasks: bool) -> Subscription<Message> {
    if has_pending_tasks {
        time::every(Duration::from_millis(SCHEDULER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a keyboard key to the gallery's key vocabulary.
pub fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Space) => Key::Space,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Character(text) if text.as_str() == " " => Key::Space,
        _ => Key::Other,
    }
}
