// SPDX-License-Identifier: MPL-2.0
//! Pointer swipe recognition.
//!
//! Turns a pointer-down / pointer-up pair on one surface into a horizontal
//! swipe or nothing at all.

use crate::domain::SwipeThreshold;
use iced::Point;

/// Identifier the host assigns to one pointer (mouse, finger, pen).
pub type PointerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// One raw pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub button: PointerButton,
    pub position: Point,
}

impl PointerEvent {
    /// A primary-button mouse sample at `(x, y)`.
    #[must_use]
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            id: 1,
            kind: PointerKind::Mouse,
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// A touch sample for finger `id` at `(x, y)`.
    #[must_use]
    pub fn touch(id: PointerId, x: f32, y: f32) -> Self {
        Self {
            id,
            kind: PointerKind::Touch,
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }
    }
}

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(PointerEvent),
    Up(PointerEvent),
    Cancel,
}

/// Direction the content was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrackedPointer {
    id: PointerId,
    start: Point,
}

/// Per-surface swipe recognizer. Tracks at most one pointer at a time.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    tracked: Option<TrackedPointer>,
    threshold: SwipeThreshold,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            tracked: None,
            threshold,
        }
    }

    /// Feeds one pointer sample; returns a swipe when one completes.
    pub fn handle(&mut self, input: PointerInput) -> Option<SwipeDirection> {
        match input {
            PointerInput::Down(event) => {
                self.pointer_down(event);
                None
            }
            PointerInput::Up(event) => self.pointer_up(event),
            PointerInput::Cancel => {
                self.pointer_cancel();
                None
            }
        }
    }

    /// Starts tracking `event`'s pointer, replacing any earlier one.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if event.kind == PointerKind::Mouse && event.button != PointerButton::Primary {
            return;
        }
        self.tracked = Some(TrackedPointer {
            id: event.id,
            start: event.position,
        });
    }

    /// Finishes the tracked pointer and classifies the movement.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Option<SwipeDirection> {
        let tracked = self.tracked?;
        if tracked.id != event.id {
            return None;
        }
        self.tracked = None;

        let delta_x = event.position.x - tracked.start.x;
        let delta_y = event.position.y - tracked.start.y;

        if delta_x.abs() < self.threshold.value() || delta_x.abs() <= delta_y.abs() {
            return None;
        }
        if delta_x < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }

    /// Drops the tracked pointer without classifying it.
    pub fn pointer_cancel(&mut self) {
        self.tracked = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }
}
