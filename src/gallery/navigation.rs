// SPDX-License-Identifier: MPL-2.0
//! Circular slide navigation.
//!
//! [`Navigation`] owns the current slide index over a fixed-size sequence.
//! All movement goes through [`normalize`], so the index can never leave
//! `0..len` no matter how far a single call moves it.

/// Maps any signed index onto `0..count`, wrapping in both directions.
///
/// Returns 0 when `count` is 0.
#[must_use]
pub fn normalize(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    // rem_euclid keeps the result non-negative for negative indices.
    index.rem_euclid(count as i64) as usize
}

/// Emitted after every index change so the controller can re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    /// The index that is now current.
    pub index: usize,
    /// Whether the active selector should be brought into view.
    pub scroll_into_view: bool,
}

/// Current position within a fixed slide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    current: usize,
    count: usize,
}

impl Navigation {
    /// Creates navigation over `count` slides, starting at the first one.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// Jumps to `index` (wrapped onto the sequence).
    ///
    /// Returns `None` for an empty sequence: navigation is inert and the
    /// index stays at 0.
    pub fn go_to(&mut self, index: i64, scroll_into_view: bool) -> Option<RenderRequest> {
        if self.count == 0 {
            return None;
        }
        self.current = normalize(index, self.count);
        tracing::debug!(index = self.current, total = self.count, "slide selected");
        Some(RenderRequest {
            index: self.current,
            scroll_into_view,
        })
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self) -> Option<RenderRequest> {
        self.go_to(self.current as i64 + 1, true)
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) -> Option<RenderRequest> {
        self.go_to(self.current as i64 - 1, true)
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether prev/next affordances make sense (two or more slides).
    #[must_use]
    pub fn can_step(&self) -> bool {
        self.count > 1
    }

    /// Position text shown in the counters, e.g. `"3 / 7"`; `"0 / 0"` when empty.
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.count == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.count)
    }
}
