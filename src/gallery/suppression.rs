// SPDX-License-Identifier: MPL-2.0
//! Click suppression after a swipe.
//!
//! A swipe on the main stage ends with a pointer release that the toolkit
//! may also report as a click. Marking the swipe arms a short window during
//! which the next click on the stage is swallowed instead of opening the
//! modal.

use super::scheduler::{GalleryTask, Scheduler, TaskId};
use crate::domain::SuppressionWindow;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ClickSuppression {
    active: bool,
    expiry: Option<TaskId>,
    window: SuppressionWindow,
}

impl ClickSuppression {
    #[must_use]
    pub fn new(window: SuppressionWindow) -> Self {
        Self {
            active: false,
            expiry: None,
            window,
        }
    }

    /// Arms suppression, restarting the expiry timer if one is pending.
    pub fn mark_swipe(&mut self, scheduler: &mut Scheduler, now: Instant) {
        if let Some(previous) = self.expiry.take() {
            scheduler.cancel(previous);
        }
        self.active = true;
        self.expiry = Some(scheduler.schedule(
            now,
            self.window.as_duration(),
            GalleryTask::ExpireClickSuppression,
        ));
    }

    /// Check-and-clear: returns `true` if a click should be swallowed.
    pub fn take(&mut self, scheduler: &mut Scheduler) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        if let Some(expiry) = self.expiry.take() {
            scheduler.cancel(expiry);
        }
        tracing::debug!("click after swipe suppressed");
        true
    }

    /// Expiry timer fired. Stale timers (already replaced) are ignored.
    pub fn expire(&mut self, task: TaskId) {
        if self.expiry == Some(task) {
            self.expiry = None;
            self.active = false;
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
