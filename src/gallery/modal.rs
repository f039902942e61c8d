// SPDX-License-Identifier: MPL-2.0
//! Modal overlay session.
//!
//! Owns the open/closed state of one gallery's overlay together with the
//! bookkeeping that goes with it: the control to give focus back to on
//! close, the scroll-lock hold, and the deferred focus move into the modal.

use super::focus::{FocusHost, NodeId};
use super::scheduler::{GalleryTask, Scheduler, TaskId};
use super::scroll_lock::{ScrollLockGuard, ScrollLockRegistry};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug)]
pub struct ModalSession {
    state: ModalState,
    restore_focus: Option<NodeId>,
    lock: Option<ScrollLockGuard>,
    focus_task: Option<TaskId>,
    /// Whether an overlay surface exists at all.
    available: bool,
}

impl ModalSession {
    /// Creates a closed session. Without an overlay surface the session
    /// can never open.
    #[must_use]
    pub fn new(available: bool) -> Self {
        Self {
            state: ModalState::Closed,
            restore_focus: None,
            lock: None,
            focus_task: None,
            available,
        }
    }

    /// Opens the modal. No-op when already open or unavailable.
    ///
    /// Returns whether the state changed.
    pub fn open(
        &mut self,
        focus: &dyn FocusHost,
        registry: &ScrollLockRegistry,
        scheduler: &mut Scheduler,
        now: Instant,
    ) -> bool {
        if !self.available || self.state == ModalState::Open {
            return false;
        }
        self.restore_focus = focus.focused();
        self.state = ModalState::Open;
        self.lock = Some(registry.acquire());
        self.focus_task = Some(scheduler.schedule(now, Duration::ZERO, GalleryTask::FocusModalClose));
        tracing::debug!(restore_focus = ?self.restore_focus, "modal opened");
        true
    }

    /// Closes the modal and hands focus back. No-op when already closed.
    ///
    /// Returns whether the state changed.
    pub fn close(&mut self, focus: &mut dyn FocusHost, scheduler: &mut Scheduler) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        self.state = ModalState::Closed;
        if let Some(task) = self.focus_task.take() {
            scheduler.cancel(task);
        }
        if let Some(lock) = self.lock.take() {
            lock.release();
        }
        if let Some(target) = self.restore_focus.take() {
            if focus.can_focus(target) {
                focus.focus(target);
            }
        }
        tracing::debug!("modal closed");
        true
    }

    /// Runs the deferred focus move. Re-checks that the modal is still open
    /// and that `task` is the current one.
    pub fn run_focus_task(
        &mut self,
        task: TaskId,
        close_control: Option<NodeId>,
        focus: &mut dyn FocusHost,
    ) {
        if self.focus_task != Some(task) {
            return;
        }
        self.focus_task = None;
        if self.state != ModalState::Open {
            return;
        }
        if let Some(close) = close_control {
            focus.focus(close);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }
}
