// SPDX-License-Identifier: MPL-2.0
//! Deferred gallery tasks with cancellation.
//!
//! Work that must happen after the current input event has been handled
//! (moving focus into a freshly opened modal, expiring click suppression)
//! is queued here. The host drains due tasks with [`Scheduler::take_due`];
//! tasks never run inside the call that scheduled them.

use std::time::{Duration, Instant};

/// Handle used to cancel a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Deferred work a gallery instance can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryTask {
    /// Move focus to the modal close control.
    FocusModalClose,
    /// End the post-swipe click suppression window.
    ExpireClickSuppression,
}

#[derive(Debug, Clone)]
struct Scheduled {
    id: TaskId,
    due: Instant,
    task: GalleryTask,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` to run `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: GalleryTask) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending.push(Scheduled {
            id,
            due: now + delay,
            task,
        });
        id
    }

    /// Cancels a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|scheduled| scheduled.id != id);
        self.pending.len() != before
    }

    /// Removes and returns every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TaskId, GalleryTask)> {
        let (mut due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|scheduled| scheduled.due <= now);
        self.pending = rest;
        due.sort_by_key(|scheduled| (scheduled.due, scheduled.id));
        due.into_iter()
            .map(|scheduled| (scheduled.id, scheduled.task))
            .collect()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|scheduled| scheduled.due).min()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delay_task_is_due_immediately_after_scheduling() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        let id = scheduler.schedule(now, Duration::ZERO, GalleryTask::FocusModalClose);

        assert_eq!(scheduler.take_due(now), vec![(id, GalleryTask::FocusModalClose)]);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn tasks_wait_for_their_deadline() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule(
            now,
            Duration::from_millis(260),
            GalleryTask::ExpireClickSuppression,
        );

        assert!(scheduler.take_due(now + Duration::from_millis(259)).is_empty());
        assert_eq!(scheduler.take_due(now + Duration::from_millis(260)).len(), 1);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        let id = scheduler.schedule(now, Duration::ZERO, GalleryTask::FocusModalClose);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.take_due(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn due_tasks_come_out_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        let late = scheduler.schedule(
            now,
            Duration::from_millis(50),
            GalleryTask::ExpireClickSuppression,
        );
        let early = scheduler.schedule(now, Duration::ZERO, GalleryTask::FocusModalClose);

        let due = scheduler.take_due(now + Duration::from_millis(100));
        assert_eq!(
            due,
            vec![
                (early, GalleryTask::FocusModalClose),
                (late, GalleryTask::ExpireClickSuppression)
            ]
        );
    }

    #[test]
    fn next_due_reports_earliest_deadline() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        assert_eq!(scheduler.next_due(), None);
        scheduler.schedule(now, Duration::from_millis(30), GalleryTask::ExpireClickSuppression);
        scheduler.schedule(now, Duration::from_millis(10), GalleryTask::FocusModalClose);
        assert_eq!(scheduler.next_due(), Some(now + Duration::from_millis(10)));
    }
}
