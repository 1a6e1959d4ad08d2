//! Fixed-delay tasks polled from the UI frame loop.
//!
//! Nothing runs on another thread: the controller calls [`DelayedTasks::take_due`]
//! with the current instant each frame and handles whatever has come due.
//! Time is always passed in, which keeps tests deterministic.

use std::time::{Duration, Instant};

/// Handle used to cancel a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<T> {
    id: TaskId,
    due: Instant,
    task: T,
}

/// Pending tasks ordered by deadline.
#[derive(Debug)]
pub struct DelayedTasks<T> {
    pending: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for DelayedTasks<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> DelayedTasks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to come due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = now + delay;
        // Insert after every entry due no later than this one so equal
        // deadlines fire in scheduling order.
        let index = self.pending.partition_point(|entry| entry.due <= due);
        self.pending.insert(index, Scheduled { id, due, task });
        id
    }

    /// Drop a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.id != id);
        self.pending.len() != before
    }

    /// Drop every pending task, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let split = self.pending.partition_point(|entry| entry.due <= now);
        self.pending.drain(..split).map(|entry| entry.task).collect()
    }

    /// Earliest due time among pending tasks.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|entry| entry.due)
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
