//! Cancellable, time-ordered task queue.
//!
//! Tasks are plain values scheduled for a deadline on some [`Clock`]
//! reading. Nothing runs on its own: the owner pops due tasks and acts on
//! them, so every transition runs on the caller's thread.
//!
//! [`Clock`]: super::Clock

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A scheduled task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer<T> {
    pub id: TimerId,
    /// Clock reading at which the task becomes due.
    pub due: Duration,
    pub task: T,
}

/// Deadline-ordered queue of tasks.
///
/// Pops earliest deadline first; equal deadlines pop in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    /// Sorted by (due, id).
    timers: Vec<Timer<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due at `due`.
    pub fn schedule(&mut self, due: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        // Insert after every timer due at or before `due` (FIFO on ties).
        let at = self.timers.partition_point(|t| t.due <= due);
        self.timers.insert(at, Timer { id, due, task });
        id
    }

    /// Cancel a task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.timers.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.timers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Cancel everything. Returns how many tasks were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.timers.len();
        self.timers.clear();
        dropped
    }

    /// Remove and return the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Timer<T>> {
        if self.timers.first()?.due <= now {
            Some(self.timers.remove(0))
        } else {
            None
        }
    }

    /// Deadline of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.first().map(|t| t.due)
    }

    /// Look up a pending task.
    #[must_use]
    pub fn get(&self, id: TimerId) -> Option<&Timer<T>> {
        self.timers.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
