use std::{
    collections::{BTreeSet, HashMap},
    time::Duration,
};

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Deterministic single-threaded timer queue driven by a virtual clock.
///
/// Timers fire in due order; ties fire in scheduling order. Nothing fires on its own: the owner
/// pulls due timers with [`TimerQueue::pop_due`] while advancing the clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    queue: BTreeSet<(Duration, TimerId)>,
    due_at: HashMap<TimerId, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        self.queue.insert((due, id));
        self.due_at.insert(id, due);
        id
    }

    /// Returns false when the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_at.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_at.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.first().map(|(due, _)| *due)
    }

    /// Pops the earliest timer due at or before `deadline`, moving the clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerId> {
        let &(due, id) = self.queue.first()?;
        if due > deadline {
            return None;
        }
        self.queue.pop_first();
        self.due_at.remove(&id);
        self.now = self.now.max(due);
        Some(id)
    }

    /// Moves the clock forward to `deadline`. Call after draining [`TimerQueue::pop_due`].
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Cancels everything (host teardown).
    pub fn clear(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        self.due_at.clear();
        n
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/timer.rs"]
mod tests;
