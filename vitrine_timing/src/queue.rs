// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

use alloc::vec::Vec;

/// Opaque identifier for a scheduled timer.
///
/// Ids are unique for the lifetime of a [`TimerQueue`] and are never reused,
/// so a stale id can be passed to [`TimerQueue::cancel`] safely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer whose deadline has been reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<K> {
    /// Id returned when the timer was scheduled.
    pub id: TimerId,
    /// Caller-chosen key.
    pub key: K,
    /// Deadline the timer was scheduled for, in milliseconds.
    pub deadline: u64,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    id: TimerId,
    key: K,
    deadline: u64,
}

/// A small queue of keyed, cancellable timers ordered by deadline.
///
/// Timers with equal deadlines expire in the order they were scheduled.
///
/// The queue is backed by a sorted `Vec` and is intended for the handful of
/// timers a UI controller keeps around, not for thousands of entries.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules a timer for `key` at `deadline`.
    ///
    /// This always adds a new timer, even if one with an equal key is already
    /// pending.
    pub fn schedule(&mut self, key: K, deadline: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let at = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(at, Entry { id, key, deadline });
        id
    }

    /// Cancels the timer with the given id.
    ///
    /// Returns `true` if a pending timer was removed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer whose key matches `predicate`.
    ///
    /// Returns how many timers were removed.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&K) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !predicate(&e.key));
        before - self.entries.len()
    }

    /// Cancels every pending timer and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer if its deadline is `<= now`.
    pub fn pop_expired(&mut self, now: u64) -> Option<Expired<K>> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let Entry { id, key, deadline } = self.entries.remove(0);
        Some(Expired { id, key, deadline })
    }

    /// Removes and returns every timer whose deadline is `<= now`, in
    /// deadline order.
    pub fn drain_expired(&mut self, now: u64) -> Vec<Expired<K>> {
        let due = self.entries.partition_point(|e| e.deadline <= now);
        self.entries
            .drain(..due)
            .map(|Entry { id, key, deadline }| Expired { id, key, deadline })
            .collect()
    }

    /// Iterates pending timers in expiry order as `(key, deadline)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|e| (&e.key, e.deadline))
    }
}

impl<K: PartialEq> TimerQueue<K> {
    /// Schedules a timer for `key` unless one is already pending.
    ///
    /// When a timer for `key` exists, it is left untouched (including its
    /// deadline) and its id is returned.
    pub fn schedule_once(&mut self, key: K, deadline: u64) -> TimerId {
        match self.entries.iter().find(|e| e.key == key) {
            Some(existing) => existing.id,
            None => self.schedule(key, deadline),
        }
    }

    /// Schedules a timer for `key`, cancelling any pending timers with an
    /// equal key first.
    pub fn schedule_replacing(&mut self, key: K, deadline: u64) -> TimerId {
        self.cancel_key(&key);
        self.schedule(key, deadline)
    }

    /// Cancels every pending timer with an equal key.
    ///
    /// Returns how many timers were removed.
    pub fn cancel_key(&mut self, key: &K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != *key);
        before - self.entries.len()
    }

    /// Returns `true` if a timer with an equal key is pending.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.entries.iter().any(|e| e.key == *key)
    }

    /// Returns the deadline of the earliest pending timer with an equal key.
    #[must_use]
    pub fn deadline(&self, key: &K) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.key == *key)
            .map(|e| e.deadline)
    }
}
