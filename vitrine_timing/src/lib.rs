// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI controllers often need to do something "a little later": clear a panel's
//! content once its exit animation has finished, scroll to an element once it
//! has been laid out, or complete a simulated load. This crate keeps those
//! pending actions as plain data so controllers stay deterministic and
//! testable.
//!
//! The crate does **not** read a clock or spawn anything. Callers:
//! - Pass the current time (in milliseconds, from whatever clock the host uses)
//!   when scheduling.
//! - Call [`TimerQueue::pop_expired`] or [`TimerQueue::drain_expired`] from
//!   their own tick or animation-frame callback.
//! - Cancel timers explicitly when the owning component goes away.
//!
//! Timers are identified both by a unique [`TimerId`] and by a caller-chosen
//! key. Keys make the common "at most one pending timer of this kind" pattern
//! easy via [`TimerQueue::schedule_once`] and [`TimerQueue::schedule_replacing`].
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_timing::TimerQueue;
//!
//! #[derive(Copy, Clone, Debug, PartialEq)]
//! enum Task {
//!     ClearPayload,
//!     ScrollToAnchor,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule_once(Task::ClearPayload, 300);
//! timers.schedule_once(Task::ScrollToAnchor, 100);
//!
//! // A second request for the same key does not add a second timer.
//! timers.schedule_once(Task::ClearPayload, 450);
//! assert_eq!(timers.len(), 2);
//!
//! let fired: Vec<Task> = timers.drain_expired(320).into_iter().map(|e| e.key).collect();
//! assert_eq!(fired, [Task::ScrollToAnchor, Task::ClearPayload]);
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{Expired, TimerId, TimerQueue};
