// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single disclosure node: open/close with deferred payload clearing.

use core::mem;

use smallvec::SmallVec;
use vitrine_timing::TimerQueue;

/// Lifecycle state of a [`Disclosure`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureState<P> {
    /// Nothing shown, no payload.
    Closed,
    /// Shown with the given payload.
    Open(P),
    /// Hidden, but the payload is kept until the exit transition finishes.
    Closing(P),
}

impl<P> Default for DisclosureState<P> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<P> DisclosureState<P> {
    /// Returns `true` for [`DisclosureState::Open`].
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Returns `true` for [`DisclosureState::Closing`].
    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self, Self::Closing(_))
    }

    /// Returns `true` for [`DisclosureState::Closed`].
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns the payload while open or closing.
    #[must_use]
    pub fn payload(&self) -> Option<&P> {
        match self {
            Self::Open(p) | Self::Closing(p) => Some(p),
            Self::Closed => None,
        }
    }
}

/// Timing for a [`Disclosure`], in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisclosureConfig {
    /// Delay between `close` and clearing the payload.
    pub close_duration: u64,
    /// Delay between `open` and the scroll-to-anchor effect, giving the
    /// panel time to mount and lay out.
    pub open_scroll_delay: u64,
}

impl DisclosureConfig {
    /// Default exit transition length.
    pub const DEFAULT_CLOSE_DURATION: u64 = 300;
    /// Default delay before scrolling to a freshly opened panel.
    pub const DEFAULT_OPEN_SCROLL_DELAY: u64 = 100;
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            close_duration: Self::DEFAULT_CLOSE_DURATION,
            open_scroll_delay: Self::DEFAULT_OPEN_SCROLL_DELAY,
        }
    }
}

/// Host-visible action produced when a disclosure timer fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureEffect<A> {
    /// Scroll so the given anchor element is at the top of the viewport.
    ScrollToAnchor(A),
    /// The exit transition finished and the payload was dropped.
    PayloadCleared,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Pending<A> {
    Clear,
    Anchor(A),
}

/// One togglable panel whose payload outlives `close` by an exit transition.
///
/// - [`Disclosure::open`] shows the panel immediately, replacing any payload,
///   and (if an anchor is configured) schedules a scroll to that anchor.
/// - [`Disclosure::close`] hides the panel immediately and schedules the
///   payload to be cleared once [`DisclosureConfig::close_duration`] has
///   elapsed. At most one clear is ever pending.
/// - Reopening before the clear fires cancels it, so fresh payloads are never
///   dropped by a stale timer.
/// - [`Disclosure::teardown`] cancels everything, for when the owning
///   component goes away.
///
/// Time is supplied by the caller in milliseconds; timers fire from
/// [`Disclosure::tick`].
///
/// ```rust
/// use vitrine_disclosure::{Disclosure, DisclosureConfig, DisclosureEffect};
///
/// let mut panel: Disclosure<&str> = Disclosure::new(DisclosureConfig::default());
/// panel.open(0, "E-commerce");
/// assert!(panel.is_open());
///
/// panel.close(1_000);
/// assert!(!panel.is_open());
/// // Still rendered while the exit transition runs.
/// assert_eq!(panel.payload(), Some(&"E-commerce"));
///
/// assert!(panel.tick(1_299).is_empty());
/// assert_eq!(panel.tick(1_300).as_slice(), [DisclosureEffect::PayloadCleared]);
/// assert_eq!(panel.payload(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Disclosure<P, A = &'static str> {
    state: DisclosureState<P>,
    anchor: Option<A>,
    config: DisclosureConfig,
    timers: TimerQueue<Pending<A>>,
    revision: u64,
}

impl<P, A: Clone + PartialEq> Disclosure<P, A> {
    /// Creates a closed disclosure without a scroll anchor.
    #[must_use]
    pub fn new(config: DisclosureConfig) -> Self {
        Self {
            state: DisclosureState::Closed,
            anchor: None,
            config,
            timers: TimerQueue::new(),
            revision: 0,
        }
    }

    /// Sets the anchor scrolled to after each open.
    #[must_use]
    pub fn with_anchor(mut self, anchor: A) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Replaces the scroll anchor.
    ///
    /// A scroll already scheduled keeps targeting the anchor it was scheduled
    /// with, unless `anchor` is `None`, which cancels it.
    pub fn set_anchor(&mut self, anchor: Option<A>) {
        if anchor.is_none() {
            self.timers.cancel_where(|p| matches!(p, Pending::Anchor(_)));
        }
        self.anchor = anchor;
    }

    /// Returns the scroll anchor.
    #[must_use]
    pub fn anchor(&self) -> Option<&A> {
        self.anchor.as_ref()
    }

    /// Returns the timing configuration.
    #[must_use]
    pub fn config(&self) -> DisclosureConfig {
        self.config
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &DisclosureState<P> {
        &self.state
    }

    /// Returns `true` while the panel is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns `true` between `close` and the payload being cleared.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.state.is_closing()
    }

    /// Returns the payload while open or closing.
    #[must_use]
    pub fn payload(&self) -> Option<&P> {
        self.state.payload()
    }

    /// Returns a counter that increases on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Opens the panel with `payload` at time `now`.
    ///
    /// Allowed from any state. A pending payload clear is cancelled; a pending
    /// anchor scroll is rescheduled relative to `now`.
    pub fn open(&mut self, now: u64, payload: P) {
        self.timers.clear();
        self.state = DisclosureState::Open(payload);
        if let Some(anchor) = &self.anchor {
            self.timers.schedule(
                Pending::Anchor(anchor.clone()),
                now.saturating_add(self.config.open_scroll_delay),
            );
        }
        self.revision += 1;
    }

    /// Hides the panel at time `now` and schedules the payload clear.
    ///
    /// Returns `false` (and does nothing) if the panel was not open, so
    /// repeated closes never stack timers.
    pub fn close(&mut self, now: u64) -> bool {
        self.state = match mem::replace(&mut self.state, DisclosureState::Closed) {
            DisclosureState::Open(payload) => DisclosureState::Closing(payload),
            other => {
                self.state = other;
                return false;
            }
        };
        self.timers.cancel_where(|p| matches!(p, Pending::Anchor(_)));
        self.timers.schedule_once(
            Pending::Clear,
            now.saturating_add(self.config.close_duration),
        );
        self.revision += 1;
        true
    }

    /// Fires every timer due at `now`, in deadline order.
    pub fn tick(&mut self, now: u64) -> SmallVec<[DisclosureEffect<A>; 2]> {
        let mut effects = SmallVec::new();
        while let Some(effect) = self.fire_next(now) {
            effects.push(effect);
        }
        effects
    }

    /// Returns the earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Returns when the pending payload clear fires, if one is scheduled.
    #[must_use]
    pub fn pending_clear(&self) -> Option<u64> {
        self.timers.deadline(&Pending::Clear)
    }

    /// Returns `true` if any timer is pending.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Cancels all pending timers and drops the payload without effects.
    ///
    /// Returns the number of cancelled timers.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.timers.clear();
        if !self.state.is_closed() {
            self.state = DisclosureState::Closed;
            self.revision += 1;
        }
        cancelled
    }

    pub(crate) fn fire_next(&mut self, now: u64) -> Option<DisclosureEffect<A>> {
        let expired = self.timers.pop_expired(now)?;
        Some(match expired.key {
            Pending::Clear => {
                debug_assert!(
                    self.state.is_closing(),
                    "payload clear fired outside the closing state"
                );
                if self.state.is_closing() {
                    self.state = DisclosureState::Closed;
                    self.revision += 1;
                }
                DisclosureEffect::PayloadCleared
            }
            Pending::Anchor(anchor) => DisclosureEffect::ScrollToAnchor(anchor),
        })
    }
}
