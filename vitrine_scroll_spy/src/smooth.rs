// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interruptible smooth scrolling.

/// Easing curve applied to normalized animation progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow finish.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Inputs outside the unit interval are clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Motion {
    from: f64,
    to: f64,
    start: u64,
}

/// A single in-flight scroll animation between two offsets.
///
/// The animation is sampled by the host on each frame with the current time.
/// Starting a new animation replaces the current one, and [`SmoothScroll::interrupt`]
/// drops it (for example when the user starts scrolling by hand).
///
/// ```rust
/// use vitrine_scroll_spy::SmoothScroll;
///
/// let mut scroll = SmoothScroll::new(400);
/// scroll.start(0.0, 1600.0, 1_000);
///
/// let mid = scroll.sample(1_200).unwrap();
/// assert!(mid > 0.0 && mid < 1600.0);
///
/// // The final sample lands exactly on the target and ends the animation.
/// assert_eq!(scroll.sample(1_400), Some(1600.0));
/// assert!(!scroll.is_active());
/// assert_eq!(scroll.sample(1_500), None);
/// ```
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    duration: u64,
    easing: Easing,
    motion: Option<Motion>,
}

impl SmoothScroll {
    /// Default animation length in milliseconds.
    pub const DEFAULT_DURATION: u64 = 400;

    /// Creates an idle animator with the given duration in milliseconds.
    #[must_use]
    pub fn new(duration: u64) -> Self {
        Self {
            duration,
            easing: Easing::default(),
            motion: None,
        }
    }

    /// Returns the animation duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Sets the duration used by subsequently started animations.
    pub fn set_duration(&mut self, duration: u64) {
        self.duration = duration;
    }

    /// Returns the easing curve.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Sets the easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Starts animating from `from` to `to` at time `now`, replacing any
    /// animation in flight.
    pub fn start(&mut self, from: f64, to: f64, now: u64) {
        self.motion = Some(Motion {
            from,
            to,
            start: now,
        });
    }

    /// Stops the current animation, leaving the viewport wherever the last
    /// sample put it.
    ///
    /// Returns `true` if an animation was running.
    pub fn interrupt(&mut self) -> bool {
        self.motion.take().is_some()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.motion.is_some()
    }

    /// Returns the target offset of the animation in flight.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.motion.map(|m| m.to)
    }

    /// Returns the offset the viewport should be at for time `now`.
    ///
    /// Once the duration has elapsed the target is returned one final time and
    /// the animation ends. Returns `None` when idle.
    pub fn sample(&mut self, now: u64) -> Option<f64> {
        let motion = self.motion?;
        let elapsed = now.saturating_sub(motion.start);
        if elapsed >= self.duration {
            self.motion = None;
            return Some(motion.to);
        }
        let t = elapsed as f64 / self.duration as f64;
        let eased = self.easing.apply(t);
        Some(motion.from + (motion.to - motion.from) * eased)
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}
