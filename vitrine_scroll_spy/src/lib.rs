// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Scroll Spy: section tracking for single-page layouts.
//!
//! A single-page site is a vertical stack of named sections with a fixed
//! navigation bar on top. This crate answers two questions for such a page:
//!
//! - Which section is the reader currently looking at? ([`SectionTracker::evaluate`])
//! - How should the viewport move when a navigation item is clicked?
//!   ([`SectionTracker::scroll_to`] plus [`SmoothScroll`])
//!
//! It does **not** observe the DOM or any windowing system. Callers are
//! expected to:
//! - Forward scroll offsets, either directly to [`SectionTracker::evaluate`] or
//!   via [`SectionTracker::on_scroll`] and a per-frame [`SectionTracker::on_frame`].
//! - Provide live section geometry through a [`SectionLayout`] implementation.
//! - Apply the offsets returned by [`SectionTracker::sample_scroll`] to the
//!   real viewport while a smooth scroll is in flight.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_scroll_spy::{SectionGeometry, SectionTracker};
//!
//! let layout = vec![
//!     ("home", SectionGeometry::new(0.0, 800.0)),
//!     ("about", SectionGeometry::new(800.0, 800.0)),
//!     ("contact", SectionGeometry::new(1600.0, 800.0)),
//! ];
//!
//! let mut tracker = SectionTracker::new(["home", "about", "contact"]).unwrap();
//!
//! // 750 + the default 100px activation margin lands inside "about".
//! assert_eq!(tracker.evaluate(750.0, &layout), Some(&"about"));
//!
//! // Past the end of the page nothing matches; "about" is kept.
//! assert_eq!(tracker.evaluate(5_000.0, &layout), Some(&"about"));
//! ```
//!
//! ## Navigation clicks
//!
//! ```rust
//! use vitrine_scroll_spy::{SectionGeometry, SectionTracker};
//!
//! let layout = vec![
//!     ("home", SectionGeometry::new(0.0, 800.0)),
//!     ("contact", SectionGeometry::new(800.0, 400.0)),
//! ];
//! let mut tracker = SectionTracker::new(["home", "contact"]).unwrap();
//!
//! assert!(tracker.scroll_to(&"contact", 0, &layout));
//! assert!(!tracker.scroll_to(&"blog", 0, &layout)); // unknown: no-op
//!
//! // Drive the animation from the host's frame callback.
//! let mut now = 0;
//! while let Some(offset) = tracker.sample_scroll(now) {
//!     tracker.on_scroll(offset);
//!     now += 16;
//! }
//! assert_eq!(tracker.scroll_offset(), 800.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod geometry;
mod smooth;
mod tracker;

pub use geometry::{FnLayout, SectionGeometry, SectionLayout};
pub use smooth::{Easing, SmoothScroll};
pub use tracker::{DuplicateSectionError, Section, SectionTracker, SectionTrackerDebugInfo};
