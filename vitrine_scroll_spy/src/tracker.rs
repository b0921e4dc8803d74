// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-spy tracking of the active section.

use alloc::vec::Vec;
use core::fmt;

use crate::geometry::SectionLayout;
use crate::smooth::SmoothScroll;

/// A named, vertically stacked region of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<K> {
    /// Unique section identifier.
    pub id: K,
    /// Position in declaration order, starting at zero.
    pub order_index: usize,
}

/// Error returned when two sections share an identifier.
#[derive(Clone, PartialEq, Eq)]
pub struct DuplicateSectionError<K> {
    /// The repeated identifier.
    pub id: K,
    /// Declaration index of the first occurrence.
    pub first: usize,
    /// Declaration index of the repeated occurrence.
    pub duplicate: usize,
}

impl<K: fmt::Debug> fmt::Debug for DuplicateSectionError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DuplicateSectionError {{ id: {:?}, first: {}, duplicate: {} }}",
            self.id, self.first, self.duplicate
        )
    }
}

impl<K: fmt::Debug> fmt::Display for DuplicateSectionError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "section {:?} declared at index {} was already declared at index {}",
            self.id, self.duplicate, self.first
        )
    }
}

impl<K: fmt::Debug> core::error::Error for DuplicateSectionError<K> {}

/// Determines which section is active for a scroll offset.
///
/// Sections are tested in declaration order against the probe
/// `scroll_offset + activation_margin`; the first section whose span contains
/// the probe becomes active. When nothing matches, the previously active
/// section is kept, so the active section never falls back to `None` once set.
///
/// Geometry is read through a [`SectionLayout`] on every evaluation. Hosts
/// that receive many scroll events per frame can record them with
/// [`SectionTracker::on_scroll`] and evaluate once in
/// [`SectionTracker::on_frame`].
///
/// The tracker also owns the smooth scroll used for navigation clicks, but it
/// never moves the viewport itself: hosts apply the offsets returned by
/// [`SectionTracker::sample_scroll`].
#[derive(Clone, Debug)]
pub struct SectionTracker<K> {
    sections: Vec<Section<K>>,
    active: Option<usize>,
    activation_margin: f64,
    revision: u64,
    pending_offset: Option<f64>,
    last_offset: f64,
    scroll: SmoothScroll,
}

impl<K: Clone + PartialEq> SectionTracker<K> {
    /// Offset added to the scroll position before matching, compensating for
    /// a fixed header overlay.
    pub const DEFAULT_ACTIVATION_MARGIN: f64 = 100.0;

    /// Creates a tracker over sections in declaration order.
    ///
    /// No section is active initially; see [`SectionTracker::with_initial_active`].
    pub fn new(ids: impl IntoIterator<Item = K>) -> Result<Self, DuplicateSectionError<K>> {
        let mut sections: Vec<Section<K>> = Vec::new();
        for (order_index, id) in ids.into_iter().enumerate() {
            if let Some(first) = sections.iter().find(|s| s.id == id) {
                return Err(DuplicateSectionError {
                    id,
                    first: first.order_index,
                    duplicate: order_index,
                });
            }
            sections.push(Section { id, order_index });
        }
        Ok(Self {
            sections,
            active: None,
            activation_margin: Self::DEFAULT_ACTIVATION_MARGIN,
            revision: 0,
            pending_offset: None,
            last_offset: 0.0,
            scroll: SmoothScroll::default(),
        })
    }

    /// Marks `id` as the active section before any scroll has been observed.
    ///
    /// Unknown ids are ignored. This does not bump the revision.
    #[must_use]
    pub fn with_initial_active(mut self, id: &K) -> Self {
        if let Some(index) = self.index_of(id) {
            self.active = Some(index);
        }
        self
    }

    /// Returns the sections in declaration order.
    #[must_use]
    pub fn sections(&self) -> &[Section<K>] {
        &self.sections
    }

    /// Returns `true` if `id` names a declared section.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.index_of(id).is_some()
    }

    /// Returns the active section id, if any section has become active.
    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.map(|i| &self.sections[i].id)
    }

    /// Returns `true` if `id` is the active section.
    #[must_use]
    pub fn is_active(&self, id: &K) -> bool {
        self.active().is_some_and(|active| active == id)
    }

    /// Returns a counter that increases each time the active section changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the activation margin.
    #[must_use]
    pub fn activation_margin(&self) -> f64 {
        self.activation_margin
    }

    /// Sets the activation margin used by subsequent evaluations.
    pub fn set_activation_margin(&mut self, margin: f64) {
        self.activation_margin = margin;
    }

    /// Returns the smooth scroll animator, for tuning duration and easing.
    pub fn smooth_scroll_mut(&mut self) -> &mut SmoothScroll {
        &mut self.scroll
    }

    /// Returns the most recently observed scroll offset.
    ///
    /// A recorded but not yet evaluated offset counts as observed.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.pending_offset.unwrap_or(self.last_offset)
    }

    /// Evaluates the active section for `scroll_offset` immediately.
    ///
    /// Returns the active section after evaluation.
    pub fn evaluate<L>(&mut self, scroll_offset: f64, layout: &L) -> Option<&K>
    where
        L: SectionLayout<K> + ?Sized,
    {
        self.pending_offset = None;
        self.last_offset = scroll_offset;
        let probe = scroll_offset + self.activation_margin;
        let hit = self.sections.iter().position(|s| {
            layout
                .section_geometry(&s.id)
                .is_some_and(|g| g.contains(probe))
        });
        if hit.is_some() && hit != self.active {
            self.active = hit;
            self.revision += 1;
        }
        self.active()
    }

    /// Records a scroll event without reading layout.
    ///
    /// Only the latest offset recorded before the next
    /// [`SectionTracker::on_frame`] is evaluated.
    pub fn on_scroll(&mut self, scroll_offset: f64) {
        self.pending_offset = Some(scroll_offset);
    }

    /// Returns `true` if a scroll event is waiting for evaluation.
    #[must_use]
    pub fn has_pending_scroll(&self) -> bool {
        self.pending_offset.is_some()
    }

    /// Evaluates the latest recorded scroll offset, if any.
    ///
    /// Returns `true` if the active section changed.
    pub fn on_frame<L>(&mut self, layout: &L) -> bool
    where
        L: SectionLayout<K> + ?Sized,
    {
        let Some(offset) = self.pending_offset else {
            return false;
        };
        let before = self.revision;
        self.evaluate(offset, layout);
        self.revision != before
    }

    /// Returns the offset that aligns section `id` with the viewport top.
    ///
    /// Returns `None` for undeclared sections and sections without geometry.
    #[must_use]
    pub fn scroll_target<L>(&self, id: &K, layout: &L) -> Option<f64>
    where
        L: SectionLayout<K> + ?Sized,
    {
        if !self.contains(id) {
            return None;
        }
        layout.section_geometry(id).map(|g| g.top)
    }

    /// Starts a smooth scroll to section `id`.
    ///
    /// Unknown sections are a silent no-op; returns whether a scroll started.
    pub fn scroll_to<L>(&mut self, id: &K, now: u64, layout: &L) -> bool
    where
        L: SectionLayout<K> + ?Sized,
    {
        match self.scroll_target(id, layout) {
            Some(target) => {
                self.scroll_to_offset(target, now);
                true
            }
            None => false,
        }
    }

    /// Starts a smooth scroll from the current offset to `target`.
    pub fn scroll_to_offset(&mut self, target: f64, now: u64) {
        let from = self.scroll_offset();
        self.scroll.start(from, target, now);
    }

    /// Cancels the smooth scroll in flight, for example on manual input.
    ///
    /// Returns `true` if a scroll was running.
    pub fn interrupt_scroll(&mut self) -> bool {
        self.scroll.interrupt()
    }

    /// Returns `true` while a smooth scroll is in flight.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_active()
    }

    /// Returns the offset the host should scroll to for time `now`.
    pub fn sample_scroll(&mut self, now: u64) -> Option<f64> {
        self.scroll.sample(now)
    }

    /// Snapshot of the tracker state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SectionTrackerDebugInfo<K> {
        SectionTrackerDebugInfo {
            active: self.active().cloned(),
            revision: self.revision,
            section_count: self.sections.len(),
            activation_margin: self.activation_margin,
            pending_offset: self.pending_offset,
            last_offset: self.last_offset,
            scroll_target: self.scroll.target(),
        }
    }

    fn index_of(&self, id: &K) -> Option<usize> {
        self.sections.iter().position(|s| s.id == *id)
    }
}

/// Debug snapshot of a [`SectionTracker`].
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTrackerDebugInfo<K> {
    /// Active section, if any.
    pub active: Option<K>,
    /// Active-section revision counter.
    pub revision: u64,
    /// Number of declared sections.
    pub section_count: usize,
    /// Margin added to the scroll offset before matching.
    pub activation_margin: f64,
    /// Recorded scroll offset waiting for the next frame.
    pub pending_offset: Option<f64>,
    /// Offset used by the last evaluation.
    pub last_offset: f64,
    /// Target of the smooth scroll in flight.
    pub scroll_target: Option<f64>,
}
