// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section geometry and live layout queries.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Rect;

/// Vertical placement of a section in document coordinates.
///
/// A section covers the half-open span `[top, top + height)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    /// Document offset of the section's top edge.
    pub top: f64,
    /// Height of the section.
    pub height: f64,
}

impl SectionGeometry {
    /// Creates geometry from a top offset and height.
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Creates geometry from a document-space span.
    #[must_use]
    pub fn from_span(span: Range<f64>) -> Self {
        Self {
            top: span.start,
            height: span.end - span.start,
        }
    }

    /// Creates geometry from the vertical extent of a document-space rectangle.
    ///
    /// The horizontal extent is ignored.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self {
            top: rect.y0,
            height: rect.height(),
        }
    }

    /// Returns the document offset just past the section's bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns the covered span `top..bottom`.
    #[must_use]
    pub fn span(&self) -> Range<f64> {
        self.top..self.bottom()
    }

    /// Returns `true` if `probe` lies in `[top, top + height)`.
    ///
    /// Always `false` for NaN probes and non-positive heights.
    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.bottom()
    }
}

/// Live source of section geometry.
///
/// Hosts implement this over whatever layout system they have (a DOM, a box
/// tree, a retained widget tree). It is queried on every evaluation so layout
/// changes are always observed; implementations should not cache.
///
/// Returning `None` means the element is not currently laid out; it is then
/// skipped during evaluation and treated as an unknown scroll target.
pub trait SectionLayout<K: ?Sized> {
    /// Returns the current geometry of the element identified by `id`.
    fn section_geometry(&self, id: &K) -> Option<SectionGeometry>;
}

impl<K: PartialEq> SectionLayout<K> for [(K, SectionGeometry)] {
    fn section_geometry(&self, id: &K) -> Option<SectionGeometry> {
        self.iter().find(|(k, _)| k == id).map(|(_, g)| *g)
    }
}

impl<K: PartialEq> SectionLayout<K> for Vec<(K, SectionGeometry)> {
    fn section_geometry(&self, id: &K) -> Option<SectionGeometry> {
        self.as_slice().section_geometry(id)
    }
}

impl<K: ?Sized, L: SectionLayout<K> + ?Sized> SectionLayout<K> for &L {
    fn section_geometry(&self, id: &K) -> Option<SectionGeometry> {
        (**self).section_geometry(id)
    }
}

/// Adapts a closure into a [`SectionLayout`].
///
/// ```rust
/// use vitrine_scroll_spy::{FnLayout, SectionGeometry, SectionLayout};
///
/// let layout = FnLayout(|id: &&str| match *id {
///     "home" => Some(SectionGeometry::new(0.0, 800.0)),
///     _ => None,
/// });
/// assert!(layout.section_geometry(&"home").is_some());
/// assert!(layout.section_geometry(&"missing").is_none());
/// ```
#[derive(Copy, Clone, Debug)]
pub struct FnLayout<F>(pub F);

impl<K: ?Sized, F> SectionLayout<K> for FnLayout<F>
where
    F: Fn(&K) -> Option<SectionGeometry>,
{
    fn section_geometry(&self, id: &K) -> Option<SectionGeometry> {
        (self.0)(id)
    }
}
