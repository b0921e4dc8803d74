// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer state: load lifecycle, page cursor, and zoom.

use alloc::format;
use alloc::string::String;
use core::ops::RangeInclusive;

use vitrine_timing::TimerQueue;

use crate::source::{Document, DocumentSource, LoadError};

/// Tunables for a [`DocumentViewer`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Simulated latency between `open` and the document being ready, in
    /// milliseconds.
    pub load_delay: u64,
    /// Smallest zoom factor.
    pub min_zoom: f64,
    /// Largest zoom factor.
    pub max_zoom: f64,
    /// Zoom change per zoom-in/zoom-out action.
    pub zoom_step: f64,
    /// Number of leading pages given a thumbnail.
    pub thumbnail_limit: usize,
}

impl ViewerConfig {
    /// Default simulated load latency.
    pub const DEFAULT_LOAD_DELAY: u64 = 1000;
    /// Zoom factor of a freshly opened document.
    pub const DEFAULT_ZOOM: f64 = 1.0;
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            load_delay: Self::DEFAULT_LOAD_DELAY,
            min_zoom: 0.5,
            max_zoom: 3.0,
            zoom_step: 0.25,
            thumbnail_limit: 10,
        }
    }
}

/// Where a [`DocumentViewer`] is in its load lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing is open.
    #[default]
    Idle,
    /// A load is scheduled and has not completed yet.
    Loading,
    /// The document is loaded and can be paged through.
    Ready(Document),
    /// The load failed; [`DocumentViewer::retry`] starts over.
    Failed(LoadError),
}

/// Outcome of a completed load, returned from [`DocumentViewer::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The document is ready with this many pages.
    Loaded {
        /// Total page count.
        pages: usize,
    },
    /// The document could not be loaded.
    Failed(LoadError),
}

/// Result of a direct page entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageEntry {
    /// The entry was in range and is now the current page.
    Moved(usize),
    /// The entry was out of range or unparsable; nothing changed.
    Ignored,
}

/// Thumbnail strip for the loaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailStrip {
    /// Pages that get a thumbnail.
    pub pages: RangeInclusive<usize>,
    /// Page jumped to by the trailing "more" button, when pages were left out.
    pub overflow: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LoadDue;

/// Headless state of a document viewer modal.
///
/// [`DocumentViewer::open`] starts a simulated load that completes on the
/// first [`DocumentViewer::tick`] at or after `now + load_delay`. Once
/// [`LoadState::Ready`], the viewer keeps a 1-based page cursor in
/// `[1, total_pages]` and a zoom factor in `[min_zoom, max_zoom]`.
///
/// Paging and zoom commands are no-ops while nothing is ready, and never
/// fail: edges clamp and out-of-range page entries are ignored.
#[derive(Clone, Debug)]
pub struct DocumentViewer<S> {
    source: S,
    config: ViewerConfig,
    url: Option<String>,
    state: LoadState,
    page: usize,
    zoom: f64,
    timers: TimerQueue<LoadDue>,
    revision: u64,
}

impl<S: DocumentSource> DocumentViewer<S> {
    /// Creates an idle viewer loading from `source`.
    #[must_use]
    pub fn new(source: S, config: ViewerConfig) -> Self {
        Self {
            source,
            config,
            url: None,
            state: LoadState::Idle,
            page: 1,
            zoom: ViewerConfig::DEFAULT_ZOOM,
            timers: TimerQueue::new(),
            revision: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the document source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the URL being shown or loaded.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Returns `true` while a load is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Returns the loaded document.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        match &self.state {
            LoadState::Ready(doc) => Some(doc),
            _ => None,
        }
    }

    /// Returns the load error, if the last load failed.
    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns a counter that increases on every visible change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Starts loading `url` at time `now`, replacing whatever was open.
    ///
    /// The page cursor and zoom are reset.
    pub fn open(&mut self, url: impl Into<String>, now: u64) {
        self.url = Some(url.into());
        self.state = LoadState::Loading;
        self.page = 1;
        self.zoom = ViewerConfig::DEFAULT_ZOOM;
        self.timers
            .schedule_replacing(LoadDue, now.saturating_add(self.config.load_delay));
        self.revision += 1;
    }

    /// Reloads the current URL from scratch.
    ///
    /// Returns `false` if nothing was opened.
    pub fn retry(&mut self, now: u64) -> bool {
        match self.url.take() {
            Some(url) => {
                self.open(url, now);
                true
            }
            None => false,
        }
    }

    /// Closes the viewer and cancels a pending load.
    ///
    /// Returns `true` if anything was open.
    pub fn close(&mut self) -> bool {
        self.timers.clear();
        if self.url.is_none() && self.state == LoadState::Idle {
            return false;
        }
        self.url = None;
        self.state = LoadState::Idle;
        self.page = 1;
        self.zoom = ViewerConfig::DEFAULT_ZOOM;
        self.revision += 1;
        true
    }

    /// Returns when the pending load completes.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Completes the pending load if it is due at `now`.
    pub fn tick(&mut self, now: u64) -> Option<ViewerEvent> {
        self.timers.pop_expired(now)?;
        let url = self.url.as_deref()?;
        let loaded = self.source.load(url).and_then(|doc| {
            if doc.pages.is_empty() {
                Err(LoadError::Empty { url: url.into() })
            } else {
                Ok(doc)
            }
        });
        let event = match loaded {
            Ok(doc) => {
                let pages = doc.page_count();
                self.state = LoadState::Ready(doc);
                ViewerEvent::Loaded { pages }
            }
            Err(err) => {
                self.state = LoadState::Failed(err.clone());
                ViewerEvent::Failed(err)
            }
        };
        self.revision += 1;
        Some(event)
    }

    /// Returns the page count, or 0 while nothing is ready.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.document().map_or(0, Document::page_count)
    }

    /// Returns the 1-based current page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Returns `true` if [`DocumentViewer::next`] would move.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Returns `true` if [`DocumentViewer::previous`] would move.
    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.total_pages() > 0 && self.page > 1
    }

    /// Moves to the next page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.set_page(self.page + 1);
        true
    }

    /// Moves to the previous page. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.set_page(self.page - 1);
        true
    }

    /// Jumps to `page` if it is in `[1, total_pages]`.
    ///
    /// Anything else is ignored and leaves the cursor where it was.
    pub fn enter_page(&mut self, page: usize) -> PageEntry {
        if page == 0 || page > self.total_pages() {
            return PageEntry::Ignored;
        }
        self.set_page(page);
        PageEntry::Moved(page)
    }

    /// Parses `text` as a page number and enters it.
    ///
    /// Surrounding whitespace is allowed; unparsable text is ignored.
    pub fn enter_page_text(&mut self, text: &str) -> PageEntry {
        match text.trim().parse::<usize>() {
            Ok(page) => self.enter_page(page),
            Err(_) => PageEntry::Ignored,
        }
    }

    /// Returns the zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zooms in by one step, up to the maximum. Returns whether it changed.
    pub fn zoom_in(&mut self) -> bool {
        let zoom = (self.zoom + self.config.zoom_step).min(self.config.max_zoom);
        self.set_zoom(zoom)
    }

    /// Zooms out by one step, down to the minimum. Returns whether it changed.
    pub fn zoom_out(&mut self) -> bool {
        let zoom = (self.zoom - self.config.zoom_step).max(self.config.min_zoom);
        self.set_zoom(zoom)
    }

    /// Returns to the default zoom. Returns whether it changed.
    pub fn reset_zoom(&mut self) -> bool {
        self.set_zoom(ViewerConfig::DEFAULT_ZOOM)
    }

    /// Returns the "Page {current} of {total}" caption.
    #[must_use]
    pub fn caption(&self) -> Option<String> {
        let total = self.total_pages();
        (total > 0).then(|| format!("Page {} of {}", self.page, total))
    }

    /// Returns the text of 1-based page `page`.
    #[must_use]
    pub fn page_text(&self, page: usize) -> Option<&str> {
        self.document()?.page(page)
    }

    /// Returns the text of the current page.
    #[must_use]
    pub fn current_page_text(&self) -> Option<&str> {
        self.page_text(self.page)
    }

    /// Returns the thumbnail strip of the loaded document.
    #[must_use]
    pub fn thumbnails(&self) -> Option<ThumbnailStrip> {
        let total = self.total_pages();
        if total == 0 {
            return None;
        }
        let limit = self.config.thumbnail_limit;
        Some(ThumbnailStrip {
            pages: 1..=total.min(limit),
            overflow: (total > limit).then_some(limit + 1),
        })
    }

    /// Snapshot of the viewer state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DocumentViewerDebugInfo {
        DocumentViewerDebugInfo {
            url: self.url.clone(),
            loading: self.is_loading(),
            failed: self.error().is_some(),
            current_page: self.page,
            total_pages: self.total_pages(),
            zoom: self.zoom,
            pending_load: self.timers.next_deadline(),
            revision: self.revision,
        }
    }

    fn set_page(&mut self, page: usize) {
        if self.page != page {
            self.page = page;
            self.revision += 1;
        }
    }

    fn set_zoom(&mut self, zoom: f64) -> bool {
        if self.document().is_none() || self.zoom == zoom {
            return false;
        }
        self.zoom = zoom;
        self.revision += 1;
        true
    }
}

/// Debug snapshot of a [`DocumentViewer`].
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentViewerDebugInfo {
    /// URL being shown or loaded.
    pub url: Option<String>,
    /// Whether a load is pending.
    pub loading: bool,
    /// Whether the last load failed.
    pub failed: bool,
    /// 1-based current page.
    pub current_page: usize,
    /// Page count, 0 while nothing is ready.
    pub total_pages: usize,
    /// Zoom factor.
    pub zoom: f64,
    /// Deadline of the pending load.
    pub pending_load: Option<u64>,
    /// Revision counter.
    pub revision: u64,
}
