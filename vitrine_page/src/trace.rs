// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation hooks for page activity.
//!
//! A [`Page`](crate::Page) reports what it does to a [`PageTrace`] sink. The
//! default, [`NoTrace`], ignores everything. [`RecordingTrace`] keeps an event
//! log for tests and inspectors, and `TracingTrace` (behind the `tracing`
//! feature) forwards events to the `tracing` ecosystem.

use vitrine_disclosure::Level;
use vitrine_document::LoadError;
use vitrine_gallery::{ProjectId, TechId};

/// A callback sink for page activity.
///
/// Every method has an empty default body, so sinks implement only what they
/// care about.
pub trait PageTrace {
    /// The active section changed.
    fn section_activated(&mut self, section: &str) {
        let _ = section;
    }

    /// A smooth scroll started towards `target`.
    fn scroll_started(&mut self, target: f64) {
        let _ = target;
    }

    /// The gallery category changed; `visible` projects remain.
    fn category_selected(&mut self, category: &str, visible: usize) {
        let _ = (category, visible);
    }

    /// The tech-stack panel opened for `project`.
    fn tech_stack_opened(&mut self, project: ProjectId) {
        let _ = project;
    }

    /// The tech-stack panel started closing.
    fn tech_stack_closed(&mut self, project: ProjectId) {
        let _ = project;
    }

    /// The document modal opened for `tech` and started loading `url`.
    fn document_opened(&mut self, tech: TechId, url: &str) {
        let _ = (tech, url);
    }

    /// The document modal started closing.
    fn document_closed(&mut self, tech: TechId) {
        let _ = tech;
    }

    /// A document finished loading.
    fn document_loaded(&mut self, url: &str, pages: usize) {
        let _ = (url, pages);
    }

    /// A document failed to load.
    fn document_failed(&mut self, error: &LoadError) {
        let _ = error;
    }

    /// A panel's exit transition finished and its payload was dropped.
    fn panel_cleared(&mut self, level: Level) {
        let _ = level;
    }

    /// The page was torn down, cancelling `cancelled` timers.
    fn torn_down(&mut self, cancelled: usize) {
        let _ = cancelled;
    }
}

/// A trace sink that ignores everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTrace;

impl PageTrace for NoTrace {}

/// One recorded page event.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// See [`PageTrace::section_activated`].
    SectionActivated(String),
    /// See [`PageTrace::scroll_started`].
    ScrollStarted(f64),
    /// See [`PageTrace::category_selected`].
    CategorySelected {
        /// Selected category id.
        category: String,
        /// Projects left visible.
        visible: usize,
    },
    /// See [`PageTrace::tech_stack_opened`].
    TechStackOpened(ProjectId),
    /// See [`PageTrace::tech_stack_closed`].
    TechStackClosed(ProjectId),
    /// See [`PageTrace::document_opened`].
    DocumentOpened {
        /// Tech entry whose document opened.
        tech: TechId,
        /// Document URL.
        url: String,
    },
    /// See [`PageTrace::document_closed`].
    DocumentClosed(TechId),
    /// See [`PageTrace::document_loaded`].
    DocumentLoaded {
        /// Document URL.
        url: String,
        /// Page count.
        pages: usize,
    },
    /// See [`PageTrace::document_failed`].
    DocumentFailed(LoadError),
    /// See [`PageTrace::panel_cleared`].
    PanelCleared(Level),
    /// See [`PageTrace::torn_down`].
    TornDown(usize),
}

/// Records every page event in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingTrace {
    events: Vec<TraceEvent>,
}

impl RecordingTrace {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn take(&mut self) -> Vec<TraceEvent> {
        core::mem::take(&mut self.events)
    }
}

impl PageTrace for RecordingTrace {
    fn section_activated(&mut self, section: &str) {
        self.events.push(TraceEvent::SectionActivated(section.into()));
    }

    fn scroll_started(&mut self, target: f64) {
        self.events.push(TraceEvent::ScrollStarted(target));
    }

    fn category_selected(&mut self, category: &str, visible: usize) {
        self.events.push(TraceEvent::CategorySelected {
            category: category.into(),
            visible,
        });
    }

    fn tech_stack_opened(&mut self, project: ProjectId) {
        self.events.push(TraceEvent::TechStackOpened(project));
    }

    fn tech_stack_closed(&mut self, project: ProjectId) {
        self.events.push(TraceEvent::TechStackClosed(project));
    }

    fn document_opened(&mut self, tech: TechId, url: &str) {
        self.events.push(TraceEvent::DocumentOpened {
            tech,
            url: url.into(),
        });
    }

    fn document_closed(&mut self, tech: TechId) {
        self.events.push(TraceEvent::DocumentClosed(tech));
    }

    fn document_loaded(&mut self, url: &str, pages: usize) {
        self.events.push(TraceEvent::DocumentLoaded {
            url: url.into(),
            pages,
        });
    }

    fn document_failed(&mut self, error: &LoadError) {
        self.events.push(TraceEvent::DocumentFailed(error.clone()));
    }

    fn panel_cleared(&mut self, level: Level) {
        self.events.push(TraceEvent::PanelCleared(level));
    }

    fn torn_down(&mut self, cancelled: usize) {
        self.events.push(TraceEvent::TornDown(cancelled));
    }
}

/// Forwards page events to `tracing` at debug level under the
/// `vitrine_page` target.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl PageTrace for TracingTrace {
    fn section_activated(&mut self, section: &str) {
        tracing::debug!(target: "vitrine_page", section, "section activated");
    }

    fn scroll_started(&mut self, target: f64) {
        tracing::debug!(target: "vitrine_page", offset = target, "smooth scroll started");
    }

    fn category_selected(&mut self, category: &str, visible: usize) {
        tracing::debug!(target: "vitrine_page", category, visible, "category selected");
    }

    fn tech_stack_opened(&mut self, project: ProjectId) {
        tracing::debug!(target: "vitrine_page", project, "tech stack opened");
    }

    fn tech_stack_closed(&mut self, project: ProjectId) {
        tracing::debug!(target: "vitrine_page", project, "tech stack closing");
    }

    fn document_opened(&mut self, tech: TechId, url: &str) {
        tracing::debug!(target: "vitrine_page", tech, url, "document opened");
    }

    fn document_closed(&mut self, tech: TechId) {
        tracing::debug!(target: "vitrine_page", tech, "document closing");
    }

    fn document_loaded(&mut self, url: &str, pages: usize) {
        tracing::info!(target: "vitrine_page", url, pages, "document loaded");
    }

    fn document_failed(&mut self, error: &LoadError) {
        tracing::warn!(target: "vitrine_page", url = error.url(), %error, "document failed to load");
    }

    fn panel_cleared(&mut self, level: Level) {
        tracing::debug!(target: "vitrine_page", ?level, "panel cleared");
    }

    fn torn_down(&mut self, cancelled: usize) {
        tracing::debug!(target: "vitrine_page", cancelled, "page torn down");
    }
}
