// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page controller tying every model together.

use vitrine_disclosure::{ChainEffect, Disclosure, DisclosureChain, DisclosureEffect, Level};
use vitrine_document::{
    DocumentSource, DocumentViewer, DocumentViewerDebugInfo, SimulatedSource, ViewerEvent,
};
use vitrine_gallery::{
    Category, CategoryFilter, Project, ProjectCatalog, ProjectId, TechEntry, TechId, TechPreview,
    tech_preview, toggle_expanded,
};
use vitrine_scroll_spy::{
    DuplicateSectionError, SectionLayout, SectionTracker, SectionTrackerDebugInfo,
};

use crate::config::PageConfig;
use crate::nav::NavItem;
use crate::trace::{NoTrace, PageTrace};

/// What the host should do after [`Page::on_frame`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    /// Offset to scroll the viewport to, while a smooth scroll runs.
    pub scroll_to: Option<f64>,
    /// Whether the highlighted navigation item changed.
    pub section_changed: bool,
}

/// Host-visible outcome of [`Page::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum PageEffect {
    /// A freshly opened panel asked to be scrolled into view; a smooth scroll
    /// towards `target` has started.
    ScrollStarted {
        /// Anchor that was resolved.
        anchor: String,
        /// Offset of the anchor's top edge.
        target: f64,
    },
    /// A panel's exit transition finished; stop rendering its content.
    PanelCleared(Level),
    /// The document viewer finished loading.
    Document(ViewerEvent),
}

/// A portfolio page: navigation with scroll spy, a filterable project
/// gallery, a tech-stack panel per project, and a document modal per
/// technology.
///
/// The page owns no clock and no layout. The host forwards scroll events
/// through [`Page::on_scroll`], calls [`Page::on_frame`] once per animation
/// frame and [`Page::tick`] whenever [`Page::next_deadline`] has passed, and
/// supplies live geometry (sections and anchors alike) through a
/// [`SectionLayout`].
///
/// The tech-stack panel and the document modal form a
/// [`DisclosureChain`]: the modal only opens inside an open panel, and closing
/// the panel closes the modal and cancels its pending load.
#[derive(Clone, Debug)]
pub struct Page<S = SimulatedSource, T = NoTrace> {
    config: PageConfig,
    catalog: ProjectCatalog,
    tracker: SectionTracker<String>,
    filter: CategoryFilter,
    expanded: Option<ProjectId>,
    /// The modal's payload names its project, so a closing modal keeps
    /// resolving against the project it was opened from.
    panels: DisclosureChain<ProjectId, (ProjectId, TechId), String>,
    viewer: DocumentViewer<S>,
    trace: T,
}

impl Page {
    /// Creates a page over `catalog` with simulated documents and no tracing.
    ///
    /// Fails if two navigation items name the same section.
    pub fn new(
        catalog: ProjectCatalog,
        config: PageConfig,
    ) -> Result<Self, DuplicateSectionError<String>> {
        Self::with_parts(catalog, config, SimulatedSource::default(), NoTrace)
    }
}

impl<S: DocumentSource, T: PageTrace> Page<S, T> {
    /// Creates a page with an explicit document source and trace sink.
    pub fn with_parts(
        catalog: ProjectCatalog,
        config: PageConfig,
        source: S,
        trace: T,
    ) -> Result<Self, DuplicateSectionError<String>> {
        let mut tracker = SectionTracker::new(config.nav.iter().map(|n| n.section.clone()))?
            .with_initial_active(&config.initial_section);
        tracker.set_activation_margin(config.activation_margin);
        tracker
            .smooth_scroll_mut()
            .set_duration(config.smooth_scroll_duration);

        let timing = config.disclosure_config();
        let panels = DisclosureChain::new(
            Disclosure::new(timing).with_anchor(config.tech_panel_anchor.clone()),
            Disclosure::new(timing),
        );
        let viewer = DocumentViewer::new(source, config.viewer_config());

        Ok(Self {
            config,
            catalog,
            tracker,
            filter: CategoryFilter::new(),
            expanded: None,
            panels,
            viewer,
            trace,
        })
    }

    /// Replaces the trace sink.
    #[must_use]
    pub fn with_trace<U: PageTrace>(self, trace: U) -> Page<S, U> {
        Page {
            config: self.config,
            catalog: self.catalog,
            tracker: self.tracker,
            filter: self.filter,
            expanded: self.expanded,
            panels: self.panels,
            viewer: self.viewer,
            trace,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Returns the project catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// Returns the trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Returns the trace sink mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    // --- navigation ---

    /// Returns the section tracker.
    #[must_use]
    pub fn tracker(&self) -> &SectionTracker<String> {
        &self.tracker
    }

    /// Returns the navigation items.
    #[must_use]
    pub fn nav_items(&self) -> &[NavItem] {
        &self.config.nav
    }

    /// Returns the active section id.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.tracker.active().map(String::as_str)
    }

    /// Returns `true` if `item` should be drawn highlighted.
    #[must_use]
    pub fn is_highlighted(&self, item: &NavItem) -> bool {
        self.active_section() == Some(item.section.as_str())
    }

    /// Records a scroll event; evaluation waits for the next frame.
    pub fn on_scroll(&mut self, scroll_offset: f64) {
        self.tracker.on_scroll(scroll_offset);
    }

    /// Cancels a running smooth scroll, for example on wheel or touch input.
    pub fn interrupt_scroll(&mut self) -> bool {
        self.tracker.interrupt_scroll()
    }

    /// Advances the smooth scroll and evaluates the latest scroll offset.
    pub fn on_frame<L>(&mut self, now: u64, layout: &L) -> FrameUpdate
    where
        L: SectionLayout<String> + ?Sized,
    {
        let scroll_to = self.tracker.sample_scroll(now);
        if let Some(offset) = scroll_to {
            self.tracker.on_scroll(offset);
        }
        let section_changed = self.tracker.on_frame(layout);
        if section_changed && let Some(active) = self.tracker.active() {
            self.trace.section_activated(active);
        }
        FrameUpdate {
            scroll_to,
            section_changed,
        }
    }

    /// Starts a smooth scroll to `section`.
    ///
    /// Unknown sections, and sections the layout cannot place, are ignored.
    /// Returns whether a scroll started.
    pub fn navigate_to<L>(&mut self, section: &str, now: u64, layout: &L) -> bool
    where
        L: SectionLayout<String> + ?Sized,
    {
        let Some(target) = self.tracker.scroll_target(&section.to_owned(), layout) else {
            return false;
        };
        self.start_scroll(target, now);
        true
    }

    // --- gallery ---

    /// Returns the gallery category tabs.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.config.categories
    }

    /// Returns the active category id.
    #[must_use]
    pub fn active_category(&self) -> &str {
        self.filter.active()
    }

    /// Selects a gallery category. Returns whether the selection changed.
    pub fn select_category(&mut self, id: &str) -> bool {
        if !self.filter.select(id) {
            return false;
        }
        let visible = self.filter.apply(self.catalog.projects()).len();
        self.trace.category_selected(id, visible);
        true
    }

    /// Returns the projects in the active category, in catalog order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.filter.apply(self.catalog.projects())
    }

    /// Returns the card preview of a project's technologies.
    #[must_use]
    pub fn tech_preview(&self, project: ProjectId) -> Option<TechPreview<'_>> {
        let project = self.catalog.project(project)?;
        Some(tech_preview(project, self.config.tech_preview_limit))
    }

    /// Expands or collapses a project card. Returns the expanded project.
    pub fn toggle_project(&mut self, project: ProjectId) -> Option<ProjectId> {
        self.expanded = toggle_expanded(self.expanded, project);
        self.expanded
    }

    /// Returns the expanded project card.
    #[must_use]
    pub fn expanded_project(&self) -> Option<ProjectId> {
        self.expanded
    }

    // --- panels ---

    /// Opens the tech-stack panel for `project`.
    ///
    /// An open document modal is closed first. Returns `false` for projects
    /// that are not in the catalog.
    pub fn open_tech_stack(&mut self, project: ProjectId, now: u64) -> bool {
        if self.catalog.project(project).is_none() {
            return false;
        }
        self.close_document(now);
        self.panels.open_parent(now, project);
        self.trace.tech_stack_opened(project);
        true
    }

    /// Closes the tech-stack panel, cascading to the document modal.
    ///
    /// Returns whether the panel was open.
    pub fn close_tech_stack(&mut self, now: u64) -> bool {
        self.close_document(now);
        if !self.panels.close_parent(now) {
            return false;
        }
        if let Some(&project) = self.panels.parent().payload() {
            self.trace.tech_stack_closed(project);
        }
        true
    }

    /// Returns `true` while the tech-stack panel is shown.
    #[must_use]
    pub fn is_tech_stack_open(&self) -> bool {
        self.panels.parent().is_open()
    }

    /// Returns the project shown in the tech-stack panel, including during
    /// its exit transition.
    #[must_use]
    pub fn tech_stack_project(&self) -> Option<&Project> {
        self.catalog.project(*self.panels.parent().payload()?)
    }

    /// Returns the tech-stack entries shown for `project`.
    ///
    /// Projects without their own entries fall back to
    /// [`PageConfig::fallback_tech_stack`].
    #[must_use]
    pub fn tech_stack_of(&self, project: ProjectId) -> Option<&[TechEntry]> {
        let project = self.catalog.project(project)?;
        Some(if project.tech_stack.is_empty() {
            &self.config.fallback_tech_stack
        } else {
            &project.tech_stack
        })
    }

    /// Opens the document modal for tech entry `tech` of the open panel's
    /// project and starts loading its document.
    ///
    /// Returns `false` if the panel is not open or the project has no such
    /// entry.
    pub fn open_document(&mut self, tech: TechId, now: u64) -> bool {
        if !self.panels.parent().is_open() {
            return false;
        }
        let Some(&project) = self.panels.parent().payload() else {
            return false;
        };
        let Some(entry) = self.tech_entry(project, tech) else {
            return false;
        };
        let url = entry.document_url.clone();
        if !self.panels.open_child(now, (project, tech)) {
            return false;
        }
        self.trace.document_opened(tech, &url);
        self.viewer.open(url, now);
        true
    }

    /// Closes the document modal and cancels its pending load.
    ///
    /// Returns whether the modal was open.
    pub fn close_document(&mut self, now: u64) -> bool {
        if !self.panels.close_child(now) {
            return false;
        }
        self.viewer.close();
        if let Some(&(_, tech)) = self.panels.child().payload() {
            self.trace.document_closed(tech);
        }
        true
    }

    /// Returns `true` while the document modal is shown.
    #[must_use]
    pub fn is_document_open(&self) -> bool {
        self.panels.child().is_open()
    }

    /// Returns the tech entry shown in the document modal, including during
    /// its exit transition.
    #[must_use]
    pub fn document_entry(&self) -> Option<&TechEntry> {
        let &(project, tech) = self.panels.child().payload()?;
        self.tech_entry(project, tech)
    }

    /// Returns the download link of the document in the modal.
    #[must_use]
    pub fn document_download_url(&self) -> Option<&str> {
        self.document_entry().map(|t| t.document_url.as_str())
    }

    /// Returns the document viewer.
    #[must_use]
    pub fn viewer(&self) -> &DocumentViewer<S> {
        &self.viewer
    }

    /// Returns the document viewer for paging and zoom commands.
    pub fn viewer_mut(&mut self) -> &mut DocumentViewer<S> {
        &mut self.viewer
    }

    // --- time ---

    /// Returns the earliest time [`Page::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.panels.next_deadline(), self.viewer.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires every timer due at `now`.
    ///
    /// Scroll-to-anchor requests are resolved through `layout`; anchors the
    /// layout cannot place are dropped.
    pub fn tick<L>(&mut self, now: u64, layout: &L) -> Vec<PageEffect>
    where
        L: SectionLayout<String> + ?Sized,
    {
        let mut effects = Vec::new();
        for ChainEffect { level, effect } in self.panels.tick(now) {
            match effect {
                DisclosureEffect::ScrollToAnchor(anchor) => {
                    if let Some(geometry) = layout.section_geometry(&anchor) {
                        self.start_scroll(geometry.top, now);
                        effects.push(PageEffect::ScrollStarted {
                            anchor,
                            target: geometry.top,
                        });
                    }
                }
                DisclosureEffect::PayloadCleared => {
                    self.trace.panel_cleared(level);
                    effects.push(PageEffect::PanelCleared(level));
                }
            }
        }
        if let Some(event) = self.viewer.tick(now) {
            match &event {
                ViewerEvent::Loaded { pages } => {
                    let url = self.viewer.url().unwrap_or_default();
                    self.trace.document_loaded(url, *pages);
                }
                ViewerEvent::Failed(err) => self.trace.document_failed(err),
            }
            effects.push(PageEffect::Document(event));
        }
        effects
    }

    /// Cancels every pending timer and smooth scroll, for when the page is
    /// unmounted. Panels close without effects.
    ///
    /// Returns the number of cancelled timers.
    pub fn teardown(&mut self) -> usize {
        let mut cancelled = self.panels.teardown();
        if self.viewer.next_deadline().is_some() {
            cancelled += 1;
        }
        self.viewer.close();
        self.tracker.interrupt_scroll();
        self.trace.torn_down(cancelled);
        cancelled
    }

    /// Snapshot of the page state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PageDebugInfo {
        PageDebugInfo {
            tracker: self.tracker.debug_info(),
            active_category: self.filter.active().to_owned(),
            expanded_project: self.expanded,
            tech_stack: self.panels.parent().payload().copied(),
            tech_stack_open: self.panels.parent().is_open(),
            document: self.panels.child().payload().map(|&(_, tech)| tech),
            document_open: self.panels.child().is_open(),
            viewer: self.viewer.debug_info(),
            next_deadline: self.next_deadline(),
        }
    }

    fn tech_entry(&self, project: ProjectId, tech: TechId) -> Option<&TechEntry> {
        self.tech_stack_of(project)?.iter().find(|t| t.id == tech)
    }

    fn start_scroll(&mut self, target: f64, now: u64) {
        self.tracker.scroll_to_offset(target, now);
        self.trace.scroll_started(target);
    }
}

/// Debug snapshot of a [`Page`].
#[derive(Clone, Debug, PartialEq)]
pub struct PageDebugInfo {
    /// Section tracker state.
    pub tracker: SectionTrackerDebugInfo<String>,
    /// Active gallery category.
    pub active_category: String,
    /// Expanded project card.
    pub expanded_project: Option<ProjectId>,
    /// Project in the tech-stack panel, while open or closing.
    pub tech_stack: Option<ProjectId>,
    /// Whether the tech-stack panel is shown.
    pub tech_stack_open: bool,
    /// Tech entry in the document modal, while open or closing.
    pub document: Option<TechId>,
    /// Whether the document modal is shown.
    pub document_open: bool,
    /// Document viewer state.
    pub viewer: DocumentViewerDebugInfo,
    /// Earliest pending timer.
    pub next_deadline: Option<u64>,
}
