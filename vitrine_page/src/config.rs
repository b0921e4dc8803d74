// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-wide configuration.

use vitrine_disclosure::DisclosureConfig;
use vitrine_document::ViewerConfig;
use vitrine_gallery::{Category, TechEntry};
use vitrine_scroll_spy::{SectionTracker, SmoothScroll};

use crate::nav::{NavItem, default_categories, default_nav_items};

/// Everything tunable about a [`Page`](crate::Page).
///
/// Defaults reproduce the portfolio's behavior: a 100 px activation margin,
/// 300 ms panel exit transitions, a 100 ms delay before scrolling to a freshly
/// opened tech-stack panel, 400 ms smooth scrolls, a 1 s simulated document
/// load, and four technologies per project card.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    /// Offset added to the scroll position before matching sections.
    pub activation_margin: f64,
    /// Panel exit transition length, in milliseconds.
    pub close_duration: u64,
    /// Delay between opening the tech-stack panel and scrolling to it.
    pub open_scroll_delay: u64,
    /// Length of navigation smooth scrolls.
    pub smooth_scroll_duration: u64,
    /// Simulated document load latency.
    pub load_delay: u64,
    /// Technologies shown on a project card before "+N more".
    pub tech_preview_limit: usize,
    /// Anchor element scrolled to when the tech-stack panel opens.
    pub tech_panel_anchor: String,
    /// Section active before the first scroll event.
    pub initial_section: String,
    /// Navigation bar items; their sections are tracked in this order.
    pub nav: Vec<NavItem>,
    /// Gallery category tabs.
    pub categories: Vec<Category>,
    /// Tech-stack entries shown for projects that declare none.
    pub fallback_tech_stack: Vec<TechEntry>,
}

impl PageConfig {
    /// Default number of technologies shown per project card.
    pub const DEFAULT_TECH_PREVIEW_LIMIT: usize = 4;
    /// Default anchor of the tech-stack panel.
    pub const DEFAULT_TECH_PANEL_ANCHOR: &'static str = "project-tech-stack";
    /// Default initial section.
    pub const DEFAULT_INITIAL_SECTION: &'static str = "home";

    /// Sets the activation margin.
    #[must_use]
    pub fn with_activation_margin(mut self, margin: f64) -> Self {
        self.activation_margin = margin;
        self
    }

    /// Sets the panel exit transition length.
    #[must_use]
    pub fn with_close_duration(mut self, ms: u64) -> Self {
        self.close_duration = ms;
        self
    }

    /// Sets the delay before scrolling to an opened panel.
    #[must_use]
    pub fn with_open_scroll_delay(mut self, ms: u64) -> Self {
        self.open_scroll_delay = ms;
        self
    }

    /// Sets the smooth scroll length.
    #[must_use]
    pub fn with_smooth_scroll_duration(mut self, ms: u64) -> Self {
        self.smooth_scroll_duration = ms;
        self
    }

    /// Sets the simulated document load latency.
    #[must_use]
    pub fn with_load_delay(mut self, ms: u64) -> Self {
        self.load_delay = ms;
        self
    }

    /// Sets how many technologies a project card shows.
    #[must_use]
    pub fn with_tech_preview_limit(mut self, limit: usize) -> Self {
        self.tech_preview_limit = limit;
        self
    }

    /// Sets the tech-stack panel anchor.
    #[must_use]
    pub fn with_tech_panel_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.tech_panel_anchor = anchor.into();
        self
    }

    /// Sets the initial section.
    #[must_use]
    pub fn with_initial_section(mut self, section: impl Into<String>) -> Self {
        self.initial_section = section.into();
        self
    }

    /// Replaces the navigation items.
    #[must_use]
    pub fn with_nav(mut self, nav: Vec<NavItem>) -> Self {
        self.nav = nav;
        self
    }

    /// Replaces the gallery categories.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Sets the entries shown for projects without a tech stack.
    #[must_use]
    pub fn with_fallback_tech_stack(mut self, entries: Vec<TechEntry>) -> Self {
        self.fallback_tech_stack = entries;
        self
    }

    /// Timing for the tech-stack panel and document modal.
    #[must_use]
    pub fn disclosure_config(&self) -> DisclosureConfig {
        DisclosureConfig {
            close_duration: self.close_duration,
            open_scroll_delay: self.open_scroll_delay,
        }
    }

    /// Configuration for the document viewer.
    #[must_use]
    pub fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            load_delay: self.load_delay,
            ..ViewerConfig::default()
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            activation_margin: SectionTracker::<String>::DEFAULT_ACTIVATION_MARGIN,
            close_duration: DisclosureConfig::DEFAULT_CLOSE_DURATION,
            open_scroll_delay: DisclosureConfig::DEFAULT_OPEN_SCROLL_DELAY,
            smooth_scroll_duration: SmoothScroll::DEFAULT_DURATION,
            load_delay: ViewerConfig::DEFAULT_LOAD_DELAY,
            tech_preview_limit: Self::DEFAULT_TECH_PREVIEW_LIMIT,
            tech_panel_anchor: Self::DEFAULT_TECH_PANEL_ANCHOR.into(),
            initial_section: Self::DEFAULT_INITIAL_SECTION.into(),
            nav: default_nav_items(),
            categories: default_categories(),
            fallback_tech_stack: Vec::new(),
        }
    }
}
