// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Page: the headless controller of a single-page portfolio.
//!
//! [`Page`] composes the Vitrine models into the behavior of one page:
//!
//! - a navigation bar whose highlight follows the scroll position
//!   (`vitrine_scroll_spy`), with smooth scrolling on click;
//! - a project gallery with category tabs, card previews, and expandable
//!   cards (`vitrine_gallery`);
//! - a tech-stack panel per project and a document modal per technology,
//!   with deferred teardown and cascade close (`vitrine_disclosure`);
//! - a document viewer with simulated loading, paging, and zoom
//!   (`vitrine_document`).
//!
//! Around it sit [`PageConfig`], [`NavItem`], validated [`ExternalLink`]s,
//! and the [`PageTrace`] observation hooks.
//!
//! ## Walkthrough
//!
//! ```rust
//! use vitrine_gallery::{Project, ProjectCatalog, TechEntry};
//! use vitrine_page::{Page, PageConfig, PageEffect};
//! use vitrine_scroll_spy::SectionGeometry;
//!
//! let catalog = ProjectCatalog::from_projects(vec![Project {
//!     id: 1,
//!     category: "ecommerce".into(),
//!     title: "Storefront".into(),
//!     description: String::new(),
//!     thumbnail: String::new(),
//!     technologies: vec!["React".into(), "Node.js".into()],
//!     tech_stack: vec![TechEntry {
//!         id: 2,
//!         name: "Backend".into(),
//!         icon: String::new(),
//!         description: String::new(),
//!         document_url: "/docs/backend.pdf".into(),
//!     }],
//!     live_link: String::new(),
//!     github_link: String::new(),
//! }])
//! .unwrap();
//!
//! let layout: Vec<(String, SectionGeometry)> = vec![
//!     ("home".into(), SectionGeometry::new(0.0, 800.0)),
//!     ("summary".into(), SectionGeometry::new(800.0, 600.0)),
//!     ("project-tech-stack".into(), SectionGeometry::new(2400.0, 900.0)),
//! ];
//!
//! let mut page = Page::new(catalog, PageConfig::default()).unwrap();
//! assert_eq!(page.active_section(), Some("home"));
//!
//! page.on_scroll(750.0);
//! assert!(page.on_frame(0, &layout).section_changed);
//! assert_eq!(page.active_section(), Some("summary"));
//!
//! assert!(page.open_tech_stack(1, 1_000));
//! assert_eq!(
//!     page.tick(1_100, &layout),
//!     [PageEffect::ScrollStarted {
//!         anchor: "project-tech-stack".into(),
//!         target: 2400.0,
//!     }]
//! );
//!
//! assert!(page.open_document(2, 1_200));
//! page.tick(2_200, &layout);
//! assert_eq!(page.viewer().caption().as_deref(), Some("Page 1 of 10"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: provides `TracingTrace`, forwarding page events to
//!   [`tracing`](https://docs.rs/tracing).
//! - `serde`: `Serialize`/`Deserialize` for [`PageConfig`] and the model
//!   descriptors.

mod config;
mod link;
mod nav;
mod page;
mod trace;

pub use config::PageConfig;
pub use link::{ExternalLink, LinkError, ProjectLinks};
pub use nav::{NavItem, default_categories, default_nav_items};
pub use page::{FrameUpdate, Page, PageDebugInfo, PageEffect};
#[cfg(feature = "tracing")]
pub use trace::TracingTrace;
pub use trace::{NoTrace, PageTrace, RecordingTrace, TraceEvent};
