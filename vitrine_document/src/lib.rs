// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Document: headless state for a paged document viewer.
//!
//! A [`DocumentViewer`] owns:
//!
//! - a load lifecycle (`Idle → Loading → Ready | Failed`) driven by a
//!   simulated latency timer, with [`DocumentViewer::retry`] to start over;
//! - a 1-based page cursor that clamps at both ends and ignores out-of-range
//!   direct entry;
//! - a zoom factor stepped in fixed increments and clamped to a range.
//!
//! Documents come from a [`DocumentSource`]. [`SimulatedSource`] fabricates
//! placeholder pages; closures `FnMut(&str) -> Result<Document, LoadError>`
//! work as sources too.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_document::{DocumentViewer, PageEntry, SimulatedSource, ViewerConfig, ViewerEvent};
//!
//! let mut viewer = DocumentViewer::new(SimulatedSource::default(), ViewerConfig::default());
//! viewer.open("/docs/backend.pdf", 0);
//! assert!(viewer.is_loading());
//!
//! // The host ticks the viewer from its timer loop.
//! assert_eq!(viewer.tick(1_000), Some(ViewerEvent::Loaded { pages: 10 }));
//! assert_eq!(viewer.caption().as_deref(), Some("Page 1 of 10"));
//!
//! assert!(viewer.next());
//! assert_eq!(viewer.enter_page(42), PageEntry::Ignored);
//! assert_eq!(viewer.current_page(), 2);
//!
//! viewer.zoom_in();
//! assert_eq!(viewer.zoom(), 1.25);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod source;
mod viewer;

pub use source::{Document, DocumentSource, LoadError, SimulatedSource, file_name};
pub use viewer::{
    DocumentViewer, DocumentViewerDebugInfo, LoadState, PageEntry, ThumbnailStrip, ViewerConfig,
    ViewerEvent,
};
