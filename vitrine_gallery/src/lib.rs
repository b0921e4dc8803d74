// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Gallery: project gallery models.
//!
//! This crate holds the data side of a portfolio's project gallery:
//!
//! - [`Project`] and [`TechEntry`]: read-only descriptors supplied by a
//!   content provider.
//! - [`ProjectCatalog`]: an ordered collection with unique ids.
//! - [`filter`] / [`CategoryFilter`]: order-preserving category filtering,
//!   where [`ALL`] shows everything.
//! - [`tech_preview`]: the first few technologies on a card plus a "+N more"
//!   count.
//! - [`workflow_path`]: the curved step path drawn behind a project's process.
//!
//! Rendering is left to the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_gallery::{CategoryFilter, Project, ProjectCatalog};
//!
//! fn project(id: u32, category: &str) -> Project {
//!     Project {
//!         id,
//!         category: category.into(),
//!         title: format!("Project {id}"),
//!         description: String::new(),
//!         thumbnail: String::new(),
//!         technologies: vec!["Rust".into()],
//!         tech_stack: Vec::new(),
//!         live_link: String::new(),
//!         github_link: String::new(),
//!     }
//! }
//!
//! let catalog = ProjectCatalog::from_projects(vec![
//!     project(1, "web"),
//!     project(2, "tools"),
//!     project(3, "web"),
//! ])
//! .unwrap();
//!
//! let mut filter = CategoryFilter::new();
//! assert_eq!(filter.apply(catalog.projects()).len(), 3);
//!
//! filter.select("web");
//! let ids: Vec<u32> = filter.apply(catalog.projects()).iter().map(|p| p.id).collect();
//! assert_eq!(ids, [1, 3]);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for descriptors; the catalog
//!   deserializes from a JSON array and validates ids while doing so.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod catalog;
mod filter;
mod project;
mod workflow;

pub use catalog::{CatalogError, ProjectCatalog};
pub use filter::{ALL, Category, CategoryFilter, filter, filtered};
pub use project::{
    Categorized, Project, ProjectId, TechEntry, TechId, TechPreview, tech_preview, toggle_expanded,
};
pub use workflow::{workflow_path, workflow_points, workflow_svg};
