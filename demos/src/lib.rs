// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Vitrine demos.

use vitrine_gallery::{ProjectCatalog, TechEntry};
use vitrine_scroll_spy::SectionGeometry;

/// Sample catalog in the JSON shape a content provider would ship.
pub const PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// Parses [`PROJECTS_JSON`].
pub fn sample_catalog() -> Result<ProjectCatalog, serde_json::Error> {
    serde_json::from_str(PROJECTS_JSON)
}

/// Entries shown for projects that ship no tech stack of their own.
pub fn fallback_tech_stack() -> Vec<TechEntry> {
    [
        (1, "Frontend", "/docs/frontend.pdf"),
        (2, "Backend", "/docs/backend.pdf"),
        (3, "Testing", "/docs/testing.pdf"),
    ]
    .into_iter()
    .map(|(id, name, url)| TechEntry {
        id,
        name: name.into(),
        icon: String::new(),
        description: String::new(),
        document_url: url.into(),
    })
    .collect()
}

/// A plausible layout of the portfolio page, top to bottom.
///
/// The tech-stack panel anchor sits inside the projects section.
pub fn sample_layout() -> Vec<(String, SectionGeometry)> {
    [
        ("home", 0.0, 900.0),
        ("summary", 900.0, 700.0),
        ("skills", 1600.0, 800.0),
        ("projects", 2400.0, 1600.0),
        ("tools", 4000.0, 700.0),
        ("contact", 4700.0, 600.0),
        ("project-tech-stack", 3300.0, 700.0),
    ]
    .into_iter()
    .map(|(id, top, height)| (id.to_owned(), SectionGeometry::new(top, height)))
    .collect()
}
