// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project and technology descriptors.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Identifier of a [`Project`].
pub type ProjectId = u32;

/// Identifier of a [`TechEntry`], unique within its project.
pub type TechId = u32;

/// One technology area used by a project, with its documentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TechEntry {
    /// Identifier, unique within the owning project.
    pub id: TechId,
    /// Display name, for example `Backend`.
    pub name: String,
    /// Short glyph shown next to the name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    /// One-line summary of what the area covers.
    pub description: String,
    /// Link to the downloadable document for this area.
    #[cfg_attr(feature = "serde", serde(alias = "pdfUrl"))]
    pub document_url: String,
}

/// A portfolio project as shown in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Project {
    /// Identifier, unique within a catalog.
    pub id: ProjectId,
    /// Category id used by the gallery filter.
    pub category: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Technology names shown on the card.
    pub technologies: Vec<String>,
    /// Detailed technology areas shown in the tech-stack panel.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech_stack: Vec<TechEntry>,
    /// Link to the running project.
    pub live_link: String,
    /// Link to the source repository.
    pub github_link: String,
}

impl Project {
    /// Returns the tech-stack entry with the given id.
    #[must_use]
    pub fn tech_entry(&self, id: TechId) -> Option<&TechEntry> {
        self.tech_stack.iter().find(|t| t.id == id)
    }
}

/// Anything that belongs to a gallery category.
pub trait Categorized {
    /// Returns the category id.
    fn category(&self) -> &str;
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

/// The leading technologies shown on a project card.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TechPreview<'a> {
    /// Technologies to show, in declaration order.
    pub shown: &'a [String],
    /// How many technologies were left out.
    pub hidden: usize,
}

impl TechPreview<'_> {
    /// Returns the "+N more" badge text, if anything was left out.
    #[must_use]
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }

    /// Returns the total number of technologies.
    #[must_use]
    pub fn total(&self) -> usize {
        self.shown.len() + self.hidden
    }
}

/// Returns the first `limit` technologies of `project` plus the hidden count.
#[must_use]
pub fn tech_preview(project: &Project, limit: usize) -> TechPreview<'_> {
    let shown = &project.technologies[..project.technologies.len().min(limit)];
    TechPreview {
        shown,
        hidden: project.technologies.len() - shown.len(),
    }
}

/// Toggles which project card is expanded.
///
/// Expanding the already expanded project collapses it; any other project
/// replaces the current one.
#[must_use]
pub fn toggle_expanded(current: Option<ProjectId>, clicked: ProjectId) -> Option<ProjectId> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}
