// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated, ordered project collection.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::project::{Project, ProjectId, TechEntry, TechId};

/// Error returned when a project collection contains conflicting ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two projects share an id.
    DuplicateProject {
        /// The repeated project id.
        id: ProjectId,
    },
    /// Two tech-stack entries of the same project share an id.
    DuplicateTechEntry {
        /// Project owning the entries.
        project: ProjectId,
        /// The repeated entry id.
        id: TechId,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProject { id } => write!(f, "project id {id} is used more than once"),
            Self::DuplicateTechEntry { project, id } => write!(
                f,
                "tech entry id {id} is used more than once in project {project}"
            ),
        }
    }
}

impl core::error::Error for CatalogError {}

/// The read-only, ordered list of projects supplied by the content provider.
///
/// Construction checks that project ids are unique, and that tech-stack entry
/// ids are unique within each project, so lookups by id are unambiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Project>", into = "Vec<Project>")
)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Validates and wraps `projects`, keeping their order.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateProject { id: project.id });
            }
            let mut tech_seen = HashSet::with_capacity(project.tech_stack.len());
            for entry in &project.tech_stack {
                if !tech_seen.insert(entry.id) {
                    return Err(CatalogError::DuplicateTechEntry {
                        project: project.id,
                        id: entry.id,
                    });
                }
            }
        }
        Ok(Self { projects })
    }

    /// Returns all projects in catalog order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the catalog has no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Looks up a tech-stack entry of a project.
    #[must_use]
    pub fn tech_entry(&self, project: ProjectId, tech: TechId) -> Option<&TechEntry> {
        self.project(project)?.tech_entry(tech)
    }
}

impl TryFrom<Vec<Project>> for ProjectCatalog {
    type Error = CatalogError;

    fn try_from(projects: Vec<Project>) -> Result<Self, Self::Error> {
        Self::from_projects(projects)
    }
}

impl From<ProjectCatalog> for Vec<Project> {
    fn from(catalog: ProjectCatalog) -> Self {
        catalog.projects
    }
}
