// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bar items and gallery categories.

use vitrine_gallery::{ALL, Category};

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavItem {
    /// Id of the section this item scrolls to and highlights with.
    pub section: String,
    /// Button label.
    pub label: String,
}

impl NavItem {
    /// Creates a navigation item.
    #[must_use]
    pub fn new(section: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            label: label.into(),
        }
    }
}

/// The portfolio's navigation bar, top to bottom.
#[must_use]
pub fn default_nav_items() -> Vec<NavItem> {
    [
        ("home", "HOME"),
        ("summary", "ABOUT"),
        ("skills", "SKILLS"),
        ("projects", "PROJECTS"),
        ("tools", "TOOLS"),
        ("contact", "CONTACT"),
    ]
    .into_iter()
    .map(|(section, label)| NavItem::new(section, label))
    .collect()
}

/// The gallery's category tabs, starting with [`ALL`].
#[must_use]
pub fn default_categories() -> Vec<Category> {
    [
        (ALL, "All Projects"),
        ("web", "Web Applications"),
        ("exp", "Expense Sharing Platform"),
        ("ecommerce", "E-commerce"),
        ("tools", "Developer Tools"),
    ]
    .into_iter()
    .map(|(id, label)| Category::new(id, label))
    .collect()
}
