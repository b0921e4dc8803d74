// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category filtering for gallery items.

use alloc::string::String;
use alloc::vec::Vec;

use crate::project::Categorized;

/// Category id that matches every item.
pub const ALL: &str = "all";

/// A selectable gallery category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    /// Id compared against item categories (or [`ALL`]).
    pub id: String,
    /// Tab label.
    pub label: String,
}

impl Category {
    /// Creates a category.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Iterates the items of `items` that belong to `category`, in order.
///
/// [`ALL`] yields every item.
pub fn filtered<'a, T: Categorized>(
    items: &'a [T],
    category: &'a str,
) -> impl Iterator<Item = &'a T> + 'a {
    items
        .iter()
        .filter(move |item| category == ALL || item.category() == category)
}

/// Returns the items of `items` that belong to `category`, in order.
///
/// [`ALL`] returns every item; a category with no items returns an empty
/// vector.
///
/// ```rust
/// use vitrine_gallery::{Categorized, filter};
///
/// struct Item(&'static str, &'static str);
/// impl Categorized for Item {
///     fn category(&self) -> &str {
///         self.1
///     }
/// }
///
/// let items = [Item("a", "web"), Item("b", "tools"), Item("c", "web")];
/// let names: Vec<_> = filter(&items, "web").iter().map(|i| i.0).collect();
/// assert_eq!(names, ["a", "c"]);
/// assert_eq!(filter(&items, "all").len(), 3);
/// assert!(filter(&items, "ecommerce").is_empty());
/// ```
#[must_use]
pub fn filter<'a, T: Categorized>(items: &'a [T], category: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| category == ALL || item.category() == category)
        .collect()
}

/// The gallery's active category.
///
/// Starts at [`ALL`]. A revision counter bumps whenever the selection
/// actually changes, so hosts can cheaply tell when to re-filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
    revision: u64,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryFilter {
    /// Creates a filter showing every item.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: String::from(ALL),
            revision: 0,
        }
    }

    /// Returns the active category id.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Returns `true` if `id` is the active category.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.active == id
    }

    /// Returns the selection revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects a category. Returns `true` if the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.active == id {
            return false;
        }
        self.active.clear();
        self.active.push_str(id);
        self.revision += 1;
        true
    }

    /// Returns the items of `items` in the active category.
    #[must_use]
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter(items, &self.active)
    }
}
