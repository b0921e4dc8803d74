// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Documents and where they come from.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A loaded document: a title and the text of each page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Display title.
    pub title: String,
    /// Page contents; page `n` is at index `n - 1`.
    pub pages: Vec<String>,
}

impl Document {
    /// Returns the number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the text of 1-based page `page`.
    #[must_use]
    pub fn page(&self, page: usize) -> Option<&str> {
        self.pages.get(page.checked_sub(1)?).map(String::as_str)
    }
}

/// Error produced when a document cannot be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The source has no document at this URL.
    NotFound {
        /// The requested URL.
        url: String,
    },
    /// The document loaded but has no pages to show.
    Empty {
        /// The requested URL.
        url: String,
    },
}

impl LoadError {
    /// Returns the URL that failed to load.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::NotFound { url } | Self::Empty { url } => url,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { url } => write!(f, "failed to load document {url}: not found"),
            Self::Empty { url } => write!(f, "failed to load document {url}: no pages"),
        }
    }
}

impl core::error::Error for LoadError {}

/// Something that can turn a document URL into a [`Document`].
///
/// Loading itself is synchronous; the viewer models latency with its own
/// timer and calls [`DocumentSource::load`] when the delay has elapsed.
pub trait DocumentSource {
    /// Loads the document at `url`.
    fn load(&mut self, url: &str) -> Result<Document, LoadError>;
}

impl<F> DocumentSource for F
where
    F: FnMut(&str) -> Result<Document, LoadError>,
{
    fn load(&mut self, url: &str) -> Result<Document, LoadError> {
        self(url)
    }
}

/// Stand-in source that fabricates placeholder pages for any URL.
///
/// Every document is titled "Documentation PDF" and has
/// [`SimulatedSource::DEFAULT_PAGES`] pages reading
/// `"This is page {n} of the {file} documentation."`, where `{file}` is the
/// last path segment of the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedSource {
    page_count: usize,
}

impl SimulatedSource {
    /// Page count used by [`SimulatedSource::default`].
    pub const DEFAULT_PAGES: usize = 10;
    /// Title given to every simulated document.
    pub const TITLE: &'static str = "Documentation PDF";

    /// Creates a source producing `page_count` pages per document.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self { page_count }
    }

    /// Returns the number of pages each document gets.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGES)
    }
}

impl DocumentSource for SimulatedSource {
    fn load(&mut self, url: &str) -> Result<Document, LoadError> {
        let file = file_name(url);
        if file.is_empty() {
            return Err(LoadError::NotFound { url: url.into() });
        }
        Ok(Document {
            title: String::from(Self::TITLE),
            pages: (1..=self.page_count)
                .map(|n| format!("This is page {n} of the {file} documentation."))
                .collect(),
        })
    }
}

/// Returns the last `/`-separated segment of `url`.
#[must_use]
pub fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
