// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated outbound links.

use core::fmt;

use url::Url;
use vitrine_gallery::Project;

/// Error returned when a link is not a well-formed absolute URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkError {
    /// The rejected input.
    pub input: String,
    /// Why the parser rejected it.
    pub source: url::ParseError,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid link {:?}: {}", self.input, self.source)
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// An absolute URL the page hands to the host unchanged.
///
/// Web links (`http`/`https`) open in a new browsing context; `mailto:` and
/// `tel:` links are handed to the platform in place.
///
/// ```rust
/// use vitrine_page::ExternalLink;
///
/// let repo = ExternalLink::parse("https://github.com/example/shop").unwrap();
/// assert_eq!(repo.target(), Some("_blank"));
///
/// let mail = ExternalLink::parse("mailto:hello@example.com").unwrap();
/// assert_eq!(mail.target(), None);
///
/// assert!(ExternalLink::parse("/relative/path").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    url: Url,
}

impl ExternalLink {
    /// Target used for links that open in a new browsing context.
    pub const NEW_CONTEXT: &'static str = "_blank";

    /// Parses and validates `input`.
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        Url::parse(input)
            .map(|url| Self { url })
            .map_err(|source| LinkError {
                input: input.into(),
                source,
            })
    }

    /// Returns the link as the host should navigate to it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns `true` for links that open in a new browsing context.
    #[must_use]
    pub fn opens_in_new_context(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }

    /// Returns the link target attribute, if the link opens elsewhere.
    #[must_use]
    pub fn target(&self) -> Option<&'static str> {
        self.opens_in_new_context().then_some(Self::NEW_CONTEXT)
    }
}

impl fmt::Display for ExternalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outbound links of a project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLinks {
    /// The running project.
    pub live: ExternalLink,
    /// The source repository.
    pub source: ExternalLink,
}

impl ProjectLinks {
    /// Validates both links of `project`.
    pub fn of(project: &Project) -> Result<Self, LinkError> {
        Ok(Self {
            live: ExternalLink::parse(&project.live_link)?,
            source: ExternalLink::parse(&project.github_link)?,
        })
    }
}
