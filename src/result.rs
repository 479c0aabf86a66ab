//! Result types for extraction output.
//!
//! This module defines the structured output of one extraction call: the
//! rendered content, the link and image records found in it, and the
//! reconciled document metadata.

use serde::{Deserialize, Serialize};

/// A hyperlink found in the extracted content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Anchor text with whitespace collapsed.
    pub text: String,

    /// Resolved link target.
    pub url: String,
}

/// An image found in the extracted content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Alt text from `<img alt="...">`.
    pub alt: String,

    /// Resolved image source.
    pub url: String,
}

/// Result of content extraction from an HTML document.
///
/// `links` and `images` hold one entry per distinct URL (first occurrence
/// wins), sorted by URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Rendered content.
    ///
    /// Markdown by default, or the cleaned HTML of the content root when
    /// [`OutputFormat::Html`](crate::OutputFormat) is requested. Prefixed with
    /// a frontmatter block when `with_metadata` is set.
    pub markdown: String,

    /// Links found in the extracted content.
    pub links: Vec<LinkRecord>,

    /// Images found in the extracted content.
    pub images: Vec<ImageRecord>,

    /// Extracted metadata about the document.
    pub metadata: Metadata,
}

/// Metadata extracted from an HTML document.
///
/// Absent values are empty strings, so "present and non-empty" is the only
/// existence test a consumer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Page title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// URL of the document.
    pub url: String,

    /// Hostname of `url`.
    pub hostname: String,

    /// Page description.
    pub description: String,

    /// Site name (e.g., "New York Times").
    pub sitename: String,

    /// Publication date as found in the source, or `YYYY-MM-DD` when taken
    /// from the URL path.
    pub date: String,

    /// Resolved `<link rel="canonical">` target.
    pub canonical_url: String,

    /// Whether the document is its own canonical page.
    pub is_canonical: bool,

    /// Best site icon URL.
    pub icon: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            url: String::new(),
            hostname: String::new(),
            description: String::new(),
            sitename: String::new(),
            date: String::new(),
            canonical_url: String::new(),
            is_canonical: true,
            icon: String::new(),
        }
    }
}
