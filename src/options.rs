//! Configuration options for content extraction.
//!
//! The `Options` struct controls a single extraction call: the base URL used
//! for link resolution and metadata, the output format, the link-density
//! threshold and whether a metadata header is prepended.

use crate::error::{Error, Result};

/// Output format of [`ExtractionResult::markdown`](crate::ExtractionResult).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Render the content root as Markdown.
    #[default]
    Markdown,

    /// Pass through the cleaned HTML of the content root.
    Html,
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use readable_md::Options;
///
/// let options = Options {
///     url: Some("https://example.com/blog/post".to_string()),
///     with_metadata: true,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL of the document.
    ///
    /// Used to resolve relative `href`/`src` attributes, to classify anchors
    /// as internal or external, and as the first source for `metadata.url`.
    /// An unparseable value is treated as absent.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Output format.
    ///
    /// Default: [`OutputFormat::Markdown`]
    pub format: OutputFormat,

    /// Maximum fraction of an element's text that may be external-link text.
    ///
    /// `div`, `p`, `li`, `td` and `section` elements above this density are
    /// removed. Valid range is `0.0..=1.0`.
    ///
    /// Default: `0.5`
    pub link_density_threshold: f64,

    /// Prepend a frontmatter block with the extracted metadata.
    ///
    /// Default: `false`
    pub with_metadata: bool,

    /// Text length (characters) under which the less aggressive second pass
    /// is attempted.
    ///
    /// Default: `200`
    pub min_extracted_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            format: OutputFormat::Markdown,
            link_density_threshold: 0.5,
            with_metadata: false,
            min_extracted_size: 200,
        }
    }
}

impl Options {
    /// Check that every option is within its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] when `link_density_threshold` is NaN
    /// or outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.link_density_threshold) {
            return Err(Error::InvalidOption(format!(
                "link_density_threshold must be within [0.0, 1.0], got {}",
                self.link_density_threshold
            )));
        }
        Ok(())
    }

    /// Base URL parsed with the `url` crate, if present and valid.
    #[must_use]
    pub(crate) fn base_url(&self) -> Option<url::Url> {
        let raw = self.url.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match url::Url::parse(raw) {
            Ok(base) => Some(base),
            Err(err) => {
                log::warn!("ignoring unparseable base URL {raw:?}: {err}");
                None
            }
        }
    }
}
