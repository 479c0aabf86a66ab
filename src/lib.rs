//! # readable-md
//!
//! Readable main-content extraction from HTML, rendered as Markdown.
//!
//! This library strips navigation, page chrome and link-list clutter from a
//! web page, picks the element holding the main content, and renders it as
//! Markdown. A separate metadata pass reconciles structured data, Open Graph
//! and plain meta tags into one record that can be prepended as frontmatter.
//!
//! ## Quick Start
//!
//! ```rust
//! use readable_md::{extract_with_options, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav>Menu</nav><article><h1>Hello</h1><p>Main content here.</p></article></body></html>"#;
//!
//! let options = Options {
//!     url: Some("https://example.com/posts/hello".to_string()),
//!     ..Options::default()
//! };
//! let result = extract_with_options(html, &options)?;
//! assert_eq!(result.markdown, "# Hello\n\nMain content here.");
//! assert_eq!(result.metadata.title, "My Article");
//! # Ok::<(), readable_md::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Link resolution**: `href`/`src` attributes become absolute URLs and
//!    anchors are classified as internal, external or document-local.
//! 2. **Cleaning**: structural boilerplate, hidden nodes and furniture-like
//!    class/id patterns are removed.
//! 3. **Link density**: blocks dominated by external-link text are removed.
//! 4. **Selection**: the first content landmark (`article`, `main`, ...) or
//!    `body` becomes the content root. When too little text survives, the
//!    pipeline reruns once without the class/id pattern prune.
//! 5. **Rendering**: the content root is rendered as Markdown.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Document cleaning stages.
pub mod cleaner;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Link-density measurement and filtering.
pub mod link_density;

/// Link resolution and internal/external classification.
pub mod links;

/// Markdown rendering.
pub mod markdown;

/// Metadata extraction (JSON-LD, meta tags, canonical URL, icon).
pub mod metadata;

/// Two-pass main-content selection.
pub mod selector;

/// URL resolution helpers.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, OutputFormat};
pub use result::{ExtractionResult, ImageRecord, LinkRecord, Metadata};

/// Extracts main content from an HTML document using default options.
///
/// # Errors
///
/// Never fails with default options; the `Result` mirrors
/// [`extract_with_options`].
///
/// # Example
///
/// ```rust
/// use readable_md::extract;
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let result = extract(html)?;
/// assert_eq!(result.markdown, "Content");
/// # Ok::<(), readable_md::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractionResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] when `options` fail
/// [`Options::validate`]. Malformed HTML, broken URLs and invalid
/// structured data never cause an error.
///
/// # Example
///
/// ```rust
/// use readable_md::{extract_with_options, Options};
///
/// let html = r#"<html><head><meta property="og:site_name" content="Example"></head>
/// <body><article><p>Content</p></article></body></html>"#;
/// let options = Options {
///     with_metadata: true,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(
///     result.markdown,
///     "---\nis-canonical: true\nsitename: Example\n---\n\nContent"
/// );
/// # Ok::<(), readable_md::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractionResult> {
    extract::extract_content(html, options)
}

/// Extracts main content from HTML bytes with automatic encoding detection.
///
/// The encoding is taken from a byte-order mark, then from a
/// `<meta charset>` or `http-equiv` declaration near the start of the
/// document, defaulting to UTF-8. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Errors
///
/// Never fails with default options.
///
/// # Example
///
/// ```rust
/// use readable_md::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article><p>Caf\xE9</p></article></body></html>";
/// let result = extract_bytes(html)?;
/// assert_eq!(result.markdown, "Caf\u{e9}");
/// # Ok::<(), readable_md::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractionResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts main content from HTML bytes with custom options and automatic
/// encoding detection.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] when `options` fail
/// [`Options::validate`].
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractionResult> {
    let html_str = encoding::decode_html(html);
    extract_with_options(&html_str, options)
}
