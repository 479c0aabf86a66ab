//! Compiled regex patterns and CSS selectors for content extraction.
//!
//! All patterns are compiled once on first use with `LazyLock` and never
//! mutated afterwards. Patterns are organized by their purpose in the
//! extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate Detection Patterns
// =============================================================================

/// Tags removed outright by the structural strip, regardless of content.
/// Only head-level `link` elements are stripped.
pub const STRUCTURAL_TAGS: &str = "script, style, noscript, iframe, object, embed, footer, header, \
     nav, head link, aside, svg, canvas, applet, input, button, select, textarea, label, fieldset, \
     legend, dialog";

/// ARIA roles marking page chrome rather than content.
pub const CHROME_ROLES: &[&str] = &[
    "navigation",
    "banner",
    "complementary",
    "search",
    "none",
    "presentation",
];

/// Matches inline styles that hide an element.
pub static DISPLAY_NONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)display:\s*none").expect("DISPLAY_NONE regex"));

/// Matches class/id strings signalling low-value page furniture.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(comment|sidebar|social|newsletter|popup|pagination|pager|share|sharing|related|promo|sponsor|advert|banner|cookie|subscribe|widget|breadcrumb|masthead|footer|modal|outbrain|taboola|disqus|shoutbox|skyscraper)",
    )
    .expect("NEGATIVE_CLASS regex")
});

/// Matches class/id strings likely to hold main content.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(article|content|main|post|story|entry|body|text|blog)")
        .expect("POSITIVE_CLASS regex")
});

/// Tags whose text-free, childless instances are swept after pruning.
pub const EMPTY_CANDIDATE_TAGS: &str = "p, div, li, td, section, ul, ol, h1, h2, h3, h4, h5, h6";

/// Tags the link-density filter evaluates.
pub const DENSITY_CANDIDATE_TAGS: &str = "div, p, li, td, section";

// =============================================================================
// Content Identification
// =============================================================================

/// Content root candidates, highest priority first.
pub const CONTENT_ROOT_SELECTORS: &[&str] = &[
    "article",
    "[itemprop=articleBody]",
    "[role=main]",
    "main",
    ".post-content",
    ".entry-content",
    ".article-body",
    ".content",
    "#content",
];

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches any whitespace run.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Two or more spaces or tabs.
pub static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("SPACE_RUN regex"));

/// Matches spaces and tabs directly before a newline.
pub static TRAILING_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("TRAILING_SPACES regex"));

/// Matches spaces and tabs directly after a newline.
pub static LEADING_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]+").expect("LEADING_SPACES regex"));

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Matches a verbatim span bracketed by the renderer's `U+E000`/`U+E001`
/// markers, capturing its content.
pub static VERBATIM_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{E000}([^\x{E001}]*)\x{E001}").expect("VERBATIM_SPAN regex")
});

// =============================================================================
// Metadata Extraction Patterns
// =============================================================================

/// Matches a `/YYYY/MM/DD/` date in a URL path.
pub static URL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(\d{4})/(\d{1,2})/(\d{1,2})(?:/|$)").expect("URL_DATE regex")
});

/// Matches a `WxH` icon size declaration.
pub static ICON_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[xX]\s*(\d+)").expect("ICON_SIZE regex"));

/// Matches a charset declaration in a `<meta>` tag.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("META_CHARSET regex")
});
