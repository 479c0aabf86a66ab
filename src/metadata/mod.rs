//! Metadata extraction module.
//!
//! Reconciles competing metadata sources into one [`Metadata`] record. Each
//! field has a fixed precedence chain and the first non-blank source wins:
//!
//! | Field | Sources, highest first |
//! |---|---|
//! | title | JSON-LD `headline`, `<title>`, `og:title`, `twitter:title` |
//! | author | JSON-LD `author`, `author`, `article:author`, `twitter:creator` |
//! | description | JSON-LD `description`, `description`, `og:description`, `twitter:description` |
//! | sitename | JSON-LD `publisher`, `og:site_name`, `application-name` |
//! | date | JSON-LD `datePublished`, JSON-LD `dateCreated`, date meta tags, `/YYYY/MM/DD/` in the URL |
//! | url | base URL, canonical URL, `og:url` |
//!
//! Extraction runs on the unpruned document and never fails: unreadable
//! structured data simply contributes nothing.

pub mod frontmatter;
pub mod icon;
pub mod json_ld;
pub mod meta_tags;

use chrono::NaiveDate;
use dom_query::Document;
use url::Url;

use crate::patterns::URL_DATE;
use crate::result::Metadata;
use crate::url_utils;

pub use frontmatter::to_frontmatter;
pub use icon::select_icon;
pub use json_ld::{parse_structured_data, StructuredData, StructuredDataError};
pub use meta_tags::MetaTags;

/// Extract all metadata from a document.
#[must_use]
pub fn extract_metadata(doc: &Document, base: Option<&Url>) -> Metadata {
    let structured = match parse_structured_data(doc) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("structured data unavailable: {err}");
            None
        }
    };
    let ld = structured.as_ref().map(StructuredData::new).unwrap_or_default();
    let meta = MetaTags::collect(doc);

    let title = ld
        .text("headline")
        .or_else(|| meta_tags::title_text(doc))
        .or_else(|| meta.first_of(&["og:title", "twitter:title"]));

    let author = ld
        .name("author")
        .or_else(|| meta.first_of(&["author", "article:author", "twitter:creator"]));

    let description = ld.text("description").or_else(|| {
        meta.first_of(&["description", "og:description", "twitter:description"])
    });

    let sitename = ld
        .name("publisher")
        .or_else(|| meta.first_of(&["og:site_name", "application-name"]));

    let (canonical_url, is_canonical) = canonical(doc, base);

    let url = base
        .map(ToString::to_string)
        .or_else(|| (!canonical_url.is_empty()).then(|| canonical_url.clone()))
        .or_else(|| meta.first_of(&["og:url"]))
        .unwrap_or_default();

    let date = ld
        .text("datePublished")
        .or_else(|| ld.text("dateCreated"))
        .or_else(|| meta.first_of(meta_tags::DATE_KEYS))
        .or_else(|| date_from_url(&url))
        .unwrap_or_default();

    Metadata {
        title: title.unwrap_or_default(),
        author: author.unwrap_or_default(),
        hostname: url_utils::host_of(&url).unwrap_or_default(),
        url,
        description: description.unwrap_or_default(),
        sitename: sitename.unwrap_or_default(),
        date,
        canonical_url,
        is_canonical,
        icon: select_icon(doc, base),
    }
}

/// Canonical URL and whether the page is its own canonical.
///
/// A missing, blank or unresolvable canonical link yields `("", true)`.
/// Without a base URL the page cannot be shown to differ, so it counts as
/// canonical.
fn canonical(doc: &Document, base: Option<&Url>) -> (String, bool) {
    let Some(href) = meta_tags::canonical_href(doc) else {
        return (String::new(), true);
    };

    let resolved = match base {
        Some(base) => url_utils::resolve(&href, base),
        None => url_utils::parse_absolute(&href).map(String::from),
    };

    match resolved {
        Some(canonical) => {
            let is_canonical = base.is_none_or(|base| base.as_str() == canonical);
            (canonical, is_canonical)
        }
        None => (String::new(), true),
    }
}

/// `YYYY-MM-DD` from a `/YYYY/MM/DD/` path segment, if it is a real date.
fn date_from_url(url: &str) -> Option<String> {
    let caps = URL_DATE.captures(url)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.format("%Y-%m-%d").to_string())
}
