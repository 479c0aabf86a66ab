//! HTML Meta Tag Extraction
//!
//! Collects `<meta>` key/content pairs (keyed by `name`, `property` or
//! `itemprop`), the `<title>` text and the canonical link of a document.

use dom_query::{Document, NodeRef, Selection};

use crate::dom;

/// Meta tags that may carry a publication date, in precedence order.
pub const DATE_KEYS: &[&str] = &[
    "article:published_time",
    "og:article:published_time",
    "article:published",
    "datepublished",
    "pubdate",
    "publish_date",
    "date",
    "dc.date",
    "dcterms.date",
    "parsely-pub-date",
    "sailthru.date",
];

/// `<meta>` contents of a document, in document order.
#[derive(Debug, Clone, Default)]
pub struct MetaTags {
    entries: Vec<(String, String)>,
}

impl MetaTags {
    /// Gather every `<meta>` with a key and non-blank content.
    ///
    /// Keys are lowercased. A tag with several key attributes is recorded
    /// under each of them.
    #[must_use]
    pub fn collect(doc: &Document) -> Self {
        let mut entries = Vec::new();

        for node in doc.select("meta[content]").nodes() {
            let meta = Selection::from(*node);
            let content = dom::get_attribute(&meta, "content").unwrap_or_default();
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            for attr in ["name", "property", "itemprop"] {
                if let Some(key) = dom::get_attribute(&meta, attr) {
                    let key = key.trim().to_ascii_lowercase();
                    if !key.is_empty() {
                        entries.push((key, content.to_string()));
                    }
                }
            }
        }

        Self { entries }
    }

    /// Content of the first tag with this key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Content of the first key in `keys` that is present.
    #[must_use]
    pub fn first_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.get(key))
            .map(ToString::to_string)
    }
}

/// Text of the first `<title>` element, whitespace collapsed.
#[must_use]
pub fn title_text(doc: &Document) -> Option<String> {
    let title = doc.select_single("title");
    if !title.exists() {
        return None;
    }
    let text = dom::collapsed_text(&title);
    (!text.is_empty()).then_some(text)
}

/// Raw `href` of the first `<link rel="canonical">`.
#[must_use]
pub fn canonical_href(doc: &Document) -> Option<String> {
    link_with_rel(doc, |token| token == "canonical")
        .and_then(|link| link.attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

fn link_with_rel<'a>(
    doc: &'a Document,
    accept: impl Fn(&str) -> bool,
) -> Option<NodeRef<'a>> {
    doc.select("link[rel]")
        .nodes()
        .iter()
        .find(|node| {
            node.attr("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| accept(&token.to_ascii_lowercase()))
            })
        })
        .copied()
}
