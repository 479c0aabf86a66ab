//! Link Resolution and Classification
//!
//! Rewrites `href`/`src` attributes to absolute URLs and classifies every
//! anchor as internal, external or document-local.
//!
//! Classification is kept out of the DOM. [`resolve_links`] records one
//! [`LinkClass`] per anchor, in document order, in a [`LinkAnnotations`]
//! ledger. Each pruning pass works on its own clone of the document, so the
//! ledger is re-bound to a clone's node identities with
//! [`LinkAnnotations::bind`] before the link-density filter consults it.

use std::collections::HashMap;

use dom_query::{Document, NodeId, NodeRef, Selection};
use url::Url;

use crate::dom;
use crate::url_utils;

/// Anchors carrying an `href`, in document order.
const ANCHOR_SELECTOR: &str = "a[href]";

/// Where an anchor points relative to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Same host as the base URL.
    Internal,
    /// A different host, or no host at all.
    External,
    /// A fragment of the current document (`href="#..."`).
    DocumentLocal,
}

impl LinkClass {
    /// Classify an anchor from its original and resolved `href`.
    ///
    /// Without a base URL, absolute URLs with a host are external and other
    /// references internal. A blank `href` points at the page itself and is
    /// internal.
    #[must_use]
    pub fn classify(original: &str, resolved: &str, base: Option<&Url>) -> Self {
        let original = original.trim_start();
        if original.starts_with('#') {
            return Self::DocumentLocal;
        }
        if original.is_empty() {
            return Self::Internal;
        }

        let target_host = url_utils::host_of(resolved);
        match base {
            Some(base) => {
                if target_host.is_some() && target_host.as_deref() == base.host_str() {
                    Self::Internal
                } else {
                    Self::External
                }
            }
            None if target_host.is_some() => Self::External,
            None => Self::Internal,
        }
    }
}

#[derive(Debug, Clone)]
struct AnchorEntry {
    href: String,
    class: LinkClass,
}

/// Per-anchor classification recorded during link resolution.
#[derive(Debug, Clone, Default)]
pub struct LinkAnnotations {
    anchors: Vec<AnchorEntry>,
    base: Option<Url>,
}

impl LinkAnnotations {
    /// Number of classified anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether no anchor was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Map the recorded classes onto the anchors of `doc`.
    ///
    /// `doc` must be a clone of the resolved document. Anchors are matched by
    /// document position; an anchor whose `href` differs from the recorded one
    /// is classified afresh.
    #[must_use]
    pub fn bind(&self, doc: &Document) -> LinkClasses {
        let anchors = doc.select(ANCHOR_SELECTOR);
        let mut classes = HashMap::with_capacity(anchors.length());

        for (index, node) in anchors.nodes().iter().enumerate() {
            let href = node.attr("href").map(|h| h.to_string()).unwrap_or_default();
            let class = match self.anchors.get(index) {
                Some(entry) if entry.href == href => entry.class,
                _ => LinkClass::classify(&href, &href, self.base.as_ref()),
            };
            classes.insert(node.id, class);
        }

        LinkClasses(classes)
    }
}

/// Link classes keyed by node identity within one document.
#[derive(Debug, Clone, Default)]
pub struct LinkClasses(HashMap<NodeId, LinkClass>);

impl LinkClasses {
    /// Class of an anchor node, `None` for non-anchors.
    #[must_use]
    pub fn get(&self, node: &NodeRef) -> Option<LinkClass> {
        self.0.get(&node.id).copied()
    }

    /// Whether a node is an anchor classified as external.
    #[must_use]
    pub fn is_external(&self, node: &NodeRef) -> bool {
        self.get(node) == Some(LinkClass::External)
    }

    /// Whether a node is an anchor pointing into the current document.
    #[must_use]
    pub fn is_document_local(&self, node: &NodeRef) -> bool {
        self.get(node) == Some(LinkClass::DocumentLocal)
    }
}

/// Resolve `href`/`src` attributes in place and classify every anchor.
///
/// With no base URL attributes are left untouched; anchors are still
/// classified so link density can be measured.
pub fn resolve_links(doc: &Document, base: Option<&Url>) -> LinkAnnotations {
    let anchors = doc
        .select(ANCHOR_SELECTOR)
        .nodes()
        .iter()
        .map(|node| {
            let sel = Selection::from(*node);
            let original = dom::get_attribute(&sel, "href").unwrap_or_default();
            let href = match base.and_then(|base| url_utils::resolve(&original, base)) {
                Some(resolved) => {
                    dom::set_attribute(&sel, "href", &resolved);
                    resolved
                }
                None => original.clone(),
            };
            AnchorEntry {
                class: LinkClass::classify(&original, &href, base),
                href,
            }
        })
        .collect::<Vec<_>>();

    if let Some(base) = base {
        rewrite_attribute(doc, base, "href");
        rewrite_attribute(doc, base, "src");
    }

    log::debug!("classified {} anchors", anchors.len());

    LinkAnnotations {
        anchors,
        base: base.cloned(),
    }
}

/// Resolve one attribute on every element except anchors' `href`, which
/// [`resolve_links`] handles together with classification.
fn rewrite_attribute(doc: &Document, base: &Url, name: &str) {
    let selector = format!("[{name}]");
    for node in doc.select(&selector).nodes() {
        if name == "href" && dom::node_tag(node).as_deref() == Some("a") {
            continue;
        }
        let sel = Selection::from(*node);
        let Some(original) = dom::get_attribute(&sel, name) else {
            continue;
        };
        if let Some(resolved) = url_utils::resolve(&original, base) {
            if resolved != original {
                dom::set_attribute(&sel, name, &resolved);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://bla.com/some/doc").expect("valid base")
    }

    #[test]
    fn test_resolves_href_and_src() {
        let doc = dom::parse(
            r#"<a href="/path/page">a</a><img src="img/x.png"><link href="../style.css">"#,
        );
        resolve_links(&doc, Some(&base()));

        assert_eq!(doc.select("a").attr("href").as_deref(), Some("https://bla.com/path/page"));
        assert_eq!(doc.select("img").attr("src").as_deref(), Some("https://bla.com/some/img/x.png"));
        assert_eq!(doc.select("link").attr("href").as_deref(), Some("https://bla.com/style.css"));
    }

    #[test]
    fn test_malformed_href_left_unchanged() {
        let doc = dom::parse(r#"<a href="http://[::1">broken</a>"#);
        let annotations = resolve_links(&doc, Some(&base()));

        assert_eq!(doc.select("a").attr("href").as_deref(), Some("http://[::1"));
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn test_no_base_is_passthrough() {
        let doc = dom::parse(r#"<a href="/x">x</a><img src="y.png">"#);
        resolve_links(&doc, None);

        assert_eq!(doc.select("a").attr("href").as_deref(), Some("/x"));
        assert_eq!(doc.select("img").attr("src").as_deref(), Some("y.png"));
    }

    #[test]
    fn test_only_urls_are_rewritten() {
        let doc = dom::parse(r##"<a href="#top" class="x">top</a>"##);
        resolve_links(&doc, Some(&base()));

        let attrs: Vec<String> = doc
            .select("a")
            .nodes()
            .first()
            .map(|node| node.attrs().iter().map(|a| a.name.local.to_string()).collect())
            .unwrap_or_default();
        assert_eq!(attrs, vec!["href".to_string(), "class".to_string()]);
    }

    #[test]
    fn test_classification() {
        let doc = dom::parse(
            r##"<a id="i" href="/local">i</a>
                <a id="e" href="https://other.org/x">e</a>
                <a id="d" href="#section">d</a>
                <span id="s">not an anchor</span>"##,
        );
        let annotations = resolve_links(&doc, Some(&base()));
        let classes = annotations.bind(&doc);

        let class_of = |sel: &str| {
            doc.select(sel).nodes().first().and_then(|node| classes.get(node))
        };
        assert_eq!(class_of("#i"), Some(LinkClass::Internal));
        assert_eq!(class_of("#e"), Some(LinkClass::External));
        assert_eq!(class_of("#d"), Some(LinkClass::DocumentLocal));
        assert_eq!(class_of("#s"), None);

        // The fragment anchor was still rewritten to an absolute URL.
        assert_eq!(
            doc.select("#d").attr("href").as_deref(),
            Some("https://bla.com/some/doc#section")
        );
    }

    #[test]
    fn test_blank_href_untouched_and_internal() {
        let doc = dom::parse(r#"<a id="b" href="  ">blank</a>"#);
        let classes = resolve_links(&doc, Some(&base())).bind(&doc);

        assert_eq!(doc.select("#b").attr("href").as_deref(), Some("  "));
        let class = doc.select("#b").nodes().first().and_then(|n| classes.get(n));
        assert_eq!(class, Some(LinkClass::Internal));
    }

    #[test]
    fn test_classification_without_base() {
        assert_eq!(LinkClass::classify("/a", "/a", None), LinkClass::Internal);
        assert_eq!(
            LinkClass::classify("https://x.org", "https://x.org", None),
            LinkClass::External
        );
        assert_eq!(LinkClass::classify("#x", "#x", None), LinkClass::DocumentLocal);
    }

    #[test]
    fn test_bind_to_clone() {
        let doc = dom::parse(
            r#"<p><a href="https://other.org/1">one</a> <a href="/two">two</a></p>"#,
        );
        let annotations = resolve_links(&doc, Some(&base()));
        let clone = dom::clone_document(&doc);
        let classes = annotations.bind(&clone);

        let nodes = clone.select("a");
        let found: Vec<_> = nodes.nodes().iter().filter_map(|n| classes.get(n)).collect();
        assert_eq!(found, vec![LinkClass::External, LinkClass::Internal]);
    }
}
