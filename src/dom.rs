//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` giving the rest of the crate the handful of
//! parser operations it relies on: parsing, deep cloning, tag and attribute
//! access, text measurement and subtree removal.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_RUN;

// === Parsing ===

/// Parse HTML string into document. Never fails; malformed markup is
/// recovered by the parser.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep-clone a document.
///
/// The clone shares nothing with the source, so it can be pruned freely.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag)
}

/// Get the lowercase tag name of a node, `None` for non-elements.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether a node has at least one element child.
#[must_use]
pub fn has_element_children(node: &NodeRef) -> bool {
    node.children().into_iter().any(|child| child.is_element())
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Visible text length: characters of the trimmed text content, with every
/// whitespace run counted once.
#[must_use]
pub fn text_len(sel: &Selection) -> usize {
    let text = text_content(sel);
    let mut len = 0;
    let mut in_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                len += 1;
            }
            in_space = true;
        } else {
            len += 1;
            in_space = false;
        }
    }
    len
}

/// Text content with every whitespace run collapsed to one space, trimmed.
#[must_use]
pub fn collapsed_text(sel: &Selection) -> String {
    collapse_whitespace(&text_content(sel))
}

/// Collapse whitespace runs to a single space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

// === Tree Manipulation ===

/// Remove every node in `nodes` from its parent, returning how many were
/// removed.
pub fn remove_nodes(nodes: &[NodeRef]) -> usize {
    for node in nodes {
        Selection::from(*node).remove();
    }
    nodes.len()
}
