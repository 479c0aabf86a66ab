//! Document Cleaning
//!
//! Two independent stages strip boilerplate before the content root is
//! chosen:
//!
//! 1. [`strip_structural`] removes elements that never carry readable content
//!    (scripts, page chrome, form controls, ARIA-hidden and `display:none`
//!    nodes, short forms).
//! 2. [`prune_by_pattern`] removes short elements whose class/id looks like
//!    furniture (comments, sidebars, share widgets) unless it also looks like
//!    content.
//!
//! [`remove_empty_elements`] then sweeps text-free leaf containers once.

use dom_query::{Document, NodeRef, Selection};

use crate::dom;
use crate::patterns::{
    CHROME_ROLES, DISPLAY_NONE, EMPTY_CANDIDATE_TAGS, NEGATIVE_CLASS, POSITIVE_CLASS,
    STRUCTURAL_TAGS,
};

/// Forms and pattern-matched elements with at least this much text survive.
pub const MIN_PROTECTED_TEXT_LEN: usize = 200;

/// Remove structurally irrelevant nodes. Returns the number of removals.
pub fn strip_structural(doc: &Document) -> usize {
    let mut removed = dom::remove_nodes(doc.select(STRUCTURAL_TAGS).nodes());

    let short_forms: Vec<NodeRef> = doc
        .select("form")
        .nodes()
        .iter()
        .filter(|node| dom::text_len(&Selection::from(**node)) < MIN_PROTECTED_TEXT_LEN)
        .copied()
        .collect();
    removed += dom::remove_nodes(&short_forms);

    let hidden: Vec<NodeRef> = doc
        .select("[role], [aria-hidden], [style]")
        .nodes()
        .iter()
        .filter(|node| !is_skeleton(node) && is_hidden_or_chrome(node))
        .copied()
        .collect();
    removed += dom::remove_nodes(&hidden);

    log::debug!("structural strip removed {removed} elements");
    removed
}

/// `html`, `head` and `body` are never removed, so a content root always
/// exists.
fn is_skeleton(node: &NodeRef) -> bool {
    matches!(dom::node_tag(node).as_deref(), Some("html" | "head" | "body"))
}

fn is_hidden_or_chrome(node: &NodeRef) -> bool {
    if let Some(role) = node.attr("role") {
        let role = role.trim();
        if CHROME_ROLES.iter().any(|r| role.eq_ignore_ascii_case(r)) {
            return true;
        }
    }
    if node
        .attr("aria-hidden")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    {
        return true;
    }
    node.attr("style").is_some_and(|style| DISPLAY_NONE.is_match(&style))
}

/// Remove short elements whose class and id signal furniture.
pub fn prune_by_pattern(doc: &Document) -> usize {
    let doomed: Vec<NodeRef> = doc
        .select("[class], [id]")
        .nodes()
        .iter()
        .filter(|node| !is_skeleton(node) && is_low_value(node))
        .copied()
        .collect();

    let removed = dom::remove_nodes(&doomed);
    log::debug!("pattern prune removed {removed} elements");
    removed
}

/// Class list and id joined into one string.
fn class_and_id(node: &NodeRef) -> String {
    let class = node.attr("class").map(|c| c.to_string()).unwrap_or_default();
    let id = node.attr("id").map(|i| i.to_string()).unwrap_or_default();
    format!("{class} {id}")
}

fn is_low_value(node: &NodeRef) -> bool {
    let signature = class_and_id(node);
    NEGATIVE_CLASS.is_match(&signature)
        && !POSITIVE_CLASS.is_match(&signature)
        && dom::text_len(&Selection::from(*node)) < MIN_PROTECTED_TEXT_LEN
}

/// Remove text-free leaf containers in a single pass.
///
/// Candidates are gathered before anything is removed, in document order,
/// so a parent emptied by this sweep is not revisited.
pub fn remove_empty_elements(doc: &Document) -> usize {
    let empty: Vec<NodeRef> = doc
        .select(EMPTY_CANDIDATE_TAGS)
        .nodes()
        .iter()
        .filter(|node| {
            !dom::has_element_children(node)
                && dom::text_content(&Selection::from(**node)).trim().is_empty()
        })
        .copied()
        .collect();

    let removed = dom::remove_nodes(&empty);
    log::debug!("empty-element sweep removed {removed} elements");
    removed
}
