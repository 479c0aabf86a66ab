//! Link Density Filtering
//!
//! Removes block-level elements whose text is dominated by links to other
//! sites. Only anchors classified as external count toward the density;
//! internal and document-local links do not.

use dom_query::{Document, NodeRef, Selection};

use crate::dom;
use crate::links::LinkClasses;
use crate::patterns::DENSITY_CANDIDATE_TAGS;

/// Default maximum external-link density.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Fraction of an element's text that sits inside external anchors.
///
/// Defined as `0.0` for elements without text.
#[must_use]
pub fn link_density(element: &Selection, classes: &LinkClasses) -> f64 {
    let text_len = dom::text_len(element);
    if text_len == 0 {
        return 0.0;
    }

    let link_len: usize = element
        .select("a")
        .nodes()
        .iter()
        .filter(|anchor| classes.is_external(anchor))
        .map(|anchor| dom::text_len(&Selection::from(*anchor)))
        .sum();

    link_len as f64 / text_len as f64
}

/// Remove every `div`, `p`, `li`, `td` and `section` whose external-link
/// density exceeds `threshold`, in document order.
///
/// Returns the number of removed elements.
pub fn filter_by_link_density(doc: &Document, classes: &LinkClasses, threshold: f64) -> usize {
    let dense: Vec<NodeRef> = doc
        .select(DENSITY_CANDIDATE_TAGS)
        .nodes()
        .iter()
        .filter(|node| {
            let density = link_density(&Selection::from(**node), classes);
            if density > threshold {
                log::trace!(
                    "removing <{}> with link density {density:.2}",
                    dom::node_tag(node).unwrap_or_default()
                );
                true
            } else {
                false
            }
        })
        .copied()
        .collect();

    let removed = dom::remove_nodes(&dense);
    log::debug!("link density filter removed {removed} elements");
    removed
}
