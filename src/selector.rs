//! Main Content Selection
//!
//! Runs the cleaning pipeline on a fresh clone of the link-resolved document
//! and picks the content root by selector priority. When the first,
//! aggressive pass leaves too little text, a second pass restarts from an
//! unpruned clone and skips the class/id pattern prune.

use dom_query::{Document, Selection};

use crate::cleaner;
use crate::dom;
use crate::link_density;
use crate::links::{LinkAnnotations, LinkClasses};
use crate::patterns::CONTENT_ROOT_SELECTORS;

/// Which cleaning pass produced a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Structural strip, pattern prune, link density, empty sweep.
    Aggressive,
    /// As `Aggressive` without the pattern prune.
    Lenient,
}

/// A pruned document together with the link classes bound to it.
pub struct PassOutcome {
    doc: Document,
    classes: LinkClasses,
    pass: Pass,
}

impl PassOutcome {
    /// The pruned document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Link classes keyed by this document's node identities.
    #[must_use]
    pub fn classes(&self) -> &LinkClasses {
        &self.classes
    }

    /// The pass that produced this outcome.
    #[must_use]
    pub fn pass(&self) -> Pass {
        self.pass
    }

    /// The selected content root.
    #[must_use]
    pub fn content_root(&self) -> Selection<'_> {
        select_content_root(&self.doc)
    }

    /// Visible text length of the content root.
    #[must_use]
    pub fn text_len(&self) -> usize {
        dom::text_len(&self.content_root())
    }
}

/// Pick the content root: the first element matching the candidate
/// selectors in priority order, falling back to `body`.
#[must_use]
pub fn select_content_root(doc: &Document) -> Selection<'_> {
    for selector in CONTENT_ROOT_SELECTORS {
        let candidate = doc.select_single(selector);
        if candidate.exists() {
            log::debug!("content root matched {selector:?}");
            return candidate;
        }
    }

    let body = doc.select_single("body");
    if body.exists() {
        body
    } else {
        Selection::from(doc.root())
    }
}

/// Run one cleaning pass on a clone of `resolved`.
#[must_use]
pub fn run_pass(
    resolved: &Document,
    annotations: &LinkAnnotations,
    threshold: f64,
    pass: Pass,
) -> PassOutcome {
    let doc = dom::clone_document(resolved);
    let classes = annotations.bind(&doc);

    cleaner::strip_structural(&doc);
    if pass == Pass::Aggressive {
        cleaner::prune_by_pattern(&doc);
    }
    link_density::filter_by_link_density(&doc, &classes, threshold);
    cleaner::remove_empty_elements(&doc);

    PassOutcome { doc, classes, pass }
}

/// Select the main content, retrying once less aggressively when the first
/// pass yields fewer than `min_text_len` characters.
#[must_use]
pub fn extract_main_content(
    resolved: &Document,
    annotations: &LinkAnnotations,
    threshold: f64,
    min_text_len: usize,
) -> PassOutcome {
    let first = run_pass(resolved, annotations, threshold, Pass::Aggressive);
    let first_len = first.text_len();
    if first_len >= min_text_len {
        log::debug!("first pass kept {first_len} characters");
        return first;
    }

    log::debug!(
        "first pass kept only {first_len} characters (< {min_text_len}); retrying without pattern prune"
    );
    let second = run_pass(resolved, annotations, threshold, Pass::Lenient);
    log::debug!("second pass kept {} characters", second.text_len());
    second
}
