//! Icon Selection
//!
//! Scores every `<link rel="...icon...">` and keeps the best one. Apple touch
//! icons beat plain icons regardless of size; within a kind the largest
//! declared `WxH` area wins, and the first candidate wins ties. Without any
//! icon link, `/favicon.ico` on the base URL's origin is assumed.

use dom_query::{Document, NodeRef};
use url::Url;

use crate::patterns::ICON_SIZE;
use crate::url_utils;

/// Ranking key of an icon candidate; larger is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct IconScore {
    apple_touch: bool,
    area: u64,
}

/// Pick the document icon, resolved against `base` when present.
///
/// Returns an empty string when there is neither an icon link nor a base URL.
#[must_use]
pub fn select_icon(doc: &Document, base: Option<&Url>) -> String {
    let mut best: Option<(IconScore, String)> = None;

    for node in doc.select("link[rel][href]").nodes() {
        let Some(score) = score(node) else {
            continue;
        };
        let Some(href) = node
            .attr("href")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
        else {
            continue;
        };

        if best.as_ref().is_none_or(|(current, _)| score > *current) {
            best = Some((score, href));
        }
    }

    match (best, base) {
        (Some((_, href)), Some(base)) => url_utils::resolve(&href, base).unwrap_or(href),
        (Some((_, href)), None) => href,
        (None, Some(base)) => url_utils::default_favicon(base).unwrap_or_default(),
        (None, None) => String::new(),
    }
}

/// Score a `<link>` if its `rel` names an icon.
fn score(node: &NodeRef) -> Option<IconScore> {
    let rel = node.attr("rel")?.to_ascii_lowercase();
    let mut tokens = rel.split_ascii_whitespace();

    let apple_touch = tokens
        .clone()
        .any(|t| t == "apple-touch-icon" || t == "apple-touch-icon-precomposed");
    if !apple_touch && !tokens.any(|t| t == "icon") {
        return None;
    }

    Some(IconScore {
        apple_touch,
        area: node.attr("sizes").map_or(0, |sizes| declared_area(&sizes)),
    })
}

/// Largest `WxH` area in a `sizes` attribute, `0` when none parses.
fn declared_area(sizes: &str) -> u64 {
    ICON_SIZE
        .captures_iter(sizes)
        .filter_map(|caps| {
            let width: u64 = caps.get(1)?.as_str().parse().ok()?;
            let height: u64 = caps.get(2)?.as_str().parse().ok()?;
            Some(width.saturating_mul(height))
        })
        .max()
        .unwrap_or(0)
}
