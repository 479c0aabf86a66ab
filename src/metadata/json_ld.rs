//! JSON-LD Structured Data
//!
//! Parses the first `application/ld+json` script of a document into a
//! generic JSON tree and answers schema.org-style field lookups on it.
//!
//! Parsing is fallible: a missing script and invalid JSON are distinct
//! [`StructuredDataError`]s. Callers decide whether that means "absent".

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

use crate::dom;

/// Why structured data could not be read.
#[derive(Debug, thiserror::Error)]
pub enum StructuredDataError {
    /// The document has no `application/ld+json` script.
    #[error("no application/ld+json script found")]
    Missing,

    /// The first script does not hold valid JSON.
    #[error("invalid JSON-LD: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Parse the first `application/ld+json` script in document order.
///
/// Later scripts are ignored, even when the first one fails to parse.
///
/// # Errors
///
/// [`StructuredDataError::Missing`] when no such script exists,
/// [`StructuredDataError::Syntax`] when its content is not valid JSON.
pub fn parse_structured_data(doc: &Document) -> Result<Value, StructuredDataError> {
    let script = doc
        .select("script[type]")
        .nodes()
        .iter()
        .find(|node| {
            node.attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
        })
        .copied()
        .ok_or(StructuredDataError::Missing)?;

    let text = dom::text_content(&Selection::from(script));
    Ok(serde_json::from_str(text.trim())?)
}

/// Field lookups over a parsed JSON-LD tree.
#[derive(Debug, Default)]
pub struct StructuredData<'a> {
    objects: Vec<&'a Map<String, Value>>,
}

impl<'a> StructuredData<'a> {
    /// Collect the objects lookups consider, in lookup order: the top-level
    /// object, the items of a top-level array, then `@graph` items.
    #[must_use]
    pub fn new(root: &'a Value) -> Self {
        let mut objects: Vec<&'a Map<String, Value>> = match root {
            Value::Object(map) => vec![map],
            Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
            _ => Vec::new(),
        };

        let graph: Vec<&'a Map<String, Value>> = objects
            .iter()
            .filter_map(|map| map.get("@graph"))
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(Value::as_object)
            .collect();
        objects.extend(graph);

        Self { objects }
    }

    /// First non-blank string value of `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.objects
            .iter()
            .find_map(|map| map.get(key).and_then(non_blank))
    }

    /// First non-blank name under `key`: a plain string, an object's
    /// `name`, or the first array item that is either.
    #[must_use]
    pub fn name(&self, key: &str) -> Option<String> {
        self.objects
            .iter()
            .find_map(|map| map.get(key).and_then(name_of))
    }
}

fn non_blank(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn name_of(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => non_blank(value),
        Value::Object(map) => map.get("name").and_then(non_blank),
        Value::Array(items) => items.iter().find_map(|item| match item {
            Value::Array(_) => None,
            other => name_of(other),
        }),
        _ => None,
    }
}
