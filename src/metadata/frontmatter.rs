//! Frontmatter Serialization
//!
//! Renders a [`Metadata`] record as the `---`-delimited header prepended to
//! extracted content.

use crate::dom;
use crate::result::Metadata;

/// Render the frontmatter block for `metadata`.
///
/// Blank fields are omitted. `is-canonical` is always written when the block
/// is. Returns an empty string when every text field is blank.
///
/// # Example
///
/// ```
/// use readable_md::{Metadata, metadata::frontmatter::to_frontmatter};
///
/// let metadata = Metadata {
///     title: "Hello".to_string(),
///     ..Metadata::default()
/// };
/// assert_eq!(
///     to_frontmatter(&metadata),
///     "---\ntitle: Hello\nis-canonical: true\n---\n\n"
/// );
/// assert_eq!(to_frontmatter(&Metadata::default()), "");
/// ```
#[must_use]
pub fn to_frontmatter(metadata: &Metadata) -> String {
    let is_canonical = metadata.is_canonical.to_string();
    let fields: [(&str, &str, bool); 10] = [
        ("title", metadata.title.as_str(), true),
        ("author", metadata.author.as_str(), true),
        ("url", metadata.url.as_str(), true),
        ("canonical-url", metadata.canonical_url.as_str(), true),
        ("is-canonical", is_canonical.as_str(), false),
        ("hostname", metadata.hostname.as_str(), true),
        ("description", metadata.description.as_str(), true),
        ("sitename", metadata.sitename.as_str(), true),
        ("date", metadata.date.as_str(), true),
        ("icon", metadata.icon.as_str(), true),
    ];

    let has_text = fields
        .iter()
        .any(|(_, value, is_text)| *is_text && !value.trim().is_empty());
    if !has_text {
        return String::new();
    }

    let mut out = String::from("---\n");
    for (key, value, _) in fields {
        if value.trim().is_empty() {
            continue;
        }
        out.push_str(key);
        out.push_str(": ");
        // One line per field.
        out.push_str(&dom::collapse_whitespace(value));
        out.push('\n');
    }
    out.push_str("---\n\n");
    out
}
