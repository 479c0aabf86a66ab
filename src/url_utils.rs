//! URL Utility Functions
//!
//! Relative-reference resolution and host helpers over the `url` crate.
//! Resolution never fails loudly: a reference that cannot be resolved comes
//! back as `None` and callers keep the original value.

use url::Url;

/// Schemes that are passed through untouched instead of being resolved.
const OPAQUE_SCHEMES: &[&str] = &["mailto:", "javascript:", "data:", "tel:"];

/// Whether a reference uses a scheme that must not be resolved.
#[must_use]
pub fn is_opaque_reference(reference: &str) -> bool {
    let reference = reference.trim_start();
    OPAQUE_SCHEMES.iter().any(|scheme| {
        reference
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Resolve a possibly-relative reference against a base URL.
///
/// Scheme-relative, path-relative and fragment-only references are all
/// handled per RFC 3986; query and fragment are preserved. `mailto:`,
/// `javascript:`, `data:` and `tel:` references are returned unchanged.
///
/// # Returns
/// * `Some(resolved)` on success, `None` when the reference is blank or
///   malformed
///
/// # Examples
/// ```
/// use readable_md::url_utils::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://bla.com/some/doc").unwrap();
/// assert_eq!(resolve("../other", &base).as_deref(), Some("https://bla.com/other"));
/// assert_eq!(resolve("#section", &base).as_deref(), Some("https://bla.com/some/doc#section"));
/// ```
#[must_use]
pub fn resolve(reference: &str, base: &Url) -> Option<String> {
    if reference.trim().is_empty() {
        return None;
    }
    if is_opaque_reference(reference) {
        return Some(reference.to_string());
    }
    base.join(reference.trim()).ok().map(String::from)
}

/// Parse a reference as an absolute URL (used when there is no base).
#[must_use]
pub fn parse_absolute(reference: &str) -> Option<Url> {
    let url = Url::parse(reference.trim()).ok()?;
    url.has_host().then_some(url)
}

/// Host of a URL string, if it parses as an absolute URL with a host.
#[must_use]
pub fn host_of(url_str: &str) -> Option<String> {
    parse_absolute(url_str).and_then(|url| url.host_str().map(str::to_string))
}

/// `scheme://host[:port]/favicon.ico` for a base URL.
#[must_use]
pub fn default_favicon(base: &Url) -> Option<String> {
    if base.host_str().is_none() {
        return None;
    }
    base.join("/favicon.ico").ok().map(String::from)
}
