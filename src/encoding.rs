//! Decoding of byte input to UTF-8.
//!
//! A byte-order mark wins; otherwise a `<meta charset>` or `http-equiv`
//! declaration near the top of the document is honoured. Anything else is
//! read as UTF-8. Malformed sequences become U+FFFD instead of failing.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::META_CHARSET;

/// Bytes scanned for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Determine the encoding of an HTML byte buffer.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        // A declared UTF-16 without a BOM is read as UTF-8.
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use readable_md::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    // `decode` strips a matching BOM and replaces malformed sequences.
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced malformed {} sequences while decoding", used.name());
    }
    decoded
}
