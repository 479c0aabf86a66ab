//! Core extraction pipeline.
//!
//! Parses the document, resolves and classifies links, runs the two-pass
//! main-content selection, renders the winning content root and collects its
//! link and image records. Metadata comes from the unpruned document.

use std::collections::HashSet;

use url::Url;

use crate::dom::{self, Selection};
use crate::error::Result;
use crate::links::{resolve_links, LinkClasses};
use crate::markdown;
use crate::metadata;
use crate::options::{Options, OutputFormat};
use crate::result::{ExtractionResult, ImageRecord, LinkRecord};
use crate::selector;

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractionResult> {
    options.validate()?;
    log::debug!("starting extraction ({} bytes of HTML)", html.len());

    let base = options.base_url();
    let document = dom::parse(html);
    let annotations = resolve_links(&document, base.as_ref());

    let outcome = selector::extract_main_content(
        &document,
        &annotations,
        options.link_density_threshold,
        options.min_extracted_size,
    );
    let root = outcome.content_root();

    let body = match options.format {
        OutputFormat::Markdown => markdown::to_markdown(&root),
        OutputFormat::Html => root.html().to_string(),
    };

    let links = collect_links(&root, outcome.classes(), base.as_ref());
    let images = collect_images(&root);

    let metadata = metadata::extract_metadata(&document, base.as_ref());

    let markdown = if options.with_metadata {
        let mut out = metadata::to_frontmatter(&metadata);
        out.push_str(&body);
        out
    } else {
        body
    };

    log::debug!(
        "extracted {} chars, {} links, {} images",
        markdown.len(),
        links.len(),
        images.len()
    );

    Ok(ExtractionResult {
        markdown,
        links,
        images,
        metadata,
    })
}

/// Link records of the content root: one per distinct URL, sorted by URL.
///
/// Anchors without an `href`, with a blank one, or pointing into the page
/// itself are skipped.
fn collect_links(root: &Selection, classes: &LinkClasses, base: Option<&Url>) -> Vec<LinkRecord> {
    let mut seen = HashSet::new();
    let mut links: Vec<LinkRecord> = root
        .select("a[href]")
        .nodes()
        .iter()
        .filter(|node| !classes.is_document_local(node))
        .filter_map(|node| {
            let anchor = Selection::from(*node);
            let url = dom::get_attribute(&anchor, "href")?.trim().to_string();
            if url.is_empty() || is_same_page_fragment(&url, base) {
                return None;
            }
            Some(LinkRecord {
                text: dom::collapsed_text(&anchor),
                url,
            })
        })
        .filter(|link| seen.insert(link.url.clone()))
        .collect();

    links.sort_by(|a, b| a.url.cmp(&b.url));
    links
}

/// Whether `url` is the base page plus a fragment.
fn is_same_page_fragment(url: &str, base: Option<&Url>) -> bool {
    let (Some(base), Ok(mut target)) = (base, Url::parse(url)) else {
        return false;
    };
    if target.fragment().is_none() {
        return false;
    }
    target.set_fragment(None);
    let mut page = base.clone();
    page.set_fragment(None);
    target == page
}

/// Image records of the content root: one per distinct URL, sorted by URL.
fn collect_images(root: &Selection) -> Vec<ImageRecord> {
    let mut seen = HashSet::new();
    let mut images: Vec<ImageRecord> = root
        .select("img[src]")
        .nodes()
        .iter()
        .filter_map(|node| {
            let img = Selection::from(*node);
            let url = dom::get_attribute(&img, "src")?.trim().to_string();
            if url.is_empty() {
                return None;
            }
            Some(ImageRecord {
                alt: dom::get_attribute(&img, "alt")
                    .map(|alt| dom::collapse_whitespace(&alt))
                    .unwrap_or_default(),
                url,
            })
        })
        .filter(|image| seen.insert(image.url.clone()))
        .collect();

    images.sort_by(|a, b| a.url.cmp(&b.url));
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn article(body: &str) -> String {
        format!(
            "<html><head><title>Page</title></head><body>\
             <nav><a href=\"/home\">Home</a></nav>\
             <article>{body}</article>\
             <footer>Copyright</footer></body></html>"
        )
    }

    fn options_with_base() -> Options {
        Options {
            url: Some("https://bla.com/some/doc".to_string()),
            ..Options::default()
        }
    }

    #[test]
    fn test_links_deduplicated_and_sorted() {
        let html = article(
            r##"<p>See <a href="/b">B</a>, <a href="/a">A</a>, <a href="/b">B again</a>
                and <a href="#top">top</a> or <a href="">nothing</a> or <a>bare</a>.</p>"##,
        );
        let result = extract_content(&html, &options_with_base()).expect("extracts");

        assert_eq!(
            result.links,
            vec![
                LinkRecord { text: "A".into(), url: "https://bla.com/a".into() },
                LinkRecord { text: "B".into(), url: "https://bla.com/b".into() },
            ]
        );
    }

    #[test]
    fn test_absolute_same_page_fragment_skipped() {
        let html = article(r#"<p><a href="https://bla.com/some/doc#part">here</a> text</p>"#);
        let result = extract_content(&html, &options_with_base()).expect("extracts");
        assert!(result.links.is_empty());
    }

    #[test]
    fn test_images_deduplicated_and_sorted() {
        let html = article(
            r#"<p>text</p><img src="z.png" alt="Z"><img src="a.png" alt="A"><img src="z.png" alt="dup"><img src=" ">"#,
        );
        let result = extract_content(&html, &options_with_base()).expect("extracts");

        assert_eq!(
            result.images,
            vec![
                ImageRecord { alt: "A".into(), url: "https://bla.com/some/a.png".into() },
                ImageRecord { alt: "Z".into(), url: "https://bla.com/some/z.png".into() },
            ]
        );
    }

    #[test]
    fn test_records_only_from_content_root() {
        let html = article("<p>Body <a href=\"/inside\">inside</a></p>");
        let result = extract_content(&html, &options_with_base()).expect("extracts");

        assert_eq!(result.links.len(), 1);
        assert_eq!(result.links[0].url, "https://bla.com/inside");
    }

    #[test]
    fn test_html_format() {
        let options = Options {
            format: OutputFormat::Html,
            ..Options::default()
        };
        let result = extract_content(&article("<p>Hello</p>"), &options).expect("extracts");

        assert!(result.markdown.starts_with("<article>"));
        assert!(result.markdown.contains("<p>Hello</p>"));
        assert!(!result.markdown.contains("Copyright"));
    }

    #[test]
    fn test_frontmatter_prefix() {
        let options = Options {
            with_metadata: true,
            ..options_with_base()
        };
        let result = extract_content(&article("<p>Hello</p>"), &options).expect("extracts");

        assert!(result.markdown.starts_with("---\ntitle: Page\n"));
        assert!(result.markdown.ends_with("---\n\nHello"));
    }

    #[test]
    fn test_metadata_always_filled() {
        let result = extract_content(&article("<p>Hello</p>"), &Options::default()).expect("extracts");
        assert_eq!(result.metadata.title, "Page");
        assert_eq!(result.markdown, "Hello");
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let options = Options {
            link_density_threshold: 1.5,
            ..Options::default()
        };
        assert!(matches!(
            extract_content("<p>x</p>", &options),
            Err(Error::InvalidOption(_))
        ));
    }
}
