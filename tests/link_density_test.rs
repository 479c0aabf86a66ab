use readable_md::link_density::{filter_by_link_density, link_density};
use readable_md::links::resolve_links;
use readable_md::{dom, extract_with_options, Options};
use url::Url;

fn base() -> Url {
    Url::parse("https://news.example/story").expect("valid base")
}

#[test]
fn dense_div_removed_and_sparse_sibling_paragraph_survives() {
    let doc = dom::parse(
        r#"<body>
        <div id="links"><a href="https://one.example/">Partner number one</a> and
            <a href="https://two.example/">partner two</a></div>
        <p id="prose">This paragraph talks about the subject in plain words and only
            cites <a href="https://one.example/">one source</a> along the way.</p>
        </body>"#,
    );
    let classes = resolve_links(&doc, Some(&base())).bind(&doc);

    let removed = filter_by_link_density(&doc, &classes, 0.5);

    assert_eq!(removed, 1);
    assert!(doc.select("#links").is_empty());
    assert!(doc.select("#prose").exists());
}

#[test]
fn four_anchor_section_removed_at_default_threshold() {
    let doc = dom::parse(
        r#"<body><section id="more">
            Also:
            <a href="https://a.example/">Alpha</a>
            <a href="https://b.example/">Bravo</a>
            <a href="https://c.example/">Charlie</a>
            <a href="https://d.example/">Delta</a>
        </section></body>"#,
    );
    let classes = resolve_links(&doc, Some(&base())).bind(&doc);

    filter_by_link_density(&doc, &classes, 0.5);

    assert!(doc.select("#more").is_empty());
}

#[test]
fn internal_links_do_not_count() {
    let doc = dom::parse(
        r#"<body><div id="nav"><a href="/a">Section A</a> <a href="/b">Section B</a></div></body>"#,
    );
    let classes = resolve_links(&doc, Some(&base())).bind(&doc);
    let div = doc.select("#nav");

    assert!(link_density(&div, &classes).abs() < f64::EPSILON);
}

#[test]
fn without_base_absolute_links_are_external() {
    let doc = dom::parse(
        r#"<body><div id="d"><a href="https://elsewhere.example/">all link text</a></div></body>"#,
    );
    let classes = resolve_links(&doc, None).bind(&doc);

    assert!((link_density(&doc.select("#d"), &classes) - 1.0).abs() < 1e-9);
}

#[test]
fn threshold_option_controls_the_pipeline() {
    let html = r#"<body><article>
        <p>Plain prose that has no links at all in it.</p>
        <p id="mixed">Half <a href="https://x.example/">link text</a></p>
    </article></body>"#;

    let strict = Options {
        url: Some(base().to_string()),
        link_density_threshold: 0.1,
        ..Options::default()
    };
    let result = extract_with_options(html, &strict).expect("expected Ok(_)");
    assert!(!result.markdown.contains("link text"));

    let lenient = Options {
        link_density_threshold: 1.0,
        ..strict
    };
    let result = extract_with_options(html, &lenient).expect("expected Ok(_)");
    assert!(result.markdown.contains("[link text](https://x.example/)"));
}
