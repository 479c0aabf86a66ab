use readable_md::{extract, extract_with_options, Options};

fn with_url(url: &str) -> Options {
    Options {
        url: Some(url.to_string()),
        ..Options::default()
    }
}

#[test]
fn structured_headline_beats_title_tag_beats_og_title() {
    let all = r#"<html><head>
        <script type="application/ld+json">{"@type": "Article", "headline": "LD Headline"}</script>
        <title>Title Tag</title>
        <meta property="og:title" content="OG Title">
    </head><body><p>x</p></body></html>"#;
    assert_eq!(extract(all).expect("ok").metadata.title, "LD Headline");

    let no_ld = r#"<html><head>
        <title>Title Tag</title>
        <meta property="og:title" content="OG Title">
    </head><body><p>x</p></body></html>"#;
    assert_eq!(extract(no_ld).expect("ok").metadata.title, "Title Tag");

    let og_only = r#"<html><head>
        <meta property="og:title" content="OG Title">
    </head><body><p>x</p></body></html>"#;
    assert_eq!(extract(og_only).expect("ok").metadata.title, "OG Title");
}

#[test]
fn date_published_beats_date_created() {
    let html = r#"<html><head><script type="application/ld+json">
        {"@context": "https://schema.org", "@graph": [
            {"@type": "WebPage", "dateCreated": "2023-01-01"},
            {"@type": "NewsArticle", "datePublished": "2024-06-30T08:00:00Z"}
        ]}
    </script></head><body><p>x</p></body></html>"#;

    assert_eq!(extract(html).expect("ok").metadata.date, "2024-06-30T08:00:00Z");
}

#[test]
fn date_falls_back_to_url_path() {
    let html = "<html><head><title>No dates</title></head><body><p>x</p></body></html>";
    let result =
        extract_with_options(html, &with_url("https://news.example/2025/01/15/some-story"))
            .expect("ok");

    assert_eq!(result.metadata.date, "2025-01-15");
}

#[test]
fn meta_date_beats_url_date() {
    let html = r#"<html><head><meta property="article:published_time" content="2020-05-05"></head>
        <body><p>x</p></body></html>"#;
    let result =
        extract_with_options(html, &with_url("https://news.example/2025/01/15/some-story"))
            .expect("ok");

    assert_eq!(result.metadata.date, "2020-05-05");
}

#[test]
fn invalid_structured_data_is_treated_as_absent() {
    let html = r#"<html><head>
        <script type="application/ld+json">{"headline": "broken",</script>
        <script type="application/ld+json">{"headline": "ignored second script"}</script>
        <title>From Title</title>
    </head><body><p>x</p></body></html>"#;

    assert_eq!(extract(html).expect("ok").metadata.title, "From Title");
}

#[test]
fn canonical_equal_to_base_is_canonical() {
    let html = r#"<html><head><link rel="canonical" href="/some/doc"></head><body><p>x</p></body></html>"#;
    let result = extract_with_options(html, &with_url("https://bla.com/some/doc")).expect("ok");

    assert_eq!(result.metadata.canonical_url, "https://bla.com/some/doc");
    assert!(result.metadata.is_canonical);
}

#[test]
fn canonical_pointing_elsewhere_is_not_canonical() {
    let html = r#"<html><head><link rel="canonical" href="https://mirror.example/original"></head>
        <body><p>x</p></body></html>"#;
    let result = extract_with_options(html, &with_url("https://bla.com/some/doc")).expect("ok");

    assert_eq!(result.metadata.canonical_url, "https://mirror.example/original");
    assert!(!result.metadata.is_canonical);
}

#[test]
fn blank_canonical_defaults_to_canonical() {
    let html = r#"<html><head><link rel="canonical" href="  "></head><body><p>x</p></body></html>"#;
    let result = extract_with_options(html, &with_url("https://bla.com/some/doc")).expect("ok");

    assert_eq!(result.metadata.canonical_url, "");
    assert!(result.metadata.is_canonical);
}

#[test]
fn apple_touch_icon_preferred_over_larger_icon() {
    let html = r#"<html><head>
        <link rel="icon" sizes="1024x1024" href="/huge.png">
        <link rel="apple-touch-icon" sizes="57x57" href="/touch.png">
    </head><body><p>x</p></body></html>"#;
    let result = extract_with_options(html, &with_url("https://bla.com/some/doc")).expect("ok");

    assert_eq!(result.metadata.icon, "https://bla.com/touch.png");
}

#[test]
fn largest_plain_icon_wins() {
    let html = r#"<html><head>
        <link rel="icon" sizes="32x32" href="/32.png">
        <link rel="icon" sizes="192x192" href="/192.png">
        <link rel="icon" sizes="64x64" href="/64.png">
    </head><body><p>x</p></body></html>"#;
    let result = extract_with_options(html, &with_url("https://bla.com/some/doc")).expect("ok");

    assert_eq!(result.metadata.icon, "https://bla.com/192.png");
}

#[test]
fn no_icon_defaults_to_favicon() {
    let html = "<html><head></head><body><p>x</p></body></html>";
    let result = extract_with_options(html, &with_url("https://bla.com/some/doc")).expect("ok");

    assert_eq!(result.metadata.icon, "https://bla.com/favicon.ico");
}

#[test]
fn url_and_hostname_come_from_base() {
    let html = r#"<html><head><meta property="og:url" content="https://og.example/x"></head>
        <body><p>x</p></body></html>"#;
    let result = extract_with_options(html, &with_url("https://www.bla.com/some/doc")).expect("ok");

    assert_eq!(result.metadata.url, "https://www.bla.com/some/doc");
    assert_eq!(result.metadata.hostname, "www.bla.com");
}

#[test]
fn author_sitename_description_chains() {
    let html = r#"<html><head>
        <script type="application/ld+json">
            [{"@type": "NewsArticle",
              "author": [{"@type": "Person", "name": "Ada Lovelace"}],
              "publisher": {"@type": "Organization", "name": "The Engine"}}]
        </script>
        <meta name="author" content="Meta Author">
        <meta property="og:site_name" content="OG Site">
        <meta property="og:description" content="OG description">
        <meta name="twitter:description" content="Twitter description">
    </head><body><p>x</p></body></html>"#;
    let metadata = extract(html).expect("ok").metadata;

    assert_eq!(metadata.author, "Ada Lovelace");
    assert_eq!(metadata.sitename, "The Engine");
    assert_eq!(metadata.description, "OG description");
}

#[test]
fn absent_values_are_empty_strings() {
    let metadata = extract("<p>plain</p>").expect("ok").metadata;

    assert_eq!(metadata.title, "");
    assert_eq!(metadata.author, "");
    assert_eq!(metadata.url, "");
    assert_eq!(metadata.hostname, "");
    assert_eq!(metadata.date, "");
    assert_eq!(metadata.icon, "");
    assert!(metadata.is_canonical);
}

#[test]
fn frontmatter_prepended_with_fixed_order() {
    let html = r#"<html><head>
        <title>Hello World</title>
        <meta name="description" content="A greeting">
        <link rel="canonical" href="https://bla.com/elsewhere">
    </head><body><article><p>Body text.</p></article></body></html>"#;
    let options = Options {
        url: Some("https://bla.com/2024/02/29/hello".to_string()),
        with_metadata: true,
        ..Options::default()
    };
    let result = extract_with_options(html, &options).expect("ok");

    assert_eq!(
        result.markdown,
        "---\n\
         title: Hello World\n\
         url: https://bla.com/2024/02/29/hello\n\
         canonical-url: https://bla.com/elsewhere\n\
         is-canonical: false\n\
         hostname: bla.com\n\
         description: A greeting\n\
         date: 2024-02-29\n\
         icon: https://bla.com/favicon.ico\n\
         ---\n\n\
         Body text."
    );
}

#[test]
fn no_frontmatter_when_metadata_is_blank() {
    let options = Options {
        with_metadata: true,
        ..Options::default()
    };
    let result = extract_with_options("<body><p>Only text</p></body>", &options).expect("ok");

    assert_eq!(result.markdown, "Only text");
}

#[test]
fn frontmatter_not_added_by_default() {
    let html = "<html><head><title>T</title></head><body><p>Text</p></body></html>";
    let result = extract(html).expect("ok");

    assert_eq!(result.markdown, "Text");
    assert_eq!(result.metadata.title, "T");
}
