//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [BASE_URL] < page.html`
//!
//! The extraction result is printed as one JSON object with the rendered
//! Markdown (frontmatter included), links, images and metadata. Set
//! `RUST_LOG=debug` to see the pipeline decisions on stderr.

use readable_md::{extract_bytes_with_options, Options};
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let url = std::env::args().nth(1).filter(|arg| !arg.trim().is_empty());

    // Read HTML from stdin
    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        log::error!("failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let options = Options {
        url,
        with_metadata: true,
        ..Options::default()
    };

    match extract_bytes_with_options(&html, &options) {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("failed to serialize result: {err}");
                std::process::exit(1);
            }
        },
        Err(err) => {
            log::error!("extraction failed: {err}");
            std::process::exit(1);
        }
    }
}
