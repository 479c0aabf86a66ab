//! Markdown Rendering
//!
//! Depth-first conversion of a content subtree into Markdown text.
//!
//! Text outside `pre`/`code` has its whitespace collapsed; text inside is
//! kept verbatim. Verbatim spans stay inline during rendering, bracketed by
//! private-use markers, so enclosing elements such as `blockquote` still
//! see and prefix every line. Before the final whole-string normalization
//! (blank-line collapsing, line-edge space stripping, trimming) each span is
//! swapped for a numbered placeholder, and the spans are restored as the
//! very last step.

use dom_query::{NodeRef, Selection};
use regex::Captures;

use crate::dom;
use crate::patterns::{
    LEADING_SPACES, MULTIPLE_NEWLINES, SPACE_RUN, TRAILING_SPACES, VERBATIM_SPAN, WHITESPACE_RUN,
};

const VERBATIM_OPEN: char = '\u{E000}';
const VERBATIM_CLOSE: char = '\u{E001}';
const PLACEHOLDER_OPEN: char = '\u{E002}';
const PLACEHOLDER_CLOSE: char = '\u{E003}';

/// Render the first node of `root` (and its descendants) as Markdown.
///
/// # Example
///
/// ```
/// use readable_md::dom;
/// use readable_md::markdown::to_markdown;
///
/// let doc = dom::parse("<h2>Title</h2><p>Some <em>text</em>.</p>");
/// let body = doc.select("body");
/// assert_eq!(to_markdown(&body), "## Title\n\nSome *text*.");
/// ```
#[must_use]
pub fn to_markdown(root: &Selection) -> String {
    let Some(node) = root.nodes().first() else {
        return String::new();
    };

    finish(&render(node, Context::default()))
}

/// Parse an HTML fragment and render its `body` as Markdown.
#[must_use]
pub fn html_to_markdown(html: &str) -> String {
    let doc = dom::parse(html);
    to_markdown(&doc.select("body"))
}

/// Context carried down the tree.
#[derive(Debug, Clone, Copy, Default)]
struct Context {
    /// Number of enclosing `ul`/`ol` elements.
    depth: usize,
    /// Inside `pre` or `code`: text is emitted verbatim.
    preserve: bool,
    /// An ancestor already bracketed its content as verbatim.
    marked: bool,
    /// Inside `pre`: nested `code` adds no backticks of its own.
    in_pre: bool,
}

fn render(node: &NodeRef, ctx: Context) -> String {
    if node.is_text() {
        let text = node.text();
        return if ctx.preserve {
            text.to_string()
        } else {
            collapse_inline(&text)
        };
    }

    let Some(tag) = dom::node_tag(node) else {
        // Document roots and fragments render their children; comments
        // and doctypes render nothing.
        if node.is_element() {
            return String::new();
        }
        return render_children(node, ctx);
    };

    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag
                .strip_prefix('h')
                .and_then(|n| n.parse::<usize>().ok())
                .unwrap_or(1);
            let content = render_children(node, ctx);
            let content = content.trim();
            if content.is_empty() {
                String::new()
            } else {
                format!("{} {content}\n\n", "#".repeat(level))
            }
        }
        "p" => {
            let content = render_children(node, ctx);
            format!("{}\n\n", content.trim())
        }
        "br" => "\n".to_string(),
        "hr" => "\n---\n\n".to_string(),
        "strong" | "b" => wrap_inline(&render_children(node, ctx), "**"),
        "em" | "i" => wrap_inline(&render_children(node, ctx), "*"),
        "code" => render_code(node, ctx),
        "pre" => render_pre(node, ctx),
        "a" => {
            let content = render_children(node, ctx);
            let content = content.trim();
            match node.attr("href") {
                Some(href) if !href.trim().is_empty() => {
                    format!(" [{content}]({}) ", href.trim())
                }
                _ => content.to_string(),
            }
        }
        "img" => {
            let src = node.attr("src").map(|s| s.trim().to_string()).unwrap_or_default();
            if src.is_empty() {
                return String::new();
            }
            let alt = node
                .attr("alt")
                .map(|a| dom::collapse_whitespace(&a))
                .unwrap_or_default();
            format!("![{alt}]({src})\n\n")
        }
        "ul" | "ol" => {
            let nested = ctx.depth > 0;
            let inner = Context {
                depth: ctx.depth + 1,
                ..ctx
            };
            let content = render_children(node, inner);
            if nested {
                format!("\n{content}")
            } else {
                format!("{content}\n")
            }
        }
        "li" => {
            let indent = "  ".repeat(ctx.depth.saturating_sub(1));
            let content = render_children(node, ctx);
            format!("{indent}- {}\n", content.trim())
        }
        "blockquote" => format!("\n{}\n\n", quote(&render_children(node, ctx))),
        "figcaption" => wrap_inline(&render_children(node, ctx), "*"),
        "table" => render_table(node),
        "script" | "style" | "noscript" | "template" | "head" => String::new(),
        _ => render_children(node, ctx),
    }
}

fn render_children(node: &NodeRef, ctx: Context) -> String {
    let mut out = String::new();
    for child in node.children() {
        out.push_str(&render(&child, ctx));
    }
    out
}

fn render_code(node: &NodeRef, ctx: Context) -> String {
    let inner = Context {
        preserve: true,
        marked: true,
        ..ctx
    };
    let content = render_children(node, inner);
    let content = if ctx.marked { content } else { bracket(&content) };

    if ctx.in_pre {
        content
    } else if raw_text(node).contains('\n') {
        fence(&content)
    } else {
        format!("`{content}`")
    }
}

fn render_pre(node: &NodeRef, ctx: Context) -> String {
    let has_code = Selection::from(*node).select("code").exists();
    let marks = !has_code && !ctx.marked;
    let inner = Context {
        preserve: true,
        marked: ctx.marked || marks,
        in_pre: true,
        ..ctx
    };
    let content = render_children(node, inner);
    let content = if marks { bracket(&content) } else { content };

    if raw_text(node).contains('\n') {
        fence(&content)
    } else {
        format!("`{content}`")
    }
}

/// Mark `content` as verbatim.
fn bracket(content: &str) -> String {
    format!("{VERBATIM_OPEN}{content}{VERBATIM_CLOSE}")
}

/// Prefix every line with `"> "`.
///
/// Blank lines become a bare `>`, and runs of them collapse to one, except
/// inside verbatim spans, whose lines are all kept.
fn quote(content: &str) -> String {
    let mut lines = Vec::new();
    let mut in_verbatim = false;
    let mut previous_blank = false;

    for line in content.trim().lines() {
        let blank = line.trim().is_empty();
        if in_verbatim {
            lines.push(if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            });
        } else if blank {
            if !previous_blank {
                lines.push(">".to_string());
            }
        } else {
            lines.push(format!("> {line}"));
        }
        previous_blank = blank && !in_verbatim;

        for ch in line.chars() {
            match ch {
                VERBATIM_OPEN => in_verbatim = true,
                VERBATIM_CLOSE => in_verbatim = false,
                _ => {}
            }
        }
    }
    lines.join("\n")
}

/// Normalize the rendered string, keeping verbatim spans out of reach of the
/// whitespace rules.
fn finish(raw: &str) -> String {
    let mut preserved = Vec::new();
    let text = VERBATIM_SPAN.replace_all(raw, |caps: &Captures| {
        let index = preserved.len();
        preserved.push(caps[1].to_string());
        format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
    });

    let text = SPACE_RUN.replace_all(&text, " ");
    let text = TRAILING_SPACES.replace_all(&text, "\n");
    let text = LEADING_SPACES.replace_all(&text, "\n");
    let text = MULTIPLE_NEWLINES.replace_all(&text, "\n\n");
    let mut text = text.trim().to_string();

    for (index, content) in preserved.iter().enumerate() {
        let placeholder = format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}");
        text = text.replacen(&placeholder, content, 1);
    }
    text
}

/// Collapse whitespace runs in a text node.
///
/// Runs at the edges shrink to one space instead of vanishing so adjacent
/// inline elements keep their word boundaries. Doubled spaces and line-edge
/// spaces are removed by the final normalization.
fn collapse_inline(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Wrap trimmed inline content in a delimiter; empty content renders nothing.
fn wrap_inline(content: &str, delimiter: &str) -> String {
    let content = content.trim();
    if content.is_empty() {
        String::new()
    } else {
        format!("{delimiter}{content}{delimiter}")
    }
}

fn fence(content: &str) -> String {
    format!("\n```\n{content}\n```\n\n")
}

fn raw_text(node: &NodeRef) -> String {
    Selection::from(*node).text().to_string()
}

// === Tables ===

/// Render a table as a pipe table.
///
/// The header is the first `thead` row, or the first row when it holds `th`
/// cells. Body rows are the rows under `tbody` when the table has one, else
/// every other row. Rows of nested tables are never included.
fn render_table(table: &NodeRef) -> String {
    let rows: Vec<NodeRef> = Selection::from(*table)
        .select("tr")
        .nodes()
        .iter()
        .filter(|row| owning_table(row).is_some_and(|owner| owner.id == table.id))
        .copied()
        .collect();

    let header = rows
        .iter()
        .find(|row| parent_is(row, "thead"))
        .or_else(|| {
            rows.first().filter(|row| {
                row.children()
                    .into_iter()
                    .any(|cell| dom::node_tag(&cell).as_deref() == Some("th"))
            })
        })
        .copied();

    let mut lines = Vec::new();
    if let Some(header) = header {
        let cells = row_cells(&header);
        if !cells.is_empty() {
            lines.push(format_row(&cells));
            lines.push(format!("|{}", " --- |".repeat(cells.len())));
        }
    }

    let has_tbody = rows.iter().any(|row| parent_is(row, "tbody"));
    for row in &rows {
        if header.is_some_and(|h| h.id == row.id) || (has_tbody && !parent_is(row, "tbody")) {
            continue;
        }
        let cells = row_cells(row);
        if !cells.is_empty() {
            lines.push(format_row(&cells));
        }
    }

    if lines.is_empty() {
        return String::new();
    }
    format!("\n{}\n\n", lines.join("\n"))
}

fn parent_is(node: &NodeRef, tag: &str) -> bool {
    node.parent()
        .is_some_and(|parent| dom::node_tag(&parent).as_deref() == Some(tag))
}

/// The nearest `table` ancestor of a row.
fn owning_table<'a>(row: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut current = row.parent();
    while let Some(node) = current {
        if dom::node_tag(&node).as_deref() == Some("table") {
            return Some(node);
        }
        current = node.parent();
    }
    None
}

fn row_cells(row: &NodeRef) -> Vec<String> {
    row.children()
        .into_iter()
        .filter(|cell| matches!(dom::node_tag(cell).as_deref(), Some("td" | "th")))
        .map(|cell| dom::collapsed_text(&Selection::from(cell)).replace('|', "\\|"))
        .collect()
}

fn format_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
