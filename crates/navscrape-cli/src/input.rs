//! Turns a saved page into a [`RawDocument`].
//!
//! Plain text is taken as-is. HTML is flattened the way a browser renders
//! `body.text`: block elements and table rows start new lines, cells of a row
//! stay on one line. Every `<table>` is also captured cell by cell.

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use navscrape_core::{RawDocument, Table};
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::CliError;

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid body selector"));
static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid tr selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, th").expect("valid cell selector"));

const BLOCK_TAGS: [&str; 24] = [
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "div", "dl", "dt",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "li", "p", "section", "table",
    "tr",
];
const SKIPPED_TAGS: [&str; 5] = ["script", "style", "noscript", "template", "head"];

pub fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|error| CliError::io("<stdin>", error))?;
        return Ok(buffer);
    }

    std::fs::read_to_string(input).map_err(|error| CliError::io(input, error))
}

pub fn looks_like_html(input: &str, content: &str) -> bool {
    let extension = Path::new(input)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    matches!(extension.as_deref(), Some("html" | "htm"))
        || content.trim_start().starts_with('<')
}

pub fn load_document(input: &str, force_html: bool) -> Result<RawDocument, CliError> {
    let content = read_input(input)?;
    let document = if force_html || looks_like_html(input, &content) {
        document_from_html(&content)
    } else {
        RawDocument::from_text(content)
    };

    log::info!(
        "loaded {}: {} characters, {} table(s)",
        input,
        document.text.chars().count(),
        document.tables.len()
    );
    Ok(document)
}

pub fn document_from_html(html: &str) -> RawDocument {
    let parsed = Html::parse_document(html);
    let root = parsed
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| parsed.root_element());

    let mut text = String::new();
    flatten(root, &mut text);

    let tables = parsed
        .select(&TABLE_SELECTOR)
        .map(|table| {
            Table::new(
                table
                    .select(&ROW_SELECTOR)
                    .map(|row| row.select(&CELL_SELECTOR).map(cell_text).collect::<Vec<_>>())
                    .filter(|cells| !cells.is_empty())
                    .collect(),
            )
        })
        .filter(|table| !table.rows.is_empty())
        .collect();

    RawDocument {
        text: text.trim().to_owned(),
        tables,
    }
}

fn flatten(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let words = normalize_ws(text);
                if !words.is_empty() {
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push(' ');
                    }
                    out.push_str(&words);
                }
            }
            Node::Element(tag) => {
                let name = tag.name();
                if SKIPPED_TAGS.contains(&name) {
                    continue;
                }
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };

                let block = BLOCK_TAGS.contains(&name);
                if block {
                    break_line(out);
                }
                flatten(child, out);
                if block {
                    break_line(out);
                }
            }
            _ => {}
        }
    }
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    normalize_ws(&cell.text().collect::<String>())
}

fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
