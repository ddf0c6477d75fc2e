// src/formatting/rich_text.rs
//! Reduces a block's rich-text run tree to one plain display string.
//!
//! Decorative style runs (bold, italic, underline, highlight, link)
//! contribute nothing and are not recursed into. Date runs render to a
//! locale string using their own format template. Everything else is
//! visited in order, and the surviving fragments join with single spaces.

use crate::model::{BlockRecord, DateRun, RichTextNode, StyleRun};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

/// Upstream date-template tokens and their strftime directives, longest
/// token first. Order matters: `YYYY` must win over `YY` when scanning.
const DATE_TOKEN_TABLE: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
];

/// Extracts the display text of one block.
///
/// A block without a title yields the empty string, not an error.
pub fn extract_text(block: &BlockRecord) -> String {
    let Some(runs) = block.title_runs() else {
        return String::new();
    };

    let mut fragments = Vec::new();
    collect_fragments(runs, &mut fragments);
    fragments.join(" ")
}

fn collect_fragments(node: &RichTextNode, fragments: &mut Vec<String>) {
    match node {
        RichTextNode::Text(text) => fragments.push(text.trim().to_string()),
        RichTextNode::Styled(StyleRun::Date(run)) => {
            if let Some(rendered) = render_date_run(run) {
                fragments.push(rendered);
            }
        }
        RichTextNode::Styled(
            StyleRun::Bold
            | StyleRun::Italic
            | StyleRun::Underline
            | StyleRun::Highlight
            | StyleRun::Link,
        ) => {}
        RichTextNode::Sequence(children) => {
            for child in children {
                collect_fragments(child, fragments);
            }
        }
        RichTextNode::Opaque => {}
    }
}

/// Renders a date run with its own format template.
///
/// A run missing its template or start date, or carrying a date that does
/// not parse as ISO, contributes nothing.
fn render_date_run(run: &DateRun) -> Option<String> {
    let template = run.date_format.as_deref()?;
    let start = run.start_date.as_deref()?;

    let date = NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
    let strftime = translate_date_template(template);

    let items: Vec<Item<'_>> = StrftimeItems::new(&strftime).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut rendered = String::new();
    write!(rendered, "{}", date.format_with_items(items.iter())).ok()?;
    Some(rendered)
}

/// Translates an upstream date template into a strftime format string.
///
/// A single left-to-right scan over the token table, so `YYYY-MM` cannot
/// be corrupted by a shorter token matching inside a longer one.
fn translate_date_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (token, directive) in DATE_TOKEN_TABLE {
            if let Some(stripped) = rest.strip_prefix(token) {
                out.push_str(directive);
                rest = stripped;
                continue 'scan;
            }
        }
        let ch = rest.chars().next().expect("rest is non-empty");
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
