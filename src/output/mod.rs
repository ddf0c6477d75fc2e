// src/output/mod.rs
//! Report delivery: stdout printing and the condensed gist snippet.
//!
//! Printing happens on every run; the gist side only when credentials
//! are configured. The condensed layout folds the menu body into a few
//! columns so the snippet stays readable in a sidebar-sized embed.

pub mod gist;

pub use gist::GistPublisher;

use crate::constants::{SNIPPET_BODY_COLUMNS, SNIPPET_ITEM_SEPARATOR};
use crate::formatting::MenuReport;

/// The document written to the snippet service: a display title and the
/// full replacement content.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetDocument {
    pub title: String,
    pub content: String,
}

/// Prints every report line to stdout, one per line.
pub fn print_report(report: &MenuReport) {
    for line in &report.lines {
        println!("{}", line);
    }
}

/// Lays the report out for the snippet service.
///
/// Rest-day reports pass through verbatim. Menu reports keep only the
/// note line (index 3, wrapped in its decorative marker) and the menu
/// body (index 4 up to the last two lines), with the body folded into at
/// most [`SNIPPET_BODY_COLUMNS`] lines of `ceil(len / columns)` items
/// each and the note appended last. Cover, header, and trailing lines
/// are stdout-only.
pub fn layout_snippet(report: &MenuReport) -> SnippetDocument {
    let title = report.headline().to_string();

    if report.is_rest_day {
        return SnippetDocument {
            title,
            content: report.lines.join("\n"),
        };
    }

    let mut out: Vec<String> = Vec::new();

    let body_end = report.lines.len().saturating_sub(2);
    if let Some(body) = report.lines.get(4..body_end) {
        if !body.is_empty() {
            let chunk_size = body.len().div_ceil(SNIPPET_BODY_COLUMNS);
            for chunk in body.chunks(chunk_size) {
                out.push(chunk.join(SNIPPET_ITEM_SEPARATOR));
            }
        }
    }

    if let Some(note) = report.lines.get(3) {
        out.push(format!("✨ {} ✨", note));
    }

    SnippetDocument {
        title,
        content: out.join("\n"),
    }
}
