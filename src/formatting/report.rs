// src/formatting/report.rs
//! Assembles the day's report lines from the fetched page.

use super::category::Category;
use super::rich_text::extract_text;
use crate::constants::{REST_DAY_NOTICE, REST_WEEKDAY, WEB_MENU_FOOTER};
use crate::model::{BlockRecord, BlockTable};
use crate::types::BlockId;
use chrono::{Datelike, NaiveDate};

/// The assembled report for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuReport {
    pub lines: Vec<String>,
    pub is_rest_day: bool,
}

impl MenuReport {
    /// Short title for the published snippet: the header line on menu
    /// days, the first line of the closed notice on rest days.
    pub fn headline(&self) -> &str {
        let line = if self.is_rest_day {
            self.lines.first()
        } else {
            self.lines.get(1)
        };
        line.map(String::as_str)
            .and_then(|l| l.lines().next())
            .unwrap_or("")
            .trim()
    }
}

/// Assembles the report lines for `today`.
///
/// On the rest weekday the whole report is the canned closed notice and
/// nothing fetched is consulted. Otherwise the report is: the page cover
/// reference, a header of page title and icon, one line per child block
/// up to (excluding) the end marker, and the web-menu footer. A child id
/// missing from the table reads as a block with no text and no color.
pub fn assemble(
    root: &BlockRecord,
    blocks: &BlockTable,
    end_marker: &BlockId,
    today: NaiveDate,
) -> MenuReport {
    if today.weekday() == REST_WEEKDAY {
        return MenuReport {
            lines: vec![REST_DAY_NOTICE.to_string()],
            is_rest_day: true,
        };
    }

    let mut lines = Vec::with_capacity(root.children().len() + 3);

    lines.push(root.page_cover().unwrap_or_default().to_string());
    lines.push(format!(
        "{} {}",
        extract_text(root),
        root.page_icon().unwrap_or_default()
    ));

    let missing = BlockRecord::default();
    for child_id in root.children() {
        if child_id == end_marker {
            break;
        }

        let block = blocks.get(child_id).unwrap_or(&missing);
        let text = extract_text(block);
        let glyph = Category::from_color(block.block_color()).glyph();

        if glyph.is_empty() {
            lines.push(text);
        } else {
            lines.push(format!("{} {}", glyph, text));
        }
    }

    lines.push(WEB_MENU_FOOTER.to_string());

    MenuReport {
        lines,
        is_rest_day: false,
    }
}
