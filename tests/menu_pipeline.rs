// tests/menu_pipeline.rs
//! End-to-end: a fixture record map through parsing, assembly, and the
//! condensed snippet layout.

use chrono::NaiveDate;
use menu2gist::{
    assemble, layout_snippet, parse_record_map, BlockId, BlockRecord, WEB_MENU_FOOTER,
};
use pretty_assertions::assert_eq;

const PAGE_ID: &str = "b261c537-bf9a-4fa7-9a94-c3b8a79fa573";
const END_MARKER: &str = "020728e2-407c-4602-aa71-ea145219ad69";

// A trimmed-down loadCachedPageChunk response: the root page, six menu
// items in three categories, the end marker, and one block past it.
const CHUNK_FIXTURE: &str = r#"{
  "recordMap": {
    "block": {
      "b261c537-bf9a-4fa7-9a94-c3b8a79fa573": {
        "role": "reader",
        "value": {
          "id": "b261c537-bf9a-4fa7-9a94-c3b8a79fa573",
          "properties": { "title": [["오늘의 아이스크림"]] },
          "format": {
            "page_icon": "🍦",
            "page_cover": "/images/page-cover/woodcuts_3.jpg"
          },
          "content": [
            "00000001-0000-0000-0000-000000000001",
            "00000002-0000-0000-0000-000000000002",
            "00000003-0000-0000-0000-000000000003",
            "00000004-0000-0000-0000-000000000004",
            "00000005-0000-0000-0000-000000000005",
            "00000006-0000-0000-0000-000000000006",
            "020728e2-407c-4602-aa71-ea145219ad69",
            "00000007-0000-0000-0000-000000000007"
          ]
        }
      },
      "00000001-0000-0000-0000-000000000001": {
        "value": {
          "id": "00000001-0000-0000-0000-000000000001",
          "properties": {
            "title": [["", [["d", { "type": "date", "date_format": "MM/DD", "start_date": "2024-03-06" }]]], [" 의 메뉴"]]
          }
        }
      },
      "00000002-0000-0000-0000-000000000002": {
        "value": {
          "id": "00000002-0000-0000-0000-000000000002",
          "properties": { "title": [["주문은 ", [["b"]]], ["가게에서", [["h", "red"]]]] }
        }
      },
      "00000003-0000-0000-0000-000000000003": {
        "value": {
          "id": "00000003-0000-0000-0000-000000000003",
          "properties": { "title": [["말차"]] },
          "format": { "block_color": "blue_background" }
        }
      },
      "00000004-0000-0000-0000-000000000004": {
        "value": {
          "id": "00000004-0000-0000-0000-000000000004",
          "properties": { "title": [["흑임자"]] },
          "format": { "block_color": "red_background" }
        }
      },
      "00000005-0000-0000-0000-000000000005": {
        "value": {
          "id": "00000005-0000-0000-0000-000000000005",
          "properties": { "title": [["진토닉"]] },
          "format": { "block_color": "brown_background" }
        }
      },
      "00000006-0000-0000-0000-000000000006": {
        "value": {
          "id": "00000006-0000-0000-0000-000000000006",
          "properties": { "title": [["휴무 안내"]] },
          "format": { "block_color": "gray_background" }
        }
      },
      "00000007-0000-0000-0000-000000000007": {
        "value": {
          "id": "00000007-0000-0000-0000-000000000007",
          "properties": { "title": [["방문해 주셔서 감사합니다"]] }
        }
      }
    }
  }
}"#;

fn fixture_page() -> (BlockRecord, menu2gist::BlockTable) {
    let mut map = parse_record_map(CHUNK_FIXTURE).unwrap();
    let root_id = BlockId::parse(PAGE_ID).unwrap();
    let root = map.block.shift_remove(&root_id).unwrap();
    (root, map.block)
}

fn open_day() -> NaiveDate {
    // A Wednesday.
    NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
}

fn rest_day() -> NaiveDate {
    // A Tuesday.
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

fn end_marker() -> BlockId {
    BlockId::parse(END_MARKER).unwrap()
}

#[test]
fn full_report_from_fixture() {
    let (root, blocks) = fixture_page();
    let report = assemble(&root, &blocks, &end_marker(), open_day());

    assert!(!report.is_rest_day);
    assert_eq!(
        report.lines,
        vec![
            "/images/page-cover/woodcuts_3.jpg".to_string(),
            "오늘의 아이스크림 🍦".to_string(),
            " 03/06 의 메뉴".to_string(),
            "주문은 가게에서".to_string(),
            "🟦  말차".to_string(),
            "🟥  흑임자".to_string(),
            "🟫 진토닉".to_string(),
            "휴무 안내".to_string(),
            WEB_MENU_FOOTER.to_string(),
        ]
    );
}

#[test]
fn snippet_layout_from_fixture() {
    let (root, blocks) = fixture_page();
    let report = assemble(&root, &blocks, &end_marker(), open_day());
    let doc = layout_snippet(&report);

    // Body is lines 4..=6 (three menu items), one per folded line since
    // ceil(3/4) = 1, with the note line (index 3) appended last.
    assert_eq!(doc.title, "오늘의 아이스크림 🍦");
    assert_eq!(
        doc.content,
        "🟦  말차\n🟥  흑임자\n🟫 진토닉\n✨ 주문은 가게에서 ✨"
    );
}

#[test]
fn rest_day_ignores_fixture_content() {
    let (root, blocks) = fixture_page();
    let report = assemble(&root, &blocks, &end_marker(), rest_day());

    assert!(report.is_rest_day);
    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0], menu2gist::REST_DAY_NOTICE);

    let doc = layout_snippet(&report);
    assert_eq!(doc.content, menu2gist::REST_DAY_NOTICE);
    assert_eq!(doc.title, "오늘은 쉬는날!");
}

#[test]
fn blocks_past_the_end_marker_are_never_rendered() {
    let (root, blocks) = fixture_page();
    let report = assemble(&root, &blocks, &end_marker(), open_day());

    assert!(!report
        .lines
        .iter()
        .any(|line| line.contains("방문해 주셔서 감사합니다")));
}
