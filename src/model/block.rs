// src/model/block.rs
use super::rich_text::RichTextNode;
use crate::types::{BlockColor, BlockId};
use indexmap::IndexMap;
use serde::Deserialize;

/// Lookup table of block records keyed by identifier, in wire order.
pub type BlockTable = IndexMap<BlockId, BlockRecord>;

/// One entry of the `recordMap.block` mapping.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BlockRecord {
    #[serde(default)]
    pub value: Option<BlockValue>,
}

/// The payload of a block record.
///
/// Only the root page record carries `content` (its ordered child ids)
/// and the page icon/cover; ordinary menu blocks carry a title run tree
/// and, for categorized items, a background color.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BlockValue {
    pub id: BlockId,
    #[serde(default)]
    pub properties: Option<BlockProperties>,
    #[serde(default)]
    pub format: Option<BlockFormat>,
    #[serde(default)]
    pub content: Vec<BlockId>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BlockProperties {
    #[serde(default)]
    pub title: Option<RichTextNode>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BlockFormat {
    #[serde(default)]
    pub block_color: Option<BlockColor>,
    #[serde(default)]
    pub page_icon: Option<String>,
    #[serde(default)]
    pub page_cover: Option<String>,
}

impl BlockRecord {
    /// The block's title run tree, if it has one.
    pub fn title_runs(&self) -> Option<&RichTextNode> {
        self.value.as_ref()?.properties.as_ref()?.title.as_ref()
    }

    /// The block's background-color tag, if it has one.
    pub fn block_color(&self) -> Option<BlockColor> {
        self.value.as_ref()?.format.as_ref()?.block_color
    }

    /// The page icon emoji (root record only).
    pub fn page_icon(&self) -> Option<&str> {
        self.value.as_ref()?.format.as_ref()?.page_icon.as_deref()
    }

    /// The page cover image reference (root record only).
    pub fn page_cover(&self) -> Option<&str> {
        self.value.as_ref()?.format.as_ref()?.page_cover.as_deref()
    }

    /// Ordered child block ids (root record only; empty elsewhere).
    pub fn children(&self) -> &[BlockId] {
        self.value.as_ref().map(|v| v.content.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> BlockRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_full_root_record() {
        let rec = record(json!({
            "role": "reader",
            "value": {
                "id": "b261c537-bf9a-4fa7-9a94-c3b8a79fa573",
                "properties": { "title": [["오늘의 메뉴"]] },
                "format": {
                    "page_icon": "🍦",
                    "page_cover": "/images/page-cover/gradients_10.jpg"
                },
                "content": [
                    "11111111-1111-1111-1111-111111111111",
                    "22222222-2222-2222-2222-222222222222"
                ]
            }
        }));
        assert_eq!(rec.page_icon(), Some("🍦"));
        assert_eq!(
            rec.page_cover(),
            Some("/images/page-cover/gradients_10.jpg")
        );
        assert_eq!(rec.children().len(), 2);
        assert!(rec.title_runs().is_some());
        assert_eq!(rec.block_color(), None);
    }

    #[test]
    fn absent_attributes_read_as_none() {
        let rec = record(json!({
            "value": { "id": "33333333-3333-3333-3333-333333333333" }
        }));
        assert!(rec.title_runs().is_none());
        assert_eq!(rec.block_color(), None);
        assert_eq!(rec.page_icon(), None);
        assert!(rec.children().is_empty());

        let empty = record(json!({}));
        assert!(empty.title_runs().is_none());
    }

    #[test]
    fn colored_menu_block_parses() {
        let rec = record(json!({
            "value": {
                "id": "44444444-4444-4444-4444-444444444444",
                "properties": { "title": [["말차"]] },
                "format": { "block_color": "blue_background" }
            }
        }));
        assert_eq!(rec.block_color(), Some(crate::types::BlockColor::BlueBackground));
    }
}
