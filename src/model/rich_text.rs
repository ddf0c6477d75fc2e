// src/model/rich_text.rs
//! Typed view of a block title's rich-text run tree.
//!
//! On the wire a title is a loosely-typed nested array: a plain string is
//! a literal run, a short array whose head is a one-character tag is a
//! style run, and any other array is a sequence of sub-runs. The shapes
//! are classified exactly once, at deserialization, into this sum type —
//! the extractor downstream matches exhaustively and never inspects JSON.
//!
//! Classification order is load-bearing: a style run is itself an array,
//! so the tag shapes must be recognized before the generic sequence
//! fallback, or `["b"]` would read as a sequence holding the text "b".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One node of a title run tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextNode {
    /// A literal text run.
    Text(String),
    /// A recognized style tag.
    Styled(StyleRun),
    /// An array that matched no style shape: a sequence of sub-runs.
    Sequence(Vec<RichTextNode>),
    /// A non-text scalar or object. Contributes nothing.
    Opaque,
}

/// A recognized style run.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRun {
    /// `["b"]`
    Bold,
    /// `["i"]`
    Italic,
    /// `["_"]`
    Underline,
    /// `["h", <color>]`
    Highlight,
    /// `["a", <href>]`
    Link,
    /// `["d", {"type": "date", ...}]`
    Date(DateRun),
}

/// Parameters of a date run.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRun {
    /// Upstream format template, e.g. `YYYY/MM/DD`.
    pub date_format: Option<String>,
    /// ISO start date, e.g. `2024-03-05`.
    pub start_date: Option<String>,
}

impl RichTextNode {
    /// Classify one wire value into a typed node.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => RichTextNode::Text(text.clone()),
            Value::Array(items) => Self::classify_array(items),
            _ => RichTextNode::Opaque,
        }
    }

    fn classify_array(items: &[Value]) -> Self {
        if let Some(style) = StyleRun::match_shape(items) {
            return RichTextNode::Styled(style);
        }
        RichTextNode::Sequence(items.iter().map(Self::from_value).collect())
    }
}

impl StyleRun {
    /// Match an array against the recognized style shapes.
    ///
    /// A bare tag (`["b"]`) and a parameterized tag (`["h", ..]`) are
    /// distinct shapes; `["b", x]` matches nothing here and falls back to
    /// sequence recursion, as does a `d` tag whose params are not a date.
    fn match_shape(items: &[Value]) -> Option<StyleRun> {
        match items {
            [Value::String(tag)] => match tag.as_str() {
                "b" => Some(StyleRun::Bold),
                "i" => Some(StyleRun::Italic),
                "_" => Some(StyleRun::Underline),
                _ => None,
            },
            [Value::String(tag), params] => match tag.as_str() {
                "h" => Some(StyleRun::Highlight),
                "a" => Some(StyleRun::Link),
                "d" if params.get("type").and_then(Value::as_str) == Some("date") => {
                    Some(StyleRun::Date(DateRun {
                        date_format: params
                            .get("date_format")
                            .and_then(Value::as_str)
                            .map(String::from),
                        start_date: params
                            .get("start_date")
                            .and_then(Value::as_str)
                            .map(String::from),
                    }))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for RichTextNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(RichTextNode::from_value(&value))
    }
}
