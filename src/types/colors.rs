// src/types/colors.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Background-color tag carried on a block's format record.
///
/// Only background tags appear on menu blocks; anything the crawler has
/// never seen deserializes as `Other` rather than failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockColor {
    BlueBackground,
    RedBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GrayBackground,
    #[default]
    #[serde(other)]
    Other,
}

impl BlockColor {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::BlueBackground => "blue_background",
            BlockColor::RedBackground => "red_background",
            BlockColor::BrownBackground => "brown_background",
            BlockColor::OrangeBackground => "orange_background",
            BlockColor::YellowBackground => "yellow_background",
            BlockColor::GrayBackground => "gray_background",
            BlockColor::Other => "other",
        }
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
