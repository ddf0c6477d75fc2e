// src/formatting/category.rs
//! Maps a block's background color to its ice-cream category.

use crate::types::BlockColor;

/// Category of a menu item, as signalled by its block's background color.
///
/// Yellow and gray backgrounds appear on the page for layout reasons and
/// carry no category, as does any color the table does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Contains milk (blue background).
    Milk,
    /// Dairy-free (red background).
    DairyFree,
    /// Contains alcohol (brown background).
    Alcohol,
    /// Seasonal special (orange background).
    Special,
    /// No category marker.
    Unmarked,
}

impl Category {
    /// Classifies a background color. Absent and unrecognized colors are
    /// unmarked; this never fails.
    pub fn from_color(color: Option<BlockColor>) -> Self {
        match color {
            Some(BlockColor::BlueBackground) => Category::Milk,
            Some(BlockColor::RedBackground) => Category::DairyFree,
            Some(BlockColor::BrownBackground) => Category::Alcohol,
            Some(BlockColor::OrangeBackground) => Category::Special,
            Some(BlockColor::YellowBackground)
            | Some(BlockColor::GrayBackground)
            | Some(BlockColor::Other)
            | None => Category::Unmarked,
        }
    }

    /// The glyph prefixed to this category's menu lines.
    ///
    /// The exact strings, trailing spaces included, match what the menu's
    /// readers have always seen.
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Milk => "🟦 ",
            Category::DairyFree => "🟥 ",
            Category::Alcohol => "🟫",
            Category::Special => "🟧",
            Category::Unmarked => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_colors_map_to_glyphs() {
        assert_eq!(
            Category::from_color(Some(BlockColor::BlueBackground)).glyph(),
            "🟦 "
        );
        assert_eq!(
            Category::from_color(Some(BlockColor::RedBackground)).glyph(),
            "🟥 "
        );
        assert_eq!(
            Category::from_color(Some(BlockColor::BrownBackground)).glyph(),
            "🟫"
        );
        assert_eq!(
            Category::from_color(Some(BlockColor::OrangeBackground)).glyph(),
            "🟧"
        );
    }

    #[test]
    fn layout_colors_and_absence_are_unmarked() {
        assert_eq!(
            Category::from_color(Some(BlockColor::YellowBackground)),
            Category::Unmarked
        );
        assert_eq!(
            Category::from_color(Some(BlockColor::GrayBackground)),
            Category::Unmarked
        );
        assert_eq!(Category::from_color(Some(BlockColor::Other)), Category::Unmarked);
        assert_eq!(Category::from_color(None), Category::Unmarked);
        assert_eq!(Category::Unmarked.glyph(), "");
    }
}
