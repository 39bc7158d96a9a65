//! Tile colors.
//!
//! Only the empty cell, 2 and 4 have their own colors; every other value
//! shares the fallback.

use ratatui::style::Color;

use crate::core::board::Tile;

pub const BACKGROUND_COLOR: Color = Color::Rgb(187, 173, 160);
pub const TEXT_COLOR: Color = Color::Rgb(119, 110, 101);
pub const FALLBACK_TILE_COLOR: Color = Color::Rgb(255, 255, 255);

pub fn tile_color(value: Tile) -> Color {
    match value {
        0 => Color::Rgb(205, 193, 180),
        2 => Color::Rgb(238, 228, 218),
        4 => Color::Rgb(237, 224, 200),
        _ => FALLBACK_TILE_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tiles_have_distinct_colors() {
        assert_ne!(tile_color(0), tile_color(2));
        assert_ne!(tile_color(2), tile_color(4));
        assert_ne!(tile_color(0), FALLBACK_TILE_COLOR);
    }

    #[test]
    fn test_larger_tiles_fall_back() {
        for value in [8, 16, 2048, 131072] {
            assert_eq!(tile_color(value), FALLBACK_TILE_COLOR);
        }
    }
}
