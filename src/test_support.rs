//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::buffer::Buffer;

use crate::core::state::Game;

/// Creates a game with a fixed seed so spawns are reproducible.
pub fn test_game() -> Game {
    Game::new(StdRng::seed_from_u64(2048))
}

/// Flattens a rendered buffer into one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}
