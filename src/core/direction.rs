//! # Directions
//!
//! The four moves a player can make. Every move is executed as a leftward
//! slide on a rotated board, so a direction is really just "how many
//! counter-clockwise quarter turns bring this edge to the left".
//!
//! ```text
//!   Left  → 0 turns   (already leftward)
//!   Up    → 1 turn    (top edge rotates onto the left)
//!   Right → 2 turns   (board upside down)
//!   Down  → 3 turns   (bottom edge rotates onto the left)
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Counter-clockwise quarter turns that make this direction point left.
    pub fn rotations(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Quarter turns that undo [`Direction::rotations`].
    pub fn inverse_rotations(self) -> usize {
        (4 - self.rotations()) % 4
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(label)
    }
}
