//! # Board / Move Engine
//!
//! The grid and everything that changes it: sliding, merging and spawning.
//!
//! ```text
//! Board
//! └── cells: [[Tile; 4]; 4]   // 0 = empty, else 2, 4, 8, ...
//! ```
//!
//! There is exactly one movement algorithm, [`slide_and_merge_row`], which
//! compacts a row toward the left. The other three directions reuse it by
//! rotating the board first and rotating back afterwards:
//!
//! ```text
//! rotate(n)  →  slide every row left  →  rotate(4 - n)
//! ```

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::direction::Direction;

/// Side length of the (square) grid.
pub const GRID_SIZE: usize = 4;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// A single cell value. 0 is empty.
pub type Tile = u32;

pub type Row = [Tile; GRID_SIZE];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Row; GRID_SIZE],
}

/// Slide a row's tiles to the left, merging equal neighbours.
///
/// Zeros are dropped, then the row is scanned left to right: a tile equal to
/// its right neighbour absorbs it and doubles. A tile produced by a merge is
/// never merged again in the same pass, so `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]` and `[2, 2, 4, 0]` becomes `[4, 4, 0, 0]`.
pub fn slide_and_merge_row(row: Row) -> Row {
    let mut out = [0; GRID_SIZE];
    let mut len = 0;
    let mut pending: Option<Tile> = None;

    for value in row.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(prev) if prev == value => {
                out[len] = prev * 2;
                len += 1;
                pending = None;
            }
            Some(prev) => {
                out[len] = prev;
                len += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }
    if let Some(prev) = pending {
        out[len] = prev;
    }
    out
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [Row; GRID_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row][col]
    }

    /// Coordinates `(row, col)` of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    /// Number of nonzero cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Put a 2 (90%) or a 4 (10%) into a uniformly chosen empty cell.
    ///
    /// Returns the cell that was filled, or `None` if the board was full, in
    /// which case nothing changes.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        let empty = self.empty_cells();
        let &(row, col) = empty.choose(rng)?;
        self.cells[row][col] = if rng.random_bool(SPAWN_TWO_PROBABILITY) {
            2
        } else {
            4
        };
        Some((row, col))
    }

    /// One counter-clockwise quarter turn.
    ///
    /// The top row ends up as the left column (read bottom to top) and the
    /// right column ends up as the top row.
    pub fn rotate(&mut self) {
        let old = self.cells;
        for (i, row) in self.cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = old[j][GRID_SIZE - 1 - i];
            }
        }
    }

    fn rotate_times(&mut self, turns: usize) {
        for _ in 0..turns % 4 {
            self.rotate();
        }
    }

    /// Slide and merge every line toward `direction`.
    ///
    /// Does not spawn a tile and does not report whether anything moved;
    /// the caller decides what happens next.
    pub fn shift(&mut self, direction: Direction) {
        self.rotate_times(direction.rotations());
        for row in self.cells.iter_mut() {
            *row = slide_and_merge_row(*row);
        }
        self.rotate_times(direction.inverse_rotations());
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{value:>5}")?;
                }
            }
        }
        Ok(())
    }
}
