//! # Game State
//!
//! Everything the game loop owns, in one place. No TUI types live here.
//!
//! ```text
//! Game
//! ├── board: Board      // the 4×4 grid
//! ├── rng: StdRng       // injected random source for spawns
//! └── status: Status    // Running or Terminated
//! ```
//!
//! State changes only happen through `update(game, action)` in action.rs.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::board::Board;

/// Number of tiles placed on the board before the first move.
pub const INITIAL_TILES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated,
}

pub struct Game {
    pub board: Board,
    pub rng: StdRng,
    pub status: Status,
}

impl Game {
    /// Start a game with the given random source: empty board plus two tiles.
    pub fn new(mut rng: StdRng) -> Self {
        let mut board = Board::new();
        for _ in 0..INITIAL_TILES {
            board.spawn_tile(&mut rng);
        }
        debug!("New board:\n{}", board);
        Self {
            board,
            rng,
            status: Status::Running,
        }
    }

    /// Reproducible game when `seed` is set, OS-seeded otherwise.
    pub fn with_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }
}
