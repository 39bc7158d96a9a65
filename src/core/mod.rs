//! # Core Game Logic
//!
//! This module contains the game itself: the board, the moves, and the
//! state machine that ties them together. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board (grid, moves)  │
//!                    │  • Game (state)         │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No I/O.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: The `Board` grid, `slide_and_merge_row`, spawning
//! - [`direction`]: The four moves and their rotation counts
//! - [`state`]: The `Game` struct — board, RNG and status in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings with defaults → file → env → CLI precedence

pub mod action;
pub mod board;
pub mod config;
pub mod direction;
pub mod state;

pub use board::{Board, GRID_SIZE, Tile, slide_and_merge_row};
pub use direction::Direction;
