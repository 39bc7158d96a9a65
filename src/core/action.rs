//! # Actions
//!
//! Everything that can happen to a game becomes an `Action`.
//! Player presses an arrow key? That's `Action::Move(direction)`.
//! Player closes the game? That's `Action::Quit`.
//!
//! `update()` applies an action to the game and returns an `Effect` telling
//! the adapter what to do next. No terminal I/O happens here.
//!
//! ```text
//! Game + Action  →  update()  →  Game' + Effect
//! ```
//!
//! State machine:
//!
//! ```text
//!             Move(dir): shift + spawn
//!              ┌──────┐
//!              ▼      │
//!          ┌─────────┐     Quit      ┌────────────┐
//!   ──────▶│ Running │──────────────▶│ Terminated │
//!          └─────────┘               └────────────┘
//! ```

use log::{debug, info};

use crate::core::direction::Direction;
use crate::core::state::{Game, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Quit,
}

/// What the adapter should do after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(game: &mut Game, action: Action) -> Effect {
    if !game.is_running() {
        debug!("Ignoring {:?}: game already terminated", action);
        return Effect::None;
    }

    match action {
        Action::Move(direction) => {
            game.board.shift(direction);
            // A tile spawns after every move, whether or not anything slid.
            let spawned = game.board.spawn_tile(&mut game.rng);
            debug!("Moved {}, spawned at {:?}:\n{}", direction, spawned, game.board);
            Effect::Redraw
        }
        Action::Quit => {
            info!("Quit requested");
            game.status = Status::Terminated;
            Effect::Quit
        }
    }
}
