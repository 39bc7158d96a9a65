//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and synchronous:
//!
//! 1. Draw, if anything changed since the last frame.
//! 2. Block until the next recognized event (bounded wait).
//! 3. Apply that event and every other pending event, in order.
//!
//! Nothing animates, so an idle board is never redrawn.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{DisplaySettings, ResolvedConfig};
use crate::core::state::Game;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Upper bound on a single blocking wait for input.
const IDLE_POLL: Duration = Duration::from_millis(500);

const WINDOW_TITLE: &str = "2048";

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut game = Game::with_seed(config.seed);
    info!(
        "Starting game (seed: {:?}, display: {:?})",
        config.seed, config.display
    );

    let mut terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), SetTitle(WINDOW_TITLE)) {
        warn!("Failed to set terminal title: {}", e);
    }

    let result = event_loop(&mut terminal, &mut game, &config.display);

    ratatui::restore();
    info!("Game over, terminal restored");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    game: &mut Game,
    display: &DisplaySettings,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, game, display))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = pending {
            match dispatch(game, event) {
                Effect::Quit => return Ok(()),
                Effect::Redraw => needs_redraw = true,
                Effect::None => {}
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Route one TUI event: game events go through the core reducer, terminal
/// events are handled here.
pub fn dispatch(game: &mut Game, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => Effect::Redraw,
        TuiEvent::Quit => update(game, Action::Quit),
        TuiEvent::Move(direction) => update(game, Action::Move(direction)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::direction::Direction;
    use crate::core::state::Status;
    use crate::test_support::test_game;

    #[test]
    fn test_resize_only_redraws() {
        let mut game = test_game();
        let board = game.board;
        assert_eq!(dispatch(&mut game, TuiEvent::Resize), Effect::Redraw);
        assert_eq!(game.board, board);
    }

    #[test]
    fn test_move_event_spawns_a_tile() {
        let mut game = test_game();
        let before = game.board.tile_count();
        assert_eq!(
            dispatch(&mut game, TuiEvent::Move(Direction::Left)),
            Effect::Redraw
        );
        // a fresh game can't merge more than one pair, and always spawns one
        let after = game.board.tile_count();
        assert!(after == before + 1 || after == before, "{before} -> {after}");
    }

    #[test]
    fn test_quit_event_terminates() {
        let mut game = test_game();
        assert_eq!(dispatch(&mut game, TuiEvent::Quit), Effect::Quit);
        assert_eq!(game.status, Status::Terminated);
    }
}
