use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::direction::Direction;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Move(Direction),

    // TUI-local events (handled directly in TUI)
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Wait up to `timeout` for an event the game cares about.
///
/// Unrecognized events are consumed and skipped; only the first wait blocks,
/// so a burst of ignored keys can't stall the loop.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    let mut wait = timeout;
    while event::poll(wait)? {
        let raw = event::read()?;
        if let Some(tui_event) = translate(&raw) {
            return Ok(Some(tui_event));
        }
        wait = Duration::ZERO;
    }
    Ok(None)
}

/// Map a raw terminal event to a game event. `None` means "ignore".
pub fn translate(raw: &Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?} ({:?})",
                key_event.code,
                key_event.modifiers,
                key_event.kind
            );
            // Releases and auto-repeats don't count as fresh key presses
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            match (key_event.modifiers, key_event.code) {
                // Ctrl+C and Esc stand in for closing the window
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Up) => Some(TuiEvent::Move(Direction::Up)),
                (_, KeyCode::Down) => Some(TuiEvent::Move(Direction::Down)),
                (_, KeyCode::Left) => Some(TuiEvent::Move(Direction::Left)),
                (_, KeyCode::Right) => Some(TuiEvent::Move(Direction::Right)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
