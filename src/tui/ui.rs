use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::core::board::GRID_SIZE;
use crate::core::config::DisplaySettings;
use crate::core::state::Game;
use crate::tui::component::Component;
use crate::tui::components::BoardView;

/// Draw one frame: the board, centered in the terminal.
pub fn draw_ui(frame: &mut Frame, game: &Game, display: &DisplaySettings) {
    let area = board_area(frame.area(), display);
    BoardView::new(&game.board, display.margin).render(frame, area);
}

/// The fixed-size board rectangle, centered in `frame_area`.
///
/// A terminal smaller than the board squeezes it to fit.
pub fn board_area(frame_area: Rect, display: &DisplaySettings) -> Rect {
    let grid = GRID_SIZE as u16;
    let width = display.cell_width.saturating_mul(grid);
    let height = display.cell_height.saturating_mul(grid);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(frame_area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    area
}
