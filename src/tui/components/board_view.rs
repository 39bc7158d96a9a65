//! # BoardView Component
//!
//! Fills its area with the background color and splits it into an even
//! `GRID_SIZE × GRID_SIZE` grid of [`TileView`]s.
//!
//! Stateless: it borrows the board for one frame and renders what it's given.
//!
//! ```rust,ignore
//! BoardView::new(&game.board, display.margin).render(frame, board_area);
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::core::board::{Board, GRID_SIZE};
use crate::tui::component::Component;
use crate::tui::components::palette::BACKGROUND_COLOR;
use crate::tui::components::tile::TileView;

pub struct BoardView<'a> {
    pub board: &'a Board,
    pub margin: u16,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, margin: u16) -> Self {
        Self { board, margin }
    }

    /// Screen rectangle of every cell, indexed `[row][col]`.
    pub fn cell_areas(area: Rect) -> [[Rect; GRID_SIZE]; GRID_SIZE] {
        let rows: [Rect; GRID_SIZE] =
            Layout::vertical([Constraint::Fill(1); GRID_SIZE]).areas(area);
        rows.map(|row| Layout::horizontal([Constraint::Fill(1); GRID_SIZE]).areas(row))
    }
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::new().style(Style::new().bg(BACKGROUND_COLOR)), area);

        for (row, row_areas) in Self::cell_areas(area).iter().enumerate() {
            for (col, &cell_area) in row_areas.iter().enumerate() {
                TileView::new(self.board.get(row, col), self.margin).render(frame, cell_area);
            }
        }
    }
}
