//! # Tile Component
//!
//! One grid cell: an inset colored rectangle, with the tile value centered on
//! it when the cell isn't empty.
//!
//! ```text
//! ┌──────────┐   area
//! │ ┌──────┐ │
//! │ │  16  │ │   inset by `margin` rows and `2 * margin` columns
//! │ └──────┘ │
//! └──────────┘
//! ```
//!
//! Columns get twice the margin because a terminal cell is about twice as
//! tall as it is wide.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::board::Tile;
use crate::tui::component::Component;
use crate::tui::components::palette::{TEXT_COLOR, tile_color};

pub struct TileView {
    pub value: Tile,
    pub margin: u16,
}

impl TileView {
    pub fn new(value: Tile, margin: u16) -> Self {
        Self { value, margin }
    }

    /// The colored part of the cell.
    pub fn inset(&self, area: Rect) -> Rect {
        area.inner(Margin::new(self.margin.saturating_mul(2), self.margin))
    }
}

impl Component for TileView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = tile_color(self.value);
        let inset = self.inset(area);
        frame.render_widget(Block::new().style(Style::new().bg(color)), inset);

        if self.value == 0 {
            return;
        }

        let [label_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inset);
        let label = Paragraph::new(self.value.to_string())
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(TEXT_COLOR)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(label, label_area);
    }
}
