//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless and props-based: it receives the data
//! it draws as struct fields and renders into the `Rect` it is handed.
//!
//! - `BoardView`: background fill plus the grid of tiles
//! - `TileView`: one inset, colored cell with its value centered on it
//!
//! ### Composition Over Inheritance
//!
//! `BoardView` renders sixteen `TileView`s. Neither knows about the terminal
//! size; centering the board is the job of `ui.rs`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── board_view.rs  (the grid)
//! ├── tile.rs        (a single cell)
//! └── palette.rs     (tile colors)
//! ```

pub mod board_view;
pub mod palette;
pub mod tile;

pub use board_view::BoardView;
pub use tile::TileView;
