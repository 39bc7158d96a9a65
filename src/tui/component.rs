use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// The game only ever needs two drawing primitives from the terminal: a
/// filled rectangle and a line of centered text. Components are built from
/// those and nothing else.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so a component may cache layout between frames.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
