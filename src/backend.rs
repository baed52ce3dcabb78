//! Terminal backend capability.
//!
//! Everything that touches the terminal goes through [`TerminalBackend`]. Components
//! receive the backend by reference; there is no global terminal handle.

pub mod snapshot;
pub mod surface;
pub mod tui;

use crate::error::Result;
use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Color;

pub use snapshot::ScreenSnapshot;
pub use surface::Surface;
pub use tui::{CrosstermTerminal, HeadlessTerminal, TuiBackend};

/// Zero-based cell position, row first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: u16,
    pub col: u16,
}

impl CellPos {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl From<(u16, u16)> for CellPos {
    fn from((row, col): (u16, u16)) -> Self {
        Self { row, col }
    }
}

/// Identifier of a registered color pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(pub u8);

impl PairId {
    /// Terminal default colors; always registered
    pub const DEFAULT: PairId = PairId(0);
}

/// Text attributes handed to [`TerminalBackend::write`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attr {
    pub pair: PairId,
    pub bold: bool,
}

impl Attr {
    pub const fn plain() -> Self {
        Self {
            pair: PairId::DEFAULT,
            bold: false,
        }
    }

    pub const fn bold() -> Self {
        Self {
            pair: PairId::DEFAULT,
            bold: true,
        }
    }

    pub const fn pair(pair: PairId) -> Self {
        Self { pair, bold: false }
    }

    pub const fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }
}

/// Operations the screen layer needs from a terminal.
///
/// Implementations own a current buffer that writes mutate; [`refresh`](Self::refresh)
/// makes it visible. Faults are returned as errors and never retried here.
pub trait TerminalBackend {
    /// Prepare the terminal and hide the cursor
    fn init(&mut self) -> Result<()>;

    /// Associate `id` with a foreground/background combination
    fn register_color_pair(&mut self, id: PairId, fg: Color, bg: Color) -> Result<()>;

    /// Set the fill used for blank cells
    fn set_background(&mut self, fill: char, attr: Attr) -> Result<()>;

    /// Screen extent as `(rows, cols)`
    fn size(&self) -> Result<(u16, u16)>;

    /// Write styled text starting at `pos`; a start cell outside the screen is an error
    fn write(&mut self, text: &str, pos: CellPos, attr: Attr) -> Result<()>;

    /// Blank the buffer without forcing a repaint
    fn erase(&mut self) -> Result<()>;

    /// Blank the buffer and repaint the whole terminal on the next refresh
    fn clear(&mut self) -> Result<()>;

    /// Flush pending buffer changes to the display
    fn refresh(&mut self) -> Result<()>;

    /// Block until the next key press
    fn read_key(&mut self) -> Result<KeyEvent>;

    /// Capture the current buffer
    fn snapshot(&self) -> ScreenSnapshot;

    /// Replace the current buffer with `snapshot` (not flushed)
    fn restore(&mut self, snapshot: &ScreenSnapshot) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_builders() {
        assert_eq!(Attr::plain(), Attr::default());
        assert!(Attr::bold().bold);
        let attr = Attr::pair(PairId(14)).with_bold(true);
        assert_eq!(attr.pair, PairId(14));
        assert!(attr.bold);
    }

    #[test]
    fn test_cell_pos_from_tuple() {
        assert_eq!(CellPos::from((3, 7)), CellPos::new(3, 7));
    }
}
