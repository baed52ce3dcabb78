//! In-memory capture of the visible screen.

use crate::backend::CellPos;
use ratatui::buffer::{Buffer, Cell};

/// Immutable copy of a [`Surface`](crate::backend::Surface): cell grid, cursor and
/// background fill. Snapshots of identical screens compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    buffer: Buffer,
    cursor: CellPos,
    background: Cell,
}

impl ScreenSnapshot {
    pub(crate) fn new(buffer: Buffer, cursor: CellPos, background: Cell) -> Self {
        Self {
            buffer,
            cursor,
            background,
        }
    }

    /// The captured cell grid
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Cursor position at capture time
    pub fn cursor(&self) -> CellPos {
        self.cursor
    }

    /// Fill cell used for blank areas at capture time
    pub fn background(&self) -> &Cell {
        &self.background
    }

    /// Screen extent of the capture as `(rows, cols)`
    pub fn size(&self) -> (u16, u16) {
        (self.buffer.area.height, self.buffer.area.width)
    }

    /// Text of one captured row, trailing blanks included
    pub fn row_text(&self, row: u16) -> String {
        if row >= self.buffer.area.height {
            return String::new();
        }
        (0..self.buffer.area.width)
            .map(|col| self.buffer.get(col, row).symbol())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn test_row_text() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 6, 2));
        buffer.set_string(1, 1, "menu", Style::default());
        let snapshot = ScreenSnapshot::new(buffer, CellPos::new(1, 5), Cell::default());

        assert_eq!(snapshot.size(), (2, 6));
        assert_eq!(snapshot.row_text(0), "      ");
        assert_eq!(snapshot.row_text(1), " menu ");
        assert_eq!(snapshot.row_text(9), "");
        assert_eq!(snapshot.cursor(), CellPos::new(1, 5));
    }

    #[test]
    fn test_equality_tracks_content() {
        let area = Rect::new(0, 0, 4, 1);
        let blank = ScreenSnapshot::new(Buffer::empty(area), CellPos::default(), Cell::default());
        let mut written = Buffer::empty(area);
        written.set_string(0, 0, "x", Style::default());
        let dirty = ScreenSnapshot::new(written, CellPos::default(), Cell::default());

        assert_eq!(blank, blank.clone());
        assert_ne!(blank, dirty);
    }
}
