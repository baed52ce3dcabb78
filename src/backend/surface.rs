//! In-memory cell grid backing a terminal backend.
//!
//! The surface is the source of truth for "the current screen": writes land here,
//! snapshots copy it and a refresh pushes it to the real terminal.

use crate::backend::{Attr, CellPos, PairId, ScreenSnapshot};
use crate::error::{Result, ScreenError};
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

/// Cell grid plus the curses-like state around it: registered color pairs,
/// background fill and cursor.
#[derive(Debug, Clone)]
pub struct Surface {
    buffer: Buffer,
    cursor: CellPos,
    background: Cell,
    pairs: HashMap<PairId, Style>,
}

impl Surface {
    /// Create a blank surface of `rows` x `cols`
    pub fn new(rows: u16, cols: u16) -> Self {
        let mut pairs = HashMap::new();
        pairs.insert(PairId::DEFAULT, Style::default());
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, cols, rows)),
            cursor: CellPos::default(),
            background: Cell::default(),
            pairs,
        }
    }

    pub fn rows(&self) -> u16 {
        self.buffer.area.height
    }

    pub fn cols(&self) -> u16 {
        self.buffer.area.width
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> CellPos {
        self.cursor
    }

    /// Adopt a new extent. Cells inside both extents keep their content; new cells
    /// take the background fill.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        let mut resized = Buffer::filled(Rect::new(0, 0, cols, rows), self.background.clone());
        let kept = resized.area.intersection(self.buffer.area);
        for y in kept.top()..kept.bottom() {
            for x in kept.left()..kept.right() {
                *resized.get_mut(x, y) = self.buffer.get(x, y).clone();
            }
        }
        self.buffer = resized;
        self.cursor = CellPos::new(
            self.cursor.row.min(rows.saturating_sub(1)),
            self.cursor.col.min(cols.saturating_sub(1)),
        );
    }

    pub fn register_pair(&mut self, id: PairId, fg: Color, bg: Color) {
        self.pairs.insert(id, Style::default().fg(fg).bg(bg));
    }

    pub fn is_registered(&self, id: PairId) -> bool {
        self.pairs.contains_key(&id)
    }

    /// Final style for text written with `attr`: the background style patched with
    /// the pair colors, plus bold.
    pub fn resolve(&self, attr: Attr) -> Result<Style> {
        let pair = self
            .pairs
            .get(&attr.pair)
            .ok_or(ScreenError::UnknownColorPair { id: attr.pair.0 })?;
        let mut style = self.background.style().patch(*pair);
        if attr.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        Ok(style)
    }

    /// Change the blank fill. Cells that are currently blank take the new fill.
    pub fn set_background(&mut self, fill: char, attr: Attr) -> Result<()> {
        let style = self.resolve(Attr { bold: false, ..attr })?;
        let previous = std::mem::replace(&mut self.background, Self::fill_cell(fill, style));
        for cell in self.buffer.content.iter_mut() {
            if *cell == previous || *cell == Cell::default() {
                *cell = self.background.clone();
            }
        }
        Ok(())
    }

    /// Write `text` at `pos`, clipped at the right edge. The cursor ends after the text.
    pub fn write(&mut self, text: &str, pos: CellPos, attr: Attr) -> Result<()> {
        if pos.row >= self.rows() || pos.col >= self.cols() {
            return Err(ScreenError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let style = self.resolve(attr)?;
        log::trace!("write {:?} at {:?} with {:?}", text, pos, attr);
        let (end_col, _) = self
            .buffer
            .set_stringn(pos.col, pos.row, text, usize::MAX, style);
        self.cursor = CellPos::new(pos.row, end_col.min(self.cols().saturating_sub(1)));
        Ok(())
    }

    /// Blank every cell with the background fill and home the cursor
    pub fn erase(&mut self) {
        let fill = self.background.clone();
        for cell in self.buffer.content.iter_mut() {
            *cell = fill.clone();
        }
        self.cursor = CellPos::default();
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot::new(self.buffer.clone(), self.cursor, self.background.clone())
    }

    /// Replace grid, cursor and background with the snapshot's. Registered pairs stay.
    pub fn restore(&mut self, snapshot: &ScreenSnapshot) {
        self.buffer = snapshot.buffer().clone();
        self.cursor = snapshot.cursor();
        self.background = snapshot.background().clone();
    }

    fn fill_cell(fill: char, style: Style) -> Cell {
        let mut cell = Cell::default();
        cell.set_char(fill);
        cell.set_style(style);
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(surface: &Surface, row: u16) -> String {
        (0..surface.cols())
            .map(|col| surface.buffer().get(col, row).symbol())
            .collect()
    }

    #[test]
    fn test_write_and_cursor() {
        let mut surface = Surface::new(3, 10);
        surface.write("hello", CellPos::new(1, 2), Attr::plain()).unwrap();

        assert_eq!(row_text(&surface, 1), "  hello   ");
        assert_eq!(surface.cursor(), CellPos::new(1, 7));
    }

    #[test]
    fn test_write_clips_at_right_edge() {
        let mut surface = Surface::new(1, 4);
        surface.write("overflow", CellPos::new(0, 1), Attr::plain()).unwrap();
        assert_eq!(row_text(&surface, 0), " ove");
        assert_eq!(surface.cursor(), CellPos::new(0, 3));
    }

    #[test]
    fn test_write_out_of_bounds() {
        let mut surface = Surface::new(3, 10);
        let err = surface
            .write("x", CellPos::new(3, 0), Attr::plain())
            .unwrap_err();
        assert!(err.is_out_of_bounds());
        assert!(surface
            .write("x", CellPos::new(0, 10), Attr::plain())
            .is_err());
    }

    #[test]
    fn test_write_returns_cursor_after_text_on_last_row() {
        let mut surface = Surface::new(2, 6);
        surface.write("ab", CellPos::new(1, 3), Attr::plain()).unwrap();
        assert_eq!(row_text(&surface, 1), "   ab ");
        assert_eq!(surface.cursor(), CellPos::new(1, 5));
    }

    #[test]
    fn test_resize_keeps_rows_aligned() {
        let mut surface = Surface::new(2, 4);
        surface.write("ab", CellPos::new(1, 0), Attr::plain()).unwrap();
        surface.resize(2, 3);

        assert_eq!(row_text(&surface, 0), "   ");
        assert_eq!(row_text(&surface, 1), "ab ");
        assert_eq!(surface.cursor(), CellPos::new(1, 2));
    }

    #[test]
    fn test_resize_fills_new_cells_with_background() {
        let mut surface = Surface::new(1, 2);
        surface.set_background('.', Attr::plain()).unwrap();
        surface.write("xy", CellPos::new(0, 0), Attr::plain()).unwrap();
        surface.resize(2, 4);

        assert_eq!(row_text(&surface, 0), "xy..");
        assert_eq!(row_text(&surface, 1), "....");
    }

    #[test]
    fn test_unknown_pair_rejected() {
        let mut surface = Surface::new(2, 2);
        let err = surface
            .write("x", CellPos::new(0, 0), Attr::pair(PairId(9)))
            .unwrap_err();
        assert!(matches!(err, ScreenError::UnknownColorPair { id: 9 }));
    }

    #[test]
    fn test_resolve_patches_background_and_bold() {
        let mut surface = Surface::new(2, 2);
        surface.register_pair(PairId(7), Color::White, Color::Reset);
        surface.register_pair(PairId(1), Color::Red, Color::Reset);
        surface.set_background(' ', Attr::pair(PairId(7))).unwrap();

        let plain = surface.resolve(Attr::plain()).unwrap();
        assert_eq!(plain.fg, Some(Color::White));

        let red_bold = surface.resolve(Attr::pair(PairId(1)).with_bold(true)).unwrap();
        assert_eq!(red_bold.fg, Some(Color::Red));
        assert!(red_bold.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_set_background_fills_blank_cells_only() {
        let mut surface = Surface::new(1, 3);
        surface.register_pair(PairId(14), Color::White, Color::Indexed(234));
        surface.write("a", CellPos::new(0, 0), Attr::plain()).unwrap();
        surface.set_background('.', Attr::pair(PairId(14))).unwrap();

        assert_eq!(row_text(&surface, 0), "a..");
        assert_eq!(surface.buffer().get(1, 0).bg, Color::Indexed(234));
    }

    #[test]
    fn test_erase_uses_background() {
        let mut surface = Surface::new(1, 3);
        surface.set_background('~', Attr::plain()).unwrap();
        surface.write("abc", CellPos::new(0, 0), Attr::plain()).unwrap();
        surface.erase();
        assert_eq!(row_text(&surface, 0), "~~~");
        assert_eq!(surface.cursor(), CellPos::default());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut surface = Surface::new(2, 5);
        surface.write("one", CellPos::new(0, 0), Attr::plain()).unwrap();
        let saved = surface.snapshot();

        surface.write("two", CellPos::new(1, 1), Attr::bold()).unwrap();
        assert_ne!(surface.snapshot(), saved);

        surface.restore(&saved);
        assert_eq!(surface.snapshot(), saved);
        assert_eq!(surface.cursor(), CellPos::new(0, 3));
    }
}
