//! Drawing primitives.
//!
//! Every drawing call writes and then refreshes, so each call is one visible update.
//! Positions are passed straight to the backend; a start cell outside the screen
//! comes back as [`ScreenError::OutOfBounds`](crate::error::ScreenError::OutOfBounds).

use crate::backend::{Attr, CellPos, TerminalBackend};
use crate::error::{Result, ScreenError};
use crate::scrollbar::{ScrollbarGeometry, TrackCell};
use crate::theme::{ColorName, Palette};
use ratatui::crossterm::event::KeyEvent;

/// Styling for a scrollbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbarStyle {
    pub up_symbol: String,
    pub down_symbol: String,
    pub marker: ColorName,
    pub blank: ColorName,
    pub thumb: ColorName,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            up_symbol: crate::config::SYMBOL_UP_TRIANGLE.to_string(),
            down_symbol: crate::config::SYMBOL_DOWN_TRIANGLE.to_string(),
            marker: ColorName::DarkGray,
            blank: ColorName::WhiteOnGray,
            thumb: ColorName::GrayOnWhite,
        }
    }
}

/// Styled text output over a [`TerminalBackend`], using one fixed palette.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    scrollbar: ScrollbarStyle,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            scrollbar: ScrollbarStyle::default(),
        }
    }

    pub fn with_scrollbar_style(palette: Palette, scrollbar: ScrollbarStyle) -> Self {
        Self { palette, scrollbar }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Plain text
    pub fn display<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        pos: CellPos,
    ) -> Result<()> {
        self.put(backend, text, pos, Attr::plain())
    }

    pub fn display_bold<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        pos: CellPos,
    ) -> Result<()> {
        self.put(backend, text, pos, Attr::bold())
    }

    /// Bold white-on-gray, used for the selected element
    pub fn highlight<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        pos: CellPos,
    ) -> Result<()> {
        self.display_custom_color_bold(backend, text, ColorName::WhiteOnGray, pos)
    }

    pub fn display_custom_color<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        color: ColorName,
        pos: CellPos,
    ) -> Result<()> {
        self.put(backend, text, pos, self.attr(color, false))
    }

    pub fn display_custom_color_bold<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        color: ColorName,
        pos: CellPos,
    ) -> Result<()> {
        self.put(backend, text, pos, self.attr(color, true))
    }

    pub fn erase<B: TerminalBackend + ?Sized>(&self, backend: &mut B) -> Result<()> {
        backend.erase()
    }

    pub fn clear<B: TerminalBackend + ?Sized>(&self, backend: &mut B) -> Result<()> {
        backend.clear()
    }

    pub fn refresh<B: TerminalBackend + ?Sized>(&self, backend: &mut B) -> Result<()> {
        backend.refresh()
    }

    /// Block until a key is pressed
    pub fn get_character<B: TerminalBackend + ?Sized>(&self, backend: &mut B) -> Result<KeyEvent> {
        backend.read_key()
    }

    /// Draw a scrollbar in column `anchor.col` whose track starts at `anchor.row`.
    ///
    /// The up marker sits on `anchor.row - 1`, so an anchor on row 0 fails with
    /// `OutOfBounds` before anything is drawn.
    pub fn scroll_bar<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        anchor: CellPos,
        window: std::ops::Range<usize>,
        length: usize,
        rows: u16,
    ) -> Result<ScrollbarGeometry> {
        let geometry = ScrollbarGeometry::compute(anchor, window, length, rows);
        let column = geometry.column;
        let (screen_rows, screen_cols) = backend.size()?;
        let out_of_bounds = |row: u16| ScreenError::OutOfBounds {
            row,
            col: column,
            rows: screen_rows,
            cols: screen_cols,
        };

        // No row above 0 exists for the up marker; report the anchor row instead.
        let up_row = geometry
            .up_marker_row()
            .ok_or_else(|| out_of_bounds(geometry.track_top))?;
        let down_row = u16::try_from(geometry.down_marker_row())
            .map_err(|_| out_of_bounds(u16::MAX))?;

        let marker = self.scrollbar.marker;
        self.display_custom_color(
            backend,
            &self.scrollbar.up_symbol,
            marker,
            CellPos::new(up_row, column),
        )?;
        self.display_custom_color_bold(
            backend,
            &self.scrollbar.down_symbol,
            marker,
            CellPos::new(down_row, column),
        )?;

        for (row, cell) in geometry.cells() {
            let color = match cell {
                TrackCell::Blank => self.scrollbar.blank,
                TrackCell::Thumb => self.scrollbar.thumb,
            };
            self.display_custom_color_bold(backend, " ", color, CellPos::new(row, column))?;
        }

        Ok(geometry)
    }

    fn attr(&self, color: ColorName, bold: bool) -> Attr {
        Attr::pair(self.palette.get(color).id).with_bold(bold)
    }

    fn put<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &str,
        pos: CellPos,
        attr: Attr,
    ) -> Result<()> {
        backend.write(text, pos, attr)?;
        backend.refresh()
    }
}
