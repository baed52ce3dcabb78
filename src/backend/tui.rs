//! [`TerminalBackend`] over a ratatui terminal.
//!
//! The backend keeps a [`Surface`] as the current buffer and only talks to the
//! ratatui terminal on refresh and clear, so ratatui's diffing decides what is
//! actually emitted.

use crate::backend::{Attr, CellPos, PairId, ScreenSnapshot, Surface, TerminalBackend};
use crate::error::Result;
use crate::input::{CrosstermInput, InputSource, ScriptedInput};
use ratatui::backend::{Backend, CrosstermBackend, TestBackend};
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Color;
use ratatui::Terminal;
use std::io::{self, Stdout};

/// Backend for the process terminal.
pub type CrosstermTerminal = TuiBackend<CrosstermBackend<Stdout>, CrosstermInput>;

/// In-memory backend; the flushed frame is readable through [`HeadlessTerminal::flushed`].
pub type HeadlessTerminal = TuiBackend<TestBackend, ScriptedInput>;

/// A ratatui terminal, the surface written to it and a key source.
pub struct TuiBackend<B: Backend, I: InputSource> {
    terminal: Terminal<B>,
    surface: Surface,
    input: I,
    refreshes: u64,
    cursor_hidden: bool,
}

impl<B: Backend, I: InputSource> TuiBackend<B, I> {
    /// Wrap a ratatui backend; the surface starts at the backend's current size
    pub fn with_backend(backend: B, input: I) -> Result<Self> {
        let terminal = Terminal::new(backend)?;
        let area = terminal.size()?;
        Ok(Self {
            terminal,
            surface: Surface::new(area.height, area.width),
            input,
            refreshes: 0,
            cursor_hidden: false,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Number of refreshes performed so far
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    fn sync_size(&mut self) -> Result<()> {
        let area = self.terminal.size()?;
        if area.height != self.surface.rows() || area.width != self.surface.cols() {
            log::debug!(
                "surface resized from {}x{} to {}x{}",
                self.surface.rows(),
                self.surface.cols(),
                area.height,
                area.width
            );
            self.surface.resize(area.height, area.width);
        }
        Ok(())
    }
}

impl CrosstermTerminal {
    /// Backend drawing to stdout. Raw mode starts with [`TerminalBackend::init`].
    pub fn stdout() -> Result<Self> {
        Self::with_backend(CrosstermBackend::new(io::stdout()), CrosstermInput::new())
    }
}

impl HeadlessTerminal {
    /// Headless backend of `rows` x `cols` with no queued keys
    pub fn headless(rows: u16, cols: u16) -> Result<Self> {
        Self::with_keys(rows, cols, ScriptedInput::new())
    }

    /// Headless backend of `rows` x `cols` replaying `input`
    pub fn with_keys(rows: u16, cols: u16, input: ScriptedInput) -> Result<Self> {
        Self::with_backend(TestBackend::new(cols, rows), input)
    }

    /// What the last refresh put on the (virtual) display
    pub fn flushed(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }
}

impl<B: Backend, I: InputSource> TerminalBackend for TuiBackend<B, I> {
    fn init(&mut self) -> Result<()> {
        self.input.attach()?;
        self.terminal.hide_cursor()?;
        self.cursor_hidden = true;
        self.terminal.clear()?;
        self.sync_size()
    }

    fn register_color_pair(&mut self, id: PairId, fg: Color, bg: Color) -> Result<()> {
        self.surface.register_pair(id, fg, bg);
        Ok(())
    }

    fn set_background(&mut self, fill: char, attr: Attr) -> Result<()> {
        self.surface.set_background(fill, attr)
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.surface.rows(), self.surface.cols()))
    }

    fn write(&mut self, text: &str, pos: CellPos, attr: Attr) -> Result<()> {
        self.surface.write(text, pos, attr)
    }

    fn erase(&mut self) -> Result<()> {
        self.surface.erase();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.terminal.clear()?;
        self.surface.erase();
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        let source = self.surface.buffer();
        self.terminal.draw(|frame| {
            let target = frame.buffer_mut();
            let area = target.area.intersection(source.area);
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    *target.get_mut(x, y) = source.get(x, y).clone();
                }
            }
        })?;
        self.refreshes += 1;
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        self.input.next_key()
    }

    fn snapshot(&self) -> ScreenSnapshot {
        self.surface.snapshot()
    }

    fn restore(&mut self, snapshot: &ScreenSnapshot) -> Result<()> {
        self.surface.restore(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyCode;

    fn flushed_row(backend: &HeadlessTerminal, row: u16) -> String {
        let buffer = backend.flushed();
        (0..buffer.area.width)
            .map(|col| buffer.get(col, row).symbol())
            .collect()
    }

    #[test]
    fn test_headless_size() {
        let backend = HeadlessTerminal::headless(24, 80).unwrap();
        assert_eq!(backend.size().unwrap(), (24, 80));
    }

    #[test]
    fn test_init_hides_cursor() {
        let mut backend = HeadlessTerminal::headless(2, 2).unwrap();
        assert!(!backend.cursor_hidden());
        backend.init().unwrap();
        assert!(backend.cursor_hidden());
    }

    #[test]
    fn test_write_is_invisible_until_refresh() {
        let mut backend = HeadlessTerminal::headless(2, 8).unwrap();
        backend.init().unwrap();
        backend.write("status", CellPos::new(0, 1), Attr::plain()).unwrap();
        assert_eq!(flushed_row(&backend, 0), "        ");

        backend.refresh().unwrap();
        assert_eq!(flushed_row(&backend, 0), " status ");
        assert_eq!(backend.refresh_count(), 1);
    }

    #[test]
    fn test_clear_blanks_display_after_refresh() {
        let mut backend = HeadlessTerminal::headless(1, 4).unwrap();
        backend.write("abcd", CellPos::new(0, 0), Attr::plain()).unwrap();
        backend.refresh().unwrap();

        backend.clear().unwrap();
        backend.refresh().unwrap();
        assert_eq!(flushed_row(&backend, 0), "    ");
    }

    #[test]
    fn test_restore_replaces_surface() {
        let mut backend = HeadlessTerminal::headless(1, 4).unwrap();
        backend.write("ab", CellPos::new(0, 0), Attr::plain()).unwrap();
        let saved = backend.snapshot();
        backend.write("zz", CellPos::new(0, 0), Attr::plain()).unwrap();

        backend.restore(&saved).unwrap();
        backend.refresh().unwrap();
        assert_eq!(flushed_row(&backend, 0), "ab  ");
    }

    #[test]
    fn test_read_key_from_script() {
        let input: ScriptedInput = [KeyCode::Char('j')].into_iter().collect();
        let mut backend = HeadlessTerminal::with_keys(2, 2, input).unwrap();
        assert_eq!(backend.read_key().unwrap().code, KeyCode::Char('j'));
        assert!(backend.read_key().is_err());
    }
}
