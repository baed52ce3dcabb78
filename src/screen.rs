//! The screen object handed to menu code.
//!
//! [`Screen`] owns the terminal backend and bundles the renderer, the context
//! registers and the context stack behind one surface. It can only be built through
//! [`Screen::initialize`], so theme setup happens exactly once per backend.

use crate::backend::{CellPos, TerminalBackend};
use crate::config::ScreenConfig;
use crate::context::{ContextOutcome, ContextStack, RegisterStore};
use crate::error::Result;
use crate::render::{Renderer, ScrollbarStyle};
use crate::scrollbar::ScrollbarGeometry;
use crate::theme::{ColorName, Palette, ScreenLayout, Theme};
use ratatui::crossterm::event::KeyEvent;
use std::ops::Range;

pub struct Screen<B: TerminalBackend> {
    backend: B,
    renderer: Renderer,
    layout: ScreenLayout,
    registers: RegisterStore,
    stack: ContextStack,
}

impl<B: TerminalBackend> Screen<B> {
    /// Run theme initialization on `backend` and take ownership of it
    pub fn initialize(mut backend: B, config: &ScreenConfig) -> Result<Self> {
        let Theme { palette, layout } = Theme::initialize(&mut backend, config)?;
        let scrollbar = ScrollbarStyle {
            up_symbol: config.scroll_up_symbol.clone(),
            down_symbol: config.scroll_down_symbol.clone(),
            ..ScrollbarStyle::default()
        };
        Ok(Self {
            backend,
            renderer: Renderer::with_scrollbar_style(palette, scrollbar),
            layout,
            registers: RegisterStore::new(config.context_registers),
            stack: ContextStack::new(),
        })
    }

    pub fn rows(&self) -> u16 {
        self.layout.rows
    }

    pub fn cols(&self) -> u16 {
        self.layout.cols
    }

    pub fn menu_item_width(&self) -> u16 {
        self.layout.menu_item_width
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        self.renderer.palette()
    }

    pub fn registers(&self) -> &RegisterStore {
        &self.registers
    }

    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn display(&mut self, text: &str, pos: CellPos) -> Result<()> {
        self.renderer.display(&mut self.backend, text, pos)
    }

    pub fn display_bold(&mut self, text: &str, pos: CellPos) -> Result<()> {
        self.renderer.display_bold(&mut self.backend, text, pos)
    }

    pub fn highlight(&mut self, text: &str, pos: CellPos) -> Result<()> {
        self.renderer.highlight(&mut self.backend, text, pos)
    }

    pub fn display_custom_color(&mut self, text: &str, color: ColorName, pos: CellPos) -> Result<()> {
        self.renderer
            .display_custom_color(&mut self.backend, text, color, pos)
    }

    pub fn display_custom_color_bold(
        &mut self,
        text: &str,
        color: ColorName,
        pos: CellPos,
    ) -> Result<()> {
        self.renderer
            .display_custom_color_bold(&mut self.backend, text, color, pos)
    }

    pub fn erase(&mut self) -> Result<()> {
        self.renderer.erase(&mut self.backend)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.renderer.clear(&mut self.backend)
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.renderer.refresh(&mut self.backend)
    }

    /// Block until a key is pressed
    pub fn get_character(&mut self) -> Result<KeyEvent> {
        self.renderer.get_character(&mut self.backend)
    }

    pub fn save_in_register(&mut self, index: isize) -> ContextOutcome {
        self.registers.save_in_register(&self.backend, index)
    }

    pub fn restore_register(&mut self, index: isize) -> Result<ContextOutcome> {
        self.registers.restore_register(&mut self.backend, index)
    }

    pub fn save(&mut self) {
        self.stack.save(&self.backend);
    }

    pub fn restore(&mut self) -> Result<ContextOutcome> {
        self.stack.restore(&mut self.backend)
    }

    /// Draw a scrollbar; `rows` defaults to the configured maximum menu rows
    pub fn scroll_bar(
        &mut self,
        anchor: CellPos,
        window: Range<usize>,
        length: usize,
        rows: Option<u16>,
    ) -> Result<ScrollbarGeometry> {
        let rows = rows.unwrap_or(self.layout.max_menu_rows);
        self.renderer
            .scroll_bar(&mut self.backend, anchor, window, length, rows)
    }
}
