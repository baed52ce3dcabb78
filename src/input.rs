//! Key input sources.
//!
//! [`CrosstermInput`] blocks on the real terminal and owns its raw-mode session;
//! [`ScriptedInput`] replays a queue of key events for headless runs and tests.

use crate::error::{Result, ScreenError};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::collections::VecDeque;
use std::io;

/// Source of key presses for a terminal backend.
pub trait InputSource {
    /// Put the terminal in the mode this source needs (raw input, alternate screen)
    fn attach(&mut self) -> Result<()> {
        Ok(())
    }

    /// Undo [`attach`](Self::attach)
    fn detach(&mut self) -> Result<()> {
        Ok(())
    }

    /// Block until the next key press
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Reads keys from the process terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    attached: bool,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self { attached: false }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl InputSource for CrosstermInput {
    fn attach(&mut self) -> Result<()> {
        if self.attached {
            return Ok(());
        }
        enable_raw_mode().map_err(|err| ScreenError::terminal("enable raw mode", err))?;
        execute!(io::stdout(), EnterAlternateScreen)
            .map_err(|err| ScreenError::terminal("enter alternate screen", err))?;
        self.attached = true;
        log::debug!("terminal attached (raw mode, alternate screen)");
        Ok(())
    }

    fn detach(&mut self) -> Result<()> {
        if self.attached {
            disable_raw_mode().map_err(|err| ScreenError::terminal("disable raw mode", err))?;
            execute!(io::stdout(), LeaveAlternateScreen)
                .map_err(|err| ScreenError::terminal("leave alternate screen", err))?;
            self.attached = false;
            log::debug!("terminal detached");
        }
        Ok(())
    }

    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            // Resize, mouse and focus events are not key presses; keep waiting.
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(key_event);
                }
            }
        }
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        let _ = self.detach();
    }
}

/// Replays queued key events; reports [`ScreenError::InputClosed`] once drained.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<KeyEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Queue a plain key press
    pub fn push_key(&mut self, code: KeyCode) {
        self.queue.push_back(KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// Queue a full key event
    pub fn push_event(&mut self, event: KeyEvent) {
        self.queue.push_back(event);
    }

    /// Queue one press per character of `text`
    pub fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_key(KeyCode::Char(ch));
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl FromIterator<KeyCode> for ScriptedInput {
    fn from_iter<T: IntoIterator<Item = KeyCode>>(iter: T) -> Self {
        let mut input = Self::new();
        for code in iter {
            input.push_key(code);
        }
        input
    }
}

impl InputSource for ScriptedInput {
    fn next_key(&mut self) -> Result<KeyEvent> {
        self.queue.pop_front().ok_or(ScreenError::InputClosed)
    }
}
