//! LIFO stack of screen snapshots for nested save/restore.
//!
//! `restore` pops: each call unwinds one level, so `save, save, restore, restore`
//! brings back the first screen. Use [`ContextStack::peek`] to look at the top
//! without unwinding.

use crate::backend::{ScreenSnapshot, TerminalBackend};
use crate::context::ContextOutcome;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct ContextStack {
    entries: Vec<ScreenSnapshot>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently saved snapshot
    pub fn peek(&self) -> Option<&ScreenSnapshot> {
        self.entries.last()
    }

    /// Push a snapshot of the current screen
    pub fn save<B: TerminalBackend + ?Sized>(&mut self, backend: &B) {
        self.entries.push(backend.snapshot());
        log::debug!("screen pushed, stack depth {}", self.entries.len());
    }

    /// Pop the most recent snapshot, put it on screen and refresh
    pub fn restore<B: TerminalBackend + ?Sized>(&mut self, backend: &mut B) -> Result<ContextOutcome> {
        let Some(snapshot) = self.entries.pop() else {
            log::debug!("restore ignored: stack empty");
            return Ok(ContextOutcome::EmptyStack);
        };
        backend.restore(&snapshot)?;
        backend.refresh()?;
        log::debug!("screen popped, stack depth {}", self.entries.len());
        Ok(ContextOutcome::Success)
    }

    /// Drop the most recent snapshot without touching the screen
    pub fn discard(&mut self) -> ContextOutcome {
        match self.entries.pop() {
            Some(_) => ContextOutcome::Success,
            None => ContextOutcome::EmptyStack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Attr, CellPos, HeadlessTerminal};

    fn draw(backend: &mut HeadlessTerminal, text: &str) {
        backend.write(text, CellPos::new(0, 0), Attr::plain()).unwrap();
    }

    #[test]
    fn test_restore_unwinds_in_lifo_order() {
        let mut backend = HeadlessTerminal::headless(2, 10).unwrap();
        let mut stack = ContextStack::new();

        draw(&mut backend, "level one");
        let first = backend.snapshot();
        stack.save(&backend);

        draw(&mut backend, "level two");
        let second = backend.snapshot();
        stack.save(&backend);

        draw(&mut backend, "level 3  ");
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.restore(&mut backend).unwrap(), ContextOutcome::Success);
        assert_eq!(backend.snapshot(), second);
        assert_eq!(stack.len(), 1);

        assert_eq!(stack.restore(&mut backend).unwrap(), ContextOutcome::Success);
        assert_eq!(backend.snapshot(), first);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_restore_empty_is_noop() {
        let mut backend = HeadlessTerminal::headless(2, 10).unwrap();
        draw(&mut backend, "keep");
        let before = backend.snapshot();
        let mut stack = ContextStack::new();

        assert_eq!(stack.restore(&mut backend).unwrap(), ContextOutcome::EmptyStack);
        assert_eq!(backend.snapshot(), before);
        assert_eq!(backend.refresh_count(), 0);
    }

    #[test]
    fn test_peek_and_discard() {
        let backend = HeadlessTerminal::headless(2, 10).unwrap();
        let mut stack = ContextStack::new();
        assert!(stack.peek().is_none());

        stack.save(&backend);
        assert_eq!(stack.peek(), Some(&backend.snapshot()));
        assert_eq!(stack.len(), 1);

        assert_eq!(stack.discard(), ContextOutcome::Success);
        assert_eq!(stack.discard(), ContextOutcome::EmptyStack);
    }
}
