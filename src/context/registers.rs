//! Fixed set of addressable snapshot slots.
//!
//! Menus use registers as named backtrack points (e.g. "main menu as last drawn").
//! A slot is empty until the first save; saving again overwrites it, restoring
//! leaves it occupied.

use crate::backend::{ScreenSnapshot, TerminalBackend};
use crate::context::ContextOutcome;
use crate::error::Result;

/// `capacity` snapshot slots addressed by index.
#[derive(Debug, Clone)]
pub struct RegisterStore {
    slots: Vec<Option<ScreenSnapshot>>,
}

impl RegisterStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether `index` holds a snapshot
    pub fn is_active(&self, index: isize) -> bool {
        self.slot(index).is_some()
    }

    /// Snapshot stored at `index`, if any
    pub fn slot(&self, index: isize) -> Option<&ScreenSnapshot> {
        self.position(index)
            .and_then(|idx| self.slots[idx].as_ref())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Capture the current screen into slot `index`, replacing what was there
    pub fn save_in_register<B: TerminalBackend + ?Sized>(
        &mut self,
        backend: &B,
        index: isize,
    ) -> ContextOutcome {
        let Some(idx) = self.position(index) else {
            log::debug!("save_in_register({index}) ignored: capacity {}", self.capacity());
            return ContextOutcome::InvalidIndex;
        };
        self.slots[idx] = Some(backend.snapshot());
        log::debug!("screen saved in register {idx}");
        ContextOutcome::Success
    }

    /// Put slot `index` back on screen and refresh. The replaced screen is not saved.
    pub fn restore_register<B: TerminalBackend + ?Sized>(
        &self,
        backend: &mut B,
        index: isize,
    ) -> Result<ContextOutcome> {
        let Some(idx) = self.position(index) else {
            log::debug!("restore_register({index}) ignored: capacity {}", self.capacity());
            return Ok(ContextOutcome::InvalidIndex);
        };
        let Some(snapshot) = &self.slots[idx] else {
            log::debug!("restore_register({idx}) ignored: register empty");
            return Ok(ContextOutcome::InactiveSlot);
        };
        backend.restore(snapshot)?;
        backend.refresh()?;
        log::debug!("screen restored from register {idx}");
        Ok(ContextOutcome::Success)
    }

    /// Return slot `index` to the empty state
    pub fn clear_register(&mut self, index: isize) -> ContextOutcome {
        match self.position(index) {
            None => ContextOutcome::InvalidIndex,
            Some(idx) => match self.slots[idx].take() {
                Some(_) => ContextOutcome::Success,
                None => ContextOutcome::InactiveSlot,
            },
        }
    }

    fn position(&self, index: isize) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&idx| idx < self.slots.len())
    }
}
