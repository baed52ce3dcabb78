//! Screen-state capture: addressable registers and a nested save/restore stack.
//!
//! Neither structure treats misuse as an error. Every operation reports a
//! [`ContextOutcome`] that callers may inspect or ignore; only backend faults are
//! returned as `Err`.

pub mod registers;
pub mod stack;

pub use registers::RegisterStore;
pub use stack::ContextStack;

/// Result of a register or stack operation that did not fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextOutcome {
    /// The snapshot was stored or applied
    Success,
    /// Register index outside `[0, capacity)`; nothing happened
    InvalidIndex,
    /// Restore on an empty stack; nothing happened
    EmptyStack,
    /// Restore from a register that was never saved to; nothing happened
    InactiveSlot,
}

impl ContextOutcome {
    pub fn is_success(self) -> bool {
        self == ContextOutcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(ContextOutcome::Success.is_success());
        assert!(!ContextOutcome::InvalidIndex.is_success());
        assert!(!ContextOutcome::EmptyStack.is_success());
        assert!(!ContextOutcome::InactiveSlot.is_success());
    }
}
