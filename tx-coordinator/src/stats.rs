//! Transfer counters for diagnostics.

/// Counters since boot. Never reset; wrap on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// Transfers the engine accepted.
    pub submitted: u32,
    /// Owned completion notifications that returned the state to idle.
    pub completed: u32,
    /// Owned transfer-error notifications that returned the state to idle.
    pub faulted: u32,
    /// Triggers dropped by the debounce window.
    pub debounced: u32,
    /// Submissions refused because a transfer was in flight.
    pub busy: u32,
    /// Submissions refused as invalid or by the engine.
    pub rejected: u32,
    /// Completion notifications that did not match an in-flight transfer.
    pub spurious: u32,
}

impl TransferStats {
    pub const fn new() -> Self {
        Self {
            submitted: 0,
            completed: 0,
            faulted: 0,
            debounced: 0,
            busy: 0,
            rejected: 0,
            spurious: 0,
        }
    }

    /// Transfers started but not yet returned.
    pub fn outstanding(&self) -> u32 {
        self.submitted
            .wrapping_sub(self.completed)
            .wrapping_sub(self.faulted)
    }
}
