//! Coordinator tuning.

use crate::engine::LineId;
use crate::status::Pulses;

/// Minimum spacing between two accepted button presses, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u32 = 200;

/// Tunables of a [`Coordinator`](crate::Coordinator).
///
/// Everything here is fixed at build time in the firmware; tests construct
/// their own values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Line whose trigger notifications request a transmission.
    pub trigger_line: LineId,
    /// Debounce window in milliseconds.
    pub debounce_ms: u32,
    /// How the done indicator acknowledges a finished transfer.
    pub finished_pulses: Pulses,
    pub finished_interval_ms: u32,
    /// How the fault indicator reports a refused or faulted transfer.
    pub hardware_failure_pulses: Pulses,
    /// How the fault indicator reports an unusable message buffer.
    pub invalid_failure_pulses: Pulses,
    pub failure_interval_ms: u32,
}

impl CoordinatorConfig {
    pub const DEFAULT: Self = Self {
        trigger_line: LineId(0),
        debounce_ms: DEBOUNCE_WINDOW_MS,
        finished_pulses: Pulses::Count(2),
        finished_interval_ms: 100,
        hardware_failure_pulses: Pulses::Count(10),
        invalid_failure_pulses: Pulses::Forever,
        failure_interval_ms: 50,
    };
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
