//! Status signalling.
//!
//! Maps coordinator events onto indicator effects. The signaler never sees the
//! transfer state; it only reacts to what it is told.

use crate::config::CoordinatorConfig;

/// The three status indicators the coordinator drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    /// Lit while a transfer is in flight.
    Activity,
    /// Acknowledges finished transfers.
    Done,
    /// Reports failures.
    Fault,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    On,
    Off,
}

/// Length of a pulse train.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pulses {
    Count(u8),
    Forever,
}

/// Why a transmission failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The engine refused or faulted. A later trigger may retry.
    Hardware,
    /// The message buffer is unusable. Nothing will be retried.
    Invalid,
}

/// Coordinator transitions worth showing to the outside world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    Started,
    Finished,
    Failed(Failure),
}

/// Output primitives provided by the board.
///
/// Implementations must not block: `pulse` only schedules the pattern.
pub trait Indicators {
    fn set(&mut self, indicator: Indicator, level: Level);
    fn pulse(&mut self, indicator: Indicator, pulses: Pulses, interval_ms: u32);
}

/// Turns [`StatusEvent`]s into indicator effects.
pub struct StatusSignaler<I> {
    indicators: I,
    config: CoordinatorConfig,
}

impl<I: Indicators> StatusSignaler<I> {
    pub fn new(indicators: I, config: CoordinatorConfig) -> Self {
        Self { indicators, config }
    }

    pub fn signal(&mut self, event: StatusEvent) {
        match event {
            StatusEvent::Started => self.indicators.set(Indicator::Activity, Level::On),
            StatusEvent::Finished => {
                self.indicators.set(Indicator::Activity, Level::Off);
                self.indicators.pulse(
                    Indicator::Done,
                    self.config.finished_pulses,
                    self.config.finished_interval_ms,
                );
            }
            StatusEvent::Failed(failure) => {
                let pulses = match failure {
                    Failure::Hardware => self.config.hardware_failure_pulses,
                    Failure::Invalid => self.config.invalid_failure_pulses,
                };
                self.indicators.set(Indicator::Activity, Level::Off);
                self.indicators
                    .pulse(Indicator::Fault, pulses, self.config.failure_interval_ms);
            }
        }
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut I {
        &mut self.indicators
    }
}
