//! The single-flight transmit coordinator.

use crate::config::CoordinatorConfig;
use crate::debounce::Debouncer;
use crate::engine::{EngineResult, InstanceId, LineId, TransferEngine};
use crate::outcome::Outcome;
use crate::state::{Edge, TransferState};
use crate::stats::TransferStats;
use crate::status::{Failure, Indicators, StatusEvent, StatusSignaler};

/// Owns the message, the transfer state and the debounce timestamp, and
/// drives the engine and the indicators.
///
/// Every entry point takes `&mut self`: in the firmware the coordinator is a
/// shared resource and each interrupt handler reaches it through the resource
/// lock, so the check-and-set of the transfer state can never interleave with
/// the other handler.
pub struct Coordinator<E, I> {
    engine: E,
    status: StatusSignaler<I>,
    message: &'static [u8],
    state: TransferState,
    debouncer: Debouncer,
    config: CoordinatorConfig,
    stats: TransferStats,
    /// Set once the message has been found unusable; triggers are ignored from then on.
    config_fault: bool,
}

impl<E, I> Coordinator<E, I>
where
    E: TransferEngine,
    I: Indicators,
{
    pub fn new(engine: E, indicators: I, message: &'static [u8], config: CoordinatorConfig) -> Self {
        Self {
            engine,
            status: StatusSignaler::new(indicators, config),
            message,
            state: TransferState::Idle,
            debouncer: Debouncer::new(config.debounce_ms),
            config,
            stats: TransferStats::new(),
            config_fault: false,
        }
    }

    /// Hand `buffer[..len]` to the engine if nothing is in flight.
    ///
    /// No engine call is made unless the buffer is valid and the state is idle.
    /// The state is claimed before the engine starts so that a completion
    /// interrupt arriving straight after the start always finds `InFlight`;
    /// if the engine refuses, the claim is released again.
    pub fn submit(&mut self, buffer: Option<&'static [u8]>, len: usize) -> Outcome {
        let data = match buffer {
            Some(buf) if len != 0 && len <= buf.len() => &buf[..len],
            _ => {
                trace!("[ERROR] refusing to submit an empty or out of range buffer (len {})", len);
                self.stats.rejected = self.stats.rejected.wrapping_add(1);
                return Outcome::RejectedInvalid;
            }
        };

        if !self.state.advance(Edge::Claim) {
            self.stats.busy = self.stats.busy.wrapping_add(1);
            return Outcome::RejectedBusy;
        }

        match self.engine.transmit(data) {
            EngineResult::Ok => {
                self.stats.submitted = self.stats.submitted.wrapping_add(1);
                trace!("TX of {} bytes scheduled.", data.len());
                Outcome::Submitted
            }
            refused => {
                self.state.advance(Edge::Release);
                self.stats.rejected = self.stats.rejected.wrapping_add(1);
                trace!("[ERROR] DMA engine refused the transfer: {:?}", refused);
                Outcome::RejectedHardware
            }
        }
    }

    /// Submit the owned message.
    pub fn send_message(&mut self) -> Outcome {
        let message = self.message;
        self.submit(Some(message), message.len())
    }

    /// Start-of-day transmission. Not debounced.
    pub fn boot(&mut self) -> Outcome {
        trace!("boot transmission of {} bytes", self.message.len());
        self.send_and_signal()
    }

    /// A trigger notification arrived on `line` at `now_ms`.
    ///
    /// Returns the submission outcome if the trigger was admitted, `None` if it
    /// was ignored (foreign line, debounce, latched configuration fault).
    pub fn on_trigger(&mut self, line: LineId, now_ms: u32) -> Option<Outcome> {
        if line != self.config.trigger_line {
            return None;
        }
        if self.config_fault {
            trace!("[WARNING] trigger ignored, message buffer is unusable");
            return None;
        }
        if !self.debouncer.admit(now_ms) {
            self.stats.debounced = self.stats.debounced.wrapping_add(1);
            return None;
        }
        Some(self.send_and_signal())
    }

    /// The engine of `instance` finished its transfer.
    ///
    /// Returns whether the notification released an in-flight transfer.
    pub fn on_complete(&mut self, instance: InstanceId) -> bool {
        if !self.release(instance) {
            return false;
        }
        self.stats.completed = self.stats.completed.wrapping_add(1);
        self.status.signal(StatusEvent::Finished);
        true
    }

    /// The engine of `instance` aborted its transfer with an error.
    pub fn on_transfer_error(&mut self, instance: InstanceId) -> bool {
        if !self.release(instance) {
            return false;
        }
        trace!("[ERROR] DMA transfer error on instance {}", instance.0);
        self.stats.faulted = self.stats.faulted.wrapping_add(1);
        self.status.signal(StatusEvent::Failed(Failure::Hardware));
        true
    }

    fn release(&mut self, instance: InstanceId) -> bool {
        if instance != self.engine.instance() {
            return false;
        }
        if !self.state.advance(Edge::Release) {
            trace!("[WARNING] DMA notification for instance {} while idle.", instance.0);
            self.stats.spurious = self.stats.spurious.wrapping_add(1);
            return false;
        }
        true
    }

    fn send_and_signal(&mut self) -> Outcome {
        let outcome = self.send_message();
        match outcome {
            Outcome::Submitted => self.status.signal(StatusEvent::Started),
            // dropped, never queued
            Outcome::RejectedBusy => {}
            Outcome::RejectedHardware => self.status.signal(StatusEvent::Failed(Failure::Hardware)),
            Outcome::RejectedInvalid => {
                self.config_fault = true;
                self.status.signal(StatusEvent::Failed(Failure::Invalid));
            }
        }
        outcome
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn stats(&self) -> TransferStats {
        self.stats
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    pub fn message(&self) -> &'static [u8] {
        self.message
    }

    /// Whether triggers are being ignored because the message can never be sent.
    pub fn has_config_fault(&self) -> bool {
        self.config_fault
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Interrupt handlers need the engine to acknowledge stream flags.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn indicators(&self) -> &I {
        self.status.indicators()
    }

    pub fn indicators_mut(&mut self) -> &mut I {
        self.status.indicators_mut()
    }
}
