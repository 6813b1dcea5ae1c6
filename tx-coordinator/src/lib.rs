//! Single-flight DMA transmit coordinator.
//!
//! The coordinator owns the message buffer and the transfer state, and is driven
//! exclusively through its entry points:
//! - [`Coordinator::boot`] once at start-of-day,
//! - [`Coordinator::on_trigger`] from the button line interrupt,
//! - [`Coordinator::on_complete`] / [`Coordinator::on_transfer_error`] from the DMA interrupt.
//!
//! Hardware is reached only through the [`TransferEngine`] and [`Indicators`] traits,
//! so the whole state machine runs on the host under test.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

pub mod buffer;
pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod engine;
pub mod outcome;
pub mod state;
pub mod stats;
pub mod status;

pub use buffer::TxBuffer;
pub use config::CoordinatorConfig;
pub use coordinator::Coordinator;
pub use debounce::Debouncer;
pub use engine::{EngineResult, InstanceId, LineId, TransferEngine};
pub use outcome::{Outcome, TxError};
pub use state::{Edge, TransferState};
pub use stats::TransferStats;
pub use status::{Failure, Indicator, Indicators, Level, Pulses, StatusEvent, StatusSignaler};
