//! This module contains RTIC tasks for doing various things.
//! Each task is in its own submodule, and is pub(crate) re-exported by this module for usage.
//!

/*
   private interface
*/

/// Button line interrupt: debounced transmission requests.
mod exti0;

/// DMA2 stream 6 interrupt: the end of a transfer.
mod dma2_stream6;

/// Software task playing LED effects.
mod indicator;

/// Task periodically toggling the heartbeat LED.
/// Note: this task requires a monotonic clock with at least 1ms resolution.
mod heartbeat;

/*
    public(crate) interface
*/
pub(crate) use dma2_stream6::on_dma2_stream6;
pub(crate) use exti0::on_exti0;
pub(crate) use heartbeat::heartbeat;
pub(crate) use indicator::indicator;
