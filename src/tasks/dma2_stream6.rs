use rtic::mutex_prelude::*;
use rtt_target::rprintln;
use tx_coordinator::TransferEngine;

use crate::app::on_dma2_stream6;
use crate::hw::StreamEvent;

pub(crate) fn on_dma2_stream6(mut ctx: on_dma2_stream6::Context) {
    ctx.shared.coordinator.lock(|coordinator| {
        let instance = coordinator.engine().instance();
        match coordinator.engine_mut().take_event() {
            Some(StreamEvent::Complete) => {
                if coordinator.on_complete(instance) {
                    rprintln!("TX complete.");
                }
            }
            Some(StreamEvent::Error) => {
                coordinator.on_transfer_error(instance);
            }
            None => {
                // this shouldn't happen.
                rprintln!("[WARNING] DMA2 stream 6 fired without a status flag set.");
            }
        }
    });
}
