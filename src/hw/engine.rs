use rtt_target::rprintln;
use stm32f4xx_hal::dma::{traits::Stream, DMAError, Stream6};
use stm32f4xx_hal::pac::DMA2;
use tx_coordinator::{EngineResult, InstanceId, TransferEngine};

use crate::app::Usart6TransferTx;

/// Completion notifications of DMA2 stream 6 are tagged with the USART they serve.
pub(crate) const USART6_INSTANCE: InstanceId = InstanceId(6);

/// What the stream interrupt was raised for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StreamEvent {
    Complete,
    Error,
}

/// USART6 TX driven by DMA2 stream 6.
pub(crate) struct DmaEngine {
    transfer: Usart6TransferTx,
}

impl DmaEngine {
    pub(crate) fn new(transfer: Usart6TransferTx) -> Self {
        Self { transfer }
    }

    /// Reads the stream's status flags and clears them.
    /// Must be called from the stream interrupt, otherwise it fires again straight away.
    pub(crate) fn take_event(&mut self) -> Option<StreamEvent> {
        // NOTE(safety): atomic reads with no side effects.
        let transfer_error = Stream6::<DMA2>::get_transfer_error_flag();
        let transfer_complete = Stream6::<DMA2>::get_transfer_complete_flag();
        // turns out DMA doesn't clean up its own interrupts, so we have to do so ourselves.
        self.transfer.clear_interrupts();

        if transfer_error {
            Some(StreamEvent::Error)
        } else if transfer_complete {
            Some(StreamEvent::Complete)
        } else {
            None
        }
    }
}

impl TransferEngine for DmaEngine {
    fn transmit(&mut self, data: &'static [u8]) -> EngineResult {
        // single-buffer mode: this reprograms address and length, then re-enables the stream.
        match self.transfer.next_transfer(data) {
            Ok(_) => EngineResult::Ok,
            Err(DMAError::NotReady(_)) => EngineResult::Busy,
            Err(e) => {
                rprintln!("[ERROR] DMA2 stream 6 rejected the buffer: {:?}", e);
                EngineResult::Error
            }
        }
    }

    fn instance(&self) -> InstanceId {
        USART6_INSTANCE
    }
}
