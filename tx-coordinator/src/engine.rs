//! The hardware side of a transfer, as seen by the coordinator.

/// Identity of the peripheral instance a completion notification belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstanceId(pub u8);

/// Identity of the external interrupt line a trigger arrived on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineId(pub u8);

/// What the DMA engine said when handed a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineResult {
    /// The stream is running; a completion notification will follow.
    Ok,
    /// The stream was still owned by a previous transfer.
    Busy,
    /// The stream refused the buffer (misconfiguration, bad length...).
    Error,
}

/// A non-blocking memory-to-peripheral transfer mechanism.
pub trait TransferEngine {
    /// Start sending `data`. Must return immediately; completion is reported
    /// asynchronously through the owning interrupt.
    fn transmit(&mut self, data: &'static [u8]) -> EngineResult;

    /// The peripheral instance this engine drives.
    fn instance(&self) -> InstanceId;
}
