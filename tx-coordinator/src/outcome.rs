/// Result of a single submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The engine accepted the buffer and the transfer is now in flight.
    Submitted,
    /// A transfer is already in flight; nothing was started.
    RejectedBusy,
    /// Empty, absent or out-of-range buffer; nothing was started.
    RejectedInvalid,
    /// The engine refused the buffer; the coordinator stays idle.
    RejectedHardware,
}

/// Error taxonomy behind the rejected outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxError {
    /// The message buffer can never be sent. Not retried.
    InvalidArgument,
    /// Expected under overlapping triggers; silently absorbed.
    Busy,
    /// The DMA engine refused or faulted; recoverable on the next trigger.
    EngineFailure,
}

impl Outcome {
    pub fn is_submitted(self) -> bool {
        self == Outcome::Submitted
    }

    /// The error this outcome represents, if any.
    pub fn error(self) -> Option<TxError> {
        match self {
            Outcome::Submitted => None,
            Outcome::RejectedBusy => Some(TxError::Busy),
            Outcome::RejectedInvalid => Some(TxError::InvalidArgument),
            Outcome::RejectedHardware => Some(TxError::EngineFailure),
        }
    }

    pub fn into_result(self) -> Result<(), TxError> {
        match self.error() {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}
