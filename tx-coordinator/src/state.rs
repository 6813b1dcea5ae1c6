//! Transfer state machine.
//!
//! ```text
//!            Claim
//!   Idle ───────────▶ InFlight
//!    ▲                   │
//!    └───────────────────┘
//!          Release
//! ```
//!
//! Any other (state, edge) pair is illegal and leaves the state untouched.

/// Whether the DMA stream currently owns the transmit buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferState {
    Idle,
    InFlight,
}

/// Events that move the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// A submission takes the stream.
    Claim,
    /// The stream gave the buffer back (completion, fault, or refused start).
    Release,
}

impl TransferState {
    /// The state reached by taking `edge` from `self`, or `None` if the edge is illegal here.
    pub const fn next(self, edge: Edge) -> Option<TransferState> {
        match (self, edge) {
            (TransferState::Idle, Edge::Claim) => Some(TransferState::InFlight),
            (TransferState::InFlight, Edge::Release) => Some(TransferState::Idle),
            _ => None,
        }
    }

    /// Take `edge` in place. Returns whether the transition was legal.
    pub fn advance(&mut self, edge: Edge) -> bool {
        match self.next(edge) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    pub fn is_in_flight(self) -> bool {
        self == TransferState::InFlight
    }
}

impl Default for TransferState {
    fn default() -> Self {
        TransferState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_then_release() {
        let mut state = TransferState::Idle;
        assert!(state.advance(Edge::Claim));
        assert_eq!(state, TransferState::InFlight);
        assert!(state.advance(Edge::Release));
        assert_eq!(state, TransferState::Idle);
    }

    #[test]
    fn double_claim_is_illegal() {
        let mut state = TransferState::Idle;
        assert!(state.advance(Edge::Claim));
        assert!(!state.advance(Edge::Claim));
        assert_eq!(state, TransferState::InFlight);
    }

    #[test]
    fn release_while_idle_is_illegal() {
        let mut state = TransferState::Idle;
        assert!(!state.advance(Edge::Release));
        assert_eq!(state, TransferState::Idle);
    }
}
