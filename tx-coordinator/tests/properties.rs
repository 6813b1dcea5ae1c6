//! Invariants over arbitrary interleavings of trigger and completion events.

mod common;

use common::*;
use proptest::prelude::*;
use tx_coordinator::{EngineResult, Outcome, TransferState};

#[derive(Clone, Copy, Debug)]
enum Event {
    /// Button press `gap` ms after the previous event.
    Trigger { gap: u32 },
    Complete,
    ForeignComplete,
    TransferError,
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => (0u32..400).prop_map(|gap| Event::Trigger { gap }),
        2 => Just(Event::Complete),
        1 => Just(Event::ForeignComplete),
        1 => Just(Event::TransferError),
    ]
}

fn engine_reply() -> impl Strategy<Value = EngineResult> {
    prop_oneof![
        6 => Just(EngineResult::Ok),
        1 => Just(EngineResult::Busy),
        1 => Just(EngineResult::Error),
    ]
}

proptest! {
    #[test]
    fn single_flight_holds(
        events in prop::collection::vec(event(), 1..64),
        replies in prop::collection::vec(engine_reply(), 0..32),
    ) {
        let mut c = coordinator_with(MockEngine::replying(&replies));
        let mut now = 0u32;
        // true while the model believes a transfer is outstanding
        let mut outstanding = false;

        for ev in events {
            match ev {
                Event::Trigger { gap } => {
                    now = now.wrapping_add(gap);
                    let calls_before = c.engine().sent.len();
                    match c.on_trigger(BUTTON, now) {
                        Some(Outcome::Submitted) => {
                            prop_assert!(!outstanding, "second transfer started without completion");
                            outstanding = true;
                        }
                        Some(Outcome::RejectedBusy) => {
                            prop_assert!(outstanding);
                            prop_assert_eq!(c.engine().sent.len(), calls_before);
                        }
                        Some(Outcome::RejectedHardware) => {
                            prop_assert!(!outstanding);
                        }
                        Some(Outcome::RejectedInvalid) => {
                            prop_assert!(false, "greeting is valid");
                        }
                        None => {
                            prop_assert_eq!(c.engine().sent.len(), calls_before);
                        }
                    }
                }
                Event::Complete => {
                    prop_assert_eq!(c.on_complete(USART6), outstanding);
                    outstanding = false;
                }
                Event::TransferError => {
                    prop_assert_eq!(c.on_transfer_error(USART6), outstanding);
                    outstanding = false;
                }
                Event::ForeignComplete => {
                    prop_assert!(!c.on_complete(USART2));
                }
            }
            prop_assert_eq!(c.state() == TransferState::InFlight, outstanding);
            prop_assert_eq!(c.stats().outstanding(), outstanding as u32);
        }
    }

    #[test]
    fn burst_inside_window_admits_at_most_once(
        start in any::<u32>(),
        mut offsets in prop::collection::vec(0u32..200, 1..20),
    ) {
        offsets.sort_unstable();
        let mut c = coordinator();
        let admitted = offsets
            .iter()
            .filter(|&&offset| c.on_trigger(BUTTON, start.wrapping_add(offset)).is_some())
            .count();
        prop_assert!(admitted <= 1);
        prop_assert!(c.engine().sent.len() <= 1);
    }
}
