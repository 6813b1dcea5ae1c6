//! End-to-end behaviour of the coordinator driven through its entry points.

mod common;

use common::*;
use tx_coordinator::{
    EngineResult, Indicator, Level, LineId, Outcome, Pulses, TransferState, TxBuffer,
};

#[test]
fn test_boot_submits_greeting() {
    let buffer: &'static mut TxBuffer<128> = Box::leak(Box::new(TxBuffer::new()));
    assert_eq!(buffer.fill(GREETING), 29);
    let message = buffer.freeze();

    let mut c = tx_coordinator::Coordinator::new(
        MockEngine::default(),
        RecordingIndicators::default(),
        message,
        tx_coordinator::CoordinatorConfig::DEFAULT,
    );

    assert_eq!(c.boot(), Outcome::Submitted);
    assert_eq!(c.state(), TransferState::InFlight);
    assert_eq!(c.engine().sent, vec![GREETING]);
    assert_eq!(c.indicators().effects, vec![STARTED]);
}

#[test]
fn test_triggers_inside_window_collapse() {
    let mut c = coordinator();

    assert_eq!(c.on_trigger(BUTTON, 1_000), Some(Outcome::Submitted));
    c.on_complete(USART6);
    // 50 ms later: still bouncing
    assert_eq!(c.on_trigger(BUTTON, 1_050), None);

    assert_eq!(c.engine().sent.len(), 1);
    assert_eq!(c.stats().debounced, 1);
    assert_eq!(c.indicators().count(STARTED), 1);
}

#[test]
fn test_trigger_while_in_flight_is_dropped() {
    let mut c = coordinator();
    assert_eq!(c.boot(), Outcome::Submitted);
    let effects_before = c.indicators().effects.len();

    assert_eq!(c.on_trigger(BUTTON, 5_000), Some(Outcome::RejectedBusy));

    assert_eq!(c.state(), TransferState::InFlight);
    assert_eq!(c.engine().sent.len(), 1);
    assert_eq!(c.indicators().effects.len(), effects_before);
    assert_eq!(c.stats().busy, 1);
}

#[test]
fn test_foreign_completion_is_ignored() {
    let mut c = coordinator();
    c.boot();

    assert!(!c.on_complete(USART2));
    assert!(!c.on_transfer_error(USART2));

    assert_eq!(c.state(), TransferState::InFlight);
    assert_eq!(c.indicators().effects, vec![STARTED]);
}

#[test]
fn test_engine_error_is_recoverable() {
    let mut c = coordinator_with(MockEngine::replying(&[EngineResult::Error]));

    assert_eq!(c.on_trigger(BUTTON, 1_000), Some(Outcome::RejectedHardware));
    assert_eq!(c.state(), TransferState::Idle);
    assert_eq!(
        c.indicators().effects.last(),
        Some(&Effect::Pulse(Indicator::Fault, Pulses::Count(10)))
    );

    // inside the window: nothing happens
    assert_eq!(c.on_trigger(BUTTON, 1_100), None);
    // after the window: retried and accepted
    assert_eq!(c.on_trigger(BUTTON, 1_250), Some(Outcome::Submitted));
    assert_eq!(c.state(), TransferState::InFlight);
    assert_eq!(c.engine().sent.len(), 2);
}

#[test]
fn test_completion_returns_to_idle_and_signals_finished() {
    let mut c = coordinator();
    c.boot();

    assert!(c.on_complete(USART6));

    assert_eq!(c.state(), TransferState::Idle);
    assert_eq!(
        c.indicators().effects,
        vec![
            STARTED,
            Effect::Set(Indicator::Activity, Level::Off),
            Effect::Pulse(Indicator::Done, Pulses::Count(2)),
        ]
    );
    // a second notification for the same transfer changes nothing
    assert!(!c.on_complete(USART6));
    assert_eq!(c.stats().completed, 1);
    assert_eq!(c.stats().spurious, 1);
}

#[test]
fn test_completion_never_starts_a_transfer() {
    let mut c = coordinator();
    c.boot();
    c.on_complete(USART6);
    c.on_complete(USART6);
    assert_eq!(c.engine().sent.len(), 1);
}

#[test]
fn test_foreign_trigger_line_is_ignored() {
    let mut c = coordinator();
    assert_eq!(c.on_trigger(LineId(3), 1_000), None);
    assert!(c.engine().sent.is_empty());
    // and it does not consume the debounce window
    assert_eq!(c.on_trigger(BUTTON, 1_010), Some(Outcome::Submitted));
}

#[test]
fn test_invalid_buffers_are_rejected() {
    let mut c = coordinator();

    assert_eq!(c.submit(Some(GREETING), 0), Outcome::RejectedInvalid);
    assert_eq!(c.submit(None, GREETING.len()), Outcome::RejectedInvalid);

    assert_eq!(c.state(), TransferState::Idle);
    assert!(c.engine().sent.is_empty());
    assert!(c.indicators().effects.is_empty());
}

#[test]
fn test_invalid_checked_before_busy() {
    let mut c = coordinator();
    c.boot();
    assert_eq!(c.submit(None, 4), Outcome::RejectedInvalid);
    assert_eq!(c.state(), TransferState::InFlight);
}

#[test]
fn test_submit_sends_requested_prefix() {
    let mut c = coordinator();
    assert_eq!(c.submit(Some(GREETING), 5), Outcome::Submitted);
    assert_eq!(c.engine().sent, vec![&b"Hello"[..]]);
}
