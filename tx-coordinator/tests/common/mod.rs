//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use tx_coordinator::{
    Coordinator, CoordinatorConfig, EngineResult, Indicator, Indicators, InstanceId, Level, LineId,
    Pulses, TransferEngine,
};

pub const USART6: InstanceId = InstanceId(6);
pub const USART2: InstanceId = InstanceId(2);
pub const BUTTON: LineId = LineId(0);

pub const GREETING: &[u8] = b"Hello from STM32 via HC-05!\r\n";

/// Engine that records every buffer it is handed and answers from a script
/// (falling back to `Ok` once the script runs dry).
#[derive(Default)]
pub struct MockEngine {
    pub sent: Vec<&'static [u8]>,
    pub replies: VecDeque<EngineResult>,
}

impl MockEngine {
    pub fn replying(replies: &[EngineResult]) -> Self {
        Self {
            sent: Vec::new(),
            replies: replies.iter().copied().collect(),
        }
    }
}

impl TransferEngine for MockEngine {
    fn transmit(&mut self, data: &'static [u8]) -> EngineResult {
        self.sent.push(data);
        self.replies.pop_front().unwrap_or(EngineResult::Ok)
    }

    fn instance(&self) -> InstanceId {
        USART6
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Set(Indicator, Level),
    Pulse(Indicator, Pulses),
}

#[derive(Default)]
pub struct RecordingIndicators {
    pub effects: Vec<Effect>,
}

impl RecordingIndicators {
    pub fn count(&self, effect: Effect) -> usize {
        self.effects.iter().filter(|e| **e == effect).count()
    }
}

impl Indicators for RecordingIndicators {
    fn set(&mut self, indicator: Indicator, level: Level) {
        self.effects.push(Effect::Set(indicator, level));
    }

    fn pulse(&mut self, indicator: Indicator, pulses: Pulses, _interval_ms: u32) {
        self.effects.push(Effect::Pulse(indicator, pulses));
    }
}

pub type TestCoordinator = Coordinator<MockEngine, RecordingIndicators>;

pub fn coordinator_with(engine: MockEngine) -> TestCoordinator {
    Coordinator::new(
        engine,
        RecordingIndicators::default(),
        GREETING,
        CoordinatorConfig::DEFAULT,
    )
}

pub fn coordinator() -> TestCoordinator {
    coordinator_with(MockEngine::default())
}

pub const STARTED: Effect = Effect::Set(Indicator::Activity, Level::On);
