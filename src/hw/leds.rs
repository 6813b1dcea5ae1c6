//! Discovery board LEDs.
//!
//! PD13 (orange) shows a transfer in flight, PD15 (blue) acknowledges
//! completions, PD14 (red) reports failures. PD12 (green) is the heartbeat and
//! lives in its own task.

use rtt_target::rprintln;
use stm32f4xx_hal::gpio::{ErasedPin, Output, PushPull};
use tx_coordinator::{Indicator, Indicators, Level, Pulses};

type Led = ErasedPin<Output<PushPull>>;

/// Work item for the `indicator` software task.
#[derive(Clone, Copy, Debug)]
pub(crate) enum IndicatorCommand {
    Set(Indicator, Level),
    /// Start a new pulse train, superseding any running one on the same LED.
    Pulse {
        indicator: Indicator,
        pulses: Pulses,
        interval_ms: u32,
    },
    /// Next edge of the train started under `generation`.
    Step {
        indicator: Indicator,
        generation: u8,
        phases: Phases,
        interval_ms: u32,
    },
}

/// Remaining LED edges of a pulse train. One pulse is two edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phases {
    Finite(u16),
    Forever,
}

impl Phases {
    pub(crate) fn is_done(self) -> bool {
        self == Phases::Finite(0)
    }

    /// What is left after one more edge.
    pub(crate) fn after_edge(self) -> Self {
        match self {
            Phases::Finite(n) => Phases::Finite(n.saturating_sub(1)),
            Phases::Forever => Phases::Forever,
        }
    }
}

impl From<Pulses> for Phases {
    fn from(pulses: Pulses) -> Self {
        match pulses {
            Pulses::Count(n) => Phases::Finite(u16::from(n) * 2),
            Pulses::Forever => Phases::Forever,
        }
    }
}

pub(crate) struct Leds {
    pins: [Led; 3],
    /// Bumped whenever an LED is taken over, so stale pulse steps can tell.
    generation: [u8; 3],
}

fn slot(indicator: Indicator) -> usize {
    match indicator {
        Indicator::Activity => 0,
        Indicator::Done => 1,
        Indicator::Fault => 2,
    }
}

impl Leds {
    pub(crate) fn new(activity: Led, done: Led, fault: Led) -> Self {
        let mut leds = Self {
            pins: [activity, done, fault],
            generation: [0; 3],
        };
        for pin in leds.pins.iter_mut() {
            pin.set_low();
        }
        leds
    }

    /// Drive an LED to a level. Cancels a pulse train running on it.
    pub(crate) fn set(&mut self, indicator: Indicator, level: Level) {
        self.take_over(indicator);
        let pin = &mut self.pins[slot(indicator)];
        match level {
            Level::On => pin.set_high(),
            Level::Off => pin.set_low(),
        }
    }

    /// Claim an LED for a new pulse train, starting from dark.
    /// Returns the generation the train's steps must carry.
    pub(crate) fn restart(&mut self, indicator: Indicator) -> u8 {
        let generation = self.take_over(indicator);
        self.pins[slot(indicator)].set_low();
        generation
    }

    /// Toggle the LED if `generation` is still the current owner.
    pub(crate) fn step(&mut self, indicator: Indicator, generation: u8) -> bool {
        let i = slot(indicator);
        if self.generation[i] != generation {
            return false;
        }
        self.pins[i].toggle();
        true
    }

    fn take_over(&mut self, indicator: Indicator) -> u8 {
        let i = slot(indicator);
        self.generation[i] = self.generation[i].wrapping_add(1);
        self.generation[i]
    }
}

/// Forwards coordinator status effects to the `indicator` task, so that
/// interrupt handlers never wait on LED timing.
pub(crate) struct RticIndicators;

impl RticIndicators {
    fn send(command: IndicatorCommand) {
        if crate::app::indicator::spawn(command).is_err() {
            rprintln!("[WARNING] indicator queue full, dropping {:?}", command);
        }
    }
}

impl Indicators for RticIndicators {
    fn set(&mut self, indicator: Indicator, level: Level) {
        Self::send(IndicatorCommand::Set(indicator, level));
    }

    fn pulse(&mut self, indicator: Indicator, pulses: Pulses, interval_ms: u32) {
        Self::send(IndicatorCommand::Pulse {
            indicator,
            pulses,
            interval_ms,
        });
    }
}

/// Stop forward progress: fault and activity LEDs solid, then sleep forever.
/// Only a reset gets out of here.
pub(crate) fn halt(leds: &mut Leds, reason: &str) -> ! {
    rprintln!("[ERROR] halting: {}", reason);
    leds.set(Indicator::Fault, Level::On);
    leds.set(Indicator::Activity, Level::On);
    loop {
        cortex_m::asm::wfi();
    }
}
