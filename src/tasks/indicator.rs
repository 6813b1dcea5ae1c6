use rtt_target::rprintln;

use crate::app::{indicator, MonoDuration};
use crate::hw::{IndicatorCommand, Phases};

pub(crate) fn indicator(ctx: indicator::Context, command: IndicatorCommand) {
    let leds = ctx.local.leds;

    let (which, generation, phases, interval_ms) = match command {
        IndicatorCommand::Set(which, level) => {
            leds.set(which, level);
            return;
        }
        IndicatorCommand::Pulse {
            indicator: which,
            pulses,
            interval_ms,
        } => (which, leds.restart(which), Phases::from(pulses), interval_ms),
        IndicatorCommand::Step {
            indicator: which,
            generation,
            phases,
            interval_ms,
        } => (which, generation, phases, interval_ms),
    };

    if phases.is_done() || !leds.step(which, generation) {
        // finished, or a newer effect took the LED over.
        return;
    }

    let remaining = phases.after_edge();
    if remaining.is_done() {
        return;
    }
    let next = IndicatorCommand::Step {
        indicator: which,
        generation,
        phases: remaining,
        interval_ms,
    };
    if indicator::spawn_after(MonoDuration::millis(u64::from(interval_ms)), next).is_err() {
        rprintln!("[WARNING] indicator queue full, pulse train cut short.");
    }
}
