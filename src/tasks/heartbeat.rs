use rtt_target::rprintln;

use crate::app::{heartbeat, MonoDuration};

/// Half period of the heartbeat blink.
const HEARTBEAT_PERIOD: MonoDuration = MonoDuration::millis(500);

/// Toggles the green LED forever, showing the CPU stays free while DMA runs.
pub(crate) fn heartbeat(ctx: heartbeat::Context) {
    ctx.local.heartbeat_led.toggle();

    if heartbeat::spawn_after(HEARTBEAT_PERIOD).is_err() {
        rprintln!("[ERROR] failed to reschedule heartbeat.");
    }
}
