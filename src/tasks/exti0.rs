use rtic::mutex_prelude::*;
use rtt_target::rprintln;
use stm32f4xx_hal::prelude::*;

use crate::app::{monotonics, on_exti0, BUTTON_LINE};

pub(crate) fn on_exti0(mut ctx: on_exti0::Context) {
    // the pending bit stays set until we clear it, re-entering this handler forever.
    ctx.local.button.clear_interrupt_pending_bit();

    // millisecond timestamp for the debounce arithmetic; wraps after ~49 days.
    let now_ms = monotonics::now().duration_since_epoch().to_millis() as u32;

    /*
        entering critical section
    */
    let outcome = ctx
        .shared
        .coordinator
        .lock(|coordinator| coordinator.on_trigger(BUTTON_LINE, now_ms));
    /*
        leaving critical section
    */

    if let Some(outcome) = outcome {
        rprintln!("button accepted at {} ms: {:?}", now_ms, outcome);
    }
}
