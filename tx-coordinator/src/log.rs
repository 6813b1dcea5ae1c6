//! Diagnostics sink.
//!
//! With the `rtt` feature the messages go out over RTT; without it they are
//! type-checked and discarded, which keeps host test builds free of the
//! cortex-m critical section used by `rtt-target`.

#[cfg(feature = "rtt")]
macro_rules! trace {
    ($($arg:tt)*) => {
        rtt_target::rprintln!($($arg)*)
    };
}

#[cfg(not(feature = "rtt"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        if false {
            let _ = core::format_args!($($arg)*);
        }
    };
}
