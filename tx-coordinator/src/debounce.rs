//! Minimum-interval admission for a bouncing switch.

/// Accepts an event only if at least `window_ms` elapsed since the last accepted one.
///
/// Timestamps are wrapping millisecond counters, so the filter keeps working
/// across the ~49 day roll-over of a `u32`.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    window_ms: u32,
    /// `None` until the first event is accepted.
    last_accepted: Option<u32>,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted: None,
        }
    }

    /// Feed a raw event observed at `now_ms`. Returns `true` if it is admitted,
    /// in which case it becomes the new reference point.
    pub fn admit(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted {
            if now_ms.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last_accepted = Some(now_ms);
        true
    }

    pub fn last_accepted(&self) -> Option<u32> {
        self.last_accepted
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }
}
