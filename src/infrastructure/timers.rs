use std::time::Duration;

use gloo::timers::callback::{Interval, Timeout};

use crate::application::scheduler::TaskHandle;

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// One-shot browser timer
pub struct TimeoutHandle(Timeout);

impl TimeoutHandle {
    pub fn schedule(after: Duration, callback: impl FnOnce() + 'static) -> Self {
        Self(Timeout::new(millis(after), callback))
    }

    /// Let the timer fire without keeping a handle to it
    pub fn detach(self) {
        self.0.forget();
    }
}

impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// Repeating browser timer
pub struct IntervalHandle(Interval);

impl IntervalHandle {
    pub fn every(period: Duration, callback: impl FnMut() + 'static) -> Self {
        Self(Interval::new(millis(period), callback))
    }
}

impl TaskHandle for IntervalHandle {
    fn cancel(self) {
        self.0.cancel();
    }
}
