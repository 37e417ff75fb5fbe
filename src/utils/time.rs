use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current time in milliseconds since UNIX epoch
pub fn current_time_millis() -> u64 {
    since_epoch().as_millis() as u64
}

/// Returns the current time in nanoseconds since UNIX epoch
pub fn current_time_nanos() -> u64 {
    since_epoch().as_nanos() as u64
}

fn since_epoch() -> std::time::Duration {
    // A clock set before 1970 reads as the epoch itself.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// Wall clock that never hands out the same reading twice.
///
/// Order timestamps break ties between orders at the same price, so two orders
/// created within the same nanosecond (or across a backwards clock step) must still
/// get strictly increasing values.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    pub(crate) last: u64,
}

impl MonotonicClock {
    /// Create a clock that has not issued any timestamp yet
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Next timestamp, strictly greater than every previous one
    pub fn next(&mut self) -> u64 {
        let now = current_time_nanos();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    /// The last timestamp issued, or 0 if none
    pub fn last(&self) -> u64 {
        self.last
    }
}
