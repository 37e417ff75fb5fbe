mod time;

pub use time::{MonotonicClock, current_time_millis, current_time_nanos};
