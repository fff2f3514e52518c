use chrono::{Local, NaiveDateTime, Timelike};

/// Source of the analysis timestamp stamped on every report row.
pub trait TimestampProvider {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local timezone, truncated to whole seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl TimestampProvider for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
