use chrono::{DateTime, Local};

/// Source of the timestamps stamped on recorded operations
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the server's local time zone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant, for replaying or testing
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
