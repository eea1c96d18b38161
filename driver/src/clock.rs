use kernel::interface::clock::Clock;
use time::{Date, OffsetDateTime};

/// Today's date in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Date);

impl FixedClock {
    pub fn new(today: Date) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
