use chrono::{Local, NaiveDateTime};

use crate::ports::Clock;

/// Clock reading the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
