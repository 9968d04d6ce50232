//! Wall clock and the monotonic tick used by the console loop

use std::fmt;

use crate::config::{DAYLIGHT_OFFSET_SECS, GMT_OFFSET_SECS};

/// 2016-01-01T00:00:00Z. Anything earlier means SNTP has not synchronized yet.
pub const MIN_VALID_EPOCH: i64 = 1_451_606_400;

const SECS_PER_DAY: i64 = 86_400;

/// Time source and delay provider
pub trait Clock {
    /// Milliseconds since boot, never goes backwards
    fn millis(&self) -> u64;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Local time, `None` while the time is not synchronized
    fn local_time(&self) -> Option<TimeOfDay>;
}

/// Hour, minute and second of the local day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Local time of day for a UNIX timestamp using the fixed offsets.
    ///
    /// Returns `None` for timestamps before [`MIN_VALID_EPOCH`].
    pub fn from_epoch(epoch_secs: i64) -> Option<Self> {
        Self::from_epoch_with_offset(epoch_secs, GMT_OFFSET_SECS + DAYLIGHT_OFFSET_SECS)
    }

    pub fn from_epoch_with_offset(epoch_secs: i64, offset_secs: i64) -> Option<Self> {
        if epoch_secs < MIN_VALID_EPOCH {
            return None;
        }
        let secs = (epoch_secs + offset_secs).rem_euclid(SECS_PER_DAY);
        Some(Self {
            hour: (secs / 3600) as u8,
            minute: (secs % 3600 / 60) as u8,
            second: (secs % 60) as u8,
        })
    }
}

/// `HH:MM:SS`
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
