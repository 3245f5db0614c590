use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_CYCLE: u16 = 12 * MINUTES_PER_HOUR;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("expected a time like 9:05, got {0:?}")]
    Malformed(String),
    #[error("hour {0} is outside 1-12")]
    HourOutOfRange(u8),
    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u8),
}

/// A time as read off a 12-hour face: hour 1-12, minute 0-59.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if !(1..=12).contains(&hour) {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Minutes since 12 o'clock, in `0..720`.
    pub fn total_minutes(self) -> u16 {
        u16::from(self.hour % 12) * MINUTES_PER_HOUR + u16::from(self.minute)
    }

    pub fn from_total_minutes(total: u16) -> Self {
        let total = total % MINUTES_PER_CYCLE;
        let hour = (total / MINUTES_PER_HOUR) as u8;
        Self {
            hour: if hour == 0 { 12 } else { hour },
            minute: (total % MINUTES_PER_HOUR) as u8,
        }
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;
        if m.len() != 2 {
            return Err(malformed());
        }
        let hour: u8 = h.parse().map_err(|_| malformed())?;
        let minute: u8 = m.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
