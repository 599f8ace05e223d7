//! Wall-clock time of day
//!
//! Requests and policies carry times as `"HH:MM"` strings. They are converted
//! once, at ingestion, into minutes since midnight; all rule arithmetic works
//! on those minutes. There is no date component and no timezone.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of minutes in one day
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors produced while reading a time of day
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    /// The string is not a valid `HH:MM` wall-clock time
    #[error("Invalid time of day '{0}': expected HH:MM between 00:00 and 23:59")]
    InvalidFormat(String),

    /// A minute offset does not fall within a single day
    #[error("Minute offset {0} is outside a single day (0-1439)")]
    OutOfRange(u16),
}

/// A time of day with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Midnight (`00:00`)
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Build a time from a minute offset since midnight
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeParseError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeParseError::OutOfRange(minutes));
        }
        Ok(Self { minutes })
    }

    /// Build a time from hours and minutes, returning `None` outside 00:00-23:59
    pub fn from_hm(hours: u8, minutes: u8) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Self { minutes: u16::from(hours) * 60 + u16::from(minutes) })
    }

    /// Build a time from literal hours and minutes known to be in range
    pub(crate) const fn at(hours: u16, minutes: u16) -> Self {
        debug_assert!(hours < 24 && minutes < 60);
        Self { minutes: hours * 60 + minutes }
    }

    /// Minutes elapsed since midnight
    pub fn minutes(&self) -> u16 {
        self.minutes
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// Signed minute difference `self - earlier`
    ///
    /// Never wraps around midnight: `00:05 - 23:55` is `-1430`.
    pub fn minutes_since(&self, earlier: TimeOfDay) -> i32 {
        i32::from(self.minutes) - i32::from(earlier.minutes)
    }
}

/// Convert an `"HH:MM"` string to minutes since midnight
pub fn time_to_minutes(time: &str) -> Result<u16, TimeParseError> {
    time.parse::<TimeOfDay>().map(|t| t.minutes())
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| TimeParseError::InvalidFormat(s.to_string()))?;

        // hour() <= 23 and minute() <= 59 by construction
        Ok(Self { minutes: (parsed.hour() * 60 + parsed.minute()) as u16 })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
