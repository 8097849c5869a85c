//! Wall-clock time of day and the derived values the phraser works from.
//!
//! A [`ClockTime`] is a validated 24-hour `hour:minute` pair. Everything the
//! composer needs (the 12-hour face value, the next hour's face value,
//! minutes remaining until the hour, the period of the day) is derived from
//! it on demand and never stored.
//!
//! # Design Principles
//!
//! - Construction validates; a `ClockTime` in hand is always in range.
//! - All derivations use checked arithmetic with a documented fallback.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::Serialize;

use crate::error::TimeError;

/// Hours on a clock face.
const FACE_HOURS: u8 = 12;

/// Minutes in one hour.
const MINUTES_PER_HOUR: u8 = 60;

/// A time of day on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    /// Hour of the day, `0..=23`.
    hour: u8,
    /// Minute of the hour, `0..=59`.
    minute: u8,
}

impl ClockTime {
    /// Create a clock time from an hour and a minute.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::HourOutOfRange`] if `hour > 23` and
    /// [`TimeError::MinuteOutOfRange`] if `minute > 59`.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::HourOutOfRange { hour });
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(TimeError::MinuteOutOfRange { minute });
        }
        Ok(Self { hour, minute })
    }

    /// Build a clock time from anything that carries an hour and a minute
    /// (for instance a `chrono::DateTime` or `chrono::NaiveTime`).
    pub fn from_timelike<T: Timelike>(time: &T) -> Result<Self, TimeError> {
        let hour = u8::try_from(time.hour()).map_err(|_err| TimeError::HourOutOfRange {
            hour: u8::MAX,
        })?;
        let minute = u8::try_from(time.minute()).map_err(|_err| {
            TimeError::MinuteOutOfRange { minute: u8::MAX }
        })?;
        Self::new(hour, minute)
    }

    /// The current local wall-clock time.
    pub fn now() -> Result<Self, TimeError> {
        Self::from_timelike(&chrono::Local::now())
    }

    /// Hour of the day, `0..=23`.
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute of the hour, `0..=59`.
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// The hour as read off a 12-hour clock face: `1..=12`, with 0 and 12
    /// both reading as 12.
    pub const fn display_hour(self) -> u8 {
        match self.hour.checked_rem(FACE_HOURS) {
            Some(0) | None => FACE_HOURS,
            Some(face) => face,
        }
    }

    /// The face value of the following hour (12 wraps to 1).
    pub const fn next_display_hour(self) -> u8 {
        match self.display_hour().checked_rem(FACE_HOURS) {
            Some(face) => face.saturating_add(1),
            None => 1,
        }
    }

    /// Minutes left until the next whole hour, `1..=60`.
    pub const fn minutes_to_next_hour(self) -> u8 {
        MINUTES_PER_HOUR.saturating_sub(self.minute)
    }

    /// The period of the day this time falls in.
    pub const fn day_period(self) -> DayPeriod {
        DayPeriod::from_hour(self.hour)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    /// Parse `HH:MM` (one or two digits on each side of the colon).
    /// Surrounding whitespace is ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidTimeFormat {
            input: input.to_owned(),
        };
        let (hour, minute) = input.trim().split_once(':').ok_or_else(invalid)?;
        let hour = parse_component(hour).ok_or_else(invalid)?;
        let minute = parse_component(minute).ok_or_else(invalid)?;
        Self::new(hour, minute)
    }
}

/// Parse one or two ASCII digits. Signs, spaces and longer runs are
/// rejected so that `"+1:05"` or `"010:05"` never sneak through.
fn parse_component(digits: &str) -> Option<u8> {
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Period of the day, used to pick the suffix appended to a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    /// 05:00 to 11:59.
    Morning,
    /// 12:00 to 15:59.
    Noon,
    /// 16:00 to 17:59.
    Afternoon,
    /// 18:00 to 21:59.
    Evening,
    /// 22:00 to 04:59.
    Night,
}

impl DayPeriod {
    /// Every period, in the order they occur from dawn.
    pub const ALL: [Self; 5] = [
        Self::Morning,
        Self::Noon,
        Self::Afternoon,
        Self::Evening,
        Self::Night,
    ];

    /// Classify an hour of the day (`0..=23`). Anything outside the
    /// daytime ranges, including out-of-range input, is night.
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=15 => Self::Noon,
            16..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::Night,
        }
    }
}
