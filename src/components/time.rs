//! This module implements the ISO 8601 `Time` value object.

use core::fmt;
use std::str::FromStr;

use crate::{
    components::TimeZone, error::IsoError, parsers::parse_time, IsoResult,
};

/// A wall-clock time with microsecond precision and an optional time
/// zone.
///
/// `hour` may be 24 only when every lower field is zero; such a time
/// denotes the end of the day. A plain `Time` keeps the marker, while
/// [`crate::DateTime`] normalizes it to the next day at midnight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    tz: Option<TimeZone>,
}

impl Default for Time {
    fn default() -> Self {
        Self::new_unchecked(0, 0, 0, 0, None)
    }
}

// ==== Creation ====

impl Time {
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
        tz: Option<TimeZone>,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            microsecond,
            tz,
        }
    }

    /// Creates a new validated `Time`.
    pub fn try_new(
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
        tz: Option<TimeZone>,
    ) -> IsoResult<Self> {
        if hour == 24 {
            if minute != 0 || second != 0 || microsecond != 0 {
                return Err(IsoError::parse(
                    "time",
                    "",
                    "hour 24 is only valid as the end-of-day marker 24:00:00",
                ));
            }
        } else if hour > 23 {
            return Err(IsoError::parse("time", "", "hour must be in 0..=24"));
        }
        if minute > 59 || second > 59 {
            return Err(IsoError::parse(
                "time",
                "",
                "minute and second must be in 0..=59",
            ));
        }
        if microsecond > 999_999 {
            return Err(IsoError::parse(
                "time",
                "",
                "microsecond must be in 0..=999999",
            ));
        }
        Ok(Self::new_unchecked(hour, minute, second, microsecond, tz))
    }

    /// Rebuilds the time with a different (or no) time zone.
    #[must_use]
    pub fn with_tz(mut self, tz: Option<TimeZone>) -> Self {
        self.tz = tz;
        self
    }
}

// ==== Accessors ====

impl Time {
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.microsecond
    }

    #[inline]
    #[must_use]
    pub const fn tz(&self) -> Option<&TimeZone> {
        self.tz.as_ref()
    }

    /// Whether this is the end-of-day marker `24:00:00`.
    #[inline]
    #[must_use]
    pub const fn is_end_of_day(&self) -> bool {
        self.hour == 24
    }

    /// Microseconds since the start of the day; `24:00:00` maps to a
    /// full day.
    pub(crate) fn micros_of_day(&self) -> u64 {
        u64::from(self.hour) * 3_600_000_000
            + u64::from(self.minute) * 60_000_000
            + u64::from(self.second) * 1_000_000
            + u64::from(self.microsecond)
    }
}

impl FromStr for Time {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl fmt::Display for Time {
    /// The extended complete form with the time-zone designator. The
    /// end-of-day marker renders as `00:00:00`; the formatter never
    /// emits hour 24.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour % 24,
            self.minute,
            self.second
        )?;
        if self.microsecond != 0 {
            let frac = format!("{:06}", self.microsecond);
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        match &self.tz {
            Some(tz) => write!(f, "{tz}"),
            None => Ok(()),
        }
    }
}

// ==== Tests ====
