//! This module implements the combined ISO 8601 `DateTime`.

use core::fmt;
use core::ops::Sub;
use std::str::FromStr;

use crate::{
    components::duration::MICROS_PER_DAY,
    components::{Date, Duration, Time, TimeZone},
    error::IsoError,
    parsers::parse_datetime,
    IsoResult,
};

/// A calendar date combined with a wall-clock time.
///
/// An end-of-day time (`24:00:00`) is normalized on construction to the
/// next day at midnight with the same time zone, so a stored `DateTime`
/// never carries hour 24.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

// ==== Creation ====

impl DateTime {
    pub(crate) const fn new_unchecked(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Combines a date and a time, normalizing the end-of-day marker.
    pub fn try_new(date: Date, time: Time) -> IsoResult<Self> {
        if !time.is_end_of_day() {
            return Ok(Self::new_unchecked(date, time));
        }
        let tz = time.tz().cloned();
        let next = Date::from_epoch_days(date.epoch_days() + 1)?;
        Ok(Self::new_unchecked(
            next,
            Time::new_unchecked(0, 0, 0, 0, tz),
        ))
    }

    fn from_epoch_micros(micros: i128, tz: Option<TimeZone>) -> IsoResult<Self> {
        let days = micros.div_euclid(MICROS_PER_DAY);
        let rem = micros.rem_euclid(MICROS_PER_DAY) as u64;
        let days = i64::try_from(days)
            .map_err(|_| IsoError::parse("datetime", "", "datetime arithmetic overflowed"))?;
        let date = Date::from_epoch_days(days)?;
        let (hour, rem) = (rem / 3_600_000_000, rem % 3_600_000_000);
        let (minute, rem) = (rem / 60_000_000, rem % 60_000_000);
        let (second, microsecond) = (rem / 1_000_000, rem % 1_000_000);
        Ok(Self::new_unchecked(
            date,
            Time::new_unchecked(
                hour as u8,
                minute as u8,
                second as u8,
                microsecond as u32,
                tz,
            ),
        ))
    }
}

// ==== Accessors ====

impl DateTime {
    #[inline]
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> &Time {
        &self.time
    }

    #[inline]
    #[must_use]
    pub const fn tz(&self) -> Option<&TimeZone> {
        self.time.tz()
    }

    /// Microseconds relative to 1970-01-01T00:00:00 in the datetime's
    /// own wall clock; no offset is applied.
    pub(crate) fn epoch_micros(&self) -> i128 {
        i128::from(self.date.epoch_days()) * MICROS_PER_DAY
            + i128::from(self.time.micros_of_day())
    }
}

// ==== Arithmetic ====

impl DateTime {
    /// Adds a duration: years, then months with month-end clamping, then
    /// the exact part to microsecond precision, carrying across
    /// midnight. The time zone is preserved and never converted.
    pub fn add(&self, duration: &Duration) -> IsoResult<Self> {
        let date = self.date.add_nominal(&duration.nominal())?;
        let micros = i128::from(date.epoch_days()) * MICROS_PER_DAY
            + i128::from(self.time.micros_of_day())
            + duration.exact().total_micros();
        Self::from_epoch_micros(micros, self.time.tz().cloned())
    }

    /// Subtracts a duration; equivalent to adding its negation.
    pub fn subtract(&self, duration: &Duration) -> IsoResult<Self> {
        self.add(&duration.negated())
    }
}

impl Sub for &DateTime {
    type Output = Duration;

    /// The exact wall-clock difference between two datetimes. Offsets
    /// are not applied; compare instants in the same zone.
    fn sub(self, rhs: Self) -> Duration {
        Duration::from_micros(self.epoch_micros() - rhs.epoch_micros())
    }
}

impl Sub for DateTime {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        &self - &rhs
    }
}

impl FromStr for DateTime {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_datetime(s)
    }
}

impl fmt::Display for DateTime {
    /// The extended complete form, `YYYY-MM-DDThh:mm:ss` with the
    /// time-zone designator when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

// ==== Tests ====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::UtcOffset;

    fn dt(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> DateTime {
        DateTime::try_new(
            Date::try_new(y, mo, d).unwrap(),
            Time::try_new(h, mi, s, 0, None).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn end_of_day_normalizes_to_next_midnight() {
        let result = DateTime::try_new(
            Date::try_new(2009, 12, 31).unwrap(),
            Time::try_new(24, 0, 0, 0, Some(TimeZone::Utc)).unwrap(),
        )
        .unwrap();
        assert_eq!(result.date(), Date::try_new(2010, 1, 1).unwrap());
        assert_eq!(result.time().hour(), 0);
        assert_eq!(result.tz(), Some(&TimeZone::Utc));
    }

    #[test]
    fn add_carries_across_midnight() {
        let base = dt(2009, 12, 31, 23, 30, 0);
        let result = base.add(&"PT45M".parse().unwrap()).unwrap();
        assert_eq!(result, dt(2010, 1, 1, 0, 15, 0));
    }

    #[test]
    fn add_preserves_tz() {
        let offset = UtcOffset::try_new(2, 0).unwrap();
        let base = DateTime::try_new(
            Date::try_new(2009, 12, 15).unwrap(),
            Time::try_new(12, 0, 0, 0, Some(TimeZone::Fixed(offset.clone()))).unwrap(),
        )
        .unwrap();
        let result = base.add(&"P1DT1H".parse().unwrap()).unwrap();
        assert_eq!(result.tz(), Some(&TimeZone::Fixed(offset)));
        assert_eq!(result.date(), Date::try_new(2009, 12, 16).unwrap());
        assert_eq!(result.time().hour(), 13);
    }

    #[test]
    fn wall_clock_difference() {
        let a = dt(2009, 12, 16, 0, 15, 0);
        let b = dt(2009, 12, 15, 23, 45, 0);
        let diff = &a - &b;
        assert_eq!(diff.seconds(), 30 * 60);
        assert_eq!(diff.days(), 0);
        assert_eq!((&b - &a).seconds(), -(30 * 60));
        assert_eq!(b - a, -diff);
    }

    #[test]
    fn display() {
        assert_eq!(dt(2009, 12, 15, 12, 30, 0).to_string(), "2009-12-15T12:30:00");
    }
}
