//! This module implements the ISO 8601 calendar `Date` and its
//! arithmetic.

use core::fmt;
use core::ops::Sub;
use std::str::FromStr;

use crate::{
    components::duration::NominalDuration, components::Duration, error::IsoError,
    formatters::format_year, parsers::parse_date, utils, IsoResult,
};

/// A proleptic Gregorian calendar date. Year 0 is valid and distinct
/// from year -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

// ==== Creation ====

impl Date {
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `Date`.
    pub fn try_new(year: i32, month: u8, day: u8) -> IsoResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(IsoError::parse("date", "", "month must be in 1..=12"));
        }
        if day < 1 || day > utils::days_in_month(year, month) {
            return Err(IsoError::parse(
                "date",
                "",
                "day is out of range for the month",
            ));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a `Date` from a year and a one-based day of the year,
    /// rejecting day 366 outside leap years.
    pub fn from_ordinal(year: i32, ordinal: u16) -> IsoResult<Self> {
        if ordinal < 1 || ordinal > utils::days_in_year(year) {
            return Err(IsoError::parse(
                "date",
                "",
                "ordinal day is out of range for the year",
            ));
        }
        let days = utils::epoch_days_from_date(year, 1, 1) + i64::from(ordinal) - 1;
        Ok(Self::from_epoch_days_unchecked(days))
    }

    /// Creates a `Date` from an ISO week-date. Week 1 is the week
    /// containing the year's first Thursday, so the resulting calendar
    /// year may differ from `week_year` at the boundaries.
    pub fn from_iso_week_date(week_year: i32, week: u8, weekday: u8) -> IsoResult<Self> {
        if week < 1 || week > utils::weeks_in_iso_year(week_year) {
            return Err(IsoError::parse(
                "date",
                "",
                "week is out of range for the ISO week-year",
            ));
        }
        if !(1..=7).contains(&weekday) {
            return Err(IsoError::parse("date", "", "weekday must be in 1..=7"));
        }
        let days = utils::epoch_days_from_iso_week_date(week_year, week, weekday);
        Ok(Self::from_epoch_days_unchecked(days))
    }

    pub(crate) fn from_epoch_days(days: i64) -> IsoResult<Self> {
        let (year, month, day) = utils::date_from_epoch_days(days);
        if i32::try_from(year).is_err() {
            return Err(IsoError::parse("date", "", "date arithmetic overflowed"));
        }
        Ok(Self::new_unchecked(year as i32, month, day))
    }

    fn from_epoch_days_unchecked(days: i64) -> Self {
        let (year, month, day) = utils::date_from_epoch_days(days);
        Self::new_unchecked(year as i32, month, day)
    }
}

// ==== Accessors ====

impl Date {
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// One-based day of the year.
    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        utils::day_of_year(self.year, self.month, self.day)
    }

    /// ISO weekday: 1 = Monday through 7 = Sunday.
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> u8 {
        utils::weekday(self.year, self.month, self.day)
    }

    /// The `(week_year, week, weekday)` ISO week-date for this date.
    #[inline]
    #[must_use]
    pub fn iso_week_date(&self) -> (i32, u8, u8) {
        utils::iso_week_date(self.year, self.month, self.day)
    }

    /// Days since 1970-01-01.
    pub(crate) fn epoch_days(&self) -> i64 {
        utils::epoch_days_from_date(self.year, self.month, self.day)
    }
}

// ==== Arithmetic ====

impl Date {
    /// Adds a duration. Years are applied first, then months, then the
    /// day of month is clamped to the target month's length (so
    /// `2020-01-31 + P1M` is `2020-02-29`), then the duration's whole
    /// exact days are added. Sub-day parts of the exact half do not move
    /// a plain date.
    pub fn add(&self, duration: &Duration) -> IsoResult<Self> {
        let clamped = self.add_nominal(&duration.nominal())?;
        Self::from_epoch_days(clamped.epoch_days() + duration.whole_days())
    }

    /// Subtracts a duration; equivalent to adding its negation.
    pub fn subtract(&self, duration: &Duration) -> IsoResult<Self> {
        self.add(&duration.negated())
    }

    pub(crate) fn add_nominal(&self, nominal: &NominalDuration) -> IsoResult<Self> {
        let months0 = i64::from(self.month) - 1 + i64::from(nominal.months());
        let year = i64::from(self.year) + i64::from(nominal.years()) + months0.div_euclid(12);
        let year = i32::try_from(year)
            .map_err(|_| IsoError::parse("date", "", "date arithmetic overflowed"))?;
        let month = (months0.rem_euclid(12) + 1) as u8;
        let day = self.day.min(utils::days_in_month(year, month));
        Ok(Self::new_unchecked(year, month, day))
    }
}

impl Sub for Date {
    type Output = Duration;

    /// The exact day difference between two dates.
    fn sub(self, rhs: Self) -> Duration {
        Duration::from_days(self.epoch_days() - rhs.epoch_days())
    }
}

impl FromStr for Date {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl fmt::Display for Date {
    /// The extended complete form, `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}",
            format_year(self.year),
            self.month,
            self.day
        )
    }
}

// ==== Tests ====
