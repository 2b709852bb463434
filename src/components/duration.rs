//! This module implements `Duration` along with its nominal and exact
//! halves.
//!
//! An ISO 8601 duration splits into a *nominal* part (years and months,
//! whose real length depends on the date they are anchored to) and an
//! *exact* part (days, seconds and microseconds, of fixed length).
//! Months and years cannot be losslessly expressed in seconds, so the
//! two halves are never normalized into each other.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{
    error::IsoError, formatters::duration_display, parsers::parse_duration, IsoResult,
};

#[cfg(test)]
mod tests;

pub(crate) const MICROS_PER_SECOND: i128 = 1_000_000;
pub(crate) const MICROS_PER_MINUTE: i128 = 60 * MICROS_PER_SECOND;
pub(crate) const MICROS_PER_HOUR: i128 = 60 * MICROS_PER_MINUTE;
pub(crate) const MICROS_PER_DAY: i128 = 24 * MICROS_PER_HOUR;
pub(crate) const MICROS_PER_WEEK: i128 = 7 * MICROS_PER_DAY;

/// The nominal (calendar-relative) half of a duration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NominalDuration {
    pub(crate) years: i32,
    pub(crate) months: i32,
}

impl NominalDuration {
    pub(crate) const fn new(years: i32, months: i32) -> Self {
        Self { years, months }
    }

    #[inline]
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0
    }

    pub(crate) const fn negated(&self) -> Self {
        Self::new(-self.years, -self.months)
    }
}

/// The exact (fixed-length) half of a duration, stored as a total count
/// of microseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExactDuration {
    micros: i128,
}

impl ExactDuration {
    pub(crate) const fn from_micros(micros: i128) -> Self {
        Self { micros }
    }

    /// Whole days. Sub-day remainders truncate toward zero, so a
    /// negative duration yields a negative day count.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        (self.micros / MICROS_PER_DAY) as i64
    }

    /// Whole seconds below the day boundary.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        ((self.micros % MICROS_PER_DAY) / MICROS_PER_SECOND) as i64
    }

    /// Microseconds below the second boundary.
    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i32 {
        (self.micros % MICROS_PER_SECOND) as i32
    }

    /// The total count of microseconds.
    #[inline]
    #[must_use]
    pub const fn total_micros(&self) -> i128 {
        self.micros
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.micros == 0
    }

    pub(crate) const fn negated(&self) -> Self {
        Self::from_micros(-self.micros)
    }
}

/// An ISO 8601 duration.
///
/// Weeks are normalized into days on construction; the sign is carried
/// uniformly, so a negative duration carries every field negative.
/// Equality is field-by-field: `P1Y` and `P12M` compare unequal, as do
/// `P1Y` and `P365D`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    nominal: NominalDuration,
    exact: ExactDuration,
}

// ==== Creation ====

impl Duration {
    pub(crate) const fn new_unchecked(nominal: NominalDuration, exact: ExactDuration) -> Self {
        Self { nominal, exact }
    }

    /// Creates a new `Duration` from its components. Weeks fold into
    /// days; hours, minutes, seconds and microseconds fold into the
    /// exact microsecond total.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        years: i32,
        months: i32,
        weeks: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        microseconds: i64,
    ) -> Self {
        let micros = i128::from(weeks) * MICROS_PER_WEEK
            + i128::from(days) * MICROS_PER_DAY
            + i128::from(hours) * MICROS_PER_HOUR
            + i128::from(minutes) * MICROS_PER_MINUTE
            + i128::from(seconds) * MICROS_PER_SECOND
            + i128::from(microseconds);
        Self::new_unchecked(
            NominalDuration::new(years, months),
            ExactDuration::from_micros(micros),
        )
    }

    /// The zero duration, `P0D`.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new_unchecked(NominalDuration::new(0, 0), ExactDuration::from_micros(0))
    }

    /// A duration consisting of exact days only.
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        Self::new(0, 0, 0, days, 0, 0, 0, 0)
    }

    pub(crate) const fn from_micros(micros: i128) -> Self {
        Self::new_unchecked(NominalDuration::new(0, 0), ExactDuration::from_micros(micros))
    }
}

// ==== Accessors ====

impl Duration {
    /// Returns the nominal (years/months) half.
    #[inline]
    #[must_use]
    pub const fn nominal(&self) -> NominalDuration {
        self.nominal
    }

    /// Returns the exact (days/seconds/microseconds) half.
    #[inline]
    #[must_use]
    pub const fn exact(&self) -> ExactDuration {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.nominal.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> i32 {
        self.nominal.months
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.exact.days()
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.exact.seconds()
    }

    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i32 {
        self.exact.microseconds()
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.nominal.is_zero() && self.exact.is_zero()
    }

    /// Whether any field is negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.nominal.years < 0
            || self.nominal.months < 0
            || self.exact.total_micros() < 0
    }

    /// Whether all non-zero fields share one sign. The designator form
    /// carries a single leading sign, so only such durations have an
    /// ISO 8601 rendering.
    #[inline]
    #[must_use]
    pub const fn has_uniform_sign(&self) -> bool {
        let positive = self.nominal.years > 0
            || self.nominal.months > 0
            || self.exact.total_micros() > 0;
        !(positive && self.is_negative())
    }

    /// Whether the duration is a whole, non-zero number of weeks with no
    /// other component. [`crate::formatters::duration_isoformat`] emits
    /// such durations in the `PnW` form.
    #[inline]
    #[must_use]
    pub const fn is_whole_weeks(&self) -> bool {
        self.nominal.is_zero()
            && !self.exact.is_zero()
            && self.exact.total_micros() % MICROS_PER_WEEK == 0
    }
}

// ==== Arithmetic and comparison ====

impl Duration {
    /// Returns the negation; negating flips the sign of every field.
    #[inline]
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self::new_unchecked(self.nominal.negated(), self.exact.negated())
    }

    /// The exact half as fractional seconds. Defined only for durations
    /// with a zero nominal part: a year or month count has no fixed
    /// length in seconds.
    pub fn total_seconds(&self) -> IsoResult<f64> {
        if !self.nominal.is_zero() {
            return Err(IsoError::IncomparableDurations);
        }
        Ok(self.exact.total_micros() as f64 / MICROS_PER_SECOND as f64)
    }

    /// Compares two durations. Ordering exists only when both carry the
    /// same nominal part; otherwise the durations are incomparable and
    /// an error is returned.
    pub fn compare(&self, other: &Self) -> IsoResult<Ordering> {
        self.partial_cmp(other)
            .ok_or(IsoError::IncomparableDurations)
    }

    /// Whole days of the exact half, truncated toward zero. Date
    /// arithmetic applies only this part of the exact half; using
    /// truncation (rather than flooring) keeps `(d + D) - D == d` for
    /// every exact-only duration.
    pub(crate) const fn whole_days(&self) -> i64 {
        self.exact.days()
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.nominal == other.nominal)
            .then(|| self.exact.total_micros().cmp(&other.exact.total_micros()))
    }
}

impl Add for Duration {
    type Output = Self;

    /// Componentwise addition; the nominal/exact split is preserved.
    fn add(self, rhs: Self) -> Self {
        Self::new_unchecked(
            NominalDuration::new(
                self.nominal.years + rhs.nominal.years,
                self.nominal.months + rhs.nominal.months,
            ),
            ExactDuration::from_micros(self.exact.total_micros() + rhs.exact.total_micros()),
        )
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + rhs.negated()
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<i32> for Duration {
    type Output = Self;

    /// Componentwise scalar multiplication.
    fn mul(self, rhs: i32) -> Self {
        Self::new_unchecked(
            NominalDuration::new(self.nominal.years * rhs, self.nominal.months * rhs),
            ExactDuration::from_micros(self.exact.total_micros() * i128::from(rhs)),
        )
    }
}

impl FromStr for Duration {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

impl fmt::Display for Duration {
    /// The designator form. Fields of a mixed-sign duration print with
    /// their own signs; such a string is not ISO 8601 and no parser
    /// accepts it back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&duration_display(self))
    }
}
