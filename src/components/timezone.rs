//! This module implements the ISO 8601 time-zone value objects.
//!
//! Three variants exist: the UTC singleton, fixed UTC offsets, and the
//! host's local zone. None of them performs DST arithmetic on arbitrary
//! historical instants; the local zone merely reflects the host's offset
//! at the instant it is observed.

use core::fmt;
use std::str::FromStr;

use crate::{
    error::IsoError, host::HostTimeZone, parsers::parse_tzinfo, sys::SystemTimeZone, IsoResult,
};

/// A fixed offset from UTC, bounded to less than 24 hours in either
/// direction. The hour and minute fields always carry the same sign.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    hours: i8,
    minutes: i8,
    name: Option<String>,
}

// ==== UtcOffset creation ====

impl UtcOffset {
    pub(crate) const fn new_unchecked(hours: i8, minutes: i8) -> Self {
        Self {
            hours,
            minutes,
            name: None,
        }
    }

    /// Creates a new offset from hour and minute components. The signs
    /// of the two components must agree and the minute component must
    /// stay below 60.
    pub fn try_new(hours: i8, minutes: i8) -> IsoResult<Self> {
        if !(-23..=23).contains(&hours) || !(-59..=59).contains(&minutes) {
            return Err(IsoError::parse(
                "tzinfo",
                "",
                "UTC offsets are bounded to less than 24 hours",
            ));
        }
        if i16::from(hours) * i16::from(minutes) < 0 {
            return Err(IsoError::parse(
                "tzinfo",
                "",
                "offset hour and minute components must share a sign",
            ));
        }
        Ok(Self::new_unchecked(hours, minutes))
    }

    /// Creates a new offset from a total second count, discarding any
    /// sub-minute remainder. This is the shape host clocks report.
    pub fn from_seconds(seconds: i32) -> IsoResult<Self> {
        let minutes = seconds / 60;
        if minutes.abs() >= 24 * 60 {
            return Err(IsoError::parse(
                "tzinfo",
                "",
                "UTC offsets are bounded to less than 24 hours",
            ));
        }
        Ok(Self::new_unchecked(
            (minutes / 60) as i8,
            (minutes % 60) as i8,
        ))
    }

    /// Attaches a display name to the offset.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// ==== UtcOffset accessors ====

impl UtcOffset {
    #[inline]
    #[must_use]
    pub const fn hours(&self) -> i8 {
        self.hours
    }

    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i8 {
        self.minutes
    }

    #[inline]
    #[must_use]
    pub const fn total_minutes(&self) -> i16 {
        self.hours as i16 * 60 + self.minutes as i16
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    /// The offset's name: the one it was built with, or a derived
    /// `±hh:mm` designator.
    #[must_use]
    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.designator(),
        }
    }

    /// The `±hh:mm` designator for this offset.
    pub(crate) fn designator(&self) -> String {
        let total = self.total_minutes();
        let sign = if total < 0 { '-' } else { '+' };
        format!(
            "{sign}{:02}:{:02}",
            (total / 60).abs(),
            (total % 60).abs()
        )
    }
}

/// An ISO 8601 time zone: the UTC singleton, a fixed offset, or the
/// host's local zone.
///
/// `Utc` and `Fixed` never observe DST. `Local` resolves against a
/// [`HostTimeZone`] on every query; [`TimeZone::utc_offset`] uses the
/// system host, and the `_with_host` variant exists so tests can
/// substitute a fake observation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum TimeZone {
    #[default]
    Utc,
    Fixed(UtcOffset),
    Local,
}

impl TimeZone {
    /// The offset this zone currently designates.
    pub fn utc_offset(&self) -> IsoResult<UtcOffset> {
        self.utc_offset_with_host(&SystemTimeZone)
    }

    /// As [`TimeZone::utc_offset`], resolving the local zone against the
    /// provided host.
    pub fn utc_offset_with_host(&self, host: &impl HostTimeZone) -> IsoResult<UtcOffset> {
        match self {
            Self::Utc => Ok(UtcOffset::default()),
            Self::Fixed(offset) => Ok(offset.clone()),
            Self::Local => host.host_utc_offset(),
        }
    }

    /// The zone's name: `"UTC"`, the fixed offset's name, or `"Local"`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Utc => "UTC".to_owned(),
            Self::Fixed(offset) => offset.name(),
            Self::Local => "Local".to_owned(),
        }
    }

    /// Whether daylight saving is in effect. Always false for UTC and
    /// fixed offsets; delegated to the system host for the local zone.
    #[must_use]
    pub fn is_dst(&self) -> bool {
        self.is_dst_with_host(&SystemTimeZone)
    }

    #[must_use]
    pub fn is_dst_with_host(&self, host: &impl HostTimeZone) -> bool {
        match self {
            Self::Utc | Self::Fixed(_) => false,
            Self::Local => host.host_is_dst(),
        }
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(value: UtcOffset) -> Self {
        Self::Fixed(value)
    }
}

impl FromStr for TimeZone {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tzinfo(s)
    }
}

impl fmt::Display for TimeZone {
    /// The designator form: `Z` for UTC, `±hh:mm` otherwise. The local
    /// zone renders its currently observed offset, or nothing when the
    /// host cannot report one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("Z"),
            Self::Fixed(offset) => f.write_str(&offset.designator()),
            Self::Local => match self.utc_offset() {
                Ok(offset) => f.write_str(&offset.designator()),
                Err(_) => Ok(()),
            },
        }
    }
}

// ==== Tests ====

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHost(i32);

    impl HostTimeZone for FixedHost {
        fn host_utc_offset(&self) -> IsoResult<UtcOffset> {
            UtcOffset::from_seconds(self.0)
        }

        fn host_is_dst(&self) -> bool {
            true
        }
    }

    #[test]
    fn offset_bounds() {
        assert!(UtcOffset::try_new(23, 59).is_ok());
        assert!(UtcOffset::try_new(-23, -59).is_ok());
        assert!(UtcOffset::try_new(24, 0).is_err());
        assert!(UtcOffset::try_new(0, 60).is_err());
        assert!(UtcOffset::try_new(1, -30).is_err());
    }

    #[test]
    fn derived_names() {
        assert_eq!(UtcOffset::try_new(2, 0).unwrap().name(), "+02:00");
        assert_eq!(UtcOffset::try_new(-5, -30).unwrap().name(), "-05:30");
        assert_eq!(UtcOffset::default().name(), "+00:00");
        assert_eq!(
            UtcOffset::try_new(1, 0).unwrap().with_name("CET").name(),
            "CET"
        );
    }

    #[test]
    fn local_zone_observes_the_host() {
        let host = FixedHost(2 * 3600);
        let offset = TimeZone::Local.utc_offset_with_host(&host).unwrap();
        assert_eq!(offset.total_minutes(), 120);
        assert!(TimeZone::Local.is_dst_with_host(&host));
        assert!(!TimeZone::Utc.is_dst_with_host(&host));
    }

    #[test]
    fn zone_names() {
        assert_eq!(TimeZone::Utc.name(), "UTC");
        assert_eq!(
            TimeZone::Fixed(UtcOffset::new_unchecked(-3, 0)).name(),
            "-03:00"
        );
    }
}
