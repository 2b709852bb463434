//! Time-zone designator parsing.

use crate::{
    components::{TimeZone, UtcOffset},
    error::IsoError,
    grammar, IsoResult,
};

/// Parses an ISO 8601 time-zone designator: `Z`, `±hh:mm`, `±hhmm` or
/// `±hh`.
///
/// `Z` yields [`TimeZone::Utc`]; every signed designator yields a
/// [`TimeZone::Fixed`] offset, so `+00:00` and `-00:00` compare equal to
/// each other but not to `Z`.
pub fn parse_tzinfo(s: &str) -> IsoResult<TimeZone> {
    let caps = grammar::TZ_PATTERN
        .captures(s)
        .ok_or_else(|| IsoError::parse("tzinfo", s, "no time-zone designator matched"))?;

    if caps.name("utc").is_some() {
        return Ok(TimeZone::Utc);
    }

    let sign: i8 = if &caps["sign"] == "-" { -1 } else { 1 };
    let hours: i8 = caps["hours"]
        .parse()
        .map_err(|_| IsoError::parse("tzinfo", s, "offset hours are out of range"))?;
    let minutes: i8 = match caps.name("minutes") {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| IsoError::parse("tzinfo", s, "offset minutes are out of range"))?,
        None => 0,
    };
    if hours > 23 {
        return Err(IsoError::parse(
            "tzinfo",
            s,
            "offset hours must be in 0..=23",
        ));
    }
    if minutes > 59 {
        return Err(IsoError::parse(
            "tzinfo",
            s,
            "offset minutes must be in 0..=59",
        ));
    }
    Ok(TimeZone::Fixed(UtcOffset::new_unchecked(
        sign * hours,
        sign * minutes,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(hours: i8, minutes: i8) -> TimeZone {
        TimeZone::Fixed(UtcOffset::try_new(hours, minutes).unwrap())
    }

    #[test]
    fn utc_designator() {
        assert_eq!(parse_tzinfo("Z").unwrap(), TimeZone::Utc);
    }

    #[test]
    fn offset_designators() {
        assert_eq!(parse_tzinfo("+02:00").unwrap(), fixed(2, 0));
        assert_eq!(parse_tzinfo("+0200").unwrap(), fixed(2, 0));
        assert_eq!(parse_tzinfo("+02").unwrap(), fixed(2, 0));
        assert_eq!(parse_tzinfo("-05:30").unwrap(), fixed(-5, -30));
        assert_eq!(parse_tzinfo("+23:59").unwrap(), fixed(23, 59));
    }

    #[test]
    fn signed_zero_is_fixed_not_utc() {
        let zero = parse_tzinfo("+00:00").unwrap();
        assert_eq!(zero, fixed(0, 0));
        assert_eq!(parse_tzinfo("-00:00").unwrap(), zero);
        assert_ne!(zero, TimeZone::Utc);
    }

    #[test]
    fn rejections() {
        assert!(parse_tzinfo("").is_err());
        assert!(parse_tzinfo("z").is_err());
        assert!(parse_tzinfo("+24:00").is_err());
        assert!(parse_tzinfo("+02:60").is_err());
        assert!(parse_tzinfo("02:00").is_err());
        assert!(parse_tzinfo("+2").is_err());
        assert!(parse_tzinfo("UTC").is_err());
    }
}
