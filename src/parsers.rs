//! This module implements ISO 8601 date, time and datetime parsing.
//!
//! Each entry point consumes a complete string and returns one value
//! object, or fails with a single [`IsoError::Parse`]. Partial results
//! are never returned and ambiguous inputs are never silently accepted.

use regex::Captures;

use crate::{
    components::{Date, DateTime, Time},
    error::IsoError,
    grammar, IsoResult,
};

mod duration;
mod timezone;

#[doc(inline)]
pub use duration::parse_duration;
#[doc(inline)]
pub use timezone::parse_tzinfo;

/// Options controlling [`parse_date_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParseOptions {
    /// Number of digits in the year field. Values above four require
    /// `expanded`.
    pub year_digits: u8,
    /// Whether the expanded year grammar (mandatory sign) is in effect.
    pub expanded: bool,
    /// Month used to complete the reduced year and century forms.
    pub default_month: u8,
    /// Day used to complete the reduced forms.
    pub default_day: u8,
}

impl Default for DateParseOptions {
    fn default() -> Self {
        Self {
            year_digits: 4,
            expanded: false,
            default_month: 1,
            default_day: 1,
        }
    }
}

// ==== Dates ====

/// Parses an ISO 8601 date in any calendar, ordinal or week-date form,
/// complete or reduced, basic or extended.
pub fn parse_date(s: &str) -> IsoResult<Date> {
    parse_date_with(s, &DateParseOptions::default())
}

/// As [`parse_date`], with explicit year width and reduction defaults.
pub fn parse_date_with(s: &str, options: &DateParseOptions) -> IsoResult<Date> {
    parse_date_record(s, options).map(|(date, _)| date)
}

/// Parses a date and reports which separator form matched (`None` for
/// the year and century reductions, which carry no separator).
pub(crate) fn parse_date_record(
    s: &str,
    options: &DateParseOptions,
) -> IsoResult<(Date, Option<bool>)> {
    let default = DateParseOptions::default();
    let built;
    let patterns: &[grammar::DatePattern] = if *options == default {
        &grammar::DATE_PATTERNS
    } else {
        built = grammar::build_date_patterns(options.year_digits, options.expanded)?;
        &built
    };

    for pattern in patterns {
        let Some(caps) = pattern.regex.captures(s) else {
            continue;
        };
        let date = build_date(s, &caps, options)?;
        return Ok((date, pattern.extended));
    }
    Err(IsoError::parse(
        "date",
        s,
        "no ISO 8601 date production matched",
    ))
}

fn build_date(s: &str, caps: &Captures<'_>, options: &DateParseOptions) -> IsoResult<Date> {
    let sign: i64 = match caps.name("sign").map(|m| m.as_str()) {
        Some("-") => -1,
        _ => 1,
    };

    // Century reduction: `cc` completes to year `cc * 100 + 1`, with
    // the sign applied to the completed year, so `-19` is -1901.
    if let Some(century) = caps.name("century") {
        let year = sign * (field::<i64>("date", s, century.as_str())? * 100 + 1);
        return reduced_date(s, year, options);
    }

    let year = sign * field::<i64>("date", s, &caps["year"])?;

    if let Some(week) = caps.name("week") {
        let week = field::<u8>("date", s, week.as_str())?;
        let weekday = match caps.name("weekday") {
            Some(m) => field::<u8>("date", s, m.as_str())?,
            // Reduced week form: the weekday defaults to Monday.
            None => 1,
        };
        return Date::from_iso_week_date(year_in_range(s, year)?, week, weekday)
            .map_err(|e| with_input(e, s));
    }

    if let Some(ordinal) = caps.name("ordinal") {
        let ordinal = field::<u16>("date", s, ordinal.as_str())?;
        return Date::from_ordinal(year_in_range(s, year)?, ordinal).map_err(|e| with_input(e, s));
    }

    match (caps.name("month"), caps.name("day")) {
        (Some(month), Some(day)) => Date::try_new(
            year_in_range(s, year)?,
            field::<u8>("date", s, month.as_str())?,
            field::<u8>("date", s, day.as_str())?,
        )
        .map_err(|e| with_input(e, s)),
        (Some(month), None) => {
            let month = field::<u8>("date", s, month.as_str())?;
            let with_month = DateParseOptions {
                default_month: month,
                ..*options
            };
            reduced_date(s, year, &with_month)
        }
        (None, None) => reduced_date(s, year, options),
        (None, Some(_)) => unreachable!("the grammar never captures a day without a month"),
    }
}

/// Completes a reduced form with the default month and day.
fn reduced_date(s: &str, year: i64, options: &DateParseOptions) -> IsoResult<Date> {
    Date::try_new(
        year_in_range(s, year)?,
        options.default_month,
        options.default_day,
    )
    .map_err(|e| with_input(e, s))
}

fn year_in_range(s: &str, year: i64) -> IsoResult<i32> {
    i32::try_from(year).map_err(|_| IsoError::parse("date", s, "year is out of range"))
}

fn field<T: std::str::FromStr>(target: &'static str, s: &str, digits: &str) -> IsoResult<T> {
    digits
        .parse()
        .map_err(|_| IsoError::parse(target, s, "numeric field is out of range"))
}

/// Replaces the (empty) input recorded by a constructor error with the
/// string being parsed.
fn with_input(error: IsoError, s: &str) -> IsoError {
    match error {
        IsoError::Parse { target, reason, .. } => IsoError::parse(target, s, reason),
        other => other,
    }
}

// ==== Times ====

const MICROS_PER_DAY: u64 = 86_400_000_000;

/// Parses an ISO 8601 time, complete or reduced, with an optional
/// trailing time-zone designator. A fraction (`.` or `,` separated) is
/// accepted on the lowest present field and resolved to microseconds
/// with half-even rounding.
pub fn parse_time(s: &str) -> IsoResult<Time> {
    parse_time_record(s).map(|(time, _)| time)
}

pub(crate) fn parse_time_record(s: &str) -> IsoResult<(Time, Option<bool>)> {
    for pattern in grammar::TIME_PATTERNS.iter() {
        let Some(caps) = pattern.regex.captures(s) else {
            continue;
        };
        let time = build_time(s, &caps)?;
        return Ok((time, pattern.extended));
    }
    Err(IsoError::parse(
        "time",
        s,
        "no ISO 8601 time production matched",
    ))
}

fn build_time(s: &str, caps: &Captures<'_>) -> IsoResult<Time> {
    let hour: u64 = field::<u64>("time", s, &caps["hour"])?;
    let minute = caps.name("minute").map(|m| m.as_str());
    let second = caps.name("second").map(|m| m.as_str());
    let minute_value: u64 = minute.map_or(Ok(0), |m| field("time", s, m))?;
    let second_value: u64 = second.map_or(Ok(0), |m| field("time", s, m))?;

    if hour > 24 {
        return Err(IsoError::parse("time", s, "hour must be in 0..=24"));
    }
    if minute_value > 59 || second_value > 59 {
        return Err(IsoError::parse(
            "time",
            s,
            "minute and second must be in 0..=59",
        ));
    }

    // The fraction scales by the unit of the lowest field present.
    let frac_micros = match caps.name("frac") {
        Some(frac) => {
            let unit: u64 = if second.is_some() {
                1_000_000
            } else if minute.is_some() {
                60_000_000
            } else {
                3_600_000_000
            };
            fraction_to_micros(&frac.as_str()[1..], unit)
        }
        None => 0,
    };

    let total = hour * 3_600_000_000 + minute_value * 60_000_000 + second_value * 1_000_000
        + frac_micros;
    if total > MICROS_PER_DAY {
        return Err(IsoError::parse(
            "time",
            s,
            "hour 24 is only valid as the end-of-day marker 24:00:00",
        ));
    }

    let tz = match caps.name("tz") {
        Some(tz) => Some(parse_tzinfo(tz.as_str())?),
        None => None,
    };

    let (hour, rem) = (total / 3_600_000_000, total % 3_600_000_000);
    let (minute, rem) = (rem / 60_000_000, rem % 60_000_000);
    let (second, microsecond) = (rem / 1_000_000, rem % 1_000_000);
    Time::try_new(
        hour as u8,
        minute as u8,
        second as u8,
        microsecond as u32,
        tz,
    )
    .map_err(|e| with_input(e, s))
}

/// Scales a fraction's digit string by `unit` microseconds-per-whole and
/// rounds the result half-even to an integral microsecond count.
pub(crate) fn fraction_to_micros(digits: &str, unit: u64) -> u64 {
    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    let mut tail_nonzero = false;
    for (index, byte) in digits.bytes().enumerate() {
        // Fifteen digits saturate microsecond precision; deeper digits
        // only matter for breaking round-half-even ties.
        if index < 15 {
            numerator = numerator * 10 + u128::from(byte - b'0');
            denominator *= 10;
        } else if byte != b'0' {
            tail_nonzero = true;
        }
    }
    let scaled = numerator * u128::from(unit);
    let quotient = scaled / denominator;
    let remainder = scaled % denominator;
    let round_up = remainder * 2 > denominator
        || (remainder * 2 == denominator && (tail_nonzero || quotient % 2 == 1));
    quotient as u64 + u64::from(round_up)
}

// ==== Datetimes ====

/// Parses a combined ISO 8601 datetime. The date and time are separated
/// by a literal `T` (a space is not accepted), and both sides must use
/// the same separator form: basic with basic, extended with extended.
pub fn parse_datetime(s: &str) -> IsoResult<DateTime> {
    let Some((date_part, time_part)) = s.split_once('T') else {
        return Err(IsoError::parse(
            "datetime",
            s,
            "expected a 'T' between the date and the time",
        ));
    };
    let (date, date_form) = parse_date_record(date_part, &DateParseOptions::default())?;
    let (time, time_form) = parse_time_record(time_part)?;
    if let (Some(date_extended), Some(time_extended)) = (date_form, time_form) {
        if date_extended != time_extended {
            return Err(IsoError::parse(
                "datetime",
                s,
                "basic and extended forms cannot be mixed",
            ));
        }
    }
    DateTime::try_new(date, time).map_err(|e| with_input(e, s))
}

// ==== Tests ====
