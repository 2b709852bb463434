//! Duration parsing for the designator and alternative forms.

use crate::{
    components::{
        duration::{
            ExactDuration, NominalDuration, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE,
            MICROS_PER_SECOND, MICROS_PER_WEEK,
        },
        Duration,
    },
    error::IsoError,
    grammar,
    parsers::{fraction_to_micros, parse_datetime},
    IsoResult,
};

/// Parses an ISO 8601 duration in either the designator form
/// (`PnYnMnDTnHnMnS`, `PnW`) or the alternative form (`P<datetime>`).
///
/// At least one component must be present and a fraction is only
/// accepted on the lowest-order component. Years and months are kept
/// nominal and never accept fractions; weeks, days and time components
/// fold into an exact microsecond count.
pub fn parse_duration(s: &str) -> IsoResult<Duration> {
    match grammar::DURATION_PATTERN.captures(s) {
        Some(caps) => parse_designator(s, &caps),
        None => parse_alternative(s),
    }
}

// ==== Designator form ====

fn parse_designator(s: &str, caps: &regex::Captures<'_>) -> IsoResult<Duration> {
    const NAMES: [&str; 7] = [
        "years", "months", "weeks", "days", "hours", "minutes", "seconds",
    ];

    let present: Vec<(usize, &str)> = NAMES
        .iter()
        .enumerate()
        .filter_map(|(index, name)| caps.name(name).map(|m| (index, m.as_str())))
        .collect();

    if present.is_empty() {
        return Err(IsoError::parse(
            "duration",
            s,
            "a duration needs at least one component",
        ));
    }
    // `T` announces time components; reaching it with none is malformed.
    if s.contains('T') && present.iter().all(|&(index, _)| index < 4) {
        return Err(IsoError::parse(
            "duration",
            s,
            "the time designator must be followed by time components",
        ));
    }
    if present.iter().any(|&(index, _)| index == 2) && present.len() > 1 {
        return Err(IsoError::parse(
            "duration",
            s,
            "a week duration cannot carry other components",
        ));
    }

    let mut years: i64 = 0;
    let mut months: i64 = 0;
    let mut micros: i128 = 0;
    let last = present.len() - 1;
    for (position, &(index, value)) in present.iter().enumerate() {
        let (integral, fraction) = match value.split_once(['.', ',']) {
            Some((integral, fraction)) => (integral, Some(fraction)),
            None => (value, None),
        };
        if fraction.is_some() && position != last {
            return Err(IsoError::parse(
                "duration",
                s,
                "a fraction is only allowed on the lowest-order component",
            ));
        }
        let whole: i64 = integral
            .parse()
            .map_err(|_| IsoError::parse("duration", s, "component value is out of range"))?;
        match index {
            0 | 1 => {
                if fraction.is_some() {
                    return Err(IsoError::parse(
                        "duration",
                        s,
                        "fractional years and months are not supported",
                    ));
                }
                if index == 0 {
                    years = whole;
                } else {
                    months = whole;
                }
            }
            _ => {
                let unit: i128 = match index {
                    2 => MICROS_PER_WEEK,
                    3 => MICROS_PER_DAY,
                    4 => MICROS_PER_HOUR,
                    5 => MICROS_PER_MINUTE,
                    _ => MICROS_PER_SECOND,
                };
                micros += i128::from(whole) * unit;
                if let Some(fraction) = fraction {
                    micros += i128::from(fraction_to_micros(fraction, unit as u64));
                }
            }
        }
    }

    let years = i32::try_from(years)
        .map_err(|_| IsoError::parse("duration", s, "component value is out of range"))?;
    let months = i32::try_from(months)
        .map_err(|_| IsoError::parse("duration", s, "component value is out of range"))?;

    let negative = caps.name("sign").is_some_and(|m| m.as_str() == "-");
    let duration = Duration::new_unchecked(
        NominalDuration::new(years, months),
        ExactDuration::from_micros(micros),
    );
    Ok(if negative { duration.negated() } else { duration })
}

// ==== Alternative form ====

/// The alternative form spells the duration as a complete datetime after
/// the `P` designator: `P0003-06-04T12:30:05` or `P00030604T123005`.
fn parse_alternative(s: &str) -> IsoResult<Duration> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let Some(body) = unsigned.strip_prefix('P') else {
        return Err(IsoError::parse(
            "duration",
            s,
            "a duration must start with the P designator",
        ));
    };
    let datetime = parse_datetime(body)
        .map_err(|_| IsoError::parse("duration", s, "no ISO 8601 duration production matched"))?;
    if datetime.tz().is_some() {
        return Err(IsoError::parse(
            "duration",
            s,
            "a duration cannot carry a time-zone designator",
        ));
    }

    let date = datetime.date();
    let time = datetime.time();
    let micros =
        i128::from(date.day()) * MICROS_PER_DAY + i128::from(time.micros_of_day());
    let duration = Duration::new_unchecked(
        NominalDuration::new(date.year(), i32::from(date.month())),
        ExactDuration::from_micros(micros),
    );
    Ok(if negative { duration.negated() } else { duration })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designator_form() {
        let d = parse_duration("P1Y2M10DT2H30M").unwrap();
        assert_eq!(d.years(), 1);
        assert_eq!(d.months(), 2);
        assert_eq!(d.days(), 10);
        assert_eq!(d.seconds(), 2 * 3600 + 30 * 60);

        let d = parse_duration("PT36H").unwrap();
        assert_eq!(d.days(), 1);
        assert_eq!(d.seconds(), 12 * 3600);

        let d = parse_duration("P1D").unwrap();
        assert_eq!(d.days(), 1);
    }

    #[test]
    fn week_durations() {
        let d = parse_duration("P2W").unwrap();
        assert_eq!(d.days(), 14);
        assert!(d.is_whole_weeks());
        assert!(parse_duration("P1W2D").is_err());
        assert!(parse_duration("P1Y1W").is_err());

        let d = parse_duration("P2.5W").unwrap();
        assert_eq!(d.days(), 17);
        assert_eq!(d.seconds(), 12 * 3600);
    }

    #[test]
    fn signed_durations() {
        let d = parse_duration("-P1D").unwrap();
        assert!(d.is_negative());
        assert_eq!(d.days(), -1);

        let d = parse_duration("-P1Y1M").unwrap();
        assert_eq!((d.years(), d.months()), (-1, -1));

        assert_eq!(parse_duration("+P1D").unwrap(), parse_duration("P1D").unwrap());
    }

    #[test]
    fn fractions_on_the_lowest_component() {
        let d = parse_duration("PT1.5H").unwrap();
        assert_eq!(d.seconds(), 5400);

        let d = parse_duration("PT0.5S").unwrap();
        assert_eq!(d.microseconds(), 500_000);

        let d = parse_duration("PT1,5H").unwrap();
        assert_eq!(d.seconds(), 5400);

        assert!(parse_duration("PT0.5H30M").is_err());
        assert!(parse_duration("P0.5D1DT").is_err());
    }

    #[test]
    fn fractional_years_and_months_are_rejected() {
        assert!(parse_duration("P0.5Y").is_err());
        assert!(parse_duration("P1.5M").is_err());
    }

    #[test]
    fn empty_and_dangling_forms_are_rejected() {
        assert!(parse_duration("P").is_err());
        assert!(parse_duration("PT").is_err());
        assert!(parse_duration("P1DT").is_err());
        assert!(parse_duration("1D").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn alternative_form() {
        let d = parse_duration("P0003-06-04T12:30:05").unwrap();
        assert_eq!((d.years(), d.months(), d.days()), (3, 6, 4));
        assert_eq!(d.seconds(), 12 * 3600 + 30 * 60 + 5);

        assert_eq!(
            parse_duration("P00030604T123005").unwrap(),
            parse_duration("P0003-06-04T12:30:05").unwrap()
        );

        let d = parse_duration("-P0001-01-01T00:00:00").unwrap();
        assert_eq!((d.years(), d.months(), d.days()), (-1, -1, -1));
    }

    #[test]
    fn alternative_form_is_validated_as_a_datetime() {
        assert!(parse_duration("P0000-13-00T00:00:00").is_err());
        assert!(parse_duration("P0003-06-04T12:30:05Z").is_err());
        assert!(parse_duration("P0003-06-04").is_err());
    }
}
