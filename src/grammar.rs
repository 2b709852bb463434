//! The fixed grammar of ISO 8601 productions, one anchored regex per
//! production.
//!
//! Parsers walk the relevant table in order and take the first pattern
//! whose full match succeeds, so complete forms always win over reduced
//! forms. The default date table (four year digits, no expansion) and
//! the time, time-zone and duration patterns are compiled once; date
//! tables for other year widths are built on demand.

use std::sync::LazyLock;

use regex::Regex;

use crate::{error::IsoError, IsoResult};

/// A compiled date production together with its separator form.
/// `extended` is `None` for the reduced year and century forms, which
/// contain no separator at all.
pub(crate) struct DatePattern {
    pub(crate) regex: Regex,
    pub(crate) extended: Option<bool>,
}

/// A compiled time production. The hour-only reduction carries no
/// separator, so its form is `None`.
pub(crate) struct TimePattern {
    pub(crate) regex: Regex,
    pub(crate) extended: Option<bool>,
}

fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("grammar patterns are fixed and must compile")
}

/// Builds the date pattern table for a given year width. A sign is
/// optional for four-digit years and mandatory once the year is wider.
pub(crate) fn build_date_patterns(year_digits: u8, expanded: bool) -> IsoResult<Vec<DatePattern>> {
    if year_digits < 4 {
        return Err(IsoError::parse(
            "date",
            "",
            "a date grammar needs at least four year digits",
        ));
    }
    if !expanded && year_digits != 4 {
        return Err(IsoError::parse(
            "date",
            "",
            "years wider than four digits require the expanded grammar",
        ));
    }
    let sign = if expanded {
        "(?P<sign>[+-])"
    } else {
        "(?P<sign>[+-])?"
    };
    let year = format!("(?P<year>[0-9]{{{year_digits}}})");
    let century = format!("(?P<century>[0-9]{{{}}})", year_digits - 2);

    let table = [
        // Complete calendar dates.
        (format!("{year}-(?P<month>[0-9]{{2}})-(?P<day>[0-9]{{2}})"), Some(true)),
        (format!("{year}(?P<month>[0-9]{{2}})(?P<day>[0-9]{{2}})"), Some(false)),
        // Complete week dates.
        (format!("{year}-W(?P<week>[0-9]{{2}})-(?P<weekday>[0-9])"), Some(true)),
        (format!("{year}W(?P<week>[0-9]{{2}})(?P<weekday>[0-9])"), Some(false)),
        // Ordinal dates.
        (format!("{year}-(?P<ordinal>[0-9]{{3}})"), Some(true)),
        (format!("{year}(?P<ordinal>[0-9]{{3}})"), Some(false)),
        // Reduced week dates (weekday defaults to Monday).
        (format!("{year}-W(?P<week>[0-9]{{2}})"), Some(true)),
        (format!("{year}W(?P<week>[0-9]{{2}})"), Some(false)),
        // Reduced month form. The basic variant is not part of the
        // grammar: without separators it cannot be told apart from the
        // six-digit YYMMDD form.
        (format!("{year}-(?P<month>[0-9]{{2}})"), Some(true)),
        // Year and century reductions.
        (year.clone(), None),
        (century, None),
    ];

    Ok(table
        .into_iter()
        .map(|(body, extended)| DatePattern {
            regex: compiled(&format!("^{sign}{body}$")),
            extended,
        })
        .collect())
}

/// The default date table: four year digits, sign optional.
pub(crate) static DATE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    build_date_patterns(4, false).expect("the default date grammar is valid")
});

/// A fraction (`.` or `,` separated) is accepted on the lowest field of
/// every time production; a time-zone designator may trail any of them.
const FRACTION: &str = r"(?P<frac>[.,][0-9]+)?";
const TZ_SUFFIX: &str = "(?P<tz>Z|[+-][0-9]{2}(?::?[0-9]{2})?)?";

pub(crate) static TIME_PATTERNS: LazyLock<Vec<TimePattern>> = LazyLock::new(|| {
    let table = [
        (
            format!("(?P<hour>[0-9]{{2}}):(?P<minute>[0-9]{{2}}):(?P<second>[0-9]{{2}}){FRACTION}"),
            Some(true),
        ),
        (
            format!("(?P<hour>[0-9]{{2}})(?P<minute>[0-9]{{2}})(?P<second>[0-9]{{2}}){FRACTION}"),
            Some(false),
        ),
        (
            format!("(?P<hour>[0-9]{{2}}):(?P<minute>[0-9]{{2}}){FRACTION}"),
            Some(true),
        ),
        (
            format!("(?P<hour>[0-9]{{2}})(?P<minute>[0-9]{{2}}){FRACTION}"),
            Some(false),
        ),
        (format!("(?P<hour>[0-9]{{2}}){FRACTION}"), None),
    ];
    table
        .into_iter()
        .map(|(body, extended)| TimePattern {
            regex: compiled(&format!("^{body}{TZ_SUFFIX}$")),
            extended,
        })
        .collect()
});

/// Time-zone designator: `Z`, `±hh:mm`, `±hhmm` or `±hh`.
pub(crate) static TZ_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compiled("^(?:(?P<utc>Z)|(?P<sign>[+-])(?P<hours>[0-9]{2})(?::?(?P<minutes>[0-9]{2}))?)$")
});

/// Designator-form duration. Presence and combination rules (at least
/// one component, `W` standalone, fraction placement) are checked by the
/// parser on top of this shape.
pub(crate) static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const COMPONENT: &str = "[0-9]+(?:[.,][0-9]+)?";
    compiled(&format!(
        "^(?P<sign>[+-])?P\
         (?:(?P<years>{COMPONENT})Y)?\
         (?:(?P<months>{COMPONENT})M)?\
         (?:(?P<weeks>{COMPONENT})W)?\
         (?:(?P<days>{COMPONENT})D)?\
         (?:T\
         (?:(?P<hours>{COMPONENT})H)?\
         (?:(?P<minutes>{COMPONENT})M)?\
         (?:(?P<seconds>{COMPONENT})S)?\
         )?$"
    ))
});
