//! ISO 8601 formatting.
//!
//! Formats are plain strings over a small `%`-directive alphabet,
//! interpreted by [`strftime`]. The named constants in [`templates`]
//! cover every standard production; the `*_isoformat` functions apply
//! the canonical defaults.

use std::fmt::Write;

use crate::{
    components::{Date, DateTime, Duration, Time, TimeZone},
    error::IsoError,
    IsoResult,
};

/// Format strings for the standard ISO 8601 productions.
///
/// `BAS` constants produce the basic (separator-free) form and `EXT`
/// constants the extended form. The `D_ALT` constants produce the
/// alternative duration form `P<datetime>`.
pub mod templates {
    pub const DATE_BAS_COMPLETE: &str = "%Y%m%d";
    pub const DATE_EXT_COMPLETE: &str = "%Y-%m-%d";
    pub const DATE_BAS_ORD_COMPLETE: &str = "%Y%j";
    pub const DATE_EXT_ORD_COMPLETE: &str = "%Y-%j";
    pub const DATE_BAS_WEEK: &str = "%YW%W";
    pub const DATE_EXT_WEEK: &str = "%Y-W%W";
    pub const DATE_BAS_WEEK_COMPLETE: &str = "%YW%W%w";
    pub const DATE_EXT_WEEK_COMPLETE: &str = "%Y-W%W-%w";
    pub const DATE_BAS_MONTH: &str = "%Y%m";
    pub const DATE_EXT_MONTH: &str = "%Y-%m";
    pub const DATE_YEAR: &str = "%Y";
    pub const DATE_CENTURY: &str = "%C";

    pub const TIME_BAS_COMPLETE: &str = "%H%M%S";
    pub const TIME_EXT_COMPLETE: &str = "%H:%M:%S";
    pub const TIME_BAS_MINUTE: &str = "%H%M";
    pub const TIME_EXT_MINUTE: &str = "%H:%M";
    pub const TIME_HOUR: &str = "%H";

    pub const TZ_BAS: &str = "%z";
    pub const TZ_EXT: &str = "%Z";
    pub const TZ_HOUR: &str = "%h";

    pub const DT_BAS_COMPLETE: &str = "%Y%m%dT%H%M%S%z";
    pub const DT_EXT_COMPLETE: &str = "%Y-%m-%dT%H:%M:%S%Z";
    pub const DT_BAS_ORD_COMPLETE: &str = "%Y%jT%H%M%S%z";
    pub const DT_EXT_ORD_COMPLETE: &str = "%Y-%jT%H:%M:%S%Z";
    pub const DT_BAS_WEEK_COMPLETE: &str = "%YW%W%wT%H%M%S%z";
    pub const DT_EXT_WEEK_COMPLETE: &str = "%Y-W%W-%wT%H:%M:%S%Z";

    pub const D_DEFAULT: &str = "P%P";
    pub const D_WEEK: &str = "P%pW";
    pub const D_ALT_BAS: &str = "P%Y%m%dT%H%M%S";
    pub const D_ALT_EXT: &str = "P%Y-%m-%dT%H:%M:%S";
    pub const D_ALT_BAS_ORD: &str = "P%Y%jT%H%M%S";
    pub const D_ALT_EXT_ORD: &str = "P%Y-%jT%H:%M:%S";
}

// ==== Values ====

/// A borrowed value to format. All [`strftime`] inputs convert into
/// this.
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Date(&'a Date),
    Time(&'a Time),
    DateTime(&'a DateTime),
    Duration(&'a Duration),
}

impl<'a> From<&'a Date> for Value<'a> {
    fn from(value: &'a Date) -> Self {
        Self::Date(value)
    }
}

impl<'a> From<&'a Time> for Value<'a> {
    fn from(value: &'a Time) -> Self {
        Self::Time(value)
    }
}

impl<'a> From<&'a DateTime> for Value<'a> {
    fn from(value: &'a DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<'a> From<&'a Duration> for Value<'a> {
    fn from(value: &'a Duration) -> Self {
        Self::Duration(value)
    }
}

impl<'a> Value<'a> {
    fn date(&self) -> Option<Date> {
        match self {
            Self::Date(date) => Some(**date),
            Self::DateTime(datetime) => Some(datetime.date()),
            Self::Time(_) | Self::Duration(_) => None,
        }
    }

    fn time(&self) -> Option<&'a Time> {
        match *self {
            Self::Time(time) => Some(time),
            Self::DateTime(datetime) => Some(datetime.time()),
            Self::Date(_) | Self::Duration(_) => None,
        }
    }

    fn duration(&self) -> Option<&'a Duration> {
        match *self {
            Self::Duration(duration) => Some(duration),
            _ => None,
        }
    }

    fn tz(&self) -> Option<&'a TimeZone> {
        self.time().and_then(Time::tz)
    }
}

// ==== The directive interpreter ====

/// Renders `value` through `format`, a string over the directive
/// alphabet `%Y %C %m %d %j %w %W %H %M %S %f %z %Z %h %P %p %%`.
///
/// Date directives apply to dates and datetimes; time directives to
/// times, datetimes and durations; `%Y`, `%m` and `%d` double as the
/// year, month and day counts of a duration (for the `D_ALT` forms).
/// The offset directives `%z` (basic), `%Z` (extended) and `%h`
/// (hour-only) render nothing when the value carries no time zone. A
/// directive that does not apply to the value kind is an error.
pub fn strftime<'a>(value: impl Into<Value<'a>>, format: &str) -> IsoResult<String> {
    let value = value.into();
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(directive) = chars.next() else {
            return Err(IsoError::format("%", "a format cannot end with a bare '%'"));
        };
        match directive {
            '%' => out.push('%'),
            'Y' => match value {
                Value::Duration(d) => write_padded(&mut out, i64::from(d.years()), 4),
                _ => out.push_str(&format_year(date_part(&value, "%Y")?.year())),
            },
            'C' => {
                let century = date_part(&value, "%C")?.year().div_euclid(100);
                out.push_str(&if (0..=99).contains(&century) {
                    format!("{century:02}")
                } else {
                    format!("{century:+03}")
                });
            }
            'm' => match value {
                Value::Duration(d) => write_padded(&mut out, i64::from(d.months()), 2),
                _ => write_padded(&mut out, i64::from(date_part(&value, "%m")?.month()), 2),
            },
            'd' => match value {
                Value::Duration(d) => write_padded(&mut out, d.days(), 2),
                _ => write_padded(&mut out, i64::from(date_part(&value, "%d")?.day()), 2),
            },
            'j' => write_padded(&mut out, i64::from(date_part(&value, "%j")?.day_of_year()), 3),
            'w' => write_padded(
                &mut out,
                i64::from(date_part(&value, "%w")?.iso_week_date().2),
                1,
            ),
            'W' => write_padded(
                &mut out,
                i64::from(date_part(&value, "%W")?.iso_week_date().1),
                2,
            ),
            'H' => match value {
                Value::Duration(d) => write_padded(&mut out, d.seconds() / 3600, 2),
                _ => write_padded(&mut out, i64::from(time_part(&value, "%H")?.hour() % 24), 2),
            },
            'M' => match value {
                Value::Duration(d) => write_padded(&mut out, d.seconds() % 3600 / 60, 2),
                _ => write_padded(&mut out, i64::from(time_part(&value, "%M")?.minute()), 2),
            },
            'S' => match value {
                Value::Duration(d) => write_padded(&mut out, d.seconds() % 60, 2),
                _ => write_padded(&mut out, i64::from(time_part(&value, "%S")?.second()), 2),
            },
            'f' => match value {
                Value::Duration(d) => {
                    write_padded(&mut out, i64::from(d.microseconds()), 6);
                }
                _ => write_padded(
                    &mut out,
                    i64::from(time_part(&value, "%f")?.microsecond()),
                    6,
                ),
            },
            'z' => out.push_str(&offset_designator(&value, "%z", Separator::None)?),
            'Z' => out.push_str(&offset_designator(&value, "%Z", Separator::Colon)?),
            'h' => out.push_str(&offset_designator(&value, "%h", Separator::HourOnly)?),
            'P' => {
                let duration = value
                    .duration()
                    .ok_or_else(|| IsoError::format("%P", "only durations have a designator body"))?;
                if !duration.has_uniform_sign() {
                    return Err(IsoError::format(
                        "%P",
                        "components with mixed signs have no designator form",
                    ));
                }
                out.push_str(&designator_body(duration));
            }
            'p' => {
                let duration = value
                    .duration()
                    .ok_or_else(|| IsoError::format("%p", "only durations have a week count"))?;
                write_padded(&mut out, (duration.days() / 7).abs(), 1);
            }
            other => {
                return Err(IsoError::format(
                    format!("%{other}"),
                    "unknown format directive",
                ))
            }
        }
    }
    Ok(out)
}

fn date_part(value: &Value<'_>, directive: &'static str) -> IsoResult<Date> {
    value
        .date()
        .ok_or_else(|| IsoError::format(directive, "the value has no date part"))
}

fn time_part<'a>(value: &Value<'a>, directive: &'static str) -> IsoResult<&'a Time> {
    value
        .time()
        .ok_or_else(|| IsoError::format(directive, "the value has no time part"))
}

fn write_padded(out: &mut String, value: i64, width: usize) {
    let _ = write!(out, "{value:0width$}");
}

enum Separator {
    None,
    Colon,
    HourOnly,
}

fn offset_designator(
    value: &Value<'_>,
    directive: &'static str,
    separator: Separator,
) -> IsoResult<String> {
    let Some(tz) = value.tz() else {
        // A value without a designator formats as a naive value.
        return Ok(String::new());
    };
    if matches!(tz, TimeZone::Utc) {
        return Ok("Z".to_owned());
    }
    let offset = tz.utc_offset().map_err(|_| {
        IsoError::format(directive, "the host reports no usable local offset")
    })?;
    let total = offset.total_minutes();
    let sign = if total < 0 { '-' } else { '+' };
    let (hours, minutes) = ((total / 60).abs(), (total % 60).abs());
    Ok(match separator {
        Separator::None => format!("{sign}{hours:02}{minutes:02}"),
        Separator::Colon => format!("{sign}{hours:02}:{minutes:02}"),
        Separator::HourOnly => format!("{sign}{hours:02}"),
    })
}

// ==== Years and duration bodies ====

/// Renders a year: four zero-padded digits, with a sign once the year
/// leaves `0..=9999`.
pub(crate) fn format_year(year: i32) -> String {
    if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+05}")
    }
}

/// The designator-form body after `P`, with zero components elided.
/// Whole-week durations render as `nW`; the zero duration as `0D`.
/// Components print with the signs they carry; callers negate a
/// uniformly negative duration first and prepend the `-` themselves.
fn designator_body(duration: &Duration) -> String {
    if duration.is_whole_weeks() {
        return format!("{}W", duration.days() / 7);
    }

    let (hours, rem) = (duration.seconds() / 3600, duration.seconds() % 3600);
    let (minutes, seconds) = (rem / 60, rem % 60);
    let micros = duration.microseconds();

    let mut out = String::new();
    for (count, unit) in [
        (i64::from(duration.years()), 'Y'),
        (i64::from(duration.months()), 'M'),
        (duration.days(), 'D'),
    ] {
        if count != 0 {
            let _ = write!(out, "{count}{unit}");
        }
    }
    if hours != 0 || minutes != 0 || seconds != 0 || micros != 0 {
        out.push('T');
        if hours != 0 {
            let _ = write!(out, "{hours}H");
        }
        if minutes != 0 {
            let _ = write!(out, "{minutes}M");
        }
        if seconds != 0 || micros != 0 {
            if micros == 0 {
                let _ = write!(out, "{seconds}S");
            } else {
                // The exact half is one microsecond count, so its
                // seconds and sub-second micros always share a sign.
                let frac = format!("{:06}", micros.abs());
                let whole = if seconds == 0 && micros < 0 {
                    "-0".to_owned()
                } else {
                    seconds.to_string()
                };
                let _ = write!(out, "{whole}.{}S", frac.trim_end_matches('0'));
            }
        }
    }
    if out.is_empty() {
        out.push_str("0D");
    }
    out
}

/// The canonical rendering used by `Duration`'s `Display`. A duration
/// whose fields do not share a sign has no ISO 8601 designator form:
/// it renders with per-component signs, which no parser accepts back.
pub(crate) fn duration_display(duration: &Duration) -> String {
    if !duration.has_uniform_sign() {
        return format!("P{}", designator_body(duration));
    }
    let sign = if duration.is_negative() { "-" } else { "" };
    let body = designator_body(&if duration.is_negative() {
        duration.negated()
    } else {
        *duration
    });
    format!("{sign}P{body}")
}

// ==== Canonical defaults ====

/// Formats a date in the extended complete form, `YYYY-MM-DD`.
pub fn date_isoformat(date: &Date) -> IsoResult<String> {
    date_isoformat_with(date, templates::DATE_EXT_COMPLETE)
}

pub fn date_isoformat_with(date: &Date, format: &str) -> IsoResult<String> {
    strftime(date, format)
}

/// Formats a time in the extended complete form, `hh:mm:ss`, with its
/// designator when one is attached. The end-of-day marker renders as
/// `00:00:00`; hour 24 is never emitted.
pub fn time_isoformat(time: &Time) -> IsoResult<String> {
    let format = format!("{}{}", templates::TIME_EXT_COMPLETE, templates::TZ_EXT);
    time_isoformat_with(time, &format)
}

pub fn time_isoformat_with(time: &Time, format: &str) -> IsoResult<String> {
    strftime(time, format)
}

/// Formats a datetime in the extended complete form with its designator.
pub fn datetime_isoformat(datetime: &DateTime) -> IsoResult<String> {
    datetime_isoformat_with(datetime, templates::DT_EXT_COMPLETE)
}

pub fn datetime_isoformat_with(datetime: &DateTime, format: &str) -> IsoResult<String> {
    strftime(datetime, format)
}

/// Formats a duration in the designator form. Whole-week durations come
/// out as `PnW` and the zero duration as `P0D`; a negative duration gets
/// a leading `-` and its components are formatted by magnitude. A
/// duration whose fields do not share a sign is an error: the single
/// leading sign cannot express it, and any string this function emitted
/// would re-parse as a different value.
pub fn duration_isoformat(duration: &Duration) -> IsoResult<String> {
    duration_isoformat_with(duration, templates::D_DEFAULT)
}

pub fn duration_isoformat_with(duration: &Duration, format: &str) -> IsoResult<String> {
    if !duration.has_uniform_sign() {
        return Err(IsoError::format(
            format,
            "components with mixed signs have no ISO 8601 rendering",
        ));
    }
    let negative = duration.is_negative();
    let positive = if negative {
        duration.negated()
    } else {
        *duration
    };
    let body = strftime(&positive, format)?;
    Ok(if negative { format!("-{body}") } else { body })
}

/// Formats the time-zone designator of a time or datetime in the
/// extended form. A value without a designator is an error here, unlike
/// inside a larger format.
pub fn tz_isoformat<'a>(value: impl Into<Value<'a>>) -> IsoResult<String> {
    tz_isoformat_with(value, templates::TZ_EXT)
}

pub fn tz_isoformat_with<'a>(value: impl Into<Value<'a>>, format: &str) -> IsoResult<String> {
    let value = value.into();
    if value.tz().is_none() {
        return Err(IsoError::format(
            format,
            "the value carries no time-zone designator",
        ));
    }
    strftime(value, format)
}

// ==== Tests ====
