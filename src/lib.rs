//! The `isodate` crate parses and formats ISO 8601 dates, times,
//! datetimes, durations and time-zone designators.
//!
//! ```rust
//! use isodate::{parse_date, parse_duration, Date, Duration};
//! use core::str::FromStr;
//!
//! // Every ISO 8601 date production is understood, basic or extended.
//! let date = parse_date("2009-W01-1").unwrap();
//! assert_eq!(date, Date::try_new(2008, 12, 29).unwrap());
//!
//! // Durations keep years and months nominal, so month-end arithmetic
//! // clamps instead of overflowing into the next month.
//! let shift = Duration::from_str("P1M").unwrap();
//! let date = Date::try_new(2000, 1, 31).unwrap();
//! assert_eq!(date.add(&shift).unwrap(), Date::try_new(2000, 2, 29).unwrap());
//!
//! let round_trip = parse_duration("P1Y2M10DT2H30M").unwrap();
//! assert_eq!(round_trip.to_string(), "P1Y2M10DT2H30M");
//! ```
//!
//! Parsing is strict: the full input must match one ISO 8601 production
//! and every field must be in range, otherwise an [`IsoError::Parse`] is
//! returned with the rejected input and a reason. Formatting goes
//! through the `%`-directive templates in [`formatters::templates`], or
//! through the `Display` impls which emit the extended complete forms.
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,

    // Field widths are grammar-bounded before any narrowing cast.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

pub mod error;
pub mod formatters;
pub mod host;
pub mod parsers;

mod components;
mod grammar;
mod sys;
mod utils;

#[doc(inline)]
pub use components::{Date, DateTime, Duration, ExactDuration, NominalDuration, Time, TimeZone, UtcOffset};
#[doc(inline)]
pub use error::IsoError;
#[doc(inline)]
pub use formatters::{
    date_isoformat, datetime_isoformat, duration_isoformat, strftime, time_isoformat,
    tz_isoformat,
};
#[doc(inline)]
pub use host::HostTimeZone;
#[doc(inline)]
pub use parsers::{
    parse_date, parse_date_with, parse_datetime, parse_duration, parse_time, parse_tzinfo,
    DateParseOptions,
};
#[doc(inline)]
pub use sys::SystemTimeZone;

/// The result type used throughout the crate.
pub type IsoResult<T> = Result<T, IsoError>;
