//! The ISO 8601 value objects.
//!
//! All of them are immutable: parsers and constructors create them,
//! arithmetic returns new values, and equality and hashing go by field
//! value.

mod date;
mod datetime;
pub(crate) mod duration;
mod time;
mod timezone;

#[doc(inline)]
pub use date::Date;
#[doc(inline)]
pub use datetime::DateTime;
#[doc(inline)]
pub use duration::{Duration, ExactDuration, NominalDuration};
#[doc(inline)]
pub use time::Time;
#[doc(inline)]
pub use timezone::{TimeZone, UtcOffset};
