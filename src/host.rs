//! Host hooks for the local time zone.
//!
//! [`TimeZone::Local`][crate::TimeZone::Local] stands for "whatever the
//! machine is configured to"; resolving it is a host concern, not a
//! parsing one. Implement [`HostTimeZone`] to supply that answer, or use
//! [`SystemTimeZone`][crate::SystemTimeZone] which asks the operating
//! system.

use crate::{components::UtcOffset, IsoResult};

/// A source for the host machine's current UTC offset.
pub trait HostTimeZone {
    /// The offset from UTC currently in effect on the host.
    fn host_utc_offset(&self) -> IsoResult<UtcOffset>;

    /// Whether daylight saving time is currently in effect on the host.
    fn host_is_dst(&self) -> bool {
        false
    }
}

/// The unit host reports UTC and never observes daylight saving. Useful
/// in tests and on hosts with no zone configuration.
impl HostTimeZone for () {
    fn host_utc_offset(&self) -> IsoResult<UtcOffset> {
        Ok(UtcOffset::default())
    }
}
