//! Operating-system implementation of the host hooks.

use chrono::{Local, Offset};

use crate::{components::UtcOffset, host::HostTimeZone, IsoResult};

/// A [`HostTimeZone`] backed by the operating system's zone database,
/// observed through `chrono`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemTimeZone;

impl HostTimeZone for SystemTimeZone {
    fn host_utc_offset(&self) -> IsoResult<UtcOffset> {
        let seconds = Local::now().offset().fix().local_minus_utc();
        UtcOffset::from_seconds(seconds)
    }
}
