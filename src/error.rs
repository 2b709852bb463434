//! The error type shared by all parsing and formatting entry points.

use thiserror::Error;

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IsoError {
    /// The input is not a valid ISO 8601 production for the target type,
    /// or a field is out of range.
    #[error("invalid ISO 8601 {target} {input:?}: {reason}")]
    Parse {
        /// What was being parsed: `"date"`, `"time"`, `"datetime"`,
        /// `"duration"` or `"tzinfo"`.
        target: &'static str,
        /// The rejected input.
        input: String,
        reason: &'static str,
    },

    /// A format directive does not apply to the value being formatted.
    #[error("cannot format directive {directive:?}: {reason}")]
    Format {
        directive: String,
        reason: &'static str,
    },

    /// Two durations with differing nominal (year/month) parts have no
    /// defined ordering.
    #[error("durations with differing year/month parts are incomparable")]
    IncomparableDurations,
}

impl IsoError {
    pub(crate) fn parse(target: &'static str, input: impl Into<String>, reason: &'static str) -> Self {
        Self::Parse {
            target,
            input: input.into(),
            reason,
        }
    }

    pub(crate) fn format(directive: impl Into<String>, reason: &'static str) -> Self {
        Self::Format {
            directive: directive.into(),
            reason,
        }
    }
}
