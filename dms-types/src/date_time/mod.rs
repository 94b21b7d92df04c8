/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Instant-in-time representation used by timestamp-valued members.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod civil;
mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// An instant in time, with up to nanosecond precision.
///
/// The service transmits timestamps as epoch seconds with a fractional part;
/// `DateTime` stores them exactly so that round-tripping a response never
/// loses precision. Instants before the Unix epoch are represented with a
/// negative `seconds` value and a nanosecond offset that always counts
/// forward from that second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a whole number of seconds since the Unix epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from epoch seconds plus a fraction in `[0, 1)`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    /// Creates a `DateTime` from epoch seconds and a subsecond nanosecond count.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        assert!(
            subsecond_nanos < NANOS_PER_SECOND,
            "{} nanoseconds is more than a second",
            subsecond_nanos
        );
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from a fractional epoch-seconds value.
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        DateTime::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    /// Creates a `DateTime` from a [`SystemTime`].
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(after) => DateTime {
                seconds: after.as_secs() as i64,
                subsecond_nanos: after.subsec_nanos(),
            },
            Err(err) => {
                let before = err.duration();
                let mut seconds = -(before.as_secs() as i64);
                let mut subsecond_nanos = before.subsec_nanos();
                if subsecond_nanos != 0 {
                    seconds -= 1;
                    subsecond_nanos = NANOS_PER_SECOND - subsecond_nanos;
                }
                DateTime {
                    seconds,
                    subsecond_nanos,
                }
            }
        }
    }

    /// Parses a `DateTime` from a string rendered in the given [`Format`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::EpochSeconds => format::epoch_seconds::parse(s),
            Format::DateTime => format::date_time::parse(s),
        }
    }

    /// Whole seconds since the Unix epoch.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past [`DateTime::secs`].
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns true if this instant does not fall on a whole second.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// The epoch-seconds value as an `f64`, losing precision beyond 2^53.
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Renders this instant in the given [`Format`].
    ///
    /// Only [`Format::DateTime`] can fail, and only for years outside
    /// `1..=9999`, which the calendar rendering cannot express.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
            Format::DateTime => format::date_time::format(self),
        }
    }
}

/// The timestamp encodings spoken by the service protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 / ISO 8601, e.g. `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// Seconds since the Unix epoch with optional fraction, e.g. `1576540098.52`.
    EpochSeconds,
}

/// Error returned when a timestamp string cannot be parsed.
#[derive(Debug)]
pub struct DateTimeParseError {
    reason: &'static str,
}

impl DateTimeParseError {
    pub(crate) fn new(reason: &'static str) -> Self {
        DateTimeParseError { reason }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse timestamp: {}", self.reason)
    }
}

impl std::error::Error for DateTimeParseError {}

/// Error returned when an instant cannot be rendered in a calendar format.
#[derive(Debug)]
pub struct DateTimeFormatError {
    year: i64,
}

impl DateTimeFormatError {
    pub(crate) fn out_of_range(year: i64) -> Self {
        DateTimeFormatError { year }
    }
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year {} is outside the range 1-9999 and cannot be formatted",
            self.year
        )
    }
}

impl std::error::Error for DateTimeFormatError {}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn datetime_fmt() {
        let date_time = DateTime::from_epoch_seconds(1576540098);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let date_time = DateTime::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(
            date_time.fmt(Format::EpochSeconds).unwrap(),
            "1576540098.52"
        );
    }

    #[test]
    fn epoch_fmt_before_epoch() {
        let date_time = DateTime::from_secs_and_nanos(-1, 500_000_000);
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "-0.5");
        assert_eq!(date_time.as_secs_f64(), -0.5);
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            DateTime::from_str("1576540098", Format::EpochSeconds).unwrap(),
            DateTime::from_epoch_seconds(1576540098)
        );
        assert_eq!(
            DateTime::from_str("1576540098.52", Format::EpochSeconds).unwrap(),
            DateTime::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            DateTime::from_str("-0.5", Format::EpochSeconds).unwrap(),
            DateTime::from_secs_and_nanos(-1, 500_000_000)
        );
        assert!(DateTime::from_str("", Format::EpochSeconds).is_err());
        assert!(DateTime::from_str("12.34.56", Format::EpochSeconds).is_err());
    }

    #[test]
    fn parse_date_time() {
        assert_eq!(
            DateTime::from_str("2019-12-16T23:48:18Z", Format::DateTime).unwrap(),
            DateTime::from_epoch_seconds(1576540098)
        );
        assert_eq!(
            DateTime::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap(),
            DateTime::from_secs_and_nanos(1576540098, 520_000_000)
        );
        // Offset forms normalize to UTC.
        assert_eq!(
            DateTime::from_str("2019-12-17T01:48:18+02:00", Format::DateTime).unwrap(),
            DateTime::from_epoch_seconds(1576540098)
        );
        assert!(DateTime::from_str("2019-12-16 23:48:18Z", Format::DateTime).is_err());
        assert!(DateTime::from_str("2019-13-16T23:48:18Z", Format::DateTime).is_err());
    }

    #[test]
    fn system_time_before_epoch() {
        let system_time = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(
            DateTime::from_system_time(system_time),
            DateTime::from_secs_and_nanos(-2, 500_000_000)
        );
        let system_time = SystemTime::UNIX_EPOCH + Duration::from_secs(5);
        assert_eq!(
            DateTime::from_system_time(system_time),
            DateTime::from_epoch_seconds(5)
        );
    }

    #[test]
    fn format_out_of_range() {
        // Year 10000 and beyond has no four-digit rendering.
        let date_time = DateTime::from_epoch_seconds(253_402_300_800);
        assert!(date_time.fmt(Format::DateTime).is_err());
        assert!(date_time.fmt(Format::EpochSeconds).is_ok());
    }
}
