/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::date_time::civil::CivilDateTime;
use crate::date_time::{DateTime, DateTimeFormatError, DateTimeParseError, NANOS_PER_SECOND};

pub(super) mod epoch_seconds {
    use super::*;

    /// Ok: "1576540098", "1576540098.52", "-0.5"
    pub(in crate::date_time) fn format(date_time: &DateTime) -> String {
        let mut buffer = itoa::Buffer::new();
        if date_time.subsecond_nanos == 0 {
            return buffer.format(date_time.seconds).to_string();
        }
        let total =
            date_time.seconds as i128 * NANOS_PER_SECOND as i128 + date_time.subsecond_nanos as i128;
        let magnitude = total.unsigned_abs();
        let mut out = String::new();
        if total < 0 {
            out.push('-');
        }
        out.push_str(buffer.format(magnitude / NANOS_PER_SECOND as u128));
        let fraction = (magnitude % NANOS_PER_SECOND as u128) as u32;
        if fraction != 0 {
            out.push('.');
            let digits = format!("{:09}", fraction);
            out.push_str(digits.trim_end_matches('0'));
        }
        out
    }

    pub(in crate::date_time) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let invalid = |reason| DateTimeParseError::new(reason);
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected decimal digits"));
        }
        let whole: i128 = whole
            .parse()
            .map_err(|_| invalid("seconds value out of range"))?;
        let fraction_nanos: u32 = match fraction {
            None => 0,
            Some(digits) if digits.is_empty() || digits.len() > 9 => {
                return Err(invalid("fraction must be 1-9 digits"));
            }
            Some(digits) => {
                if !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid("expected decimal digits in fraction"));
                }
                let parsed: u32 = digits.parse().expect("digits verified above");
                parsed * 10u32.pow(9 - digits.len() as u32)
            }
        };
        let sign = if negative { -1 } else { 1 };
        let total = sign * (whole * NANOS_PER_SECOND as i128 + fraction_nanos as i128);
        let seconds = total.div_euclid(NANOS_PER_SECOND as i128);
        let subsecond_nanos = total.rem_euclid(NANOS_PER_SECOND as i128) as u32;
        let seconds =
            i64::try_from(seconds).map_err(|_| invalid("seconds value out of range"))?;
        Ok(DateTime::from_secs_and_nanos(seconds, subsecond_nanos))
    }
}

pub(super) mod date_time {
    use super::*;

    /// Ok: "2019-12-16T23:48:18Z", "2019-12-16T23:48:18.52Z"
    pub(in crate::date_time) fn format(
        date_time: &DateTime,
    ) -> Result<String, DateTimeFormatError> {
        let civil = CivilDateTime::from_epoch(date_time.seconds, date_time.subsecond_nanos);
        if !(1..=9999).contains(&civil.year) {
            return Err(DateTimeFormatError::out_of_range(civil.year));
        }
        let mut out = String::with_capacity(32);
        push_padded(&mut out, civil.year as u32, 4);
        out.push('-');
        push_padded(&mut out, civil.month as u32, 2);
        out.push('-');
        push_padded(&mut out, civil.day as u32, 2);
        out.push('T');
        push_padded(&mut out, civil.hour as u32, 2);
        out.push(':');
        push_padded(&mut out, civil.minute as u32, 2);
        out.push(':');
        push_padded(&mut out, civil.second as u32, 2);
        if civil.subsecond_nanos != 0 {
            out.push('.');
            let digits = format!("{:09}", civil.subsecond_nanos);
            out.push_str(digits.trim_end_matches('0'));
        }
        out.push('Z');
        Ok(out)
    }

    /// Accepts `Z` and `+hh:mm`/`-hh:mm` offsets; offsets normalize to UTC.
    pub(in crate::date_time) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let invalid = |reason| DateTimeParseError::new(reason);
        if !s.is_ascii() {
            return Err(invalid("timestamp is not ASCII"));
        }
        let bytes = s.as_bytes();
        if bytes.len() < 20 {
            return Err(invalid("timestamp too short"));
        }
        if bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b'T' || bytes[13] != b':'
            || bytes[16] != b':'
        {
            return Err(invalid("incorrectly shaped timestamp"));
        }
        let mut civil = CivilDateTime {
            year: parse_digits(&bytes[0..4])? as i64,
            month: parse_digits(&bytes[5..7])? as u8,
            day: parse_digits(&bytes[8..10])? as u8,
            hour: parse_digits(&bytes[11..13])? as u8,
            minute: parse_digits(&bytes[14..16])? as u8,
            second: parse_digits(&bytes[17..19])? as u8,
            subsecond_nanos: 0,
        };
        let mut position = 19;
        if bytes[position] == b'.' {
            let fraction_start = position + 1;
            let mut fraction_end = fraction_start;
            while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
                fraction_end += 1;
            }
            let digit_count = fraction_end - fraction_start;
            if digit_count == 0 || digit_count > 9 {
                return Err(invalid("fraction must be 1-9 digits"));
            }
            let fraction = parse_digits(&bytes[fraction_start..fraction_end])?;
            civil.subsecond_nanos = fraction * 10u32.pow(9 - digit_count as u32);
            position = fraction_end;
        }
        let offset_seconds = match &bytes[position..] {
            b"Z" => 0i64,
            rest if rest.len() == 6 && (rest[0] == b'+' || rest[0] == b'-') && rest[3] == b':' => {
                let hours = parse_digits(&rest[1..3])? as i64;
                let minutes = parse_digits(&rest[4..6])? as i64;
                let magnitude = hours * 3600 + minutes * 60;
                if rest[0] == b'-' {
                    -magnitude
                } else {
                    magnitude
                }
            }
            _ => return Err(invalid("invalid timezone designator")),
        };
        if !civil.is_valid() {
            return Err(invalid("invalid calendar date"));
        }
        Ok(DateTime::from_secs_and_nanos(
            civil.to_epoch_seconds() - offset_seconds,
            civil.subsecond_nanos,
        ))
    }

    fn parse_digits(bytes: &[u8]) -> Result<u32, DateTimeParseError> {
        let mut value = 0u32;
        for byte in bytes {
            if !byte.is_ascii_digit() {
                return Err(DateTimeParseError::new("expected decimal digits"));
            }
            value = value * 10 + (byte - b'0') as u32;
        }
        Ok(value)
    }

    fn push_padded(out: &mut String, value: u32, width: usize) {
        let mut buffer = itoa::Buffer::new();
        let digits = buffer.format(value);
        for _ in digits.len()..width {
            out.push('0');
        }
        out.push_str(digits);
    }
}
