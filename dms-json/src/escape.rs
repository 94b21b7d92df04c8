/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum EscapeErrorKind {
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    InvalidUtf8,
    UnexpectedEndOfString,
}

/// Error unescaping a JSON string.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct EscapeError {
    kind: EscapeErrorKind,
}

impl std::error::Error for EscapeError {}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeErrorKind::*;
        match &self.kind {
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON string"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl From<EscapeErrorKind> for EscapeError {
    fn from(kind: EscapeErrorKind) -> Self {
        Self { kind }
    }
}

/// Escapes a string for embedding in a JSON string value.
///
/// Returns the input unchanged when nothing needs escaping.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    if !value
        .bytes()
        .any(|byte| matches!(byte, 0..=0x1F | b'"' | b'\\'))
    {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    for chr in value.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            chr if (chr as u32) < 0x20 => {
                escaped.push_str(&format!("\\u{:04x}", chr as u32));
            }
            chr => escaped.push(chr),
        }
    }
    Cow::Owned(escaped)
}

/// Unescapes a JSON-escaped string.
///
/// Returns the input reference directly when it contains no escapes.
pub(crate) fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !value.contains('\\') {
        return Ok(Cow::Borrowed(value));
    }

    let bytes = value.as_bytes();
    let mut unescaped: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] != b'\\' {
            unescaped.push(bytes[index]);
            index += 1;
            continue;
        }
        let escape = *bytes
            .get(index + 1)
            .ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
        match escape {
            b'"' => unescaped.push(b'"'),
            b'\\' => unescaped.push(b'\\'),
            b'/' => unescaped.push(b'/'),
            b'b' => unescaped.push(0x08),
            b'f' => unescaped.push(0x0C),
            b'n' => unescaped.push(b'\n'),
            b'r' => unescaped.push(b'\r'),
            b't' => unescaped.push(b'\t'),
            b'u' => {
                index += read_unicode_escape(&bytes[index..], &mut unescaped)?;
                continue;
            }
            other => return Err(EscapeErrorKind::InvalidEscapeCharacter(other.into()).into()),
        }
        index += 2;
    }
    String::from_utf8(unescaped)
        .map(Cow::Owned)
        .map_err(|_| EscapeErrorKind::InvalidUtf8.into())
}

fn read_codepoint(bytes: &[u8]) -> Result<u16, EscapeError> {
    if bytes.len() < 6 {
        return Err(EscapeErrorKind::UnexpectedEndOfString.into());
    }
    if &bytes[0..2] != b"\\u" {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(
            String::from_utf8_lossy(&bytes[0..6]).into(),
        )
        .into());
    }
    let hex = std::str::from_utf8(&bytes[2..6]).map_err(|_| EscapeErrorKind::InvalidUtf8)?;
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(hex.into()).into());
    }
    Ok(u16::from_str_radix(hex, 16).expect("validated hex digits"))
}

/// Reads one `\uXXXX` escape, or two when the first is a high surrogate.
/// Returns the number of input bytes consumed.
fn read_unicode_escape(bytes: &[u8], into: &mut Vec<u8>) -> Result<usize, EscapeError> {
    let high = read_codepoint(bytes)?;
    let (consumed, chr) = if (0xD800..0xDC00).contains(&high) {
        let low = read_codepoint(&bytes[6..])?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(EscapeErrorKind::InvalidSurrogatePair(high, low).into());
        }
        let codepoint = 0x10000 + (high as u32 - 0xD800) * 0x400 + (low as u32 - 0xDC00);
        let chr = char::from_u32(codepoint)
            .ok_or(EscapeErrorKind::InvalidSurrogatePair(high, low))?;
        (12, chr)
    } else {
        let chr = char::from_u32(high as u32).ok_or_else(|| {
            EscapeErrorKind::InvalidUnicodeEscape(String::from_utf8_lossy(&bytes[0..6]).into())
        })?;
        (6, chr)
    };
    let mut utf8 = [0u8; 4];
    into.extend_from_slice(chr.encode_utf8(&mut utf8).as_bytes());
    Ok(consumed)
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, EscapeErrorKind};
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r"foo\\bar", escape_string(r"foo\bar").as_ref());
        assert_eq!(
            r"\bf\fo\to\r\n",
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
    }

    #[test]
    fn unescape_borrows_when_unescaped() {
        let unescaped = unescape_string("test test").unwrap();
        assert_eq!("test test", unescaped);
        assert!(matches!(unescaped, Cow::Borrowed(_)));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\x08f\x0Co\to\r\n",
            unescape_string(r"\bf\fo\to\r\n").unwrap()
        );
        assert_eq!("\"test\"", unescape_string(r#"\"test\""#).unwrap());
        assert_eq!("\x00", unescape_string("\\u0000").unwrap());
        assert_eq!("foo\r\nbar", unescape_string("foo\\r\\nbar").unwrap());
        assert_eq!("\u{10437}", unescape_string("\\uD801\\uDC37").unwrap());

        assert_eq!(
            Err(EscapeErrorKind::UnexpectedEndOfString.into()),
            unescape_string("\\")
        );
        assert_eq!(
            Err(EscapeErrorKind::UnexpectedEndOfString.into()),
            unescape_string("\\u00")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidEscapeCharacter('z').into()),
            unescape_string("\\z")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidSurrogatePair(0xD801, 0xC501).into()),
            unescape_string("\\uD801\\uC501")
        );
        assert_eq!(
            Err(EscapeErrorKind::InvalidUnicodeEscape("+04D".into()).into()),
            unescape_string("\\u+04D")
        );
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            let serde_escaped = serde_json::to_string(&s).unwrap();
            let serde_escaped = &serde_escaped[1..(serde_escaped.len() - 1)];
            assert_eq!(serde_escaped, escape_string(&s));
        }

        #[test]
        fn round_trip(chr in proptest::char::any()) {
            let original = String::from(chr);
            let escaped = escape_string(&original);
            let unescaped = unescape_string(&escaped).unwrap();
            assert_eq!(original, unescaped);
        }
    }
}
