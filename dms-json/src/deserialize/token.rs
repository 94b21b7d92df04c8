/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::error::{DeserializeError, DeserializeErrorKind};
use crate::escape::unescape_string;
use dms_types::date_time::Format;
use dms_types::{DateTime, Number};
use std::borrow::Cow;

/// A byte offset into a JSON document, for error reporting.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Offset(pub usize);

impl Offset {
    /// Creates a custom error that points at this offset.
    pub fn error(&self, message: Cow<'static, str>) -> DeserializeError {
        DeserializeError::new(DeserializeErrorKind::Custom(message), Some(self.0))
    }
}

/// A JSON string in its escaped, borrowed form.
///
/// Unescaping allocates only when the string actually contains escapes, so
/// the common case borrows straight from the response buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    /// Wraps an already-escaped string slice.
    pub fn new(value: &'a str) -> EscapedStr<'a> {
        EscapedStr(value)
    }

    /// The escaped form.
    pub fn as_escaped_str(&self) -> &'a str {
        self.0
    }

    /// Unescapes and returns the represented string.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, DeserializeError> {
        Ok(unescape_string(self.0)?)
    }
}

/// One structural element of a JSON document.
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    /// The start of an array.
    StartArray {
        /// Offset of the `[`.
        offset: Offset,
    },
    /// The end of an array.
    EndArray {
        /// Offset of the `]`.
        offset: Offset,
    },
    /// The start of an object.
    StartObject {
        /// Offset of the `{`.
        offset: Offset,
    },
    /// The end of an object.
    EndObject {
        /// Offset of the `}`.
        offset: Offset,
    },
    /// An object member key.
    ObjectKey {
        /// Offset of the opening quote.
        offset: Offset,
        /// The key, still escaped.
        key: EscapedStr<'a>,
    },
    /// A boolean value.
    ValueBool {
        /// Offset of the literal.
        offset: Offset,
        /// The value.
        value: bool,
    },
    /// A `null` value.
    ValueNull {
        /// Offset of the literal.
        offset: Offset,
    },
    /// A number value.
    ValueNumber {
        /// Offset of the first digit or sign.
        offset: Offset,
        /// The value.
        value: Number,
    },
    /// A string value.
    ValueString {
        /// Offset of the opening quote.
        offset: Offset,
        /// The value, still escaped.
        value: EscapedStr<'a>,
    },
}

impl Token<'_> {
    /// The offset this token was read at.
    pub fn offset(&self) -> Offset {
        match self {
            Token::StartArray { offset }
            | Token::EndArray { offset }
            | Token::StartObject { offset }
            | Token::EndObject { offset }
            | Token::ObjectKey { offset, .. }
            | Token::ValueBool { offset, .. }
            | Token::ValueNull { offset }
            | Token::ValueNumber { offset, .. }
            | Token::ValueString { offset, .. } => *offset,
        }
    }
}

/// Creates a token iterator over a JSON document.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: Vec::new(),
        failed: false,
    }
}

#[derive(Copy, Clone, Debug)]
enum State {
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

/// Streaming tokenizer over a JSON byte slice.
///
/// After the first error, the iterator fuses and yields `None`.
#[derive(Debug)]
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
    failed: bool,
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, DeserializeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.advance() {
            Ok(None) => None,
            Ok(Some(token)) => Some(Ok(token)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a> JsonTokenIterator<'a> {
    fn advance(&mut self) -> Result<Option<Token<'a>>, DeserializeError> {
        self.skip_whitespace();
        match self.state_stack.last().copied() {
            None => {
                if self.index >= self.input.len() {
                    Ok(None)
                } else {
                    self.read_value().map(Some)
                }
            }
            Some(State::ArrayFirstValueOrEnd) => {
                if self.peek() == Some(b']') {
                    Ok(Some(self.end_array()))
                } else {
                    *self.top() = State::ArrayNextValueOrEnd;
                    self.read_value().map(Some)
                }
            }
            Some(State::ArrayNextValueOrEnd) => {
                if self.peek() == Some(b']') {
                    Ok(Some(self.end_array()))
                } else {
                    self.expect_byte(b',', ", or ]")?;
                    self.skip_whitespace();
                    self.read_value().map(Some)
                }
            }
            Some(State::ObjectFirstKeyOrEnd) => {
                if self.peek() == Some(b'}') {
                    Ok(Some(self.end_object()))
                } else {
                    *self.top() = State::ObjectFieldValue;
                    self.read_object_key().map(Some)
                }
            }
            Some(State::ObjectNextKeyOrEnd) => {
                if self.peek() == Some(b'}') {
                    Ok(Some(self.end_object()))
                } else {
                    self.expect_byte(b',', ", or }")?;
                    self.skip_whitespace();
                    *self.top() = State::ObjectFieldValue;
                    self.read_object_key().map(Some)
                }
            }
            Some(State::ObjectFieldValue) => {
                self.expect_byte(b':', ":")?;
                self.skip_whitespace();
                *self.top() = State::ObjectNextKeyOrEnd;
                self.read_value().map(Some)
            }
        }
    }

    fn read_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = Offset(self.index);
        match self.peek() {
            None => Err(self.eos()),
            Some(b'{') => {
                self.index += 1;
                self.state_stack.push(State::ObjectFirstKeyOrEnd);
                Ok(Token::StartObject { offset })
            }
            Some(b'[') => {
                self.index += 1;
                self.state_stack.push(State::ArrayFirstValueOrEnd);
                Ok(Token::StartArray { offset })
            }
            Some(b'"') => {
                let value = self.read_string()?;
                Ok(Token::ValueString { offset, value })
            }
            Some(b't') => {
                self.expect_literal("true")?;
                Ok(Token::ValueBool {
                    offset,
                    value: true,
                })
            }
            Some(b'f') => {
                self.expect_literal("false")?;
                Ok(Token::ValueBool {
                    offset,
                    value: false,
                })
            }
            Some(b'n') => {
                self.expect_literal("null")?;
                Ok(Token::ValueNull { offset })
            }
            Some(b'-') | Some(b'0'..=b'9') => {
                let value = self.read_number()?;
                Ok(Token::ValueNumber { offset, value })
            }
            Some(byte) => Err(self.unexpected(byte, "{, [, \", t, f, n, or a number")),
        }
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = Offset(self.index);
        match self.peek() {
            None => Err(self.eos()),
            Some(b'"') => {
                let key = self.read_string()?;
                Ok(Token::ObjectKey { offset, key })
            }
            Some(byte) => Err(self.unexpected(byte, "\"")),
        }
    }

    /// Scans a string token without unescaping it.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, DeserializeError> {
        let start = self.index;
        self.index += 1;
        loop {
            match self.peek() {
                None => return Err(self.eos()),
                Some(b'"') => {
                    let slice = &self.input[start + 1..self.index];
                    self.index += 1;
                    let value = std::str::from_utf8(slice)
                        .map_err(|err| DeserializeError::new(err.into(), Some(start + 1)))?;
                    return Ok(EscapedStr::new(value));
                }
                Some(b'\\') => self.index += 2,
                Some(byte) if byte < 0x20 => {
                    return Err(DeserializeError::new(
                        DeserializeErrorKind::UnexpectedControlCharacter(byte),
                        Some(self.index),
                    ));
                }
                Some(_) => self.index += 1,
            }
        }
    }

    fn read_number(&mut self) -> Result<Number, DeserializeError> {
        let start = self.index;
        if self.peek() == Some(b'-') {
            self.index += 1;
        }
        self.skip_digits();
        let mut float = false;
        if self.peek() == Some(b'.') {
            float = true;
            self.index += 1;
            self.skip_digits();
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            float = true;
            self.index += 1;
            if matches!(self.peek(), Some(b'+') | Some(b'-')) {
                self.index += 1;
            }
            self.skip_digits();
        }
        let invalid = DeserializeError::new(DeserializeErrorKind::InvalidNumber, Some(start));
        let text = std::str::from_utf8(&self.input[start..self.index])
            .expect("number tokens are ASCII");
        if float {
            return text.parse().map(Number::Float).map_err(|_| invalid);
        }
        if text.starts_with('-') {
            // Fall back to float on i64 overflow rather than failing.
            match text.parse::<i64>() {
                Ok(value) => Ok(Number::NegInt(value)),
                Err(_) => text.parse().map(Number::Float).map_err(|_| invalid),
            }
        } else {
            match text.parse::<u64>() {
                Ok(value) => Ok(Number::PosInt(value)),
                Err(_) => text.parse().map(Number::Float).map_err(|_| invalid),
            }
        }
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.index += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(
            self.peek(),
            Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n')
        ) {
            self.index += 1;
        }
    }

    fn expect_literal(&mut self, literal: &'static str) -> Result<(), DeserializeError> {
        if self.input[self.index..].starts_with(literal.as_bytes()) {
            self.index += literal.len();
            Ok(())
        } else {
            Err(DeserializeError::new(
                DeserializeErrorKind::ExpectedLiteral(literal.into()),
                Some(self.index),
            ))
        }
    }

    fn expect_byte(&mut self, byte: u8, expected: &'static str) -> Result<(), DeserializeError> {
        match self.peek() {
            None => Err(self.eos()),
            Some(actual) if actual == byte => {
                self.index += 1;
                Ok(())
            }
            Some(actual) => Err(self.unexpected(actual, expected)),
        }
    }

    fn end_array(&mut self) -> Token<'a> {
        let offset = Offset(self.index);
        self.index += 1;
        self.state_stack.pop();
        Token::EndArray { offset }
    }

    fn end_object(&mut self) -> Token<'a> {
        let offset = Offset(self.index);
        self.index += 1;
        self.state_stack.pop();
        Token::EndObject { offset }
    }

    fn top(&mut self) -> &mut State {
        self.state_stack.last_mut().expect("state stack is non-empty")
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn eos(&self) -> DeserializeError {
        DeserializeError::new(DeserializeErrorKind::UnexpectedEos, Some(self.index))
    }

    fn unexpected(&self, byte: u8, expected: &'static str) -> DeserializeError {
        DeserializeError::new(
            DeserializeErrorKind::UnexpectedToken(byte.into(), expected),
            Some(self.index),
        )
    }
}

type TokenResult<'a> = Option<Result<Token<'a>, DeserializeError>>;

fn unexpected_token(token: Token<'_>, expected: &'static str) -> DeserializeError {
    token.offset().error(Cow::Borrowed(expected))
}

fn unexpected_eos() -> DeserializeError {
    DeserializeError::new(DeserializeErrorKind::UnexpectedEos, None)
}

/// Requires the next token to open an object.
pub fn expect_start_object(token: TokenResult<'_>) -> Result<(), DeserializeError> {
    match token.transpose()? {
        Some(Token::StartObject { .. }) => Ok(()),
        Some(token) => Err(unexpected_token(token, "expected start of object")),
        None => Err(unexpected_eos()),
    }
}

/// Requires the next token to open an array.
pub fn expect_start_array(token: TokenResult<'_>) -> Result<(), DeserializeError> {
    match token.transpose()? {
        Some(Token::StartArray { .. }) => Ok(()),
        Some(token) => Err(unexpected_token(token, "expected start of array")),
        None => Err(unexpected_eos()),
    }
}

/// Reads a boolean value, mapping `null` to `None`.
pub fn expect_bool_or_null(token: TokenResult<'_>) -> Result<Option<bool>, DeserializeError> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueBool { value, .. }) => Ok(Some(value)),
        Some(token) => Err(unexpected_token(token, "expected bool or null")),
        None => Err(unexpected_eos()),
    }
}

/// Reads a number value, mapping `null` to `None`.
pub fn expect_number_or_null(token: TokenResult<'_>) -> Result<Option<Number>, DeserializeError> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { value, .. }) => Ok(Some(value)),
        Some(token) => Err(unexpected_token(token, "expected number or null")),
        None => Err(unexpected_eos()),
    }
}

/// Reads a string value, mapping `null` to `None`.
pub fn expect_string_or_null<'a>(
    token: TokenResult<'a>,
) -> Result<Option<EscapedStr<'a>>, DeserializeError> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueString { value, .. }) => Ok(Some(value)),
        Some(token) => Err(unexpected_token(token, "expected string or null")),
        None => Err(unexpected_eos()),
    }
}

/// Reads a timestamp value in the given format, mapping `null` to `None`.
pub fn expect_timestamp_or_null(
    token: TokenResult<'_>,
    format: Format,
) -> Result<Option<DateTime>, DeserializeError> {
    match (format, token.transpose()?) {
        (_, Some(Token::ValueNull { .. })) => Ok(None),
        (Format::EpochSeconds, Some(Token::ValueNumber { value, offset })) => match value {
            Number::PosInt(value) => i64::try_from(value)
                .map(|secs| Some(DateTime::from_epoch_seconds(secs)))
                .map_err(|_| offset.error(Cow::Borrowed("timestamp out of range"))),
            Number::NegInt(value) => Ok(Some(DateTime::from_epoch_seconds(value))),
            Number::Float(value) => Ok(Some(DateTime::from_secs_f64(value))),
        },
        (Format::DateTime, Some(Token::ValueString { value, offset })) => {
            let text = value.to_unescaped()?;
            DateTime::from_str(&text, format)
                .map(Some)
                .map_err(|err| offset.error(Cow::Owned(format!("{}", err))))
        }
        (_, Some(token)) => Err(unexpected_token(token, "expected timestamp or null")),
        (_, None) => Err(unexpected_eos()),
    }
}

/// Skips one complete value, however deeply nested.
pub fn skip_value<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, DeserializeError>>,
) -> Result<(), DeserializeError> {
    let mut depth = 0usize;
    loop {
        match tokens.next().transpose()? {
            None => return Err(unexpected_eos()),
            Some(token) => {
                match token {
                    Token::StartObject { .. } | Token::StartArray { .. } => depth += 1,
                    Token::EndObject { .. } | Token::EndArray { .. } if depth == 0 => {
                        return Err(unexpected_token(token, "expected value to skip"));
                    }
                    Token::EndObject { .. } | Token::EndArray { .. } => depth -= 1,
                    _ => {}
                }
                if depth == 0 {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(input: &str) -> Vec<Token<'_>> {
        json_token_iter(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(
            collect("true"),
            vec![Token::ValueBool {
                offset: Offset(0),
                value: true
            }]
        );
        assert_eq!(collect("null"), vec![Token::ValueNull { offset: Offset(0) }]);
        assert_eq!(
            collect(" \"hello\" "),
            vec![Token::ValueString {
                offset: Offset(1),
                value: EscapedStr::new("hello"),
            }]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            collect("5"),
            vec![Token::ValueNumber {
                offset: Offset(0),
                value: Number::PosInt(5)
            }]
        );
        assert_eq!(
            collect("-5"),
            vec![Token::ValueNumber {
                offset: Offset(0),
                value: Number::NegInt(-5)
            }]
        );
        assert_eq!(
            collect("1.5e2"),
            vec![Token::ValueNumber {
                offset: Offset(0),
                value: Number::Float(150.0)
            }]
        );
        // u64 overflow degrades to float rather than failing
        assert_eq!(
            collect("123456789012345678901234567890"),
            vec![Token::ValueNumber {
                offset: Offset(0),
                value: Number::Float(1.2345678901234568e29)
            }]
        );
        assert!(json_token_iter(b"-").next().unwrap().is_err());
    }

    #[test]
    fn objects_and_arrays() {
        assert_eq!(
            collect(r#"{"A":[1,{"B":null}],"C":{}}"#),
            vec![
                Token::StartObject { offset: Offset(0) },
                Token::ObjectKey {
                    offset: Offset(1),
                    key: EscapedStr::new("A")
                },
                Token::StartArray { offset: Offset(5) },
                Token::ValueNumber {
                    offset: Offset(6),
                    value: Number::PosInt(1)
                },
                Token::StartObject { offset: Offset(8) },
                Token::ObjectKey {
                    offset: Offset(9),
                    key: EscapedStr::new("B")
                },
                Token::ValueNull { offset: Offset(13) },
                Token::EndObject { offset: Offset(17) },
                Token::EndArray { offset: Offset(18) },
                Token::ObjectKey {
                    offset: Offset(20),
                    key: EscapedStr::new("C")
                },
                Token::StartObject { offset: Offset(24) },
                Token::EndObject { offset: Offset(25) },
                Token::EndObject { offset: Offset(26) },
            ]
        );
    }

    #[test]
    fn fuses_after_error() {
        let mut tokens = json_token_iter(b"[1,#]");
        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_ok());
        assert!(tokens.next().unwrap().is_err());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn rejects_control_characters_in_strings() {
        let result: Result<Vec<_>, _> = json_token_iter(b"\"a\x01b\"").collect();
        assert!(result.is_err());
    }

    #[test]
    fn escaped_strings_stay_escaped_until_asked() {
        let tokens = collect(r#""foo\nbar""#);
        match &tokens[0] {
            Token::ValueString { value, .. } => {
                assert_eq!(r"foo\nbar", value.as_escaped_str());
                assert_eq!("foo\nbar", value.to_unescaped().unwrap());
            }
            _ => panic!("expected string token"),
        }
    }

    #[test]
    fn expect_helpers() {
        let mut tokens = json_token_iter(b"{\"a\":null}");
        expect_start_object(tokens.next()).unwrap();
        tokens.next(); // key
        assert_eq!(None, expect_string_or_null(tokens.next()).unwrap());

        let mut tokens = json_token_iter(b"7");
        assert_eq!(
            Some(Number::PosInt(7)),
            expect_number_or_null(tokens.next()).unwrap()
        );

        let mut tokens = json_token_iter(b"false");
        assert_eq!(Some(false), expect_bool_or_null(tokens.next()).unwrap());

        // A dyadic fraction stays exact through the f64 token.
        let mut tokens = json_token_iter(b"1576540098.5");
        assert_eq!(
            Some(DateTime::from_secs_and_nanos(1576540098, 500_000_000)),
            expect_timestamp_or_null(tokens.next(), Format::EpochSeconds).unwrap()
        );

        let mut tokens = json_token_iter(b"\"2019-12-16T23:48:18Z\"");
        assert_eq!(
            Some(DateTime::from_epoch_seconds(1576540098)),
            expect_timestamp_or_null(tokens.next(), Format::DateTime).unwrap()
        );

        let mut tokens = json_token_iter(b"[]");
        assert!(expect_start_object(tokens.next()).is_err());
    }

    #[test]
    fn skips_nested_values() {
        let mut tokens = json_token_iter(br#"{"skip":{"a":[1,2,{"b":null}]},"keep":3}"#);
        expect_start_object(tokens.next()).unwrap();
        tokens.next(); // "skip" key
        skip_value(&mut tokens).unwrap();
        match tokens.next().unwrap().unwrap() {
            Token::ObjectKey { key, .. } => assert_eq!("keep", key.as_escaped_str()),
            token => panic!("unexpected token {:?}", token),
        }
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next().unwrap().unwrap(),
            Token::EndObject { .. }
        ));
        assert!(tokens.next().is_none());
    }
}
