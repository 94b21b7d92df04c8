/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Push-style JSON writer.
//!
//! The writers never emit a member on their own: a key/value pair appears in
//! the output only when the caller asks for it, which is what keeps unset
//! record members off the wire entirely.

use crate::escape::escape_string;
use dms_types::date_time::{DateTimeFormatError, Format};
use dms_types::{DateTime, Number};

/// Writes a single JSON value into an output string.
#[derive(Debug)]
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    /// Creates a value writer that appends to `output`.
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    /// Writes `null`.
    pub fn null(self) {
        self.output.push_str("null");
    }

    /// Writes `true` or `false`.
    pub fn boolean(self, value: bool) {
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes a string value, escaping as needed.
    pub fn string(self, value: &str) {
        self.output.push('"');
        self.output.push_str(&escape_string(value));
        self.output.push('"');
    }

    /// Writes a string value that is known to need no escaping.
    pub fn string_unchecked(self, value: &str) {
        debug_assert!(matches!(
            escape_string(value),
            std::borrow::Cow::Borrowed(_)
        ));
        self.output.push('"');
        self.output.push_str(value);
        self.output.push('"');
    }

    /// Writes a number value.
    ///
    /// Non-finite floats have no JSON representation and are written as the
    /// protocol's quoted `"NaN"` / `"Infinity"` / `"-Infinity"` strings.
    pub fn number(self, value: Number) {
        match value {
            Number::PosInt(value) => {
                self.output.push_str(itoa::Buffer::new().format(value));
            }
            Number::NegInt(value) => {
                self.output.push_str(itoa::Buffer::new().format(value));
            }
            Number::Float(value) if value.is_finite() => {
                self.output.push_str(ryu::Buffer::new().format_finite(value));
            }
            Number::Float(value) => {
                let name = if value.is_nan() {
                    "\"NaN\""
                } else if value > 0.0 {
                    "\"Infinity\""
                } else {
                    "\"-Infinity\""
                };
                self.output.push_str(name);
            }
        }
    }

    /// Writes a timestamp in the given format: a bare number for
    /// [`Format::EpochSeconds`], a quoted string otherwise.
    pub fn date_time(
        self,
        date_time: &DateTime,
        format: Format,
    ) -> Result<(), DateTimeFormatError> {
        let formatted = date_time.fmt(format)?;
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            Format::DateTime => JsonValueWriter::new(self.output).string_unchecked(&formatted),
        }
        Ok(())
    }

    /// Starts an object value.
    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }

    /// Starts an array value.
    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }
}

/// Writes a JSON object member by member.
#[derive(Debug)]
pub struct JsonObjectWriter<'a> {
    output: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    /// Creates an object writer that appends to `output`.
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        JsonObjectWriter {
            output,
            started: false,
        }
    }

    /// Writes a member key and returns a writer for its value.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if self.started {
            self.output.push(',');
        }
        self.started = true;
        self.output.push('"');
        self.output.push_str(&escape_string(key));
        self.output.push_str("\":");
        JsonValueWriter::new(self.output)
    }

    /// Closes the object.
    pub fn finish(self) {
        self.output.push('}');
    }
}

/// Writes a JSON array element by element.
#[derive(Debug)]
pub struct JsonArrayWriter<'a> {
    output: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    /// Creates an array writer that appends to `output`.
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        JsonArrayWriter {
            output,
            started: false,
        }
    }

    /// Returns a writer for the next element.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if self.started {
            self.output.push(',');
        }
        self.started = true;
        JsonValueWriter::new(self.output)
    }

    /// Closes the array.
    pub fn finish(self) {
        self.output.push(']');
    }
}

#[cfg(test)]
mod test {
    use super::{JsonArrayWriter, JsonObjectWriter, JsonValueWriter};
    use dms_types::date_time::Format;
    use dms_types::{DateTime, Number};

    #[test]
    fn scalars() {
        let mut output = String::new();
        JsonValueWriter::new(&mut output).null();
        assert_eq!("null", output);

        let mut output = String::new();
        JsonValueWriter::new(&mut output).string("foo\"bar");
        assert_eq!(r#""foo\"bar""#, output);

        let mut output = String::new();
        JsonValueWriter::new(&mut output).number(Number::PosInt(3));
        assert_eq!("3", output);

        let mut output = String::new();
        JsonValueWriter::new(&mut output).number(Number::NegInt(-3));
        assert_eq!("-3", output);

        let mut output = String::new();
        JsonValueWriter::new(&mut output).number(Number::Float(f64::NAN));
        assert_eq!("\"NaN\"", output);
    }

    #[test]
    fn empty_object_and_array() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", output);
    }

    #[test]
    fn object_members() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("A").boolean(true);
        object.key("B").string("b");
        let mut inner = object.key("C").start_object();
        inner.key("D").number(Number::PosInt(0));
        inner.finish();
        object.finish();
        assert_eq!(r#"{"A":true,"B":"b","C":{"D":0}}"#, output);
    }

    #[test]
    fn array_elements() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.value().string("a");
        array.value().string("b");
        array.finish();
        assert_eq!(r#"["a","b"]"#, output);
    }

    #[test]
    fn timestamps() {
        let mut output = String::new();
        JsonValueWriter::new(&mut output)
            .date_time(
                &DateTime::from_fractional_seconds(1576540098, 0.52),
                Format::EpochSeconds,
            )
            .unwrap();
        assert_eq!("1576540098.52", output);

        let mut output = String::new();
        JsonValueWriter::new(&mut output)
            .date_time(&DateTime::from_epoch_seconds(1576540098), Format::DateTime)
            .unwrap();
        assert_eq!("\"2019-12-16T23:48:18Z\"", output);
    }
}
