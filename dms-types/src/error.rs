/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors originating in the record layer itself.

use std::fmt;

/// Error returned when a wire string matches none of an enum's known values.
///
/// The enum sets modeled by this client are closed: an out-of-set string is
/// rejected here rather than silently mapped to a default or catch-all
/// member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnumValue {
    enum_name: &'static str,
    value: String,
}

impl InvalidEnumValue {
    /// Creates an error for `value` failing to parse as `enum_name`.
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        InvalidEnumValue {
            enum_name,
            value: value.into(),
        }
    }

    /// The value that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The enum the value was parsed against.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }
}

impl fmt::Display for InvalidEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "empty string is not a known value for {}", self.enum_name)
        } else {
            write!(
                f,
                "'{}' is not a known value for {}",
                self.value, self.enum_name
            )
        }
    }
}

impl std::error::Error for InvalidEnumValue {}

#[derive(Debug)]
enum BuildErrorKind {
    MissingField {
        field: &'static str,
        details: &'static str,
    },
}

/// Error returned when a builder cannot produce a valid record.
///
/// This is an advisory, client-side check; the service remains the authority
/// on request validation.
#[derive(Debug)]
pub struct BuildError {
    kind: BuildErrorKind,
}

impl BuildError {
    /// Creates an error for a required field that was never set.
    pub fn missing_field(field: &'static str, details: &'static str) -> Self {
        BuildError {
            kind: BuildErrorKind::MissingField { field, details },
        }
    }

    /// The field the error concerns, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self.kind {
            BuildErrorKind::MissingField { field, .. } => Some(field),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BuildErrorKind::MissingField { field, details } => {
                write!(f, "{} was not specified but it is required: {}", field, details)
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug)]
pub(crate) enum TryFromNumberErrorKind {
    OutsideIntegerRange(std::num::TryFromIntError),
    U64ToFloatLossyConversion(u64),
    I64ToFloatLossyConversion(i64),
    FloatToIntegerLossyConversion(f64),
    NegativeToUnsignedLossyConversion(i64),
}

/// Error returned when a [`Number`](crate::Number) conversion would be lossy.
#[derive(Debug)]
pub struct TryFromNumberError {
    kind: TryFromNumberErrorKind,
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TryFromNumberErrorKind::*;
        match self.kind {
            OutsideIntegerRange(_) => write!(f, "integer outside the target type's range"),
            U64ToFloatLossyConversion(value) => write!(
                f,
                "cannot convert {}u64 into a floating point type without precision loss",
                value
            ),
            I64ToFloatLossyConversion(value) => write!(
                f,
                "cannot convert {}i64 into a floating point type without precision loss",
                value
            ),
            FloatToIntegerLossyConversion(value) => write!(
                f,
                "cannot convert floating point number {} into an integer",
                value
            ),
            NegativeToUnsignedLossyConversion(value) => write!(
                f,
                "cannot convert negative integer {} into an unsigned integer type",
                value
            ),
        }
    }
}

impl std::error::Error for TryFromNumberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use TryFromNumberErrorKind::*;
        match &self.kind {
            OutsideIntegerRange(err) => Some(err as _),
            U64ToFloatLossyConversion(_)
            | I64ToFloatLossyConversion(_)
            | FloatToIntegerLossyConversion(_)
            | NegativeToUnsignedLossyConversion(_) => None,
        }
    }
}

impl From<std::num::TryFromIntError> for TryFromNumberError {
    fn from(value: std::num::TryFromIntError) -> Self {
        TryFromNumberError {
            kind: TryFromNumberErrorKind::OutsideIntegerRange(value),
        }
    }
}

impl From<TryFromNumberErrorKind> for TryFromNumberError {
    fn from(kind: TryFromNumberErrorKind) -> Self {
        TryFromNumberError { kind }
    }
}

#[cfg(test)]
mod test {
    use super::{BuildError, InvalidEnumValue};

    #[test]
    fn invalid_enum_value_names_the_offender() {
        let err = InvalidEnumValue::new("MigrationTypeValue", "full-load-and-cdc-typo");
        assert!(err.to_string().contains("full-load-and-cdc-typo"));
        assert!(err.to_string().contains("MigrationTypeValue"));

        let err = InvalidEnumValue::new("MigrationTypeValue", "");
        assert!(err.to_string().contains("empty string"));
    }

    #[test]
    fn build_error_names_the_field() {
        let err = BuildError::missing_field("resource_arn", "it identifies the resource to tag");
        assert_eq!(err.field(), Some("resource_arn"));
        assert!(err.to_string().contains("resource_arn"));
    }
}
