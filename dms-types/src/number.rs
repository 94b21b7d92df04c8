/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A number type with JSON semantics, split by sign and integerness the way
//! `serde_json` models it.

use crate::error::{TryFromNumberError, TryFromNumberErrorKind};

/// A JSON number.
///
/// Wire numbers arrive untyped; `Number` preserves exactly what was read so
/// that member-typed conversions can be checked rather than lossy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An unsigned integer.
    PosInt(u64),
    /// A negative integer.
    NegInt(i64),
    /// A floating point value.
    Float(f64),
}

impl Number {
    /// Converts to an `f64`, losing precision for integers beyond 2^53.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(value) => value as f64,
            Number::NegInt(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

impl TryFrom<Number> for i64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(value) => Ok(Self::try_from(value)?),
            Number::NegInt(value) => Ok(value),
            Number::Float(value) => {
                Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(value).into())
            }
        }
    }
}

impl TryFrom<Number> for i32 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(value) => Ok(Self::try_from(value)?),
            Number::NegInt(value) => Ok(Self::try_from(value)?),
            Number::Float(value) => {
                Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(value).into())
            }
        }
    }
}

impl TryFrom<Number> for u64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(value) => Ok(value),
            Number::NegInt(value) => {
                Err(TryFromNumberErrorKind::NegativeToUnsignedLossyConversion(value).into())
            }
            Number::Float(value) => {
                Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(value).into())
            }
        }
    }
}

impl TryFrom<Number> for f64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        const MAX_EXACT: u64 = 1 << 53;
        match value {
            Number::PosInt(value) if value <= MAX_EXACT => Ok(value as f64),
            Number::PosInt(value) => {
                Err(TryFromNumberErrorKind::U64ToFloatLossyConversion(value).into())
            }
            Number::NegInt(value) if value >= -(MAX_EXACT as i64) => Ok(value as f64),
            Number::NegInt(value) => {
                Err(TryFromNumberErrorKind::I64ToFloatLossyConversion(value).into())
            }
            Number::Float(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Number;

    #[test]
    fn integer_conversions() {
        assert_eq!(i32::try_from(Number::PosInt(7)).unwrap(), 7);
        assert_eq!(i64::try_from(Number::NegInt(-7)).unwrap(), -7);
        assert!(i32::try_from(Number::PosInt(u64::MAX)).is_err());
        assert!(i32::try_from(Number::Float(1.5)).is_err());
        assert!(u64::try_from(Number::NegInt(-1)).is_err());
    }

    #[test]
    fn float_conversions() {
        assert_eq!(f64::try_from(Number::Float(0.25)).unwrap(), 0.25);
        assert_eq!(f64::try_from(Number::PosInt(1 << 52)).unwrap(), (1u64 << 52) as f64);
        assert!(f64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert_eq!(Number::NegInt(-2).to_f64_lossy(), -2.0);
    }
}
