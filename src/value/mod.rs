//! An immutable numeric value that remembers how to display itself.
//!
//! The converter travels with the value and the raw number drives the
//! arithmetic: `1KiB + 2KiB` displays as `3KiB`, while `1KiB * 2KiB`
//! displays as `2MiB` because multiplication works on raw bytes — units are
//! a display lens, not dimensional analysis. Mixing interpretations keeps
//! the left operand's converter.

use crate::convert::Converter;
use crate::convert::Interpretation;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A canonical numeric value bound to the converter that produced it.
///
/// Only minted by the conversion facade (`create_value`), never by wrapping
/// an arbitrary number with an arbitrary converter from outside the crate.
#[derive(Debug, Clone, Copy)]
pub struct UnitValue {
    value: f64,
    converter: Converter,
}

impl UnitValue {
    pub(crate) const fn new(value: f64, converter: Converter) -> Self {
        Self { value, converter }
    }

    /// Result of any operation shares the converter; only the value moves.
    const fn with(self, value: f64) -> Self {
        Self {
            value,
            converter: self.converter,
        }
    }

    /// The canonical magnitude (bytes or seconds).
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn interpretation(&self) -> Interpretation {
        self.converter.interpretation()
    }

    #[must_use]
    pub fn abs(self) -> Self {
        self.with(self.value.abs())
    }

    /// Zero is "false" — mirrors numeric truthiness for callers that gate on it.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Floor division, e.g. `1KiB.floor_div(4.0)` is 256 bytes.
    #[must_use]
    pub fn floor_div(self, rhs: impl Into<f64>) -> Self {
        self.with((self.value / rhs.into()).floor())
    }

    /// Floor division with the value as the divisor: `2KiB.rfloor_div(2048.0)`
    /// is 2048 divided by 2048 bytes, displayed as `1B`.
    #[must_use]
    pub fn rfloor_div(self, lhs: impl Into<f64>) -> Self {
        self.with((lhs.into() / self.value).floor())
    }

    /// Exponentiation on the raw value; `1KiB.pow(2.0)` displays as `1MiB`.
    #[must_use]
    pub fn pow(self, exp: impl Into<f64>) -> Self {
        self.with(self.value.powf(exp.into()))
    }

    /// Exponentiation with the value as the exponent: `10B.rpow(2.0)` is
    /// 2^10, displayed as `1KiB`.
    #[must_use]
    pub fn rpow(self, base: impl Into<f64>) -> Self {
        self.with(base.into().powf(self.value))
    }

    /// Truncating integer view, for callers that need whole base units.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }
}

impl fmt::Display for UnitValue {
    /// Always renders through the bound converter — this is what makes
    /// `1.5 * 1KiB` print as `1.5KiB` instead of a bare number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.converter.format(self.value))
    }
}

impl From<UnitValue> for f64 {
    fn from(v: UnitValue) -> Self {
        v.value
    }
}

/// Comparison looks at raw values only; "1024B" and "1KiB" are equal.
impl PartialEq for UnitValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<f64> for UnitValue {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialEq<UnitValue> for f64 {
    fn eq(&self, other: &UnitValue) -> bool {
        *self == other.value
    }
}

impl PartialOrd for UnitValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl PartialOrd<f64> for UnitValue {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<UnitValue> for f64 {
    fn partial_cmp(&self, other: &UnitValue) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

impl Neg for UnitValue {
    type Output = Self;

    fn neg(self) -> Self {
        self.with(-self.value)
    }
}

/// The four binary operators plus remainder, against another `UnitValue`
/// (its unit is ignored) and against `f64` in both operand orders.
macro_rules! unit_value_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for UnitValue {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.with(self.value $op rhs.value)
            }
        }

        impl $trait<f64> for UnitValue {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self {
                self.with(self.value $op rhs)
            }
        }

        impl $trait<UnitValue> for f64 {
            type Output = UnitValue;

            fn $method(self, rhs: UnitValue) -> UnitValue {
                rhs.with(self $op rhs.value)
            }
        }
    };
}

unit_value_op!(Add, add, +);
unit_value_op!(Sub, sub, -);
unit_value_op!(Mul, mul, *);
unit_value_op!(Div, div, /);
unit_value_op!(Rem, rem, %);
