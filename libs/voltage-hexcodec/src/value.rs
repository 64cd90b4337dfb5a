//! Numeric inputs accepted by the codec

use crate::error::{HexCodecError, Result};
use crate::width::BitWidth;

/// Untyped caller input for the three-argument `encode_raw` form
///
/// Holds whatever the caller had at hand; `NumericValue::from_parts`
/// decides how it is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::Int(i64::from(v))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

/// A value tagged with its wire representation
///
/// Integers carry their field width and are wrapped into it with
/// two's-complement masking on encode; floats carry their width in the
/// variant itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Integer(i64, BitWidth),
    Float32(f32),
    Float64(f64),
}

impl NumericValue {
    /// Build a tagged value from the legacy `(value, bits, is_float)` triple
    ///
    /// # Errors
    /// - `UnsupportedWidth` for float widths other than 32/64, or integer
    ///   widths other than 8/16/32/64
    /// - `NotAnInteger` when a float reaches the integer path
    /// - `OutOfRange` when a finite value overflows `f32`
    pub fn from_parts(number: Number, bits: u32, is_float: bool) -> Result<Self> {
        if is_float {
            return match bits {
                32 => {
                    let wide = number.as_f64();
                    let narrow = wide as f32;
                    if wide.is_finite() && narrow.is_infinite() {
                        return Err(HexCodecError::out_of_range(format!(
                            "{} does not fit in a 32-bit float",
                            wide
                        )));
                    }
                    Ok(Self::Float32(narrow))
                },
                64 => Ok(Self::Float64(number.as_f64())),
                _ => Err(HexCodecError::unsupported_width(bits, "float")),
            };
        }

        let width = BitWidth::try_from(bits)?;
        match number {
            Number::Int(v) => Ok(Self::Integer(v, width)),
            Number::Float(v) => Err(HexCodecError::not_an_integer(v)),
        }
    }

    pub fn bit_width(&self) -> BitWidth {
        match self {
            Self::Integer(_, width) => *width,
            Self::Float32(_) => BitWidth::Bits32,
            Self::Float64(_) => BitWidth::Bits64,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32(_) | Self::Float64(_))
    }
}

impl From<f32> for NumericValue {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for NumericValue {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}
