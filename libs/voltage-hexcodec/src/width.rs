//! Field widths supported by the codec

use serde::{Deserialize, Serialize};

use crate::error::HexCodecError;

/// Width of an encoded field in bits
///
/// Only whole-byte widths exist, so every encoded string splits into
/// complete byte pairs. Serialized as the plain bit count (`8`, `16`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitWidth {
    /// int8 / uint8
    Bits8,
    /// int16 / uint16, one Modbus register
    Bits16,
    /// int32 / float32
    Bits32,
    /// int64 / float64
    Bits64,
}

impl BitWidth {
    /// Map a raw bit count to a width, if supported
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::Bits8),
            16 => Some(Self::Bits16),
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Number of hex digits in an encoded field (`bits / 4`)
    pub fn hex_digits(self) -> usize {
        (self.bits() / 4) as usize
    }

    /// Mask selecting the low `bits` bits of a `u64`
    pub fn mask(self) -> u64 {
        match self {
            Self::Bits64 => u64::MAX,
            other => (1u64 << other.bits()) - 1,
        }
    }

    /// Whether an IEEE-754 float of this width exists (32 or 64)
    pub fn is_float_width(self) -> bool {
        matches!(self, Self::Bits32 | Self::Bits64)
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = HexCodecError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| HexCodecError::unsupported_width(bits, "integer"))
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> Self {
        width.bits()
    }
}

impl std::fmt::Display for BitWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
