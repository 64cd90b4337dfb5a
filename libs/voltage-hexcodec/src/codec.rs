//! Byte-swapped hex codec
//!
//! Encodes integers and IEEE-754 floats into lowercase hex strings in
//! little-endian byte-pair order, and decodes hex fields back into
//! two's-complement signed integers.
//!
//! | Input | Natural hex | Encoded |
//! |---|---|---|
//! | `1` @ 16-bit | `0001` | `0100` |
//! | `-1` @ 8-bit | `ff` | `ff` |
//! | `1.0` @ float32 | `0000803f` | `3f800000` |
//!
//! Floats are packed little-endian before the pair swap, so their encoded
//! form ends up in big-endian byte order.

use tracing::{debug, trace, warn};

use crate::bytes::{encode_lower, swap_byte_pairs};
use crate::config::{DecodeConfig, HexCodecConfig, OverlongHexPolicy};
use crate::error::{HexCodecError, Result};
use crate::value::{Number, NumericValue};
use crate::width::BitWidth;

/// Hex codec bound to a decode configuration
///
/// Stateless apart from its settings; cheap to copy and safe to share
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexCodec {
    overlong: OverlongHexPolicy,
}

impl HexCodec {
    pub fn new(decode: &DecodeConfig) -> Self {
        Self {
            overlong: decode.overlong,
        }
    }

    pub fn from_config(config: &HexCodecConfig) -> Self {
        Self::new(&config.decode)
    }

    pub fn with_overlong_policy(mut self, policy: OverlongHexPolicy) -> Self {
        self.overlong = policy;
        self
    }

    pub fn overlong_policy(&self) -> OverlongHexPolicy {
        self.overlong
    }

    /// Encode a tagged value into byte-swapped lowercase hex
    ///
    /// The result always has `bit_width / 4` digits.
    pub fn encode(&self, value: &NumericValue) -> String {
        let encoded = swap_byte_pairs(&natural_hex(value));
        trace!(width = value.bit_width().bits(), %encoded, "Encoded value");
        encoded
    }

    /// Encode from the untyped `(value, bits, is_float)` triple
    ///
    /// # Errors
    /// See [`NumericValue::from_parts`].
    pub fn encode_raw(
        &self,
        number: impl Into<Number>,
        bits: u32,
        is_float: bool,
    ) -> Result<String> {
        let number = number.into();
        let value = NumericValue::from_parts(number, bits, is_float).map_err(|e| {
            debug!(?number, bits, is_float, "Rejected encode input: {}", e);
            e
        })?;
        Ok(self.encode(&value))
    }

    /// Decode a 16-bit hex field (natural digit order) into a signed value
    ///
    /// Values with bit 15 set come back negative: `"ffff"` → `-1`,
    /// `"8000"` → `-32768`.
    pub fn decode16(&self, hex: &str) -> Result<i16> {
        self.decode_signed(hex, BitWidth::Bits16).map(|v| v as i16)
    }

    /// Reverse byte pairs, then decode as 16-bit
    ///
    /// Inverse of `encode` for 16-bit integers.
    pub fn decode_swapped16(&self, hex: &str) -> Result<i16> {
        self.decode16(&swap_byte_pairs(hex))
    }

    /// Decode a hex field of any supported width into a signed value
    ///
    /// Accepts `0-9`, `a-f` and `A-F` only; leading zeros are allowed.
    /// Input whose magnitude exceeds `width` is handled by the configured
    /// overlong policy.
    pub fn decode_signed(&self, hex: &str, width: BitWidth) -> Result<i64> {
        let raw = self.parse_unsigned(hex, width)?;
        let shift = 64 - width.bits();
        // Sign-extend from the field's top bit
        Ok(((raw << shift) as i64) >> shift)
    }

    fn parse_unsigned(&self, hex: &str, width: BitWidth) -> Result<u64> {
        if hex.is_empty() {
            return Err(HexCodecError::invalid_hex(hex, "empty input"));
        }

        let mask = width.mask();
        let mut acc: u64 = 0;
        let mut overflowed = false;

        for (pos, c) in hex.chars().enumerate() {
            let digit = c.to_digit(16).ok_or_else(|| {
                HexCodecError::invalid_hex(
                    hex,
                    format!("non-hex character {:?} at position {}", c, pos),
                )
            })?;
            if acc > (mask >> 4) {
                overflowed = true;
            }
            acc = ((acc << 4) | u64::from(digit)) & mask;
        }

        if overflowed {
            match self.overlong {
                OverlongHexPolicy::Reject => {
                    return Err(HexCodecError::invalid_hex(
                        hex,
                        format!("magnitude exceeds {} bits", width.bits()),
                    ));
                },
                OverlongHexPolicy::Mask => {
                    warn!(
                        input = hex,
                        width = width.bits(),
                        "Hex input truncated to field width"
                    );
                },
            }
        }

        Ok(acc)
    }
}

/// Hex digits of `value` before the byte-pair swap
///
/// Integers are masked to their width and zero-padded to `bits / 4`
/// digits; floats are their little-endian IEEE-754 bytes.
pub fn natural_hex(value: &NumericValue) -> String {
    match *value {
        NumericValue::Integer(v, width) => {
            let digits = width.hex_digits();
            format!("{:0digits$x}", (v as u64) & width.mask())
        },
        NumericValue::Float32(v) => encode_lower(&v.to_le_bytes()),
        NumericValue::Float64(v) => encode_lower(&v.to_le_bytes()),
    }
}

/// Encode with the default codec
pub fn encode(value: &NumericValue) -> String {
    HexCodec::default().encode(value)
}

/// Encode the untyped `(value, bits, is_float)` triple with the default codec
pub fn encode_raw(number: impl Into<Number>, bits: u32, is_float: bool) -> Result<String> {
    HexCodec::default().encode_raw(number, bits, is_float)
}

/// Decode a 16-bit hex field, rejecting overlong input
pub fn decode16(hex: &str) -> Result<i16> {
    HexCodec::default().decode16(hex)
}

/// Decode a byte-swapped 16-bit hex field, rejecting overlong input
pub fn decode_swapped16(hex: &str) -> Result<i16> {
    HexCodec::default().decode_swapped16(hex)
}

/// Decode a hex field of `width` bits, rejecting overlong input
pub fn decode_signed(hex: &str, width: BitWidth) -> Result<i64> {
    HexCodec::default().decode_signed(hex, width)
}
