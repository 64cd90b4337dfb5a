//! Voltage Hex Codec
//!
//! Byte-swapped hexadecimal encoding of register values for VoltageEMS.
//!
//! # Architecture
//!
//! This library provides:
//! - **Codec**: `encode` (integer/float → byte-swapped hex) and `decode16`
//!   (16-bit hex → two's-complement `i16`), plus the `HexCodec` value that
//!   carries decode settings
//! - **Value Types**: `NumericValue` tagged by width, `BitWidth`
//! - **Bytes Utilities**: byte-pair reversal and lowercase hex rendering
//! - **Configuration**: figment-layered settings (file + `HEXCODEC_*` env)
//! - **Logging**: optional console subscriber setup
//!
//! # Example
//!
//! ```
//! use voltage_hexcodec::{decode16, encode, BitWidth, NumericValue};
//!
//! assert_eq!(encode(&NumericValue::Integer(1, BitWidth::Bits16)), "0100");
//! assert_eq!(encode(&NumericValue::Float32(1.0)), "3f800000");
//! assert_eq!(decode16("ffff").unwrap(), -1);
//! ```

pub mod bytes;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod value;
pub mod width;

// Re-export core types
pub use bytes::{encode_lower, swap_byte_pairs};
pub use codec::{
    decode16, decode_signed, decode_swapped16, encode, encode_raw, natural_hex, HexCodec,
};
pub use config::{
    load_config, load_config_from_file, DecodeConfig, HexCodecConfig, LoggingConfig,
    OverlongHexPolicy,
};
pub use error::{HexCodecError, Result};
pub use logging::init_logging;
pub use value::{Number, NumericValue};
pub use width::BitWidth;
