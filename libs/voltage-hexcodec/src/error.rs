//! Hex codec error types

use thiserror::Error;

/// Result type for voltage-hexcodec operations
pub type Result<T> = std::result::Result<T, HexCodecError>;

/// Hex codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexCodecError {
    /// Bit width not valid for the value kind
    #[error("Unsupported width: {width} bits for {kind} values")]
    UnsupportedWidth { width: u32, kind: &'static str },

    /// Malformed or out-of-range hex input
    #[error("Invalid hex {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Float passed where an integer is required
    #[error("Not an integer: {0}")]
    NotAnInteger(String),

    /// Value cannot be represented at the requested width
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<figment::Error> for HexCodecError {
    fn from(err: figment::Error) -> Self {
        HexCodecError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl HexCodecError {
    pub fn unsupported_width(width: u32, kind: &'static str) -> Self {
        HexCodecError::UnsupportedWidth { width, kind }
    }

    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        HexCodecError::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn not_an_integer(value: impl std::fmt::Display) -> Self {
        HexCodecError::NotAnInteger(value.to_string())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        HexCodecError::OutOfRange(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        HexCodecError::Config(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        HexCodecError::Logging(msg.into())
    }
}
