//! Hex string and byte-pair helpers
//!
//! Protocol-agnostic building blocks shared by the codec: rendering bytes
//! as lowercase hex and reordering the byte pairs of a hex string.

pub mod hex;
pub mod pairs;

pub use hex::encode_lower;
pub use pairs::swap_byte_pairs;
