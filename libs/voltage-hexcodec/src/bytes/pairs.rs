//! Byte-pair reversal for hex strings
//!
//! A hex string holds one byte per two characters. Reversing the pairs
//! converts between natural digit order (most significant byte first) and
//! little-endian wire order:
//!
//! - `"0001"` → `"0100"`
//! - `"12345678"` → `"78563412"`

/// Reverse the order of 2-character chunks in `hex`
///
/// Strings of two characters or fewer are returned unchanged. Chunking
/// starts at the front, so an odd trailing character becomes a chunk of
/// its own and moves to the front. On even-length input the operation is
/// its own inverse.
pub fn swap_byte_pairs(hex: &str) -> String {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() <= 2 {
        return hex.to_string();
    }

    chars.chunks(2).rev().flatten().collect()
}
