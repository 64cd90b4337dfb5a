//! Lowercase hex rendering of raw bytes

use std::fmt::Write;

/// Render `data` as two lowercase digits per byte, in slice order
///
/// `[0x12, 0x34, 0xAB]` renders as `"1234ab"`.
pub fn encode_lower(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len() * 2);
    for byte in data {
        let _ = write!(&mut result, "{:02x}", byte);
    }
    result
}
