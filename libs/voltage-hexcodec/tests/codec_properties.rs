//! Whole-range properties of the hex codec, exercised through the public API

use voltage_hexcodec::{
    decode16, encode, encode_raw, swap_byte_pairs, BitWidth, HexCodecError, NumericValue,
};

fn unsigned_of(v: i64, width: BitWidth) -> u64 {
    (v as u64) & width.mask()
}

#[test]
fn test_integer_encode_recovers_unsigned_pattern() {
    let widths = [
        BitWidth::Bits8,
        BitWidth::Bits16,
        BitWidth::Bits32,
        BitWidth::Bits64,
    ];
    for width in widths {
        let bits = width.bits();
        let min = if bits == 64 { i64::MIN } else { -(1i64 << (bits - 1)) };
        let max = if bits == 64 { i64::MAX } else { (1i64 << bits) - 1 };
        let samples = [min, min + 1, -1, 0, 1, 0x7f, 0x80, 0xff, max - 1, max];

        for v in samples {
            let encoded = encode(&NumericValue::Integer(v, width));
            assert_eq!(encoded.len(), width.hex_digits());
            assert!(encoded.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

            let natural = swap_byte_pairs(&encoded);
            let parsed = u64::from_str_radix(&natural, 16).expect("encoded output is hex");
            assert_eq!(parsed, unsigned_of(v, width), "{} @ {}", v, width);
        }
    }
}

#[test]
fn test_decode16_full_range() {
    for raw in 0..=u16::MAX {
        let hex = format!("{:04x}", raw);
        let decoded = decode16(&hex).expect("4-digit hex is valid");
        assert_eq!(decoded, raw as i16, "{}", hex);
    }
}

#[test]
fn test_decode16_inverts_natural_encoding() {
    for v in i16::MIN..=i16::MAX {
        let encoded = encode(&NumericValue::Integer(i64::from(v), BitWidth::Bits16));
        let natural = swap_byte_pairs(&encoded);
        assert_eq!(decode16(&natural), Ok(v));
    }
}

#[test]
fn test_float32_bit_pattern_round_trip() {
    let samples = [
        0.0f32,
        -0.0,
        1.0,
        -1.5,
        f32::MIN_POSITIVE,
        f32::MAX,
        f32::MIN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        f32::from_bits(0x7fc0_0001),
    ];
    for v in samples {
        let encoded = encode(&NumericValue::Float32(v));
        // Swapping back yields the little-endian packing
        let natural = swap_byte_pairs(&encoded);
        let mut bytes = [0u8; 4];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&natural[i * 2..i * 2 + 2], 16).expect("hex byte");
        }
        assert_eq!(f32::from_le_bytes(bytes).to_bits(), v.to_bits());
        // Encoded form reads as the big-endian bit pattern
        assert_eq!(encoded, format!("{:08x}", v.to_bits()));
    }
}

#[test]
fn test_float64_encodes_big_endian_bit_pattern() {
    for v in [0.0f64, -0.0, 1.0, std::f64::consts::PI, f64::MAX, f64::NAN] {
        assert_eq!(
            encode(&NumericValue::Float64(v)),
            format!("{:016x}", v.to_bits())
        );
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(encode_raw(0, 8, false).unwrap(), "00");
    assert_eq!(encode_raw(-1, 8, false).unwrap(), "ff");
    assert_eq!(encode_raw(1, 16, false).unwrap(), "0100");
    assert_eq!(decode16("ffff"), Ok(-1));
    assert_eq!(decode16("8000"), Ok(-32768));
    assert_eq!(decode16("7fff"), Ok(32767));
    assert!(matches!(
        encode_raw(1.0, 24, true),
        Err(HexCodecError::UnsupportedWidth { width: 24, .. })
    ));
}
