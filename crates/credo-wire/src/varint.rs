use crate::error::WireError;

/// Maximum number of bytes a `u64` varint can occupy.
/// One prefix byte plus eight value bytes.
pub const MAX_VARINT_BYTES: usize = 9;

/// Return the number of bytes the canonical encoding of `value` occupies.
///
/// | Value range        | Length |
/// |--------------------|--------|
/// | 0 ..= 2^7 − 1      | 1      |
/// | 2^7 ..= 2^14 − 1   | 2      |
/// | 2^14 ..= 2^21 − 1  | 3      |
/// | ...                | ...    |
/// | 2^49 ..= 2^56 − 1  | 8      |
/// | 2^56 ..= 2^64 − 1  | 9      |
#[must_use]
pub fn encoded_len(value: u64) -> usize {
    match value.leading_zeros() as usize {
        0..=7 => MAX_VARINT_BYTES,
        // 57..=63 fall out of the general arm too; 64 (value 0) must not
        // reach it, since 63 - 64 underflows.
        57..=64 => 1,
        zeros => 1 + (63 - zeros) / 7,
    }
}

/// Encode a `u64` as a prefix varint into the provided buffer.
///
/// The total encoded length is announced up front by the first byte:
/// a length of `n` (1–8) is marked by the bit pattern `xxxx_x100 >> (8 - n)`,
/// i.e. `n - 1` trailing zero bits followed by a one; a first byte of zero
/// marks the full 9-byte form. Unlike a continuation-bit encoding, the
/// decoder learns the length from a single byte.
///
/// # Returns
///
/// The number of bytes written (1–9).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A 9-byte buffer is always sufficient for any `u64`.
///
/// # Wire format examples
///
/// | Value   | Encoded bytes        | Length |
/// |---------|----------------------|--------|
/// | 0       | `[0x01]`             | 1      |
/// | 1       | `[0x03]`             | 1      |
/// | 42      | `[0x55]`             | 1      |
/// | 127     | `[0xFF]`             | 1      |
/// | 128     | `[0x02, 0x02]`       | 2      |
/// | 16383   | `[0xFE, 0xFF]`       | 2      |
/// | 16384   | `[0x04, 0x00, 0x02]` | 3      |
pub fn encode(value: u64, buf: &mut [u8]) -> usize {
    let length = encoded_len(value);

    if length == MAX_VARINT_BYTES {
        buf[0] = 0;
        buf[1..MAX_VARINT_BYTES].copy_from_slice(&value.to_le_bytes());
    } else {
        // Shift the value past the length marker, then set the marker bit.
        let encoded = (value << length) | (1 << (length - 1));
        buf[..length].copy_from_slice(&encoded.to_le_bytes()[..length]);
    }

    length
}

/// Decode a prefix varint from the provided byte slice.
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if the slice is empty or shorter than
///   the length announced by the first byte.
/// - [`WireError::NonCanonicalVarint`] if the value would fit in a
///   shorter encoding.
pub fn decode(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let Some(&first) = buf.first() else {
        return Err(WireError::UnexpectedEof { offset: 0 });
    };

    // Trailing zeros of the first byte announce the total length.
    // A zero first byte (8 trailing zeros) is the 9-byte form.
    let length = first.trailing_zeros() as usize + 1;

    if buf.len() < length {
        return Err(WireError::UnexpectedEof { offset: buf.len() });
    }

    let value = if length == MAX_VARINT_BYTES {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&buf[1..MAX_VARINT_BYTES]);
        u64::from_le_bytes(bytes)
    } else {
        let mut bytes = [0u8; 8];
        bytes[..length].copy_from_slice(&buf[..length]);
        u64::from_le_bytes(bytes) >> length
    };

    // Reject paddings: a length-n encoding must carry a value that does
    // not fit in n-1 bytes.
    if length > 1 && value < (1u64 << (7 * (length - 1))) {
        return Err(WireError::NonCanonicalVarint { value, length });
    }

    Ok((value, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: encode a value and return just the used bytes
    fn encode_vec(value: u64) -> Vec<u8> {
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let len = encode(value, &mut buf);
        buf[..len].to_vec()
    }

    #[test]
    fn encode_zero() {
        assert_eq!(encode_vec(0), vec![0x01]);
    }

    #[test]
    fn encode_one() {
        assert_eq!(encode_vec(1), vec![0x03]);
    }

    #[test]
    fn encode_42() {
        assert_eq!(encode_vec(42), vec![0x55]);
    }

    #[test]
    fn encode_127() {
        // Largest single-byte value (7 bits all set)
        assert_eq!(encode_vec(127), vec![0xFF]);
    }

    #[test]
    fn encode_128() {
        // First value requiring 2 bytes
        assert_eq!(encode_vec(128), vec![0x02, 0x02]);
    }

    #[test]
    fn encode_16383() {
        // Largest 2-byte value (14 bits all set)
        assert_eq!(encode_vec(16383), vec![0xFE, 0xFF]);
    }

    #[test]
    fn encode_16384() {
        // First 3-byte value
        assert_eq!(encode_vec(16384), vec![0x04, 0x00, 0x02]);
    }

    #[test]
    fn encode_u32_max() {
        let bytes = encode_vec(u64::from(u32::MAX));
        assert_eq!(bytes.len(), 5);
    }

    #[test]
    fn encode_u64_max() {
        let bytes = encode_vec(u64::MAX);
        assert_eq!(bytes.len(), MAX_VARINT_BYTES);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(&bytes[1..], &[0xFF; 8]);
    }

    #[test]
    fn zero_length_computes_without_panicking() {
        // leading_zeros() is 64 here, the one input the general length
        // formula cannot take.
        assert_eq!(encoded_len(0), 1);
        let (value, consumed) = decode(&encode_vec(0)).unwrap();
        assert_eq!((value, consumed), (0, 1));
    }

    #[test]
    fn encoded_len_boundaries() {
        assert_eq!(encoded_len(0), 1);
        assert_eq!(encoded_len((1 << 7) - 1), 1);
        assert_eq!(encoded_len(1 << 7), 2);
        assert_eq!(encoded_len((1 << 56) - 1), 8);
        assert_eq!(encoded_len(1 << 56), 9);
        assert_eq!(encoded_len(u64::MAX), 9);
    }

    #[test]
    fn roundtrip_boundary_values() {
        let values = [
            0,
            1,
            127,
            128,
            255,
            256,
            16383,
            16384,
            (1 << 56) - 1,
            1 << 56,
            u64::from(u32::MAX),
            u64::MAX,
        ];
        for &value in &values {
            let encoded = encode_vec(value);
            let (decoded, consumed) = decode(&encoded).unwrap();
            assert_eq!(decoded, value, "roundtrip failed for {value}");
            assert_eq!(consumed, encoded.len());
            assert_eq!(consumed, encoded_len(value));
        }
    }

    #[test]
    fn decode_with_trailing_bytes() {
        // Decoder should only consume the varint, leaving trailing data alone
        let buf = [0x55, 0xDE, 0xAD];
        let (value, consumed) = decode(&buf).unwrap();
        assert_eq!(value, 42);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn decode_empty_input() {
        let result = decode(&[]);
        assert!(matches!(result, Err(WireError::UnexpectedEof { offset: 0 })));
    }

    #[test]
    fn decode_truncated_varint() {
        // First byte announces 2 bytes but only 1 is present
        let result = decode(&[0x02]);
        assert!(matches!(result, Err(WireError::UnexpectedEof { offset: 1 })));
    }

    #[test]
    fn decode_truncated_nine_byte_form() {
        // Zero first byte announces 9 bytes total
        let result = decode(&[0x00, 0xFF, 0xFF]);
        assert!(matches!(result, Err(WireError::UnexpectedEof { .. })));
    }

    #[test]
    fn decode_non_canonical() {
        // Value 1 padded into the 2-byte form: (1 << 2) | 0b10 = 0x06, 0x00
        let result = decode(&[0x06, 0x00]);
        assert!(matches!(
            result,
            Err(WireError::NonCanonicalVarint { value: 1, length: 2 })
        ));
    }

    #[test]
    fn decode_non_canonical_nine_byte_form() {
        // Value 1 in the 9-byte form must be rejected
        let mut buf = [0u8; 9];
        buf[1] = 0x01;
        let result = decode(&buf);
        assert!(matches!(
            result,
            Err(WireError::NonCanonicalVarint { value: 1, length: 9 })
        ));
    }
}
