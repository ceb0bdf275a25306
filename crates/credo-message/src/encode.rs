//! Field-encoding helpers producing the wire form the parser consumes.
//!
//! The pattern is always: push the tag varint (`field_id << 3 | wire_type`),
//! then the wiretype-dependent payload. These helpers back
//! [`Message::encode`](crate::Message::encode), the integration tests, and
//! the fuzz round-trip targets.

use credo_wire::varint;

/// Append a varint scratch-encode into `buf`.
fn push_varint(buf: &mut Vec<u8>, value: u64) {
    let mut scratch = [0u8; varint::MAX_VARINT_BYTES];
    let n = varint::encode(value, &mut scratch);
    buf.extend_from_slice(&scratch[..n]);
}

/// Append a field tag. Field IDs above `2^61 - 1` do not fit in the tag
/// varint and wrap; the decoder side has no such limit.
fn push_tag(buf: &mut Vec<u8>, field_id: u64, wire_type: u64) {
    push_varint(buf, (field_id << 3) | wire_type);
}

/// Encode a uint64 field (wire type 0).
///
/// Wire layout:
/// ```text
///   tag (varint) │ value (varint)
/// ```
pub fn encode_uint64(buf: &mut Vec<u8>, field_id: u64, value: u64) {
    push_tag(buf, field_id, 0);
    push_varint(buf, value);
}

/// Encode a raw-bytes field (wire type 3).
///
/// Wire layout:
/// ```text
///   tag (varint) │ length (varint) │ data [length]
/// ```
pub fn encode_bytes(buf: &mut Vec<u8>, field_id: u64, data: &[u8]) {
    push_tag(buf, field_id, 3);
    push_varint(buf, data.len() as u64);
    buf.extend_from_slice(data);
}

/// Encode a nested-message field (wire type 2).
///
/// Wire layout:
/// ```text
///   tag (varint) │ length (varint) │ body [length]
/// ```
///
/// `body` is itself a sequence of encoded fields, pre-built by the caller.
pub fn encode_message(buf: &mut Vec<u8>, field_id: u64, body: &[u8]) {
    push_tag(buf, field_id, 2);
    push_varint(buf, body.len() as u64);
    buf.extend_from_slice(body);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint64_field_layout() {
        let mut buf = Vec::new();
        encode_uint64(&mut buf, 1, 42);
        assert_eq!(buf, vec![0x11, 0x55]);
    }

    #[test]
    fn bytes_field_layout() {
        let mut buf = Vec::new();
        encode_bytes(&mut buf, 5, b"key");
        // tag (5 << 3 | 3) = 43 → 0x57, length 3 → 0x07, then the bytes
        assert_eq!(buf, vec![0x57, 0x07, b'k', b'e', b'y']);
    }

    #[test]
    fn nested_field_layout() {
        let mut inner = Vec::new();
        encode_uint64(&mut inner, 1, 7);

        let mut buf = Vec::new();
        encode_message(&mut buf, 2, &inner);
        // tag (2 << 3 | 2) = 18 → 0x25, length 2 → 0x05, inner [0x11, 0x0F]
        assert_eq!(buf, vec![0x25, 0x05, 0x11, 0x0F]);
    }
}
