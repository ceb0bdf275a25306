#![no_main]

use libfuzzer_sys::fuzz_target;

use credo_wire::varint;

// Fuzz target: varint encode→decode identity.
//
// For any u64, the canonical encoding must decode back to the same
// value, consume exactly the announced length, and agree with
// encoded_len.
fuzz_target!(|value: u64| {
    let mut buf = [0u8; varint::MAX_VARINT_BYTES];
    let len = varint::encode(value, &mut buf);
    assert_eq!(len, varint::encoded_len(value));

    let (decoded, consumed) = varint::decode(&buf[..len]).expect("canonical encoding must decode");
    assert_eq!(decoded, value);
    assert_eq!(consumed, len);
});
