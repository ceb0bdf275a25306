#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: prefix-varint decoder.
//
// Catches bugs in:
// - Length announcement from the first byte (1-9 bytes)
// - Truncated input shorter than the announced length
// - Non-canonical (padded) encoding rejection
// - Maximum value edge cases (u64::MAX, the 9-byte form)
fuzz_target!(|data: &[u8]| {
    let _ = credo_wire::varint::decode(data);
});
