#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use credo_message::encode::{encode_bytes, encode_uint64};
use credo_message::{MessageBuilder, Value};
use credo_parser::Parser;

#[derive(Arbitrary, Debug)]
enum FuzzField {
    Uint64 { id: u64, value: u64 },
    Bytes { id: u64, data: Vec<u8> },
}

// Fuzz target: flat field lists encode→parse→compare.
//
// Encodes arbitrary uint64/bytes fields, parses the result with a
// parser sized to fit it, and asserts the decoded message reproduces
// every field in order. Field IDs are masked to stay inside the tag
// varint's 61-bit budget.
fuzz_target!(|fields: Vec<FuzzField>| {
    const ID_MASK: u64 = (1 << 61) - 1;

    let mut encoded = Vec::new();
    for field in &fields {
        match field {
            FuzzField::Uint64 { id, value } => encode_uint64(&mut encoded, id & ID_MASK, *value),
            FuzzField::Bytes { id, data } => encode_bytes(&mut encoded, id & ID_MASK, data),
        }
    }

    let mut parser = Parser::with_limits(MessageBuilder::new(), encoded.len(), 8);
    parser.parse(&encoded).expect("encoded message must parse");
    let decoded = parser.finish().expect("finish must succeed");

    assert_eq!(decoded.len(), fields.len());
    for (got, want) in decoded.fields().iter().zip(&fields) {
        match want {
            FuzzField::Uint64 { id, value } => {
                assert_eq!(got.id, id & ID_MASK);
                assert_eq!(got.value, Value::Uint64(*value));
            }
            FuzzField::Bytes { id, data } => {
                assert_eq!(got.id, id & ID_MASK);
                assert!(matches!(&got.value, Value::Bytes(b) if b.as_ref() == data.as_slice()));
            }
        }
    }
});
