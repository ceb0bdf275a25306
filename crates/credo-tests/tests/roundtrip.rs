//! Roundtrip integration tests for the encode → parse → encode pipeline.
//!
//! Each test builds a [`Message`] value, encodes it to wire bytes, parses
//! the bytes back through [`Parser`] + [`MessageBuilder`], and asserts the
//! decoded message equals the original field-for-field. Re-encoding the
//! decoded message is also asserted byte-identical: the varint codec is
//! canonical and field order is preserved, so a message value and its wire
//! form map one-to-one.

use bytes::Bytes;
use credo_message::{Field, Message, MessageBuilder, Value};
use credo_parser::Parser;

fn roundtrip(original: &Message) {
    let encoded = original.encode();

    let mut parser = Parser::new(MessageBuilder::new());
    parser.parse(&encoded).expect("parse should succeed");
    let decoded = parser.finish().expect("finish should succeed");

    assert_eq!(&decoded, original, "decoded message differs from original");
    assert_eq!(decoded.encode(), encoded, "re-encoding is not byte-identical");
}

#[test]
fn roundtrip_empty_message() {
    roundtrip(&Message::default());
}

#[test]
fn roundtrip_flat_fields() {
    roundtrip(&Message::new(vec![
        Field {
            id: 1,
            value: Value::Uint64(42),
        },
        Field {
            id: 2,
            value: Value::Bytes(Bytes::from_static(b"credential-id")),
        },
        Field {
            id: 3,
            value: Value::Uint64(u64::MAX),
        },
    ]));
}

#[test]
fn roundtrip_repeated_field_ids_keep_order() {
    roundtrip(&Message::new(vec![
        Field {
            id: 1,
            value: Value::Uint64(1),
        },
        Field {
            id: 1,
            value: Value::Uint64(2),
        },
        Field {
            id: 1,
            value: Value::Bytes(Bytes::from_static(b"third")),
        },
    ]));
}

#[test]
fn roundtrip_nested_messages() {
    let inner = Message::new(vec![Field {
        id: 1,
        value: Value::Uint64(7),
    }]);
    let middle = Message::new(vec![
        Field {
            id: 2,
            value: Value::Message(inner),
        },
        Field {
            id: 3,
            value: Value::Bytes(Bytes::from_static(b"sibling")),
        },
    ]);
    roundtrip(&Message::new(vec![Field {
        id: 4,
        value: Value::Message(middle),
    }]));
}

#[test]
fn roundtrip_empty_nested_message() {
    roundtrip(&Message::new(vec![Field {
        id: 9,
        value: Value::Message(Message::default()),
    }]));
}

#[test]
fn roundtrip_varint_boundary_values() {
    let fields: Vec<Field> = [0u64, 127, 128, 16383, 16384, (1 << 56) - 1, 1 << 56, u64::MAX]
        .into_iter()
        .map(|value| Field {
            id: 1,
            value: Value::Uint64(value),
        })
        .collect();
    roundtrip(&Message::new(fields));
}

#[test]
fn roundtrip_large_field_ids() {
    roundtrip(&Message::new(vec![
        Field {
            id: 15,
            value: Value::Uint64(1),
        },
        Field {
            id: 16,
            value: Value::Uint64(2),
        },
        Field {
            id: 1 << 20,
            value: Value::Uint64(3),
        },
    ]));
}

#[test]
fn concrete_scenario_uint64_field() {
    // Field (id=1, wire type 0, value 42) → exactly one Uint64 event.
    let message = Message::new(vec![Field {
        id: 1,
        value: Value::Uint64(42),
    }]);
    let encoded = message.encode();
    assert_eq!(encoded, vec![0x11, 0x55]);

    let mut parser = Parser::new(MessageBuilder::new());
    parser.parse(&encoded).unwrap();
    let decoded = parser.finish().unwrap();
    assert_eq!(decoded.get(1), Some(&Value::Uint64(42)));
    assert_eq!(decoded.len(), 1);
}
