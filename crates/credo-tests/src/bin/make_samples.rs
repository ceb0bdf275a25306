//! Sample message generator for manual CLI testing.
//!
//! Writes a handful of encoded messages under `samples/` so the CLI can be
//! exercised against known-good inputs:
//!
//! ```bash
//! cargo run --bin make_samples -p credo-tests
//! credo inspect crates/credo-tests/samples/nested.bin --show-hex
//! ```

#![allow(clippy::pedantic)]

use std::fs;
use std::path::Path;

use bytes::Bytes;
use credo_message::{Field, Message, Value};

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let samples_dir = manifest_dir.join("samples");
    fs::create_dir_all(&samples_dir).expect("create samples dir");

    write_sample(&samples_dir, "flat.bin", flat_message());
    write_sample(&samples_dir, "nested.bin", nested_message());
    write_sample(&samples_dir, "empty.bin", Message::new(Vec::new()));

    println!("Samples written to {}", samples_dir.display());
}

fn write_sample(dir: &Path, name: &str, message: Message) {
    let path = dir.join(name);
    fs::write(&path, message.encode()).expect("write sample file");
    println!("  {} ({} fields)", path.display(), message.len());
}

fn flat_message() -> Message {
    Message::new(vec![
        Field {
            id: 1,
            value: Value::Uint64(42),
        },
        Field {
            id: 2,
            value: Value::Bytes(Bytes::from_static(b"hello")),
        },
        Field {
            id: 3,
            value: Value::Uint64(u64::MAX),
        },
    ])
}

fn nested_message() -> Message {
    let inner = Message::new(vec![
        Field {
            id: 1,
            value: Value::Uint64(7),
        },
        Field {
            id: 2,
            value: Value::Bytes(Bytes::from_static(b"payload")),
        },
    ]);
    Message::new(vec![
        Field {
            id: 1,
            value: Value::Uint64(1),
        },
        Field {
            id: 4,
            value: Value::Message(inner),
        },
    ])
}
