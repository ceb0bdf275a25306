/// Implementation of `credo inspect`.
///
/// Reads a message file, parses it with the stock [`MessageBuilder`], and
/// prints an indented field tree to stdout. Byte fields show their length
/// and, with `--show-hex`, a 16-byte-per-line hex dump.
///
/// # Output format
///
/// ```text
/// Message: 3 fields (27 bytes)
///   field 1: uint64 42
///   field 2: message (1 field)
///     field 1: uint64 7
///   field 5: bytes (3 bytes)
/// ```
use std::fs;

use anyhow::{Context, Result};
use credo_message::{Message, MessageBuilder, Value};
use credo_parser::Parser;

use crate::InspectArgs;

/// Run the `credo inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the message is
/// structurally invalid (truncated fields, reserved wire types, limit
/// violations, etc.).
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let mut parser =
        Parser::with_limits(MessageBuilder::new(), args.max_length, args.max_depth);
    parser
        .parse(&bytes)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let message = parser.finish()?;

    println!(
        "Message: {} field{} ({} bytes)",
        message.len(),
        if message.len() == 1 { "" } else { "s" },
        bytes.len()
    );
    print_fields(&message, 1, args.show_hex);

    Ok(())
}

// ── Tree rendering ────────────────────────────────────────────────────────────

/// Print each field of `message` indented by `depth` levels, recursing
/// into nested messages.
fn print_fields(message: &Message, depth: usize, show_hex: bool) {
    let indent = "  ".repeat(depth);

    for field in message.fields() {
        match &field.value {
            Value::Uint64(value) => {
                println!("{indent}field {}: uint64 {value}", field.id);
            }
            Value::Bytes(data) => {
                println!("{indent}field {}: bytes ({} bytes)", field.id, data.len());
                if show_hex {
                    print_hex(data, &indent);
                }
            }
            Value::Message(nested) => {
                println!(
                    "{indent}field {}: message ({} field{})",
                    field.id,
                    nested.len(),
                    if nested.len() == 1 { "" } else { "s" }
                );
                print_fields(nested, depth + 1, show_hex);
            }
        }
    }
}

/// 16-bytes-per-line hex dump with an ASCII gutter.
fn print_hex(data: &[u8], indent: &str) {
    for (i, chunk) in data.chunks(16).enumerate() {
        let offset = i * 16;
        let hex: String = chunk
            .iter()
            .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                use std::fmt::Write as _;
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("{indent}  {offset:04x}  {hex:<47}  {ascii}");
    }
}
