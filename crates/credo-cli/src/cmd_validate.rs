/// Implementation of `credo validate`.
///
/// Attempts a full structural parse of the message file and reports either
/// a series of success checkmarks (`✓`) or a diagnostic failure line (`✗`).
/// The command exits with code 0 on a valid file and code 1 on any error
/// (the main dispatcher in `main.rs` converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Structure: 3 top-level fields parsed successfully
/// ✓ Nesting: all nested messages balanced
/// ✓ Bounds: within 1024-byte / depth-8 limits
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: message truncated: want 12 bytes (have 4)
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use credo_message::MessageBuilder;
use credo_parser::{ParseError, Parser};

use crate::ValidateArgs;

/// Run the `credo validate` command.
///
/// Prints a validation report to stdout and returns `Ok(())` on success.
/// On any structural error, prints a `✗` diagnostic to stdout and returns
/// `Err`, which the main dispatcher converts to exit code 1.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if the message fails
/// any structural check.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let mut parser =
        Parser::with_limits(MessageBuilder::new(), args.max_length, args.max_depth);

    let outcome = parser.parse(&bytes).and_then(|()| parser.finish());
    match outcome {
        Ok(message) => {
            println!(
                "✓ Structure: {} top-level field{} parsed successfully",
                message.len(),
                if message.len() == 1 { "" } else { "s" }
            );
            println!("✓ Nesting: all nested messages balanced");
            println!(
                "✓ Bounds: within {}-byte / depth-{} limits",
                args.max_length, args.max_depth
            );
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {}", parse_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `ParseError` into a human-readable diagnostic string.
///
/// Most variants already carry their context in their `Display` form; the
/// limit violations get a hint about the relevant flag.
fn parse_error_diagnostic(e: &ParseError) -> String {
    match e {
        ParseError::OversizedMessage { length, limit } => {
            format!("message of {length} bytes exceeds the {limit}-byte limit (see --max-length)")
        }
        ParseError::MaxDepthExceeded { limit } => {
            format!("nesting deeper than {limit} levels (see --max-depth)")
        }
        other => other.to_string(),
    }
}
