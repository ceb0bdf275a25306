/// credo command-line tool — inspect and validate credo message files.
///
/// # Command overview
///
/// ```text
/// credo <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print a human-readable field tree of a credo message file
///   validate   Check a credo message file for structural correctness
///   help       Print help information
///
/// Options shared by both commands:
///   --max-length <BYTES>   Per-message size limit (default 1024)
///   --max-depth <LEVELS>   Nesting depth limit (default 8)
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use credo_parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH};

mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The credo message format command-line tool.
#[derive(Parser)]
#[command(name = "credo", version, about = "credo message format CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a human-readable field tree of a credo message file.
    Inspect(InspectArgs),
    /// Check a credo message file for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `credo inspect`.
///
/// Parses the file and prints every field as an indented tree: field ID,
/// wire type, and the value (integers inline, byte fields as a length
/// with an optional hex dump, nested messages recursively).
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the message file to inspect.
    pub file: PathBuf,

    /// Show a hex dump of byte-field payloads (16 bytes per line).
    #[arg(long)]
    pub show_hex: bool,

    /// Per-message size limit in bytes, applied at every nesting level.
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Nested-message depth limit.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

/// Arguments for `credo validate`.
///
/// Attempts a full parse of the file and reports either a set of success
/// checkmarks or a diagnostic error. Exits 0 on a valid file, 1 otherwise.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the message file to validate.
    pub file: PathBuf,

    /// Per-message size limit in bytes, applied at every nesting level.
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Nested-message depth limit.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
