#![warn(clippy::pedantic)]

pub mod builder;
pub mod error;
pub mod parser;
pub mod wire_type;

pub use builder::Builder;
pub use error::ParseError;
pub use parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH, Parser};
pub use wire_type::WireType;
