#![warn(clippy::pedantic)]

pub mod error;
pub mod varint;

pub use error::WireError;
