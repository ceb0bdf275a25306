#![warn(clippy::pedantic)]

pub mod builder;
pub mod encode;
pub mod message;

pub use builder::MessageBuilder;
pub use message::{Field, Message, Value};
