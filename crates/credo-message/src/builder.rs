use bytes::Bytes;
use credo_parser::{Builder, ParseError};

use crate::message::{Field, Message, Value};

/// The stock [`Builder`]: accumulates every field event into a [`Message`].
///
/// Raw-bytes payloads borrow from the parser's input for the duration of
/// the callback only, so they are copied into [`Bytes`] on arrival.
///
/// Nesting is tracked with a stack of partially built field lists: each
/// `begin_nested` parks the current list, each `end_nested` folds the
/// finished nested message into its parent as a [`Value::Message`] field.
/// The parser guarantees the brackets are paired, so a bare `end_nested`
/// only occurs when a caller drives the builder by hand — it is rejected
/// rather than panicking.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    /// Parked field lists of enclosing messages, outermost first.
    parents: Vec<Vec<Field>>,

    /// Fields of the message currently being built.
    current: Vec<Field>,
}

impl MessageBuilder {
    #[must_use]
    pub fn new() -> Self {
        MessageBuilder::default()
    }
}

impl Builder for MessageBuilder {
    type Output = Message;

    fn uint64(&mut self, field_id: u64, value: u64) -> Result<(), ParseError> {
        self.current.push(Field {
            id: field_id,
            value: Value::Uint64(value),
        });
        Ok(())
    }

    fn bytes(&mut self, field_id: u64, data: &[u8]) -> Result<(), ParseError> {
        self.current.push(Field {
            id: field_id,
            value: Value::Bytes(Bytes::copy_from_slice(data)),
        });
        Ok(())
    }

    fn begin_nested(&mut self) -> Result<(), ParseError> {
        self.parents.push(std::mem::take(&mut self.current));
        Ok(())
    }

    fn end_nested(&mut self, field_id: u64) -> Result<(), ParseError> {
        let Some(parent) = self.parents.pop() else {
            return Err(ParseError::Builder {
                reason: "end_nested without matching begin_nested".into(),
            });
        };

        let nested = std::mem::replace(&mut self.current, parent);
        self.current.push(Field {
            id: field_id,
            value: Value::Message(Message::new(nested)),
        });
        Ok(())
    }

    fn finish(self) -> Message {
        Message::new(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_fields_in_order() {
        let mut builder = MessageBuilder::new();
        builder.uint64(1, 42).unwrap();
        builder.bytes(2, b"abc").unwrap();
        builder.uint64(1, 43).unwrap();

        let message = builder.finish();
        assert_eq!(
            message.fields(),
            &[
                Field {
                    id: 1,
                    value: Value::Uint64(42)
                },
                Field {
                    id: 2,
                    value: Value::Bytes(Bytes::from_static(b"abc"))
                },
                Field {
                    id: 1,
                    value: Value::Uint64(43)
                },
            ]
        );
    }

    #[test]
    fn nested_message_folds_into_parent() {
        let mut builder = MessageBuilder::new();
        builder.begin_nested().unwrap();
        builder.uint64(1, 7).unwrap();
        builder.end_nested(2).unwrap();

        let message = builder.finish();
        assert_eq!(message.len(), 1);
        let Some(Value::Message(nested)) = message.get(2) else {
            panic!("expected nested message at field 2");
        };
        assert_eq!(nested.get(1), Some(&Value::Uint64(7)));
    }

    #[test]
    fn unbalanced_end_nested_rejected() {
        let mut builder = MessageBuilder::new();
        let result = builder.end_nested(1);
        assert!(matches!(result, Err(ParseError::Builder { .. })));
    }

    #[test]
    fn empty_builder_finishes_empty() {
        assert!(MessageBuilder::new().finish().is_empty());
    }
}
