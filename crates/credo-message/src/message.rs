use bytes::Bytes;

use crate::encode;

/// The payload of a single decoded field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// An unsigned 64-bit integer (wire type 0).
    Uint64(u64),

    /// A nested message (wire type 2).
    Message(Message),

    /// Opaque bytes (wire type 3), copied out of the input buffer.
    Bytes(Bytes),
}

/// One decoded field: its ID and payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub id: u64,
    pub value: Value,
}

/// A decoded message: an ordered sequence of fields.
///
/// Field order is encounter order from the wire, and duplicate field IDs
/// are kept as-is — the format imposes no uniqueness or ordering rule, so
/// neither does this type. Callers wanting last-write-wins (or any other
/// duplicate policy) apply it on top of [`fields`](Self::fields).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    fields: Vec<Field>,
}

impl Message {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Message { fields }
    }

    /// The fields in wire order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The first field with the given ID, if any.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| &field.value)
    }

    /// Encode this message to its wire form.
    ///
    /// The output of `encode` parses back to an equal `Message`, and
    /// parsing followed by `encode` reproduces the original bytes
    /// (the varint codec is canonical, so the mapping is one-to-one).
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf);
        buf
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        for field in &self.fields {
            match &field.value {
                Value::Uint64(value) => encode::encode_uint64(buf, field.id, *value),
                Value::Bytes(data) => encode::encode_bytes(buf, field.id, data),
                Value::Message(nested) => {
                    let mut body = Vec::new();
                    nested.encode_into(&mut body);
                    encode::encode_message(buf, field.id, &body);
                }
            }
        }
    }
}
