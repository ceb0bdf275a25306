use crate::error::ParseError;

/// Wire types a field can carry.
///
/// Every field starts with a varint tag of `(field_id << 3) | wire_type`.
/// The wire type determines how the payload is structured:
///
/// ```text
/// ┌──────┬─────────┬─────────────────────────────────┐
/// │ Wire │ Type    │ Payload format                  │
/// ├──────┼─────────┼─────────────────────────────────┤
/// │ 0    │ Uint64  │ Single varint value             │
/// │ 2    │ Message │ Varint length + nested fields   │
/// │ 3    │ Bytes   │ Varint length + raw bytes       │
/// └──────┴─────────┴─────────────────────────────────┘
/// ```
///
/// Values 1 and 4–7 are reserved and rejected by this decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireType {
    Uint64 = 0,
    Message = 2,
    Bytes = 3,
}

impl WireType {
    /// Convert the low 3 bits of a field tag to a [`WireType`].
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownWireType` for values outside `{0, 2, 3}`.
    pub fn from_raw(value: u64) -> Result<Self, ParseError> {
        match value {
            0 => Ok(Self::Uint64),
            2 => Ok(Self::Message),
            3 => Ok(Self::Bytes),
            other => Err(ParseError::UnknownWireType { value: other }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_wire_types() {
        assert_eq!(WireType::from_raw(0).unwrap(), WireType::Uint64);
        assert_eq!(WireType::from_raw(2).unwrap(), WireType::Message);
        assert_eq!(WireType::from_raw(3).unwrap(), WireType::Bytes);
    }

    #[test]
    fn reserved_wire_types_rejected() {
        for raw in [1, 4, 5, 6, 7] {
            let result = WireType::from_raw(raw);
            assert!(
                matches!(result, Err(ParseError::UnknownWireType { value }) if value == raw),
                "wire type {raw} should be rejected"
            );
        }
    }
}
