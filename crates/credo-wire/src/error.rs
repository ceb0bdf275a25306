#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before a complete varint could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// The varint used more bytes than its value requires.
    ///
    /// Every value has exactly one valid encoding. A value that fits in
    /// `length - 1` bytes but arrives in `length` bytes is rejected so
    /// that wire bytes and decoded values map one-to-one.
    #[error("non-canonical varint: value {value} padded to {length} bytes")]
    NonCanonicalVarint { value: u64, length: usize },
}
