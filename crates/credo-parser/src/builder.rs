use crate::error::ParseError;

/// Callback capability the parser drives to construct the decoded result.
///
/// The parser is agnostic to what is being built: it reports every field
/// event in encoding order, exactly once, and leaves all policy (duplicate
/// field IDs, value validation, storage) to the implementation. The stock
/// implementation is `MessageBuilder` in the `credo-message` crate; domain
/// objects get their own implementation each.
///
/// Callbacks return `Result` so a builder can refuse a value and abort the
/// parse — surface the refusal as [`ParseError::Builder`].
pub trait Builder {
    /// The fully constructed product returned by [`finish`](Self::finish).
    type Output;

    /// A uint64 field was decoded.
    fn uint64(&mut self, field_id: u64, value: u64) -> Result<(), ParseError>;

    /// A raw-bytes field was decoded.
    ///
    /// `data` borrows from the input buffer and is only valid for the
    /// duration of the call. Copy it if the product retains the bytes.
    fn bytes(&mut self, field_id: u64, data: &[u8]) -> Result<(), ParseError>;

    /// A nested message begins; its field callbacks follow.
    fn begin_nested(&mut self) -> Result<(), ParseError>;

    /// The nested message opened by the matching [`begin_nested`] is
    /// complete. `field_id` identifies the field it belongs to in the
    /// enclosing message.
    ///
    /// [`begin_nested`]: Self::begin_nested
    fn end_nested(&mut self, field_id: u64) -> Result<(), ParseError>;

    /// Return the fully constructed product.
    ///
    /// The parser calls this exactly once, from `Parser::finish`, only
    /// after the nesting stack has returned to empty.
    fn finish(self) -> Self::Output;
}
