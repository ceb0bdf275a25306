use credo_wire::WireError;

/// Errors that can occur while parsing a credo message.
///
/// Every variant is terminal for the current parse attempt: the parser
/// unwinds immediately, nothing is retried, and the instance should be
/// discarded after any failure. Each variant captures enough context
/// (sizes, limits, the raw tag value) to diagnose without re-parsing.
///
/// Error hierarchy:
///
/// ```text
///   ParseError
///   ├── OversizedMessage   ← a message body exceeds max_length
///   ├── MaxDepthExceeded   ← nesting would exceed max_depth
///   ├── Truncated          ← length prefix declares more bytes than remain
///   ├── UnknownWireType    ← tag's low 3 bits are not 0, 2, or 3
///   ├── IncompleteParse    ← finish() called with messages still open
///   ├── Builder            ← the builder rejected a field callback
///   └── Varint(WireError)  ← from credo-wire varint decoding
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A message body (top-level or nested) exceeds `max_length`.
    ///
    /// The limit applies to each message's own encoded length
    /// independently at every nesting level, so worst-case work is
    /// bounded by `max_depth × max_length`.
    #[error("oversized message: {length} bytes (max {limit})")]
    OversizedMessage { length: usize, limit: usize },

    /// Parsing a nested message would exceed `max_depth`.
    ///
    /// Checked before the new message level is pushed, so the nesting
    /// stack never holds more than `max_depth` message entries.
    #[error("max depth of {limit} nested messages exceeded")]
    MaxDepthExceeded { limit: usize },

    /// A length-prefixed field declares more bytes than remain in the
    /// current message view.
    #[error("message truncated: want {wanted} bytes (have {available})")]
    Truncated { wanted: u64, available: usize },

    /// A field tag's low 3 bits did not match any known [`WireType`].
    ///
    /// The wire format defines types 0 (uint64), 2 (nested message),
    /// and 3 (raw bytes). Values 1 and 4–7 are reserved.
    ///
    /// [`WireType`]: crate::WireType
    #[error("unknown wire type: {value}")]
    UnknownWireType { value: u64 },

    /// `finish` was called while the nesting stack is non-empty.
    ///
    /// An earlier `parse` call failed partway through, or was never
    /// made at all after an error. There is no partial result.
    #[error("not finished parsing: {depth} messages still open")]
    IncompleteParse { depth: usize },

    /// The builder rejected a field callback.
    ///
    /// Builders may refuse a value (for example a domain object that
    /// caps repeated fields). The refusal aborts the whole parse.
    #[error("builder rejected input: {reason}")]
    Builder { reason: String },

    /// A varint-level error from `credo-wire`.
    ///
    /// Surfaces when a field prefix, length prefix, or uint64 value is
    /// malformed or the view ends mid-varint.
    #[error(transparent)]
    Varint(#[from] WireError),
}
