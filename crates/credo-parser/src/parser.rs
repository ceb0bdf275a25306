use credo_wire::varint;

use crate::builder::Builder;
use crate::error::ParseError;
use crate::wire_type::WireType;

/// Default maximum length of a single message body (1 KiB).
///
/// Conservative because the format's main intended use case is a
/// credential format.
pub const DEFAULT_MAX_LENGTH: usize = 1024;

/// Default maximum depth of nested messages.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Streaming recursive-descent parser for credo messages.
///
/// A message is a plain concatenation of fields with no outer length
/// prefix or terminator; end-of-message is the exhaustion of the byte
/// range handed to that parse level. Each field is:
///
/// ```text
/// ┌───────────────────────────────────────────────────┐
/// │ tag    (varint) = field_id << 3 | wire_type       │
/// │ payload:                                          │
/// │   wire_type 0 → value (varint)                    │
/// │   wire_type 2 → length (varint) + nested message  │
/// │   wire_type 3 → length (varint) + raw bytes       │
/// └───────────────────────────────────────────────────┘
/// ```
///
/// The parser makes one pass over the input with no backtracking and no
/// buffering: instead of a mutable cursor it keeps an explicit stack of
/// "remaining bytes" views, one per currently-open message level, each a
/// borrowed sub-slice of the caller's buffer. Consuming bytes replaces
/// the top view with a shorter suffix; nothing is ever copied or mutated
/// in place.
///
/// Two construction-time limits bound work on adversarial input:
/// `max_length` caps each message body independently at every nesting
/// level, and `max_depth` caps recursion. Depth is checked before a
/// nested level is pushed, so the stack never exceeds `max_depth`
/// message entries and worst-case work is `max_depth × max_length`.
///
/// Field events are delivered to a [`Builder`] in encoding order,
/// exactly once each. Any error aborts the whole parse; there is no
/// partial result, and the instance should be discarded after a failure.
///
/// One top-level [`parse`](Self::parse) per instance at a time — the
/// `&mut self` receiver already rules out overlapping calls.
///
/// # Example
///
/// ```
/// use credo_parser::{Builder, ParseError, Parser};
///
/// struct Sum(u64);
///
/// impl Builder for Sum {
///     type Output = u64;
///     fn uint64(&mut self, _id: u64, value: u64) -> Result<(), ParseError> {
///         self.0 += value;
///         Ok(())
///     }
///     fn bytes(&mut self, _id: u64, _data: &[u8]) -> Result<(), ParseError> {
///         Ok(())
///     }
///     fn begin_nested(&mut self) -> Result<(), ParseError> {
///         Ok(())
///     }
///     fn end_nested(&mut self, _id: u64) -> Result<(), ParseError> {
///         Ok(())
///     }
///     fn finish(self) -> u64 {
///         self.0
///     }
/// }
///
/// // field id=1, wire type 0, value 42
/// let message = [0x11, 0x55];
/// let mut parser = Parser::new(Sum(0));
/// parser.parse(&message)?;
/// assert_eq!(parser.finish()?, 42);
/// # Ok::<(), ParseError>(())
/// ```
pub struct Parser<'a, B: Builder> {
    /// Maximum length message we'll accept.
    max_length: usize,

    /// Maximum depth of nested messages allowed.
    max_depth: usize,

    /// Bodies of nested messages remaining to be processed.
    remaining: Vec<&'a [u8]>,

    /// Callbacks to invoke to construct the resulting type.
    builder: B,
}

impl<'a, B: Builder> Parser<'a, B> {
    /// Create a parser with the default limits
    /// ([`DEFAULT_MAX_LENGTH`], [`DEFAULT_MAX_DEPTH`]).
    pub fn new(builder: B) -> Self {
        Self::with_limits(builder, DEFAULT_MAX_LENGTH, DEFAULT_MAX_DEPTH)
    }

    /// Create a parser with explicit length and depth limits.
    pub fn with_limits(builder: B, max_length: usize, max_depth: usize) -> Self {
        Parser {
            max_length,
            max_depth,
            remaining: Vec::new(),
            builder,
        }
    }

    /// Parse the given message, invoking builder callbacks as necessary.
    ///
    /// Recurses for nested messages; the top-level call returns only once
    /// the nesting stack is back to empty.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]; all are terminal and the instance should be
    /// discarded afterwards.
    pub fn parse(&mut self, message: &'a [u8]) -> Result<(), ParseError> {
        if message.len() > self.max_length {
            return Err(ParseError::OversizedMessage {
                length: message.len(),
                limit: self.max_length,
            });
        }

        if self.remaining.len() >= self.max_depth {
            return Err(ParseError::MaxDepthExceeded {
                limit: self.max_depth,
            });
        }

        self.remaining.push(message);

        while self.remaining.last().is_some_and(|view| !view.is_empty()) {
            let (field_id, wire_type) = self.parse_field_prefix()?;

            match wire_type {
                WireType::Uint64 => self.parse_uint64(field_id)?,
                WireType::Message => self.parse_message(field_id)?,
                WireType::Bytes => self.parse_bytes(field_id)?,
            }
        }

        self.remaining.pop();
        Ok(())
    }

    /// Finish parsing, returning the product constructed by the builder.
    ///
    /// # Errors
    ///
    /// [`ParseError::IncompleteParse`] if the nesting stack is non-empty,
    /// i.e. an earlier [`parse`](Self::parse) did not run to completion.
    pub fn finish(self) -> Result<B::Output, ParseError> {
        if !self.remaining.is_empty() {
            return Err(ParseError::IncompleteParse {
                depth: self.remaining.len(),
            });
        }

        Ok(self.builder.finish())
    }

    /// Pop the top view, decode one varint from it, and return the value
    /// with the unconsumed remainder. The caller pushes the remainder (or
    /// a suffix of it) back.
    fn take_varint(&mut self) -> Result<(u64, &'a [u8]), ParseError> {
        let view = self.remaining.pop().unwrap_or(&[]);
        let (value, consumed) = varint::decode(view)?;
        Ok((value, &view[consumed..]))
    }

    /// Decode the tag each field starts with, extracting field ID and
    /// wire type (`field_id << 3 | wire_type`).
    fn parse_field_prefix(&mut self) -> Result<(u64, WireType), ParseError> {
        let (value, rest) = self.take_varint()?;
        self.remaining.push(rest);

        let wire_type = WireType::from_raw(value & 0x7)?;
        Ok((value >> 3, wire_type))
    }

    /// Parse a uint64 value stored as a varint (wire type 0).
    fn parse_uint64(&mut self, field_id: u64) -> Result<(), ParseError> {
        let (value, rest) = self.take_varint()?;
        self.remaining.push(rest);
        self.builder.uint64(field_id, value)
    }

    /// Decode a length prefix and split off that many payload bytes,
    /// pushing the rest back as the new top view.
    ///
    /// Shared by the nested-message and raw-bytes paths; they differ only
    /// in what they do with the payload.
    fn parse_length_prefixed(&mut self) -> Result<&'a [u8], ParseError> {
        let (wanted, rest) = self.take_varint()?;

        let available = rest.len();
        let length = usize::try_from(wanted).ok().filter(|&len| len <= available);
        let Some(length) = length else {
            return Err(ParseError::Truncated { wanted, available });
        };

        let (payload, rest) = rest.split_at(length);
        self.remaining.push(rest);
        Ok(payload)
    }

    /// Parse a nested message (wire type 2), recursing one level deeper.
    fn parse_message(&mut self, field_id: u64) -> Result<(), ParseError> {
        self.builder.begin_nested()?;

        let nested = self.parse_length_prefixed()?;
        self.parse(nested)?;

        self.builder.end_nested(field_id)
    }

    /// Parse a field containing raw bytes (wire type 3).
    ///
    /// The payload handed to the builder borrows from the input buffer.
    fn parse_bytes(&mut self, field_id: u64) -> Result<(), ParseError> {
        let data = self.parse_length_prefixed()?;
        self.builder.bytes(field_id, data)
    }
}
