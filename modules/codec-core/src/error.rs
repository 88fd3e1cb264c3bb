//! Error types for codec configuration, encoding and decoding.

use std::io;

/// Errors raised while building a codec or while running a single
/// serialize/deserialize call.
///
/// Configuration errors surface from [`CodecBuilder`](crate::CodecBuilder)
/// before any data is processed; all other variants abort the call that
/// produced them. Bytes already flushed by a failed encode are invalid and
/// must be discarded by the caller.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
  /// The type was already registered with a handler pair.
  #[error("type {0} is already registered")]
  DuplicateType(&'static str),
  /// The alias is already bound to another registered type.
  #[error("alias '{0}' is already bound")]
  DuplicateAlias(String),
  /// Two distinct aliases produced the same 31-bit type hash at build time.
  #[error("type hash collision between aliases '{first}' and '{second}'")]
  TypeHashCollision {
    /// Alias that claimed the hash first.
    first:  String,
    /// Alias that collided with it.
    second: String,
  },
  /// No write handler is registered for the value's runtime type.
  #[error("no handler registered for type {0}")]
  UnregisteredType(&'static str),
  /// The stream names an alias with no registered read handler.
  #[error("no handler registered for alias '{0}'")]
  UnregisteredAlias(String),
  /// A name table ran out of indices mid-call.
  #[error("name index limit {limit} exceeded")]
  IndexLimitExceeded {
    /// Table capacity including the reserved null index.
    limit: u32,
  },
  /// An object emitted more fields than the 16-bit count can frame.
  #[error("field count {0} exceeds the wire limit")]
  FieldCountOverflow(usize),
  /// A string payload or name is longer than the 16-bit length prefix allows.
  #[error("string of {0} bytes exceeds the wire limit")]
  StringTooLong(usize),
  /// A field selector was set twice before a read was issued.
  #[error("field selector already set before read")]
  FieldSelector,
  /// A field was declared at a position it does not occupy.
  #[error("field written at position {actual} but declared at {declared}")]
  FieldPosition {
    /// Position passed to the allocator.
    declared: usize,
    /// Position the field actually occupies in emission order.
    actual:   usize,
  },
  /// No field with the requested name exists on the current object.
  #[error("no field named '{0}'")]
  FieldNotFound(String),
  /// A positional selector points outside the object's field block.
  #[error("field index {index} out of range for {len} fields")]
  FieldIndexOutOfRange {
    /// Requested position.
    index: usize,
    /// Number of fields the object carries.
    len:   usize,
  },
  /// A reference field was read a second time after its value was moved out.
  #[error("reference field already consumed")]
  FieldConsumed,
  /// The stored field kind does not match the requested read.
  #[error("field holds {found} but {expected} was requested")]
  FieldTypeMismatch {
    /// Kind requested by the read handler.
    expected: &'static str,
    /// Kind actually present in the stream.
    found:    &'static str,
  },
  /// A decoded value failed to downcast to the requested type.
  #[error("decoded value is not a {0}")]
  ValueTypeMismatch(&'static str),
  /// The stream does not start with the protocol magic.
  #[error("bad stream header")]
  BadHeader,
  /// The stream is structurally damaged and cannot be decoded further.
  #[error("corrupt stream: {0}")]
  CorruptStream(String),
  /// An I/O failure from the underlying sink or source, unmodified.
  #[error("i/o failure: {0}")]
  Io(#[from] io::Error),
}
