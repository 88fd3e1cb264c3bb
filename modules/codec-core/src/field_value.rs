//! Decoded field records buffered between the stream and read handlers.

use core::any::Any;

/// One field of a decoded object, addressable by position and by name.
pub(crate) struct DecodedField {
  pub(crate) name:  Option<String>,
  pub(crate) value: DecodedValue,
}

/// A decoded field payload.
///
/// Reference values are wrapped in `Option` so they can be moved out exactly
/// once by the read handler; `None` marks a consumed slot.
pub(crate) enum DecodedValue {
  Bool(bool),
  I32(i32),
  I64(i64),
  F32(f32),
  F64(f64),
  Str(String),
  Object(Option<Box<dyn Any>>),
  Sequence(Option<Vec<Box<dyn Any>>>),
}

impl DecodedValue {
  /// Short kind name used in mismatch diagnostics.
  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Self::Bool(_) => "bool",
      Self::I32(_) => "i32",
      Self::I64(_) => "i64",
      Self::F32(_) => "f32",
      Self::F64(_) => "f64",
      Self::Str(_) => "string",
      Self::Object(_) => "object",
      Self::Sequence(_) => "sequence",
    }
  }
}
