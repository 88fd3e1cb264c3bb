//! User-facing serialize/deserialize entry points.

use core::{any::Any, fmt};
use std::{
  io::{Read, Write},
  sync::Arc,
};

use super::{
  error::CodecError,
  object_graph_reader::ObjectGraphReader,
  object_graph_writer::ObjectGraphWriter,
  protocol::PROTOCOL_MAGIC,
  registry::HandlerRegistry,
  wire,
};

/// Immutable codec built by [`CodecBuilder`](crate::CodecBuilder).
///
/// Cloning is cheap; all clones share one frozen registry. Each call gets its
/// own name tables, so a codec can serve concurrent calls from multiple
/// threads without coordination.
#[derive(Clone)]
pub struct Codec {
  registry: Arc<HandlerRegistry>,
}

impl fmt::Debug for Codec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Codec").finish_non_exhaustive()
  }
}

impl Codec {
  pub(crate) fn new(registry: Arc<HandlerRegistry>) -> Self {
    Self { registry }
  }

  /// Serializes `value` and the objects reachable from it into `sink`.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::UnregisteredType`] if `T` or any reachable child
  /// type has no handler, [`CodecError::IndexLimitExceeded`] if a name table
  /// fills up, or an error from the sink.
  pub fn serialize<T, W>(&self, value: &T, sink: &mut W) -> Result<(), CodecError>
  where
    T: Any,
    W: Write, {
    let telemetry = self.registry.telemetry();
    telemetry.on_serialize_start();
    let result = self.serialize_inner(value, sink);
    if let Err(error) = &result {
      telemetry.record_failure(error);
    }
    telemetry.on_serialize_finish();
    result
  }

  fn serialize_inner<T, W>(&self, value: &T, sink: &mut W) -> Result<(), CodecError>
  where
    T: Any,
    W: Write, {
    sink.write_all(&PROTOCOL_MAGIC)?;
    let mut writer = ObjectGraphWriter::new(&self.registry);
    writer.write_node(sink, value, core::any::type_name::<T>())
  }

  /// Serializes `value` into a freshly allocated buffer.
  ///
  /// # Errors
  ///
  /// Same as [`serialize`](Self::serialize).
  pub fn serialize_to_vec<T: Any>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::new();
    self.serialize(value, &mut buffer)?;
    Ok(buffer)
  }

  /// Deserializes one object graph from `source` and downcasts the root
  /// to `T`.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::BadHeader`] if the stream does not start with the
  /// protocol magic, [`CodecError::UnregisteredAlias`] if the stream names a
  /// type this codec does not know, [`CodecError::CorruptStream`] for
  /// malformed records, or [`CodecError::ValueTypeMismatch`] if the decoded
  /// root is not a `T`.
  pub fn deserialize<T, R>(&self, source: &mut R) -> Result<T, CodecError>
  where
    T: Any,
    R: Read, {
    let telemetry = self.registry.telemetry();
    telemetry.on_deserialize_start();
    let result = self.deserialize_inner(source);
    if let Err(error) = &result {
      telemetry.record_failure(error);
    }
    telemetry.on_deserialize_finish();
    result
  }

  fn deserialize_inner<T, R>(&self, source: &mut R) -> Result<T, CodecError>
  where
    T: Any,
    R: Read, {
    let mut magic = [0_u8; 4];
    wire::read_exact(source, &mut magic)?;
    if magic != PROTOCOL_MAGIC {
      return Err(CodecError::BadHeader);
    }
    let mut reader = ObjectGraphReader::new(&self.registry);
    let root = reader.read_node(source)?;
    root
      .downcast::<T>()
      .map(|boxed| *boxed)
      .map_err(|_| CodecError::ValueTypeMismatch(core::any::type_name::<T>()))
  }

  /// Deserializes one object graph from an in-memory buffer.
  ///
  /// # Errors
  ///
  /// Same as [`deserialize`](Self::deserialize).
  pub fn deserialize_slice<T: Any>(&self, bytes: &[u8]) -> Result<T, CodecError> {
    let mut cursor = bytes;
    self.deserialize(&mut cursor)
  }

  /// Returns the 31-bit fingerprint computed for `alias` at build time, or
  /// `None` if the alias is not registered.
  #[must_use]
  pub fn type_hash(&self, alias: &str) -> Option<u32> {
    self.registry.type_hash(alias)
  }
}
