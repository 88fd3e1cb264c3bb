//! Frozen handler registry consulted by the encode and decode engines.

use core::any::{Any, TypeId};
use std::sync::Arc;

use hashbrown::HashMap;

use super::{
  error::CodecError,
  field_reader::FieldReader,
  field_writer::FieldWriter,
  telemetry::CodecTelemetry,
};

/// Type-erased write handler stored in the registry.
pub(crate) type ErasedWriteFn =
  Box<dyn for<'v, 'c> Fn(&mut FieldWriter<'v, 'c>, &'v dyn Any) -> Result<(), CodecError> + Send + Sync>;

/// Type-erased read handler stored in the registry.
pub(crate) type ErasedReadFn = Box<dyn Fn(&mut FieldReader) -> Result<Box<dyn Any>, CodecError> + Send + Sync>;

/// Alias and write handler bound to one registered type.
pub(crate) struct TypeEntry {
  alias: String,
  write: ErasedWriteFn,
}

impl TypeEntry {
  pub(crate) fn new(alias: String, write: ErasedWriteFn) -> Self {
    Self { alias, write }
  }

  pub(crate) fn alias(&self) -> &str {
    &self.alias
  }

  pub(crate) fn invoke<'v>(&self, writer: &mut FieldWriter<'v, '_>, value: &'v dyn Any) -> Result<(), CodecError> {
    (self.write)(writer, value)
  }
}

/// Immutable lookup built once and shared read-only by every call.
///
/// All mutable encode/decode state lives in per-call contexts, so a registry
/// behind an [`Arc`] is safe for concurrent use across threads.
pub(crate) struct HandlerRegistry {
  write_entries: HashMap<TypeId, TypeEntry>,
  read_entries:  HashMap<String, ErasedReadFn>,
  type_hashes:   HashMap<String, u32>,
  telemetry:     Arc<dyn CodecTelemetry>,
}

impl HandlerRegistry {
  pub(crate) fn new(
    write_entries: HashMap<TypeId, TypeEntry>,
    read_entries: HashMap<String, ErasedReadFn>,
    type_hashes: HashMap<String, u32>,
    telemetry: Arc<dyn CodecTelemetry>,
  ) -> Self {
    Self { write_entries, read_entries, type_hashes, telemetry }
  }

  pub(crate) fn write_entry(&self, type_id: TypeId, type_name: &'static str) -> Result<&TypeEntry, CodecError> {
    self.write_entries.get(&type_id).ok_or(CodecError::UnregisteredType(type_name))
  }

  pub(crate) fn read_entry(&self, alias: &str) -> Result<&ErasedReadFn, CodecError> {
    self.read_entries.get(alias).ok_or_else(|| CodecError::UnregisteredAlias(alias.to_string()))
  }

  pub(crate) fn type_hash(&self, alias: &str) -> Option<u32> {
    self.type_hashes.get(alias).copied()
  }

  pub(crate) fn telemetry(&self) -> &dyn CodecTelemetry {
    &*self.telemetry
  }
}
