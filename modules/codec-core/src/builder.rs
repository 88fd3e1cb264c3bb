//! Configuration-time registration of handler pairs.

use core::{
  any::{Any, TypeId},
  fmt,
};
use std::sync::Arc;

use hashbrown::{HashMap, hash_map::Entry};

use super::{
  codec::Codec,
  error::CodecError,
  field_reader::FieldReader,
  field_writer::FieldWriter,
  registry::{ErasedReadFn, ErasedWriteFn, HandlerRegistry, TypeEntry},
  telemetry::{CodecTelemetry, NoopCodecTelemetry},
  type_hash::{Sha256TypeHashProvider, TypeHashProvider, simple_type_name},
};

#[cfg(test)]
mod tests;

/// Collects handler registrations and freezes them into a [`Codec`].
///
/// Registration is a single-threaded configuration phase; the maps become
/// immutable once [`build`](Self::build) runs.
pub struct CodecBuilder {
  write_entries: HashMap<TypeId, TypeEntry>,
  read_entries:  HashMap<String, ErasedReadFn>,
  hash_provider: Box<dyn TypeHashProvider>,
  telemetry:     Arc<dyn CodecTelemetry>,
}

impl fmt::Debug for CodecBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CodecBuilder").finish_non_exhaustive()
  }
}

impl CodecBuilder {
  /// Creates an empty builder with the SHA-256 hash provider and no-op
  /// telemetry.
  #[must_use]
  pub fn new() -> Self {
    Self {
      write_entries: HashMap::new(),
      read_entries:  HashMap::new(),
      hash_provider: Box::new(Sha256TypeHashProvider),
      telemetry:     Arc::new(NoopCodecTelemetry::new()),
    }
  }

  /// Replaces the provider used to fingerprint registered aliases.
  #[must_use]
  pub fn with_hash_provider(mut self, provider: impl TypeHashProvider + 'static) -> Self {
    self.hash_provider = Box::new(provider);
    self
  }

  /// Installs a telemetry handler invoked by both engines.
  #[must_use]
  pub fn with_telemetry(mut self, telemetry: Arc<dyn CodecTelemetry>) -> Self {
    self.telemetry = telemetry;
    self
  }

  /// Registers a write/read handler pair for `T`.
  ///
  /// When `alias` is `None` the type's simple name is used. The alias is the
  /// string transmitted (once per stream) in place of the full type name.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::DuplicateType`] if `T` is already registered, or
  /// [`CodecError::DuplicateAlias`] if the alias is bound to another type.
  pub fn register<T, W, R>(&mut self, alias: Option<String>, write: W, read: R) -> Result<&mut Self, CodecError>
  where
    T: Any,
    W: for<'v, 'c> Fn(&mut FieldWriter<'v, 'c>, &'v T) -> Result<(), CodecError> + Send + Sync + 'static,
    R: Fn(&mut FieldReader) -> Result<T, CodecError> + Send + Sync + 'static, {
    let alias = alias.unwrap_or_else(|| simple_type_name::<T>().to_string());
    if self.write_entries.contains_key(&TypeId::of::<T>()) {
      return Err(CodecError::DuplicateType(core::any::type_name::<T>()));
    }
    match self.read_entries.entry(alias.clone()) {
      Entry::Occupied(_) => return Err(CodecError::DuplicateAlias(alias)),
      Entry::Vacant(slot) => {
        slot.insert(erase_read(read));
      },
    }
    self.write_entries.insert(TypeId::of::<T>(), TypeEntry::new(alias, erase_write(write)));
    Ok(self)
  }

  /// Freezes the registrations into an immutable codec.
  ///
  /// Type hashes for every registered alias are computed eagerly here, so a
  /// fingerprint collision is a configuration error instead of a silent
  /// runtime ambiguity.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::TypeHashCollision`] if two distinct aliases share
  /// a 31-bit hash.
  pub fn build(self) -> Result<Codec, CodecError> {
    let mut type_hashes = HashMap::with_capacity(self.read_entries.len());
    let mut claimed: HashMap<u32, String> = HashMap::new();
    for alias in self.read_entries.keys() {
      let hash = self.hash_provider.hash(alias);
      if let Some(first) = claimed.get(&hash) {
        return Err(CodecError::TypeHashCollision { first: first.clone(), second: alias.clone() });
      }
      claimed.insert(hash, alias.clone());
      type_hashes.insert(alias.clone(), hash);
    }
    let registry = HandlerRegistry::new(self.write_entries, self.read_entries, type_hashes, self.telemetry);
    Ok(Codec::new(Arc::new(registry)))
  }
}

impl Default for CodecBuilder {
  fn default() -> Self {
    Self::new()
  }
}

fn erase_write<T, W>(write: W) -> ErasedWriteFn
where
  T: Any,
  W: for<'v, 'c> Fn(&mut FieldWriter<'v, 'c>, &'v T) -> Result<(), CodecError> + Send + Sync + 'static, {
  Box::new(move |writer, value| {
    let typed =
      value.downcast_ref::<T>().ok_or_else(|| CodecError::ValueTypeMismatch(core::any::type_name::<T>()))?;
    write(writer, typed)
  })
}

fn erase_read<T, R>(read: R) -> ErasedReadFn
where
  T: Any,
  R: Fn(&mut FieldReader) -> Result<T, CodecError> + Send + Sync + 'static, {
  Box::new(move |reader| Ok(Box::new(read(reader)?) as Box<dyn Any>))
}
