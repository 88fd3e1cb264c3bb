//! Per-object emission surface handed to write handlers.

use core::any::Any;
use std::collections::VecDeque;
use std::io::Write;

use super::{
  error::CodecError,
  index_allocator::IndexAllocator,
  protocol::{
    TAG_BITS, TAG_BOOL_FALSE, TAG_BOOL_TRUE, TAG_FLOAT_32, TAG_FLOAT_64, TAG_INTEGER_32, TAG_INTEGER_64,
    TAG_REF_OBJECT, TAG_REF_SEQUENCE, TAG_UTF_STRING,
  },
  wire,
};


/// Buffers the field records of one object before they are flushed.
///
/// Scalar writes buffer their payload; object and sequence writes buffer a
/// payload-less reference entry and park the borrowed child value on the
/// pending-child queue, to be emitted after this object's own field block.
/// Nothing touches the stream until the whole field block is known, which is
/// how the wire can carry an exact field count without a second pass.
pub struct FieldWriter<'v, 'c> {
  names:    &'c mut IndexAllocator,
  entries:  Vec<FieldEntry>,
  children: VecDeque<PendingChild<'v>>,
}

impl<'v, 'c> FieldWriter<'v, 'c> {
  pub(crate) fn new(names: &'c mut IndexAllocator) -> Self {
    Self { names, entries: Vec::new(), children: VecDeque::new() }
  }

  /// Writes a boolean field; the value is carried entirely by the tag.
  pub fn write_bool(&mut self, value: bool) -> FieldAllocator<'_, 'v, 'c> {
    let tag = if value { TAG_BOOL_TRUE } else { TAG_BOOL_FALSE };
    self.push(tag, ScalarPayload::None)
  }

  /// Writes a 32-bit integer field.
  pub fn write_i32(&mut self, value: i32) -> FieldAllocator<'_, 'v, 'c> {
    self.push(TAG_INTEGER_32, ScalarPayload::I32(value))
  }

  /// Writes a 64-bit integer field.
  pub fn write_i64(&mut self, value: i64) -> FieldAllocator<'_, 'v, 'c> {
    self.push(TAG_INTEGER_64, ScalarPayload::I64(value))
  }

  /// Writes a 32-bit float field.
  pub fn write_f32(&mut self, value: f32) -> FieldAllocator<'_, 'v, 'c> {
    self.push(TAG_FLOAT_32, ScalarPayload::F32(value))
  }

  /// Writes a 64-bit float field.
  pub fn write_f64(&mut self, value: f64) -> FieldAllocator<'_, 'v, 'c> {
    self.push(TAG_FLOAT_64, ScalarPayload::F64(value))
  }

  /// Writes a UTF-8 string field.
  pub fn write_str(&mut self, value: &str) -> FieldAllocator<'_, 'v, 'c> {
    self.push(TAG_UTF_STRING, ScalarPayload::Str(value.to_string()))
  }

  /// Writes a reference to another registered object.
  ///
  /// The child is not serialized inline; it is queued and emitted as its own
  /// record after this object's field block.
  pub fn write_object<T: Any>(&mut self, child: &'v T) -> FieldAllocator<'_, 'v, 'c> {
    self.children.push_back(PendingChild::Object { value: child, type_name: core::any::type_name::<T>() });
    self.push(TAG_REF_OBJECT, ScalarPayload::None)
  }

  /// Writes a homogeneous sequence of registered objects.
  ///
  /// The elements become a count-prefixed run of object records following
  /// this object's field block.
  pub fn write_sequence<T, I>(&mut self, items: I) -> FieldAllocator<'_, 'v, 'c>
  where
    T: Any,
    I: IntoIterator<Item = &'v T>, {
    let items: Vec<&'v dyn Any> = items.into_iter().map(|item| item as &'v dyn Any).collect();
    self.children.push_back(PendingChild::Sequence { items, type_name: core::any::type_name::<T>() });
    self.push(TAG_REF_SEQUENCE, ScalarPayload::None)
  }

  fn push(&mut self, tag: u8, payload: ScalarPayload) -> FieldAllocator<'_, 'v, 'c> {
    self.entries.push(FieldEntry { tag, name_index: 0, inline_name: None, payload });
    let entry = self.entries.len() - 1;
    FieldAllocator { writer: self, entry }
  }

  pub(crate) fn into_parts(self) -> (Vec<FieldEntry>, VecDeque<PendingChild<'v>>) {
    (self.entries, self.children)
  }
}

/// Names or positions the field that was just written.
///
/// At most one call is permitted per allocator; both methods consume `self`,
/// so a second naming attempt is rejected at compile time.
pub struct FieldAllocator<'w, 'v, 'c> {
  writer: &'w mut FieldWriter<'v, 'c>,
  entry:  usize,
}

impl FieldAllocator<'_, '_, '_> {
  /// Assigns a name to the field, allocating its index lazily.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::IndexLimitExceeded`] if the field-name table is
  /// full.
  pub fn named(self, name: &str) -> Result<(), CodecError> {
    let index = self.writer.names.allocate(name)?;
    let entry = &mut self.writer.entries[self.entry];
    entry.name_index = index.value();
    if index.newly_allocated() {
      entry.inline_name = Some(name.to_string());
    }
    Ok(())
  }

  /// Declares the field's positional index.
  ///
  /// The wire carries positions implicitly, so this emits nothing; it guards
  /// against handlers whose declared layout drifts from their emission order.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::FieldPosition`] if the field does not occupy the
  /// declared position.
  pub fn at(self, index: usize) -> Result<(), CodecError> {
    if index != self.entry {
      return Err(CodecError::FieldPosition { declared: index, actual: self.entry });
    }
    Ok(())
  }
}

/// A child value queued for deferred emission.
pub(crate) enum PendingChild<'v> {
  Object {
    value:     &'v dyn Any,
    type_name: &'static str,
  },
  Sequence {
    items:     Vec<&'v dyn Any>,
    type_name: &'static str,
  },
}

/// One buffered field record awaiting flush.
pub(crate) struct FieldEntry {
  tag:         u8,
  name_index:  u16,
  inline_name: Option<String>,
  payload:     ScalarPayload,
}

impl FieldEntry {
  /// Flushes the header word, the inline name if newly introduced, and the
  /// scalar payload.
  pub(crate) fn flush(&self, out: &mut dyn Write) -> Result<(), CodecError> {
    let header = (self.name_index << TAG_BITS) | u16::from(self.tag);
    wire::write_u16(out, header)?;
    if let Some(name) = &self.inline_name {
      wire::write_string(out, name)?;
    }
    match &self.payload {
      ScalarPayload::None => Ok(()),
      ScalarPayload::I32(value) => wire::write_i32(out, *value),
      ScalarPayload::I64(value) => wire::write_i64(out, *value),
      ScalarPayload::F32(value) => wire::write_f32(out, *value),
      ScalarPayload::F64(value) => wire::write_f64(out, *value),
      ScalarPayload::Str(value) => wire::write_string(out, value),
    }
  }

  #[cfg(test)]
  pub(crate) fn tag(&self) -> u8 {
    self.tag
  }

  #[cfg(test)]
  pub(crate) fn name_index(&self) -> u16 {
    self.name_index
  }

  #[cfg(test)]
  pub(crate) fn inline_name(&self) -> Option<&str> {
    self.inline_name.as_deref()
  }
}

enum ScalarPayload {
  None,
  I32(i32),
  I64(i64),
  F32(f32),
  F64(f64),
  Str(String),
}
