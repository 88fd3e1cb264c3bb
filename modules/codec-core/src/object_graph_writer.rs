//! Object-graph traversal that linearizes a value tree into flat records.

use core::any::Any;
use std::io::Write;

use super::{
  error::CodecError,
  field_writer::{FieldWriter, PendingChild},
  index_allocator::IndexAllocator,
  protocol::{FIELD_NAME_TABLE_LIMIT, TYPE_NAME_TABLE_LIMIT},
  registry::HandlerRegistry,
  wire,
};

/// Encode engine for a single serialize call.
///
/// Holds the per-call name tables; the registry reference is the only state
/// shared with other calls. Children queued by a handler are drained after
/// their parent's record, one full subtree at a time, which yields a
/// pre-order depth-first linearization bounded by graph depth rather than
/// degree. There is no object-identity deduplication: a repeated reference
/// emits a fresh record, and cyclic graphs will not terminate.
pub(crate) struct ObjectGraphWriter<'a> {
  registry:    &'a HandlerRegistry,
  type_names:  IndexAllocator,
  field_names: IndexAllocator,
}

impl<'a> ObjectGraphWriter<'a> {
  pub(crate) fn new(registry: &'a HandlerRegistry) -> Self {
    Self {
      registry,
      type_names: IndexAllocator::new(TYPE_NAME_TABLE_LIMIT),
      field_names: IndexAllocator::new(FIELD_NAME_TABLE_LIMIT),
    }
  }

  /// Writes one object record followed by the subtrees of its reference
  /// fields.
  pub(crate) fn write_node(
    &mut self,
    out: &mut dyn Write,
    value: &dyn Any,
    type_name: &'static str,
  ) -> Result<(), CodecError> {
    let registry = self.registry;
    let entry = registry.write_entry(value.type_id(), type_name)?;

    let index = self.type_names.allocate(entry.alias())?;
    wire::write_u16(out, index.value())?;
    if index.newly_allocated() {
      wire::write_string(out, entry.alias())?;
    }

    let mut fields = FieldWriter::new(&mut self.field_names);
    entry.invoke(&mut fields, value)?;
    let (entries, children) = fields.into_parts();

    let count = u16::try_from(entries.len()).map_err(|_| CodecError::FieldCountOverflow(entries.len()))?;
    wire::write_u16(out, count)?;
    for field in &entries {
      field.flush(out)?;
    }
    registry.telemetry().record_object_encoded(entry.alias(), entries.len());

    for child in children {
      match child {
        PendingChild::Object { value, type_name } => self.write_node(out, value, type_name)?,
        PendingChild::Sequence { items, type_name } => {
          let len = u16::try_from(items.len()).map_err(|_| CodecError::FieldCountOverflow(items.len()))?;
          wire::write_u16(out, len)?;
          for item in items {
            self.write_node(out, item, type_name)?;
          }
        },
      }
    }
    Ok(())
  }
}
