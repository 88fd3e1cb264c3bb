//! Symmetric decode engine replaying the writer's linearization.

use core::any::Any;
use std::io::Read;

use super::{
  error::CodecError,
  field_reader::FieldReader,
  field_value::{DecodedField, DecodedValue},
  index_resolver::IndexResolver,
  protocol::{
    TAG_BOOL_FALSE, TAG_BOOL_TRUE, TAG_FLOAT_32, TAG_FLOAT_64, TAG_INTEGER_32, TAG_INTEGER_64, TAG_MASK,
    TAG_REF_OBJECT, TAG_REF_SEQUENCE, TAG_UTF_STRING, TAG_BITS,
  },
  registry::HandlerRegistry,
  wire,
};

/// Decode engine for a single deserialize call, holding the per-call name
/// resolvers.
pub(crate) struct ObjectGraphReader<'a> {
  registry:    &'a HandlerRegistry,
  type_names:  IndexResolver,
  field_names: IndexResolver,
}

impl<'a> ObjectGraphReader<'a> {
  pub(crate) fn new(registry: &'a HandlerRegistry) -> Self {
    Self { registry, type_names: IndexResolver::new(), field_names: IndexResolver::new() }
  }

  /// Reads one object record plus the subtrees of its reference fields and
  /// materializes the value through its registered read handler.
  ///
  /// The whole field block, reference values included, is buffered before
  /// the handler runs so it can address fields by name or position in any
  /// order, not just the stream's physical order.
  pub(crate) fn read_node(&mut self, input: &mut dyn Read) -> Result<Box<dyn Any>, CodecError> {
    let type_index = wire::read_u16(input)?;
    if type_index == 0 {
      return Err(CodecError::CorruptStream("type index 0 in object record".into()));
    }
    let alias = self
      .type_names
      .resolve(type_index, || wire::read_string(input))?
      .ok_or_else(|| CodecError::CorruptStream("unresolvable type index".into()))?;

    let count = wire::read_u16(input)?;
    let mut fields = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
      let header = wire::read_u16(input)?;
      let tag = (header & TAG_MASK) as u8;
      let name_index = header >> TAG_BITS;
      let name = self.field_names.resolve(name_index, || wire::read_string(input))?;
      let value = match tag {
        TAG_BOOL_FALSE => DecodedValue::Bool(false),
        TAG_BOOL_TRUE => DecodedValue::Bool(true),
        TAG_INTEGER_32 => DecodedValue::I32(wire::read_i32(input)?),
        TAG_INTEGER_64 => DecodedValue::I64(wire::read_i64(input)?),
        TAG_FLOAT_32 => DecodedValue::F32(wire::read_f32(input)?),
        TAG_FLOAT_64 => DecodedValue::F64(wire::read_f64(input)?),
        TAG_UTF_STRING => DecodedValue::Str(wire::read_string(input)?),
        TAG_REF_OBJECT => DecodedValue::Object(None),
        TAG_REF_SEQUENCE => DecodedValue::Sequence(None),
        reserved => {
          return Err(CodecError::CorruptStream(format!("reserved field tag 0x{reserved:X}")));
        },
      };
      fields.push(DecodedField { name, value });
    }

    // Reference subtrees follow the field block, in field order.
    for field in &mut fields {
      match &mut field.value {
        DecodedValue::Object(slot) => {
          *slot = Some(self.read_node(input)?);
        },
        DecodedValue::Sequence(slot) => {
          let len = wire::read_u16(input)?;
          let mut items = Vec::with_capacity(usize::from(len));
          for _ in 0..len {
            items.push(self.read_node(input)?);
          }
          *slot = Some(items);
        },
        _ => {},
      }
    }

    let read = self.registry.read_entry(&alias)?;
    let mut reader = FieldReader::new(fields);
    let value = read(&mut reader)?;
    self.registry.telemetry().record_object_decoded(&alias, usize::from(count));
    Ok(value)
  }
}
