use super::CodecBuilder;
use crate::{
  error::CodecError,
  field_reader::FieldReader,
  field_writer::FieldWriter,
  type_hash::TypeHashProvider,
};

#[derive(Debug, PartialEq)]
struct Message {
  body: String,
}

fn write_message<'v>(writer: &mut FieldWriter<'v, '_>, value: &'v Message) -> Result<(), CodecError> {
  writer.write_str(&value.body).named("body")?;
  Ok(())
}

fn read_message(reader: &mut FieldReader) -> Result<Message, CodecError> {
  Ok(Message { body: reader.named("body")?.read_string()? })
}

#[derive(Debug, PartialEq)]
struct Other {
  id: i32,
}

fn write_other<'v>(writer: &mut FieldWriter<'v, '_>, value: &'v Other) -> Result<(), CodecError> {
  writer.write_i32(value.id).named("id")?;
  Ok(())
}

fn read_other(reader: &mut FieldReader) -> Result<Other, CodecError> {
  Ok(Other { id: reader.named("id")?.read_i32()? })
}

#[test]
fn registers_and_builds_a_codec() {
  let mut builder = CodecBuilder::new();
  builder.register::<Message, _, _>(Some("Message".into()), write_message, read_message).expect("register");
  let codec = builder.build().expect("build");
  assert!(codec.type_hash("Message").is_some());
}

#[test]
fn duplicate_type_registration_is_a_configuration_error() {
  let mut builder = CodecBuilder::new();
  builder.register::<Message, _, _>(Some("Message".into()), write_message, read_message).expect("first");
  let err =
    builder.register::<Message, _, _>(Some("Renamed".into()), write_message, read_message).expect_err("duplicate");
  assert!(matches!(err, CodecError::DuplicateType(_)));
}

#[test]
fn duplicate_alias_registration_is_a_configuration_error() {
  let mut builder = CodecBuilder::new();
  builder.register::<Message, _, _>(Some("Shared".into()), write_message, read_message).expect("first");
  let err = builder.register::<Other, _, _>(Some("Shared".into()), write_other, read_other).expect_err("duplicate");
  assert!(matches!(err, CodecError::DuplicateAlias(alias) if alias == "Shared"));
}

#[test]
fn default_alias_is_the_simple_type_name() {
  let mut builder = CodecBuilder::new();
  builder.register::<Message, _, _>(None, write_message, read_message).expect("register");
  let codec = builder.build().expect("build");
  assert!(codec.type_hash("Message").is_some());
}

struct ConstantHashProvider;

impl TypeHashProvider for ConstantHashProvider {
  fn hash(&self, _type_string: &str) -> u32 {
    0x0BAD_CAFE
  }
}

#[test]
fn hash_collision_fails_the_build() {
  let mut builder = CodecBuilder::new().with_hash_provider(ConstantHashProvider);
  builder.register::<Message, _, _>(Some("Message".into()), write_message, read_message).expect("first");
  builder.register::<Other, _, _>(Some("Other".into()), write_other, read_other).expect("second");
  let err = builder.build().expect_err("collision");
  assert!(matches!(err, CodecError::TypeHashCollision { .. }));
}
