use super::FieldReader;
use crate::{
  error::CodecError,
  field_value::{DecodedField, DecodedValue},
};

fn sample_reader() -> FieldReader {
  FieldReader::new(vec![
    DecodedField { name: Some("flag".into()), value: DecodedValue::Bool(true) },
    DecodedField { name: Some("count".into()), value: DecodedValue::I32(42) },
    DecodedField { name: None, value: DecodedValue::Str("tail".into()) },
  ])
}

#[test]
fn sequential_reads_follow_the_cursor() {
  let mut reader = sample_reader();
  assert!(reader.read_bool().expect("flag"));
  assert_eq!(reader.read_i32().expect("count"), 42);
  assert_eq!(reader.read_string().expect("tail"), "tail");
}

#[test]
fn named_reads_may_arrive_out_of_order() {
  let mut reader = sample_reader();
  assert_eq!(reader.named("count").expect("select").read_i32().expect("count"), 42);
  assert!(reader.named("flag").expect("select").read_bool().expect("flag"));
}

#[test]
fn positional_selector_addresses_any_field() {
  let mut reader = sample_reader();
  assert_eq!(reader.at(2).expect("select").read_string().expect("tail"), "tail");
  assert!(reader.at(0).expect("select").read_bool().expect("flag"));
}

#[test]
fn cursor_resumes_after_an_explicit_selector() {
  let mut reader = sample_reader();
  assert!(reader.at(0).expect("select").read_bool().expect("flag"));
  assert_eq!(reader.read_i32().expect("cursor continues at 1"), 42);
}

#[test]
fn missing_name_falls_back_to_the_declared_position() {
  let mut reader = sample_reader();
  let value = reader.at_current().expect("position").named("absent").expect("name").read_bool().expect("fallback");
  assert!(value);
}

#[test]
fn missing_name_without_fallback_is_an_error() {
  let mut reader = sample_reader();
  let err = reader.named("absent").expect("select").read_bool().expect_err("no such field");
  assert!(matches!(err, CodecError::FieldNotFound(name) if name == "absent"));
}

#[test]
fn double_selector_before_a_read_is_rejected() {
  let mut reader = sample_reader();
  reader.at(0).expect("first");
  let err = reader.at(1).expect_err("second positional selector");
  assert!(matches!(err, CodecError::FieldSelector));
}

#[test]
fn kind_mismatch_is_reported() {
  let mut reader = sample_reader();
  let err = reader.named("count").expect("select").read_bool().expect_err("i32 field");
  assert!(matches!(err, CodecError::FieldTypeMismatch { expected: "bool", found: "i32" }));
}

#[test]
fn out_of_range_position_is_reported() {
  let mut reader = sample_reader();
  let err = reader.at(9).expect("select").read_bool().expect_err("past the field block");
  assert!(matches!(err, CodecError::FieldIndexOutOfRange { index: 9, len: 3 }));
}

#[test]
fn object_fields_are_consumed_on_read() {
  let mut reader = FieldReader::new(vec![DecodedField {
    name:  Some("child".into()),
    value: DecodedValue::Object(Some(Box::new(7_u32))),
  }]);
  assert_eq!(reader.named("child").expect("select").read_object::<u32>().expect("first read"), 7);
  let err = reader.named("child").expect("select").read_object::<u32>().expect_err("second read");
  assert!(matches!(err, CodecError::FieldConsumed));
}

#[test]
fn object_downcast_failure_is_reported() {
  let mut reader = FieldReader::new(vec![DecodedField {
    name:  Some("child".into()),
    value: DecodedValue::Object(Some(Box::new(7_u32))),
  }]);
  let err = reader.named("child").expect("select").read_object::<String>().expect_err("wrong type");
  assert!(matches!(err, CodecError::ValueTypeMismatch(_)));
}

#[test]
fn presence_checks_and_field_count() {
  let reader = sample_reader();
  assert!(reader.has_named("flag"));
  assert!(!reader.has_named("absent"));
  assert_eq!(reader.field_count(), 3);
}
