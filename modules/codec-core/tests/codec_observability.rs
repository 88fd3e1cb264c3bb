use std::sync::Arc;

use turbotape_codec_core_rs::{
  Codec, CodecBuilder, CodecError, CountingCodecTelemetry, FieldReader, FieldWriter,
};

#[derive(Debug, PartialEq)]
struct Envelope {
  subject: String,
  body:    Body,
}

#[derive(Debug, PartialEq)]
struct Body {
  length: i32,
}

fn write_envelope<'v>(writer: &mut FieldWriter<'v, '_>, value: &'v Envelope) -> Result<(), CodecError> {
  writer.write_str(&value.subject).named("subject")?;
  writer.write_object(&value.body).named("body")?;
  Ok(())
}

fn read_envelope(reader: &mut FieldReader) -> Result<Envelope, CodecError> {
  Ok(Envelope { subject: reader.named("subject")?.read_string()?, body: reader.named("body")?.read_object()? })
}

fn write_body<'v>(writer: &mut FieldWriter<'v, '_>, value: &'v Body) -> Result<(), CodecError> {
  writer.write_i32(value.length).named("length")?;
  Ok(())
}

fn read_body(reader: &mut FieldReader) -> Result<Body, CodecError> {
  Ok(Body { length: reader.named("length")?.read_i32()? })
}

fn codec_with_counters() -> (Codec, Arc<CountingCodecTelemetry>) {
  let counters = Arc::new(CountingCodecTelemetry::new());
  let mut builder = CodecBuilder::new().with_telemetry(counters.clone());
  builder.register::<Envelope, _, _>(Some("Envelope".into()), write_envelope, read_envelope).expect("envelope");
  builder.register::<Body, _, _>(Some("Body".into()), write_body, read_body).expect("body");
  (builder.build().expect("build"), counters)
}

#[test]
fn counts_every_object_record_in_both_directions() {
  let (codec, counters) = codec_with_counters();
  let value = Envelope { subject: "metrics".into(), body: Body { length: 7 } };

  let bytes = codec.serialize_to_vec(&value).expect("serialize");
  assert_eq!(counters.objects_encoded_total(), 2);
  assert_eq!(counters.objects_decoded_total(), 0);

  let decoded: Envelope = codec.deserialize_slice(&bytes).expect("deserialize");
  assert_eq!(decoded, value);
  assert_eq!(counters.objects_encoded_total(), 2);
  assert_eq!(counters.objects_decoded_total(), 2);
  assert_eq!(counters.failure_total(), 0);
}

#[test]
fn counts_failed_calls() {
  let (codec, counters) = codec_with_counters();

  let err = codec.deserialize_slice::<Envelope>(b"not a stream").expect_err("bad header");
  assert!(matches!(err, CodecError::BadHeader));
  assert_eq!(counters.failure_total(), 1);

  struct Stranger;
  let err = codec.serialize_to_vec(&Stranger).expect_err("unregistered");
  assert!(matches!(err, CodecError::UnregisteredType(_)));
  assert_eq!(counters.failure_total(), 2);
}
