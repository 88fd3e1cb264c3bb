//! Telemetry hooks invoked by the encode and decode engines.

use super::error::CodecError;

/// Records codec outcomes for observability backends.
///
/// Hooks are invoked synchronously from inside serialize/deserialize calls,
/// so implementations should be cheap and must not block.
pub trait CodecTelemetry: Send + Sync {
  /// Called when a serialize call begins.
  fn on_serialize_start(&self);

  /// Called when a serialize call ends, regardless of success.
  fn on_serialize_finish(&self);

  /// Called when a deserialize call begins.
  fn on_deserialize_start(&self);

  /// Called when a deserialize call ends, regardless of success.
  fn on_deserialize_finish(&self);

  /// Records one object record flushed to the stream.
  fn record_object_encoded(&self, alias: &str, field_count: usize);

  /// Records one object record materialized from the stream.
  fn record_object_decoded(&self, alias: &str, field_count: usize);

  /// Records a failed serialize or deserialize call.
  fn record_failure(&self, error: &CodecError);
}

mod counting;
mod noop;

pub use counting::CountingCodecTelemetry;
pub use noop::NoopCodecTelemetry;
