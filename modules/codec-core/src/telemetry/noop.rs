//! No-op telemetry implementation used as the default.

use super::CodecTelemetry;
use crate::error::CodecError;

/// Telemetry handler that discards all events.
pub struct NoopCodecTelemetry;

impl NoopCodecTelemetry {
  /// Creates a telemetry handler that performs no work.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for NoopCodecTelemetry {
  fn default() -> Self {
    Self::new()
  }
}

impl CodecTelemetry for NoopCodecTelemetry {
  fn on_serialize_start(&self) {}

  fn on_serialize_finish(&self) {}

  fn on_deserialize_start(&self) {}

  fn on_deserialize_finish(&self) {}

  fn record_object_encoded(&self, _alias: &str, _field_count: usize) {}

  fn record_object_decoded(&self, _alias: &str, _field_count: usize) {}

  fn record_failure(&self, _error: &CodecError) {}
}
