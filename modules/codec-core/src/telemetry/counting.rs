//! Lock-free counters tracking codec outcomes.

use core::sync::atomic::{AtomicU64, Ordering};

use super::CodecTelemetry;
use crate::error::CodecError;

/// Telemetry handler that aggregates totals into atomic counters.
pub struct CountingCodecTelemetry {
  objects_encoded_total: AtomicU64,
  objects_decoded_total: AtomicU64,
  failure_total:         AtomicU64,
}

impl CountingCodecTelemetry {
  /// Creates a counter set initialised to zero.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      objects_encoded_total: AtomicU64::new(0),
      objects_decoded_total: AtomicU64::new(0),
      failure_total:         AtomicU64::new(0),
    }
  }

  /// Returns the total number of object records encoded.
  #[must_use]
  pub fn objects_encoded_total(&self) -> u64 {
    self.objects_encoded_total.load(Ordering::Relaxed)
  }

  /// Returns the total number of object records decoded.
  #[must_use]
  pub fn objects_decoded_total(&self) -> u64 {
    self.objects_decoded_total.load(Ordering::Relaxed)
  }

  /// Returns the total number of failed calls.
  #[must_use]
  pub fn failure_total(&self) -> u64 {
    self.failure_total.load(Ordering::Relaxed)
  }
}

impl Default for CountingCodecTelemetry {
  fn default() -> Self {
    Self::new()
  }
}

impl CodecTelemetry for CountingCodecTelemetry {
  fn on_serialize_start(&self) {}

  fn on_serialize_finish(&self) {}

  fn on_deserialize_start(&self) {}

  fn on_deserialize_finish(&self) {}

  fn record_object_encoded(&self, _alias: &str, _field_count: usize) {
    self.objects_encoded_total.fetch_add(1, Ordering::Relaxed);
  }

  fn record_object_decoded(&self, _alias: &str, _field_count: usize) {
    self.objects_decoded_total.fetch_add(1, Ordering::Relaxed);
  }

  fn record_failure(&self, _error: &CodecError) {
    self.failure_total.fetch_add(1, Ordering::Relaxed);
  }
}
