//! Per-call index-to-name recovery for the decode side.

use hashbrown::HashMap;

use super::error::CodecError;


/// Recovers names for indices encountered while decoding one stream.
///
/// Names are introduced inline at their first occurrence, so indices arrive
/// in strictly increasing order. An unknown index other than the next
/// expected one means the stream references a name that was never
/// introduced, which is reported as corruption.
pub struct IndexResolver {
  names:         HashMap<u16, String>,
  next_expected: u32,
}

impl IndexResolver {
  /// Creates an empty resolver for a single decode call.
  #[must_use]
  pub fn new() -> Self {
    Self { names: HashMap::new(), next_expected: 1 }
  }

  /// Resolves `index` to its name, pulling the inline string via `read_name`
  /// on first occurrence. Index 0 resolves to `None`.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::CorruptStream`] if `index` was never introduced,
  /// or propagates the error from `read_name`.
  pub fn resolve<F>(&mut self, index: u16, read_name: F) -> Result<Option<String>, CodecError>
  where
    F: FnOnce() -> Result<String, CodecError>, {
    if index == 0 {
      return Ok(None);
    }
    if let Some(name) = self.names.get(&index) {
      return Ok(Some(name.clone()));
    }
    if u32::from(index) != self.next_expected {
      return Err(CodecError::CorruptStream(format!("name index {index} referenced before introduction")));
    }
    let name = read_name()?;
    self.names.insert(index, name.clone());
    self.next_expected += 1;
    Ok(Some(name))
  }
}

impl Default for IndexResolver {
  fn default() -> Self {
    Self::new()
  }
}
