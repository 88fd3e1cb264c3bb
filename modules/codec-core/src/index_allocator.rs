//! Per-call name interning for the encode side.

use hashbrown::HashMap;

use super::error::CodecError;

#[cfg(test)]
mod tests;

/// Index handed out for a name by the [`IndexAllocator`].
///
/// The `newly_allocated` flag tells the caller whether the name string must
/// still be transmitted inline alongside the index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AllocatedIndex {
  value:           u16,
  newly_allocated: bool,
}

impl AllocatedIndex {
  /// The null index, representing "no name was supplied". Never new.
  pub const NULL: Self = Self { value: 0, newly_allocated: false };

  /// Returns the small-integer value assigned to the name.
  #[must_use]
  pub const fn value(&self) -> u16 {
    self.value
  }

  /// Indicates whether this call introduced the name for the first time.
  #[must_use]
  pub const fn newly_allocated(&self) -> bool {
    self.newly_allocated
  }
}

/// Assigns monotonically increasing indices to first-seen names.
///
/// A fresh allocator is created for every encode call; tables are never
/// shared across calls or threads. Index 0 is reserved for the null sentinel,
/// so a table with capacity `limit` hands out indices `1..limit`.
pub struct IndexAllocator {
  indices:    HashMap<String, u16>,
  next_index: u32,
  limit:      u32,
}

impl IndexAllocator {
  /// Creates an allocator bounded to `limit` table entries.
  #[must_use]
  pub fn new(limit: u32) -> Self {
    Self { indices: HashMap::new(), next_index: 1, limit }
  }

  /// Returns the existing index for `name`, or assigns the next unused one.
  ///
  /// # Errors
  ///
  /// Returns [`CodecError::IndexLimitExceeded`] once the table is full.
  pub fn allocate(&mut self, name: &str) -> Result<AllocatedIndex, CodecError> {
    if let Some(&value) = self.indices.get(name) {
      return Ok(AllocatedIndex { value, newly_allocated: false });
    }
    if self.next_index >= self.limit {
      return Err(CodecError::IndexLimitExceeded { limit: self.limit });
    }
    let value = self.next_index as u16;
    self.indices.insert(name.to_string(), value);
    self.next_index += 1;
    Ok(AllocatedIndex { value, newly_allocated: true })
  }
}
