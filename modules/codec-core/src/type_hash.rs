//! Compact 31-bit type fingerprints as an alternative to name exchange.

use sha2::{Digest, Sha256};

#[cfg(test)]
mod tests;

/// Mask confining type hashes to their low 31 bits.
///
/// The top bit is reserved so a registry can flag a detected collision and
/// fall back to explicit aliasing; providers must never set it.
pub const TYPE_HASH_MASK: u32 = 0x7FFF_FFFF;

/// Produces a pseudo-unique 31-bit hash for a type string.
///
/// Hashes this short can collide, but the number of types handled by one
/// codec is small and the builder rejects collisions eagerly, so users can
/// always fall back to a custom alias. Implementations must be pure
/// functions of the name string.
pub trait TypeHashProvider: Send + Sync {
  /// Returns the hash for the given type string.
  fn hash(&self, type_string: &str) -> u32;
}

/// Default provider hashing the UTF-8 name with SHA-256.
///
/// The 31-bit value is the big-endian integer formed by the first 4 digest
/// bytes, masked with [`TYPE_HASH_MASK`]. Not the fastest possible scheme,
/// but trivial to reproduce in other languages, and hashes are only computed
/// when the codec is built.
pub struct Sha256TypeHashProvider;

impl TypeHashProvider for Sha256TypeHashProvider {
  fn hash(&self, type_string: &str) -> u32 {
    let digest = Sha256::digest(type_string.as_bytes());
    let prefix = [digest[0], digest[1], digest[2], digest[3]];
    u32::from_be_bytes(prefix) & TYPE_HASH_MASK
  }
}

/// Returns the last path segment of a type's name, used as the default alias.
///
/// Generic parameters are kept verbatim, so types like `Vec<T>` should be
/// registered under an explicit alias instead.
#[must_use]
pub fn simple_type_name<T: ?Sized>() -> &'static str {
  let full = core::any::type_name::<T>();
  let base = full.split('<').next().unwrap_or(full);
  match base.rfind("::") {
    Some(pos) => &full[pos + 2..],
    None => full,
  }
}
