use super::{Sha256TypeHashProvider, TYPE_HASH_MASK, TypeHashProvider, simple_type_name};

#[test]
fn hashes_are_deterministic() {
  let provider = Sha256TypeHashProvider;
  assert_eq!(provider.hash("Map"), provider.hash("Map"));
  assert_eq!(provider.hash("List"), provider.hash("List"));
}

#[test]
fn distinct_names_produce_distinct_hashes() {
  let provider = Sha256TypeHashProvider;
  assert_ne!(provider.hash("Map"), provider.hash("List"));
  assert_ne!(provider.hash("List"), provider.hash("List."));
}

#[test]
fn sign_bit_is_never_set() {
  let provider = Sha256TypeHashProvider;
  for name in ["Map", "List", "Example", "a", ""] {
    assert_eq!(provider.hash(name) & !TYPE_HASH_MASK, 0);
  }
}

struct Plain;

mod nested {
  pub struct Inner;
}

#[test]
fn simple_type_name_strips_the_module_path() {
  assert_eq!(simple_type_name::<Plain>(), "Plain");
  assert_eq!(simple_type_name::<nested::Inner>(), "Inner");
  assert_eq!(simple_type_name::<u32>(), "u32");
}
