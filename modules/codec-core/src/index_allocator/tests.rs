use super::{AllocatedIndex, IndexAllocator};
use crate::error::CodecError;

#[test]
fn assigns_indices_monotonically_from_one() {
  let mut allocator = IndexAllocator::new(16);
  let first = allocator.allocate("alpha").expect("alpha");
  let second = allocator.allocate("beta").expect("beta");
  assert_eq!(first.value(), 1);
  assert!(first.newly_allocated());
  assert_eq!(second.value(), 2);
  assert!(second.newly_allocated());
}

#[test]
fn reuses_existing_index_without_new_flag() {
  let mut allocator = IndexAllocator::new(16);
  let first = allocator.allocate("alpha").expect("first");
  let again = allocator.allocate("alpha").expect("again");
  assert_eq!(again.value(), first.value());
  assert!(!again.newly_allocated());
}

#[test]
fn null_index_is_zero_and_never_new() {
  assert_eq!(AllocatedIndex::NULL.value(), 0);
  assert!(!AllocatedIndex::NULL.newly_allocated());
}

#[test]
fn rejects_allocation_past_the_limit() {
  let mut allocator = IndexAllocator::new(4);
  allocator.allocate("a").expect("a");
  allocator.allocate("b").expect("b");
  allocator.allocate("c").expect("c");
  let err = allocator.allocate("d").expect_err("table full");
  assert!(matches!(err, CodecError::IndexLimitExceeded { limit: 4 }));
}

#[test]
fn known_names_still_resolve_after_the_limit() {
  let mut allocator = IndexAllocator::new(2);
  allocator.allocate("only").expect("only");
  allocator.allocate("other").expect_err("full");
  let existing = allocator.allocate("only").expect("existing");
  assert_eq!(existing.value(), 1);
}

#[test]
fn field_table_capacity_matches_the_twelve_bit_header_slot() {
  let mut allocator = IndexAllocator::new(1 << 12);
  for n in 1..=4095_u32 {
    let index = allocator.allocate(&format!("field-{n}")).expect("within capacity");
    assert_eq!(u32::from(index.value()), n);
  }
  let err = allocator.allocate("field-4096").expect_err("past capacity");
  assert!(matches!(err, CodecError::IndexLimitExceeded { limit } if limit == 1 << 12));
}
