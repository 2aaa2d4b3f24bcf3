//! Property-based tests for the streaming engine and the derived widths.
//!
//! These verify invariants that must hold for all inputs, not just specific
//! vectors. Uses proptest for randomized input generation.

use proptest::prelude::*;
use spooky::{SpookyHasher, hash32, hash64, hash128};

/// Generate arbitrary byte vectors up to 8KB, enough to cover the long path
/// several blocks deep.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate sorted split points inside `0..=len`.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort_unstable();
    splits.push(len);
    splits.dedup();
    splits
  })
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn chunking_invariance(
    (data, splits) in arb_data().prop_flat_map(|d| {
      let len = d.len();
      (Just(d), arb_splits(len, 8))
    }),
    seed1 in any::<u64>(),
    seed2 in any::<u64>(),
  ) {
    let oneshot = hash128(&data, seed1, seed2);

    let mut hasher = SpookyHasher::with_seed(seed1, seed2);
    let mut prev = 0;
    for &split in &splits {
      hasher.update(&data[prev..split]);
      prev = split;
    }
    prop_assert_eq!(hasher.finalize_words(), oneshot);
  }

  #[test]
  fn finalize_idempotence_and_continuation(
    x in arb_data(),
    y in prop::collection::vec(any::<u8>(), 1..512),
  ) {
    let mut hasher = SpookyHasher::new();
    hasher.update(&x);

    let d1 = hasher.digest();
    prop_assert_eq!(d1, hasher.digest());

    hasher.update(&y);
    let d2 = hasher.digest();

    let mut whole = x.clone();
    whole.extend_from_slice(&y);
    prop_assert_eq!(d2, SpookyHasher::oneshot(&whole));
    prop_assert_ne!(d1, d2);
  }

  #[test]
  fn widths_derive_from_hash128(data in arb_data(), seed in any::<u64>()) {
    prop_assert_eq!(hash64(&data, seed), hash128(&data, seed, seed).0);
  }

  #[test]
  fn hash32_is_the_low_half(data in arb_data(), seed in any::<u32>()) {
    prop_assert_eq!(hash32(&data, seed), hash64(&data, u64::from(seed)) as u32);
  }

  #[test]
  fn distinct_seed_pairs_disagree_on_a_fixed_message(
    a in any::<u64>(),
    b in any::<u64>(),
    c in any::<u64>(),
    d in any::<u64>(),
  ) {
    prop_assume!((a, b) != (c, d));
    prop_assert_ne!(hash128(b"test", a, b), hash128(b"test", c, d));
  }

  #[test]
  fn distinct_messages_disagree(data in arb_data(), flip in any::<usize>()) {
    prop_assume!(!data.is_empty());
    let mut mutated = data.clone();
    let idx = flip % data.len();
    mutated[idx] ^= 1;
    prop_assert_ne!(hash128(&data, 0, 0), hash128(&mutated, 0, 0));
  }

  #[test]
  fn total_len_tracks_consumed_bytes(
    (data, splits) in arb_data().prop_flat_map(|d| {
      let len = d.len();
      (Just(d), arb_splits(len, 4))
    }),
  ) {
    let mut hasher = SpookyHasher::new();
    let mut prev = 0;
    for &split in &splits {
      hasher.update(&data[prev..split]);
      prev = split;
      prop_assert_eq!(hasher.total_len(), split as u64);
    }
  }
}
