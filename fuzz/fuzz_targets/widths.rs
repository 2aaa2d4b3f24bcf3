//! Fuzz target for cross-width consistency.
//!
//! The 64-bit and 32-bit digests are defined as truncations of the 128-bit
//! primitive; this must hold for every input and seed.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spooky::{hash32, hash64, hash128};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed: u64,
  seed32: u32,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let (h1, _) = hash128(data, input.seed, input.seed);
  assert_eq!(hash64(data, input.seed), h1, "hash64 is not the first word");

  assert_eq!(
    hash32(data, input.seed32),
    hash64(data, u64::from(input.seed32)) as u32,
    "hash32 is not the low half"
  );
});
