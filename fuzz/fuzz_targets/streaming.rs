//! Fuzz target for the streaming SpookyHash API.
//!
//! Tests that arbitrary sequences of update calls, with digest queries
//! interleaved, produce exactly the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spooky::{SpookyHasher, hash128};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed1: u64,
  seed2: u64,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = hash128(data, input.seed1, input.seed2);

  let mut hasher = SpookyHasher::with_seed(input.seed1, input.seed2);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;

    // Digest queries must never perturb later updates.
    let probe = hasher.finalize_words();
    assert_eq!(probe, hasher.finalize_words(), "digest not idempotent");
  }

  assert_eq!(hasher.finalize_words(), expected, "streaming mismatch");
});
