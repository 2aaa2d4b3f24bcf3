//! Long-message path: inputs of two blocks (192 bytes) or more.
//!
//! A stream of identical 96-byte block mixes over 12 words of state, then one
//! terminal end-mix over the zero-padded remainder. The remainder length is
//! written into the last byte of the scratch block so that messages differing
//! only in trailing zeros (or in length by a whole block of zeros) hash
//! differently. The incremental engine reproduces this exact two-phase shape
//! when data arrives split across many updates.

#![allow(clippy::indexing_slicing)] // Tight block parsing

use crate::mix::{BLOCK_SIZE, end, expand_seeds, load_block, mix};

/// Pad the final partial block and tag it with its own length.
///
/// Shared with the incremental engine's finalize so both paths stay
/// bit-identical.
#[inline]
pub(crate) fn remainder_block(remainder: &[u8]) -> [u8; BLOCK_SIZE] {
  debug_assert!(remainder.len() < BLOCK_SIZE);

  let mut scratch = [0u8; BLOCK_SIZE];
  scratch[..remainder.len()].copy_from_slice(remainder);
  scratch[BLOCK_SIZE - 1] = remainder.len() as u8;
  scratch
}

/// Hash a message of at least [`BUF_SIZE`](crate::mix::BUF_SIZE) bytes.
///
/// Pure function of `(data, seed1, seed2)`; returns the two 64-bit digest
/// words.
pub(crate) fn hash_long(data: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  debug_assert!(data.len() >= crate::mix::BUF_SIZE);

  let mut state = expand_seeds(seed1, seed2);

  let (blocks, rest) = data.as_chunks::<BLOCK_SIZE>();
  for block in blocks {
    mix(&load_block(block), &mut state);
  }

  end(&load_block(&remainder_block(rest)), &mut state);
  (state[0], state[1])
}
