//! Short-message path: inputs below two blocks (192 bytes).
//!
//! Runs entirely in four registers seeded from `(seed1, seed2, SC_CONST,
//! SC_CONST)`. The message length is folded into the top byte of `d` before
//! the tail is absorbed, so trailing zero bytes and an absent tail hash
//! differently.

#![allow(clippy::indexing_slicing)] // Tight block parsing

use crate::mix::{SC_CONST, short_end, short_mix};

/// Hash a message shorter than [`BUF_SIZE`](crate::mix::BUF_SIZE) bytes.
///
/// Pure function of `(data, seed1, seed2)`; returns the two 64-bit digest
/// words.
pub(crate) fn hash_short(data: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  debug_assert!(data.len() < crate::mix::BUF_SIZE);

  let mut a = seed1;
  let mut b = seed2;
  let mut c = SC_CONST;
  let mut d = SC_CONST;

  // Whole 32-byte chunks: two words before the mix, two after.
  let (chunks, mut tail) = data.as_chunks::<32>();
  for chunk in chunks {
    let (words, _) = chunk.as_chunks::<8>();
    c = c.wrapping_add(u64::from_le_bytes(words[0]));
    d = d.wrapping_add(u64::from_le_bytes(words[1]));
    short_mix(&mut a, &mut b, &mut c, &mut d);
    a = a.wrapping_add(u64::from_le_bytes(words[2]));
    b = b.wrapping_add(u64::from_le_bytes(words[3]));
  }

  // One extra 16-byte absorb if the tail still holds two words.
  if tail.len() >= 16 {
    let (head, rest) = tail.split_at(16);
    let (words, _) = head.as_chunks::<8>();
    c = c.wrapping_add(u64::from_le_bytes(words[0]));
    d = d.wrapping_add(u64::from_le_bytes(words[1]));
    short_mix(&mut a, &mut b, &mut c, &mut d);
    tail = rest;
  }

  // Fold the total length into the top byte of `d`, then absorb the last
  // 0..=15 bytes zero-padded. An empty tail absorbs SC_CONST instead, which
  // keeps it distinct from a tail of zero bytes.
  d = d.wrapping_add((data.len() as u64) << 56);
  if tail.is_empty() {
    c = c.wrapping_add(SC_CONST);
    d = d.wrapping_add(SC_CONST);
  } else {
    let mut padded = [0u8; 16];
    padded[..tail.len()].copy_from_slice(tail);
    let (words, _) = padded.as_chunks::<8>();
    c = c.wrapping_add(u64::from_le_bytes(words[0]));
    d = d.wrapping_add(u64::from_le_bytes(words[1]));
  }

  short_end(&mut a, &mut b, &mut c, &mut d);
  (a, b)
}
