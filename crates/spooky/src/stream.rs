//! Incremental SpookyHash V2.
//!
//! [`SpookyHasher`] accepts bytes in arbitrary-sized chunks and can be
//! queried for the digest at any point without disturbing further
//! accumulation. The short/long decision is made lazily: everything is
//! buffered until the stream reaches 192 bytes, at which point the 12-word
//! state is initialized and whole 96-byte blocks are mixed eagerly as they
//! complete.

#![allow(clippy::indexing_slicing)] // Fixed-size buffer management

use crate::long::remainder_block;
use crate::mix::{BLOCK_SIZE, BUF_SIZE, NUM_VARS, end, expand_seeds, load_block, mix};
use crate::oneshot::pack128;
use crate::short::hash_short;

/// Streaming SpookyHash V2 accumulator.
///
/// Owns its buffer and state outright; input bytes are copied in during
/// [`update`](Self::update), so the caller's buffer may be reused or mutated
/// freely afterwards. A single instance is single-owner: wrap it in external
/// synchronization if it must be shared across threads. Independent instances
/// hash in parallel with no shared mutable state.
///
/// # Example
///
/// ```
/// use spooky::SpookyHasher;
///
/// let mut hasher = SpookyHasher::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let digest = hasher.digest();
///
/// assert_eq!(digest, SpookyHasher::oneshot(b"hello world"));
/// ```
#[derive(Clone)]
pub struct SpookyHasher {
  /// Bytes not yet mixed: the whole message while short, under one block
  /// once the long path has been entered.
  buf: [u8; BUF_SIZE],
  buf_len: usize,
  /// Running long-path state; meaningful only once `long` is set.
  state: [u64; NUM_VARS],
  /// Total bytes consumed, mixed plus buffered.
  total_len: u64,
  seed1: u64,
  seed2: u64,
  /// Whether the 192-byte threshold has been crossed.
  long: bool,
}

impl SpookyHasher {
  /// Create a hasher with both seeds zero.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self::with_seed(0, 0)
  }

  /// Create a hasher with an explicit seed pair.
  ///
  /// The seed pair is fixed for the lifetime of the hasher.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed1: u64, seed2: u64) -> Self {
    Self {
      buf: [0u8; BUF_SIZE],
      buf_len: 0,
      state: [0u64; NUM_VARS],
      total_len: 0,
      seed1,
      seed2,
      long: false,
    }
  }

  /// Total number of bytes consumed so far.
  #[inline]
  #[must_use]
  pub const fn total_len(&self) -> u64 {
    self.total_len
  }

  /// Append `data` to the stream.
  ///
  /// Never fails and never blocks; empty slices are no-ops.
  pub fn update(&mut self, mut data: &[u8]) {
    self.total_len += data.len() as u64;

    if !self.long {
      // Short so far: the short path needs the complete message, so nothing
      // can be mixed until the stream is known to be long.
      if self.buf_len + data.len() < BUF_SIZE {
        self.buf[self.buf_len..self.buf_len + data.len()].copy_from_slice(data);
        self.buf_len += data.len();
        return;
      }

      // Threshold crossed: expand the seed pair into the running state and
      // drain the buffer as two whole blocks.
      self.state = expand_seeds(self.seed1, self.seed2);
      self.long = true;

      let prefix = BUF_SIZE - self.buf_len;
      self.buf[self.buf_len..].copy_from_slice(&data[..prefix]);
      data = &data[prefix..];

      let (blocks, _) = self.buf.as_chunks::<BLOCK_SIZE>();
      let first = load_block(&blocks[0]);
      let second = load_block(&blocks[1]);
      mix(&first, &mut self.state);
      mix(&second, &mut self.state);
      self.buf_len = 0;
    } else if self.buf_len > 0 {
      // Long path with a partial block buffered: complete it if possible.
      let take = (BLOCK_SIZE - self.buf_len).min(data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      if self.buf_len < BLOCK_SIZE {
        return;
      }
      let (blocks, _) = self.buf.as_chunks::<BLOCK_SIZE>();
      let block = load_block(&blocks[0]);
      mix(&block, &mut self.state);
      self.buf_len = 0;
    }

    // Mix every whole block of the remaining input, buffer the tail.
    let (blocks, rest) = data.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
      mix(&load_block(block), &mut self.state);
    }
    if !rest.is_empty() {
      self.buf[..rest.len()].copy_from_slice(rest);
      self.buf_len = rest.len();
    }
  }

  /// Compute the digest of all bytes consumed so far as two 64-bit words.
  ///
  /// Copy-then-finalize: the live state and buffer are never touched, so this
  /// is idempotent and may be interleaved with further updates.
  #[must_use]
  pub fn finalize_words(&self) -> (u64, u64) {
    if !self.long {
      return hash_short(&self.buf[..self.buf_len], self.seed1, self.seed2);
    }

    let mut state = self.state;
    let scratch = remainder_block(&self.buf[..self.buf_len]);
    end(&load_block(&scratch), &mut state);
    (state[0], state[1])
  }

  /// Compute the 16-byte digest (each word little-endian, `h1` then `h2`).
  #[inline]
  #[must_use]
  pub fn digest(&self) -> [u8; 16] {
    let (h1, h2) = self.finalize_words();
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&h1.to_le_bytes());
    out[8..].copy_from_slice(&h2.to_le_bytes());
    out
  }

  /// Discard all consumed bytes, retaining the seed pair.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seed(self.seed1, self.seed2);
  }

  /// Hash a complete message in one call with zero seeds, returning the
  /// 16-byte digest.
  #[inline]
  #[must_use]
  pub fn oneshot(data: &[u8]) -> [u8; 16] {
    let (h1, h2) = crate::oneshot::hash128(data, 0, 0);
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&h1.to_le_bytes());
    out[8..].copy_from_slice(&h2.to_le_bytes());
    out
  }
}

impl Default for SpookyHasher {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl traits::StreamHash for SpookyHasher {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;
  type Seed = [u64; 2];

  #[inline]
  fn new() -> Self {
    SpookyHasher::new()
  }

  #[inline]
  fn with_seed(seed: Self::Seed) -> Self {
    SpookyHasher::with_seed(seed[0], seed[1])
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    SpookyHasher::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let (h1, h2) = self.finalize_words();
    pack128(h1, h2)
  }

  #[inline]
  fn reset(&mut self) {
    SpookyHasher::reset(self);
  }
}

#[cfg(feature = "std")]
impl std::io::Write for SpookyHasher {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec;
  use std::vec::Vec;

  use super::SpookyHasher;
  use crate::mix::{BLOCK_SIZE, BUF_SIZE};
  use crate::oneshot::hash128;

  fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let mut x = seed;
    for b in &mut out {
      x ^= x << 13;
      x ^= x >> 7;
      x ^= x << 17;
      *b = (x as u8).wrapping_add((x >> 8) as u8);
    }
    out
  }

  #[test]
  fn matches_oneshot_on_both_paths() {
    for len in [0usize, 1, 31, 32, 95, 96, 191, 192, 193, 287, 288, 1000] {
      let data = gen_bytes(len, len as u64 + 1);
      let mut hasher = SpookyHasher::new();
      hasher.update(&data);
      assert_eq!(hasher.finalize_words(), hash128(&data, 0, 0), "len={len}");
    }
  }

  #[test]
  fn chunked_updates_match_oneshot() {
    let data = gen_bytes(700, 7);
    let oneshot = hash128(&data, 1, 2);

    // Splits landing on block boundaries and straddling the long threshold.
    for splits in [
      vec![0usize, 700],
      vec![96, 192],
      vec![191, 192, 193],
      vec![1, 2, 3, 500],
      vec![BLOCK_SIZE, 2 * BLOCK_SIZE, 3 * BLOCK_SIZE],
      vec![BUF_SIZE],
    ] {
      let mut hasher = SpookyHasher::with_seed(1, 2);
      let mut prev = 0;
      for &split in &splits {
        hasher.update(&data[prev..split]);
        prev = split;
      }
      hasher.update(&data[prev..]);
      assert_eq!(hasher.finalize_words(), oneshot, "splits={splits:?}");
    }
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut hasher = SpookyHasher::new();
    hasher.update(&gen_bytes(250, 3));
    assert_eq!(hasher.digest(), hasher.digest());
  }

  #[test]
  fn update_after_finalize_continues_the_stream() {
    let x = gen_bytes(200, 4);
    let y = gen_bytes(50, 5);
    let mut whole = x.clone();
    whole.extend_from_slice(&y);

    let mut hasher = SpookyHasher::new();
    hasher.update(&x);
    let d1 = hasher.digest();
    hasher.update(&y);
    let d2 = hasher.digest();

    assert_eq!(d2, SpookyHasher::oneshot(&whole));
    assert_ne!(d1, d2);
  }

  #[test]
  fn total_len_counts_mixed_and_buffered_bytes() {
    let mut hasher = SpookyHasher::new();
    hasher.update(&[0u8; 100]);
    assert_eq!(hasher.total_len(), 100);
    hasher.update(&[0u8; 150]);
    assert_eq!(hasher.total_len(), 250);
    let _ = hasher.digest();
    assert_eq!(hasher.total_len(), 250);
  }

  #[test]
  fn reset_restores_the_seeded_initial_state() {
    let mut hasher = SpookyHasher::with_seed(9, 9);
    hasher.update(b"garbage");
    hasher.reset();
    hasher.update(b"test");
    assert_eq!(hasher.finalize_words(), hash128(b"test", 9, 9));
  }

  #[test]
  fn clone_forks_the_stream() {
    let mut hasher = SpookyHasher::new();
    hasher.update(&gen_bytes(300, 6));

    let mut fork = hasher.clone();
    hasher.update(b"a");
    fork.update(b"a");
    assert_eq!(hasher.digest(), fork.digest());
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_write_feeds_the_hasher() {
    use std::io::Write;

    let data = gen_bytes(400, 8);
    let mut hasher = SpookyHasher::new();
    hasher.write_all(&data).unwrap();
    hasher.flush().unwrap();
    assert_eq!(hasher.digest(), SpookyHasher::oneshot(&data));
  }
}
