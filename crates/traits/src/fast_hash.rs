//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot: it consumes a complete, already
/// materialized buffer. Incremental hashing over arbitrary chunk boundaries
/// requires algorithm-specific buffering and is exposed through
/// [`StreamHash`](crate::StreamHash).
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (typically `u64`, or `[u64; 2]` for 128-bit families).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default (all-zero) seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  ///
  /// Distinct seeds select distinct hash families over the same message
  /// space; the output is a pure function of `(seed, data)`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
