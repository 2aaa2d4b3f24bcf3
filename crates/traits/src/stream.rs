//! Incremental hashing traits.
//!
//! This trait is deliberately shaped like a streaming checksum interface:
//! chunked updates, idempotent finalize, and reset support. The defining
//! contract is that `finalize` takes `&self` — querying the digest never
//! disturbs the running state, so callers may interleave `finalize` and
//! `update` freely.

use core::fmt::Debug;

/// An incremental (streaming) hash.
///
/// Bytes may arrive in arbitrary-sized chunks over any number of
/// [`update`](Self::update) calls; the result is a function of the
/// concatenated byte stream and the seed only, never of the chunk boundaries.
///
/// # Usage
///
/// ```rust,ignore
/// use spooky::SpookyHasher;
/// use traits::StreamHash;
///
/// let mut hasher = SpookyHasher::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let digest = hasher.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent: calling it twice with no intervening
///   `update` returns identical output
/// - `finalize()` must be non-destructive: an `update` after `finalize`
///   continues the stream as if `finalize` was never called
/// - `reset()` must restore the hasher to its initial state, keeping the seed
pub trait StreamHash: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug;

  /// Seed type (typically `u64`, or `[u64; 2]` for 128-bit families).
  type Seed: Copy + Debug + Default;

  /// Create a new hasher with the default (all-zero) seed.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom seed.
  ///
  /// The seed is fixed for the lifetime of the hasher.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called any number of times; empty slices are no-ops.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each
  /// buffer in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  ///
  /// This is a convenience for integrating with vectored I/O APIs.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the hash of all bytes consumed so far.
  ///
  /// This method does not consume or mutate the hasher, allowing further
  /// updates afterwards.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state, retaining the seed.
  fn reset(&mut self);

  /// Compute the hash of data in one shot with the default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the hash of data in one shot with `seed`.
  #[inline]
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize()
  }
}
