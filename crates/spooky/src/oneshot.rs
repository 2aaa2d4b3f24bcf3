//! One-shot entry points and the 32/64/128-bit digest widths.
//!
//! All three widths are defined in terms of the 128-bit primitive: the 64-bit
//! digest is the first word of the 128-bit digest with the seed duplicated,
//! and the 32-bit digest is its low half with the seed zero-extended. The
//! cross-width consistency properties hold by construction.

use traits::FastHash;

use crate::long::hash_long;
use crate::mix::BUF_SIZE;
use crate::short::hash_short;

/// Hash a complete message, returning the two 64-bit digest words.
///
/// Inputs shorter than 192 bytes take the short path, everything else the
/// long path. Both seeds default to 0 through [`Spooky128::hash`].
///
/// The canonical 16-byte serialization is `h1` little-endian followed by
/// `h2` little-endian; see [`Spooky128`] for a `u128` whose `to_le_bytes`
/// produces exactly that.
#[inline]
#[must_use]
pub fn hash128(data: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  if data.len() < BUF_SIZE {
    hash_short(data, seed1, seed2)
  } else {
    hash_long(data, seed1, seed2)
  }
}

/// Hash a complete message to 64 bits: `hash128` with the seed duplicated,
/// first word only.
#[inline]
#[must_use]
pub fn hash64(data: &[u8], seed: u64) -> u64 {
  hash128(data, seed, seed).0
}

/// Hash a complete message to 32 bits: `hash64` with the seed zero-extended,
/// low half only.
#[inline]
#[must_use]
pub fn hash32(data: &[u8], seed: u32) -> u32 {
  hash64(data, u64::from(seed)) as u32
}

/// Pack the two digest words into a `u128` whose little-endian byte order is
/// the canonical 16-byte digest.
#[inline]
pub(crate) fn pack128(h1: u64, h2: u64) -> u128 {
  u128::from(h1) | (u128::from(h2) << 64)
}

/// SpookyHash V2 with a 128-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spooky128;

/// SpookyHash V2 truncated to 64 bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spooky64;

/// SpookyHash V2 truncated to 32 bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spooky32;

impl FastHash for Spooky128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let (h1, h2) = hash128(data, seed[0], seed[1]);
    pack128(h1, h2)
  }
}

impl FastHash for Spooky64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash64(data, seed)
  }
}

impl FastHash for Spooky32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash32(data, seed)
  }
}
