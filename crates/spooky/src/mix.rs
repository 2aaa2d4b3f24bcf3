//! SpookyHash V2 mixing primitives.
//!
//! The rotation schedules and `SC_CONST` below are the published SpookyHash V2
//! protocol constants. They are not tunable: any deviation silently changes
//! every digest the crate produces, breaking compatibility with existing
//! fingerprints without any observable error. Transcribed verbatim from the
//! reference implementation.

#![allow(clippy::indexing_slicing)] // Fixed-size state arrays and block parsing

/// `0xdeadbeefdeadbeef`: odd, and a non-repeating pattern of 0s and 1s.
///
/// Seeds the two non-seed registers of the short path and every third word of
/// the long-path state, and pads empty short-path tails.
pub(crate) const SC_CONST: u64 = 0xdead_beef_dead_beef;

/// Number of 64-bit words of long-path internal state.
pub(crate) const NUM_VARS: usize = 12;

/// Bytes consumed per long-path block mix.
pub(crate) const BLOCK_SIZE: usize = NUM_VARS * 8;

/// Long-path threshold: inputs shorter than two blocks take the short path.
pub(crate) const BUF_SIZE: usize = 2 * BLOCK_SIZE;

/// One block mix: absorb a 96-byte block into the 12-word state.
///
/// Each row absorbs one data word and cycles add/xor/rotate across the state.
/// The rotation schedule achieves avalanche for the whole state only after
/// several consecutive blocks; [`end`] supplies the missing rounds at
/// finalization.
#[inline(always)]
pub(crate) fn mix(data: &[u64; NUM_VARS], s: &mut [u64; NUM_VARS]) {
  s[0] = s[0].wrapping_add(data[0]);    s[2] ^= s[10];  s[11] ^= s[0];   s[0] = s[0].rotate_left(11);   s[11] = s[11].wrapping_add(s[1]);
  s[1] = s[1].wrapping_add(data[1]);    s[3] ^= s[11];  s[0] ^= s[1];    s[1] = s[1].rotate_left(32);   s[0] = s[0].wrapping_add(s[2]);
  s[2] = s[2].wrapping_add(data[2]);    s[4] ^= s[0];   s[1] ^= s[2];    s[2] = s[2].rotate_left(43);   s[1] = s[1].wrapping_add(s[3]);
  s[3] = s[3].wrapping_add(data[3]);    s[5] ^= s[1];   s[2] ^= s[3];    s[3] = s[3].rotate_left(31);   s[2] = s[2].wrapping_add(s[4]);
  s[4] = s[4].wrapping_add(data[4]);    s[6] ^= s[2];   s[3] ^= s[4];    s[4] = s[4].rotate_left(17);   s[3] = s[3].wrapping_add(s[5]);
  s[5] = s[5].wrapping_add(data[5]);    s[7] ^= s[3];   s[4] ^= s[5];    s[5] = s[5].rotate_left(28);   s[4] = s[4].wrapping_add(s[6]);
  s[6] = s[6].wrapping_add(data[6]);    s[8] ^= s[4];   s[5] ^= s[6];    s[6] = s[6].rotate_left(39);   s[5] = s[5].wrapping_add(s[7]);
  s[7] = s[7].wrapping_add(data[7]);    s[9] ^= s[5];   s[6] ^= s[7];    s[7] = s[7].rotate_left(57);   s[6] = s[6].wrapping_add(s[8]);
  s[8] = s[8].wrapping_add(data[8]);    s[10] ^= s[6];  s[7] ^= s[8];    s[8] = s[8].rotate_left(55);   s[7] = s[7].wrapping_add(s[9]);
  s[9] = s[9].wrapping_add(data[9]);    s[11] ^= s[7];  s[8] ^= s[9];    s[9] = s[9].rotate_left(54);   s[8] = s[8].wrapping_add(s[10]);
  s[10] = s[10].wrapping_add(data[10]); s[0] ^= s[8];   s[9] ^= s[10];   s[10] = s[10].rotate_left(22); s[9] = s[9].wrapping_add(s[11]);
  s[11] = s[11].wrapping_add(data[11]); s[1] ^= s[9];   s[10] ^= s[11];  s[11] = s[11].rotate_left(46); s[10] = s[10].wrapping_add(s[0]);
}

/// One finalization round over the 12-word state.
#[inline(always)]
fn end_partial(h: &mut [u64; NUM_VARS]) {
  h[11] = h[11].wrapping_add(h[1]);  h[2] ^= h[11];   h[1] = h[1].rotate_left(44);
  h[0] = h[0].wrapping_add(h[2]);    h[3] ^= h[0];    h[2] = h[2].rotate_left(15);
  h[1] = h[1].wrapping_add(h[3]);    h[4] ^= h[1];    h[3] = h[3].rotate_left(34);
  h[2] = h[2].wrapping_add(h[4]);    h[5] ^= h[2];    h[4] = h[4].rotate_left(21);
  h[3] = h[3].wrapping_add(h[5]);    h[6] ^= h[3];    h[5] = h[5].rotate_left(38);
  h[4] = h[4].wrapping_add(h[6]);    h[7] ^= h[4];    h[6] = h[6].rotate_left(33);
  h[5] = h[5].wrapping_add(h[7]);    h[8] ^= h[5];    h[7] = h[7].rotate_left(10);
  h[6] = h[6].wrapping_add(h[8]);    h[9] ^= h[6];    h[8] = h[8].rotate_left(13);
  h[7] = h[7].wrapping_add(h[9]);    h[10] ^= h[7];   h[9] = h[9].rotate_left(38);
  h[8] = h[8].wrapping_add(h[10]);   h[11] ^= h[8];   h[10] = h[10].rotate_left(53);
  h[9] = h[9].wrapping_add(h[11]);   h[0] ^= h[9];    h[11] = h[11].rotate_left(42);
  h[10] = h[10].wrapping_add(h[0]);  h[1] ^= h[10];   h[0] = h[0].rotate_left(54);
}

/// End mix: absorb the final (padded, length-tagged) block, then run three
/// finalization rounds for full avalanche before the first two words are
/// read out as the 128-bit result.
#[inline(always)]
pub(crate) fn end(data: &[u64; NUM_VARS], h: &mut [u64; NUM_VARS]) {
  for (h, d) in h.iter_mut().zip(data) {
    *h = h.wrapping_add(*d);
  }
  end_partial(h);
  end_partial(h);
  end_partial(h);
}

/// Short-path mix over the four working registers.
#[inline(always)]
pub(crate) fn short_mix(a: &mut u64, b: &mut u64, c: &mut u64, d: &mut u64) {
  *c = c.rotate_left(50);  *c = c.wrapping_add(*d);  *a ^= *c;
  *d = d.rotate_left(52);  *d = d.wrapping_add(*a);  *b ^= *d;
  *a = a.rotate_left(30);  *a = a.wrapping_add(*b);  *c ^= *a;
  *b = b.rotate_left(41);  *b = b.wrapping_add(*c);  *d ^= *b;
  *c = c.rotate_left(54);  *c = c.wrapping_add(*d);  *a ^= *c;
  *d = d.rotate_left(48);  *d = d.wrapping_add(*a);  *b ^= *d;
  *a = a.rotate_left(38);  *a = a.wrapping_add(*b);  *c ^= *a;
  *b = b.rotate_left(37);  *b = b.wrapping_add(*c);  *d ^= *b;
  *c = c.rotate_left(62);  *c = c.wrapping_add(*d);  *a ^= *c;
  *d = d.rotate_left(34);  *d = d.wrapping_add(*a);  *b ^= *d;
  *a = a.rotate_left(5);   *a = a.wrapping_add(*b);  *c ^= *a;
  *b = b.rotate_left(36);  *b = b.wrapping_add(*c);  *d ^= *b;
}

/// Short-path finalization: extra rounds so every input bit can reach every
/// output bit of `(a, b)`.
#[inline(always)]
pub(crate) fn short_end(a: &mut u64, b: &mut u64, c: &mut u64, d: &mut u64) {
  *d ^= *c;  *c = c.rotate_left(15);  *d = d.wrapping_add(*c);
  *a ^= *d;  *d = d.rotate_left(52);  *a = a.wrapping_add(*d);
  *b ^= *a;  *a = a.rotate_left(26);  *b = b.wrapping_add(*a);
  *c ^= *b;  *b = b.rotate_left(51);  *c = c.wrapping_add(*b);
  *d ^= *c;  *c = c.rotate_left(28);  *d = d.wrapping_add(*c);
  *a ^= *d;  *d = d.rotate_left(9);   *a = a.wrapping_add(*d);
  *b ^= *a;  *a = a.rotate_left(47);  *b = b.wrapping_add(*a);
  *c ^= *b;  *b = b.rotate_left(54);  *c = c.wrapping_add(*b);
  *d ^= *c;  *c = c.rotate_left(32);  *d = d.wrapping_add(*c);
  *a ^= *d;  *d = d.rotate_left(25);  *a = a.wrapping_add(*d);
  *b ^= *a;  *a = a.rotate_left(63);  *b = b.wrapping_add(*a);
}

/// Decode a 96-byte block into 12 little-endian words.
///
/// Little-endian reads keep digests bit-identical across platforms.
#[inline(always)]
pub(crate) fn load_block(bytes: &[u8; BLOCK_SIZE]) -> [u64; NUM_VARS] {
  let mut words = [0u64; NUM_VARS];
  let (chunks, _) = bytes.as_chunks::<8>();
  for (word, chunk) in words.iter_mut().zip(chunks) {
    *word = u64::from_le_bytes(*chunk);
  }
  words
}

/// Expand a seed pair into the initial 12-word long-path state.
#[inline(always)]
pub(crate) fn expand_seeds(seed1: u64, seed2: u64) -> [u64; NUM_VARS] {
  [
    seed1, seed2, SC_CONST,
    seed1, seed2, SC_CONST,
    seed1, seed2, SC_CONST,
    seed1, seed2, SC_CONST,
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn load_block_is_little_endian() {
    let mut bytes = [0u8; BLOCK_SIZE];
    bytes[0] = 0x01;
    bytes[8] = 0xff;
    bytes[95] = 0x80;

    let words = load_block(&bytes);
    assert_eq!(words[0], 0x01);
    assert_eq!(words[1], 0xff);
    assert_eq!(words[11], 0x80 << 56);
  }

  #[test]
  fn expand_seeds_layout() {
    let state = expand_seeds(1, 2);
    for i in 0..NUM_VARS {
      match i % 3 {
        0 => assert_eq!(state[i], 1),
        1 => assert_eq!(state[i], 2),
        _ => assert_eq!(state[i], SC_CONST),
      }
    }
  }

  #[test]
  fn mix_depends_on_every_data_word() {
    let base = [0u64; NUM_VARS];
    let mut reference = expand_seeds(0, 0);
    mix(&base, &mut reference);

    for i in 0..NUM_VARS {
      let mut data = base;
      data[i] = 1;
      let mut state = expand_seeds(0, 0);
      mix(&data, &mut state);
      assert_ne!(state, reference, "data word {i} did not affect the state");
    }
  }
}
