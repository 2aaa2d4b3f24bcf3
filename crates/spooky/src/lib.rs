//! SpookyHash V2 (**NOT CRYPTO**).
//!
//! A seeded, non-cryptographic, 128-bit hash by Bob Jenkins, with 64-bit and
//! 32-bit truncations. Digests are reproducible bit-for-bit across platforms
//! and match the published reference implementation.
//!
//! # Algorithm Shape
//!
//! | Path | Input length | State |
//! |------|--------------|-------|
//! | Short | < 192 bytes | 4 registers, 32-byte chunks |
//! | Long | ≥ 192 bytes | 12 words, 96-byte blocks |
//!
//! Both paths are driven by the same published constant table; the 64-bit and
//! 32-bit widths are truncations of the 128-bit primitive, so the widths are
//! always mutually consistent.
//!
//! # Example
//!
//! ```
//! use spooky::{Spooky64, Spooky128, SpookyHasher};
//! use traits::{FastHash, StreamHash};
//!
//! // One-shot (fastest for data already in memory)
//! let h = Spooky128::hash(b"hello world");
//!
//! // Streaming (for incremental data); finalize never disturbs the stream
//! let mut hasher = SpookyHasher::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(StreamHash::finalize(&hasher), h);
//!
//! // Seeded 64-bit fingerprint
//! let f = Spooky64::hash_with_seed(42, b"hello world");
//! assert_ne!(f, Spooky64::hash(b"hello world"));
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature to drop the
//! `std::io::Write` adapter:
//!
//! ```toml
//! [dependencies]
//! spooky = { version = "0.1", default-features = false }
//! ```
//!
//! # Not Cryptographic
//!
//! SpookyHash offers no collision or preimage resistance against adversarial
//! inputs. Use it for fingerprints, checksums, sharding, and hash tables; do
//! not use it for signatures, MACs, or untrusted-input defense.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod long;
mod mix;
mod oneshot;
mod short;
mod stream;

pub use oneshot::{Spooky32, Spooky64, Spooky128, hash32, hash64, hash128};
pub use stream::SpookyHasher;
// Re-export traits for convenience
pub use traits::{FastHash, StreamHash};
