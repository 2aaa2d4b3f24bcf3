//! SpookyHash V2 for Rust.
//!
//! A fast, seeded, non-cryptographic hash producing 32-, 64-, or 128-bit
//! digests, with one-shot and incremental computation modes. Bit-compatible
//! with the published reference implementation on every platform.
//!
//! # Quick Start
//!
//! ```
//! use spookyhash::{FastHash, Spooky128, SpookyHasher};
//!
//! // One-shot computation
//! let digest = Spooky128::hash(b"hello world");
//!
//! // Streaming computation
//! let mut hasher = SpookyHasher::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(u128::from_le_bytes(hasher.digest()), digest);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::Write` adapter for [`SpookyHasher`] |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! spookyhash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use spooky::{Spooky32, Spooky64, Spooky128, SpookyHasher, hash32, hash64, hash128};
pub use traits::{FastHash, StreamHash};
