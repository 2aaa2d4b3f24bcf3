//! Core hashing traits for the spookyhash workspace.
//!
//! This crate provides the foundational traits that the algorithm crates
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | Seeded one-shot non-cryptographic hashes | SpookyHash 32/64/128 |
//! | [`StreamHash`] | Incremental hashing with non-destructive finalize | `SpookyHasher` |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fast_hash;
mod stream;

pub use fast_hash::FastHash;
pub use stream::StreamHash;
