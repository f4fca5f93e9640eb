//! # hedron-crypto
//!
//! Hashing primitives used to derive function selectors.
//!
//! - Keccak-256 hashing
//! - [`SelectorHasher`]: the pluggable hash consumed by the codec

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::{keccak256, Keccak256Hasher, SelectorHasher};
