//! # hedron-primitives
//!
//! Primitive types shared by the Hedron crates.
//!
//! - [`H256`]: 32-byte digest produced by the selector hash
//! - [`Selector`]: the 4-byte function selector prefixed to call data
//! - [`U256`]: 256-bit unsigned integer used for ABI words

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;
mod selector;

pub use hash::H256;
pub use selector::{Selector, SelectorError};

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Size of a single ABI word in bytes
pub const WORD_SIZE: usize = 32;
