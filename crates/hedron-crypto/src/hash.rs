//! Keccak-256 hashing and the selector hash seam

use hedron_primitives::H256;
use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    H256::from_bytes(result.into())
}

/// Hash applied to a canonical function signature to derive its selector.
///
/// Implementations must be deterministic: the same input always yields the
/// same digest. Only the first four bytes of the digest are consumed.
pub trait SelectorHasher {
    /// Hash the UTF-8 bytes of a signature
    fn hash(&self, data: &[u8]) -> H256;
}

/// The Keccak-256 selector hash used by EVM-compatible contracts
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl SelectorHasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> H256 {
        keccak256(data)
    }
}

impl<F> SelectorHasher for F
where
    F: Fn(&[u8]) -> H256,
{
    fn hash(&self, data: &[u8]) -> H256 {
        self(data)
    }
}
