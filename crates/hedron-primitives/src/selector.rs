//! 4-byte function selector

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::hash::H256;

/// Selector parsing error
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid selector length: expected 4 bytes, got {0}")]
    InvalidLength(usize),
}

/// Function selector: the leading 4 bytes of a signature digest
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Size in bytes
    pub const LEN: usize = 4;

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Selector(bytes)
    }

    /// Take the first four bytes of a digest, in digest order
    pub fn from_digest(digest: &H256) -> Self {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&digest.as_bytes()[..Self::LEN]);
        Selector(bytes)
    }

    /// Parse from hex string, with or without `0x`
    pub fn from_hex(s: &str) -> Result<Self, SelectorError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| SelectorError::InvalidHex(e.to_string()))?;
        let bytes: [u8; 4] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| SelectorError::InvalidLength(bytes.len()))?;
        Ok(Selector(bytes))
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.to_hex())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Selector(bytes)
    }
}

impl From<Selector> for [u8; 4] {
    fn from(selector: Selector) -> Self {
        selector.0
    }
}

impl AsRef<[u8]> for Selector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
