//! Function signatures and selectors

use std::fmt;
use std::str::FromStr;

use hedron_crypto::{Keccak256Hasher, SelectorHasher};
use hedron_primitives::Selector;

use crate::abi::{parse_type, ParamType};
use crate::SdkError;

/// Accumulates a function name and its declared parameter types.
///
/// ```rust
/// use hedron_sdk::FunctionSelector;
///
/// let mut func = FunctionSelector::new("f");
/// func.add_param_type("uint32")?
///     .add_param_type("bytes")?
///     .add_param_type("uint64")?
///     .add_param_type("bytes")?
///     .add_param_type("string")?;
///
/// assert_eq!(func.to_signature(), "f(uint32,bytes,uint64,bytes,string)");
/// assert_eq!(func.to_selector_bytes().to_hex(), "0x4fec5a19");
/// # Ok::<(), hedron_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSelector {
    name: String,
    param_types: Vec<ParamType>,
}

impl FunctionSelector {
    /// Create a selector for `name` with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_types: Vec::new(),
        }
    }

    /// Parse a full signature such as `transfer(uint256,bytes)`
    pub fn parse_signature(signature: &str) -> Result<Self, SdkError> {
        let signature = signature.trim();
        let (name, rest) = signature
            .split_once('(')
            .ok_or_else(|| SdkError::InvalidTypeName(signature.to_string()))?;
        let args = rest
            .strip_suffix(')')
            .ok_or_else(|| SdkError::InvalidTypeName(signature.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SdkError::MissingFunctionName);
        }

        let mut selector = Self::new(name);
        if !args.trim().is_empty() {
            for arg in args.split(',') {
                selector.add_param_type(arg)?;
            }
        }
        Ok(selector)
    }

    /// Append a parameter type given by its short name.
    ///
    /// On error the selector is left unchanged.
    pub fn add_param_type(&mut self, tag: &str) -> Result<&mut Self, SdkError> {
        let ty = parse_type(tag)?;
        Ok(self.push_param_type(ty))
    }

    /// Append an already parsed parameter type
    pub fn push_param_type(&mut self, ty: ParamType) -> &mut Self {
        self.param_types.push(ty);
        self
    }

    /// Builder form of [`push_param_type`](Self::push_param_type)
    pub fn with_param_type(mut self, ty: ParamType) -> Self {
        self.param_types.push(ty);
        self
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter types, in order
    pub fn param_types(&self) -> &[ParamType] {
        &self.param_types
    }

    /// Canonical signature: `name(type1,type2,...)`
    pub fn to_signature(&self) -> String {
        let types: Vec<&str> = self.param_types.iter().map(ParamType::canonical_name).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// Selector computed with Keccak-256
    pub fn to_selector_bytes(&self) -> Selector {
        self.to_selector_bytes_with(&Keccak256Hasher)
    }

    /// Selector computed with a caller-supplied hash
    pub fn to_selector_bytes_with<H: SelectorHasher + ?Sized>(&self, hasher: &H) -> Selector {
        Selector::from_digest(&hasher.hash(self.to_signature().as_bytes()))
    }
}

impl fmt::Display for FunctionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_signature())
    }
}

impl FromStr for FunctionSelector {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_signature(s)
    }
}
