//! Call argument values

use hedron_primitives::U256;
use serde_json::{Number, Value};

use super::types::{ArrayElement, ParamType, UintWidth};
use crate::SdkError;

/// A call argument before it is bound to an ABI type.
///
/// The variant decides the inferred type when no type is declared:
/// `Bytes` is `bytes`, `Str` is `string`, `StrArray` is `string[]`,
/// `BytesArray` is `bytes[]` and `Uint` carries its own width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Unsigned integer with an explicit width
    Uint(UintWidth, U256),
    /// Arbitrary-length byte string
    Bytes(Vec<u8>),
    /// UTF-8 text
    Str(String),
    /// Ordered list of UTF-8 strings
    StrArray(Vec<String>),
    /// Ordered list of byte strings
    BytesArray(Vec<Vec<u8>>),
}

impl ParamValue {
    /// A `uint32` value
    pub fn uint32(value: u32) -> Self {
        ParamValue::Uint(UintWidth::W32, U256::from(value))
    }

    /// A `uint64` value
    pub fn uint64(value: u64) -> Self {
        ParamValue::Uint(UintWidth::W64, U256::from(value))
    }

    /// A `uint256` value
    pub fn uint256(value: impl Into<U256>) -> Self {
        ParamValue::Uint(UintWidth::W256, value.into())
    }

    /// A bare number; defaults to `uint256`
    pub fn number(value: impl Into<U256>) -> Self {
        Self::uint256(value)
    }

    /// The ABI type this value encodes as when nothing is declared
    pub fn inferred_type(&self) -> Result<ParamType, SdkError> {
        match self {
            ParamValue::Uint(width, value) => {
                if !width.fits(value) {
                    return Err(SdkError::UnsupportedParamType(format!(
                        "value {} does not fit in {}",
                        value,
                        width.param_type()
                    )));
                }
                Ok(width.param_type())
            }
            ParamValue::Bytes(_) => Ok(ParamType::Bytes),
            ParamValue::Str(_) => Ok(ParamType::String),
            ParamValue::StrArray(_) => Ok(ParamType::Array(ArrayElement::String)),
            ParamValue::BytesArray(_) => Ok(ParamType::Array(ArrayElement::Bytes)),
        }
    }

    /// Short description used in error messages
    pub fn shape(&self) -> &'static str {
        match self {
            ParamValue::Uint(..) => "integer",
            ParamValue::Bytes(_) => "byte string",
            ParamValue::Str(_) => "string",
            ParamValue::StrArray(_) => "string array",
            ParamValue::BytesArray(_) => "byte string array",
        }
    }

    /// Infer a value from loosely typed JSON input.
    ///
    /// Strings become `Str`, non-negative integers become `uint256`,
    /// arrays of strings become `StrArray` and arrays of integers in
    /// `0..=255` become `Bytes`. An empty array is an empty `StrArray`.
    /// Every other shape is rejected.
    pub fn from_json(value: &Value) -> Result<Self, SdkError> {
        match value {
            Value::String(s) => Ok(ParamValue::Str(s.clone())),
            Value::Number(n) => json_uint(n)
                .map(|v| Self::number(v))
                .ok_or_else(|| unsupported_json(value)),
            Value::Array(items) if items.is_empty() => Ok(ParamValue::StrArray(Vec::new())),
            Value::Array(items) => {
                if let Some(strings) = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_owned))
                    .collect::<Option<Vec<_>>>()
                {
                    return Ok(ParamValue::StrArray(strings));
                }
                items
                    .iter()
                    .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                    .collect::<Option<Vec<_>>>()
                    .map(ParamValue::Bytes)
                    .ok_or_else(|| unsupported_json(value))
            }
            _ => Err(unsupported_json(value)),
        }
    }
}

/// Read a JSON number as an unsigned integer from its decimal text.
///
/// Needs serde_json's `arbitrary_precision` so values above `u64::MAX`
/// keep their digits.
fn json_uint(n: &Number) -> Option<U256> {
    let text = n.to_string();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_dec_str(&text).ok()
}

fn unsupported_json(value: &Value) -> SdkError {
    let shape = match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => {
            let text = n.to_string();
            if text.starts_with('-') {
                format!("negative number {}", text)
            } else if text.contains(['.', 'e', 'E']) {
                format!("non-integer number {}", text)
            } else {
                format!("number {} does not fit in uint256", text)
            }
        }
        Value::Object(_) => "object".to_string(),
        Value::Array(_) => "array with mixed or nested elements".to_string(),
        Value::String(_) => "string".to_string(),
    };
    SdkError::UnsupportedParamType(shape)
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::uint32(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::uint64(value)
    }
}

impl From<U256> for ParamValue {
    fn from(value: U256) -> Self {
        Self::uint256(value)
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(value: Vec<u8>) -> Self {
        ParamValue::Bytes(value)
    }
}

impl From<&[u8]> for ParamValue {
    fn from(value: &[u8]) -> Self {
        ParamValue::Bytes(value.to_vec())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_owned())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::StrArray(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::StrArray(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<Vec<u8>>> for ParamValue {
    fn from(value: Vec<Vec<u8>>) -> Self {
        ParamValue::BytesArray(value)
    }
}
