//! ABI type definitions

use std::fmt;
use std::str::FromStr;

use hedron_primitives::U256;

use super::value::ParamValue;
use crate::SdkError;

/// Element type of a dynamic array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayElement {
    /// `bytes[]`
    Bytes,
    /// `string[]`
    String,
}

/// Width of an unsigned integer parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UintWidth {
    /// 32 bits
    W32,
    /// 64 bits
    W64,
    /// 256 bits, the default for bare numbers
    W256,
}

impl UintWidth {
    /// Number of bits
    pub fn bits(self) -> usize {
        match self {
            UintWidth::W32 => 32,
            UintWidth::W64 => 64,
            UintWidth::W256 => 256,
        }
    }

    /// Number of bytes
    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Check that `value` is representable in this width
    pub fn fits(self, value: &U256) -> bool {
        value.bits() <= self.bits()
    }

    /// The ABI type carrying this width
    pub fn param_type(self) -> ParamType {
        match self {
            UintWidth::W32 => ParamType::Uint32,
            UintWidth::W64 => ParamType::Uint64,
            UintWidth::W256 => ParamType::Uint256,
        }
    }
}

/// Supported ABI parameter types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `uint256`
    Uint256,
    /// Dynamic bytes
    Bytes,
    /// UTF-8 string
    String,
    /// Dynamic array of dynamic elements
    Array(ArrayElement),
}

impl ParamType {
    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        matches!(self, ParamType::Bytes | ParamType::String | ParamType::Array(_))
    }

    /// Integer width, for the `uintN` types
    pub fn uint_width(&self) -> Option<UintWidth> {
        match self {
            ParamType::Uint32 => Some(UintWidth::W32),
            ParamType::Uint64 => Some(UintWidth::W64),
            ParamType::Uint256 => Some(UintWidth::W256),
            _ => None,
        }
    }

    /// Canonical name as it appears in a function signature
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ParamType::Uint32 => "uint32",
            ParamType::Uint64 => "uint64",
            ParamType::Uint256 => "uint256",
            ParamType::Bytes => "bytes",
            ParamType::String => "string",
            ParamType::Array(ArrayElement::Bytes) => "bytes[]",
            ParamType::Array(ArrayElement::String) => "string[]",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for ParamType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_type(s)
    }
}

/// A single call argument whose value has been checked against its type.
///
/// Integer values are normalized to `ParamValue::Uint` at the param's own
/// width, so the encoder never has to look at how the value was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    ty: ParamType,
    value: ParamValue,
}

impl Param {
    /// Infer the type from the value's variant
    pub fn infer(value: ParamValue) -> Result<Self, SdkError> {
        let ty = value.inferred_type()?;
        Ok(Self { ty, value })
    }

    /// Check `value` against a declared type
    pub fn resolve(ty: ParamType, value: ParamValue) -> Result<Self, SdkError> {
        let value = match (ty.uint_width(), value) {
            (Some(target), ParamValue::Uint(width, v)) => {
                if !width.fits(&v) || !target.fits(&v) {
                    return Err(SdkError::UnsupportedParamType(format!(
                        "value {} does not fit in {}",
                        v, ty
                    )));
                }
                ParamValue::Uint(target, v)
            }
            (Some(target), ParamValue::Bytes(raw)) => {
                // raw big-endian integer bytes
                if raw.len() > target.byte_len() {
                    return Err(SdkError::UnsupportedParamType(format!(
                        "{} bytes do not fit in {}",
                        raw.len(),
                        ty
                    )));
                }
                ParamValue::Uint(target, U256::from_big_endian(&raw))
            }
            // an empty list carries no element shape
            (None, ParamValue::StrArray(items)) if items.is_empty() && ty == ParamType::Bytes => {
                ParamValue::Bytes(Vec::new())
            }
            (None, ParamValue::StrArray(items))
                if items.is_empty() && ty == ParamType::Array(ArrayElement::Bytes) =>
            {
                ParamValue::BytesArray(Vec::new())
            }
            (_, value) if value.inferred_type().ok() == Some(ty) => value,
            (_, value) => {
                return Err(SdkError::UnsupportedParamType(format!(
                    "{} cannot be encoded as {}",
                    value.shape(),
                    ty
                )));
            }
        };
        Ok(Self { ty, value })
    }

    /// The ABI type
    pub fn ty(&self) -> ParamType {
        self.ty
    }

    /// The normalized value
    pub fn value(&self) -> &ParamValue {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_is_dynamic() {
        assert!(!ParamType::Uint32.is_dynamic());
        assert!(!ParamType::Uint64.is_dynamic());
        assert!(!ParamType::Uint256.is_dynamic());

        assert!(ParamType::Bytes.is_dynamic());
        assert!(ParamType::String.is_dynamic());
        assert!(ParamType::Array(ArrayElement::String).is_dynamic());
        assert!(ParamType::Array(ArrayElement::Bytes).is_dynamic());
    }

    #[test]
    fn test_param_type_display() {
        assert_eq!(ParamType::Uint256.to_string(), "uint256");
        assert_eq!(ParamType::Array(ArrayElement::String).to_string(), "string[]");
        assert_eq!(ParamType::Array(ArrayElement::Bytes).to_string(), "bytes[]");
    }

    #[test]
    fn test_uint_width_fits() {
        assert!(UintWidth::W32.fits(&U256::from(u32::MAX)));
        assert!(!UintWidth::W32.fits(&(U256::from(u32::MAX) + 1)));
        assert!(UintWidth::W64.fits(&U256::from(u64::MAX)));
        assert!(UintWidth::W256.fits(&U256::MAX));
    }

    #[test]
    fn test_resolve_uint_from_raw_bytes() {
        let param = Param::resolve(ParamType::Uint32, ParamValue::Bytes(vec![1, 2, 3, 4])).unwrap();
        assert_eq!(param.ty(), ParamType::Uint32);
        assert_eq!(param.value(), &ParamValue::Uint(UintWidth::W32, U256::from(0x0102_0304u64)));
    }

    #[test]
    fn test_resolve_uint_raw_bytes_too_wide() {
        let err = Param::resolve(ParamType::Uint32, ParamValue::Bytes(vec![0; 5])).unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedParamType(_)));
    }

    #[test]
    fn test_resolve_narrows_bare_number() {
        let param = Param::resolve(ParamType::Uint64, ParamValue::number(7u64)).unwrap();
        assert_eq!(param.value(), &ParamValue::Uint(UintWidth::W64, U256::from(7)));
    }

    #[test]
    fn test_resolve_rejects_overflowing_number() {
        let big = U256::from(u64::MAX) + 1;
        let err = Param::resolve(ParamType::Uint64, ParamValue::number(big)).unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedParamType(_)));
    }

    #[test]
    fn test_resolve_rejects_shape_mismatch() {
        let err = Param::resolve(ParamType::String, ParamValue::Bytes(vec![1])).unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedParamType(_)));

        let err = Param::resolve(
            ParamType::Array(ArrayElement::Bytes),
            ParamValue::StrArray(vec!["a".into()]),
        )
        .unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedParamType(_)));
    }

    #[test]
    fn test_resolve_empty_list_against_byte_types() {
        let param = Param::resolve(ParamType::Bytes, ParamValue::StrArray(vec![])).unwrap();
        assert_eq!(param.value(), &ParamValue::Bytes(vec![]));

        let param = Param::resolve(
            ParamType::Array(ArrayElement::Bytes),
            ParamValue::StrArray(vec![]),
        )
        .unwrap();
        assert_eq!(param.value(), &ParamValue::BytesArray(vec![]));

        assert!(Param::resolve(ParamType::Bytes, ParamValue::StrArray(vec!["a".into()])).is_err());
    }

    #[test]
    fn test_infer_matches_variant() {
        let param = Param::infer(ParamValue::from("hi")).unwrap();
        assert_eq!(param.ty(), ParamType::String);
        let param = Param::infer(ParamValue::from(vec!["a", "b"])).unwrap();
        assert_eq!(param.ty(), ParamType::Array(ArrayElement::String));
    }
}
