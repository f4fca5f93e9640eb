//! Contract call parameters

use bytes::Bytes;
use hedron_crypto::{Keccak256Hasher, SelectorHasher};
use hedron_primitives::{Selector, U256};

use crate::abi::{encode_function_call, Param, ParamType, ParamValue};
use crate::{FunctionSelector, SdkError};

/// Builder for the call data of a single contract function call.
///
/// With a [`FunctionSelector`] attached, each value is checked against the
/// declared type at its position and the number of values must match the
/// declared list. Without one, every value's type is inferred from its
/// [`ParamValue`] variant.
///
/// ```rust
/// use hedron_sdk::CallParams;
///
/// let mut params = CallParams::new();
/// params
///     .set_function("f")
///     .add_string("hello")?
///     .add_param(hedron_sdk::abi::ParamValue::number(1515u64))?;
///
/// assert_eq!(params.to_signature()?, "f(string,uint256)");
/// let data = params.to_bytes()?;
/// assert_eq!((data.len() - 4) % 32, 0);
/// # Ok::<(), hedron_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallParams {
    function_name: Option<String>,
    declared: Vec<ParamType>,
    params: Vec<Param>,
}

impl CallParams {
    /// Create an empty builder for the generic path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder bound to a function's declared types
    pub fn from_selector(selector: &FunctionSelector) -> Self {
        Self {
            function_name: Some(selector.name().to_string()),
            declared: selector.param_types().to_vec(),
            params: Vec::new(),
        }
    }

    /// Set the function name
    pub fn set_function(&mut self, name: impl Into<String>) -> &mut Self {
        self.function_name = Some(name.into());
        self
    }

    /// Append a value.
    ///
    /// On error nothing is appended and the builder stays usable.
    pub fn add_param(&mut self, value: impl Into<ParamValue>) -> Result<&mut Self, SdkError> {
        let value = value.into();
        let param = match self.declared.get(self.params.len()) {
            Some(ty) => Param::resolve(*ty, value)?,
            None => Param::infer(value)?,
        };

        tracing::trace!(
            index = self.params.len(),
            ty = %param.ty(),
            "added contract call parameter"
        );

        self.params.push(param);
        Ok(self)
    }

    /// Append a `uint32`
    pub fn add_uint32(&mut self, value: u32) -> Result<&mut Self, SdkError> {
        self.add_param(ParamValue::uint32(value))
    }

    /// Append a `uint64`
    pub fn add_uint64(&mut self, value: u64) -> Result<&mut Self, SdkError> {
        self.add_param(ParamValue::uint64(value))
    }

    /// Append a `uint256`
    pub fn add_uint256(&mut self, value: impl Into<U256>) -> Result<&mut Self, SdkError> {
        self.add_param(ParamValue::uint256(value))
    }

    /// Append dynamic `bytes`
    pub fn add_bytes(&mut self, value: impl Into<Vec<u8>>) -> Result<&mut Self, SdkError> {
        self.add_param(ParamValue::Bytes(value.into()))
    }

    /// Append a `string`
    pub fn add_string(&mut self, value: impl Into<String>) -> Result<&mut Self, SdkError> {
        self.add_param(ParamValue::Str(value.into()))
    }

    /// Append a `string[]`
    pub fn add_string_array<I, S>(&mut self, values: I) -> Result<&mut Self, SdkError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_param(ParamValue::StrArray(values.into_iter().map(Into::into).collect()))
    }

    /// Append a `bytes[]`
    pub fn add_bytes_array<I, B>(&mut self, values: I) -> Result<&mut Self, SdkError>
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        self.add_param(ParamValue::BytesArray(values.into_iter().map(Into::into).collect()))
    }

    /// Function name, if set
    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    /// Declared types from the attached selector
    pub fn declared_types(&self) -> &[ParamType] {
        &self.declared
    }

    /// Parameters added so far
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of parameters added so far
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if no parameters have been added
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The function being called, with either the declared or the
    /// inferred parameter types
    pub fn function_selector(&self) -> Result<FunctionSelector, SdkError> {
        let name = self.function_name.as_deref().ok_or(SdkError::MissingFunctionName)?;
        let types: Vec<ParamType> = if self.declared.is_empty() {
            self.params.iter().map(Param::ty).collect()
        } else {
            self.declared.clone()
        };
        Ok(types
            .into_iter()
            .fold(FunctionSelector::new(name), FunctionSelector::with_param_type))
    }

    /// Canonical signature of the call
    pub fn to_signature(&self) -> Result<String, SdkError> {
        Ok(self.function_selector()?.to_signature())
    }

    /// Selector of the call, computed with Keccak-256
    pub fn selector(&self) -> Result<Selector, SdkError> {
        Ok(self.function_selector()?.to_selector_bytes())
    }

    /// Encode the call data: selector, then head, then tail
    pub fn to_bytes(&self) -> Result<Bytes, SdkError> {
        self.to_bytes_with(&Keccak256Hasher)
    }

    /// Encode the call data with a caller-supplied selector hash
    pub fn to_bytes_with<H: SelectorHasher + ?Sized>(&self, hasher: &H) -> Result<Bytes, SdkError> {
        if !self.declared.is_empty() && self.declared.len() != self.params.len() {
            return Err(SdkError::ParamCountMismatch {
                expected: self.declared.len(),
                got: self.params.len(),
            });
        }

        let function = self.function_selector()?;
        let selector = function.to_selector_bytes_with(hasher);
        let data = encode_function_call(selector, &self.params);

        tracing::debug!(
            signature = %function,
            %selector,
            params = self.params.len(),
            len = data.len(),
            "encoded contract call"
        );

        Ok(Bytes::from(data))
    }
}

impl From<&FunctionSelector> for CallParams {
    fn from(selector: &FunctionSelector) -> Self {
        Self::from_selector(selector)
    }
}
