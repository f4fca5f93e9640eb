//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    /// Unknown ABI type name
    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),

    /// Value has no valid inferred or declared encoding
    #[error("Unsupported parameter type: {0}")]
    UnsupportedParamType(String),

    /// Declared parameter count disagrees with supplied values
    #[error("Invalid number of parameters provided: expected {expected}, got {got}")]
    ParamCountMismatch {
        /// Number of declared parameter types
        expected: usize,
        /// Number of supplied values
        got: usize,
    },

    /// Function name is missing or empty
    #[error("Missing function name")]
    MissingFunctionName,
}
