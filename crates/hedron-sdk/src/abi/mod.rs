//! ABI encoding for contract calls
//!
//! This module provides functionality for:
//! - Describing the supported parameter types
//! - Binding call argument values to those types
//! - Encoding arguments into the head/tail call-data layout
//!
//! # Example
//!
//! ```rust
//! use hedron_sdk::abi::{encode, parse_type, Param, ParamType, ParamValue};
//!
//! let ty = parse_type("uint32").unwrap();
//! assert_eq!(ty, ParamType::Uint32);
//!
//! let param = Param::resolve(ty, ParamValue::uint32(7)).unwrap();
//! let data = encode(&[param]);
//! assert_eq!(data.len(), 32);
//! assert_eq!(data[31], 7);
//! ```

mod encode;
mod types;
mod value;

pub use encode::{encode, encode_function_call, padded_len, parse_type};
pub use types::{ArrayElement, Param, ParamType, UintWidth};
pub use value::ParamValue;
