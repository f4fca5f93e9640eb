//! # hedron-sdk
//!
//! Contract-call parameter encoding.
//!
//! ## Features
//!
//! - **FunctionSelector**: canonical signatures and 4-byte selectors
//! - **CallParams**: accumulates arguments and encodes the call data
//! - **ABI**: parameter types, values and the head/tail encoder
//!
//! ## Explicit types
//!
//! ```rust
//! use hedron_sdk::{CallParams, FunctionSelector};
//!
//! let func = FunctionSelector::parse_signature("f(uint32,bytes,uint64,bytes,string)")?;
//!
//! let mut params = CallParams::from_selector(&func);
//! params
//!     .add_uint32(0x0102_0304)?
//!     .add_bytes(vec![0u8; 10])?
//!     .add_uint64(0xffff_ffff_0000_0000)?
//!     .add_bytes(vec![0u8; 32])?
//!     .add_string("this is a grin: 😁")?;
//!
//! let data = params.to_bytes()?;
//! assert_eq!(&data[..4], &[0x4f, 0xec, 0x5a, 0x19]);
//! assert_eq!(data.len(), 356);
//! # Ok::<(), hedron_sdk::SdkError>(())
//! ```
//!
//! ## Inferred types
//!
//! ```rust
//! use hedron_sdk::{abi::ParamValue, CallParams};
//!
//! let mut params = CallParams::new();
//! params
//!     .set_function("f")
//!     .add_param(ParamValue::number(1515u64))?
//!     .add_param(vec!["one", "two"])?;
//!
//! assert_eq!(params.to_signature()?, "f(uint256,string[])");
//! # Ok::<(), hedron_sdk::SdkError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
mod call_params;
mod error;
mod function_selector;

pub use call_params::CallParams;
pub use error::SdkError;
pub use function_selector::FunctionSelector;

// Re-export primitives for convenience
pub use hedron_crypto::{Keccak256Hasher, SelectorHasher};
pub use hedron_primitives::{Selector, H256, U256};
