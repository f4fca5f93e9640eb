//! ABI encoding

use hedron_primitives::{Selector, U256, WORD_SIZE};

use super::types::{ArrayElement, Param, ParamType};
use super::value::ParamValue;
use crate::SdkError;

/// A value reduced to its place in a head/tail layout
enum Encoded {
    /// Word stored directly in the head
    Static([u8; WORD_SIZE]),
    /// Tail entry, referenced from the head by offset
    Dynamic(Vec<u8>),
}

/// Encode parameters as `head ++ tail`
pub fn encode(params: &[Param]) -> Vec<u8> {
    encode_head_tail(params.iter().map(|p| encode_value(p.value())).collect())
}

/// Encode function call (selector + params)
pub fn encode_function_call(selector: Selector, params: &[Param]) -> Vec<u8> {
    let mut result = selector.as_bytes().to_vec();
    result.extend(encode(params));
    result
}

/// Lay out entries as one head word each, followed by the dynamic tails.
///
/// Offsets are measured from the first head word, so the same routine
/// serves both the top-level argument list and an array's data block.
fn encode_head_tail(entries: Vec<Encoded>) -> Vec<u8> {
    let head_size = entries.len() * WORD_SIZE;

    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for entry in entries {
        match entry {
            Encoded::Static(word) => head.extend_from_slice(&word),
            Encoded::Dynamic(data) => {
                head.extend_from_slice(&encode_usize(head_size + tail.len()));
                tail.extend(data);
            }
        }
    }

    head.extend(tail);
    head
}

fn encode_value(value: &ParamValue) -> Encoded {
    match value {
        ParamValue::Uint(_, v) => Encoded::Static(encode_u256(v)),
        ParamValue::Bytes(data) => Encoded::Dynamic(encode_bytes(data)),
        ParamValue::Str(s) => Encoded::Dynamic(encode_bytes(s.as_bytes())),
        ParamValue::StrArray(items) => {
            Encoded::Dynamic(encode_array(items.iter().map(|s| s.as_bytes())))
        }
        ParamValue::BytesArray(items) => {
            Encoded::Dynamic(encode_array(items.iter().map(Vec::as_slice)))
        }
    }
}

/// Count word, then a nested head/tail block of dynamic elements
fn encode_array<'a, I>(elements: I) -> Vec<u8>
where
    I: ExactSizeIterator<Item = &'a [u8]>,
{
    let mut result = encode_usize(elements.len()).to_vec();
    let entries = elements.map(|e| Encoded::Dynamic(encode_bytes(e))).collect();
    result.extend(encode_head_tail(entries));
    result
}

/// Encode a U256 as a big-endian word
fn encode_u256(value: &U256) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    value.to_big_endian(&mut word);
    word
}

fn encode_usize(value: usize) -> [u8; WORD_SIZE] {
    encode_u256(&U256::from(value))
}

/// Length word followed by the data right-padded to a word boundary
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_usize(data.len()).to_vec();

    let mut padded = vec![0u8; padded_len(data.len())];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);

    result
}

/// Round `len` up to the next multiple of 32
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_SIZE) * WORD_SIZE
}

/// Parse a short type name (e.g., "uint32", "string[]")
pub fn parse_type(s: &str) -> Result<ParamType, SdkError> {
    let s = s.trim();

    if let Some(element) = s.strip_suffix("[]") {
        return match element {
            "bytes" => Ok(ParamType::Array(ArrayElement::Bytes)),
            "string" => Ok(ParamType::Array(ArrayElement::String)),
            _ => Err(SdkError::InvalidTypeName(s.to_string())),
        };
    }

    match s {
        "uint32" => Ok(ParamType::Uint32),
        "uint64" => Ok(ParamType::Uint64),
        "uint" | "uint256" => Ok(ParamType::Uint256),
        "bytes" => Ok(ParamType::Bytes),
        "string" => Ok(ParamType::String),
        _ => Err(SdkError::InvalidTypeName(s.to_string())),
    }
}
