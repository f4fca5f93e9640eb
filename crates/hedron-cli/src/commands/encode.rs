//! Encode command

use clap::Args;
use hedron_sdk::abi::ParamValue;
use hedron_sdk::CallParams;
use serde_json::Value;

use super::build_selector;
use crate::{
    config::Config,
    output::{format_call_data, to_hex, Output},
    CliError,
};

/// Encode call data for a contract function
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Function name or full signature, e.g. `f` or `f(uint32,bytes)`
    function: String,
    /// Declared parameter type, repeatable; omit to infer types from values
    #[arg(short = 't', long = "type")]
    types: Vec<String>,
    /// Parameter value as JSON, repeatable; text that is not JSON is taken as a string
    #[arg(short = 'p', long = "param", allow_hyphen_values = true)]
    params: Vec<String>,
}

impl EncodeCommand {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let selector = build_selector(&self.function, &self.types)?;
        let mut call = CallParams::from_selector(&selector);

        for raw in &self.params {
            call.add_param(parse_param(raw)?)?;
        }

        let data = call.to_bytes()?;
        let signature = call.to_signature()?;
        let selector_hex = to_hex(&data[..4], config.hex_prefix);

        Output::new(json)
            .field("signature", &signature)
            .field("selector", &selector_hex)
            .field("data", &to_hex(&data, config.hex_prefix))
            .field_u64("length", data.len() as u64)
            .message(&format_call_data(&data, config))
            .print();
        Ok(())
    }
}

/// Parse one `--param` value
pub(crate) fn parse_param(raw: &str) -> Result<ParamValue, CliError> {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(raw, "parameter is not JSON, using it as a string");
            Value::String(raw.to_string())
        }
    };
    Ok(ParamValue::from_json(&value)?)
}
