//! Selector command

use clap::Args;
use hedron_sdk::Selector;

use super::build_selector;
use crate::{config::Config, output::{to_hex, Output}, CliError};

/// Compute a function selector
#[derive(Debug, Args)]
pub struct SelectorCommand {
    /// Function name or full signature, e.g. `f` or `f(uint32,bytes)`
    function: String,
    /// Parameter type, repeatable (uint32, uint64, uint256, bytes, string, string[], bytes[])
    #[arg(short = 't', long = "type")]
    types: Vec<String>,
    /// Fail unless the computed selector equals this 4-byte hex value
    #[arg(long)]
    expect: Option<Selector>,
}

impl SelectorCommand {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let selector = build_selector(&self.function, &self.types)?;
        let signature = selector.to_signature();
        let bytes = selector.to_selector_bytes();
        let hex = to_hex(bytes.as_bytes(), config.hex_prefix);

        tracing::debug!(%signature, selector = %bytes, "computed selector");

        check_expected(self.expect, bytes)?;

        let mut output = Output::new(json)
            .field("signature", &signature)
            .field("selector", &hex)
            .message(&format!("{}  {}", hex, signature));
        if self.expect.is_some() {
            output = output.field_bool("matches", true);
        }
        output.print();
        Ok(())
    }
}

/// Compare a computed selector with the one the caller expects
fn check_expected(expected: Option<Selector>, computed: Selector) -> Result<(), CliError> {
    match expected {
        Some(expected) if expected != computed => Err(CliError::InvalidInput(format!(
            "selector mismatch: expected {}, computed {}",
            expected, computed
        ))),
        _ => Ok(()),
    }
}
