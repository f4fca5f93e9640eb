//! Output formatting

use serde_json::{json, Value};
use std::collections::HashMap;

use crate::config::{Config, OutputFormat};

/// Output builder for formatted CLI output
pub struct Output {
    json_mode: bool,
    fields: HashMap<String, Value>,
    message: Option<String>,
}

impl Output {
    /// Create a new output builder
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: HashMap::new(),
            message: None,
        }
    }

    /// Add a string field to the output
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a u64 field to the output
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a bool field to the output
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Set the human-readable message
    pub fn message(mut self, msg: &str) -> Self {
        self.message = Some(msg.to_string());
        self
    }

    /// Render to the string that `print` writes
    pub fn render(&self) -> Option<String> {
        if self.json_mode {
            let json = json!(self.fields);
            Some(serde_json::to_string_pretty(&json).unwrap_or_default())
        } else {
            self.message.clone()
        }
    }

    /// Print the output
    pub fn print(self) {
        if let Some(text) = self.render() {
            println!("{}", text);
        }
    }
}

/// Hex-encode with or without the `0x` prefix
pub fn to_hex(data: &[u8], prefix: bool) -> String {
    if prefix {
        format!("0x{}", hex::encode(data))
    } else {
        hex::encode(data)
    }
}

/// Render call data according to the configured layout
pub fn format_call_data(data: &[u8], config: &Config) -> String {
    match config.output_format {
        OutputFormat::Hex => to_hex(data, config.hex_prefix),
        OutputFormat::Words => {
            let (selector, body) = data.split_at(data.len().min(4));
            let mut lines = vec![to_hex(selector, config.hex_prefix)];
            lines.extend(body.chunks(32).map(hex::encode));
            lines.join("\n")
        }
    }
}
