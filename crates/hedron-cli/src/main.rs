//! # hedron-cli
//!
//! Command-line interface for the Hedron contract-call codec.
//!
//! ## Usage
//!
//! ```bash
//! # Selectors
//! hedron selector "f(uint32,bytes,uint64,bytes,string)"
//! hedron selector f --type uint32 --type bytes
//!
//! # Call data with declared types
//! hedron encode "f(uint32,string)" --param 16909060 --param '"hello"'
//!
//! # Call data with inferred types
//! hedron encode f --param '"hello"' --param 1515 --param '["one","two"]'
//!
//! # Configuration
//! hedron config --show
//! hedron config --set-output-format words
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::{Config, OutputFormat};
pub use error::CliError;
pub use output::Output;

/// Hedron CLI
#[derive(Parser, Debug)]
#[command(name = "hedron")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute a function signature and selector
    Selector(commands::selector::SelectorCommand),
    /// Encode contract call data
    Encode(commands::encode::EncodeCommand),
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Print hex with a 0x prefix
        #[arg(long)]
        set_hex_prefix: Option<bool>,
        /// Set the call data layout
        #[arg(long, value_enum)]
        set_output_format: Option<OutputFormat>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = Config::load();

    let result = match cli.command {
        Commands::Selector(cmd) => cmd.execute(&config, cli.json),
        Commands::Encode(cmd) => cmd.execute(&config, cli.json),
        Commands::Config {
            show,
            set_hex_prefix,
            set_output_format,
        } => handle_config(&mut config, show, set_hex_prefix, set_output_format, cli.json),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_hex_prefix: Option<bool>,
    set_output_format: Option<OutputFormat>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(prefix) = set_hex_prefix {
        config.hex_prefix = prefix;
        modified = true;
    }

    if let Some(format) = set_output_format {
        config.output_format = format;
        modified = true;
    }

    if modified {
        let path = config.save()?;
        tracing::info!(path = %path.display(), "configuration saved");
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print();
    } else if show {
        let format = match config.output_format {
            OutputFormat::Hex => "hex",
            OutputFormat::Words => "words",
        };
        Output::new(json)
            .field_bool("hex_prefix", config.hex_prefix)
            .field("output_format", format)
            .message(&format!(
                "Hex prefix: {}\nOutput format: {}",
                config.hex_prefix, format
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-hex-prefix/--set-output-format to modify")
            .print();
    }

    Ok(())
}
