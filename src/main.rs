//! CLI for iothub-amqp
//!
//! Subcommands:
//! - `from-wire`: read a JSON-encoded AMQP message, print the IoT Hub message
//! - `to-wire`: read a JSON-encoded IoT Hub message, print the AMQP message

use clap::{Parser, Subcommand};
use iothub_amqp::config::load_config_from;
use iothub_amqp::diagnostics::TracingSink;
use iothub_amqp::utils::logging;
use iothub_amqp::{DomainMessage, Mapper, WireMessage};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "iothub-amqp", about = "Translate between AMQP and IoT Hub messages")]
struct Cli {
    /// Configuration file, without extension
    #[arg(long, default_value = "config/default")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate an AMQP message into an IoT Hub message
    FromWire {
        /// Read from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Translate an IoT Hub message into an AMQP message
    ToWire {
        /// Read from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Translation failed: {}", e);
            eprintln!("iothub-amqp: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_config_from(&cli.config)?;
    logging::init(&settings.logging.level);
    debug!(?settings, "configuration loaded");

    let mapper = Mapper::new(settings.mapper, Arc::new(TracingSink));

    let output = match cli.command {
        Command::FromWire { input } => {
            let wire: WireMessage = serde_json::from_str(&read_input(input)?)?;
            serde_json::to_string_pretty(&mapper.from_wire(&wire)?)?
        }
        Command::ToWire { input } => {
            let msg: DomainMessage = serde_json::from_str(&read_input(input)?)?;
            serde_json::to_string_pretty(&mapper.to_wire(&msg))?
        }
    };
    println!("{output}");
    Ok(())
}

fn read_input(path: Option<PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
