//! tallypad: a keypad-style arithmetic calculator for the terminal.

mod calculator;
mod config;
mod ui;

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::calculator::Calculator;
use crate::config::Config;
use crate::ui::{Readout, handle_keys, parse_line};

#[derive(Debug, Parser)]
#[command(name = "tallypad", about, version)]
struct Args {
    /// Key sequence to run non-interactively, e.g. `tallypad 4 + 3 =`.
    /// With no keys, an interactive session starts.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Print the final readout as JSON (non-interactive mode only).
    #[arg(long)]
    json: bool,

    /// Explicit config file path.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if args.keys.is_empty() {
        ui::terminal::run(&config)
    } else {
        run_sequence(&args)
    }
}

/// Apply a key sequence from the command line and print the readout.
fn run_sequence(args: &Args) -> anyhow::Result<()> {
    let line = args.keys.join(" ");
    let Some(keys) = parse_line(&line) else {
        bail!("unrecognized key sequence: {line:?} (keys: 0-9 . + - * / ÷ = c d)");
    };

    let mut calc = Calculator::new();
    handle_keys(&mut calc, &keys);

    let readout = Readout::from_calculator(&calc);
    if args.json {
        println!("{}", serde_json::to_string(&readout)?);
    } else {
        if !readout.previous.is_empty() {
            println!("{}", readout.previous);
        }
        println!("{}", readout.current);
    }

    Ok(())
}
