//! floornav CLI - Command-line interface
//!
//! Loads the configured floor plans, builds the navigation bundle and
//! answers route, exit and lookup queries from the terminal.

mod cli;
mod commands;
mod config_loader;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use output::OutputWriter;

fn main() {
    // Logs go to stderr so `--json` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = OutputWriter::new(cli.json);

    let result = tokio::runtime::Runtime::new()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(commands::execute(cli, &output)));

    if let Err(e) = result {
        output.error(format!("{:#}", e));
        std::process::exit(1);
    }
}
