//! Command implementations

mod config;
mod exit;
mod floors;
mod rooms;
mod route;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use floornav_core::config::LayeredConfig;
use floornav_core::formats::geojson::GeoJsonFloorSource;
use floornav_routing::NavigationBundle;

/// Execute a CLI command
pub async fn execute(cli: Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.overrides())?;

    match cli.command {
        Commands::Config => config::execute(&config, output),
        Commands::Route(args) => route::execute(args, &load_bundle(&config).await?, output),
        Commands::Exit(args) => exit::execute(args, &load_bundle(&config).await?, output),
        Commands::Rooms(args) => rooms::execute(args, &load_bundle(&config).await?, output),
        Commands::Floors => floors::execute(&load_bundle(&config).await?, output),
    }
}

/// Read the configured floor files and build the navigation bundle
async fn load_bundle(config: &LayeredConfig) -> Result<NavigationBundle> {
    let source = GeoJsonFloorSource::from_config(config)
        .context("No floors configured (use --floors, FLOORNAV_FLOORS or a config file)")?;

    NavigationBundle::load(&source, &config.routing_options())
        .await
        .context("Failed to build the navigation graph")
}
