use clap::{Args, Parser, Subcommand};
use floornav_core::config::{
    parse_floor_list, parse_stair_pairing, parse_validity_mode, parse_weight, CliConfigOverrides,
    FloorSourceConfig,
};
use floornav_core::models::{StairPairing, ValidityMode};
use std::path::PathBuf;

/// floornav - Indoor multi-floor wayfinding
#[derive(Parser, Debug)]
#[command(name = "floornav")]
#[command(about = "Route between rooms across the floors of a building", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Weight of the edge from a stair to its nearest corridor node
    #[arg(long, global = true, value_name = "WEIGHT", value_parser = connector_weight)]
    pub connector_weight: Option<f64>,

    /// Weight of the edge between paired stairs on adjacent floors
    #[arg(long, global = true, value_name = "WEIGHT", value_parser = crossing_weight)]
    pub crossing_weight: Option<f64>,

    /// How stairs on adjacent floors are matched (ordinal or nearest)
    #[arg(long, global = true, value_name = "STRATEGY", value_parser = stair_pairing)]
    pub stair_pairing: Option<StairPairing>,

    /// Reject invalid geometry instead of skipping it (strict or lenient)
    #[arg(long, global = true, value_name = "MODE", value_parser = validity_mode)]
    pub validity: Option<ValidityMode>,

    /// Ordered floor files, bottom to top: id=path,id=path
    #[arg(long, global = true, value_name = "LIST", value_parser = floor_list)]
    pub floors: Option<FloorList>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration overrides given on the command line
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            stair_connector_weight: self.connector_weight,
            stair_crossing_weight: self.crossing_weight,
            stair_pairing: self.stair_pairing,
            geometry_validity: self.validity,
            floors: self.floors.clone().map(|list| list.0),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route between two rooms
    Route(RouteArgs),

    /// Find the nearest reachable emergency exit
    Exit(ExitArgs),

    /// List or search rooms
    Rooms(RoomsArgs),

    /// Show per-floor graph statistics
    Floors,

    /// Show configuration values and where they came from
    Config,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Start room label or number
    pub start: String,

    /// Destination room label or number, or "emergency exit"
    pub end: String,
}

#[derive(Args, Debug)]
pub struct ExitArgs {
    /// Start room label or number
    pub start: String,
}

#[derive(Args, Debug)]
pub struct RoomsArgs {
    /// Only rooms on this floor
    #[arg(long)]
    pub floor: Option<String>,

    /// Case-insensitive substring of the label or room number
    #[arg(long)]
    pub search: Option<String>,

    /// Only rooms of this category (room, stair, emergency_exit)
    #[arg(long)]
    pub category: Option<String>,
}

fn connector_weight(s: &str) -> Result<f64, String> {
    parse_weight("stair_connector_weight", s).map_err(|e| e.to_string())
}

fn crossing_weight(s: &str) -> Result<f64, String> {
    parse_weight("stair_crossing_weight", s).map_err(|e| e.to_string())
}

fn stair_pairing(s: &str) -> Result<StairPairing, String> {
    parse_stair_pairing(s).map_err(|e| e.to_string())
}

fn validity_mode(s: &str) -> Result<ValidityMode, String> {
    parse_validity_mode(s).map_err(|e| e.to_string())
}

/// Parsed `--floors` value
#[derive(Debug, Clone)]
pub struct FloorList(pub Vec<FloorSourceConfig>);

fn floor_list(s: &str) -> Result<FloorList, String> {
    parse_floor_list(s).map(FloorList).map_err(|e| e.to_string())
}
