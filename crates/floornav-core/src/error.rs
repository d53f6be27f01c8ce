//! Error types for floornav

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FloornavError {
    // Lookup errors
    #[error("Room not found: {identifier}")]
    RoomNotFound { identifier: String },

    #[error("No emergency exit is defined on any floor")]
    NoExits,

    // Routing errors
    #[error("No path found between {from} and {to}")]
    NoPath { from: String, to: String },

    // Build errors
    #[error("Cannot build navigation graph: {reason}")]
    Build { reason: String },

    #[error("Invalid geometry at feature {feature}: {reason}")]
    InvalidGeometry { feature: String, reason: String },

    // Load errors
    #[error("Failed to load geometry from {source_name}: {reason}")]
    Load { source_name: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse error class used by adapters to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    NoPath,
    Build,
    Load,
    Config,
    Internal,
}

impl FloornavError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FloornavError::RoomNotFound { .. } | FloornavError::NoExits => ErrorKind::NotFound,
            FloornavError::NoPath { .. } => ErrorKind::NoPath,
            FloornavError::Build { .. } | FloornavError::InvalidGeometry { .. } => {
                ErrorKind::Build
            }
            FloornavError::Load { .. } => ErrorKind::Load,
            FloornavError::ConfigMissing { .. } | FloornavError::ConfigInvalid { .. } => {
                ErrorKind::Config
            }
            FloornavError::Io(_) => ErrorKind::Internal,
        }
    }

    pub fn room_not_found(identifier: impl Into<String>) -> Self {
        FloornavError::RoomNotFound { identifier: identifier.into() }
    }

    pub fn no_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        FloornavError::NoPath { from: from.into(), to: to.into() }
    }
}

pub type Result<T> = std::result::Result<T, FloornavError>;
