//! floornav Core - Domain models, configuration and geometry loading
//!
//! This crate contains the building model, the error taxonomy and the port
//! through which floor-plan geometry reaches the routing engine.

pub mod config;
pub mod error;
pub mod formats;
pub mod models;
pub mod ports;

pub use error::{ErrorKind, FloornavError, Result};
