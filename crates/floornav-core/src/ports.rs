//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::GeometryBundle;

/// Anything that can produce the full building geometry
#[async_trait]
pub trait GeometrySource: Send + Sync {
    /// Load every floor, in vertical order
    async fn load(&self) -> Result<GeometryBundle>;

    /// Short description used in logs and errors
    fn describe(&self) -> String;
}

/// A fixed, already-loaded bundle; for tests and in-process callers
pub struct StaticGeometrySource {
    bundle: GeometryBundle,
}

impl StaticGeometrySource {
    pub fn new(bundle: GeometryBundle) -> Self {
        Self { bundle }
    }
}

#[async_trait]
impl GeometrySource for StaticGeometrySource {
    async fn load(&self) -> Result<GeometryBundle> {
        Ok(self.bundle.clone())
    }

    fn describe(&self) -> String {
        format!("static bundle ({} floors)", self.bundle.floors.len())
    }
}
