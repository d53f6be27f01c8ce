use serde::{Deserialize, Serialize};

/// How stairs on adjacent floors are matched up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StairPairing {
    /// Nth stair of floor K connects to the Nth stair of floor K+1;
    /// the longer list is truncated
    #[default]
    Ordinal,
    /// Each stair of floor K connects to the closest unpaired stair of floor K+1
    Nearest,
}

/// Graph construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingOptions {
    /// Weight of the edge from a stair centroid to its nearest corridor node
    pub stair_connector_weight: f64,
    /// Weight of the edge between paired stairs on adjacent floors
    pub stair_crossing_weight: f64,
    pub stair_pairing: StairPairing,
    pub geometry_validity: crate::models::ValidityMode,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            stair_connector_weight: 0.5,
            stair_crossing_weight: 1.0,
            stair_pairing: StairPairing::Ordinal,
            geometry_validity: crate::models::ValidityMode::Lenient,
        }
    }
}
