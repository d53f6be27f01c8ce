//! floornav Geo - Walkable graphs from floor-plan geometry
//!
//! This crate turns corridor outlines into weighted floor graphs, snaps
//! arbitrary points onto them and links stairs to their floor.

pub mod corridor;
pub mod floor;
pub mod graph;
pub mod models;
pub mod snap;
pub mod stairs;
pub mod validation;

pub use corridor::{build_corridor_graph, corridor_lines, CorridorLine};
pub use floor::{FloorNetwork, FloorStats};
pub use graph::{FloorGraph, WeightedGraph};
pub use models::{to_geo_geometry, GeometryExt};
pub use snap::{nearest_node, SnapIndex};
pub use stairs::{link_stairs, pair_stairs, StairNode};
pub use validation::{check_feature, validate_geometry, ValidationError, ValidationResult};
