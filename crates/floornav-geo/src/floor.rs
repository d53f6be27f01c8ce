//! Per-floor network: corridor graph, snap index and stair list

use serde::{Deserialize, Serialize};

use crate::corridor::build_corridor_graph;
use crate::graph::FloorGraph;
use crate::models::GeometryExt;
use crate::snap::SnapIndex;
use crate::stairs::{link_stairs, StairNode};
use crate::validation::check_feature;
use floornav_core::error::Result;
use floornav_core::models::{Category, Feature, FloorId, FloorPlan, RoutingOptions};

/// Counts describing one built floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorStats {
    pub floor: FloorId,
    pub rooms: usize,
    pub stairs: usize,
    pub exits: usize,
    pub nodes: usize,
    pub edges: usize,
    /// Features dropped by lenient validation
    pub skipped: usize,
    /// Source stairs missing from the ordered stair list
    pub dropped_stairs: usize,
}

/// Everything routable on one floor
#[derive(Debug, Clone)]
pub struct FloorNetwork {
    pub id: FloorId,
    /// Corridor graph plus stair connector edges
    pub graph: FloorGraph,
    /// Index over the corridor nodes only
    pub snap: SnapIndex,
    pub stairs: Vec<StairNode>,
    /// Valid non-corridor features in source order
    pub destinations: Vec<Feature>,
    skipped: usize,
    dropped_stairs: usize,
}

impl FloorNetwork {
    /// Build the network of one floor.
    ///
    /// Fails only in strict validity mode, on the first invalid feature. A
    /// floor without corridors builds into an empty graph.
    pub fn build(plan: &FloorPlan, options: &RoutingOptions) -> Result<Self> {
        let mut keep = Vec::with_capacity(plan.features.len());
        for feature in &plan.features {
            keep.push(check_feature(feature, options.geometry_validity)?);
        }
        let valid: Vec<&Feature> =
            plan.features.iter().zip(&keep).filter(|(_, k)| **k).map(|(f, _)| f).collect();
        let skipped = plan.features.len() - valid.len();

        let mut graph = build_corridor_graph(valid.iter().copied());
        let snap = SnapIndex::build(&graph);

        if graph.is_empty() {
            tracing::warn!(floor = %plan.id, "Floor has no corridor nodes");
        }

        let stairs = link_stairs(
            &mut graph,
            &snap,
            valid.iter().copied().filter(|f| f.category == Category::Stair),
            options.stair_connector_weight,
        );

        let dropped_stairs = count_dropped_stairs(plan, &keep);

        let destinations: Vec<Feature> =
            valid.into_iter().filter(|f| !f.category.is_walkable()).cloned().collect();

        tracing::debug!(
            floor = %plan.id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            stairs = stairs.len(),
            skipped,
            dropped_stairs,
            "Built floor network"
        );

        Ok(Self { id: plan.id.clone(), graph, snap, stairs, destinations, skipped, dropped_stairs })
    }

    /// Number of source stairs that did not make it into `stairs`
    pub fn dropped_stairs(&self) -> usize {
        self.dropped_stairs
    }

    /// Destinations of one category, in source order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Feature> {
        self.destinations.iter().filter(move |f| f.category == category)
    }

    pub fn stats(&self) -> FloorStats {
        FloorStats {
            floor: self.id.clone(),
            rooms: self.by_category(Category::Room).count(),
            stairs: self.stairs.len(),
            exits: self.by_category(Category::EmergencyExit).count(),
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
            skipped: self.skipped,
            dropped_stairs: self.dropped_stairs,
        }
    }
}

/// Count stairs that will not appear in the stair list, warning for each.
///
/// Stair ordinals are positions in the kept list, so every stair after a
/// dropped one moves down by one and ordinal pairing matches it with a
/// different stair on the neighbouring floor.
fn count_dropped_stairs(plan: &FloorPlan, keep: &[bool]) -> usize {
    let stairs = plan.features.iter().zip(keep).filter(|(f, _)| f.category == Category::Stair);

    let mut dropped = 0;
    for (position, (stair, kept)) in stairs.enumerate() {
        if *kept && stair.geometry.centroid_point().is_some() {
            continue;
        }
        dropped += 1;
        tracing::warn!(
            floor = %plan.id,
            stair = %stair.display_name(),
            position,
            "Stair dropped; later stairs on this floor shift down one ordinal position"
        );
    }
    dropped
}
