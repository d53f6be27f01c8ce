//! The building-wide graph joining every floor through its stairs

use floornav_core::models::{FloorId, RoutingOptions, StairPairing};
use floornav_geo::{pair_stairs, FloorNetwork, WeightedGraph};

use crate::models::NodeKey;

/// Union of all floor graphs plus stair crossing edges
#[derive(Debug, Clone, Default)]
pub struct MultiFloorGraph {
    graph: WeightedGraph<NodeKey>,
    crossings: usize,
}

impl MultiFloorGraph {
    /// Merge floor networks given in vertical order.
    ///
    /// Only consecutive floors are connected. Their stairs are paired with the
    /// configured strategy and each pair gets one crossing edge.
    pub fn assemble(floors: &[FloorNetwork], options: &RoutingOptions) -> Self {
        let mut graph = WeightedGraph::new();

        for floor in floors {
            for point in floor.graph.nodes() {
                graph.add_node(NodeKey::new(floor.id.clone(), *point));
            }
            for (a, b, weight) in floor.graph.edges() {
                graph.add_edge(
                    NodeKey::new(floor.id.clone(), *a),
                    NodeKey::new(floor.id.clone(), *b),
                    weight,
                );
            }
        }

        let mut crossings = 0;
        for pair in floors.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);

            if lower.stairs.len() != upper.stairs.len() {
                tracing::warn!(
                    lower = %lower.id,
                    upper = %upper.id,
                    lower_stairs = lower.stairs.len(),
                    upper_stairs = upper.stairs.len(),
                    pairing = ?options.stair_pairing,
                    "Stair counts differ between adjacent floors; extra stairs stay unpaired"
                );
            }

            if options.stair_pairing == StairPairing::Ordinal {
                for floor in [lower, upper].into_iter().filter(|f| f.dropped_stairs() > 0) {
                    tracing::warn!(
                        floor = %floor.id,
                        lower = %lower.id,
                        upper = %upper.id,
                        dropped = floor.dropped_stairs(),
                        "Dropped stairs shift ordinal pairing; stairs after them connect to a different stair"
                    );
                }
            }

            for (l, u) in pair_stairs(&lower.stairs, &upper.stairs, options.stair_pairing) {
                let added = graph.add_edge(
                    NodeKey::new(lower.id.clone(), lower.stairs[l].point),
                    NodeKey::new(upper.id.clone(), upper.stairs[u].point),
                    options.stair_crossing_weight,
                );
                if added {
                    crossings += 1;
                }
            }
        }

        Self { graph, crossings }
    }

    pub fn graph(&self) -> &WeightedGraph<NodeKey> {
        &self.graph
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.graph.contains_node(key)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of inter-floor stair edges
    pub fn crossings(&self) -> usize {
        self.crossings
    }

    /// Nodes belonging to one floor
    pub fn floor_nodes<'a>(&'a self, floor: &'a FloorId) -> impl Iterator<Item = &'a NodeKey> {
        self.graph.nodes().iter().filter(move |k| &k.floor == floor)
    }
}
