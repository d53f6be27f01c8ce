//! Stair placement on a floor graph and pairing across floors

use serde::{Deserialize, Serialize};

use crate::graph::FloorGraph;
use crate::models::{GeometryExt, Point2D};
use crate::snap::SnapIndex;
use floornav_core::models::{Feature, StairPairing};

/// A stair centroid on one floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairNode {
    /// Position in the floor's ordered stair list
    pub ordinal: usize,
    pub point: Point2D,
    pub label: String,
    /// Corridor node the stair is connected to; `None` on a floor without corridors
    pub connector: Option<Point2D>,
}

/// Connect every stair to its nearest corridor node.
///
/// Each stair centroid gets one connector edge of `connector_weight` to the
/// node returned by `snap`. Stairs on a floor without corridor nodes are still
/// listed, without a connector. Stairs with an empty geometry have no centroid
/// and are skipped.
///
/// `snap` should index the corridor nodes only, so running the linker again
/// with the same inputs adds no edges.
pub fn link_stairs<'a>(
    graph: &mut FloorGraph,
    snap: &SnapIndex,
    stairs: impl IntoIterator<Item = &'a Feature>,
    connector_weight: f64,
) -> Vec<StairNode> {
    let mut nodes = Vec::new();

    for stair in stairs {
        let Some(point) = stair.geometry.centroid_point() else {
            tracing::warn!(
                floor = %stair.floor,
                stair = %stair.display_name(),
                "Skipping stair without a centroid"
            );
            continue;
        };

        let connector = snap.nearest(point);
        if let Some(target) = connector {
            graph.add_edge(point, target, connector_weight);
        }

        nodes.push(StairNode {
            ordinal: nodes.len(),
            point,
            label: stair.label.clone(),
            connector,
        });
    }

    nodes
}

/// Pair the stairs of two adjacent floors.
///
/// Returns `(lower, upper)` index pairs into the two slices, sorted by the
/// lower index.
/// Both strategies produce `min(lower.len(), upper.len())` pairs. The
/// nearest strategy commits the closest remaining pair first.
pub fn pair_stairs(
    lower: &[StairNode],
    upper: &[StairNode],
    strategy: StairPairing,
) -> Vec<(usize, usize)> {
    match strategy {
        StairPairing::Ordinal => (0..lower.len().min(upper.len())).map(|i| (i, i)).collect(),
        StairPairing::Nearest => {
            let mut candidates: Vec<(usize, usize, f64)> = lower
                .iter()
                .enumerate()
                .flat_map(|(l, low)| {
                    upper.iter().enumerate().map(move |(u, up)| (l, u, low.point.distance(&up.point)))
                })
                .collect();
            // Stable sort keeps lower-then-upper order on equal distances
            candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

            let mut lower_taken = vec![false; lower.len()];
            let mut upper_taken = vec![false; upper.len()];
            let mut pairs = Vec::new();

            for (l, u, _) in candidates {
                if lower_taken[l] || upper_taken[u] {
                    continue;
                }
                lower_taken[l] = true;
                upper_taken[u] = true;
                pairs.push((l, u));
            }

            pairs.sort_unstable();
            pairs
        }
    }
}
