//! Nearest-node lookup on a floor graph

use rstar::primitives::GeomWithData;
use rstar::RTree;
use std::fmt;

use crate::graph::FloorGraph;
use crate::models::Point2D;

type IndexedNode = GeomWithData<[f64; 2], Point2D>;

/// R-tree over the nodes of one floor graph.
///
/// The index is a snapshot: nodes added to the graph after the index was
/// built are not visible to it.
#[derive(Clone)]
pub struct SnapIndex {
    tree: RTree<IndexedNode>,
}

impl Default for SnapIndex {
    fn default() -> Self {
        Self { tree: RTree::new() }
    }
}

impl fmt::Debug for SnapIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapIndex").field("nodes", &self.tree.size()).finish()
    }
}

impl SnapIndex {
    /// Index every node of `graph`
    pub fn build(graph: &FloorGraph) -> Self {
        let nodes: Vec<IndexedNode> = graph
            .nodes()
            .iter()
            .map(|p| GeomWithData::new(p.to_array(), *p))
            .collect();

        Self { tree: RTree::bulk_load(nodes) }
    }

    /// The indexed node closest to `point`, or `None` when the index is empty
    pub fn nearest(&self, point: Point2D) -> Option<Point2D> {
        self.tree.nearest_neighbor(&point.to_array()).map(|node| node.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

/// Linear-scan nearest node; the first node at the minimum distance wins
pub fn nearest_node(point: Point2D, graph: &FloorGraph) -> Option<Point2D> {
    let mut best: Option<(Point2D, f64)> = None;
    for node in graph.nodes() {
        let distance = point.distance(node);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((*node, distance)),
        }
    }
    best.map(|(node, _)| node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line_graph(points: &[(f64, f64)]) -> FloorGraph {
        let mut graph = FloorGraph::new();
        for pair in points.windows(2) {
            let a = Point2D::from(pair[0]);
            let b = Point2D::from(pair[1]);
            graph.add_edge(a, b, a.distance(&b));
        }
        graph
    }

    #[test]
    fn test_empty_graph_has_no_nearest() {
        let graph = FloorGraph::new();
        let index = SnapIndex::build(&graph);

        assert!(index.is_empty());
        assert_eq!(index.nearest(Point2D::new(1.0, 1.0)), None);
        assert_eq!(nearest_node(Point2D::new(1.0, 1.0), &graph), None);
    }

    #[test]
    fn test_nearest_node() {
        let graph = line_graph(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let index = SnapIndex::build(&graph);
        let query = Point2D::new(9.0, 2.0);

        assert_eq!(index.len(), 3);
        assert_eq!(index.nearest(query), Some(Point2D::new(10.0, 0.0)));
        assert_eq!(nearest_node(query, &graph), Some(Point2D::new(10.0, 0.0)));
    }

    #[test]
    fn test_linear_scan_keeps_first_on_tie() {
        let graph = line_graph(&[(-1.0, 0.0), (1.0, 0.0)]);
        assert_eq!(nearest_node(Point2D::new(0.0, 0.0), &graph), Some(Point2D::new(-1.0, 0.0)));
    }

    #[test]
    fn test_index_is_a_snapshot() {
        let mut graph = line_graph(&[(0.0, 0.0), (10.0, 0.0)]);
        let index = SnapIndex::build(&graph);
        graph.add_edge(Point2D::new(10.0, 0.0), Point2D::new(5.0, 5.0), 1.0);

        assert_eq!(index.nearest(Point2D::new(4.0, 4.0)), Some(Point2D::new(0.0, 0.0)));
    }

    proptest! {
        #[test]
        fn prop_nearest_is_minimal(
            coords in prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 2..40),
            qx in -1.0e3f64..1.0e3,
            qy in -1.0e3f64..1.0e3,
        ) {
            let graph = line_graph(&coords);
            let index = SnapIndex::build(&graph);
            let query = Point2D::new(qx, qy);

            let linear = nearest_node(query, &graph).unwrap();
            let indexed = index.nearest(query).unwrap();
            let best = query.distance(&linear);

            for node in graph.nodes() {
                prop_assert!(best <= query.distance(node));
            }
            // The R-tree may pick a different node on exact ties
            prop_assert!((query.distance(&indexed) - best).abs() <= 1e-9 * (1.0 + best));
        }
    }
}
