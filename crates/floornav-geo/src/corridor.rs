//! Corridor graph construction
//!
//! Corridor outlines are decomposed into straight segments whose endpoints
//! become graph nodes. Coordinates are taken verbatim from the source
//! geometry and never recomputed, so two segments sharing an endpoint in the
//! input always share a node in the graph.

use crate::graph::FloorGraph;
use crate::models::{Geometry, Point2D};
use floornav_core::models::Feature;

/// One walkable polyline of a corridor geometry
#[derive(Debug, Clone, Copy)]
pub struct CorridorLine<'a> {
    pub points: &'a [[f64; 2]],
    /// Polygon boundary ring; walked back to its start even when the source
    /// omits the closing coordinate
    pub ring: bool,
}

impl<'a> CorridorLine<'a> {
    fn open(points: &'a [[f64; 2]]) -> Self {
        Self { points, ring: false }
    }

    fn ring(points: &'a [[f64; 2]]) -> Self {
        Self { points, ring: true }
    }

    /// Consecutive point pairs, including the closing pair of an open ring
    pub fn segments(self) -> impl Iterator<Item = (Point2D, Point2D)> + 'a {
        let closing = match (self.ring, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) if self.points.len() > 2 && first != last => {
                Some((Point2D::from(*last), Point2D::from(*first)))
            }
            _ => None,
        };

        self.points
            .windows(2)
            .map(|pair| (Point2D::from(pair[0]), Point2D::from(pair[1])))
            .chain(closing)
    }
}

/// Walkable polylines of a corridor geometry.
///
/// Polygons contribute every ring (exterior and holes), lines are used
/// directly and points contribute nothing.
pub fn corridor_lines(geometry: &Geometry) -> Vec<CorridorLine<'_>> {
    match geometry {
        Geometry::Point { .. } | Geometry::MultiPoint { .. } => Vec::new(),
        Geometry::LineString { coordinates } => vec![CorridorLine::open(coordinates)],
        Geometry::MultiLineString { coordinates } => {
            coordinates.iter().map(|part| CorridorLine::open(part)).collect()
        }
        Geometry::Polygon { coordinates } => {
            coordinates.iter().map(|r| CorridorLine::ring(r)).collect()
        }
        Geometry::MultiPolygon { coordinates } => {
            coordinates.iter().flatten().map(|r| CorridorLine::ring(r)).collect()
        }
    }
}

/// Add every segment of a corridor geometry to `graph`.
///
/// Returns the number of new edges.
pub fn add_corridor(graph: &mut FloorGraph, geometry: &Geometry) -> usize {
    let mut added = 0;
    for line in corridor_lines(geometry) {
        for (a, b) in line.segments() {
            if graph.add_edge(a, b, a.distance(&b)) {
                added += 1;
            }
        }
    }
    added
}

/// Build the walkable graph of one floor from its corridor features.
///
/// Non-corridor features are ignored. A floor without corridors yields an
/// empty graph.
pub fn build_corridor_graph<'a>(corridors: impl IntoIterator<Item = &'a Feature>) -> FloorGraph {
    let mut graph = FloorGraph::new();
    for feature in corridors.into_iter().filter(|f| f.category.is_walkable()) {
        add_corridor(&mut graph, &feature.geometry);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use floornav_core::models::Category;
    use proptest::prelude::*;

    fn corridor(geometry: Geometry) -> Feature {
        Feature::new("Level_1", Category::Corridor, "corridor", geometry)
    }

    #[test]
    fn test_rectangle_corridor() {
        let features = vec![corridor(Geometry::rectangle([0.0, 0.0], [10.0, 2.0]))];
        let graph = build_corridor_graph(&features);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_weight(&Point2D::new(0.0, 0.0), &Point2D::new(10.0, 0.0)), Some(10.0));
    }

    #[test]
    fn test_open_polygon_ring_is_closed() {
        let features = vec![corridor(Geometry::polygon(vec![vec![
            [0.0, 0.0],
            [10.0, 0.0],
            [10.0, 2.0],
            [0.0, 2.0],
        ]]))];
        let graph = build_corridor_graph(&features);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_weight(&Point2D::new(0.0, 2.0), &Point2D::new(0.0, 0.0)), Some(2.0));
    }

    #[test]
    fn test_open_line_is_not_closed() {
        let features = vec![corridor(Geometry::line_string(vec![[0.0, 0.0], [10.0, 0.0], [10.0, 2.0]]))];
        let graph = build_corridor_graph(&features);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(&Point2D::new(10.0, 2.0), &Point2D::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_polygon_holes_are_walkable() {
        let features = vec![corridor(Geometry::polygon(vec![
            vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
            vec![[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]],
        ]))];
        let graph = build_corridor_graph(&features);

        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn test_overlapping_segments_are_not_duplicated() {
        let features = vec![
            corridor(Geometry::line_string(vec![[0.0, 0.0], [5.0, 0.0], [5.0, 5.0]])),
            corridor(Geometry::line_string(vec![[5.0, 5.0], [5.0, 0.0]])),
        ];
        let graph = build_corridor_graph(&features);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_non_corridor_features_ignored() {
        let features = vec![
            Feature::new("Level_1", Category::Room, "ICU", Geometry::rectangle([0.0, 0.0], [1.0, 1.0])),
            corridor(Geometry::point(3.0, 3.0)),
            corridor(Geometry::line_string(vec![])),
        ];
        let graph = build_corridor_graph(&features);

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_multi_part_corridors() {
        let features = vec![corridor(Geometry::MultiLineString {
            coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0]], vec![[2.0, 0.0], [3.0, 0.0]]],
        })];
        let graph = build_corridor_graph(&features);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    proptest! {
        /// Two corridors meeting at an arbitrary point share exactly one node there
        #[test]
        fn prop_shared_endpoint_is_one_node(
            ax in -1.0e4f64..1.0e4, ay in -1.0e4f64..1.0e4,
            sx in -1.0e4f64..1.0e4, sy in -1.0e4f64..1.0e4,
            bx in -1.0e4f64..1.0e4, by in -1.0e4f64..1.0e4,
        ) {
            let a = [ax, ay];
            let shared = [sx, sy];
            let b = [bx, by];
            prop_assume!(a != shared && b != shared && a != b);

            let features = vec![
                corridor(Geometry::line_string(vec![a, shared])),
                corridor(Geometry::line_string(vec![shared, b])),
            ];
            let graph = build_corridor_graph(&features);

            prop_assert_eq!(graph.node_count(), 3);
            let idx = graph.node_index(&Point2D::from(shared)).unwrap();
            prop_assert_eq!(graph.neighbors(idx).len(), 2);
        }
    }
}
