use floornav_core::models::{Category, FloorId, Point2D};
use floornav_geo::StairNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the multi-floor graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    pub floor: FloorId,
    pub point: Point2D,
}

impl NodeKey {
    pub fn new(floor: impl Into<FloorId>, point: Point2D) -> Self {
        Self { floor: floor.into(), point }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.floor, self.point.x, self.point.y)
    }
}

/// A destination feature mapped onto the walkable graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRoom {
    pub floor: FloorId,
    pub label: String,
    pub room_number: Option<String>,
    pub category: Category,

    /// Representative point of the room geometry
    pub centroid: Point2D,

    /// Nearest corridor node; `None` when the floor has no corridors
    pub node: Option<Point2D>,
}

impl ResolvedRoom {
    /// Graph key of the snapped node
    pub fn key(&self) -> Option<NodeKey> {
        self.node.map(|point| NodeKey::new(self.floor.clone(), point))
    }

    pub fn display_name(&self) -> String {
        match &self.room_number {
            Some(number) => format!("{} ({})", self.label, number),
            None => self.label.clone(),
        }
    }
}

/// A path through a graph and its total edge weight
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<K> {
    pub nodes: Vec<K>,
    pub weight: f64,
}

/// A contiguous run of a route on one floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorSegment {
    pub floor: FloorId,
    pub points: Vec<Point2D>,
}

/// The ordered stair list of one floor touched by a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorStairs {
    pub floor: FloorId,
    pub stairs: Vec<StairNode>,
}

/// A computed route, split floor by floor for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub start: ResolvedRoom,
    pub end: ResolvedRoom,

    /// Per-floor runs in travel order; a floor may appear more than once
    pub segments: Vec<FloorSegment>,

    /// Sum of edge weights along the path
    pub total_weight: f64,

    /// Stair markers of every floor the route touches, in first-visit order
    pub stairs: Vec<FloorStairs>,
}

impl Route {
    /// Floors in travel order, one entry per segment
    pub fn floor_sequence(&self) -> Vec<&FloorId> {
        self.segments.iter().map(|s| &s.floor).collect()
    }

    pub fn node_count(&self) -> usize {
        self.segments.iter().map(|s| s.points.len()).sum()
    }

    /// Number of times the route changes floor
    pub fn floor_changes(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

/// Split a multi-floor path into contiguous per-floor runs, preserving order
pub fn split_by_floor(path: &[NodeKey]) -> Vec<FloorSegment> {
    let mut segments: Vec<FloorSegment> = Vec::new();
    for key in path {
        match segments.last_mut() {
            Some(segment) if segment.floor == key.floor => segment.points.push(key.point),
            _ => segments.push(FloorSegment { floor: key.floor.clone(), points: vec![key.point] }),
        }
    }
    segments
}

/// Where a route should end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Room(String),
    NearestExit,
}

impl Destination {
    /// `emergency exit` (any case, surrounding whitespace ignored) asks for the
    /// nearest exit; anything else names a room.
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("emergency exit") {
            Destination::NearestExit
        } else {
            Destination::Room(input.to_string())
        }
    }
}
