use chrono::{DateTime, Utc};
use floornav_core::models::{Category, FloorId, Point2D};
use floornav_routing::{FloorSegment, FloorStairs, NavigationBundle, ResolvedRoom, Route};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub floors: Vec<FloorId>,
    pub nodes: usize,
    pub edges: usize,
    pub rooms: usize,
    pub built_at: DateTime<Utc>,
}

impl HealthResponse {
    pub fn from_bundle(bundle: &NavigationBundle) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            floors: bundle.floor_ids(),
            nodes: bundle.graph().node_count(),
            edges: bundle.graph().edge_count(),
            rooms: bundle.rooms().len(),
            built_at: bundle.built_at(),
        }
    }
}

/// A room as exposed over HTTP; points are `[x, y]` pairs
#[derive(Debug, Serialize)]
pub struct RoomInfo {
    pub floor: FloorId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub category: Category,
    pub centroid: [f64; 2],
    pub node: Option<[f64; 2]>,
}

impl From<&ResolvedRoom> for RoomInfo {
    fn from(room: &ResolvedRoom) -> Self {
        Self {
            floor: room.floor.clone(),
            label: room.label.clone(),
            room_number: room.room_number.clone(),
            category: room.category,
            centroid: room.centroid.to_array(),
            node: room.node.map(Point2D::to_array),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SegmentInfo {
    pub floor: FloorId,
    pub points: Vec<[f64; 2]>,
}

impl From<&FloorSegment> for SegmentInfo {
    fn from(segment: &FloorSegment) -> Self {
        Self {
            floor: segment.floor.clone(),
            points: segment.points.iter().map(|p| p.to_array()).collect(),
        }
    }
}

/// Stair centroids of one floor, in list order
#[derive(Debug, Serialize)]
pub struct StairMarkers {
    pub floor: FloorId,
    pub points: Vec<[f64; 2]>,
}

impl From<&FloorStairs> for StairMarkers {
    fn from(stairs: &FloorStairs) -> Self {
        Self {
            floor: stairs.floor.clone(),
            points: stairs.stairs.iter().map(|s| s.point.to_array()).collect(),
        }
    }
}

/// Route response
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub start: RoomInfo,
    pub end: RoomInfo,
    pub segments: Vec<SegmentInfo>,
    pub stairs: Vec<StairMarkers>,
    pub total_weight: f64,
    pub floor_changes: usize,
}

impl From<&Route> for RouteResponse {
    fn from(route: &Route) -> Self {
        Self {
            start: RoomInfo::from(&route.start),
            end: RoomInfo::from(&route.end),
            segments: route.segments.iter().map(SegmentInfo::from).collect(),
            stairs: route.stairs.iter().map(StairMarkers::from).collect(),
            total_weight: route.total_weight,
            floor_changes: route.floor_changes(),
        }
    }
}

/// Reload operation response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub floors: usize,
    pub nodes: usize,
    pub edges: usize,
    pub built_at: DateTime<Utc>,
    pub message: String,
}

impl ReloadResponse {
    pub fn success(bundle: &NavigationBundle, source: &str) -> Self {
        Self {
            success: true,
            floors: bundle.floor_ids().len(),
            nodes: bundle.graph().node_count(),
            edges: bundle.graph().edge_count(),
            built_at: bundle.built_at(),
            message: format!("Reloaded geometry from {}", source),
        }
    }
}
