use floornav_core::models::Point2D;
use floornav_geo::FloorStats;
use floornav_routing::{ResolvedRoom, Route};
use serde::Serialize;
use tabled::Tabled;

pub fn format_point(point: &Point2D) -> String {
    format!("({:.2}, {:.2})", point.x, point.y)
}

fn format_optional_point(point: &Option<Point2D>) -> String {
    point.as_ref().map(format_point).unwrap_or_else(|| "-".to_string())
}

/// Output for route and exit commands
#[derive(Debug, Serialize)]
pub struct RouteOutput {
    #[serde(flatten)]
    pub route: Route,
    pub floor_changes: usize,
    pub node_count: usize,
}

impl From<Route> for RouteOutput {
    fn from(route: Route) -> Self {
        Self {
            floor_changes: route.floor_changes(),
            node_count: route.node_count(),
            route,
        }
    }
}

/// One per-floor run of a route
#[derive(Debug, Serialize, Tabled)]
pub struct SegmentRow {
    #[tabled(rename = "#")]
    pub step: usize,
    #[tabled(rename = "Floor")]
    pub floor: String,
    #[tabled(rename = "Nodes")]
    pub nodes: usize,
    #[tabled(rename = "Enter")]
    pub enter: String,
    #[tabled(rename = "Leave")]
    pub leave: String,
}

impl SegmentRow {
    pub fn from_route(route: &Route) -> Vec<Self> {
        route
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| Self {
                step: i + 1,
                floor: segment.floor.to_string(),
                nodes: segment.points.len(),
                enter: format_optional_point(&segment.points.first().copied()),
                leave: format_optional_point(&segment.points.last().copied()),
            })
            .collect()
    }
}

/// Stair marker on a floor the route touches
#[derive(Debug, Serialize, Tabled)]
pub struct StairRow {
    #[tabled(rename = "Floor")]
    pub floor: String,
    #[tabled(rename = "Stair")]
    pub ordinal: usize,
    #[tabled(rename = "Centroid")]
    pub centroid: String,
    #[tabled(rename = "Corridor Node")]
    pub connector: String,
}

impl StairRow {
    pub fn from_route(route: &Route) -> Vec<Self> {
        route
            .stairs
            .iter()
            .flat_map(|floor| {
                floor.stairs.iter().map(move |stair| Self {
                    floor: floor.floor.to_string(),
                    ordinal: stair.ordinal,
                    centroid: format_point(&stair.point),
                    connector: format_optional_point(&stair.connector),
                })
            })
            .collect()
    }
}

/// Row of the rooms command
#[derive(Debug, Serialize, Tabled)]
pub struct RoomRow {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Number")]
    pub room_number: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Floor")]
    pub floor: String,
    #[tabled(rename = "Centroid")]
    pub centroid: String,
    #[tabled(rename = "Corridor Node")]
    pub node: String,
}

impl From<&ResolvedRoom> for RoomRow {
    fn from(room: &ResolvedRoom) -> Self {
        Self {
            label: room.label.clone(),
            room_number: room.room_number.clone().unwrap_or_else(|| "-".to_string()),
            category: room.category.to_string(),
            floor: room.floor.to_string(),
            centroid: format_point(&room.centroid),
            node: format_optional_point(&room.node),
        }
    }
}

/// Row of the floors command
#[derive(Debug, Serialize, Tabled)]
pub struct FloorRow {
    #[tabled(rename = "Floor")]
    pub floor: String,
    #[tabled(rename = "Rooms")]
    pub rooms: usize,
    #[tabled(rename = "Stairs")]
    pub stairs: usize,
    #[tabled(rename = "Exits")]
    pub exits: usize,
    #[tabled(rename = "Nodes")]
    pub nodes: usize,
    #[tabled(rename = "Edges")]
    pub edges: usize,
    #[tabled(rename = "Skipped")]
    pub skipped: usize,
}

impl From<FloorStats> for FloorRow {
    fn from(stats: FloorStats) -> Self {
        Self {
            floor: stats.floor.to_string(),
            rooms: stats.rooms,
            stairs: stats.stairs,
            exits: stats.exits,
            nodes: stats.nodes,
            edges: stats.edges,
            skipped: stats.skipped,
        }
    }
}

/// Row of the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
