//! Immutable navigation state and the query operations over it

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use floornav_core::error::{FloornavError, Result};
use floornav_core::models::{FloorId, GeometryBundle, RoutingOptions};
use floornav_core::ports::GeometrySource;
use floornav_geo::{FloorNetwork, FloorStats};

use crate::models::{split_by_floor, Destination, FloorStairs, NodeKey, PathResult, ResolvedRoom, Route};
use crate::multi::MultiFloorGraph;
use crate::rooms::RoomIndex;
use crate::search::{nearest_reachable, shortest_path};

const EXIT_TARGET: &str = "emergency exit";

/// Everything a query needs, built once and never mutated
#[derive(Debug, Clone)]
pub struct NavigationBundle {
    floors: Vec<FloorNetwork>,
    graph: MultiFloorGraph,
    rooms: RoomIndex,
    options: RoutingOptions,
    built_at: DateTime<Utc>,
}

impl NavigationBundle {
    /// Load geometry from a source and build a bundle from it
    pub async fn load(source: &dyn GeometrySource, options: &RoutingOptions) -> Result<Self> {
        tracing::info!(source = %source.describe(), "Loading building geometry");
        let geometry = source.load().await?;
        Self::build(&geometry, options)
    }

    /// Build floor graphs, the multi-floor graph and the room index.
    ///
    /// Fails when there are no floors, when floor ids repeat, when a weight is
    /// negative or not finite, or on the first invalid feature in strict mode.
    /// Floors without corridors are kept; queries touching them fail later.
    pub fn build(geometry: &GeometryBundle, options: &RoutingOptions) -> Result<Self> {
        if geometry.is_empty() {
            return Err(FloornavError::Build { reason: "geometry contains no floors".to_string() });
        }

        let mut seen = HashSet::new();
        for floor in &geometry.floors {
            if !seen.insert(&floor.id) {
                return Err(FloornavError::Build {
                    reason: format!("floor '{}' is declared more than once", floor.id),
                });
            }
        }

        for (name, weight) in [
            ("stair_connector_weight", options.stair_connector_weight),
            ("stair_crossing_weight", options.stair_crossing_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(FloornavError::Build {
                    reason: format!("{} must be a non-negative number, got {}", name, weight),
                });
            }
        }

        let floors = geometry
            .floors
            .iter()
            .map(|plan| FloorNetwork::build(plan, options))
            .collect::<Result<Vec<_>>>()?;

        let graph = MultiFloorGraph::assemble(&floors, options);
        let rooms = RoomIndex::build(&floors);

        tracing::info!(
            floors = floors.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            crossings = graph.crossings(),
            rooms = rooms.len(),
            "Navigation graph built"
        );

        Ok(Self { floors, graph, rooms, options: *options, built_at: Utc::now() })
    }

    /// Find a room by exact label or room number
    pub fn resolve_room(&self, identifier: &str) -> Result<&ResolvedRoom> {
        self.rooms.resolve(identifier)
    }

    /// Shortest route between two rooms
    pub fn find_path(&self, start: &str, end: &str) -> Result<Route> {
        let from = self.resolve_room(start)?;
        let to = self.resolve_room(end)?;

        let (Some(from_key), Some(to_key)) = (from.key(), to.key()) else {
            return Err(FloornavError::no_path(start, end));
        };

        tracing::debug!(from = %from_key, to = %to_key, "Searching shortest path");

        let path = shortest_path(self.graph.graph(), &from_key, &to_key)
            .ok_or_else(|| FloornavError::no_path(start, end))?;

        Ok(self.route(from, to, path))
    }

    /// Route from a room to the emergency exit with the lowest path weight.
    ///
    /// Exits that cannot be reached are ignored. `NoExits` when the building
    /// defines none, `NoPath` when none is reachable.
    pub fn find_nearest_exit(&self, start: &str) -> Result<Route> {
        let from = self.resolve_room(start)?;

        if self.rooms.exits().next().is_none() {
            return Err(FloornavError::NoExits);
        }
        let exits: Vec<&ResolvedRoom> = self.rooms.exits().filter(|e| e.node.is_some()).collect();

        let from_key = from.key().ok_or_else(|| FloornavError::no_path(start, EXIT_TARGET))?;
        let candidates: Vec<NodeKey> = exits.iter().filter_map(|e| e.key()).collect();

        tracing::debug!(from = %from_key, exits = candidates.len(), "Searching nearest exit");

        let (position, path) = nearest_reachable(self.graph.graph(), &from_key, &candidates)
            .ok_or_else(|| FloornavError::no_path(start, EXIT_TARGET))?;

        Ok(self.route(from, exits[position], path))
    }

    /// Route to a room, or to the nearest exit for `emergency exit`
    pub fn navigate(&self, start: &str, destination: &str) -> Result<Route> {
        match Destination::parse(destination) {
            Destination::NearestExit => self.find_nearest_exit(start),
            Destination::Room(room) => self.find_path(start, &room),
        }
    }

    fn route(&self, start: &ResolvedRoom, end: &ResolvedRoom, path: PathResult<NodeKey>) -> Route {
        let segments = split_by_floor(&path.nodes);

        let mut touched: Vec<&FloorId> = Vec::new();
        for segment in &segments {
            if !touched.contains(&&segment.floor) {
                touched.push(&segment.floor);
            }
        }

        let stairs = touched
            .into_iter()
            .filter_map(|id| self.floor(id))
            .map(|floor| FloorStairs { floor: floor.id.clone(), stairs: floor.stairs.clone() })
            .collect();

        Route {
            start: start.clone(),
            end: end.clone(),
            segments,
            total_weight: path.weight,
            stairs,
        }
    }

    pub fn floor(&self, id: &FloorId) -> Option<&FloorNetwork> {
        self.floors.iter().find(|f| &f.id == id)
    }

    /// Floor ids in vertical order
    pub fn floor_ids(&self) -> Vec<FloorId> {
        self.floors.iter().map(|f| f.id.clone()).collect()
    }

    pub fn floor_stats(&self) -> Vec<FloorStats> {
        self.floors.iter().map(FloorNetwork::stats).collect()
    }

    pub fn rooms(&self) -> &RoomIndex {
        &self.rooms
    }

    pub fn graph(&self) -> &MultiFloorGraph {
        &self.graph
    }

    pub fn options(&self) -> &RoutingOptions {
        &self.options
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}
