//! Room lookup by label or room number

use std::collections::{BTreeSet, HashMap};

use floornav_core::error::{FloornavError, Result};
use floornav_core::models::{Category, FloorId};
use floornav_geo::{FloorNetwork, GeometryExt};

use crate::models::ResolvedRoom;

/// Upper bound on search results
pub const MAX_SEARCH_RESULTS: usize = 50;

/// Every destination of the building, snapped onto its floor graph.
///
/// Identifiers are matched exactly. When several rooms share an identifier
/// the first one in floor order, then source order, wins.
#[derive(Debug, Clone, Default)]
pub struct RoomIndex {
    rooms: Vec<ResolvedRoom>,
    by_identifier: HashMap<String, usize>,
}

impl RoomIndex {
    /// Index the destinations of floors given in vertical order
    pub fn build(floors: &[FloorNetwork]) -> Self {
        let mut index = Self::default();

        for floor in floors {
            for feature in &floor.destinations {
                let Some(centroid) = feature.geometry.centroid_point() else {
                    tracing::warn!(
                        floor = %floor.id,
                        room = %feature.display_name(),
                        "Skipping destination without a centroid"
                    );
                    continue;
                };

                let position = index.rooms.len();
                index.rooms.push(ResolvedRoom {
                    floor: floor.id.clone(),
                    label: feature.label.clone(),
                    room_number: feature.room_number.clone(),
                    category: feature.category,
                    centroid,
                    node: floor.snap.nearest(centroid),
                });

                let keys = std::iter::once(feature.label.as_str()).chain(feature.room_number.as_deref());
                for key in keys.filter(|k| !k.is_empty()) {
                    index.by_identifier.entry(key.to_string()).or_insert(position);
                }
            }
        }

        index
    }

    /// Look up a room by exact label or room number
    pub fn resolve(&self, identifier: &str) -> Result<&ResolvedRoom> {
        self.by_identifier
            .get(identifier)
            .map(|&i| &self.rooms[i])
            .ok_or_else(|| FloornavError::room_not_found(identifier))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All destinations, optionally restricted to one floor
    pub fn list(&self, floor: Option<&FloorId>) -> Vec<&ResolvedRoom> {
        self.rooms.iter().filter(|r| floor.map_or(true, |f| &r.floor == f)).collect()
    }

    /// Emergency exits in floor order
    pub fn exits(&self) -> impl Iterator<Item = &ResolvedRoom> {
        self.rooms.iter().filter(|r| r.category == Category::EmergencyExit)
    }

    /// Distinct non-empty labels, sorted
    pub fn labels(&self) -> Vec<String> {
        self.rooms
            .iter()
            .filter(|r| !r.label.is_empty())
            .map(|r| r.label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Case-insensitive substring search on label and room number.
    ///
    /// An empty query matches everything. At most [`MAX_SEARCH_RESULTS`]
    /// rooms are returned.
    pub fn search(
        &self,
        query: &str,
        category: Option<Category>,
        floor: Option<&FloorId>,
    ) -> Vec<&ResolvedRoom> {
        let needle = query.trim().to_lowercase();

        self.rooms
            .iter()
            .filter(|r| category.map_or(true, |c| r.category == c))
            .filter(|r| floor.map_or(true, |f| &r.floor == f))
            .filter(|r| {
                needle.is_empty()
                    || r.label.to_lowercase().contains(&needle)
                    || r.room_number.as_deref().is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }
}
