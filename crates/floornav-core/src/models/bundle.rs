use serde::{Deserialize, Serialize};

use crate::models::feature::{Feature, FloorId};

/// All features of one building level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: FloorId,
    pub features: Vec<Feature>,
}

impl FloorPlan {
    pub fn new(id: impl Into<FloorId>, features: Vec<Feature>) -> Self {
        Self { id: id.into(), features }
    }
}

/// The complete geometry of a building.
///
/// Floors are kept in vertical order: `floors[i]` and `floors[i + 1]` are
/// adjacent levels and are the only pairs connected by stairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryBundle {
    pub floors: Vec<FloorPlan>,
}

impl GeometryBundle {
    pub fn new(floors: Vec<FloorPlan>) -> Self {
        Self { floors }
    }

    /// Group loose features into floors following `order`.
    ///
    /// Features whose floor is not listed in `order` are dropped.
    pub fn from_features(order: &[FloorId], features: Vec<Feature>) -> Self {
        let mut floors: Vec<FloorPlan> =
            order.iter().map(|id| FloorPlan::new(id.clone(), Vec::new())).collect();

        for feature in features {
            match floors.iter_mut().find(|floor| floor.id == feature.floor) {
                Some(floor) => floor.features.push(feature),
                None => tracing::warn!(
                    floor = %feature.floor,
                    feature = %feature.display_name(),
                    "Dropping feature on undeclared floor"
                ),
            }
        }

        Self { floors }
    }

    pub fn floor_ids(&self) -> Vec<FloorId> {
        self.floors.iter().map(|f| f.id.clone()).collect()
    }

    pub fn feature_count(&self) -> usize {
        self.floors.iter().map(|f| f.features.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}
