//! Process-wide handle to the current navigation bundle

use std::sync::{Arc, PoisonError, RwLock};

use floornav_core::error::Result;
use floornav_core::models::RoutingOptions;
use floornav_core::ports::GeometrySource;

use crate::navigator::NavigationBundle;

/// Shared reference to the bundle queries run against.
///
/// Readers clone the inner `Arc` and keep using that snapshot; a reload swaps
/// the whole bundle in one step, so a query never sees a mix of old and new
/// graphs. The lock only guards the pointer swap. Since the guarded value is
/// a plain `Arc`, a poisoned lock still holds a complete bundle and is used
/// as is.
#[derive(Debug, Clone)]
pub struct SharedNavigator {
    current: Arc<RwLock<Arc<NavigationBundle>>>,
}

impl SharedNavigator {
    pub fn new(bundle: NavigationBundle) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(bundle))) }
    }

    /// Snapshot of the bundle currently being served
    pub fn current(&self) -> Arc<NavigationBundle> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Swap in a new bundle and return the previous one
    pub fn replace(&self, bundle: NavigationBundle) -> Arc<NavigationBundle> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(bundle))
    }

    /// Rebuild from `source` and swap the result in.
    ///
    /// On failure the current bundle stays in place and the error is returned.
    pub async fn reload(
        &self,
        source: &dyn GeometrySource,
        options: &RoutingOptions,
    ) -> Result<Arc<NavigationBundle>> {
        let bundle = NavigationBundle::load(source, options).await?;
        self.replace(bundle);
        tracing::info!(source = %source.describe(), "Navigation bundle replaced");
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floornav_core::models::{Category, Feature, FloorPlan, Geometry, GeometryBundle};
    use floornav_core::ports::StaticGeometrySource;

    fn building(rooms: &[&str]) -> GeometryBundle {
        let mut features = vec![Feature::new(
            "Level_1",
            Category::Corridor,
            "corridor",
            Geometry::line_string(vec![[0.0, 0.0], [10.0, 0.0]]),
        )];
        for (i, name) in rooms.iter().enumerate() {
            features.push(Feature::new("Level_1", Category::Room, *name, Geometry::point(i as f64, 1.0)));
        }
        GeometryBundle::new(vec![FloorPlan::new("Level_1", features)])
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let options = RoutingOptions::default();
        let shared = SharedNavigator::new(NavigationBundle::build(&building(&["ICU"]), &options).unwrap());

        let before = shared.current();
        let previous = shared.replace(NavigationBundle::build(&building(&["MRI"]), &options).unwrap());

        assert!(Arc::ptr_eq(&before, &previous));
        assert!(before.resolve_room("ICU").is_ok());
        assert!(shared.current().resolve_room("ICU").is_err());
        assert!(shared.current().resolve_room("MRI").is_ok());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_current_bundle() {
        let options = RoutingOptions::default();
        let shared = SharedNavigator::new(NavigationBundle::build(&building(&["ICU"]), &options).unwrap());

        let empty = StaticGeometrySource::new(GeometryBundle::default());
        assert!(shared.reload(&empty, &options).await.is_err());
        assert!(shared.current().resolve_room("ICU").is_ok());

        let source = StaticGeometrySource::new(building(&["MRI"]));
        let reloaded = shared.reload(&source, &options).await.unwrap();
        assert!(reloaded.resolve_room("MRI").is_ok());
    }
}
