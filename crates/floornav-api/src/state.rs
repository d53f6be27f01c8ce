use std::sync::Arc;

use floornav_core::models::RoutingOptions;
use floornav_core::ports::GeometrySource;
use floornav_routing::SharedNavigator;

#[derive(Clone)]
pub struct AppState {
    pub navigator: SharedNavigator,
    /// Where reloads read geometry from
    pub source: Arc<dyn GeometrySource>,
    pub options: RoutingOptions,
}

impl AppState {
    pub fn new(
        navigator: SharedNavigator,
        source: Arc<dyn GeometrySource>,
        options: RoutingOptions,
    ) -> Self {
        Self { navigator, source, options }
    }
}
