use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use floornav_core::config::LayeredConfig;
use floornav_core::formats::geojson::GeoJsonFloorSource;
use floornav_core::ports::GeometrySource;
use floornav_routing::{NavigationBundle, SharedNavigator};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use floornav_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "floornav_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();

    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = &api_config.config_path {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
    }
    let config = config.load_from_env();
    let options = config.routing_options();

    tracing::info!(
        port = api_config.port,
        floors = config.floors.value.len(),
        connector_weight = options.stair_connector_weight,
        crossing_weight = options.stair_crossing_weight,
        pairing = ?options.stair_pairing,
        "Starting floornav API server"
    );

    let source: Arc<dyn GeometrySource> = Arc::new(
        GeoJsonFloorSource::from_config(&config)
            .context("No floors configured (set FLOORNAV_FLOORS or FLOORNAV_CONFIG)")?,
    );

    let bundle = NavigationBundle::load(source.as_ref(), &options)
        .await
        .context("Failed to build the navigation graph")?;

    let state = Arc::new(AppState::new(SharedNavigator::new(bundle), source, options));

    let origin = api_config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", api_config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors));

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", api_config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
