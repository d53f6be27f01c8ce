//! HTTP-level tests against an in-memory building

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use floornav_api::{create_router, AppState};
use floornav_core::models::{
    Category, Feature, FloorPlan, Geometry, GeometryBundle, RoutingOptions,
};
use floornav_core::ports::StaticGeometrySource;
use floornav_routing::{NavigationBundle, SharedNavigator};
use serde_json::Value;
use tower::ServiceExt;

fn building() -> GeometryBundle {
    let corridor = |floor: &str| {
        Feature::new(floor, Category::Corridor, "corridor", Geometry::line_string(vec![[0.0, 0.0], [10.0, 0.0]]))
    };
    let stair = |floor: &str| Feature::new(floor, Category::Stair, "Staircase", Geometry::point(9.0, 1.0));

    GeometryBundle::new(vec![
        FloorPlan::new(
            "Level_1",
            vec![
                corridor("Level_1"),
                Feature::new("Level_1", Category::Room, "MRI", Geometry::point(0.0, 1.0)).with_room_number("101"),
                stair("Level_1"),
            ],
        ),
        FloorPlan::new(
            "Level_2",
            vec![
                corridor("Level_2"),
                stair("Level_2"),
                Feature::new("Level_2", Category::Room, "ICU", Geometry::point(0.0, 1.0)),
                Feature::new("Level_2", Category::EmergencyExit, "Emergency Exit", Geometry::point(1.0, -1.0)),
            ],
        ),
    ])
}

fn app() -> Router {
    let options = RoutingOptions::default();
    let bundle = NavigationBundle::build(&building(), &options).unwrap();
    let source = Arc::new(StaticGeometrySource::new(building()));
    create_router(Arc::new(AppState::new(SharedNavigator::new(bundle), source, options)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["floors"], serde_json::json!(["Level_1", "Level_2"]));
    assert_eq!(body["rooms"], 5);
}

#[tokio::test]
async fn test_floors_and_rooms() {
    let (status, floors) = send(app(), get("/api/v1/floors")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(floors[1]["exits"], 1);

    let (_, rooms) = send(app(), get("/api/v1/rooms?floor=Level_1")).await;
    assert_eq!(rooms.as_array().unwrap().len(), 2);

    let (status, _) = send(app(), get("/api/v1/rooms?floor=Basement")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, types) = send(app(), get("/api/v1/room-types")).await;
    assert_eq!(types, serde_json::json!(["Emergency Exit", "ICU", "MRI", "Staircase"]));
}

#[tokio::test]
async fn test_search() {
    let (status, found) = send(app(), get("/api/v1/rooms/search?q=mr")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found[0]["label"], "MRI");
    assert_eq!(found[0]["room_number"], "101");

    let (_, exits) = send(app(), get("/api/v1/rooms/search?category=emergency_exit")).await;
    assert_eq!(exits.as_array().unwrap().len(), 1);

    let (status, _) = send(app(), get("/api/v1/rooms/search?category=lobby")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_path_across_floors() {
    let request = post_json("/api/v1/path", serde_json::json!({ "start": "101", "end": "ICU" }));
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["segments"].as_array().unwrap().len(), 2);
    assert_eq!(body["segments"][0]["floor"], "Level_1");
    assert_eq!(body["segments"][1]["floor"], "Level_2");
    assert_eq!(body["floor_changes"], 1);
    assert_eq!(body["stairs"][0]["points"][0], serde_json::json!([9.0, 1.0]));
}

#[tokio::test]
async fn test_path_trims_identifiers() {
    let request = post_json("/api/v1/path", serde_json::json!({ "start": " 101 ", "end": "ICU\n" }));
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start"]["label"], "MRI");
    assert_eq!(body["end"]["label"], "ICU");

    let (status, _) =
        send(app(), post_json("/api/v1/exit", serde_json::json!({ "start": "  MRI" }))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_path_errors() {
    let unknown = post_json("/api/v1/path", serde_json::json!({ "start": "MRI", "end": "Morgue" }));
    let (status, body) = send(app(), unknown).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Morgue"));

    let empty = post_json("/api/v1/path", serde_json::json!({ "start": "", "end": "ICU" }));
    let (status, _) = send(app(), empty).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exit_routes() {
    let (status, body) =
        send(app(), post_json("/api/v1/exit", serde_json::json!({ "start": "MRI" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["end"]["category"], "emergency_exit");
    assert_eq!(body["end"]["floor"], "Level_2");

    let via_path = post_json("/api/v1/path", serde_json::json!({ "start": "MRI", "end": "emergency exit" }));
    let (status, body) = send(app(), via_path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["end"]["label"], "Emergency Exit");
}

#[tokio::test]
async fn test_reload() {
    let (status, body) = send(app(), post_json("/api/v1/reload", Value::Null)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["floors"], 2);
}
