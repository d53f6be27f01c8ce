mod request;
mod response;

pub use request::{ExitRequest, PathRequest, RoomsQuery, SearchQuery};
pub use response::{HealthResponse, ReloadResponse, RoomInfo, RouteResponse, SegmentInfo, StairMarkers};
