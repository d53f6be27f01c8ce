//! floornav Routing - Multi-floor graph, room lookup and path search
//!
//! This crate joins the per-floor networks into one building graph and
//! answers route and nearest-exit queries against an immutable bundle.

pub mod handle;
pub mod models;
pub mod multi;
pub mod navigator;
pub mod rooms;
pub mod search;

pub use handle::SharedNavigator;
pub use models::{
    split_by_floor, Destination, FloorSegment, FloorStairs, NodeKey, PathResult, ResolvedRoom,
    Route,
};
pub use multi::MultiFloorGraph;
pub use navigator::NavigationBundle;
pub use rooms::{RoomIndex, MAX_SEARCH_RESULTS};
pub use search::{nearest_reachable, shortest_path};
