pub mod bundle;
pub mod feature;
pub mod geometry;
pub mod options;

pub use bundle::{FloorPlan, GeometryBundle};
pub use feature::{Category, Feature, FloorId};
pub use geometry::{Geometry, Point2D, ValidityMode};
pub use options::{RoutingOptions, StairPairing};
