//! Canonical geometry types used across all floornav crates.
//!
//! `Geometry` serializes as a GeoJSON geometry object; the geo crate
//! conversions live in floornav-geo.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A planar floor-plan coordinate.
///
/// Equality and hashing are exact on the bit patterns of both coordinates
/// (with `-0.0` folded into `0.0`), so a point can be used directly as a
/// graph node key. Two coordinates that differ in the last bit are different
/// nodes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn key_bits(&self) -> (u64, u64) {
        (canonical_bits(self.x), canonical_bits(self.y))
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for Point2D {}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(coords: [f64; 2]) -> Self {
        Self::new(coords[0], coords[1])
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Geometry validation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidityMode {
    /// Strict validation - reject the whole build on an invalid geometry
    Strict,
    /// Lenient validation - skip invalid features and keep building
    #[default]
    Lenient,
}

/// GeoJSON-compatible geometry representation
///
/// This enum directly maps to GeoJSON geometry types with coordinate arrays.
/// It can be serialized/deserialized as GeoJSON and converted to/from `geo` crate types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl Geometry {
    /// Create a Point geometry
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point { coordinates: [x, y] }
    }

    /// Create a LineString geometry
    pub fn line_string(coords: Vec<[f64; 2]>) -> Self {
        Geometry::LineString { coordinates: coords }
    }

    /// Create a Polygon geometry
    pub fn polygon(rings: Vec<Vec<[f64; 2]>>) -> Self {
        Geometry::Polygon { coordinates: rings }
    }

    /// Axis-aligned rectangle as a closed single-ring polygon
    pub fn rectangle(min: [f64; 2], max: [f64; 2]) -> Self {
        Geometry::polygon(vec![vec![
            [min[0], min[1]],
            [max[0], min[1]],
            [max[0], max[1]],
            [min[0], max[1]],
            [min[0], min[1]],
        ]])
    }

    /// True when the geometry carries no coordinates at all
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point { .. } => false,
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                coordinates.is_empty()
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                coordinates.iter().all(|part| part.is_empty())
            }
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().all(|ring| ring.is_empty())
            }
        }
    }
}
