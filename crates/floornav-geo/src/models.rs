//! Geometry models for floornav-geo.
//!
//! This module re-exports canonical types from `floornav-core` and provides
//! conversions to the `geo` crate.

use geo::Geometry as GeoGeometry;

// Re-export canonical types from floornav-core
pub use floornav_core::models::{Geometry, Point2D, ValidityMode};

fn to_line_string(coords: &[[f64; 2]]) -> geo::LineString {
    geo::LineString::new(coords.iter().map(|c| geo::Coord { x: c[0], y: c[1] }).collect())
}

fn to_polygon(rings: &[Vec<[f64; 2]>]) -> geo::Polygon {
    match rings.split_first() {
        Some((exterior, interiors)) => geo::Polygon::new(
            to_line_string(exterior),
            interiors.iter().map(|ring| to_line_string(ring)).collect(),
        ),
        None => geo::Polygon::new(geo::LineString::new(vec![]), vec![]),
    }
}

/// Convert a canonical Geometry to a geo::Geometry
pub fn to_geo_geometry(geom: &Geometry) -> GeoGeometry {
    match geom {
        Geometry::Point { coordinates } => {
            GeoGeometry::Point(geo::Point::new(coordinates[0], coordinates[1]))
        }
        Geometry::LineString { coordinates } => GeoGeometry::LineString(to_line_string(coordinates)),
        Geometry::Polygon { coordinates } => GeoGeometry::Polygon(to_polygon(coordinates)),
        Geometry::MultiPoint { coordinates } => GeoGeometry::MultiPoint(geo::MultiPoint::new(
            coordinates.iter().map(|c| geo::Point::new(c[0], c[1])).collect(),
        )),
        Geometry::MultiLineString { coordinates } => GeoGeometry::MultiLineString(
            geo::MultiLineString::new(coordinates.iter().map(|l| to_line_string(l)).collect()),
        ),
        Geometry::MultiPolygon { coordinates } => GeoGeometry::MultiPolygon(
            geo::MultiPolygon::new(coordinates.iter().map(|p| to_polygon(p)).collect()),
        ),
    }
}

/// Extension trait for Geometry with geo-crate operations
pub trait GeometryExt {
    /// Convert to geo::Geometry
    fn to_geo(&self) -> GeoGeometry;

    /// Representative point of the geometry (area-weighted for polygons)
    fn centroid_point(&self) -> Option<Point2D>;
}

impl GeometryExt for Geometry {
    fn to_geo(&self) -> GeoGeometry {
        to_geo_geometry(self)
    }

    fn centroid_point(&self) -> Option<Point2D> {
        use geo::algorithm::centroid::Centroid;
        if self.is_empty() {
            return None;
        }
        self.to_geo().centroid().map(|p| Point2D::new(p.x(), p.y()))
    }
}
