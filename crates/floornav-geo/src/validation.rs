use crate::models::{Geometry, ValidityMode};
use floornav_core::error::{FloornavError, Result};
use floornav_core::models::Feature;

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    fn absorb(&mut self, prefix: String, other: ValidationResult) {
        for error in other.errors {
            self.add_error(format!("{}.{}", prefix, error.location), error.reason);
        }
    }

    fn first_reason(&self) -> String {
        self.errors
            .first()
            .map(|e| format!("{}: {}", e.location, e.reason))
            .unwrap_or_else(|| "Invalid geometry".to_string())
    }
}

/// Validate a geometry.
///
/// Checks run on the source coordinates, before any conversion that might
/// repair them. Empty geometries are valid; they simply contribute nothing
/// to a graph.
pub fn validate_geometry(geometry: &Geometry) -> ValidationResult {
    if geometry.is_empty() {
        return ValidationResult::valid();
    }

    match geometry {
        Geometry::Point { coordinates } => validate_point(coordinates),
        Geometry::LineString { coordinates } => validate_linestring(coordinates),
        Geometry::Polygon { coordinates } => validate_polygon(coordinates),
        Geometry::MultiPoint { coordinates } => {
            let mut result = ValidationResult::valid();
            for (i, point) in coordinates.iter().enumerate() {
                result.absorb(format!("MultiPoint[{}]", i), validate_point(point));
            }
            result
        }
        Geometry::MultiLineString { coordinates } => {
            let mut result = ValidationResult::valid();
            for (i, linestring) in coordinates.iter().enumerate() {
                result.absorb(format!("MultiLineString[{}]", i), validate_linestring(linestring));
            }
            result
        }
        Geometry::MultiPolygon { coordinates } => {
            let mut result = ValidationResult::valid();
            for (i, polygon) in coordinates.iter().enumerate() {
                result.absorb(format!("MultiPolygon[{}]", i), validate_polygon(polygon));
            }
            result
        }
    }
}

fn is_finite(coord: &[f64; 2]) -> bool {
    coord[0].is_finite() && coord[1].is_finite()
}

fn validate_point(point: &[f64; 2]) -> ValidationResult {
    let mut result = ValidationResult::valid();
    if !is_finite(point) {
        result.add_error(
            format!("Point({}, {})", point[0], point[1]),
            "Coordinates must be finite".to_string(),
        );
    }
    result
}

fn validate_linestring(linestring: &[[f64; 2]]) -> ValidationResult {
    let mut result = ValidationResult::valid();

    // LineString must have at least 2 points
    if linestring.len() < 2 {
        result.add_error(
            "LineString".to_string(),
            format!("LineString must have at least 2 points, found {}", linestring.len()),
        );
        return result;
    }

    for (i, coord) in linestring.iter().enumerate() {
        if !is_finite(coord) {
            result
                .add_error(format!("LineString[{}]", i), "Coordinates must be finite".to_string());
        }
    }

    result
}

fn validate_ring(location: String, ring: &[[f64; 2]]) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if ring.len() < 4 {
        result.add_error(
            location.clone(),
            format!("Ring must have at least 4 points, found {}", ring.len()),
        );
    }

    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if first != last {
            result.add_error(
                location.clone(),
                "Ring must be closed (first point == last point)".to_string(),
            );
        }
    }

    if !ring.iter().all(is_finite) {
        result.add_error(location, "Coordinates must be finite".to_string());
    }

    result
}

fn validate_polygon(rings: &[Vec<[f64; 2]>]) -> ValidationResult {
    let mut result = ValidationResult::valid();

    for (i, ring) in rings.iter().enumerate() {
        let location = if i == 0 {
            "Polygon exterior".to_string()
        } else {
            format!("Polygon interior[{}]", i - 1)
        };
        for error in validate_ring(location, ring).errors {
            result.add_error(error.location, error.reason);
        }
    }

    result
}

/// Decide whether a feature may take part in graph construction.
///
/// Returns `Ok(true)` for valid features. Invalid features are skipped with a
/// warning (`Ok(false)`) in lenient mode and fail the build in strict mode.
pub fn check_feature(feature: &Feature, mode: ValidityMode) -> Result<bool> {
    let validation = validate_geometry(&feature.geometry);
    if validation.is_valid {
        return Ok(true);
    }

    match mode {
        ValidityMode::Strict => Err(FloornavError::InvalidGeometry {
            feature: format!("{}/{}", feature.floor, feature.display_name()),
            reason: validation.first_reason(),
        }),
        ValidityMode::Lenient => {
            tracing::warn!(
                floor = %feature.floor,
                feature = %feature.display_name(),
                reason = %validation.first_reason(),
                "Skipping invalid feature geometry"
            );
            Ok(false)
        }
    }
}
