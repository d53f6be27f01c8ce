//! GeoJSON floor-plan reader

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{FloorSourceConfig, LayeredConfig};
use crate::error::{FloornavError, Result};
use crate::formats::{property_text, PropertyMapping};
use crate::models::{Feature, FloorId, FloorPlan, Geometry, GeometryBundle};
use crate::ports::GeometrySource;

/// Reads one floor from a GeoJSON file
#[derive(Debug, Clone, Default)]
pub struct GeoJsonFloorReader {
    mapping: PropertyMapping,
}

impl GeoJsonFloorReader {
    pub fn new(mapping: PropertyMapping) -> Self {
        Self { mapping }
    }

    /// Read and parse a floor file
    pub fn read(&self, floor: &FloorId, path: &Path) -> Result<FloorPlan> {
        let content = fs::read_to_string(path).map_err(|e| FloornavError::Load {
            source_name: path.display().to_string(),
            reason: format!("Cannot read file: {}", e),
        })?;

        self.parse(floor, &content).map_err(|e| match e {
            FloornavError::Load { reason, .. } => FloornavError::Load {
                source_name: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Parse GeoJSON text into a floor plan
    pub fn parse(&self, floor: &FloorId, content: &str) -> Result<FloorPlan> {
        let geojson: geojson::GeoJson = content.parse().map_err(|e| FloornavError::Load {
            source_name: floor.to_string(),
            reason: format!("Failed to parse GeoJSON: {}", e),
        })?;

        let features = match geojson {
            geojson::GeoJson::FeatureCollection(fc) => fc
                .features
                .iter()
                .enumerate()
                .filter_map(|(idx, feature)| self.convert_feature(floor, feature, idx))
                .collect(),
            geojson::GeoJson::Feature(feature) => {
                self.convert_feature(floor, &feature, 0).into_iter().collect()
            }
            geojson::GeoJson::Geometry(_) => {
                return Err(FloornavError::Load {
                    source_name: floor.to_string(),
                    reason: "Expected a FeatureCollection, found a bare geometry".to_string(),
                })
            }
        };

        Ok(FloorPlan::new(floor.clone(), features))
    }

    /// Convert a GeoJSON feature; features without usable geometry are skipped
    fn convert_feature(
        &self,
        floor: &FloorId,
        feature: &geojson::Feature,
        idx: usize,
    ) -> Option<Feature> {
        let empty = serde_json::Map::new();
        let properties = feature.properties.as_ref().unwrap_or(&empty);

        let label = property_text(properties.get(&self.mapping.room_type)).unwrap_or_default();
        let room_number = property_text(properties.get(&self.mapping.room_number));

        let geometry = match feature.geometry.as_ref().map(|g| convert_geometry(&g.value)) {
            Some(Some(geometry)) => geometry,
            Some(None) => {
                tracing::warn!(floor = %floor, index = idx, label = %label, "Skipping feature with unsupported geometry");
                return None;
            }
            None => {
                tracing::warn!(floor = %floor, index = idx, label = %label, "Skipping feature without geometry");
                return None;
            }
        };

        let category = self.mapping.category(properties, &label);

        Some(Feature {
            floor: floor.clone(),
            category,
            label,
            room_number,
            geometry,
        })
    }
}

/// Convert a GeoJSON geometry value, keeping only x and y
fn convert_geometry(value: &geojson::Value) -> Option<Geometry> {
    use geojson::Value;

    match value {
        Value::Point(p) => Some(Geometry::Point { coordinates: xy(p)? }),
        Value::MultiPoint(points) => Some(Geometry::MultiPoint { coordinates: positions(points)? }),
        Value::LineString(line) => Some(Geometry::LineString { coordinates: positions(line)? }),
        Value::MultiLineString(lines) => Some(Geometry::MultiLineString {
            coordinates: lines.iter().map(|l| positions(l)).collect::<Option<_>>()?,
        }),
        Value::Polygon(rings) => Some(Geometry::Polygon {
            coordinates: rings.iter().map(|r| positions(r)).collect::<Option<_>>()?,
        }),
        Value::MultiPolygon(polygons) => Some(Geometry::MultiPolygon {
            coordinates: polygons
                .iter()
                .map(|rings| rings.iter().map(|r| positions(r)).collect::<Option<Vec<_>>>())
                .collect::<Option<_>>()?,
        }),
        Value::GeometryCollection(_) => None,
    }
}

fn xy(position: &[f64]) -> Option<[f64; 2]> {
    match position {
        [x, y, ..] => Some([*x, *y]),
        _ => None,
    }
}

fn positions(positions: &[Vec<f64>]) -> Option<Vec<[f64; 2]>> {
    positions.iter().map(|p| xy(p)).collect()
}

/// A building described by one GeoJSON file per floor
#[derive(Debug, Clone)]
pub struct GeoJsonFloorSource {
    floors: Vec<(FloorId, PathBuf)>,
    reader: GeoJsonFloorReader,
}

impl GeoJsonFloorSource {
    /// Floors must be listed bottom to top
    pub fn new(floors: Vec<(FloorId, PathBuf)>, mapping: PropertyMapping) -> Self {
        Self { floors, reader: GeoJsonFloorReader::new(mapping) }
    }

    /// Build a source from the `floors` and property settings of a configuration
    pub fn from_config(config: &LayeredConfig) -> Result<Self> {
        if config.floors.value.is_empty() {
            return Err(FloornavError::ConfigMissing { key: "floors".to_string() });
        }

        let floors = config
            .floors
            .value
            .iter()
            .map(|FloorSourceConfig { id, path }| (FloorId::new(id.clone()), path.clone()))
            .collect();

        let mapping = PropertyMapping::new(
            config.room_type_property.value.clone(),
            config.room_number_property.value.clone(),
        );

        Ok(Self::new(floors, mapping))
    }
}

#[async_trait]
impl GeometrySource for GeoJsonFloorSource {
    async fn load(&self) -> Result<GeometryBundle> {
        let mut floors = Vec::with_capacity(self.floors.len());

        for (id, path) in &self.floors {
            let plan = self.reader.read(id, path)?;
            tracing::info!(
                floor = %id,
                path = %path.display(),
                features = plan.features.len(),
                "Loaded floor geometry"
            );
            floors.push(plan);
        }

        Ok(GeometryBundle::new(floors))
    }

    fn describe(&self) -> String {
        let files: Vec<String> = self.floors.iter().map(|(_, p)| p.display().to_string()).collect();
        format!("GeoJSON [{}]", files.join(", "))
    }
}
