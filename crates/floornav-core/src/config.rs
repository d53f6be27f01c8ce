use crate::error::{FloornavError, Result};
use crate::models::{RoutingOptions, StairPairing, ValidityMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// One floor's geometry file, in vertical order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSourceConfig {
    pub id: String,
    pub path: PathBuf,
}

/// Layered configuration for floornav
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub stair_connector_weight: ConfigValue<f64>,
    pub stair_crossing_weight: ConfigValue<f64>,
    pub stair_pairing: ConfigValue<StairPairing>,
    pub geometry_validity: ConfigValue<ValidityMode>,
    pub room_type_property: ConfigValue<String>,
    pub room_number_property: ConfigValue<String>,
    pub floors: ConfigValue<Vec<FloorSourceConfig>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let defaults = RoutingOptions::default();
        Self {
            stair_connector_weight: ConfigValue::new(
                defaults.stair_connector_weight,
                ConfigSource::Default,
            ),
            stair_crossing_weight: ConfigValue::new(
                defaults.stair_crossing_weight,
                ConfigSource::Default,
            ),
            stair_pairing: ConfigValue::new(defaults.stair_pairing, ConfigSource::Default),
            geometry_validity: ConfigValue::new(
                defaults.geometry_validity,
                ConfigSource::Default,
            ),
            room_type_property: ConfigValue::new("Room Type".to_string(), ConfigSource::Default),
            room_number_property: ConfigValue::new("Room No".to_string(), ConfigSource::Default),
            floors: ConfigValue::new(Vec::new(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    ///
    /// Relative floor paths are resolved against the file's directory.
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FloornavError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FloornavError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(weight) = file_config.stair_connector_weight {
            let weight = validate_weight("stair_connector_weight", weight)?;
            self.stair_connector_weight.update(weight, ConfigSource::File);
        }

        if let Some(weight) = file_config.stair_crossing_weight {
            let weight = validate_weight("stair_crossing_weight", weight)?;
            self.stair_crossing_weight.update(weight, ConfigSource::File);
        }

        if let Some(pairing) = file_config.stair_pairing {
            self.stair_pairing.update(pairing, ConfigSource::File);
        }

        if let Some(geometry_validity) = file_config.geometry_validity {
            self.geometry_validity.update(geometry_validity, ConfigSource::File);
        }

        if let Some(property) = file_config.room_type_property {
            self.room_type_property.update(property, ConfigSource::File);
        }

        if let Some(property) = file_config.room_number_property {
            self.room_number_property.update(property, ConfigSource::File);
        }

        if let Some(floors) = file_config.floors {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            let floors = floors
                .into_iter()
                .map(|floor| FloorSourceConfig {
                    path: if floor.path.is_relative() { base.join(&floor.path) } else { floor.path },
                    id: floor.id,
                })
                .collect();
            self.floors.update(floors, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // FLOORNAV_STAIR_CONNECTOR_WEIGHT
        if let Ok(raw) = env::var("FLOORNAV_STAIR_CONNECTOR_WEIGHT") {
            match parse_weight("stair_connector_weight", &raw) {
                Ok(weight) => self.stair_connector_weight.update(weight, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FLOORNAV_STAIR_CONNECTOR_WEIGHT value '{}': expected a non-negative number",
                    raw
                ),
            }
        }

        // FLOORNAV_STAIR_CROSSING_WEIGHT
        if let Ok(raw) = env::var("FLOORNAV_STAIR_CROSSING_WEIGHT") {
            match parse_weight("stair_crossing_weight", &raw) {
                Ok(weight) => self.stair_crossing_weight.update(weight, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FLOORNAV_STAIR_CROSSING_WEIGHT value '{}': expected a non-negative number",
                    raw
                ),
            }
        }

        // FLOORNAV_STAIR_PAIRING
        if let Ok(raw) = env::var("FLOORNAV_STAIR_PAIRING") {
            match parse_stair_pairing(&raw) {
                Ok(pairing) => self.stair_pairing.update(pairing, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FLOORNAV_STAIR_PAIRING value '{}': expected ordinal or nearest",
                    raw
                ),
            }
        }

        // FLOORNAV_GEOMETRY_VALIDITY
        if let Ok(raw) = env::var("FLOORNAV_GEOMETRY_VALIDITY") {
            match parse_validity_mode(&raw) {
                Ok(validity) => self.geometry_validity.update(validity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FLOORNAV_GEOMETRY_VALIDITY value '{}': expected strict or lenient",
                    raw
                ),
            }
        }

        if let Ok(property) = env::var("FLOORNAV_ROOM_TYPE_PROPERTY") {
            self.room_type_property.update(property, ConfigSource::Environment);
        }

        if let Ok(property) = env::var("FLOORNAV_ROOM_NUMBER_PROPERTY") {
            self.room_number_property.update(property, ConfigSource::Environment);
        }

        // FLOORNAV_FLOORS=Level_1=a.geojson,Level_2=b.geojson
        if let Ok(raw) = env::var("FLOORNAV_FLOORS") {
            match parse_floor_list(&raw) {
                Ok(floors) => self.floors.update(floors, ConfigSource::Environment),
                Err(e) => tracing::warn!("Invalid FLOORNAV_FLOORS value '{}': {}", raw, e),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(weight) = overrides.stair_connector_weight {
            self.stair_connector_weight.update(weight, ConfigSource::Cli);
        }

        if let Some(weight) = overrides.stair_crossing_weight {
            self.stair_crossing_weight.update(weight, ConfigSource::Cli);
        }

        if let Some(pairing) = overrides.stair_pairing {
            self.stair_pairing.update(pairing, ConfigSource::Cli);
        }

        if let Some(geometry_validity) = overrides.geometry_validity {
            self.geometry_validity.update(geometry_validity, ConfigSource::Cli);
        }

        if let Some(floors) = overrides.floors {
            self.floors.update(floors, ConfigSource::Cli);
        }
    }

    /// Graph construction parameters derived from this configuration
    pub fn routing_options(&self) -> RoutingOptions {
        RoutingOptions {
            stair_connector_weight: self.stair_connector_weight.value,
            stair_crossing_weight: self.stair_crossing_weight.value,
            stair_pairing: self.stair_pairing.value,
            geometry_validity: self.geometry_validity.value,
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "stair_connector_weight".to_string(),
            (self.stair_connector_weight.value.to_string(), self.stair_connector_weight.source),
        );

        map.insert(
            "stair_crossing_weight".to_string(),
            (self.stair_crossing_weight.value.to_string(), self.stair_crossing_weight.source),
        );

        map.insert(
            "stair_pairing".to_string(),
            (format!("{:?}", self.stair_pairing.value), self.stair_pairing.source),
        );

        map.insert(
            "geometry_validity".to_string(),
            (format!("{:?}", self.geometry_validity.value), self.geometry_validity.source),
        );

        map.insert(
            "room_type_property".to_string(),
            (self.room_type_property.value.clone(), self.room_type_property.source),
        );

        map.insert(
            "room_number_property".to_string(),
            (self.room_number_property.value.clone(), self.room_number_property.source),
        );

        let floors = self
            .floors
            .value
            .iter()
            .map(|f| format!("{}={}", f.id, f.path.display()))
            .collect::<Vec<_>>()
            .join(",");
        map.insert("floors".to_string(), (floors, self.floors.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    stair_connector_weight: Option<f64>,
    stair_crossing_weight: Option<f64>,
    stair_pairing: Option<StairPairing>,
    geometry_validity: Option<ValidityMode>,
    room_type_property: Option<String>,
    room_number_property: Option<String>,
    floors: Option<Vec<FloorSourceConfig>>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub stair_connector_weight: Option<f64>,
    pub stair_crossing_weight: Option<f64>,
    pub stair_pairing: Option<StairPairing>,
    pub geometry_validity: Option<ValidityMode>,
    pub floors: Option<Vec<FloorSourceConfig>>,
}

fn validate_weight(key: &str, weight: f64) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(FloornavError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("Edge weights must be finite and non-negative, got {}", weight),
        })
    }
}

/// Parse an edge weight from string
pub fn parse_weight(key: &str, s: &str) -> Result<f64> {
    let weight = s.trim().parse::<f64>().map_err(|_| FloornavError::ConfigInvalid {
        key: key.to_string(),
        reason: format!("Invalid number: {}", s),
    })?;
    validate_weight(key, weight)
}

/// Parse stair pairing strategy from string
pub fn parse_stair_pairing(s: &str) -> Result<StairPairing> {
    match s.to_lowercase().as_str() {
        "ordinal" | "index" => Ok(StairPairing::Ordinal),
        "nearest" | "spatial" => Ok(StairPairing::Nearest),
        _ => Err(FloornavError::ConfigInvalid {
            key: "stair_pairing".to_string(),
            reason: format!("Invalid stair pairing: {}. Use ordinal or nearest", s),
        }),
    }
}

/// Parse validity mode from string
pub fn parse_validity_mode(s: &str) -> Result<ValidityMode> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(ValidityMode::Strict),
        "lenient" => Ok(ValidityMode::Lenient),
        _ => Err(FloornavError::ConfigInvalid {
            key: "geometry_validity".to_string(),
            reason: format!("Invalid validity mode: {}. Use strict or lenient", s),
        }),
    }
}

/// Parse an ordered `id=path,id=path` floor list
pub fn parse_floor_list(s: &str) -> Result<Vec<FloorSourceConfig>> {
    s.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((id, path)) if !id.trim().is_empty() && !path.trim().is_empty() => {
                Ok(FloorSourceConfig {
                    id: id.trim().to_string(),
                    path: PathBuf::from(path.trim()),
                })
            }
            _ => Err(FloornavError::ConfigInvalid {
                key: "floors".to_string(),
                reason: format!("Expected id=path, got '{}'", entry),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.stair_connector_weight.value, 0.5);
        assert_eq!(config.stair_crossing_weight.value, 1.0);
        assert_eq!(config.stair_pairing.value, StairPairing::Ordinal);
        assert_eq!(config.stair_pairing.source, ConfigSource::Default);
        assert_eq!(config.room_type_property.value, "Room Type");
        assert!(config.floors.value.is_empty());
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
stair_connector_weight = 0.25
stair_crossing_weight = 3.0
stair_pairing = "nearest"
geometry_validity = "strict"

[[floors]]
id = "Level_1"
path = "/data/Level_1.geojson"

[[floors]]
id = "Level_2"
path = "Level_2.geojson"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.stair_connector_weight.value, 0.25);
        assert_eq!(config.stair_connector_weight.source, ConfigSource::File);
        assert_eq!(config.stair_crossing_weight.value, 3.0);
        assert_eq!(config.stair_pairing.value, StairPairing::Nearest);
        assert_eq!(config.geometry_validity.value, ValidityMode::Strict);

        let floors = &config.floors.value;
        assert_eq!(floors.len(), 2);
        assert_eq!(floors[0].path, PathBuf::from("/data/Level_1.geojson"));
        let parent = file.path().parent().unwrap();
        assert_eq!(floors[1].path, parent.join("Level_2.geojson"));
    }

    #[test]
    fn test_negative_weight_in_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "stair_crossing_weight = -1.0").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(FloornavError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            stair_crossing_weight: Some(5.0),
            stair_pairing: Some(StairPairing::Nearest),
            ..Default::default()
        };

        config.update_from_cli(overrides);

        assert_eq!(config.stair_crossing_weight.value, 5.0);
        assert_eq!(config.stair_crossing_weight.source, ConfigSource::Cli);
        assert_eq!(config.stair_pairing.value, StairPairing::Nearest);
        // These should still be defaults
        assert_eq!(config.stair_connector_weight.source, ConfigSource::Default);
        assert_eq!(config.geometry_validity.source, ConfigSource::Default);
    }

    #[test]
    fn test_routing_options() {
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            stair_connector_weight: Some(0.1),
            ..Default::default()
        });

        let options = config.routing_options();
        assert_eq!(options.stair_connector_weight, 0.1);
        assert_eq!(options.stair_crossing_weight, 1.0);
        assert_eq!(options.geometry_validity, ValidityMode::Lenient);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("w", "0.5").unwrap(), 0.5);
        assert_eq!(parse_weight("w", " 2 ").unwrap(), 2.0);
        assert!(parse_weight("w", "-1").is_err());
        assert!(parse_weight("w", "NaN").is_err());
        assert!(parse_weight("w", "heavy").is_err());
    }

    #[test]
    fn test_parse_stair_pairing() {
        assert_eq!(parse_stair_pairing("ordinal").unwrap(), StairPairing::Ordinal);
        assert_eq!(parse_stair_pairing("NEAREST").unwrap(), StairPairing::Nearest);
        assert!(parse_stair_pairing("random").is_err());
    }

    #[test]
    fn test_parse_validity_mode() {
        assert_eq!(parse_validity_mode("strict").unwrap(), ValidityMode::Strict);
        assert_eq!(parse_validity_mode("LENIENT").unwrap(), ValidityMode::Lenient);
        assert!(parse_validity_mode("invalid").is_err());
    }

    #[test]
    fn test_parse_floor_list() {
        let floors = parse_floor_list("Level_1=a.geojson, Level_2=b.geojson").unwrap();
        assert_eq!(floors.len(), 2);
        assert_eq!(floors[1].id, "Level_2");
        assert_eq!(floors[1].path, PathBuf::from("b.geojson"));

        assert!(parse_floor_list("Level_1").is_err());
        assert!(parse_floor_list("=a.geojson").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("stair_connector_weight"));
        assert!(map.contains_key("stair_pairing"));
        assert!(map.contains_key("floors"));

        let (pairing, source) = &map["stair_pairing"];
        assert_eq!(pairing, "Ordinal");
        assert_eq!(*source, ConfigSource::Default);
    }
}
