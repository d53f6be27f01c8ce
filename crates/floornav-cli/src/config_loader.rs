//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use floornav_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "floornav.toml";

/// Resolve which config file to read, if any
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.is_file().then_some(local)
        }
    }
}

/// Build the layered configuration: defaults, file, environment, then CLI
pub fn load_config(explicit: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = config_path(explicit) {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floornav_core::config::ConfigSource;
    use std::io::Write;

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stair_crossing_weight = 4.0").unwrap();
        writeln!(file, "stair_connector_weight = 2.0").unwrap();

        let overrides = CliConfigOverrides {
            stair_crossing_weight: Some(9.0),
            ..CliConfigOverrides::default()
        };
        let config = load_config(Some(file.path()), overrides).unwrap();

        assert_eq!(config.stair_crossing_weight.value, 9.0);
        assert_eq!(config.stair_crossing_weight.source, ConfigSource::Cli);
        assert_eq!(config.stair_connector_weight.source, ConfigSource::File);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(load_config(Some(&missing), CliConfigOverrides::default()).is_err());
    }
}
