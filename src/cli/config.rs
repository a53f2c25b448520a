use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use zipgeo::DistanceUnit;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct QueryConfig {
    #[serde(default)]
    pub unit: DistanceUnit,
}

/// Dataset path and unit after command line overrides are applied
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub dataset: PathBuf,
    pub unit: DistanceUnit,
}

impl Config {
    /// Merge command line values over the file values. A flag always wins.
    pub fn resolve(self, dataset: Option<PathBuf>, unit: Option<DistanceUnit>) -> Result<Settings> {
        let dataset = dataset
            .or(self.dataset.path)
            .context("No dataset given: pass --dataset or set dataset.path in the config file")?;
        Ok(Settings {
            dataset,
            unit: unit.unwrap_or(self.query.unit),
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            path = "DE.txt"

            [query]
            unit = "mi"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.path, Some(PathBuf::from("DE.txt")));
        assert_eq!(config.query.unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.dataset.path.is_none());
        assert_eq!(config.query.unit, DistanceUnit::Kilometers);
    }

    fn file_config() -> Config {
        toml::from_str("[dataset]\npath = \"DE.txt\"\n[query]\nunit = \"mi\"\n").unwrap()
    }

    #[test]
    fn test_flags_override_file() {
        let settings = file_config()
            .resolve(Some(PathBuf::from("AT.txt")), Some(DistanceUnit::Kilometers))
            .unwrap();
        assert_eq!(settings.dataset, PathBuf::from("AT.txt"));
        assert_eq!(settings.unit, DistanceUnit::Kilometers);
    }

    #[test]
    fn test_file_values_used_without_flags() {
        let settings = file_config().resolve(None, None).unwrap();
        assert_eq!(settings.dataset, PathBuf::from("DE.txt"));
        assert_eq!(settings.unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_flag_only_defaults_to_km() {
        let settings = Config::default()
            .resolve(Some(PathBuf::from("DE.txt")), None)
            .unwrap();
        assert_eq!(settings.unit, DistanceUnit::Kilometers);
    }

    #[test]
    fn test_missing_dataset_is_error() {
        let err = Config::default().resolve(None, Some(DistanceUnit::Miles)).unwrap_err();
        assert!(err.to_string().contains("--dataset"));
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result: Result<Config, _> = toml::from_str("[query]\nunit = \"furlong\"\n");
        assert!(result.is_err());
    }
}
