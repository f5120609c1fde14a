//! Configuration file loading for the extraction pipeline.
//!
//! Pipelines are usually tuned per document source, so the stage
//! parameters can live in TOML or JSON files next to the scans they were
//! tuned for. Missing fields fall back to their defaults, which keeps the
//! files down to the parameters that actually deviate.

use crate::core::{GridScanConfig, GridScanError};
use std::path::Path;

/// Configuration file format.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl GridScanConfig {
    /// Loads a configuration file, detecting the format from its extension.
    ///
    /// Convenience for [`ConfigLoader::load_from_file`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GridScanError> {
        ConfigLoader::load_from_file(path.as_ref())
    }
}

/// Loader for pipeline configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a configuration file, detecting the format from its extension.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gridscan::pipeline::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load_from_file(Path::new("gridscan.toml"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_from_file(path: &Path) -> Result<GridScanConfig, GridScanError> {
        let format =
            ConfigFormat::from_extension(path).ok_or_else(|| GridScanError::ConfigError {
                message: format!("Unsupported config file extension: {:?}", path.extension()),
            })?;

        let content = std::fs::read_to_string(path).map_err(|e| GridScanError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        Self::load_from_string(&content, format)
    }

    /// Loads a configuration from a string in the given format.
    pub fn load_from_string(
        content: &str,
        format: ConfigFormat,
    ) -> Result<GridScanConfig, GridScanError> {
        match format {
            ConfigFormat::Toml => Self::load_from_toml(content),
            ConfigFormat::Json => Self::load_from_json(content),
        }
    }

    /// Loads a configuration from a TOML string.
    pub fn load_from_toml(content: &str) -> Result<GridScanConfig, GridScanError> {
        toml::from_str(content).map_err(|e| GridScanError::ConfigError {
            message: format!("Failed to parse TOML config: {e}"),
        })
    }

    /// Loads a configuration from a JSON string.
    pub fn load_from_json(content: &str) -> Result<GridScanConfig, GridScanError> {
        serde_json::from_str(content).map_err(|e| GridScanError::ConfigError {
            message: format!("Failed to parse JSON config: {e}"),
        })
    }

    /// Saves a configuration to a file, detecting the format from its
    /// extension.
    pub fn save_to_file(config: &GridScanConfig, path: &Path) -> Result<(), GridScanError> {
        let format =
            ConfigFormat::from_extension(path).ok_or_else(|| GridScanError::ConfigError {
                message: format!("Unsupported config file extension: {:?}", path.extension()),
            })?;

        let content = Self::save_to_string(config, format)?;

        std::fs::write(path, content).map_err(|e| GridScanError::ConfigError {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Saves a configuration to a string in the given format.
    pub fn save_to_string(
        config: &GridScanConfig,
        format: ConfigFormat,
    ) -> Result<String, GridScanError> {
        match format {
            ConfigFormat::Toml => Self::save_to_toml(config),
            ConfigFormat::Json => Self::save_to_json(config),
        }
    }

    /// Saves a configuration to a TOML string.
    pub fn save_to_toml(config: &GridScanConfig) -> Result<String, GridScanError> {
        toml::to_string_pretty(config).map_err(|e| GridScanError::ConfigError {
            message: format!("Failed to serialize config to TOML: {e}"),
        })
    }

    /// Saves a configuration to a JSON string.
    pub fn save_to_json(config: &GridScanConfig) -> Result<String, GridScanError> {
        serde_json::to_string_pretty(config).map_err(|e| GridScanError::ConfigError {
            message: format!("Failed to serialize config to JSON: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ThresholdMethod;
    use std::io::Write;

    #[test]
    fn format_is_detected_from_extension() {
        assert!(matches!(
            ConfigFormat::from_extension(Path::new("gridscan.toml")),
            Some(ConfigFormat::Toml)
        ));
        assert!(matches!(
            ConfigFormat::from_extension(Path::new("gridscan.json")),
            Some(ConfigFormat::Json)
        ));
        assert!(ConfigFormat::from_extension(Path::new("gridscan.yaml")).is_none());
        assert!(ConfigFormat::from_extension(Path::new("gridscan")).is_none());
    }

    #[test]
    fn toml_round_trip_preserves_the_configuration() {
        let mut config = GridScanConfig::default();
        config.binarizer.method = ThresholdMethod::Gaussian;
        config.lines.divisor = 40;
        config.ocr.language = Some("deu".to_string());

        let serialized = ConfigLoader::save_to_toml(&config).unwrap();
        let loaded = ConfigLoader::load_from_toml(&serialized).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn json_round_trip_preserves_the_configuration() {
        let mut config = GridScanConfig::default();
        config.locator.row_tolerance = 24;
        config.parallel_threshold = 1;

        let serialized = ConfigLoader::save_to_json(&config).unwrap();
        let loaded = ConfigLoader::load_from_json(&serialized).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let loaded = ConfigLoader::load_from_toml("[lines]\ndivisor = 20\n").unwrap();
        assert_eq!(loaded.lines.divisor, 20);
        assert_eq!(loaded.binarizer, GridScanConfig::default().binarizer);
    }

    #[test]
    fn file_loading_detects_the_format() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "parallel_threshold = 9").unwrap();

        let loaded = GridScanConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded.parallel_threshold, 9);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let result = ConfigLoader::load_from_file(Path::new("gridscan.yaml"));
        assert!(matches!(result, Err(GridScanError::ConfigError { .. })));
    }

    #[test]
    fn malformed_content_is_rejected() {
        assert!(ConfigLoader::load_from_toml("lines = \"not a table\"").is_err());
        assert!(ConfigLoader::load_from_json("{\"binarizer\": 3}").is_err());
    }
}
