// ABOUTME: Engine settings and per-box configuration.
// ABOUTME: Loads and saves engine settings from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-box configuration supplied by the host, read-only to the engine once inserted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoxConfig {
    /// Smallest outer size the box may be dragged or redistributed to
    pub min_size: Option<f64>,
    /// Largest outer size the box may be dragged or redistributed to
    pub max_size: Option<f64>,
    /// Start out pinned: excluded from proportional redistribution
    pub fixed_size: bool,
}

impl BoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min_size = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max_size = Some(max);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed_size = true;
        self
    }

    /// Check that the bounds are usable: finite, non-negative, and ordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, bound) in [("min_size", self.min_size), ("max_size", self.max_size)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "{name} must be a finite non-negative number, got {value}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "min_size {min} exceeds max_size {max}"
                )));
            }
        }
        Ok(())
    }

    /// Drop whichever bounds fail validation, keeping the rest
    pub fn sanitized(&self) -> Self {
        let usable = |v: Option<f64>| v.filter(|v| v.is_finite() && *v >= 0.0);
        let mut config = Self {
            min_size: usable(self.min_size),
            max_size: usable(self.max_size),
            fixed_size: self.fixed_size,
        };
        if let (Some(min), Some(max)) = (config.min_size, config.max_size) {
            if min > max {
                config.max_size = None;
            }
        }
        config
    }

    /// Lower size bound, 0 when unset
    pub fn lower(&self) -> f64 {
        self.min_size.unwrap_or(0.0).max(0.0)
    }

    /// Upper size bound, infinite when unset
    pub fn upper(&self) -> f64 {
        self.max_size.unwrap_or(f64::INFINITY)
    }
}

/// Engine-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Thickness of each generated divider along the axis
    pub divider_size: f64,

    /// Share of a resize taken by the previous divider when the caller gives none
    /// (0.0 = all from the next divider, 1.0 = all from the previous)
    pub default_partition: f64,

    /// Float tolerance used when comparing sizes
    pub tolerance: f64,

    /// Hard cap on redistribution passes (defaults to box count + 1)
    pub max_redistribute_passes: Option<usize>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            divider_size: 4.0,
            default_partition: 0.0,
            tolerance: 1e-6,
            max_redistribute_passes: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl EngineSettings {
    /// Settings with zero-thickness dividers
    pub fn without_dividers() -> Self {
        Self {
            divider_size: 0.0,
            ..Self::default()
        }
    }

    /// Get the default settings file path (~/.config/divbox/settings.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("divbox").join("settings.toml"))
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load settings from default path, or return default settings if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save settings to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.divider_size.is_finite() || self.divider_size < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "divider_size must be a finite non-negative number, got {}",
                self.divider_size
            )));
        }
        if !(0.0..=1.0).contains(&self.default_partition) {
            return Err(ConfigError::Invalid(format!(
                "default_partition must lie in [0, 1], got {}",
                self.default_partition
            )));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EngineSettings::default().validate().is_ok());
        assert!(BoxConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings = EngineSettings::from_toml("divider_size = 6.0").unwrap();
        assert_eq!(settings.divider_size, 6.0);
        assert_eq!(settings.default_partition, 0.0);
        assert_eq!(settings.max_redistribute_passes, None);
    }

    #[test]
    fn rejects_partition_out_of_range() {
        let err = EngineSettings::from_toml("default_partition = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn inverted_bounds_are_invalid() {
        let config = BoxConfig::new().with_min(100.0).with_max(50.0);
        assert!(config.validate().is_err());
        let cleaned = config.sanitized();
        assert_eq!(cleaned.min_size, Some(100.0));
        assert_eq!(cleaned.max_size, None);
    }

    #[test]
    fn negative_bound_is_dropped() {
        let cleaned = BoxConfig::new().with_min(-3.0).sanitized();
        assert_eq!(cleaned.min_size, None);
        assert_eq!(cleaned.lower(), 0.0);
        assert_eq!(cleaned.upper(), f64::INFINITY);
    }

    #[test]
    fn settings_save_load_roundtrip() {
        let path = std::env::temp_dir().join("divbox_settings_test.toml");
        let settings = EngineSettings {
            divider_size: 2.5,
            max_redistribute_passes: Some(8),
            ..EngineSettings::default()
        };
        settings.save(&path).unwrap();
        let loaded = EngineSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn default_path_is_under_config_dir() {
        if let Some(path) = EngineSettings::default_path() {
            assert!(path.ends_with("divbox/settings.toml"));
        }
        assert!(EngineSettings::load_or_default().validate().is_ok());
    }
}
