use crate::{
    constants::{
        DEFAULT_FALLBACK_ROW_STEPS, DEFAULT_HORIZONTAL_RATIO, DEFAULT_ROW_STEPS,
        DEFAULT_SEAT_STEPS, DEFAULT_VERTICAL_RATIO,
    },
    error::{Result, SeatError},
    zone::Zone,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    /// Preferred seating zone, overrides the ratios when set
    #[serde(default)]
    pub zone: Option<Zone>,
}

/// Ideal position ratios and search budgets
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub vertical_ratio: f64,   // ideal row = ceil(ratio * vertical extent)
    pub horizontal_ratio: f64, // ideal seat = ceil(horizontal extent / ratio)
    pub row_steps: u32,
    pub seat_steps: u32,
    pub fallback_row_steps: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            vertical_ratio: DEFAULT_VERTICAL_RATIO,
            horizontal_ratio: DEFAULT_HORIZONTAL_RATIO,
            row_steps: DEFAULT_ROW_STEPS,
            seat_steps: DEFAULT_SEAT_STEPS,
            fallback_row_steps: DEFAULT_FALLBACK_ROW_STEPS,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.vertical_ratio > 0.0 && self.vertical_ratio <= 1.0) {
            return Err(SeatError::Config(format!(
                "vertical_ratio must be in (0, 1], got {}",
                self.vertical_ratio
            )));
        }
        if !(self.horizontal_ratio >= 1.0 && self.horizontal_ratio.is_finite()) {
            return Err(SeatError::Config(format!(
                "horizontal_ratio must be at least 1, got {}",
                self.horizontal_ratio
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Loads and validates a TOML configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeatError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.vertical_ratio, 0.75);
        assert_eq!(config.search.horizontal_ratio, 2.0);
        assert_eq!(config.search.row_steps, 6);
        assert_eq!(config.search.seat_steps, 4);
        assert_eq!(config.search.fallback_row_steps, 4);
        assert!(config.zone.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_search_section_keeps_defaults() {
        let config = Config::from_toml("[search]\nseat_steps = 8\n").unwrap();
        assert_eq!(config.search.seat_steps, 8);
        assert_eq!(config.search.row_steps, 6);
        assert_eq!(config.search.vertical_ratio, 0.75);
    }

    #[test]
    fn test_zone_from_toml() {
        let config = Config::from_toml("zone = \"back-center\"\n").unwrap();
        assert_eq!(config.zone, Some(Zone::BackCenter));
    }

    #[test]
    fn test_invalid_vertical_ratio() {
        let result = Config::from_toml("[search]\nvertical_ratio = 1.5\n");
        assert!(matches!(result, Err(SeatError::Config(_))));
    }

    #[test]
    fn test_invalid_horizontal_ratio() {
        let result = Config::from_toml("[search]\nhorizontal_ratio = 0.5\n");
        assert!(matches!(result, Err(SeatError::Config(_))));
    }

    #[test]
    fn test_bad_toml() {
        let result = Config::from_toml("[search\n");
        assert!(matches!(result, Err(SeatError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nrow_steps = 10\nhorizontal_ratio = 3.0").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.search.row_steps, 10);
        assert_eq!(config.search.horizontal_ratio, 3.0);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_file("no/such/config.toml");
        assert!(matches!(result, Err(SeatError::Config(_))));
    }
}
