// src/config.rs
use std::path::Path;
use log::{info, warn};
use serde::Deserialize;
use crate::survey::{GridSize, HeatmapStyle, MapperError, SyntheticConfig};
/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "SIGNAL_MAPPER_CONFIG";
/// Runtime settings. Every field is optional in the JSON file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub grid_size: GridSize,
    /// Cells at or above this count as covered.
    pub coverage_threshold_dbm: f32,
    pub synthetic: SyntheticConfig,
    pub heatmap: HeatmapStyle,
}
impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            coverage_threshold_dbm: -70.0,
            synthetic: SyntheticConfig::default(),
            heatmap: HeatmapStyle::default(),
        }
    }
}
impl MapperConfig {
    pub fn from_json(json: &str) -> Result<Self, MapperError> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapperError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }
    /// Load from `$SIGNAL_MAPPER_CONFIG`, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load(path) {
            Ok(config) => {
                info!("config loaded from {}", path.display());
                config
            }
            Err(err) => {
                warn!("failed to load {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
