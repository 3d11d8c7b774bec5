//! Configuration file loading

use super::schema::AlignmentConfig;
use crate::error::{GeoError, Result};
use std::path::Path;

impl AlignmentConfig {
    /// Load configuration from a file path or use defaults.
    ///
    /// Without an explicit path the standard locations are searched; if none
    /// exists the defaults (everything WGS-84) apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        match config_path {
            Some(p) => {
                let config = load_config_file(&p)?;
                tracing::debug!(
                    path = %p.display(),
                    device = %config.datums.device,
                    poi = %config.datums.poi,
                    tiles = %config.datums.tiles,
                    "Loaded alignment config"
                );
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GeoError::Config(format!("Failed to parse alignment config: {}", e)))
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<std::path::PathBuf> {
    let candidates = [
        ".jianghu-geo.toml",
        "jianghu-geo.toml",
        ".config/jianghu-geo.toml",
    ];

    candidates
        .iter()
        .map(Path::new)
        .find(|candidate| candidate.exists())
        .map(Path::to_path_buf)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<AlignmentConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GeoError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        GeoError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}
