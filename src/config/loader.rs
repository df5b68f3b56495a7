//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RoutesConfig;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a route list from a TOML file.
pub fn load_routes(path: &Path) -> Result<RoutesConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_routes(&content)?;

    tracing::info!(
        path = %path.display(),
        route_count = config.routes.len(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Parse a route list from TOML content.
pub fn parse_routes(content: &str) -> Result<RoutesConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}
