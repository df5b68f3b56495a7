//! Configuration schema definitions.
//!
//! This module defines the declarative route list. All types derive Serde
//! traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration: the ordered route list.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route definitions mapping paths to view names.
    pub routes: Vec<RouteSpec>,
}

impl Default for RoutesConfig {
    /// The startup table: home at `/`, the dungeon game at `/game`.
    fn default() -> Self {
        Self {
            routes: vec![
                RouteSpec {
                    path: "/".to_string(),
                    view: "home".to_string(),
                },
                RouteSpec {
                    path: "/game".to_string(),
                    view: "dungeon".to_string(),
                },
            ],
        }
    }
}

/// A single declarative route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteSpec {
    /// Literal URL path to match (e.g. "/", "/game").
    pub path: String,

    /// Name of the registered view this path renders.
    pub view: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_lists_home_and_game() {
        let config = RoutesConfig::default();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].path, "/");
        assert_eq!(config.routes[0].view, "home");
        assert_eq!(config.routes[1].path, "/game");
        assert_eq!(config.routes[1].view, "dungeon");
    }

    #[test]
    fn test_empty_document_deserializes_to_default() {
        let config: RoutesConfig = toml::from_str("").unwrap();

        assert_eq!(config.routes.len(), 2);
    }
}
