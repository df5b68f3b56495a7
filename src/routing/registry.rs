//! View registration and config binding.
//!
//! # Responsibilities
//! - Hold the rendering layer's name → view-handle map
//! - Bind a declarative route list to registered views
//! - Check referential integrity (routes reference existing views)
//!
//! # Design Decisions
//! - The registry stores opaque handles and never renders
//! - Binding clones handles into the table (handles are cheap identifiers,
//!   `Arc`s, or fn pointers)
//! - Unknown view names fail at bind time, not at navigation time

use std::collections::HashMap;

use crate::config::schema::RoutesConfig;
use crate::routing::table::{ConfigurationError, RouteEntry, RouteTable};

/// Name → view-handle map supplied by the rendering layer.
#[derive(Debug, Clone)]
pub struct ViewRegistry<V> {
    views: HashMap<String, V>,
}

impl<V> ViewRegistry<V> {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Register a view handle under a unique name.
    pub fn register(&mut self, name: impl Into<String>, view: V) -> Result<(), ConfigurationError> {
        let name = name.into();
        if self.views.contains_key(&name) {
            return Err(ConfigurationError::DuplicateView { name });
        }

        self.views.insert(name, view);
        Ok(())
    }

    /// Look up a registered view handle by name.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.views.get(name)
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> ViewRegistry<V> {
    /// Bind a route configuration against the registered views.
    ///
    /// Every route's view name must resolve to a registered handle. The
    /// resulting table keeps the configured order and inherits the table's
    /// duplicate-path check.
    pub fn bind(&self, config: &RoutesConfig) -> Result<RouteTable<V>, ConfigurationError> {
        let mut entries = Vec::with_capacity(config.routes.len());
        for spec in &config.routes {
            let view = self
                .views
                .get(&spec.view)
                .ok_or_else(|| ConfigurationError::UnknownView {
                    path: spec.path.clone(),
                    view: spec.view.clone(),
                })?;

            entries.push(RouteEntry::new(spec.path.clone(), view.clone()));
        }

        RouteTable::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteSpec;

    fn two_view_registry() -> ViewRegistry<&'static str> {
        let mut registry = ViewRegistry::new();
        registry.register("home", "HomeView").unwrap();
        registry.register("dungeon", "DungeonView").unwrap();
        registry
    }

    #[test]
    fn test_bind_default_config() {
        let registry = two_view_registry();
        let table = registry.bind(&RoutesConfig::default()).unwrap();

        assert_eq!(table.resolve("/"), Some(&"HomeView"));
        assert_eq!(table.resolve("/game"), Some(&"DungeonView"));
    }

    #[test]
    fn test_bind_rejects_unknown_view() {
        let registry = two_view_registry();
        let config = RoutesConfig {
            routes: vec![RouteSpec {
                path: "/shop".to_string(),
                view: "shop".to_string(),
            }],
        };

        let result = registry.bind(&config);
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownView { ref path, ref view })
                if path == "/shop" && view == "shop"
        ));
    }

    #[test]
    fn test_bind_rejects_duplicate_path() {
        let registry = two_view_registry();
        let config = RoutesConfig {
            routes: vec![
                RouteSpec {
                    path: "/".to_string(),
                    view: "home".to_string(),
                },
                RouteSpec {
                    path: "/".to_string(),
                    view: "dungeon".to_string(),
                },
            ],
        };

        assert!(matches!(
            registry.bind(&config),
            Err(ConfigurationError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        let mut registry = two_view_registry();

        let result = registry.register("home", "OtherView");
        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateView { ref name }) if name == "home"
        ));
        // First registration is untouched
        assert_eq!(registry.get("home"), Some(&"HomeView"));
    }
}
