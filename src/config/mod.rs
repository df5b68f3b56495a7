//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route list (TOML)
//!     → loader.rs (parse & deserialize)
//!     → RoutesConfig (syntactically valid)
//!     → ViewRegistry::bind (semantic checks: duplicate paths, unknown views)
//!     → RouteTable (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All container fields have defaults to allow minimal configs
//! - Syntactic failures (serde) stay separate from semantic checks

pub mod loader;
pub mod schema;

pub use schema::RouteSpec;
pub use schema::RoutesConfig;
