//! View routing core for a client-side application.
//!
//! Maps literal URL paths to renderable view handles: the home view at `/`,
//! the dungeon game view at `/game`. The navigation/rendering layer owns the
//! views and the history handling; this crate only answers "which view does
//! this path select?".
//!
//! # Architecture Overview
//!
//! ```text
//!     route list (literal entries or TOML)
//!         │
//!         ▼
//!     ┌─────────┐      ┌──────────────┐      ┌──────────────┐
//!     │ config  │─────▶│ ViewRegistry │─────▶│  RouteTable  │
//!     │ loader  │      │ (name→view)  │ bind │  (immutable) │
//!     └─────────┘      └──────────────┘      └──────┬───────┘
//!                                                   │
//!     navigation event ───── resolve(path) ─────────┘
//!                                 │
//!                                 ▼
//!                      matched view handle, or None
//!                      (the caller renders a fallback)
//! ```
//!
//! Construction happens once at startup; resolution is a pure read over
//! immutable data and is safe to call from any number of callers without
//! coordination.

// Core subsystems
pub mod config;
pub mod routing;

pub use config::schema::{RouteSpec, RoutesConfig};
pub use routing::registry::ViewRegistry;
pub use routing::table::{ConfigurationError, RouteEntry, RouteTable};
