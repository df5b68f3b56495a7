//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (current path)
//!     → table.rs (exact-match lookup)
//!     → Return: matched view handle or None
//!
//! Table Construction (at startup):
//!     RouteEntry[] or RoutesConfig + ViewRegistry
//!     → Reject duplicate paths
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - Exact path comparison only (byte-wise, case-sensitive)
//! - First match wins (entry order preserved)
//! - Explicit None on a miss rather than a silent default view

pub mod registry;
pub mod table;
