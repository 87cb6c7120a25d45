//! Tools domain module.
//!
//! This module exposes the OpenF1 resources as MCP tools. Tools are
//! read-only queries: each call performs one upstream GET.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per resource: filters and static descriptor
//! - `handlers.rs` - `ToolHandler` seam and the generic `ResourceTool`
//! - `filters.rs` - Shared filter value types and boundary validation
//! - `registry.rs` - Name to handler map used for listing and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add the record shape to `domains/openf1/records.rs`
//! 2. Create a file in `definitions/` with the filters and an `OpenF1Tool` impl
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `ToolRegistry::new`

pub mod definitions;
mod error;
pub mod filters;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
