//! OpenF1 MCP Server Library
//!
//! This crate exposes the public [OpenF1](https://openf1.org) Formula 1 API
//! to Model Context Protocol clients. Every OpenF1 resource becomes one
//! read-only tool (`openf1_laps`, `openf1_pit`, `openf1_weather`...).
//!
//! # Architecture
//!
//! - **core**: configuration, CLI, error handling, the MCP handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **openf1**: record types, query encoding and the HTTP client
//!   - **tools**: the MCP tools built on top of the client
//!
//! # Example
//!
//! ```rust,no_run
//! use openf1_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
