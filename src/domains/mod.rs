//! Domains module containing business logic organized by bounded contexts.
//!
//! - **openf1**: the upstream REST API (records, query encoding, fetching)
//! - **tools**: the MCP tools built on top of it

pub mod openf1;
pub mod tools;
