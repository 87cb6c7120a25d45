//! OpenF1 upstream domain.
//!
//! Everything needed to talk to the OpenF1 REST API:
//! - `records`: decoded shapes for the 13 resource kinds
//! - `query`: filter map to query string encoding
//! - `client`: the HTTP fetcher
//! - `error`: fetch failures

mod client;
mod error;
pub mod query;
pub mod records;

pub use client::OpenF1Client;
pub use error::FetchError;
pub use query::FilterMap;

/// Public OpenF1 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";
