//! Command-line arguments.
//!
//! Flags override whatever the environment (and `.env`) configured.

use clap::Parser;

use super::config::Config;
use super::error::Result;

/// OpenF1 MCP server.
#[derive(Parser, Debug, Default)]
#[command(name = "openf1-mcp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Serve MCP over HTTP instead of stdio.
    #[arg(long)]
    pub http: bool,

    /// Address to bind in HTTP mode.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on in HTTP mode.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path of the MCP endpoint in HTTP mode.
    #[arg(long)]
    pub mcp_path: Option<String>,

    /// OpenF1 API root URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply the flags on top of `config`.
    pub fn apply(mut self, config: &mut Config) -> Result<()> {
        if let Some(base_url) = self.base_url.take() {
            config.openf1.base_url = base_url;
        }

        if let Some(level) = self.log_level.take() {
            config.logging.level = level;
        }

        self.apply_transport(config)
    }

    #[cfg(feature = "http")]
    fn apply_transport(self, config: &mut Config) -> Result<()> {
        use super::transport::{HttpConfig, TransportConfig};

        let wants_http = self.http
            || self.host.is_some()
            || self.port.is_some()
            || self.mcp_path.is_some();
        if !wants_http {
            return Ok(());
        }

        let mut http = match std::mem::take(&mut config.transport) {
            TransportConfig::Http(http) => http,
            #[allow(unreachable_patterns)]
            _ => HttpConfig::from_env(),
        };

        if let Some(host) = self.host {
            http.host = host;
        }
        if let Some(port) = self.port {
            http.port = port;
        }
        if let Some(path) = self.mcp_path {
            http.mcp_path = path;
        }

        config.transport = TransportConfig::Http(http);
        Ok(())
    }

    #[cfg(not(feature = "http"))]
    fn apply_transport(self, _config: &mut Config) -> Result<()> {
        if self.http || self.host.is_some() || self.port.is_some() || self.mcp_path.is_some() {
            return Err(super::error::Error::config(
                "HTTP transport requested but this build lacks the `http` feature",
            ));
        }
        Ok(())
    }
}
