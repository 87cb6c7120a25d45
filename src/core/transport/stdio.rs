//! STDIO transport implementation.
//!
//! Line-delimited JSON-RPC over stdin/stdout for a single client, usually
//! the process that spawned us. Logs go to stderr so they never interleave
//! with protocol frames.

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve one client until it closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();
        info!(
            "{} v{} serving {} OpenF1 tools on stdio",
            name,
            server.version(),
            server.registry().tool_names().len()
        );

        let session = server
            .serve(stdio())
            .await
            .map_err(|e| TransportError::init(format!("stdio handshake failed: {e}")))?;

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("{} stdio session ended: {:?}", name, reason);
        Ok(())
    }
}
