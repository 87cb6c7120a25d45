//! HTTP transport implementation.
//!
//! Serves the MCP streamable HTTP protocol at the configured path, next to
//! two plain JSON endpoints: `GET /health` for liveness checks and `GET /`
//! for a short service description. Each client gets its own MCP session;
//! all sessions share one tool registry.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// Name reported by the health endpoint.
const SERVICE_NAME: &str = "OpenF1 MCP Server";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// State shared by the plain JSON endpoints.
#[derive(Debug, Clone)]
struct AppState {
    name: String,
    version: String,
    mcp_path: String,
}

impl HttpTransport {
    /// Create a new HTTP transport, validating the MCP endpoint path.
    pub fn new(config: HttpConfig) -> TransportResult<Self> {
        validate_mcp_path(&config.mcp_path)?;
        Ok(Self { config })
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let state = AppState {
            name: server.name().to_string(),
            version: server.version().to_string(),
            mcp_path: self.config.mcp_path.clone(),
        };

        let mcp_service = StreamableHttpService::new(
            move || Ok(server.clone()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig::default(),
        );

        let mut app = Router::new()
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .nest_service(&self.config.mcp_path, mcp_service)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on http://{} (CORS {})", addr, cors_status);
        info!("  → MCP:    {}", self.config.mcp_path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        info!("HTTP transport stopped");
        Ok(())
    }
}

fn validate_mcp_path(path: &str) -> TransportResult<()> {
    if !path.starts_with('/') {
        return Err(TransportError::config(format!(
            "MCP path must start with '/': {path}"
        )));
    }
    if path == "/" || path == "/health" {
        return Err(TransportError::config(format!(
            "MCP path {path} collides with a built-in route"
        )));
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - names the service and its endpoints.
async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": state.name,
        "version": state.version,
        "endpoints": {
            "health": "/health",
            "mcp": state.mcp_path,
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
    }))
}
