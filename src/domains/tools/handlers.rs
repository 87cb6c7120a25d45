//! Tool handlers module.
//!
//! Every OpenF1 tool is the same operation: validate the filters, fetch one
//! resource, and wrap the records (or the failure) in a tool result. The
//! per-resource differences live in [`OpenF1Tool`] implementations under
//! `definitions/`; [`ResourceTool`] turns any of them into a [`ToolHandler`].

use std::marker::PhantomData;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, instrument, warn};

use super::ToolError;
use super::filters::into_filter_map;
use crate::domains::openf1::{FilterMap, OpenF1Client};

/// Trait implemented by every callable tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Get the descriptor advertised to clients.
    fn to_tool(&self) -> Tool;

    /// Execute the tool with the given arguments.
    ///
    /// `Err` is reserved for protocol-level failures. Rejected arguments
    /// and failed upstream fetches are `Ok` results with `is_error` set.
    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, ToolError>;
}

/// Static description of one OpenF1 resource tool.
pub trait OpenF1Tool: Send + Sync + 'static {
    /// Accepted filters, validated before any request is made.
    type Filters: DeserializeOwned + Serialize + JsonSchema + Send + Sync + 'static;

    /// Shape of one element of the upstream response.
    type Record: DeserializeOwned + Serialize + Send + Sync + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Upstream resource path, relative to the API base URL.
    const RESOURCE: &'static str;

    /// What is being fetched, as used in error messages.
    const SUBJECT: &'static str;
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Build the descriptor for an OpenF1 tool.
///
/// The schema is derived from the filter struct; undeclared keys are always
/// allowed since the upstream is the only judge of what is valid.
pub fn tool_descriptor<T: OpenF1Tool>() -> Tool {
    let mut schema = schema_for_type::<T::Filters>();
    schema.insert("additionalProperties".to_string(), serde_json::Value::Bool(true));

    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: Arc::new(schema),
        annotations: Some(ToolAnnotations {
            title: None,
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint: Some(true),
        }),
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Generic fetch-and-wrap handler for one OpenF1 resource.
pub struct ResourceTool<T> {
    client: OpenF1Client,
    _tool: PhantomData<fn() -> T>,
}

impl<T: OpenF1Tool> ResourceTool<T> {
    /// Create a handler sharing the given client.
    pub fn new(client: OpenF1Client) -> Self {
        Self {
            client,
            _tool: PhantomData,
        }
    }

    /// Check the arguments against the declared filters.
    fn parse_filters(arguments: JsonObject) -> Result<FilterMap, ToolError> {
        let filters: T::Filters = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        into_filter_map(&filters)
    }

    /// Run the query and wrap the outcome.
    ///
    /// Bad arguments and failed fetches both come back as flagged results;
    /// nothing here aborts the call.
    #[instrument(skip_all, fields(tool = T::NAME))]
    async fn run(&self, arguments: JsonObject) -> CallToolResult {
        let filters = match Self::parse_filters(arguments) {
            Ok(filters) => filters,
            Err(e) => return error_result(&format!("Error fetching {}: {}", T::SUBJECT, e)),
        };

        info!("Fetching {} with {} filter(s)", T::RESOURCE, filters.len());

        let records = match self.client.fetch::<T::Record>(T::RESOURCE, &filters).await {
            Ok(records) => records,
            Err(e) => return error_result(&format!("Error fetching {}: {}", T::SUBJECT, e)),
        };

        match serde_json::to_string_pretty(&records) {
            Ok(text) => success_result(text),
            Err(e) => error_result(&format!("Error fetching {}: {}", T::SUBJECT, e)),
        }
    }
}

#[async_trait::async_trait]
impl<T: OpenF1Tool> ToolHandler for ResourceTool<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn to_tool(&self) -> Tool {
        tool_descriptor::<T>()
    }

    async fn execute(&self, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        Ok(self.run(arguments).await)
    }
}
