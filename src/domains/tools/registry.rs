//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, built once at startup
//! - Dispatch of tool calls by name (a map lookup)
//! - Tool metadata for listing

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::ToolError;
use super::definitions::{
    CarDataTool, DriversTool, IntervalsTool, LapsTool, LocationTool, MeetingsTool, PitTool,
    PositionTool, RaceControlTool, SessionsTool, StintsTool, TeamRadioTool, WeatherTool,
};
use super::handlers::{ResourceTool, ToolHandler};
use crate::domains::openf1::OpenF1Client;

/// Tool registry - maps tool names to their handlers.
///
/// Read-only after construction; shared between connections behind an `Arc`.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a registry with every OpenF1 tool, all sharing `client`.
    pub fn new(client: OpenF1Client) -> Self {
        let mut registry = Self::default();

        registry.register(ResourceTool::<CarDataTool>::new(client.clone()));
        registry.register(ResourceTool::<DriversTool>::new(client.clone()));
        registry.register(ResourceTool::<IntervalsTool>::new(client.clone()));
        registry.register(ResourceTool::<LapsTool>::new(client.clone()));
        registry.register(ResourceTool::<LocationTool>::new(client.clone()));
        registry.register(ResourceTool::<MeetingsTool>::new(client.clone()));
        registry.register(ResourceTool::<PitTool>::new(client.clone()));
        registry.register(ResourceTool::<PositionTool>::new(client.clone()));
        registry.register(ResourceTool::<RaceControlTool>::new(client.clone()));
        registry.register(ResourceTool::<SessionsTool>::new(client.clone()));
        registry.register(ResourceTool::<StintsTool>::new(client.clone()));
        registry.register(ResourceTool::<TeamRadioTool>::new(client.clone()));
        registry.register(ResourceTool::<WeatherTool>::new(client));

        registry
    }

    /// Add a handler, replacing any previous handler with the same name.
    pub fn register<H>(&mut self, handler: H)
    where
        H: ToolHandler + 'static,
    {
        self.tools.insert(handler.name(), Arc::new(handler));
    }

    /// Get all tool names, in alphabetical order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.values().map(|handler| handler.to_tool()).collect()
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Only an unknown name produces `Err`; bad arguments and upstream
    /// failures come back as a result with `is_error` set.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(handler) = self.tools.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        info!("Calling tool: {}", name);
        handler.execute(arguments.unwrap_or_default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::OpenF1Config;
    use mockito::{Matcher, Server};
    use rmcp::model::RawContent;
    use serde_json::json;

    const ALL_TOOLS: [(&str, &str); 13] = [
        ("openf1_car_data", "/car_data"),
        ("openf1_drivers", "/drivers"),
        ("openf1_intervals", "/intervals"),
        ("openf1_laps", "/laps"),
        ("openf1_location", "/location"),
        ("openf1_meetings", "/meetings"),
        ("openf1_pit", "/pit"),
        ("openf1_position", "/position"),
        ("openf1_race_control", "/race_control"),
        ("openf1_sessions", "/sessions"),
        ("openf1_stints", "/stints"),
        ("openf1_team_radio", "/team_radio"),
        ("openf1_weather", "/weather"),
    ];

    fn registry_for(server: &Server) -> ToolRegistry {
        let client = OpenF1Client::new(&OpenF1Config {
            base_url: server.url(),
            ..OpenF1Config::default()
        })
        .unwrap();
        ToolRegistry::new(client)
    }

    fn offline_registry() -> ToolRegistry {
        ToolRegistry::new(OpenF1Client::new(&OpenF1Config::default()).unwrap())
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        match value {
            serde_json::Value::Object(map) => Some(map),
            _ => panic!("arguments must be an object"),
        }
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_registry_tool_names() {
        let names = offline_registry().tool_names();
        let expected: Vec<&str> = ALL_TOOLS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_registry_lists_descriptors() {
        let tools = offline_registry().get_all_tools();
        assert_eq!(tools.len(), 13);

        for tool in &tools {
            assert!(tool.description.as_deref().is_some_and(|d| !d.is_empty()));
            assert_eq!(
                tool.input_schema.get("additionalProperties"),
                Some(&json!(true)),
                "{} must accept undeclared filters",
                tool.name
            );
        }
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = offline_registry().call_tool("openf1_bogus", None).await;
        assert!(matches!(result, Err(ToolError::NotFound(ref name)) if name == "openf1_bogus"));
    }

    #[tokio::test]
    async fn test_every_tool_hits_its_resource_without_query() {
        let mut server = Server::new_async().await;
        let mut mocks = Vec::new();
        for (_, path) in ALL_TOOLS {
            let mock = server
                .mock("GET", path)
                .match_query(Matcher::Exact(String::new()))
                .with_status(200)
                .with_body("[]")
                .expect(1)
                .create_async()
                .await;
            mocks.push(mock);
        }

        let registry = registry_for(&server);
        for (name, _) in ALL_TOOLS {
            let result = registry.call_tool(name, args(json!({}))).await.unwrap();
            assert_eq!(result.is_error, Some(false), "{} failed", name);
        }

        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_upstream_error_is_flagged_not_raised() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/position")
            .match_query(Matcher::UrlEncoded("session_key".into(), "9158".into()))
            .with_status(500)
            .create_async()
            .await;

        let result = registry_for(&server)
            .call_tool("openf1_position", args(json!({ "session_key": 9158 })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("500"));
        assert!(text_of(&result).starts_with("Error fetching position:"));
    }

    #[tokio::test]
    async fn test_drivers_round_trip() {
        let body = json!([{
            "broadcast_name": "M VERSTAPPEN",
            "country_code": "NED",
            "driver_number": 1,
            "first_name": "Max",
            "full_name": "Max Verstappen",
            "headshot_url": "https://www.formula1.com/content/dam/fom-website/drivers/M/MAXVER01_Max_Verstappen/maxver01.png",
            "last_name": "Verstappen",
            "meeting_key": 1219,
            "name_acronym": "VER",
            "session_key": 9158,
            "team_colour": "3671C6",
            "team_name": "Red Bull Racing"
        }]);

        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/drivers")
            .match_query(Matcher::UrlEncoded("driver_number".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let result = registry_for(&server)
            .call_tool("openf1_drivers", args(json!({ "driver_number": 1 })))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.is_error, Some(false));

        let parsed: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(parsed, body);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_not_cached() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/team_radio")
            .match_query(Matcher::UrlEncoded("driver_number".into(), "44".into()))
            .with_status(200)
            .with_body(
                json!([{
                    "date": "2023-09-15T09:40:43.005000+00:00",
                    "driver_number": 44,
                    "meeting_key": 1219,
                    "recording_url": "https://livetiming.formula1.com/static/2023/2023-09-17_Singapore_Grand_Prix/2023-09-15_Practice_1/TeamRadio/LEWHAM01_44_20230915_104008.mp3",
                    "session_key": 9158
                }])
                .to_string(),
            )
            .expect(2)
            .create_async()
            .await;

        let registry = registry_for(&server);
        let first = registry
            .call_tool("openf1_team_radio", args(json!({ "driver_number": 44 })))
            .await
            .unwrap();
        let second = registry
            .call_tool("openf1_team_radio", args(json!({ "driver_number": 44 })))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text_of(&first), text_of(&second));
        assert_eq!(first.is_error, second.is_error);
    }

    #[tokio::test]
    async fn test_null_arguments_are_dropped() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/sessions")
            .match_query(Matcher::Exact("year=2024".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        registry_for(&server)
            .call_tool(
                "openf1_sessions",
                args(json!({ "year": 2024, "session_type": null, "circuit_key": null })),
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }
}
