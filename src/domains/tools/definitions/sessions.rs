//! Sessions tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Session;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_sessions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SessionsFilters {
    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by session type (e.g., \"Practice\", \"Qualifying\", \"Race\")")]
    pub session_type: Option<String>,

    #[schemars(description = "Filter by year (e.g., 2023, 2024)")]
    pub year: Option<NumericFilter>,

    #[schemars(description = "Filter by session start date (ISO 8601 format)")]
    pub date_start: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_sessions` → `GET /sessions`.
#[derive(Debug, Clone, Copy)]
pub struct SessionsTool;

impl OpenF1Tool for SessionsTool {
    type Filters = SessionsFilters;
    type Record = Session;

    const NAME: &'static str = "openf1_sessions";
    const DESCRIPTION: &'static str = "Fetch information about F1 sessions (practice, qualifying, race)";
    const RESOURCE: &'static str = "sessions";
    const SUBJECT: &'static str = "sessions";
}
