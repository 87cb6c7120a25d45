//! Position tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Position;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_position`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PositionFilters {
    #[schemars(description = "The unique number assigned to an F1 driver")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by specific position")]
    pub position: Option<NumericFilter>,

    #[schemars(description = "Filter by date/time (ISO 8601 format)")]
    pub date: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_position` → `GET /position`.
#[derive(Debug, Clone, Copy)]
pub struct PositionTool;

impl OpenF1Tool for PositionTool {
    type Filters = PositionFilters;
    type Record = Position;

    const NAME: &'static str = "openf1_position";
    const DESCRIPTION: &'static str = "Fetch driver position/ranking data during sessions";
    const RESOURCE: &'static str = "position";
    const SUBJECT: &'static str = "position";
}
