//! Race control tool.
//!
//! Flags, safety car deployments, track limit warnings and incident notes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::RaceControl;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_race_control`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RaceControlFilters {
    #[schemars(description = "The unique number assigned to an F1 driver")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by message category")]
    pub category: Option<String>,

    #[schemars(description = "Filter by flag type")]
    pub flag: Option<String>,

    #[schemars(description = "Filter by message scope")]
    pub scope: Option<String>,

    #[schemars(description = "Filter by date/time (ISO 8601 format)")]
    pub date: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_race_control` → `GET /race_control`.
#[derive(Debug, Clone, Copy)]
pub struct RaceControlTool;

impl OpenF1Tool for RaceControlTool {
    type Filters = RaceControlFilters;
    type Record = RaceControl;

    const NAME: &'static str = "openf1_race_control";
    const DESCRIPTION: &'static str = "Fetch race control messages and flags";
    const RESOURCE: &'static str = "race_control";
    const SUBJECT: &'static str = "race control";
}
