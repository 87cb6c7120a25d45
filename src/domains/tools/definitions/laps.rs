//! Laps tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Lap;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_laps`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LapsFilters {
    #[schemars(description = "The unique number assigned to an F1 driver")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by specific lap number")]
    pub lap_number: Option<NumericFilter>,

    #[schemars(description = "Filter by pit out lap status")]
    pub is_pit_out_lap: Option<bool>,

    #[schemars(description = "Filter by lap start date/time (ISO 8601 format)")]
    pub date_start: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_laps` → `GET /laps`.
#[derive(Debug, Clone, Copy)]
pub struct LapsTool;

impl OpenF1Tool for LapsTool {
    type Filters = LapsFilters;
    type Record = Lap;

    const NAME: &'static str = "openf1_laps";
    const DESCRIPTION: &'static str = "Fetch lap times and sector information for drivers";
    const RESOURCE: &'static str = "laps";
    const SUBJECT: &'static str = "laps";
}
