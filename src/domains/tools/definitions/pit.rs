//! Pit stop tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Pit;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_pit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PitFilters {
    #[schemars(description = "The unique number assigned to an F1 driver")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by specific lap number")]
    pub lap_number: Option<NumericFilter>,

    #[schemars(description = "Filter by date/time (ISO 8601 format)")]
    pub date: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_pit` → `GET /pit`.
#[derive(Debug, Clone, Copy)]
pub struct PitTool;

impl OpenF1Tool for PitTool {
    type Filters = PitFilters;
    type Record = Pit;

    const NAME: &'static str = "openf1_pit";
    const DESCRIPTION: &'static str = "Fetch pit stop information for drivers";
    const RESOURCE: &'static str = "pit";
    const SUBJECT: &'static str = "pit data";
}
