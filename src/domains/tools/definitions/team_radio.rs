//! Team radio tool.
//!
//! Returns links to the published radio clips, not the audio itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::TeamRadio;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_team_radio`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TeamRadioFilters {
    #[schemars(description = "The unique number assigned to an F1 driver")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by date/time (ISO 8601 format)")]
    pub date: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_team_radio` → `GET /team_radio`.
#[derive(Debug, Clone, Copy)]
pub struct TeamRadioTool;

impl OpenF1Tool for TeamRadioTool {
    type Filters = TeamRadioFilters;
    type Record = TeamRadio;

    const NAME: &'static str = "openf1_team_radio";
    const DESCRIPTION: &'static str = "Fetch team radio messages and recordings";
    const RESOURCE: &'static str = "team_radio";
    const SUBJECT: &'static str = "team radio";
}
