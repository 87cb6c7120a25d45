//! Meetings tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Meeting;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_meetings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MeetingsFilters {
    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by year (e.g., 2023, 2024)")]
    pub year: Option<NumericFilter>,

    #[schemars(description = "Filter by country code (e.g., \"GBR\", \"ITA\", \"MON\")")]
    pub country_code: Option<String>,

    #[schemars(description = "Filter by circuit short name (e.g., \"silverstone\", \"monza\", \"monaco\")")]
    pub circuit_short_name: Option<String>,

    #[schemars(description = "Filter by meeting start date (ISO 8601 format)")]
    pub date_start: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_meetings` → `GET /meetings`.
#[derive(Debug, Clone, Copy)]
pub struct MeetingsTool;

impl OpenF1Tool for MeetingsTool {
    type Filters = MeetingsFilters;
    type Record = Meeting;

    const NAME: &'static str = "openf1_meetings";
    const DESCRIPTION: &'static str = "Fetch information about F1 race meetings/events";
    const RESOURCE: &'static str = "meetings";
    const SUBJECT: &'static str = "meetings";
}
