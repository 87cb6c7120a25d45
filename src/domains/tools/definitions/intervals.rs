//! Intervals tool.
//!
//! Gaps to the car ahead and to the leader. Only published during races.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Interval;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_intervals`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IntervalsFilters {
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

/// `openf1_intervals` → `GET /intervals`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalsTool;

impl OpenF1Tool for IntervalsTool {
    type Filters = IntervalsFilters;
    type Record = Interval;

    const NAME: &'static str = "openf1_intervals";
    const DESCRIPTION: &'static str = "Fetch time intervals between drivers during a session";
    const RESOURCE: &'static str = "intervals";
    const SUBJECT: &'static str = "intervals";
}
