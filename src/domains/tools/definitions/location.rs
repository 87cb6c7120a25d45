//! Location tool.
//!
//! Car coordinates on the circuit, sampled at roughly 3.7 Hz.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Location;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_location`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LocationFilters {
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

/// `openf1_location` → `GET /location`.
#[derive(Debug, Clone, Copy)]
pub struct LocationTool;

impl OpenF1Tool for LocationTool {
    type Filters = LocationFilters;
    type Record = Location;

    const NAME: &'static str = "openf1_location";
    const DESCRIPTION: &'static str = "Fetch driver position data (x, y, z coordinates) on the track";
    const RESOURCE: &'static str = "location";
    const SUBJECT: &'static str = "location";
}
