//! Tyre stints tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Stint;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_stints`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StintsFilters {
    #[schemars(description = "The unique number assigned to an F1 driver")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by tire compound (e.g., \"soft\", \"medium\", \"hard\", \"intermediate\", \"wet\")")]
    pub compound: Option<String>,

    #[schemars(description = "Filter by specific stint number")]
    pub stint_number: Option<NumericFilter>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_stints` → `GET /stints`.
#[derive(Debug, Clone, Copy)]
pub struct StintsTool;

impl OpenF1Tool for StintsTool {
    type Filters = StintsFilters;
    type Record = Stint;

    const NAME: &'static str = "openf1_stints";
    const DESCRIPTION: &'static str = "Fetch tire stint information for drivers";
    const RESOURCE: &'static str = "stints";
    const SUBJECT: &'static str = "stints";
}
