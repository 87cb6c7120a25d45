//! Drivers tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Driver;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_drivers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DriversFilters {
    #[schemars(description = "The unique number assigned to an F1 driver (e.g., 1 for Verstappen, 44 for Hamilton)")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by team name (e.g., \"Red Bull Racing\", \"Mercedes\", \"Ferrari\")")]
    pub team_name: Option<String>,

    #[schemars(description = "Filter by driver acronym (e.g., \"VER\", \"HAM\", \"LEC\")")]
    pub name_acronym: Option<String>,

    #[schemars(description = "Filter by driver country code (e.g., \"NED\", \"GBR\", \"MON\")")]
    pub country_code: Option<String>,

    #[schemars(description = "Filter by driver first name")]
    pub first_name: Option<String>,

    #[schemars(description = "Filter by driver last name")]
    pub last_name: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_drivers` → `GET /drivers`.
#[derive(Debug, Clone, Copy)]
pub struct DriversTool;

impl OpenF1Tool for DriversTool {
    type Filters = DriversFilters;
    type Record = Driver;

    const NAME: &'static str = "openf1_drivers";
    const DESCRIPTION: &'static str = "Fetch information about Formula 1 drivers for each session, including names, teams, and driver numbers";
    const RESOURCE: &'static str = "drivers";
    const SUBJECT: &'static str = "drivers";
}
