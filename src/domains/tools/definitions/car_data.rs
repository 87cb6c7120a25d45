//! Car telemetry tool.
//!
//! Speed, throttle, brake, DRS, RPM and gear samples at roughly 3.7 Hz.
//! Unfiltered queries return very large payloads, so callers normally pin
//! at least a session and a driver.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::CarData;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_car_data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CarDataFilters {
    #[schemars(description = "The unique number assigned to an F1 driver (e.g., 1 for Verstappen, 44 for Hamilton)")]
    pub driver_number: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by speed (km/h). Use comparison operators like >=315")]
    pub speed: Option<NumericFilter>,

    #[schemars(description = "Filter by brake status (0 = not pressed, 100 = pressed)")]
    pub brake: Option<NumericFilter>,

    #[schemars(description = "Filter by throttle percentage (0-100)")]
    pub throttle: Option<NumericFilter>,

    #[schemars(description = "Filter by DRS status (0=off, 8=eligible, 10/12/14=on)")]
    pub drs: Option<NumericFilter>,

    #[schemars(description = "Filter by gear number (0=neutral, 1-8=gears)")]
    pub n_gear: Option<NumericFilter>,

    #[schemars(description = "Filter by engine RPM")]
    pub rpm: Option<NumericFilter>,

    #[schemars(description = "Filter by date/time (ISO 8601 format or comparison like >2023-09-15T13:00:00)")]
    pub date: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_car_data` → `GET /car_data`.
#[derive(Debug, Clone, Copy)]
pub struct CarDataTool;

impl OpenF1Tool for CarDataTool {
    type Filters = CarDataFilters;
    type Record = CarData;

    const NAME: &'static str = "openf1_car_data";
    const DESCRIPTION: &'static str = "Fetch Formula 1 car telemetry data including speed, throttle, brake, DRS, RPM, and gear information at a sample rate of about 3.7 Hz";
    const RESOURCE: &'static str = "car_data";
    const SUBJECT: &'static str = "car data";
}
