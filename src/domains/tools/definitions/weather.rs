//! Weather tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::openf1::records::Weather;
use crate::domains::tools::filters::{ExtraFilters, NumericFilter};
use crate::domains::tools::handlers::OpenF1Tool;

/// Filters accepted by `openf1_weather`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WeatherFilters {
    #[schemars(description = "The unique identifier for the session. Use \"latest\" for current session")]
    pub session_key: Option<NumericFilter>,

    #[schemars(description = "The unique identifier for the meeting/race weekend. Use \"latest\" for current meeting")]
    pub meeting_key: Option<NumericFilter>,

    #[schemars(description = "Filter by air temperature (Celsius)")]
    pub air_temperature: Option<NumericFilter>,

    #[schemars(description = "Filter by track temperature (Celsius)")]
    pub track_temperature: Option<NumericFilter>,

    #[schemars(description = "Filter by humidity percentage")]
    pub humidity: Option<NumericFilter>,

    #[schemars(description = "Filter by rainfall amount")]
    pub rainfall: Option<NumericFilter>,

    #[schemars(description = "Filter by wind speed")]
    pub wind_speed: Option<NumericFilter>,

    #[schemars(description = "Filter by date/time (ISO 8601 format)")]
    pub date: Option<String>,

    /// Any other upstream filter, forwarded verbatim.
    #[serde(flatten)]
    pub extra: ExtraFilters,
}

/// `openf1_weather` → `GET /weather`.
#[derive(Debug, Clone, Copy)]
pub struct WeatherTool;

impl OpenF1Tool for WeatherTool {
    type Filters = WeatherFilters;
    type Record = Weather;

    const NAME: &'static str = "openf1_weather";
    const DESCRIPTION: &'static str = "Fetch weather data during F1 sessions";
    const RESOURCE: &'static str = "weather";
    const SUBJECT: &'static str = "weather";
}
