//! Tool definitions module.
//!
//! One file per OpenF1 resource. Each file declares the accepted filters
//! and the static descriptor (name, description, upstream path) of its tool.

pub mod car_data;
pub mod drivers;
pub mod intervals;
pub mod laps;
pub mod location;
pub mod meetings;
pub mod pit;
pub mod position;
pub mod race_control;
pub mod sessions;
pub mod stints;
pub mod team_radio;
pub mod weather;

pub use car_data::{CarDataFilters, CarDataTool};
pub use drivers::{DriversFilters, DriversTool};
pub use intervals::{IntervalsFilters, IntervalsTool};
pub use laps::{LapsFilters, LapsTool};
pub use location::{LocationFilters, LocationTool};
pub use meetings::{MeetingsFilters, MeetingsTool};
pub use pit::{PitFilters, PitTool};
pub use position::{PositionFilters, PositionTool};
pub use race_control::{RaceControlFilters, RaceControlTool};
pub use sessions::{SessionsFilters, SessionsTool};
pub use stints::{StintsFilters, StintsTool};
pub use team_radio::{TeamRadioFilters, TeamRadioTool};
pub use weather::{WeatherFilters, WeatherTool};
