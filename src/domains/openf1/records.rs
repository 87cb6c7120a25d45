//! Record shapes returned by the OpenF1 API.
//!
//! Every endpoint answers with a JSON array of flat objects. The structs
//! below decode one element each. Only the key that identifies a record is
//! required; every other field is a [`Field`], which remembers whether the
//! upstream left it out, sent `null`, or sent a value, so re-serialising a
//! record reproduces the upstream object. Physical measurements are kept as
//! [`Number`] (an integer stays an integer), timestamps stay as the upstream
//! ISO-8601 strings, and fields the upstream adds later are kept in `extra`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// Unknown upstream fields, preserved verbatim.
pub type ExtraFields = Map<String, Value>;

/// A record field that may be missing, `null`, or set.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Field<T> {
    /// Not present in the upstream object.
    #[default]
    Absent,
    /// Present as `null`.
    Null,
    /// Present with a value.
    Value(T),
}

impl<T> Field<T> {
    /// The value, if one was sent.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}

/// Car telemetry sample (~3.7 Hz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarData {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub brake: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub drs: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub n_gear: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub rpm: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub speed: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub throttle: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Driver entry for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub broadcast_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country_code: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub full_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub headshot_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name_acronym: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub team_colour: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub team_name: Field<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Gap as reported by the timing feed.
///
/// Lapped cars are reported as text (`"+1 LAP"`) instead of seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gap {
    Seconds(Number),
    Laps(String),
}

/// Interval to the car ahead and to the leader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub gap_to_leader: Field<Gap>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub interval: Field<Gap>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Lap timing with sector and mini-sector data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date_start: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub duration_sector_1: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub duration_sector_2: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub duration_sector_3: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub i1_speed: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub i2_speed: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_pit_out_lap: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub lap_duration: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub lap_number: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub segments_sector_1: Field<Vec<Option<u32>>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub segments_sector_2: Field<Vec<Option<u32>>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub segments_sector_3: Field<Vec<Option<u32>>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub st_speed: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Car position on track in circuit coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub x: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub y: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub z: Field<i32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Grand Prix or testing weekend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub circuit_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub circuit_short_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date_start: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub gmt_offset: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub location: Field<String>,
    pub meeting_key: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_official_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub year: Field<i32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Pit lane visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pit {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub lap_number: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub pit_duration: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Running classification change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub position: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Race control message: flags, safety car, incidents.
///
/// Not tied to a driver, so the timestamp is what identifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceControl {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub category: Field<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub driver_number: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub flag: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub lap_number: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub message: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub scope: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub sector: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Practice, qualifying, sprint or race session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub circuit_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub circuit_short_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date_end: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date_start: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub gmt_offset: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub location: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    pub session_key: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub year: Field<i32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Continuous run on one set of tyres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stint {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub compound: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub lap_end: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub lap_start: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub stint_number: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tyre_age_at_start: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Team radio clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRadio {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub date: Field<String>,
    pub driver_number: u32,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub recording_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Track-side weather sample (about once a minute), identified by its timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub air_temperature: Field<Number>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub humidity: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub meeting_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub pressure: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub rainfall: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub session_key: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub track_temperature: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub wind_direction: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub wind_speed: Field<Number>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_driver_round_trip() {
        let body = json!([{
            "broadcast_name": "M VERSTAPPEN",
            "country_code": "NED",
            "driver_number": 1,
            "first_name": "Max",
            "full_name": "Max VERSTAPPEN",
            "headshot_url": "https://www.formula1.com/content/dam/fom-website/drivers/M/MAXVER01_Max_Verstappen/maxver01.png",
            "last_name": "Verstappen",
            "meeting_key": 1219,
            "name_acronym": "VER",
            "session_key": 9158,
            "team_colour": "3671C6",
            "team_name": "Red Bull Racing"
        }]);

        let drivers: Vec<Driver> = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&drivers).unwrap(), body);
    }

    #[test]
    fn test_partial_driver_round_trip() {
        let body = json!([{ "driver_number": 1, "full_name": "Max Verstappen" }]);

        let drivers: Vec<Driver> = serde_json::from_value(body.clone()).unwrap();
        assert!(drivers[0].broadcast_name.is_absent());
        assert_eq!(
            drivers[0].full_name.value().map(String::as_str),
            Some("Max Verstappen")
        );
        assert_eq!(serde_json::to_value(&drivers).unwrap(), body);
    }

    #[test]
    fn test_null_and_absent_stay_distinct() {
        let body = json!({ "driver_number": 44, "headshot_url": null });

        let driver: Driver = serde_json::from_value(body.clone()).unwrap();
        assert!(driver.headshot_url.is_null());
        assert!(driver.team_name.is_absent());
        assert_eq!(serde_json::to_value(&driver).unwrap(), body);
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let body = json!({
            "date": "2023-09-16T13:03:35.292000+00:00",
            "driver_number": 81,
            "meeting_key": 1219,
            "position": 3,
            "session_key": 9144,
            "source": "timing"
        });

        let position: Position = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(position.extra.get("source"), Some(&json!("timing")));
        assert_eq!(serde_json::to_value(&position).unwrap(), body);
    }

    #[test]
    fn test_interval_gap_variants() {
        let body = json!([
            {
                "date": "2023-09-17T13:31:02.395000+00:00",
                "driver_number": 1,
                "gap_to_leader": null,
                "interval": null,
                "meeting_key": 1219,
                "session_key": 9165
            },
            {
                "date": "2023-09-17T13:31:02.395000+00:00",
                "driver_number": 2,
                "gap_to_leader": "+1 LAP",
                "interval": 0.5,
                "meeting_key": 1219,
                "session_key": 9165
            }
        ]);

        let intervals: Vec<Interval> = serde_json::from_value(body.clone()).unwrap();
        assert!(intervals[0].gap_to_leader.is_null());
        assert_eq!(
            intervals[1].gap_to_leader,
            Field::Value(Gap::Laps("+1 LAP".into()))
        );
        assert_eq!(
            intervals[1].interval.value(),
            Some(&Gap::Seconds(Number::from_f64(0.5).unwrap()))
        );
        assert_eq!(serde_json::to_value(&intervals).unwrap(), body);
    }

    #[test]
    fn test_lap_with_null_segments() {
        let body = json!({
            "date_start": null,
            "driver_number": 63,
            "duration_sector_1": null,
            "duration_sector_2": 38.012,
            "duration_sector_3": 26.265,
            "i1_speed": 307,
            "i2_speed": null,
            "is_pit_out_lap": true,
            "lap_duration": null,
            "lap_number": 1,
            "meeting_key": 1219,
            "segments_sector_1": [2049, null, 2051],
            "segments_sector_2": null,
            "segments_sector_3": [2048, 2048],
            "session_key": 9161,
            "st_speed": 298
        });

        let lap: Lap = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(lap.is_pit_out_lap, Field::Value(true));
        assert_eq!(
            lap.segments_sector_1.value(),
            Some(&vec![Some(2049), None, Some(2051)])
        );
        assert!(lap.segments_sector_2.is_null());
        assert_eq!(serde_json::to_value(&lap).unwrap(), body);
    }

    #[test]
    fn test_missing_identifier_fails() {
        let body = json!({
            "date": "2023-09-16T13:03:35.292000+00:00",
            "meeting_key": 1219,
            "session_key": 9144
        });

        assert!(serde_json::from_value::<Pit>(body).is_err());
    }

    #[test]
    fn test_weather_keeps_integer_measurements() {
        let body = json!({
            "air_temperature": 27,
            "date": "2023-05-07T18:42:25.233000+00:00",
            "humidity": 58,
            "meeting_key": 1208,
            "pressure": 1018.7,
            "rainfall": 0,
            "session_key": 9078,
            "track_temperature": 52.5,
            "wind_direction": 136,
            "wind_speed": 2.4
        });

        let weather: Weather = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(weather.air_temperature.value(), Some(&Number::from(27)));

        let text = serde_json::to_string_pretty(&weather).unwrap();
        assert!(text.contains("\"rainfall\": 0,"));
        assert!(text.contains("\"wind_direction\": 136,"));
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), body);
    }
}
