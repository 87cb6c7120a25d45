//! Query encoding for OpenF1 resource URLs.
//!
//! Filters are forwarded verbatim: comparison expressions such as `>=315`
//! and keywords such as `latest` are interpreted by the upstream only.

use reqwest::Url;
use serde_json::{Map, Number, Value};

use super::FetchError;

/// Named filter values for a single resource query.
pub type FilterMap = Map<String, Value>;

/// Encode a filter map as a query string.
///
/// Null values are omitted. Returns `None` when nothing is left to send.
pub fn encode_query(filters: &FilterMap) -> Result<Option<String>, FetchError> {
    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(filters.len());

    for (key, value) in filters {
        let rendered = match value {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => render_number(n),
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) => {
                return Err(FetchError::UnsupportedFilter(key.clone()));
            }
        };
        pairs.push((key.as_str(), rendered));
    }

    if pairs.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_urlencoded::to_string(&pairs)?))
}

/// Decimals with no fractional part go out as integers (`315.0` as `315`).
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Build the full URL for `resource` under `base`, with filters applied.
pub fn resource_url(base: &Url, resource: &str, filters: &FilterMap) -> Result<Url, FetchError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| FetchError::invalid_url(base.as_str()))?
        .pop_if_empty()
        .push(resource);

    url.set_query(encode_query(filters)?.as_deref());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filters(value: Value) -> FilterMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("filters must be an object"),
        }
    }

    fn base() -> Url {
        Url::parse("https://api.openf1.org/v1").unwrap()
    }

    #[test]
    fn test_empty_filters_yield_bare_url() {
        let url = resource_url(&base(), "drivers", &FilterMap::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.openf1.org/v1/drivers");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_null_values_are_omitted() {
        let map = filters(json!({ "driver_number": null, "session_key": 9158 }));
        let query = encode_query(&map).unwrap().unwrap();
        assert_eq!(query, "session_key=9158");
        assert!(!query.contains("null"));
    }

    #[test]
    fn test_all_null_filters_yield_no_query() {
        let map = filters(json!({ "driver_number": null }));
        assert_eq!(encode_query(&map).unwrap(), None);

        let url = resource_url(&base(), "laps", &map).unwrap();
        assert_eq!(url.as_str(), "https://api.openf1.org/v1/laps");
    }

    #[test]
    fn test_scalars_are_stringified() {
        let map = filters(json!({
            "driver_number": 1,
            "is_pit_out_lap": false,
            "track_temperature": 41.5,
            "team_name": "Red Bull Racing"
        }));
        let url = resource_url(&base(), "laps", &map).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&("driver_number".into(), "1".into())));
        assert!(pairs.contains(&("is_pit_out_lap".into(), "false".into())));
        assert!(pairs.contains(&("track_temperature".into(), "41.5".into())));
        assert!(pairs.contains(&("team_name".into(), "Red Bull Racing".into())));
    }

    #[test]
    fn test_integral_decimals_lose_fraction() {
        let map = filters(json!({ "speed": 315.0, "track_temperature": 41.5 }));
        let url = resource_url(&base(), "car_data", &map).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("speed".into(), "315".into())));
        assert!(pairs.contains(&("track_temperature".into(), "41.5".into())));
    }

    #[test]
    fn test_comparison_expressions_pass_through() {
        let map = filters(json!({ "speed": ">=315", "session_key": "latest" }));
        let url = resource_url(&base(), "car_data", &map).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("speed".into(), ">=315".into())));
        assert!(pairs.contains(&("session_key".into(), "latest".into())));
    }

    #[test]
    fn test_each_key_appears_once() {
        let map = filters(json!({ "meeting_key": 1219, "year": 2023 }));
        let query = encode_query(&map).unwrap().unwrap();
        assert_eq!(query.matches("meeting_key=").count(), 1);
        assert_eq!(query.matches("year=").count(), 1);
    }

    #[test]
    fn test_non_scalar_values_are_rejected() {
        let map = filters(json!({ "driver_number": [1, 44] }));
        let err = encode_query(&map).unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedFilter(ref key) if key == "driver_number"));
    }

    #[test]
    fn test_trailing_slash_base() {
        let base = Url::parse("https://api.openf1.org/v1/").unwrap();
        let url = resource_url(&base, "weather", &FilterMap::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.openf1.org/v1/weather");
    }

    #[test]
    fn test_root_base() {
        let base = Url::parse("http://127.0.0.1:1234").unwrap();
        let url = resource_url(&base, "pit", &FilterMap::new()).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/pit");
    }

    #[test]
    fn test_base_without_path_segments_is_rejected() {
        let base = Url::parse("data:text/plain,openf1").unwrap();
        let err = resource_url(&base, "pit", &FilterMap::new()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
