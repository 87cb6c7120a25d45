//! HTTP client for the OpenF1 REST API.

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::{FetchError, FilterMap, query::resource_url};
use crate::core::config::OpenF1Config;

/// Client issuing one GET per resource query.
///
/// Nothing is cached: identical queries issued back to back each reach the
/// upstream. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct OpenF1Client {
    http: reqwest::Client,
    base_url: Url,
}

impl OpenF1Client {
    /// Create a client from the OpenF1 section of the configuration.
    pub fn new(config: &OpenF1Config) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::invalid_url(format!("{}: {}", config.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(FetchError::invalid_url(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL every resource path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch `resource` with the given filters and decode the record array.
    #[instrument(skip(self, filters))]
    pub async fn fetch<R>(&self, resource: &str, filters: &FilterMap) -> Result<Vec<R>, FetchError>
    where
        R: DeserializeOwned,
    {
        let url = resource_url(&self.base_url, resource, filters)?;
        debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("OpenF1 answered {} for {}", status, url);
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<R> = serde_json::from_slice(&body)?;

        debug!("Decoded {} {} record(s)", records.len(), resource);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::openf1::records::{Driver, Weather};
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server) -> OpenF1Client {
        OpenF1Client::new(&OpenF1Config {
            base_url: server.url(),
            ..OpenF1Config::default()
        })
        .unwrap()
    }

    const DRIVER_BODY: &str = r#"[{
        "broadcast_name": "M VERSTAPPEN",
        "country_code": "NED",
        "driver_number": 1,
        "first_name": "Max",
        "full_name": "Max VERSTAPPEN",
        "headshot_url": null,
        "last_name": "Verstappen",
        "meeting_key": 1219,
        "name_acronym": "VER",
        "session_key": 9158,
        "team_colour": "3671C6",
        "team_name": "Red Bull Racing"
    }]"#;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = OpenF1Client::new(&OpenF1Config {
            base_url: "not a url".to_string(),
            ..OpenF1Config::default()
        });
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_new_rejects_opaque_base_url() {
        let result = OpenF1Client::new(&OpenF1Config {
            base_url: "mailto:team@openf1.org".to_string(),
            ..OpenF1Config::default()
        });
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_decodes_records() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/drivers")
            .match_query(Matcher::UrlEncoded("driver_number".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(DRIVER_BODY)
            .create_async()
            .await;

        let client = client_for(&server);
        let mut filters = FilterMap::new();
        filters.insert("driver_number".into(), json!(1));

        let drivers: Vec<Driver> = client.fetch("drivers", &filters).await.unwrap();

        mock.assert_async().await;
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].driver_number, 1);
        assert_eq!(drivers[0].name_acronym.value().map(String::as_str), Some("VER"));
        assert!(drivers[0].headshot_url.is_null());
    }

    #[tokio::test]
    async fn test_fetch_reports_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/weather")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .fetch::<Weather>("weather", &FilterMap::new())
            .await
            .unwrap_err();

        assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_reports_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/drivers")
            .with_status(200)
            .with_body(r#"{"detail": "not an array"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .fetch::<Driver>("drivers", &FilterMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_does_not_cache() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/drivers")
            .with_status(200)
            .with_body(DRIVER_BODY)
            .expect(2)
            .create_async()
            .await;

        let client = client_for(&server);
        let first: Vec<Driver> = client.fetch("drivers", &FilterMap::new()).await.unwrap();
        let second: Vec<Driver> = client.fetch("drivers", &FilterMap::new()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_without_filters_sends_no_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/weather")
            .match_query(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let records: Vec<Weather> = client.fetch("weather", &FilterMap::new()).await.unwrap();

        mock.assert_async().await;
        assert!(records.is_empty());
    }
}
