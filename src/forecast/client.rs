//! HTTP access to the daily forecast endpoint.

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::forecast::error::FetchError;
use crate::forecast::response::{ForecastResponse, ProviderErrorBody};
use crate::types::daily_record::WeatherSeries;
use crate::types::query::{LatLon, Query};
use bon::bon;
use chrono::NaiveDate;
use log::{debug, info, warn};
use reqwest::Client;

/// Client for the daily temperature statistics of the forecast provider.
///
/// One call to [`ForecastClient::fetch_weather`] issues exactly one GET request.
/// Nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

#[bon]
impl ForecastClient {
    /// Creates a client from the HTTP settings of a [`PanelConfig`].
    ///
    /// # Errors
    ///
    /// [`PanelError::HttpClient`] if the underlying `reqwest` client cannot be built.
    pub fn from_config(config: &PanelConfig) -> Result<Self, PanelError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .build()
            .map_err(PanelError::HttpClient)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates a client for the public Open-Meteo endpoint.
    pub fn new() -> Result<Self, PanelError> {
        Self::from_config(&PanelConfig::default())
    }

    /// Fetches daily temperatures for `query` and returns them as rows.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the request cannot be sent, the provider
    /// answers with a non-success status, or the body is not a well formed
    /// forecast (missing `daily.time`, unparseable dates, misaligned columns).
    /// Columns the provider leaves out are not an error.
    pub async fn fetch_weather(&self, query: &Query) -> Result<WeatherSeries, FetchError> {
        let url = self.base_url.clone();
        info!(
            "Requesting daily temperatures for ({}, {}) from {} to {} at {}",
            query.location.0, query.location.1, query.start_date, query.end_date, url
        );

        let response = self
            .http
            .get(&url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        if !status.is_success() {
            let reason = serde_json::from_slice::<ProviderErrorBody>(&body)
                .ok()
                .map(|b| b.reason);
            warn!(
                "Forecast request to {} failed with status {}: {}",
                url,
                status,
                reason.as_deref().unwrap_or("no reason given")
            );
            return Err(FetchError::HttpStatus {
                url,
                status,
                reason,
            });
        }

        let parsed: ForecastResponse = match serde_json::from_slice(&body) {
            Ok(parsed) => parsed,
            Err(source) => {
                warn!("Malformed forecast body from {}: {}", url, source);
                return Err(FetchError::Decode { url, source });
            }
        };

        let series = parsed.daily.into_series().inspect_err(|e| {
            warn!("Inconsistent forecast columns from {}: {}", url, e);
        })?;
        if series.len() != query.day_count() {
            debug!(
                "Provider returned {} days for a {} day range",
                series.len(),
                query.day_count()
            );
        }
        info!("Received {} days of temperatures", series.len());
        Ok(series)
    }

    /// Builder form of [`ForecastClient::fetch_weather`].
    ///
    /// ```no_run
    /// # use weather_panel::{ForecastClient, LatLon, PanelError};
    /// # use chrono::NaiveDate;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), PanelError> {
    /// let client = ForecastClient::new()?;
    /// let series = client
    ///     .daily(LatLon(52.52, 13.41))
    ///     .start(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2024, 7, 7).unwrap())
    ///     .call()
    ///     .await?;
    /// println!("{} days", series.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = daily)]
    #[doc(hidden)]
    pub async fn build_daily(
        &self,
        #[builder(start_fn)] location: LatLon,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<WeatherSeries, FetchError> {
        self.fetch_weather(&Query::new(location, start, end)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::Measurement;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ForecastClient {
        let config = PanelConfig::builder()
            .base_url(format!("{}/v1/forecast", server.uri()))
            .build();
        ForecastClient::from_config(&config).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    #[tokio::test]
    async fn test_request_carries_all_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "48.85"))
            .and(query_param("longitude", "2.35"))
            .and(query_param("start_date", "2024-02-01"))
            .and(query_param("end_date", "2024-02-02"))
            .and(query_param("daily", Measurement::daily_parameter()))
            .and(query_param("temperature_unit", "celsius"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "daily": {
                    "time": ["2024-02-01", "2024-02-02"],
                    "temperature_2m_max": [9.5, 11.0],
                    "temperature_2m_min": [2.5, 4.0]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let series = client_for(&server)
            .daily(LatLon(48.85, 2.35))
            .start(day(1))
            .end(day(2))
            .call()
            .await
            .unwrap();

        assert_eq!(series.dates(), vec![day(1), day(2)]);
        assert_eq!(series.values(Measurement::TempMax), vec![Some(9.5), Some(11.0)]);
        assert_eq!(series.values(Measurement::TempMean), vec![None, None]);
    }

    #[tokio::test]
    async fn test_error_status_keeps_provider_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": true,
                "reason": "Parameter 'start_date' is out of allowed range"
            })))
            .mount(&server)
            .await;

        let query = Query::new(LatLon(0.0, 0.0), day(1), day(1));
        match client_for(&server).fetch_weather(&query).await {
            Err(FetchError::HttpStatus { status, reason, .. }) => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(
                    reason.as_deref(),
                    Some("Parameter 'start_date' is out of allowed range")
                );
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let query = Query::new(LatLon(0.0, 0.0), day(1), day(1));
        let err = client_for(&server).fetch_weather(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus { reason: None, .. }));
        assert!(err.to_string().starts_with("Failed to fetch weather data"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let query = Query::new(LatLon(0.0, 0.0), day(1), day(1));
        let err = client_for(&server).fetch_weather(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let config = PanelConfig::builder()
            .base_url("http://127.0.0.1:9/v1/forecast")
            .build();
        let client = ForecastClient::from_config(&config).unwrap();
        let query = Query::new(LatLon(0.0, 0.0), day(1), day(1));
        let err = client.fetch_weather(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::NetworkRequest(..)));
    }
}
