use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::model::{
    CityQuery, DailyTrend, HourlyAnalytic, NewObservation, StatsSummary, WeatherObservation,
};

/// Client errors, split by where the failure happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status with a JSON `{error}` body. `message` is the server's
    /// text, or the (truncated) raw body when the error JSON is absent.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// Sending the request or reading the response failed.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx status with a body that didn't parse.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True for errors the server reported itself, as opposed to transport
    /// or decoding failures.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }
}

/// The six read endpoints plus the observation write, behind one seam so the
/// engine and orchestrator can be driven by fakes in tests.
#[async_trait]
pub trait WeatherApi: Send + Sync + std::fmt::Debug {
    async fn suggest(&self, fragment: &str) -> Result<Vec<String>, ApiError>;
    async fn current(&self, city: &CityQuery) -> Result<WeatherObservation, ApiError>;
    async fn history(&self, city: &CityQuery) -> Result<Vec<WeatherObservation>, ApiError>;
    async fn stats(&self, city: &CityQuery) -> Result<StatsSummary, ApiError>;
    async fn analytics(&self, city: &CityQuery) -> Result<Vec<HourlyAnalytic>, ApiError>;
    async fn trends(&self, city: &CityQuery) -> Result<Vec<DailyTrend>, ApiError>;
    async fn add(&self, observation: &NewObservation) -> Result<WeatherObservation, ApiError>;

    /// Check if the weather service answers on `GET /health`.
    async fn is_healthy(&self) -> bool;
}

/// HTTP implementation over the weather service's REST endpoints.
///
/// No request timeout is configured: a hung request simply never resolves and
/// its view region stays unrendered.
#[derive(Debug, Clone)]
pub struct HttpWeatherApi {
    base_url: String,
    http: Client,
}

impl HttpWeatherApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET");

        let res = self.http.get(&url).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ApiError::Server {
                status,
                message: server_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "POST");

        let res = self.http.post(&url).json(payload).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ApiError::Server {
                status,
                message: server_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherApi for HttpWeatherApi {
    async fn suggest(&self, fragment: &str) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!("/cities/suggest/{fragment}")).await
    }

    async fn current(&self, city: &CityQuery) -> Result<WeatherObservation, ApiError> {
        self.get_json(&format!("/weather/{city}")).await
    }

    async fn history(&self, city: &CityQuery) -> Result<Vec<WeatherObservation>, ApiError> {
        self.get_json(&format!("/weather/{city}/history")).await
    }

    async fn stats(&self, city: &CityQuery) -> Result<StatsSummary, ApiError> {
        self.get_json(&format!("/weather/{city}/stats")).await
    }

    async fn analytics(&self, city: &CityQuery) -> Result<Vec<HourlyAnalytic>, ApiError> {
        self.get_json(&format!("/weather/{city}/analytics")).await
    }

    async fn trends(&self, city: &CityQuery) -> Result<Vec<DailyTrend>, ApiError> {
        self.get_json(&format!("/weather/{city}/trends")).await
    }

    async fn add(&self, observation: &NewObservation) -> Result<WeatherObservation, ApiError> {
        self.post_json("/weather", observation).await
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(res) => res.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Health check failed");
                false
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the server's `{error}` text, falling back to the raw body.
fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| truncate_body(body))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
