//! The five-section weather view: display models, the render surface seam,
//! and the orchestrator that fills the sections from the API.

use std::sync::Arc;

use tracing::warn;

use crate::client::{ApiError, WeatherApi};
use crate::format::{
    IconCategory, format_optional_temperature, format_temperature, format_timestamp,
    format_variation, icon_for,
};
use crate::model::{CityQuery, DailyTrend, HourlyAnalytic, StatsSummary, WeatherObservation};

/// Generic text shown in the current-weather region when the failure was not
/// reported by the server itself.
pub const FETCH_ERROR_TEXT: &str = "Erreur lors de la récupération des données";

/// Display model for one observation, used by the current-weather card and
/// each history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationCard {
    pub city: String,
    pub icon: IconCategory,
    pub temperature: String,
    pub humidity: String,
    pub description: String,
    pub observed_at: String,
}

impl From<&WeatherObservation> for ObservationCard {
    fn from(obs: &WeatherObservation) -> Self {
        let description = obs.description.clone().unwrap_or_default();
        Self {
            city: obs.city.clone(),
            icon: icon_for(&description),
            temperature: format_temperature(obs.temperature),
            humidity: obs
                .humidity
                .map_or_else(|| "N/A".to_string(), |h| format!("{h}%")),
            description,
            observed_at: format_timestamp(&obs.timestamp),
        }
    }
}

/// Display model for the per-city aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    pub average: String,
    pub maximum: String,
    pub minimum: String,
    pub records: i64,
}

impl From<&StatsSummary> for StatsCard {
    fn from(stats: &StatsSummary) -> Self {
        Self {
            average: format_temperature(stats.average_temperature),
            maximum: format_temperature(stats.max_temperature),
            minimum: format_temperature(stats.min_temperature),
            records: stats.number_of_records,
        }
    }
}

/// Display model for one hourly analytics bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsRow {
    pub hour: String,
    pub avg_temp: String,
    pub data_points: i64,
}

impl From<&HourlyAnalytic> for AnalyticsRow {
    fn from(bucket: &HourlyAnalytic) -> Self {
        Self {
            hour: bucket
                .hour
                .as_deref()
                .map_or_else(|| "N/A".to_string(), format_timestamp),
            avg_temp: format_optional_temperature(bucket.avg_temp),
            data_points: bucket.data_points,
        }
    }
}

/// Display model for one day of the trend series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendRow {
    pub day: String,
    pub avg_temp: String,
    pub variation: String,
}

impl From<&DailyTrend> for TrendRow {
    fn from(trend: &DailyTrend) -> Self {
        Self {
            day: trend
                .day
                .as_deref()
                .map_or_else(|| "N/A".to_string(), format_timestamp),
            avg_temp: format_optional_temperature(trend.avg_temp),
            variation: format_variation(trend.temp_change),
        }
    }
}

/// Render target for the five view regions. Each method owns one region;
/// an unrendered region keeps whatever it showed before.
pub trait ViewSurface: Send + Sync {
    fn current_weather(&self, card: ObservationCard);
    fn current_weather_error(&self, message: &str);
    fn history(&self, entries: Vec<ObservationCard>);
    fn stats(&self, card: StatsCard);
    fn analytics(&self, rows: Vec<AnalyticsRow>);
    fn trends(&self, rows: Vec<TrendRow>);
}

/// Fetches the five resources for a city and renders each section as its
/// response resolves. Sections degrade independently: one failure never
/// blocks or erases a sibling.
pub struct WeatherViewOrchestrator {
    api: Arc<dyn WeatherApi>,
    surface: Arc<dyn ViewSurface>,
}

impl WeatherViewOrchestrator {
    pub fn new(api: Arc<dyn WeatherApi>, surface: Arc<dyn ViewSurface>) -> Self {
        Self { api, surface }
    }

    /// Fill all five regions for `city`. The five requests are concurrently
    /// in flight; completion order is arbitrary.
    pub async fn lookup(&self, city: &CityQuery) {
        tokio::join!(
            self.render_current(city),
            self.render_history(city),
            self.render_stats(city),
            self.render_analytics(city),
            self.render_trends(city),
        );
    }

    async fn render_current(&self, city: &CityQuery) {
        match self.api.current(city).await {
            Ok(obs) => self.surface.current_weather(ObservationCard::from(&obs)),
            Err(ApiError::Server { message, .. }) => self.surface.current_weather_error(&message),
            Err(e) => {
                warn!(%city, error = %e, "Current weather fetch failed");
                self.surface.current_weather_error(FETCH_ERROR_TEXT);
            }
        }
    }

    async fn render_history(&self, city: &CityQuery) {
        match self.api.history(city).await {
            Ok(entries) => self
                .surface
                .history(entries.iter().map(ObservationCard::from).collect()),
            Err(e) => warn!(%city, error = %e, "History fetch failed"),
        }
    }

    async fn render_stats(&self, city: &CityQuery) {
        match self.api.stats(city).await {
            Ok(stats) => self.surface.stats(StatsCard::from(&stats)),
            Err(e) => warn!(%city, error = %e, "Stats fetch failed"),
        }
    }

    async fn render_analytics(&self, city: &CityQuery) {
        match self.api.analytics(city).await {
            // An empty payload renders nothing rather than an empty card.
            Ok(buckets) if !buckets.is_empty() => self
                .surface
                .analytics(buckets.iter().map(AnalyticsRow::from).collect()),
            Ok(_) => {}
            Err(e) => warn!(%city, error = %e, "Analytics fetch failed"),
        }
    }

    async fn render_trends(&self, city: &CityQuery) {
        match self.api.trends(city).await {
            Ok(days) if !days.is_empty() => {
                self.surface.trends(days.iter().map(TrendRow::from).collect());
            }
            Ok(_) => {}
            Err(e) => warn!(%city, error = %e, "Trends fetch failed"),
        }
    }
}
