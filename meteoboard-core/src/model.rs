use serde::{Deserialize, Serialize};

/// A trimmed, non-empty city name. Every fetch is keyed by one of these;
/// the constructor is the single place where empty input gets dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityQuery(String);

impl CityQuery {
    /// Returns `None` for input that is empty after trimming, so callers can
    /// silently ignore an empty search instead of issuing a request.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored weather reading, as the server returns it.
///
/// `humidity` and `description` are nullable columns server-side; `timestamp`
/// is an ISO 8601 string, with or without a timezone suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(default)]
    pub id: Option<i64>,
    pub city: String,
    pub temperature: f64,
    #[serde(default)]
    pub humidity: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: String,
}

/// Body of `POST /weather`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewObservation {
    pub city: String,
    pub temperature: f64,
    pub humidity: Option<i64>,
    pub description: String,
}

/// Per-city aggregate, recomputed server-side on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSummary {
    pub average_temperature: f64,
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub number_of_records: i64,
}

/// One hourly bucket from the 24h analytics query. The server emits nulls
/// for buckets it could not aggregate, hence the optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyAnalytic {
    #[serde(default)]
    pub hour: Option<String>,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    #[serde(default)]
    pub min_temp: Option<f64>,
    #[serde(default)]
    pub max_temp: Option<f64>,
    #[serde(default)]
    pub data_points: i64,
    #[serde(default)]
    pub avg_humidity: Option<f64>,
}

/// One day of the trend series. `temp_change` is computed server-side against
/// the previous day and is absent for the earliest day; it is opaque to the
/// client and never recomputed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTrend {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    #[serde(default)]
    pub temp_change: Option<f64>,
    #[serde(default)]
    pub min_temp: Option<f64>,
    #[serde(default)]
    pub max_temp: Option<f64>,
    #[serde(default)]
    pub avg_humidity: Option<f64>,
    #[serde(default)]
    pub measurements: i64,
}
