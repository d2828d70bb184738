//! Core library for the `meteoboard` client.
//!
//! This crate defines:
//! - Configuration handling (endpoint root)
//! - The HTTP client for the weather service's REST endpoints
//! - The debounced, race-safe city suggestion engine
//! - The five-section view orchestrator and submission flow
//! - Pure display formatting (icons, French dates)
//!
//! It is used by `meteoboard-cli`, but can also be reused by other front-ends:
//! all rendering goes through the surface traits, never a concrete UI.

pub mod client;
pub mod config;
pub mod format;
pub mod model;
pub mod submit;
pub mod suggest;
pub mod view;

pub use client::{ApiError, HttpWeatherApi, WeatherApi};
pub use config::{Config, DEFAULT_BASE_URL};
pub use format::{IconCategory, format_timestamp, format_variation, icon_for};
pub use model::{
    CityQuery, DailyTrend, HourlyAnalytic, NewObservation, StatsSummary, WeatherObservation,
};
pub use submit::{FormSurface, ObservationForm, SubmissionController};
pub use suggest::{SearchSurface, SuggestionEngine};
pub use view::{
    AnalyticsRow, ObservationCard, StatsCard, TrendRow, ViewSurface, WeatherViewOrchestrator,
};
