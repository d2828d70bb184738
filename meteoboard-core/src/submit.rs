//! Observation submission: lenient field parsing, POST, view refresh.

use std::sync::Arc;

use tracing::warn;

use crate::client::{ApiError, WeatherApi};
use crate::model::{CityQuery, NewObservation};
use crate::view::WeatherViewOrchestrator;

/// Generic text shown when the submission failed before reaching the server.
pub const SUBMIT_ERROR_TEXT: &str = "Erreur lors de l'ajout des données";

/// Notification and form-state capabilities of the submission UI.
pub trait FormSurface: Send + Sync {
    /// Blocking-notification equivalent; used for submission errors.
    fn notify(&self, message: &str);

    /// Empty all four input fields after a successful submission.
    fn clear_observation_form(&self);
}

/// Raw text of the four input fields, exactly as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct ObservationForm {
    pub city: String,
    pub temperature: String,
    pub humidity: String,
    pub description: String,
}

impl ObservationForm {
    /// Build the POST payload. Parsing is deliberately lenient: a temperature
    /// that doesn't parse becomes NaN (serialized as JSON null) and garbage
    /// humidity becomes null. Rejecting bad values is the server's job.
    pub fn to_payload(&self) -> NewObservation {
        NewObservation {
            city: self.city.clone(),
            temperature: self.temperature.trim().parse().unwrap_or(f64::NAN),
            humidity: self.humidity.trim().parse().ok(),
            description: self.description.clone(),
        }
    }
}

/// Posts a new observation and refreshes the whole view on success.
pub struct SubmissionController {
    api: Arc<dyn WeatherApi>,
    surface: Arc<dyn FormSurface>,
    view: Arc<WeatherViewOrchestrator>,
}

impl SubmissionController {
    pub fn new(
        api: Arc<dyn WeatherApi>,
        surface: Arc<dyn FormSurface>,
        view: Arc<WeatherViewOrchestrator>,
    ) -> Self {
        Self { api, surface, view }
    }

    /// Submit the form. On success the fields are cleared and the view is
    /// refreshed for the submitted city; on failure the fields stay populated
    /// so the user can correct them.
    pub async fn submit(&self, form: &ObservationForm) {
        let payload = form.to_payload();

        match self.api.add(&payload).await {
            Ok(_) => {
                self.surface.clear_observation_form();
                if let Some(city) = CityQuery::new(&payload.city) {
                    self.view.lookup(&city).await;
                }
            }
            Err(ApiError::Server { message, .. }) => {
                self.surface.notify(&format!("Erreur: {message}"));
            }
            Err(e) => {
                warn!(error = %e, "Observation submission failed");
                self.surface.notify(SUBMIT_ERROR_TEXT);
            }
        }
    }
}
