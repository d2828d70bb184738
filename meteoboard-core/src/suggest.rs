//! Debounced city-name autocomplete with stale-response protection.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::WeatherApi;
use crate::model::CityQuery;

/// Quiet period after the last keystroke before a suggest request fires.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);

/// Fragments shorter than this never hit the network.
pub const MIN_FRAGMENT_CHARS: usize = 2;

/// Render target for the suggestion list and the query field.
pub trait SearchSurface: Send + Sync {
    fn show_suggestions(&self, cities: &[String]);
    fn hide_suggestions(&self);
    fn set_query(&self, city: &str);
}

/// Turns a stream of keystrokes into at most one suggest request per quiet
/// period, and guarantees that only the most recent request's result is ever
/// rendered.
///
/// Every input bumps a monotonic generation counter; the spawned fetch task
/// re-checks the counter after the debounce sleep and again after the network
/// call, so a superseded timer never fires a request and an out-of-order
/// completion is discarded instead of rendered. In-flight HTTP calls are not
/// cancelled, only their results dropped.
pub struct SuggestionEngine {
    api: Arc<dyn WeatherApi>,
    surface: Arc<dyn SearchSurface>,
    lookups: mpsc::UnboundedSender<CityQuery>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl SuggestionEngine {
    /// `lookups` receives the city chosen via [`select`](Self::select); wire
    /// it to the view orchestrator.
    pub fn new(
        api: Arc<dyn WeatherApi>,
        surface: Arc<dyn SearchSurface>,
        lookups: mpsc::UnboundedSender<CityQuery>,
    ) -> Self {
        Self {
            api,
            surface,
            lookups,
            debounce: SUGGEST_DEBOUNCE,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Feed one keystroke's worth of raw input.
    pub fn on_input(&mut self, raw: &str) {
        let generation = self.invalidate();

        let fragment = raw.trim().to_owned();
        if fragment.chars().count() < MIN_FRAGMENT_CHARS {
            self.surface.hide_suggestions();
            return;
        }

        let api = Arc::clone(&self.api);
        let surface = Arc::clone(&self.surface);
        let counter = Arc::clone(&self.generation);
        let debounce = self.debounce;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if counter.load(Ordering::SeqCst) != generation {
                // A newer keystroke restarted the debounce window.
                return;
            }

            let result = api.suggest(&fragment).await;
            if counter.load(Ordering::SeqCst) != generation {
                debug!(%fragment, "Discarding stale suggestion response");
                return;
            }

            match result {
                Ok(cities) if !cities.is_empty() => surface.show_suggestions(&cities),
                Ok(_) => surface.hide_suggestions(),
                Err(e) => {
                    // Autocomplete degrades silently rather than interrupting
                    // the user's typing.
                    debug!(%fragment, error = %e, "Suggestion fetch failed");
                    surface.hide_suggestions();
                }
            }
        }));
    }

    /// The user picked a suggestion: fill the query field, hide the list and
    /// dispatch a full lookup for that city.
    pub fn select(&mut self, city: &str) {
        self.invalidate();
        self.surface.set_query(city);
        self.surface.hide_suggestions();

        if let Some(query) = CityQuery::new(city) {
            let _ = self.lookups.send(query);
        }
    }

    /// Outside-click equivalent: hide the list and drop any in-flight result.
    pub fn dismiss(&mut self) {
        self.invalidate();
        self.surface.hide_suggestions();
    }

    /// Wait for the most recently spawned fetch task to finish. Sequencing
    /// seam for callers that need the list settled before reading it.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    fn invalidate(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}
