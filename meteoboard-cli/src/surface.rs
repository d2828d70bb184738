//! Terminal implementation of the core render surfaces. Plays the role the
//! HTML page plays for the browser client: each view region becomes a block
//! of stdout.

use std::sync::Mutex;

use meteoboard_core::{
    AnalyticsRow, FormSurface, IconCategory, ObservationCard, SearchSurface, StatsCard, TrendRow,
    ViewSurface,
};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    suggestions: Mutex<Vec<String>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered suggestion list; consumed by the `search` command to
    /// feed the selection prompt.
    pub fn take_suggestions(&self) -> Vec<String> {
        std::mem::take(&mut *self.suggestions.lock().expect("not poisoned"))
    }
}

fn icon_glyph(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::Sunny => "☀",
        IconCategory::Cloudy => "☁",
        IconCategory::Rainy => "🌧",
        IconCategory::Stormy => "⚡",
        IconCategory::Snowy => "❄",
        IconCategory::Foggy => "🌫",
        IconCategory::Windy => "🌬",
        IconCategory::Unknown => "☁",
    }
}

impl ViewSurface for TerminalSurface {
    fn current_weather(&self, card: ObservationCard) {
        println!();
        println!("{} {}", icon_glyph(card.icon), card.city);
        println!("  Température : {}", card.temperature);
        println!("  Humidité    : {}", card.humidity);
        if !card.description.is_empty() {
            println!("  {}", card.description);
        }
        println!("  {}", card.observed_at);
    }

    fn current_weather_error(&self, message: &str) {
        println!();
        println!("! {message}");
    }

    fn history(&self, entries: Vec<ObservationCard>) {
        println!();
        println!("Historique");
        for entry in entries {
            println!(
                "  {} {} | {} | {} | {}",
                icon_glyph(entry.icon),
                entry.temperature,
                entry.humidity,
                entry.description,
                entry.observed_at
            );
        }
    }

    fn stats(&self, card: StatsCard) {
        println!();
        println!("Statistiques");
        println!("  Température moyenne : {}", card.average);
        println!("  Maximum             : {}", card.maximum);
        println!("  Minimum             : {}", card.minimum);
        println!("  Nombre de relevés   : {}", card.records);
    }

    fn analytics(&self, rows: Vec<AnalyticsRow>) {
        println!();
        println!("Analyses sur 24h");
        for row in rows {
            println!(
                "  {} — {} ({} mesures)",
                row.hour, row.avg_temp, row.data_points
            );
        }
    }

    fn trends(&self, rows: Vec<TrendRow>) {
        println!();
        println!("Tendances");
        for row in rows {
            println!(
                "  {} — {} (variation : {})",
                row.day, row.avg_temp, row.variation
            );
        }
    }
}

impl SearchSurface for TerminalSurface {
    fn show_suggestions(&self, cities: &[String]) {
        *self.suggestions.lock().expect("not poisoned") = cities.to_vec();
    }

    fn hide_suggestions(&self) {
        self.suggestions.lock().expect("not poisoned").clear();
    }

    fn set_query(&self, city: &str) {
        println!("Ville sélectionnée : {city}");
    }
}

impl FormSurface for TerminalSurface {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }

    fn clear_observation_form(&self) {
        // One-shot commands have no persistent form state to clear.
    }
}
