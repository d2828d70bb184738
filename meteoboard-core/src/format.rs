//! Pure display formatting: icon classification and French date rendering.

use chrono::{DateTime, Locale, NaiveDateTime, TimeZone, Utc};

/// Icon family a weather description maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
    Windy,
    Unknown,
}

impl IconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Sunny => "sunny",
            IconCategory::Cloudy => "cloudy",
            IconCategory::Rainy => "rainy",
            IconCategory::Stormy => "stormy",
            IconCategory::Snowy => "snowy",
            IconCategory::Foggy => "foggy",
            IconCategory::Windy => "windy",
            IconCategory::Unknown => "unknown",
        }
    }
}

// Ordered: first matching group wins, so a description naming several
// conditions classifies by the earliest entry.
const KEYWORD_TABLE: &[(IconCategory, &[&str])] = &[
    (IconCategory::Sunny, &["soleil", "ensoleillé", "clair"]),
    (IconCategory::Cloudy, &["nuage", "couvert"]),
    (IconCategory::Rainy, &["pluie", "pluvieux"]),
    (IconCategory::Stormy, &["orage"]),
    (IconCategory::Snowy, &["neige"]),
    (IconCategory::Foggy, &["brouillard", "brume"]),
    (IconCategory::Windy, &["vent"]),
];

/// Classify a free-text weather description by case-insensitive substring
/// match against the keyword table.
pub fn icon_for(description: &str) -> IconCategory {
    let lower = description.to_lowercase();
    for (category, keywords) in KEYWORD_TABLE {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *category;
        }
    }
    IconCategory::Unknown
}

/// Render an ISO timestamp as a French long-form date,
/// e.g. "mercredi 1 mai 2024 à 10:00". Unparseable input is returned verbatim.
pub fn format_timestamp(iso: &str) -> String {
    match parse_datetime(iso) {
        Some(dt) => dt
            .format_localized("%A %-d %B %Y à %H:%M", Locale::fr_FR)
            .to_string(),
        None => iso.to_string(),
    }
}

// The server emits naive ISO timestamps; suffixed variants show up in
// hand-entered data, so try RFC 3339 first and fall back to naive forms.
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// One decimal plus unit, e.g. "18.4°C".
pub fn format_temperature(value: f64) -> String {
    format!("{value:.1}°C")
}

/// Like [`format_temperature`], with "N/A" for a missing value.
pub fn format_optional_temperature(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_temperature)
}

/// Day-over-day change: "N/A" when the server provided none (earliest day).
pub fn format_variation(change: Option<f64>) -> String {
    format_optional_temperature(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_keywords_map_to_rainy() {
        for description in ["pluie", "Pluie battante", "PLUIE FORTE", "Temps pluvieux"] {
            assert_eq!(icon_for(description), IconCategory::Rainy, "{description}");
        }
    }

    #[test]
    fn clear_sky_maps_to_sunny() {
        assert_eq!(icon_for("Ciel clair"), IconCategory::Sunny);
        assert_eq!(icon_for("Ensoleillé"), IconCategory::Sunny);
        assert_eq!(icon_for("Grand soleil"), IconCategory::Sunny);
    }

    #[test]
    fn unmatched_description_is_unknown() {
        assert_eq!(icon_for("canicule"), IconCategory::Unknown);
        assert_eq!(icon_for(""), IconCategory::Unknown);
    }

    #[test]
    fn first_matching_group_wins() {
        // Matches both the sun and rain groups; the table order decides.
        assert_eq!(icon_for("soleil puis pluie"), IconCategory::Sunny);
        assert_eq!(icon_for("nuages et vent"), IconCategory::Cloudy);
    }

    #[test]
    fn every_category_has_a_match() {
        assert_eq!(icon_for("couvert"), IconCategory::Cloudy);
        assert_eq!(icon_for("orage violent"), IconCategory::Stormy);
        assert_eq!(icon_for("neige fondue"), IconCategory::Snowy);
        assert_eq!(icon_for("brume matinale"), IconCategory::Foggy);
        assert_eq!(icon_for("vent fort"), IconCategory::Windy);
    }

    #[test]
    fn timestamp_renders_french_long_form() {
        assert_eq!(
            format_timestamp("2024-05-01T10:00:00Z"),
            "mercredi 1 mai 2024 à 10:00"
        );
    }

    #[test]
    fn naive_timestamp_is_accepted() {
        assert_eq!(
            format_timestamp("2024-05-01T10:00:00"),
            "mercredi 1 mai 2024 à 10:00"
        );
        assert_eq!(
            format_timestamp("2024-05-01T10:00:00.123456"),
            "mercredi 1 mai 2024 à 10:00"
        );
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_timestamp("hier soir"), "hier soir");
    }

    #[test]
    fn temperature_rounds_to_one_decimal() {
        assert_eq!(format_temperature(18.4), "18.4°C");
        assert_eq!(format_temperature(18.46), "18.5°C");
        assert_eq!(format_temperature(-3.0), "-3.0°C");
    }

    #[test]
    fn variation_is_na_when_absent() {
        assert_eq!(format_variation(None), "N/A");
        assert_eq!(format_variation(Some(1.25)), "1.2°C");
        assert_eq!(format_variation(Some(-0.8)), "-0.8°C");
    }
}
