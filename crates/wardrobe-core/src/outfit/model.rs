//! Outfit and weather domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::catalog::{Category, ClothingItem};

/// Process-wide seasonal context for recommendations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WeatherMode {
    #[default]
    Summer,
    Winter,
}

impl WeatherMode {
    /// The other season; used by the weather toggle.
    pub fn toggled(self) -> Self {
        match self {
            WeatherMode::Summer => WeatherMode::Winter,
            WeatherMode::Winter => WeatherMode::Summer,
        }
    }
}

/// A committed outfit.
///
/// Items are value copies taken at commit time, so an outfit keeps its
/// items after they are removed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: i64,
    pub items: Vec<ClothingItem>,
    pub created_at: DateTime<Utc>,
}

impl Outfit {
    pub fn new(id: i64, items: Vec<ClothingItem>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            items,
            created_at,
        }
    }

    pub fn contains_item(&self, item_id: i64) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }

    pub fn count_category(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;
    use chrono::TimeZone;

    #[test]
    fn test_weather_default_and_toggle() {
        assert_eq!(WeatherMode::default(), WeatherMode::Summer);
        assert_eq!(WeatherMode::Summer.toggled(), WeatherMode::Winter);
        assert_eq!(WeatherMode::Winter.toggled(), WeatherMode::Summer);
    }

    #[test]
    fn test_weather_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&WeatherMode::Winter).unwrap(),
            "\"winter\""
        );
        let parsed: WeatherMode = serde_json::from_str("\"summer\"").unwrap();
        assert_eq!(parsed, WeatherMode::Summer);
    }

    #[test]
    fn test_outfit_json_layout() {
        let catalog = seed_catalog();
        let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let outfit = Outfit::new(1705311000000, catalog[..2].to_vec(), created_at);

        let value = serde_json::to_value(&outfit).unwrap();
        assert_eq!(value["id"], 1705311000000i64);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert!(
            value["createdAt"]
                .as_str()
                .unwrap()
                .starts_with("2024-01-15T09:30:00")
        );

        let back: Outfit = serde_json::from_value(value).unwrap();
        assert_eq!(back, outfit);
    }

    #[test]
    fn test_accepts_millisecond_iso_timestamps() {
        let json = r#"{"id":1,"items":[],"createdAt":"2024-03-01T12:00:00.123Z"}"#;
        let outfit: Outfit = serde_json::from_str(json).unwrap();
        assert_eq!(outfit.created_at.timestamp_subsec_millis(), 123);
    }
}
