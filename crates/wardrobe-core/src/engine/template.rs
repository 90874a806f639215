//! Style templates and weather category rules.

use crate::catalog::{Category, StyleType};
use crate::outfit::WeatherMode;

/// Styles a random hint is drawn from, in draw order.
pub const STYLE_CHOICES: [StyleType; 4] = [
    StyleType::Casual,
    StyleType::Formal,
    StyleType::Party,
    StyleType::Sport,
];

/// Categories a style nominally calls for.
///
/// Advisory only: the seasonal selection decides what is actually picked.
pub fn style_template(style: StyleType) -> &'static [Category] {
    match style {
        StyleType::Casual | StyleType::Sport => &[Category::TShirt, Category::Jeans, Category::Shoes],
        StyleType::Formal => &[
            Category::TShirt,
            Category::Jeans,
            Category::Shoes,
            Category::Jacket,
        ],
        StyleType::Party => &[Category::Dress, Category::Shoes],
    }
}

/// Category preferences for a weather mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherRules {
    /// Categories suggested for the season.
    pub suggested: &'static [Category],
    /// Always kept by the weather filter.
    pub preferred: &'static [Category],
    /// Dropped by the weather filter unless also preferred.
    pub avoided: &'static [Category],
}

impl WeatherRules {
    pub fn for_weather(weather: WeatherMode) -> Self {
        match weather {
            WeatherMode::Summer => Self {
                suggested: &[Category::TShirt, Category::Dress, Category::Shoes],
                preferred: &[],
                avoided: &[Category::Jacket],
            },
            WeatherMode::Winter => Self {
                suggested: &[
                    Category::Jacket,
                    Category::TShirt,
                    Category::Jeans,
                    Category::Shoes,
                ],
                preferred: &[Category::Jacket],
                avoided: &[],
            },
        }
    }

    pub fn retains(&self, category: Category) -> bool {
        self.preferred.contains(&category) || !self.avoided.contains(&category)
    }
}
