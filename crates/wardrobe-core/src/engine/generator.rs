//! Rule-based outfit generation.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::candidates::CandidateTiers;
use super::template::{STYLE_CHOICES, WeatherRules, style_template};
use crate::catalog::palette::{SUMMER_JEANS_COLORS, is_summer_color, is_winter_color};
use crate::catalog::{Category, ClothingItem, StyleType, colors_match};
use crate::error::{MIN_OUTFIT_ITEMS, Result, WardrobeError};
use crate::outfit::WeatherMode;

/// A candidate outfit, not yet committed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutfit {
    /// The style hint used, after resolving a missing hint.
    pub style: StyleType,
    pub weather: WeatherMode,
    /// Value copies in selection order; no id appears twice.
    pub items: Vec<ClothingItem>,
}

/// Catalog items split by the categories the engine selects from.
struct Wardrobe<'a> {
    tshirts: Vec<&'a ClothingItem>,
    jeans: Vec<&'a ClothingItem>,
    shoes: Vec<&'a ClothingItem>,
    jackets: Vec<&'a ClothingItem>,
    dresses: Vec<&'a ClothingItem>,
}

impl<'a> Wardrobe<'a> {
    fn partition(pool: &[&'a ClothingItem]) -> Self {
        let of = |category: Category| -> Vec<&'a ClothingItem> {
            pool.iter()
                .copied()
                .filter(|item| item.category == category)
                .collect()
        };

        Self {
            tshirts: of(Category::TShirt),
            jeans: of(Category::Jeans),
            shoes: of(Category::Shoes),
            jackets: of(Category::Jacket),
            dresses: of(Category::Dress),
        }
    }
}

/// Items that survive the weather filter, or the whole catalog when fewer
/// than two would.
fn weather_pool(catalog: &[ClothingItem], weather: WeatherMode) -> Vec<&ClothingItem> {
    let rules = WeatherRules::for_weather(weather);
    let filtered: Vec<&ClothingItem> = catalog
        .iter()
        .filter(|item| rules.retains(item.category))
        .collect();

    if filtered.len() < MIN_OUTFIT_ITEMS {
        tracing::debug!(
            "Weather filter left {} items, using the full catalog",
            filtered.len()
        );
        catalog.iter().collect()
    } else {
        filtered
    }
}

fn pick_winter<'a, R: Rng + ?Sized>(wardrobe: &Wardrobe<'a>, rng: &mut R) -> Vec<&'a ClothingItem> {
    let mut picked = Vec::new();

    let jacket = CandidateTiers::new().or_any().pick(&wardrobe.jackets, rng);
    let tshirt = match jacket {
        Some(jacket) => {
            picked.push(jacket);
            CandidateTiers::new()
                .then(|item| colors_match(jacket.color, item.color) && is_winter_color(item.color))
                .then(|item| is_winter_color(item.color))
                .or_any()
                .pick(&wardrobe.tshirts, rng)
        }
        None => CandidateTiers::new()
            .then(|item| is_winter_color(item.color))
            .or_any()
            .pick(&wardrobe.tshirts, rng),
    };
    picked.extend(tshirt);

    picked
}

fn pick_summer<'a, R: Rng + ?Sized>(wardrobe: &Wardrobe<'a>, rng: &mut R) -> Vec<&'a ClothingItem> {
    let dress = CandidateTiers::new()
        .then(|item| is_summer_color(item.color))
        .or_any()
        .pick(&wardrobe.dresses, rng);
    if let Some(dress) = dress {
        return vec![dress];
    }

    let Some(tshirt) = CandidateTiers::new()
        .then(|item| is_summer_color(item.color))
        .or_any()
        .pick(&wardrobe.tshirts, rng)
    else {
        return Vec::new();
    };

    let jeans = CandidateTiers::new()
        .then(|item| {
            colors_match(tshirt.color, item.color) && SUMMER_JEANS_COLORS.contains(&item.color)
        })
        .or_any()
        .pick(&wardrobe.jeans, rng);

    let mut picked = vec![tshirt];
    picked.extend(jeans);
    picked
}

/// Builds an outfit from `catalog` for the given weather.
///
/// The search shape is fixed; only the choice within each candidate set is
/// random, drawn from `rng`.
///
/// # Arguments
///
/// * `catalog` - Items to choose from; never modified
/// * `weather` - Selects the seasonal branch and the category filter
/// * `style_hint` - Advisory style; `None` draws one from [`STYLE_CHOICES`]
/// * `rng` - Source of every random choice
///
/// # Returns
///
/// - `Ok(GeneratedOutfit)`: At least one item, no id repeated
/// - `Err(WardrobeError::GenerationImpossible)`: The catalog holds fewer
///   than two items, or nothing could be selected
pub fn generate<R: Rng + ?Sized>(
    catalog: &[ClothingItem],
    weather: WeatherMode,
    style_hint: Option<StyleType>,
    rng: &mut R,
) -> Result<GeneratedOutfit> {
    if catalog.len() < MIN_OUTFIT_ITEMS {
        return Err(WardrobeError::generation_impossible(catalog.len()));
    }

    let style = match style_hint {
        Some(style) => style,
        None => *STYLE_CHOICES.choose(rng).unwrap_or(&StyleType::Casual),
    };
    tracing::debug!(
        "Generating {} outfit for {} (template: {:?}, season suggests: {:?})",
        style,
        weather,
        style_template(style),
        WeatherRules::for_weather(weather).suggested
    );

    let pool = weather_pool(catalog, weather);
    let wardrobe = Wardrobe::partition(&pool);

    let mut selected = match weather {
        WeatherMode::Winter => pick_winter(&wardrobe, rng),
        WeatherMode::Summer => pick_summer(&wardrobe, rng),
    };

    // Shoes are not color matched.
    selected.extend(wardrobe.shoes.choose(rng).copied());

    while selected.len() < MIN_OUTFIT_ITEMS {
        let remaining: Vec<&ClothingItem> = pool
            .iter()
            .copied()
            .filter(|item| !selected.iter().any(|chosen| chosen.id == item.id))
            .collect();
        match remaining.choose(rng).copied() {
            Some(item) => selected.push(item),
            None => break,
        }
    }

    if selected.is_empty() {
        return Err(WardrobeError::generation_impossible(catalog.len()));
    }

    Ok(GeneratedOutfit {
        style,
        weather,
        items: selected.into_iter().cloned().collect(),
    })
}
