//! Catalog filtering, search, and summary counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::model::{Category, ClothingItem, Color, StyleType};

/// Dashboard filter over the catalog. `None` on any axis means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    pub category: Option<Category>,
    pub color: Option<Color>,
    pub style: Option<StyleType>,
    /// Case-insensitive text matched against name, category, and color.
    #[serde(default)]
    pub search: String,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn style(mut self, style: StyleType) -> Self {
        self.style = Some(style);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn matches(&self, item: &ClothingItem) -> bool {
        self.category.is_none_or(|c| item.category == c)
            && self.color.is_none_or(|c| item.color == c)
            && self.style.is_none_or(|s| item.style == s)
            && self.matches_search(item)
    }

    fn matches_search(&self, item: &ClothingItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        item.name.to_lowercase().contains(&term)
            || item.category.as_ref().contains(&term)
            || item.color.as_ref().contains(&term)
    }

    /// Items that pass the filter, in catalog order.
    pub fn apply<'a>(&self, items: &'a [ClothingItem]) -> Vec<&'a ClothingItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Item counts for the catalog sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_items: usize,
    /// Every category is present, with zero when no item has it.
    pub by_category: BTreeMap<Category, usize>,
}

impl CatalogStats {
    pub fn from_items(items: &[ClothingItem]) -> Self {
        let mut by_category: BTreeMap<Category, usize> =
            Category::iter().map(|category| (category, 0)).collect();
        for item in items {
            *by_category.entry(item.category).or_default() += 1;
        }

        Self {
            total_items: items.len(),
            by_category,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
