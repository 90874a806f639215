//! Clothing catalog: item models, color rules, the starter catalog, and queries.

mod model;
pub mod palette;
mod query;
mod seed;

pub use model::{
    Category, ClothingDraft, ClothingItem, Color, PLACEHOLDER_IMAGE_URL, StyleType,
};
pub use palette::colors_match;
pub use query::{CatalogFilter, CatalogStats};
pub use seed::seed_catalog;
