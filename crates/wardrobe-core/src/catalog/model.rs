//! Clothing catalog domain models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Image shown when an item has no usable image reference.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x400/f3f4f6/9ca3af?text=No+Image";

/// Clothing category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    #[serde(rename = "t-shirt")]
    #[strum(serialize = "t-shirt")]
    TShirt,
    Jeans,
    Shoes,
    Dress,
    Jacket,
    Accessories,
}

impl Category {
    /// Stock images used when an item is added without an image reference.
    ///
    /// Entries may repeat; a repeated image is picked more often.
    pub fn sample_images(self) -> &'static [&'static str] {
        match self {
            Category::TShirt => &[
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1581655353564-df123a1eb820?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=400&h=400&fit=crop",
            ],
            Category::Jeans => &[
                "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1473966968600-fa801b869a1a?w=400&h=400&fit=crop",
            ],
            Category::Shoes => &[
                "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1560769629-975ec94e6a86?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=400&h=400&fit=crop",
            ],
            Category::Dress => &[
                "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1496747611176-843222e1e57c?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=400&h=400&fit=crop",
            ],
            Category::Jacket => &[
                "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400&h=400&fit=crop",
            ],
            Category::Accessories => &[
                "https://images.unsplash.com/photo-1523170335258-f5ed11844a49?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=400&fit=crop",
                "https://images.unsplash.com/photo-1523170335258-f5ed11844a49?w=400&h=400&fit=crop",
            ],
        }
    }
}

/// The eleven named colors an item can have.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Blue,
    Red,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Gray,
    Brown,
}

/// Style of an item, also used as the style hint for outfit generation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StyleType {
    Casual,
    Formal,
    Sport,
    Party,
}

/// A single piece of clothing in the catalog.
///
/// Field names on the wire follow the persisted layout: `id`, `name`,
/// `category`, `color`, `imageUrl`, `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub color: Color,
    /// Resolved image reference. Empty only for records persisted without one.
    #[serde(default)]
    pub image_url: String,
    #[serde(rename = "type")]
    pub style: StyleType,
}

impl ClothingItem {
    /// Image to display, falling back to the placeholder.
    pub fn display_image_url(&self) -> &str {
        if self.image_url.trim().is_empty() {
            PLACEHOLDER_IMAGE_URL
        } else {
            &self.image_url
        }
    }
}

/// A clothing item before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingDraft {
    pub name: String,
    pub category: Category,
    pub color: Color,
    #[serde(rename = "type")]
    pub style: StyleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ClothingDraft {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        color: Color,
        style: StyleType,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            color,
            style,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// The caller-supplied image reference, if it is non-blank.
    pub fn provided_image_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Turns the draft into a catalog item with the given id and image.
    pub fn into_item(self, id: i64, image_url: String) -> ClothingItem {
        ClothingItem {
            id,
            name: self.name,
            category: self.category,
            color: self.color,
            image_url,
            style: self.style,
        }
    }
}
