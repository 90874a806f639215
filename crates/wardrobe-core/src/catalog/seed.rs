//! Starter catalog used when no stored catalog is available.

use super::model::{Category, ClothingItem, Color, StyleType};

type SeedRow = (i64, &'static str, Category, Color, &'static str, StyleType);

const SEED_ROWS: [SeedRow; 15] = [
    (
        1,
        "Classic White T-Shirt",
        Category::TShirt,
        Color::White,
        "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        2,
        "Blue Denim Jeans",
        Category::Jeans,
        Color::Blue,
        "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        3,
        "White Sneakers",
        Category::Shoes,
        Color::White,
        "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        4,
        "Black Leather Jacket",
        Category::Jacket,
        Color::Black,
        "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400&h=400&fit=crop",
        StyleType::Formal,
    ),
    (
        5,
        "Red Summer Dress",
        Category::Dress,
        Color::Red,
        "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        6,
        "Orange Polo Shirt",
        Category::TShirt,
        Color::Orange,
        "https://images.unsplash.com/photo-1581655353564-df123a1eb820?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        7,
        "Black Formal Shirt",
        Category::TShirt,
        Color::Black,
        "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=400&h=400&fit=crop",
        StyleType::Formal,
    ),
    (
        8,
        "Gray Hoodie",
        Category::Jacket,
        Color::Gray,
        "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        9,
        "Brown Leather Boots",
        Category::Shoes,
        Color::Brown,
        "https://images.unsplash.com/photo-1560769629-975ec94e6a86?w=400&h=400&fit=crop",
        StyleType::Formal,
    ),
    (
        10,
        "Green Summer Dress",
        Category::Dress,
        Color::Green,
        "https://images.unsplash.com/photo-1496747611176-843222e1e57c?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        11,
        "Purple Evening Dress",
        Category::Dress,
        Color::Purple,
        "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=400&h=400&fit=crop",
        StyleType::Party,
    ),
    (
        12,
        "Yellow Sport Shirt",
        Category::TShirt,
        Color::Yellow,
        "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=400&h=400&fit=crop",
        StyleType::Sport,
    ),
    (
        13,
        "Pink Blouse",
        Category::TShirt,
        Color::Pink,
        "https://images.unsplash.com/photo-1581655353564-df123a1eb820?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        14,
        "Black Skinny Jeans",
        Category::Jeans,
        Color::Black,
        "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=400&h=400&fit=crop",
        StyleType::Casual,
    ),
    (
        15,
        "Red High Heels",
        Category::Shoes,
        Color::Red,
        "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=400&h=400&fit=crop",
        StyleType::Party,
    ),
];

/// The fifteen-item starter catalog, ids 1 through 15.
pub fn seed_catalog() -> Vec<ClothingItem> {
    SEED_ROWS
        .iter()
        .map(|&(id, name, category, color, image_url, style)| ClothingItem {
            id,
            name: name.to_string(),
            category,
            color,
            image_url: image_url.to_string(),
            style,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_seed_has_fifteen_unique_items() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 15);

        let ids: HashSet<i64> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 15);
        assert_eq!(catalog.first().unwrap().id, 1);
        assert_eq!(catalog.last().unwrap().id, 15);
    }

    #[test]
    fn test_seed_covers_every_category_but_accessories() {
        let catalog = seed_catalog();
        for category in Category::iter().filter(|c| *c != Category::Accessories) {
            assert!(
                catalog.iter().any(|item| item.category == category),
                "seed has no {category}"
            );
        }
        assert_eq!(
            catalog
                .iter()
                .filter(|item| item.category == Category::Jacket)
                .count(),
            2
        );
    }
}
