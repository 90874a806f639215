use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wardrobe_core::catalog::{Category, ClothingItem, Color, StyleType, seed_catalog};
use wardrobe_core::engine::generate;
use wardrobe_core::outfit::WeatherMode;

fn count(items: &[ClothingItem], category: Category) -> usize {
    items.iter().filter(|item| item.category == category).count()
}

#[test]
fn winter_casual_on_seed_catalog() {
    let catalog = seed_catalog();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1000 {
        let outfit = generate(&catalog, WeatherMode::Winter, Some(StyleType::Casual), &mut rng)
            .expect("seed catalog always generates");
        let items = &outfit.items;

        let ids: HashSet<i64> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), items.len(), "duplicate item in {:?}", ids);
        assert_eq!(items.len(), 3);
        assert_eq!(count(items, Category::Jacket), 1);
        assert_eq!(count(items, Category::TShirt), 1);
        assert_eq!(count(items, Category::Shoes), 1);

        let jacket = &items[0];
        let tshirt = &items[1];
        match jacket.color {
            // white is the only winter-colored t-shirt that matches black
            Color::Black => assert_eq!(tshirt.id, 1),
            Color::Gray => assert!([1, 7].contains(&tshirt.id)),
            other => panic!("unexpected jacket color {other}"),
        }
    }
}

#[test]
fn summer_on_seed_catalog_never_has_jackets() {
    let catalog = seed_catalog();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let outfit = generate(&catalog, WeatherMode::Summer, None, &mut rng).unwrap();
        assert_eq!(count(&outfit.items, Category::Jacket), 0);
        // a summer-colored dress (green) is always available, so it wins
        assert_eq!(outfit.items[0].id, 10);
        assert_eq!(count(&outfit.items, Category::Shoes), 1);
        assert_eq!(outfit.items.len(), 2);
    }
}

#[test]
fn one_item_catalog_is_impossible() {
    let catalog: Vec<ClothingItem> = seed_catalog().into_iter().take(1).collect();
    let mut rng = StdRng::seed_from_u64(1);

    for weather in [WeatherMode::Summer, WeatherMode::Winter] {
        let err = generate(&catalog, weather, None, &mut rng).unwrap_err();
        assert!(err.is_generation_impossible());
        assert!(err.is_user_facing());
    }
}

#[test]
fn every_hint_resolves() {
    let catalog = seed_catalog();
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = HashSet::new();

    for _ in 0..200 {
        let outfit = generate(&catalog, WeatherMode::Winter, None, &mut rng).unwrap();
        seen.insert(outfit.style);
    }
    assert_eq!(seen.len(), 4);
}
