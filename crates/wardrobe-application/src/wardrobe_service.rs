//! Wardrobe use cases.
//!
//! Coordinates the recommendation engine, the assembly board, and the store
//! behind a single lock so every operation observes and commits one
//! consistent state.

use std::sync::{Arc, Mutex, MutexGuard};

use rand::SeedableRng;
use rand::rngs::StdRng;
use wardrobe_core::assembly::AssemblyBoard;
use wardrobe_core::catalog::{CatalogFilter, ClothingDraft, ClothingItem, StyleType};
use wardrobe_core::engine;
use wardrobe_core::outfit::{Outfit, WeatherMode};
use wardrobe_core::store::{RECENT_OUTFIT_LIMIT, WardrobeState, WardrobeStats, WardrobeStore};
use wardrobe_core::{Result, WardrobeError};

/// Service for the wardrobe UI surface.
pub struct WardrobeService {
    store: Arc<Mutex<WardrobeStore>>,
    rng: Mutex<StdRng>,
    default_style: Option<StyleType>,
}

impl WardrobeService {
    pub fn new(store: WardrobeStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Service whose outfit generation draws from `rng`.
    pub fn with_rng(store: WardrobeStore, rng: StdRng) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            rng: Mutex::new(rng),
            default_style: None,
        }
    }

    /// Style hint applied when a generation request carries none.
    pub fn with_default_style(mut self, style: Option<StyleType>) -> Self {
        self.default_style = style;
        self
    }

    fn store(&self) -> Result<MutexGuard<'_, WardrobeStore>> {
        self.store
            .lock()
            .map_err(|_| WardrobeError::storage("wardrobe store lock poisoned"))
    }

    // ============================================================================
    // Outfits
    // ============================================================================

    /// Generates an outfit for the current weather and records it.
    ///
    /// Generation and commit run under one lock, so the outfit always comes
    /// from the catalog as it is when it is recorded.
    ///
    /// # Arguments
    ///
    /// * `style_hint` - Style to aim for; falls back to the configured default
    ///
    /// # Returns
    ///
    /// - `Ok(Outfit)`: The recorded outfit, now at the head of the history
    /// - `Err`: `GenerationImpossible` when the catalog has fewer than two items
    pub fn generate_smart_outfit(&self, style_hint: Option<StyleType>) -> Result<Outfit> {
        let mut store = self.store()?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| WardrobeError::storage("generator rng lock poisoned"))?;

        let hint = style_hint.or(self.default_style);
        let generated = engine::generate(store.clothes(), store.weather(), hint, &mut *rng)
            .inspect_err(|e| tracing::warn!("Outfit generation failed: {}", e))?;

        tracing::debug!(
            "Generated {} outfit with {} items",
            generated.style,
            generated.items.len()
        );
        Ok(store.generate_outfit(generated.items))
    }

    /// Commits a manually assembled outfit. The board is emptied on success.
    ///
    /// Fails with `InsufficientItems` when fewer than two slots are filled;
    /// neither the board nor the history changes then.
    pub fn create_manual_outfit(&self, board: &mut AssemblyBoard) -> Result<Outfit> {
        let mut store = self.store()?;
        board.commit(&mut store)
    }

    /// Outfit history, most recent first.
    pub fn outfits(&self) -> Result<Vec<Outfit>> {
        Ok(self.store()?.outfits().to_vec())
    }

    /// The newest outfits, as shown on the dashboard.
    pub fn recent_outfits(&self) -> Result<Vec<Outfit>> {
        Ok(self.store()?.recent_outfits(RECENT_OUTFIT_LIMIT).to_vec())
    }

    /// Liked outfits that still exist, in history order.
    pub fn liked_outfits(&self) -> Result<Vec<Outfit>> {
        let store = self.store()?;
        Ok(store
            .outfits()
            .iter()
            .filter(|outfit| store.is_liked(outfit.id))
            .cloned()
            .collect())
    }

    pub fn like_outfit(&self, outfit_id: i64) -> Result<()> {
        self.store()?.like_outfit(outfit_id);
        Ok(())
    }

    pub fn dislike_outfit(&self, outfit_id: i64) -> Result<()> {
        self.store()?.dislike_outfit(outfit_id);
        Ok(())
    }

    /// Flips the like flag and returns the new value.
    pub fn toggle_like(&self, outfit_id: i64) -> Result<bool> {
        let mut store = self.store()?;
        if store.is_liked(outfit_id) {
            store.dislike_outfit(outfit_id);
            Ok(false)
        } else {
            store.like_outfit(outfit_id);
            Ok(true)
        }
    }

    // ============================================================================
    // Catalog
    // ============================================================================

    /// Adds a catalog item, filling in a sample image when none is given.
    pub fn add_item(&self, draft: ClothingDraft) -> Result<ClothingItem> {
        Ok(self.store()?.add_clothing_item(draft))
    }

    /// Removes a catalog item. Returns whether it existed.
    ///
    /// Outfits that contain the item keep their copy.
    pub fn remove_item(&self, id: i64) -> Result<bool> {
        Ok(self.store()?.remove_clothing_item(id))
    }

    /// Catalog items that pass `filter`, in catalog order.
    pub fn catalog(&self, filter: &CatalogFilter) -> Result<Vec<ClothingItem>> {
        let store = self.store()?;
        Ok(filter.apply(store.clothes()).into_iter().cloned().collect())
    }

    // ============================================================================
    // Weather and summaries
    // ============================================================================

    pub fn weather(&self) -> Result<WeatherMode> {
        Ok(self.store()?.weather())
    }

    pub fn set_weather(&self, mode: WeatherMode) -> Result<()> {
        self.store()?.set_weather(mode);
        Ok(())
    }

    /// Switches summer/winter and returns the new mode.
    pub fn toggle_weather(&self) -> Result<WeatherMode> {
        let mut store = self.store()?;
        let next = store.weather().toggled();
        store.set_weather(next);
        Ok(next)
    }

    pub fn stats(&self) -> Result<WardrobeStats> {
        Ok(self.store()?.stats())
    }

    pub fn snapshot(&self) -> Result<WardrobeState> {
        Ok(self.store()?.state().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wardrobe_core::assembly::OutfitSlot;
    use wardrobe_core::catalog::{Category, Color};
    use wardrobe_core::clock::ManualClock;
    use wardrobe_core::store::MemoryKeyValueStore;

    fn service_with(storage: Arc<MemoryKeyValueStore>) -> WardrobeService {
        let store = WardrobeStore::open_with(
            storage,
            Arc::new(ManualClock::at_millis(1_000_000)),
            StdRng::seed_from_u64(2),
        );
        WardrobeService::with_rng(store, StdRng::seed_from_u64(9))
    }

    fn service() -> WardrobeService {
        service_with(Arc::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn test_generate_records_outfit() {
        let service = service();

        let outfit = service.generate_smart_outfit(None).unwrap();
        let ids: HashSet<i64> = outfit.items.iter().map(|item| item.id).collect();

        assert!(outfit.items.len() >= 2);
        assert_eq!(ids.len(), outfit.items.len());
        assert_eq!(outfit.count_category(Category::Jacket), 0);
        assert_eq!(service.outfits().unwrap()[0], outfit);
    }

    #[test]
    fn test_generate_in_winter_has_one_jacket() {
        let service = service().with_default_style(Some(StyleType::Formal));
        assert_eq!(service.toggle_weather().unwrap(), WeatherMode::Winter);

        let outfit = service.generate_smart_outfit(None).unwrap();
        assert_eq!(outfit.count_category(Category::Jacket), 1);
    }

    #[test]
    fn test_generate_on_tiny_catalog_fails_without_mutation() {
        let service = service();
        for item in service.catalog(&CatalogFilter::new()).unwrap() {
            if item.id != 1 {
                service.remove_item(item.id).unwrap();
            }
        }

        let err = service.generate_smart_outfit(None).unwrap_err();
        assert!(err.is_generation_impossible());
        assert!(service.outfits().unwrap().is_empty());
    }

    #[test]
    fn test_manual_outfit() {
        let service = service();
        let catalog = service.catalog(&CatalogFilter::new()).unwrap();
        let mut board = AssemblyBoard::new();

        board.place(OutfitSlot::Top, catalog[0].clone());
        assert!(service.create_manual_outfit(&mut board).unwrap_err().is_insufficient_items());

        board.place(OutfitSlot::Bottom, catalog[1].clone());
        let outfit = service.create_manual_outfit(&mut board).unwrap();
        assert_eq!(outfit.items.len(), 2);
        assert!(board.is_empty());
    }

    #[test]
    fn test_toggle_like_and_liked_outfits() {
        let service = service();
        let outfit = service.generate_smart_outfit(Some(StyleType::Casual)).unwrap();

        assert!(service.toggle_like(outfit.id).unwrap());
        service.like_outfit(987).unwrap();
        assert_eq!(service.liked_outfits().unwrap(), vec![outfit.clone()]);
        assert_eq!(service.stats().unwrap().liked_outfits, 2);

        assert!(!service.toggle_like(outfit.id).unwrap());
        assert!(service.liked_outfits().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_filter_and_add() {
        let service = service();
        let added = service
            .add_item(ClothingDraft::new(
                "Purple Scarf",
                Category::Accessories,
                Color::Purple,
                StyleType::Party,
            ))
            .unwrap();

        let purple = service
            .catalog(&CatalogFilter::new().color(Color::Purple))
            .unwrap();
        let ids: Vec<i64> = purple.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![11, added.id]);

        let found = service.catalog(&CatalogFilter::new().search("scarf")).unwrap();
        assert_eq!(found, vec![added]);
    }

    #[test]
    fn test_snapshot_reflects_storage() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let service = service_with(storage.clone());
        service.set_weather(WeatherMode::Winter).unwrap();

        let reopened = service_with(storage);
        assert_eq!(reopened.snapshot().unwrap(), service.snapshot().unwrap());
        assert_eq!(reopened.weather().unwrap(), WeatherMode::Winter);
    }
}
