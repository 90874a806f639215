//! The wardrobe store handle.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::persistence::{self, KeyValueStore};
use super::state::{WardrobeAction, WardrobeState};
use crate::catalog::{CatalogStats, ClothingDraft, ClothingItem, PLACEHOLDER_IMAGE_URL};
use crate::clock::{Clock, IdSequence, SystemClock};
use crate::outfit::{Outfit, WeatherMode};

/// Number of outfits shown in the "recent outfits" strip.
pub const RECENT_OUTFIT_LIMIT: usize = 6;

/// Counts for the dashboard and sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardrobeStats {
    pub catalog: CatalogStats,
    pub outfits: usize,
    pub liked_outfits: usize,
}

/// Single owner of the wardrobe state.
///
/// Resolves ids, timestamps, and fallback images, hands the resulting
/// [`WardrobeAction`] to [`WardrobeState::apply`], then writes the changed
/// slice to storage. Storage failures never fail an operation; the store
/// keeps serving from memory.
pub struct WardrobeStore {
    state: WardrobeState,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    item_ids: IdSequence,
    outfit_ids: IdSequence,
    rng: StdRng,
}

impl WardrobeStore {
    /// Loads state from `storage` using the wall clock and an OS-seeded RNG.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::open_with(storage, Arc::new(SystemClock), StdRng::from_entropy())
    }

    /// Loads state from `storage` with an explicit clock and RNG.
    ///
    /// # Arguments
    ///
    /// * `storage` - Backend holding the four snapshot keys
    /// * `clock` - Source of ids and outfit timestamps
    /// * `rng` - Used to pick sample images for drafts without one
    ///
    /// Never fails: every slice that is missing, unreadable, or malformed
    /// starts from its default.
    pub fn open_with(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        let state = persistence::load_state(storage.as_ref());

        // Items copied into outfits keep their ids after removal from the
        // catalog, so those are reserved as well.
        let item_ids = IdSequence::after(
            state
                .clothes
                .iter()
                .chain(state.outfits.iter().flat_map(|outfit| outfit.items.iter()))
                .map(|item| item.id),
        );
        let outfit_ids = IdSequence::after(state.outfits.iter().map(|outfit| outfit.id));

        tracing::debug!(
            "Wardrobe loaded: {} items, {} outfits, {} liked, weather={}",
            state.clothes.len(),
            state.outfits.len(),
            state.liked_outfits.len(),
            state.weather
        );

        Self {
            state,
            storage,
            clock,
            item_ids,
            outfit_ids,
            rng,
        }
    }

    // ============================================================================
    // Read surface
    // ============================================================================

    /// The full in-memory state.
    pub fn state(&self) -> &WardrobeState {
        &self.state
    }

    /// Catalog items in insertion order.
    pub fn clothes(&self) -> &[ClothingItem] {
        &self.state.clothes
    }

    /// Outfit history, most recent first.
    pub fn outfits(&self) -> &[Outfit] {
        &self.state.outfits
    }

    /// Liked outfit ids in the order they were liked.
    pub fn liked_outfits(&self) -> &[i64] {
        &self.state.liked_outfits
    }

    pub fn weather(&self) -> WeatherMode {
        self.state.weather
    }

    pub fn is_liked(&self, outfit_id: i64) -> bool {
        self.state.is_liked(outfit_id)
    }

    pub fn find_item(&self, id: i64) -> Option<&ClothingItem> {
        self.state.find_item(id)
    }

    /// The newest `limit` outfits.
    pub fn recent_outfits(&self, limit: usize) -> &[Outfit] {
        let end = limit.min(self.state.outfits.len());
        &self.state.outfits[..end]
    }

    pub fn stats(&self) -> WardrobeStats {
        WardrobeStats {
            catalog: CatalogStats::from_items(&self.state.clothes),
            outfits: self.state.outfits.len(),
            liked_outfits: self.state.liked_outfits.len(),
        }
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Adds a draft to the catalog and returns the stored item.
    ///
    /// The draft is not validated. Without an image reference, one of the
    /// category's sample images is picked at random.
    ///
    /// # Arguments
    ///
    /// * `draft` - The user-entered fields
    ///
    /// # Returns
    ///
    /// The appended item, carrying a fresh id strictly greater than any id
    /// issued or loaded so far.
    pub fn add_clothing_item(&mut self, draft: ClothingDraft) -> ClothingItem {
        let image_url = match draft.provided_image_url() {
            Some(url) => url.to_string(),
            None => draft
                .category
                .sample_images()
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(PLACEHOLDER_IMAGE_URL)
                .to_string(),
        };
        let id = self.item_ids.next(self.clock.now());
        let item = draft.into_item(id, image_url);

        tracing::debug!("Adding clothing item {} '{}'", item.id, item.name);
        self.dispatch(WardrobeAction::AddClothing(item.clone()));
        item
    }

    /// Removes an item by id. Returns `false` (and changes nothing in
    /// memory) when no such item exists.
    pub fn remove_clothing_item(&mut self, id: i64) -> bool {
        let existed = self.state.find_item(id).is_some();
        if !existed {
            tracing::debug!("Remove of unknown clothing item {}", id);
        }
        self.dispatch(WardrobeAction::RemoveClothing(id));
        existed
    }

    /// Records an outfit built from `items` at the head of the history.
    ///
    /// Does not enforce a minimum size; the engine and the assembly board do.
    ///
    /// # Arguments
    ///
    /// * `items` - Value copies; later catalog edits do not affect them
    ///
    /// # Returns
    ///
    /// The new outfit with a fresh id and the current timestamp.
    pub fn generate_outfit(&mut self, items: Vec<ClothingItem>) -> Outfit {
        let created_at = self.clock.now();
        let id = self.outfit_ids.next(created_at);
        let outfit = Outfit::new(id, items, created_at);

        tracing::debug!(
            "Committing outfit {} with {} items",
            outfit.id,
            outfit.items.len()
        );
        self.dispatch(WardrobeAction::CommitOutfit(outfit.clone()));
        outfit
    }

    /// Marks an outfit as liked. Liking twice, or liking an unknown id, is
    /// accepted and leaves a single entry.
    pub fn like_outfit(&mut self, outfit_id: i64) {
        self.dispatch(WardrobeAction::LikeOutfit(outfit_id));
    }

    /// Clears the like flag. A no-op when the id is not liked.
    pub fn dislike_outfit(&mut self, outfit_id: i64) {
        self.dispatch(WardrobeAction::DislikeOutfit(outfit_id));
    }

    pub fn set_weather(&mut self, mode: WeatherMode) {
        tracing::debug!("Weather set to {}", mode);
        self.dispatch(WardrobeAction::SetWeather(mode));
    }

    fn dispatch(&mut self, action: WardrobeAction) {
        let slice = self.state.apply(action);
        persistence::persist_slice(self.storage.as_ref(), &self.state, slice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Color, StyleType};
    use crate::clock::ManualClock;
    use crate::store::persistence::{
        CLOTHES_KEY, LIKED_OUTFITS_KEY, MemoryKeyValueStore, OUTFITS_KEY, WEATHER_KEY,
    };

    fn store_at(storage: Arc<MemoryKeyValueStore>, millis: i64) -> (WardrobeStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at_millis(millis));
        let store = WardrobeStore::open_with(storage, clock.clone(), StdRng::seed_from_u64(7));
        (store, clock)
    }

    fn draft(name: &str) -> ClothingDraft {
        ClothingDraft::new(name, Category::Jeans, Color::Blue, StyleType::Casual)
    }

    #[test]
    fn test_add_assigns_clock_id_and_persists() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, _clock) = store_at(storage.clone(), 1_700_000_000_000);

        let item = store.add_clothing_item(draft("Light Jeans").with_image_url("https://x/y.jpg"));

        assert_eq!(item.id, 1_700_000_000_000);
        assert_eq!(item.image_url, "https://x/y.jpg");
        assert_eq!(store.clothes().len(), 16);
        assert_eq!(store.clothes().last(), Some(&item));

        let persisted: Vec<ClothingItem> =
            serde_json::from_str(&storage.raw(CLOTHES_KEY).unwrap()).unwrap();
        assert_eq!(persisted, store.clothes());
    }

    #[test]
    fn test_add_without_image_uses_category_sample() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, _clock) = store_at(storage, 1_000_000);

        let item = store.add_clothing_item(draft("Plain Jeans"));
        assert!(Category::Jeans.sample_images().contains(&item.image_url.as_str()));
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, _clock) = store_at(storage, 1_000_000);

        let a = store.add_clothing_item(draft("A"));
        let b = store.add_clothing_item(draft("B"));
        assert!(b.id > a.id);
    }

    #[test]
    fn test_ids_never_reuse_loaded_ids() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        // Clock behind the seed ids
        let (mut store, _clock) = store_at(storage, 3);

        let item = store.add_clothing_item(draft("Early"));
        assert_eq!(item.id, 16);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, _clock) = store_at(storage, 1_000);

        assert!(store.remove_clothing_item(3));
        let after_first = store.clothes().to_vec();
        assert!(!store.remove_clothing_item(3));
        assert_eq!(store.clothes(), after_first.as_slice());
        assert_eq!(store.clothes().len(), 14);
    }

    #[test]
    fn test_outfit_keeps_items_after_removal() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, clock) = store_at(storage.clone(), 50_000);

        let items = vec![store.clothes()[0].clone(), store.clothes()[1].clone()];
        let first = store.generate_outfit(items.clone());
        clock.advance_millis(10);
        let second = store.generate_outfit(items);

        store.remove_clothing_item(1);

        assert_eq!(store.outfits()[0].id, second.id);
        assert_eq!(store.outfits()[1].id, first.id);
        assert!(store.outfits()[1].contains_item(1));
        assert!(storage.raw(OUTFITS_KEY).is_some());
    }

    #[test]
    fn test_like_dislike_cycle_persists() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, _clock) = store_at(storage.clone(), 1_000);

        store.like_outfit(42);
        store.like_outfit(42);
        assert_eq!(store.liked_outfits(), &[42]);
        assert_eq!(storage.raw(LIKED_OUTFITS_KEY).as_deref(), Some("[42]"));

        store.dislike_outfit(42);
        store.dislike_outfit(42);
        assert!(!store.is_liked(42));
        assert_eq!(storage.raw(LIKED_OUTFITS_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_reopen_reproduces_state() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, clock) = store_at(storage.clone(), 2_000_000);

        let added = store.add_clothing_item(draft("Reload Jeans"));
        clock.advance_millis(1);
        let outfit = store.generate_outfit(vec![added.clone(), store.clothes()[0].clone()]);
        store.like_outfit(outfit.id);
        store.set_weather(WeatherMode::Winter);

        let (reopened, _clock) = store_at(storage.clone(), 2_000_000);
        assert_eq!(reopened.state(), store.state());
        assert_eq!(storage.raw(WEATHER_KEY).as_deref(), Some("\"winter\""));
    }

    #[test]
    fn test_read_failure_opens_with_defaults() {
        let storage = Arc::new(MemoryKeyValueStore::with_entries([
            (WEATHER_KEY, "\"winter\""),
            (LIKED_OUTFITS_KEY, "[9]"),
        ]));
        storage.set_fail_reads(true);

        let (mut store, _clock) = store_at(storage.clone(), 1_000);
        assert_eq!(store.clothes().len(), 15);
        assert_eq!(store.weather(), WeatherMode::Summer);
        assert!(store.outfits().is_empty());
        assert!(store.liked_outfits().is_empty());

        // Writes still go through and replace the unreadable values
        store.set_weather(WeatherMode::Winter);
        assert_eq!(storage.raw(WEATHER_KEY).as_deref(), Some("\"winter\""));
        store.like_outfit(3);
        assert_eq!(storage.raw(LIKED_OUTFITS_KEY).as_deref(), Some("[3]"));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, _clock) = store_at(storage.clone(), 1_000);
        storage.set_fail_writes(true);

        store.set_weather(WeatherMode::Winter);
        store.remove_clothing_item(1);

        assert_eq!(store.weather(), WeatherMode::Winter);
        assert_eq!(store.clothes().len(), 14);
        assert!(storage.raw(WEATHER_KEY).is_none());
    }

    #[test]
    fn test_recent_outfits_and_stats() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let (mut store, clock) = store_at(storage, 10_000);

        for _ in 0..8 {
            let items = store.clothes()[..2].to_vec();
            store.generate_outfit(items);
            clock.advance_millis(1);
        }
        store.like_outfit(store.outfits()[0].id);

        assert_eq!(store.recent_outfits(RECENT_OUTFIT_LIMIT).len(), 6);
        assert_eq!(store.recent_outfits(RECENT_OUTFIT_LIMIT)[0].id, store.outfits()[0].id);

        let stats = store.stats();
        assert_eq!(stats.catalog.total_items, 15);
        assert_eq!(stats.outfits, 8);
        assert_eq!(stats.liked_outfits, 1);
    }
}
