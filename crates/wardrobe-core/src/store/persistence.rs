//! Key-value persistence contract for wardrobe snapshots.
//!
//! Each slice of [`WardrobeState`] lives under its own fixed key as a JSON
//! document. Reads that fail or hold malformed data fall back to the slice's
//! default; writes that fail are logged. Neither ever reaches the caller.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::state::{StateSlice, WardrobeState};
use crate::catalog::seed_catalog;
use crate::error::{Result, WardrobeError};
use crate::outfit::WeatherMode;

pub const CLOTHES_KEY: &str = "wardrobe_clothes";
pub const OUTFITS_KEY: &str = "wardrobe_outfits";
pub const LIKED_OUTFITS_KEY: &str = "wardrobe_likedOutfits";
pub const WEATHER_KEY: &str = "wardrobe_weather";

impl StateSlice {
    /// Storage key holding this slice.
    pub fn key(self) -> &'static str {
        match self {
            StateSlice::Clothes => CLOTHES_KEY,
            StateSlice::Outfits => OUTFITS_KEY,
            StateSlice::LikedOutfits => LIKED_OUTFITS_KEY,
            StateSlice::Weather => WEATHER_KEY,
        }
    }
}

/// Durable string storage addressed by key.
///
/// Implementations must make `set` synchronous: once it returns `Ok`, a
/// subsequent `get` (including from a new process) sees the value.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local [`KeyValueStore`].
///
/// Reads and writes can be made to fail on demand to exercise the
/// fallback and degraded (non-persistent) modes.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates raw values, e.g. to simulate corrupt storage.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        if let Ok(mut map) = store.entries.lock() {
            map.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        }
        store
    }

    /// Makes every subsequent `get` return a storage error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set` return a storage error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(WardrobeError::storage(format!("read of '{}' rejected", key)));
        }
        let entries = self
            .entries
            .lock()
            .map_err(|e| WardrobeError::storage(format!("memory store poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(WardrobeError::storage(format!(
                "write to '{}' rejected",
                key
            )));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| WardrobeError::storage(format!("memory store poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and decodes one key. `Ok(None)` means the key is absent.
pub fn read_value<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match storage.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_value<T: Serialize + ?Sized>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

fn load_or_default<T, F>(storage: &dyn KeyValueStore, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match read_value(storage, key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!("No stored value for '{}', using default", key);
            default()
        }
        Err(e) => {
            tracing::warn!("Failed to load '{}', using default: {}", key, e);
            default()
        }
    }
}

/// Loads every slice, substituting defaults for missing or unreadable ones.
///
/// Stored liked ids may repeat (older snapshots appended blindly); they are
/// collapsed to their first occurrence.
pub fn load_state(storage: &dyn KeyValueStore) -> WardrobeState {
    let mut liked_outfits: Vec<i64> = load_or_default(storage, LIKED_OUTFITS_KEY, Vec::new);
    let before = liked_outfits.len();
    let mut seen = HashSet::new();
    liked_outfits.retain(|id| seen.insert(*id));
    if liked_outfits.len() != before {
        tracing::warn!(
            "Dropped {} duplicate liked outfit ids",
            before - liked_outfits.len()
        );
    }

    WardrobeState {
        clothes: load_or_default(storage, CLOTHES_KEY, seed_catalog),
        outfits: load_or_default(storage, OUTFITS_KEY, Vec::new),
        liked_outfits,
        weather: load_or_default(storage, WEATHER_KEY, WeatherMode::default),
    }
}

/// Writes one slice of `state` under its key.
pub fn save_slice(
    storage: &dyn KeyValueStore,
    state: &WardrobeState,
    slice: StateSlice,
) -> Result<()> {
    let key = slice.key();
    match slice {
        StateSlice::Clothes => write_value(storage, key, &state.clothes),
        StateSlice::Outfits => write_value(storage, key, &state.outfits),
        StateSlice::LikedOutfits => write_value(storage, key, &state.liked_outfits),
        StateSlice::Weather => write_value(storage, key, &state.weather),
    }
}

/// Like [`save_slice`], but failures are logged instead of returned.
///
/// Returns whether the write succeeded.
pub fn persist_slice(storage: &dyn KeyValueStore, state: &WardrobeState, slice: StateSlice) -> bool {
    match save_slice(storage, state, slice) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(
                "Failed to persist '{}', continuing in memory: {}",
                slice.key(),
                e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state::WardrobeAction;

    #[test]
    fn test_empty_storage_loads_defaults() {
        let storage = MemoryKeyValueStore::new();
        let state = load_state(&storage);
        assert_eq!(state, WardrobeState::default());
    }

    #[test]
    fn test_malformed_slice_falls_back_alone() {
        let storage = MemoryKeyValueStore::with_entries([
            (CLOTHES_KEY, "{not json"),
            (LIKED_OUTFITS_KEY, "[3, 4]"),
            (WEATHER_KEY, "\"winter\""),
        ]);

        let state = load_state(&storage);
        assert_eq!(state.clothes, seed_catalog());
        assert_eq!(state.liked_outfits, vec![3, 4]);
        assert_eq!(state.weather, WeatherMode::Winter);
    }

    #[test]
    fn test_duplicate_liked_ids_are_collapsed() {
        let storage = MemoryKeyValueStore::with_entries([(LIKED_OUTFITS_KEY, "[5, 7, 5, 5]")]);

        let mut state = load_state(&storage);
        assert_eq!(state.liked_outfits, vec![5, 7]);

        state.apply(WardrobeAction::LikeOutfit(5));
        assert_eq!(state.liked_outfits, vec![5, 7]);

        state.apply(WardrobeAction::DislikeOutfit(5));
        assert!(!state.is_liked(5));
    }

    #[test]
    fn test_read_failure_loads_defaults() {
        let storage = MemoryKeyValueStore::with_entries([
            (WEATHER_KEY, "\"winter\""),
            (LIKED_OUTFITS_KEY, "[1]"),
        ]);
        storage.set_fail_reads(true);

        let state = load_state(&storage);
        assert_eq!(state, WardrobeState::default());
        assert!(storage.get(WEATHER_KEY).is_err());
    }

    #[test]
    fn test_unknown_enum_value_is_malformed() {
        let storage = MemoryKeyValueStore::with_entries([(WEATHER_KEY, "\"autumn\"")]);
        assert_eq!(load_state(&storage).weather, WeatherMode::Summer);
    }

    #[test]
    fn test_round_trip_every_slice() {
        let storage = MemoryKeyValueStore::new();
        let mut state = WardrobeState::default();
        state.apply(WardrobeAction::RemoveClothing(5));
        state.apply(WardrobeAction::LikeOutfit(11));
        state.apply(WardrobeAction::SetWeather(WeatherMode::Winter));

        for slice in [
            StateSlice::Clothes,
            StateSlice::Outfits,
            StateSlice::LikedOutfits,
            StateSlice::Weather,
        ] {
            save_slice(&storage, &state, slice).unwrap();
        }

        assert_eq!(load_state(&storage), state);
        assert_eq!(storage.raw(WEATHER_KEY).as_deref(), Some("\"winter\""));
    }

    #[test]
    fn test_persist_slice_swallows_write_failure() {
        let storage = MemoryKeyValueStore::new();
        storage.set_fail_writes(true);

        let state = WardrobeState::default();
        assert!(!persist_slice(&storage, &state, StateSlice::Weather));
        assert!(storage.raw(WEATHER_KEY).is_none());
    }
}
