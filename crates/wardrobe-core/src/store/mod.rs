//! Wardrobe state, its transition function, and persistence.

pub mod persistence;
mod state;
mod wardrobe_store;

pub use persistence::{KeyValueStore, MemoryKeyValueStore};
pub use state::{StateSlice, WardrobeAction, WardrobeState};
pub use wardrobe_store::{RECENT_OUTFIT_LIMIT, WardrobeStats, WardrobeStore};
