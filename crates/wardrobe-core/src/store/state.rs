//! Wardrobe state and its transition function.

use serde::{Deserialize, Serialize};

use crate::catalog::{ClothingItem, seed_catalog};
use crate::outfit::{Outfit, WeatherMode};

/// The independently persisted parts of [`WardrobeState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateSlice {
    Clothes,
    Outfits,
    LikedOutfits,
    Weather,
}

/// Every mutation the wardrobe accepts.
///
/// Actions carry fully resolved values (ids, timestamps, image references),
/// which keeps [`WardrobeState::apply`] deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WardrobeAction {
    AddClothing(ClothingItem),
    RemoveClothing(i64),
    /// Prepends a finished outfit to the history.
    CommitOutfit(Outfit),
    LikeOutfit(i64),
    DislikeOutfit(i64),
    SetWeather(WeatherMode),
}

impl WardrobeAction {
    /// The slice this action writes to.
    pub fn slice(&self) -> StateSlice {
        match self {
            WardrobeAction::AddClothing(_) | WardrobeAction::RemoveClothing(_) => {
                StateSlice::Clothes
            }
            WardrobeAction::CommitOutfit(_) => StateSlice::Outfits,
            WardrobeAction::LikeOutfit(_) | WardrobeAction::DislikeOutfit(_) => {
                StateSlice::LikedOutfits
            }
            WardrobeAction::SetWeather(_) => StateSlice::Weather,
        }
    }
}

/// The authoritative wardrobe collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeState {
    pub clothes: Vec<ClothingItem>,
    /// Most recent first.
    pub outfits: Vec<Outfit>,
    /// Outfit ids, no duplicates. Ids need not refer to an existing outfit.
    pub liked_outfits: Vec<i64>,
    pub weather: WeatherMode,
}

impl Default for WardrobeState {
    fn default() -> Self {
        Self {
            clothes: seed_catalog(),
            outfits: Vec::new(),
            liked_outfits: Vec::new(),
            weather: WeatherMode::default(),
        }
    }
}

impl WardrobeState {
    /// Applies `action` in place and reports which slice changed.
    ///
    /// Total: unknown ids on remove/like/dislike leave the state as it was.
    pub fn apply(&mut self, action: WardrobeAction) -> StateSlice {
        let slice = action.slice();

        match action {
            WardrobeAction::AddClothing(item) => {
                self.clothes.push(item);
            }
            WardrobeAction::RemoveClothing(id) => {
                self.clothes.retain(|item| item.id != id);
            }
            WardrobeAction::CommitOutfit(outfit) => {
                self.outfits.insert(0, outfit);
            }
            WardrobeAction::LikeOutfit(id) => {
                if !self.liked_outfits.contains(&id) {
                    self.liked_outfits.push(id);
                }
            }
            WardrobeAction::DislikeOutfit(id) => {
                self.liked_outfits.retain(|liked| *liked != id);
            }
            WardrobeAction::SetWeather(mode) => {
                self.weather = mode;
            }
        }

        slice
    }

    pub fn is_liked(&self, outfit_id: i64) -> bool {
        self.liked_outfits.contains(&outfit_id)
    }

    pub fn find_item(&self, id: i64) -> Option<&ClothingItem> {
        self.clothes.iter().find(|item| item.id == id)
    }
}
