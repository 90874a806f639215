//! Manual outfit assembly.
//!
//! Users drop catalog items into four fixed slots. Slots exist only while
//! assembling; a committed outfit is a plain list of items.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::catalog::{Category, ClothingItem};
use crate::error::{MIN_OUTFIT_ITEMS, Result, WardrobeError};
use crate::outfit::Outfit;
use crate::store::WardrobeStore;

/// An assembly slot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutfitSlot {
    Top,
    Bottom,
    Shoes,
    Outerwear,
}

impl OutfitSlot {
    pub fn label(self) -> &'static str {
        match self {
            OutfitSlot::Top => "Top",
            OutfitSlot::Bottom => "Bottom",
            OutfitSlot::Shoes => "Shoes",
            OutfitSlot::Outerwear => "Outerwear",
        }
    }

    /// Category listed as the source for this slot.
    ///
    /// Not enforced: any item may be placed in any slot.
    pub fn suggested_category(self) -> Category {
        match self {
            OutfitSlot::Top => Category::TShirt,
            OutfitSlot::Bottom => Category::Jeans,
            OutfitSlot::Shoes => Category::Shoes,
            OutfitSlot::Outerwear => Category::Jacket,
        }
    }

    /// Catalog items of this slot's suggested category.
    pub fn candidates(self, catalog: &[ClothingItem]) -> Vec<&ClothingItem> {
        let category = self.suggested_category();
        catalog
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }
}

/// An item sitting in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPlacement {
    pub slot: OutfitSlot,
    pub item: ClothingItem,
}

/// Slot-to-item mapping under construction.
///
/// Placements keep drop order; re-filling a slot moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyBoard {
    placements: Vec<SlotPlacement>,
}

impl AssemblyBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `item` into `slot`, returning the item it displaced.
    pub fn place(&mut self, slot: OutfitSlot, item: ClothingItem) -> Option<ClothingItem> {
        let previous = self.clear_slot(slot);
        self.placements.push(SlotPlacement { slot, item });
        previous
    }

    pub fn clear_slot(&mut self, slot: OutfitSlot) -> Option<ClothingItem> {
        let index = self.placements.iter().position(|p| p.slot == slot)?;
        Some(self.placements.remove(index).item)
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }

    pub fn item_in(&self, slot: OutfitSlot) -> Option<&ClothingItem> {
        self.placements
            .iter()
            .find(|p| p.slot == slot)
            .map(|p| &p.item)
    }

    pub fn placements(&self) -> &[SlotPlacement] {
        &self.placements
    }

    pub fn occupied(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Checks the minimum slot count and returns the slot-free items.
    pub fn validate(&self) -> Result<Vec<ClothingItem>> {
        if self.occupied() < MIN_OUTFIT_ITEMS {
            return Err(WardrobeError::insufficient_items(self.occupied()));
        }
        Ok(self.placements.iter().map(|p| p.item.clone()).collect())
    }

    /// Validates the board and records the outfit in `store`.
    ///
    /// On failure neither the store nor the board changes. On success the
    /// board is emptied.
    pub fn commit(&mut self, store: &mut WardrobeStore) -> Result<Outfit> {
        let items = self.validate()?;
        let outfit = store.generate_outfit(items);
        self.placements.clear();
        tracing::debug!("Manual outfit {} created", outfit.id);
        Ok(outfit)
    }
}
