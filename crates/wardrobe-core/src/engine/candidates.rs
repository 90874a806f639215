//! Prioritized candidate selection.
//!
//! A pick is described as an ordered list of predicates over a candidate
//! pool. Tiers are evaluated top-down; the first tier with at least one
//! matching item wins, and one of its items is chosen uniformly at random.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::ClothingItem;

type Predicate<'a> = Box<dyn Fn(&ClothingItem) -> bool + 'a>;

/// Ordered fallback chain of candidate filters.
pub struct CandidateTiers<'a> {
    tiers: Vec<Predicate<'a>>,
}

impl<'a> CandidateTiers<'a> {
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Adds a tier below the existing ones.
    pub fn then(mut self, predicate: impl Fn(&ClothingItem) -> bool + 'a) -> Self {
        self.tiers.push(Box::new(predicate));
        self
    }

    /// Adds a final tier that accepts every candidate.
    pub fn or_any(self) -> Self {
        self.then(|_| true)
    }

    /// Index of the first tier with a match, and its matches.
    pub fn resolve<'c>(&self, pool: &[&'c ClothingItem]) -> Option<(usize, Vec<&'c ClothingItem>)> {
        self.tiers.iter().enumerate().find_map(|(index, predicate)| {
            let matches: Vec<&ClothingItem> =
                pool.iter().copied().filter(|item| predicate(item)).collect();
            (!matches.is_empty()).then_some((index, matches))
        })
    }

    /// Uniform pick from the first non-empty tier.
    pub fn pick<'c, R: Rng + ?Sized>(
        &self,
        pool: &[&'c ClothingItem],
        rng: &mut R,
    ) -> Option<&'c ClothingItem> {
        let (_, matches) = self.resolve(pool)?;
        matches.choose(rng).copied()
    }
}

impl Default for CandidateTiers<'_> {
    fn default() -> Self {
        Self::new()
    }
}
