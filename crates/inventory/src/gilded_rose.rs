//! The inventory updater.

use gilded_rose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::{Item, seed_items};
use crate::quality;

/// Owns the shop's item list and advances it one day at a time.
///
/// Each item is classified once, at construction; `update_quality` then
/// dispatches on the stored category. Items are never added or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    categories: Vec<Category>,
    day: u64,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        let categories = items.iter().map(|i| Category::classify(&i.name)).collect();
        Self {
            items,
            categories,
            day: 0,
        }
    }

    /// Updater over the default seed stock.
    pub fn with_seed_items() -> Self {
        Self::new(seed_items())
    }

    /// Build from a JSON array of `{"name", "sellIn", "quality"}` records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("item records: {e}")))?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn category_of(&self, index: usize) -> Option<Category> {
        self.categories.get(index).copied()
    }

    /// Items paired with their category, in list order.
    pub fn entries(&self) -> impl Iterator<Item = (&Item, Category)> + '_ {
        self.items.iter().zip(self.categories.iter().copied())
    }

    /// Number of days advanced since construction.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Advance every item by exactly one day, in list order.
    pub fn update_quality(&mut self) -> &mut Self {
        self.day += 1;
        tracing::debug!(day = self.day, items = self.items.len(), "updating quality");

        for (item, category) in self.items.iter_mut().zip(self.categories.iter().copied()) {
            let (sell_in, quality) = (item.sell_in, item.quality);
            category.age(item);
            tracing::trace!(
                name = %item.name,
                %category,
                sell_in_before = sell_in,
                sell_in_after = item.sell_in,
                quality_before = quality,
                quality_after = item.quality,
                "item aged"
            );
        }

        self
    }

    pub fn advance_days(&mut self, days: u32) -> &mut Self {
        for _ in 0..days {
            self.update_quality();
        }
        self
    }

    /// Verify every non-legendary item's quality is within [0, 50].
    ///
    /// Records loaded from outside may start out of range; they snap into range
    /// on the first update, so this only holds after at least one day.
    pub fn check_invariants(&self) -> DomainResult<()> {
        for (item, category) in self.entries() {
            if category.is_bounded() && !quality::is_within_bounds(item.quality) {
                return Err(DomainError::invariant(format!(
                    "quality of {:?} is {} (expected {}..={})",
                    item.name,
                    item.quality,
                    quality::MINIMUM_QUALITY,
                    quality::MAXIMUM_QUALITY
                )));
            }
        }
        Ok(())
    }
}

impl Default for GildedRose {
    fn default() -> Self {
        Self::with_seed_items()
    }
}
