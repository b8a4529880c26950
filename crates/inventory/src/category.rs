//! Item categories and the one-day aging rule of each.

use serde::{Deserialize, Serialize};

use crate::item::{Item, names};
use crate::quality::{
    self, MINIMUM_QUALITY, RARE_DOUBLE_INCREASE_DAYS, ULTRA_RARE_DOUBLE_INCREASE_DAYS,
    ULTRA_RARE_TRIPLE_INCREASE_DAYS,
};

/// Aging category of an item, derived from its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    Common,
    /// Gains quality with age.
    Rare,
    /// Gains quality faster as the sell-by date nears, worthless afterwards.
    UltraRare,
    /// Never changes.
    Legendary,
    /// Loses quality twice as fast as common items.
    Conjured,
}

impl Category {
    /// Classify an item by exact name. Unknown names are `Common`.
    pub fn classify(name: &str) -> Self {
        match name {
            names::AGED_BRIE => Category::Rare,
            names::BACKSTAGE_PASSES => Category::UltraRare,
            names::SULFURAS => Category::Legendary,
            names::CONJURED_MANA_CAKE => Category::Conjured,
            _ => Category::Common,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Common => "common",
            Category::Rare => "rare",
            Category::UltraRare => "ultra_rare",
            Category::Legendary => "legendary",
            Category::Conjured => "conjured",
        }
    }

    /// Whether items of this category are held to the [0, 50] quality bounds.
    pub fn is_bounded(self) -> bool {
        !matches!(self, Category::Legendary)
    }

    /// Advance `item` by one day under this category's rule.
    pub(crate) fn age(self, item: &mut Item) {
        match self {
            // Open with the product team; legendary items stay as they are.
            Category::Legendary => return,
            Category::Rare => {
                let by = if item.sell_in <= RARE_DOUBLE_INCREASE_DAYS { 2 } else { 1 };
                item.quality = quality::increase(item.quality, by);
            }
            Category::UltraRare => {
                // Only the concert pass collapses after the concert.
                if item.name == names::BACKSTAGE_PASSES && item.sell_in <= 0 {
                    item.quality = MINIMUM_QUALITY;
                } else {
                    let by = if item.sell_in <= ULTRA_RARE_TRIPLE_INCREASE_DAYS {
                        3
                    } else if item.sell_in <= ULTRA_RARE_DOUBLE_INCREASE_DAYS {
                        2
                    } else {
                        1
                    };
                    item.quality = quality::increase(item.quality, by);
                }
            }
            Category::Conjured => {
                item.quality = quality::decrease(item.quality, 2);
            }
            Category::Common => {
                let by = if item.sell_in <= 0 { 2 } else { 1 };
                item.quality = quality::decrease(item.quality, by);
            }
        }

        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
