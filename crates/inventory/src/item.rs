use serde::{Deserialize, Serialize};

use gilded_rose_core::ValueObject;

use crate::quality::LEGENDARY_QUALITY;

/// Names of the items the shop knows about.
///
/// Category membership is decided by exact match against these.
pub mod names {
    pub const DEXTERITY_VEST: &str = "+5 Dexterity Vest";
    pub const AGED_BRIE: &str = "Aged Brie";
    pub const ELIXIR_OF_THE_MONGOOSE: &str = "Elixir of the Mongoose";
    pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
    pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
    pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";
}

/// A shop item.
///
/// `sell_in` counts the days left to sell the item and may go negative.
/// Serialized with camelCase keys (`{"name", "sellIn", "quality"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// The shop's default stock: one item per category, plus a second common item.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(names::DEXTERITY_VEST, 10, 20),
        Item::new(names::AGED_BRIE, 2, 0),
        Item::new(names::ELIXIR_OF_THE_MONGOOSE, 5, 7),
        Item::new(names::SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(names::BACKSTAGE_PASSES, 15, 20),
        Item::new(names::CONJURED_MANA_CAKE, 3, 6),
    ]
}
