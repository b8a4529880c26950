//! Inventory domain module.
//!
//! This crate contains the daily aging rules for shop items, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod gilded_rose;
pub mod item;
pub mod quality;

pub use category::Category;
pub use gilded_rose::GildedRose;
pub use item::{Item, names, seed_items};
pub use quality::{
    LEGENDARY_QUALITY, MAXIMUM_QUALITY, MINIMUM_QUALITY, RARE_DOUBLE_INCREASE_DAYS,
    ULTRA_RARE_DOUBLE_INCREASE_DAYS, ULTRA_RARE_TRIPLE_INCREASE_DAYS,
};
