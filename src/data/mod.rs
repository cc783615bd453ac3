//! Data module - Nutrient dump loading and table extraction

mod loader;
mod model;
mod processor;

pub use loader::{LoaderError, NutrientLoader};
pub use processor::{AminoAcidTable, FoodRow, NutrientProcessor, NutrientTables, ZincRow};

#[cfg(test)]
pub use model::{FoodMeta, FoodName, FoodRecord, Nutrient};
