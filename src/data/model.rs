//! Food Record Model
//! Typed view of one line of the USDA nutrient dump.

use serde::Deserialize;

/// One food item. Keys not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodRecord {
    pub name: FoodName,
    pub group: String,
    pub manufacturer: String,
    pub meta: FoodMeta,
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodName {
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodMeta {
    pub ndb_no: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub value: f64,
}

impl FoodRecord {
    /// Display name used in every derived table.
    pub fn display_name(&self) -> &str {
        &self.name.long
    }

    pub fn id(&self) -> &str {
        &self.meta.ndb_no
    }
}

impl Nutrient {
    /// Only strictly positive measurements count as "contains".
    pub fn is_present(&self) -> bool {
        self.value > 0.0
    }
}
