//! Nutrient Processor Module
//! Builds the amino acid, zinc and food tables in one pass over the records.

use super::model::FoodRecord;
use crate::config::{AMINO_ACIDS, ZINC_NUTRIENT};
use std::collections::HashMap;

/// Foods containing a given amino acid.
#[derive(Debug, Clone, PartialEq)]
pub struct AminoAcidColumn {
    pub amino_acid: String,
    pub foods: Vec<String>,
}

/// Ragged table: one independently sized column per amino acid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AminoAcidTable {
    columns: Vec<AminoAcidColumn>,
}

impl AminoAcidTable {
    /// Columns in amino acid order.
    pub fn columns(&self) -> &[AminoAcidColumn] {
        &self.columns
    }

    /// Foods for one amino acid, `None` if it is not tracked.
    pub fn foods(&self, amino_acid: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|c| c.amino_acid == amino_acid)
            .map(|c| c.foods.as_slice())
    }

    /// Length of the longest column.
    pub fn max_len(&self) -> usize {
        self.columns.iter().map(|c| c.foods.len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZincRow {
    /// Position of the source record
    pub record: usize,
    pub value: f64,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodRow {
    /// Position of the source record
    pub record: usize,
    pub id: String,
    pub food: String,
    pub group: String,
    pub manufacturer: String,
}

/// All derived tables from one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientTables {
    pub amino_acids: AminoAcidTable,
    pub zinc: Vec<ZincRow>,
    pub foods: Vec<FoodRow>,
}

/// Extracts amino acid and zinc content from food records.
#[derive(Debug, Clone)]
pub struct NutrientProcessor {
    amino_acids: Vec<String>,
    zinc_nutrient: String,
}

impl Default for NutrientProcessor {
    fn default() -> Self {
        Self::new(&AMINO_ACIDS, ZINC_NUTRIENT)
    }
}

impl NutrientProcessor {
    pub fn new<S: AsRef<str>>(amino_acids: &[S], zinc_nutrient: &str) -> Self {
        Self {
            amino_acids: amino_acids.iter().map(|s| s.as_ref().to_string()).collect(),
            zinc_nutrient: zinc_nutrient.to_string(),
        }
    }

    pub fn amino_acids(&self) -> &[String] {
        &self.amino_acids
    }

    /// Build all three tables.
    ///
    /// Every record gets a food row. Each nutrient list is scanned once: the
    /// first positive entry per amino acid adds the food to that column and
    /// the first positive zinc entry adds a zinc row.
    pub fn extract(&self, records: &[FoodRecord]) -> NutrientTables {
        let column_index: HashMap<&str, usize> = self
            .amino_acids
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let mut columns: Vec<AminoAcidColumn> = self
            .amino_acids
            .iter()
            .map(|name| AminoAcidColumn {
                amino_acid: name.clone(),
                foods: Vec::new(),
            })
            .collect();
        let mut zinc = Vec::new();
        let mut foods = Vec::with_capacity(records.len());

        // Duplicate names in the acid list share one column index.
        let wanted = column_index.len() + 1;

        for (record_idx, record) in records.iter().enumerate() {
            foods.push(FoodRow {
                record: record_idx,
                id: record.id().to_string(),
                food: record.display_name().to_string(),
                group: record.group.clone(),
                manufacturer: record.manufacturer.clone(),
            });

            let mut matched = vec![false; columns.len()];
            let mut zinc_found = false;
            let mut found = 0;

            for nutrient in &record.nutrients {
                if !nutrient.is_present() {
                    continue;
                }

                if nutrient.name == self.zinc_nutrient {
                    if !zinc_found {
                        zinc.push(ZincRow {
                            record: record_idx,
                            value: nutrient.value,
                            group: record.group.clone(),
                        });
                        zinc_found = true;
                        found += 1;
                    }
                } else if let Some(&col) = column_index.get(nutrient.name.as_str()) {
                    if !matched[col] {
                        columns[col].foods.push(record.display_name().to_string());
                        matched[col] = true;
                        found += 1;
                    }
                }

                if found == wanted {
                    break;
                }
            }
        }

        let amino_acids = AminoAcidTable { columns };
        for acid in &self.amino_acids {
            let count = amino_acids.foods(acid).map_or(0, <[String]>::len);
            log::debug!("{acid}: {count} foods");
        }

        NutrientTables {
            amino_acids,
            zinc,
            foods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FoodMeta, FoodName, Nutrient};

    fn record(name: &str, group: &str, id: &str, nutrients: &[(&str, f64)]) -> FoodRecord {
        FoodRecord {
            name: FoodName {
                long: name.to_string(),
            },
            group: group.to_string(),
            manufacturer: String::new(),
            meta: FoodMeta {
                ndb_no: id.to_string(),
            },
            nutrients: nutrients
                .iter()
                .map(|(n, v)| Nutrient {
                    name: n.to_string(),
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_almond_scenario() {
        let mut almond = record(
            "Almond",
            "Nuts",
            "1",
            &[("Tryptophan", 0.2), ("Zinc, Zn", 3.1)],
        );
        almond.manufacturer = "X".to_string();

        let tables = NutrientProcessor::default().extract(&[almond]);

        assert_eq!(tables.amino_acids.foods("Tryptophan").unwrap(), ["Almond"]);
        assert!(tables.amino_acids.foods("Lysine").unwrap().is_empty());
        assert_eq!(
            tables.zinc,
            vec![ZincRow {
                record: 0,
                value: 3.1,
                group: "Nuts".to_string(),
            }]
        );
        assert_eq!(
            tables.foods,
            vec![FoodRow {
                record: 0,
                id: "1".to_string(),
                food: "Almond".to_string(),
                group: "Nuts".to_string(),
                manufacturer: "X".to_string(),
            }]
        );
    }

    #[test]
    fn test_zero_and_negative_values_excluded() {
        let records = vec![
            record("Water", "Beverages", "1", &[("Lysine", 0.0), ("Zinc, Zn", 0.0)]),
            record("Odd", "Other", "2", &[("Lysine", -1.0)]),
            record("Beef", "Beef Products", "3", &[("Lysine", 2.5), ("Zinc, Zn", 4.0)]),
        ];

        let tables = NutrientProcessor::default().extract(&records);

        assert_eq!(tables.amino_acids.foods("Lysine").unwrap(), ["Beef"]);
        assert_eq!(tables.zinc.len(), 1);
        assert_eq!(tables.zinc[0].record, 2);
        assert_eq!(tables.foods.len(), 3);
    }

    #[test]
    fn test_duplicate_entries_counted_once() {
        let records = vec![record(
            "Egg",
            "Dairy and Egg Products",
            "1",
            &[
                ("Leucine", 0.0),
                ("Leucine", 1.1),
                ("Leucine", 1.2),
                ("Zinc, Zn", 1.3),
                ("Zinc, Zn", 9.9),
            ],
        )];

        let tables = NutrientProcessor::default().extract(&records);

        assert_eq!(tables.amino_acids.foods("Leucine").unwrap(), ["Egg"]);
        assert_eq!(tables.zinc.len(), 1);
        assert_eq!(tables.zinc[0].value, 1.3);
    }

    #[test]
    fn test_columns_are_ragged_and_ordered() {
        let records = vec![
            record("A", "G1", "1", &[("Valine", 1.0), ("Serine", 1.0)]),
            record("B", "G1", "2", &[("Valine", 1.0)]),
            record("C", "G2", "3", &[("Valine", 1.0)]),
        ];

        let tables = NutrientProcessor::default().extract(&records);
        let table = &tables.amino_acids;

        assert_eq!(table.columns().len(), 18);
        assert_eq!(table.columns()[0].amino_acid, "Tryptophan");
        assert_eq!(table.foods("Valine").unwrap(), ["A", "B", "C"]);
        assert_eq!(table.foods("Serine").unwrap(), ["A"]);
        assert_eq!(table.max_len(), 3);
        assert!(table.foods("Zinc, Zn").is_none());
    }

    #[test]
    fn test_food_rows_for_every_record() {
        let records = vec![
            record("Plain", "Spices and Herbs", "10", &[]),
            record("Salt", "Spices and Herbs", "11", &[("Sodium, Na", 38758.0)]),
        ];

        let tables = NutrientProcessor::default().extract(&records);

        assert_eq!(tables.foods.len(), 2);
        assert_eq!(tables.foods[1].record, 1);
        assert_eq!(tables.foods[1].id, "11");
        assert!(tables.zinc.is_empty());
        assert_eq!(tables.amino_acids.max_len(), 0);
    }

    #[test]
    fn test_injected_names() {
        let records = vec![record(
            "Oyster",
            "Finfish and Shellfish Products",
            "1",
            &[("Glycine", 0.5), ("Zinc", 90.0), ("Zinc, Zn", 1.0)],
        )];

        let processor = NutrientProcessor::new(&["Glycine"], "Zinc");
        let tables = processor.extract(&records);

        assert_eq!(processor.amino_acids(), ["Glycine"]);
        assert_eq!(tables.amino_acids.columns().len(), 1);
        assert_eq!(tables.zinc[0].value, 90.0);
    }

    #[test]
    fn test_each_food_appears_once_per_column() {
        let records: Vec<FoodRecord> = (0..20)
            .map(|i| {
                let value = if i % 3 == 0 { 0.0 } else { i as f64 / 10.0 };
                record(
                    &format!("Food {i}"),
                    "Mixed",
                    &i.to_string(),
                    &[("Histidine", value), ("Histidine", 1.0)],
                )
            })
            .collect();

        let tables = NutrientProcessor::default().extract(&records);
        let foods = tables.amino_acids.foods("Histidine").unwrap();

        // The second entry is always positive, so every record qualifies once.
        assert_eq!(foods.len(), 20);
        let mut unique = foods.to_vec();
        unique.dedup();
        assert_eq!(unique.len(), 20);
    }
}
