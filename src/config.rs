//! Analysis Configuration
//! Fixed nutrient names, file names and chart settings.

use std::path::{Path, PathBuf};

/// Amino acids tracked in the nutrient dump (USDA nutrient codes 501 to 518).
/// Names match the `name` strings used in `nutrients.json`.
pub const AMINO_ACIDS: [&str; 18] = [
    "Tryptophan",
    "Threonine",
    "Isoleucine",
    "Leucine",
    "Lysine",
    "Methionine",
    "Cystine",
    "Phenylalanine",
    "Tyrosine",
    "Valine",
    "Arginine",
    "Histidine",
    "Alanine",
    "Aspartic acid",
    "Glutamic acid",
    "Glycine",
    "Proline",
    "Serine",
];

/// Nutrient name used for zinc content.
pub const ZINC_NUTRIENT: &str = "Zinc, Zn";

pub const INPUT_FILE: &str = "nutrients.json";
pub const AMINO_ACID_CSV: &str = "amino_acid_food.csv";
pub const ZINC_CSV: &str = "zinc_FoodGroup.csv";
pub const FOOD_GROUP_CSV: &str = "FoodGroup.csv";
pub const ZINC_CHART: &str = "zinc_content.png";

pub const CHART_TITLE: &str = "Median Zinc content by Food Groups";
pub const CHART_X_LABEL: &str = "USDA Food Groups";
pub const CHART_Y_LABEL: &str = "Zinc Content in mg";

/// 16x10 inches at 100 DPI
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1600, 1000);

/// Where the analysis reads from and writes to.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub chart_size: (u32, u32),
    /// Open the rendered chart in the system image viewer.
    pub show_chart: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl AnalysisConfig {
    /// Read `nutrients.json` from `dir` and write every output next to it.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input_path: dir.join(INPUT_FILE),
            output_dir: dir.to_path_buf(),
            chart_size: DEFAULT_CHART_SIZE,
            show_chart: true,
        }
    }

    pub fn amino_acid_csv(&self) -> PathBuf {
        self.output_dir.join(AMINO_ACID_CSV)
    }

    pub fn zinc_csv(&self) -> PathBuf {
        self.output_dir.join(ZINC_CSV)
    }

    pub fn food_group_csv(&self) -> PathBuf {
        self.output_dir.join(FOOD_GROUP_CSV)
    }

    pub fn zinc_chart(&self) -> PathBuf {
        self.output_dir.join(ZINC_CHART)
    }
}
