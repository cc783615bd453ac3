//! CSV Export Module
//! Converts the derived tables into Polars DataFrames and writes them as CSV.

use crate::config::AnalysisConfig;
use crate::data::{AminoAcidTable, FoodRow, NutrientTables, ZincRow};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the leading row index column in every CSV.
pub const INDEX_COLUMN: &str = "index";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the derived tables to CSV files.
pub struct CsvExporter;

impl CsvExporter {
    /// Amino acid table, short columns padded with nulls at the bottom.
    pub fn amino_acid_frame(table: &AminoAcidTable) -> Result<DataFrame, ExportError> {
        let height = table.max_len();
        let mut columns = Vec::with_capacity(table.columns().len() + 1);
        columns.push(Column::new(INDEX_COLUMN.into(), Self::index(0..height)));

        for column in table.columns() {
            let padded: Vec<Option<String>> = column
                .foods
                .iter()
                .cloned()
                .map(Some)
                .chain(std::iter::repeat(None))
                .take(height)
                .collect();
            columns.push(Column::new(column.amino_acid.as_str().into(), padded));
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Zinc table indexed by source record position.
    pub fn zinc_frame(rows: &[ZincRow]) -> Result<DataFrame, ExportError> {
        let index = Self::index(rows.iter().map(|r| r.record));
        let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
        let groups: Vec<&str> = rows.iter().map(|r| r.group.as_str()).collect();

        let df = DataFrame::new(vec![
            Column::new(INDEX_COLUMN.into(), index),
            Column::new("value".into(), values),
            Column::new("group".into(), groups),
        ])?;

        Ok(df)
    }

    /// Food table indexed by source record position.
    pub fn food_frame(rows: &[FoodRow]) -> Result<DataFrame, ExportError> {
        let index = Self::index(rows.iter().map(|r| r.record));
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        let foods: Vec<&str> = rows.iter().map(|r| r.food.as_str()).collect();
        let groups: Vec<&str> = rows.iter().map(|r| r.group.as_str()).collect();
        let manufacturers: Vec<&str> = rows.iter().map(|r| r.manufacturer.as_str()).collect();

        let df = DataFrame::new(vec![
            Column::new(INDEX_COLUMN.into(), index),
            Column::new("ID".into(), ids),
            Column::new("food".into(), foods),
            Column::new("group".into(), groups),
            Column::new("manufacturer".into(), manufacturers),
        ])?;

        Ok(df)
    }

    /// Write `df` to `path`, comma separated with a header row.
    pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), ExportError> {
        let mut file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .finish(df)?;

        log::info!("Wrote {} rows to {}", df.height(), path.display());
        Ok(())
    }

    /// Write all three tables to their configured paths.
    pub fn write_all(tables: &NutrientTables, config: &AnalysisConfig) -> Result<(), ExportError> {
        let path = config.amino_acid_csv();
        Self::write_csv(&mut Self::amino_acid_frame(&tables.amino_acids)?, &path)?;
        println!(
            "A table of amino acids found in different food is saved as {}",
            Self::file_name(&path)
        );

        let path = config.zinc_csv();
        Self::write_csv(&mut Self::zinc_frame(&tables.zinc)?, &path)?;
        println!(
            "The zinc value in food belongs to different food groups is saved as {}",
            Self::file_name(&path)
        );

        let path = config.food_group_csv();
        Self::write_csv(&mut Self::food_frame(&tables.foods)?, &path)?;
        println!(
            "A table of food names categorized to different food groups is saved as {}",
            Self::file_name(&path)
        );

        Ok(())
    }

    fn index(positions: impl Iterator<Item = usize>) -> Vec<u64> {
        positions.map(|p| p as u64).collect()
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
