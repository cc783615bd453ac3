//! Nutrient Dump Loader Module
//! Reads the newline-delimited JSON export of the USDA nutrient database.

use super::model::FoodRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("No data loaded")]
    NoData,
}

/// Loads food records, one JSON object per line.
pub struct NutrientLoader {
    records: Vec<FoodRecord>,
}

impl NutrientLoader {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Load every record in `path`. Any bad line fails the whole load.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoaderError> {
        let path = path.as_ref();
        self.records.clear();

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoaderError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoaderError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        self.records = Self::read_records(BufReader::new(file), path)?;
        if self.records.is_empty() {
            return Err(LoaderError::NoData);
        }

        log::info!("Loaded {} food records from {}", self.records.len(), path.display());
        Ok(())
    }

    fn read_records(reader: impl BufRead, path: &Path) -> Result<Vec<FoodRecord>, LoaderError> {
        let mut records = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoaderError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let record = serde_json::from_str::<FoodRecord>(&line)
                .map_err(|source| LoaderError::Parse {
                    line: idx + 1,
                    source,
                })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Get the number of loaded records.
    pub fn get_row_count(&self) -> usize {
        self.records.len()
    }

    /// Records from the last successful load.
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }
}
