//! Nutrient Analysis Application
//! Runs load -> extract -> export -> chart for one input file.

use crate::charts::ZincChartRenderer;
use crate::config::AnalysisConfig;
use crate::data::{NutrientLoader, NutrientProcessor, NutrientTables};
use crate::export::CsvExporter;
use crate::stats::{GroupMedian, StatsCalculator};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;

const LOADING_NOTICE: &str =
    "This may take a while, please grab a coffee. Average wait time: 2 - 6 mins.";

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub record_count: usize,
    pub zinc_rows: usize,
    pub food_groups: usize,
    pub chart_path: PathBuf,
}

/// Main analysis pipeline.
pub struct AnalysisApp {
    config: AnalysisConfig,
    loader: NutrientLoader,
    processor: NutrientProcessor,
}

impl AnalysisApp {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            loader: NutrientLoader::new(),
            processor: NutrientProcessor::default(),
        }
    }

    /// Run the whole pipeline. A load failure aborts before any output is written.
    pub fn run(&mut self) -> Result<RunSummary> {
        let started = Instant::now();

        let tables = self.prepare()?;
        self.export_tables(&tables)?;

        let medians = StatsCalculator::zinc_medians(&tables.zinc);
        let chart_path = self.plot_zinc_chart(&medians)?;

        log::info!("Analysis finished in {:.2?}", started.elapsed());

        Ok(RunSummary {
            record_count: tables.foods.len(),
            zinc_rows: tables.zinc.len(),
            food_groups: medians.len(),
            chart_path,
        })
    }

    /// Load the input file and build the derived tables.
    pub fn prepare(&mut self) -> Result<NutrientTables> {
        println!("{LOADING_NOTICE}");
        println!("Loading data... ");
        self.loader.load(&self.config.input_path)?;

        println!("Preprocessing data... ");
        log::info!(
            "Scanning {} records for {} amino acids",
            self.loader.get_row_count(),
            self.processor.amino_acids().len()
        );
        let tables = self.processor.extract(self.loader.records());
        log::info!(
            "Extracted {} food rows, {} zinc rows, longest amino acid column {}",
            tables.foods.len(),
            tables.zinc.len(),
            tables.amino_acids.max_len()
        );
        println!("Good news, preprocessing completed successfully! ");

        Ok(tables)
    }

    /// Write the three CSV tables.
    pub fn export_tables(&self, tables: &NutrientTables) -> Result<()> {
        CsvExporter::write_all(tables, &self.config).context("writing CSV tables")
    }

    /// Render the median zinc chart, then open it when configured to.
    pub fn plot_zinc_chart(&self, medians: &[GroupMedian]) -> Result<PathBuf> {
        println!("Now plotting bar chart ...");

        let path = self.config.zinc_chart();
        ZincChartRenderer::render(medians, &path, self.config.chart_size)
            .context("rendering zinc chart")?;

        if self.config.show_chart {
            if let Err(e) = ZincChartRenderer::show(&path) {
                log::warn!("Could not display chart: {e}");
            }
        }

        Ok(path)
    }
}
