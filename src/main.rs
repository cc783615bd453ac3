//! USDA Nutrient Analysis
//!
//! Reads `nutrients.json` from the working directory, writes amino acid,
//! zinc and food group tables as CSV, and plots median zinc content per
//! food group.

mod app;
mod charts;
mod config;
mod data;
mod export;
mod stats;

use app::AnalysisApp;
use chrono::Local;
use config::AnalysisConfig;
use data::LoaderError;
use std::process::ExitCode;

const LOAD_FAILURE_MESSAGE: &str =
    "No valid file found. Please place nutrients.json into the same folder this program resides";

/// Fixed console message for a run that failed to load its input.
fn failure_message(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<LoaderError>().map(|_| LOAD_FAILURE_MESSAGE)
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("\n");
    println!("####### Welcome to USDA Food Database-Nutrient Information Analysis  #######");
    println!("\n");
    println!("Starts at: {}", timestamp());

    let mut app = AnalysisApp::new(AnalysisConfig::default());
    match app.run() {
        Ok(summary) => {
            log::info!(
                "{} records, {} with zinc, {} food groups charted",
                summary.record_count,
                summary.zinc_rows,
                summary.food_groups
            );
            log::info!("Chart saved to {}", summary.chart_path.display());
            println!("Ends at: {}", timestamp());
            println!("\n");
            println!("#################### End of program, Thank you for using! ####################");
            println!("\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(message) = failure_message(&e) {
                println!("{message}");
            }
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_load_failure_has_fixed_message() {
        let err = anyhow::Error::new(LoaderError::NotFound {
            path: PathBuf::from("nutrients.json"),
        });
        assert_eq!(failure_message(&err), Some(LOAD_FAILURE_MESSAGE));

        let err = anyhow::Error::new(LoaderError::NoData);
        assert_eq!(failure_message(&err), Some(LOAD_FAILURE_MESSAGE));
    }

    #[test]
    fn test_other_failures_have_no_fixed_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Err::<(), _>(io).context("writing CSV tables").unwrap_err();
        assert_eq!(failure_message(&err), None);
    }
}
