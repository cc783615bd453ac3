//! Stats module - Per-group zinc statistics

mod calculator;

pub use calculator::{GroupMedian, StatsCalculator};
