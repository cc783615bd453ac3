//! Statistics Calculator Module
//! Groups zinc content by food group and computes descriptive statistics.

use crate::data::ZincRow;
use statrs::statistics::{Data, Median, Statistics};
use std::collections::BTreeMap;

/// Zinc statistics for a single food group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMedian {
    pub group: String,
    pub count: usize,
    pub median: f64,
    pub mean: f64,
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Median of `values`, NaN when empty.
    pub fn median(values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        Data::new(values.to_vec()).median()
    }

    /// Collect zinc values per food group, groups sorted by name.
    pub fn values_by_group(rows: &[ZincRow]) -> BTreeMap<String, Vec<f64>> {
        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for row in rows {
            groups.entry(row.group.clone()).or_default().push(row.value);
        }
        groups
    }

    /// Median zinc content for every food group, sorted by group name.
    pub fn zinc_medians(rows: &[ZincRow]) -> Vec<GroupMedian> {
        Self::values_by_group(rows)
            .into_iter()
            .map(|(group, values)| {
                let stats = GroupMedian {
                    count: values.len(),
                    median: Self::median(&values),
                    mean: values.iter().mean(),
                    group,
                };
                log::debug!(
                    "{}: n={} median={:.3} mean={:.3}",
                    stats.group,
                    stats.count,
                    stats.median,
                    stats.mean
                );
                stats
            })
            .collect()
    }
}
