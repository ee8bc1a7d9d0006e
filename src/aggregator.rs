use crate::error::{MeasureError, Result};
use crate::stats::{filtered_mean_with, OutlierRule};
use crate::table::Table;

/// Reduces a collection of equally shaped runs to one table of
/// outlier-filtered means.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    pub threshold: f64,
    pub rule: OutlierRule,
}

impl Default for Aggregator {
    fn default() -> Self {
        Aggregator {
            threshold: 2.0,
            rule: OutlierRule::default(),
        }
    }
}

impl Aggregator {
    pub fn new(threshold: f64, rule: OutlierRule) -> Aggregator {
        Aggregator { threshold, rule }
    }

    /// Aggregate `runs` cell by cell.
    ///
    /// # Arguments
    /// * `runs` - The dependent tables of every run, all of the same shape.
    ///
    /// # Returns
    /// A `(categories, samples)` table where each cell is the filtered mean of
    /// the values at that position across all runs.
    pub fn aggregate(&self, runs: &[Table]) -> Result<Table> {
        let first = runs.first().ok_or(MeasureError::NoRuns)?;
        let (categories, samples) = first.shape();

        for (run, table) in runs.iter().enumerate().skip(1) {
            if table.shape() != first.shape() {
                return Err(MeasureError::ShapeMismatch {
                    run,
                    expected: first.shape(),
                    found: table.shape(),
                });
            }
        }

        let mut result = Table::zeros(categories, samples);
        let mut column = Vec::with_capacity(runs.len());
        for c in 0..categories {
            for s in 0..samples {
                column.clear();
                column.extend(runs.iter().map(|t| t.get(c, s)));
                result.set(c, s, filtered_mean_with(&column, self.threshold, self.rule));
            }
        }
        Ok(result)
    }
}
