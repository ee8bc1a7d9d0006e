use std::path::PathBuf;

use clap_derive::ValueEnum;

use crate::error::{MeasureError, Result};
use crate::stats::OutlierRule;

/// How the measurement program lays out its numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    /// One line per sample point, one column per metric. The first column is
    /// the independent variable.
    #[default]
    SampleRows,
    /// One line per metric, one column per sample point. The first line is
    /// the independent variable.
    MetricRows,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub runs: usize,
    pub threshold: f64,
    pub command: String,
    pub temp_file: PathBuf,
    pub output_path: PathBuf,
    pub rule: OutlierRule,
    pub layout: Layout,
    pub with_independent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            runs: 50,
            threshold: 2.0,
            command: "sudo taskset -c 7 ./client".to_string(),
            temp_file: PathBuf::from("tmp.txt"),
            output_path: PathBuf::from("plot_data"),
            rule: OutlierRule::LeaveOneOut,
            layout: Layout::SampleRows,
            with_independent: false,
        }
    }
}

impl Config {
    /// Reject settings the aggregation cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(MeasureError::Config("runs must be at least 1".to_string()));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(MeasureError::Config(format!(
                "threshold must be a finite number >= 0, got {}",
                self.threshold
            )));
        }
        if self.command.trim().is_empty() {
            return Err(MeasureError::Config("command is empty".to_string()));
        }
        if self.temp_file == self.output_path {
            return Err(MeasureError::Config(format!(
                "temp file and output both point at {}",
                self.temp_file.display()
            )));
        }
        Ok(())
    }
}
