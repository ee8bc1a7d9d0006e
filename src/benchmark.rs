use tracing::{debug, info};

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::{MeasureError, Result};
use crate::runner::{Invoker, RunOutput, ShellInvoker};
use crate::table::Table;

/// Every run of one measurement, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunCollection {
    /// The independent variable, as reported by the last run.
    pub independent: Vec<f64>,
    /// The dependent table of each run.
    pub runs: Vec<Table>,
}

/// The outcome of a full measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub independent: Vec<f64>,
    /// `(categories, samples)` table of filtered means.
    pub aggregated: Table,
}

/// Drives an [`Invoker`] a fixed number of times and reduces the runs.
pub struct Benchmarker<I: Invoker> {
    pub invoker: I,
    pub runs: usize,
    pub aggregator: Aggregator,
}

impl Benchmarker<ShellInvoker> {
    pub fn from_config(config: &Config) -> Benchmarker<ShellInvoker> {
        Benchmarker {
            invoker: ShellInvoker::new(&config.command, config.temp_file.clone(), config.layout),
            runs: config.runs,
            aggregator: Aggregator::new(config.threshold, config.rule),
        }
    }
}

impl<I: Invoker> Benchmarker<I> {
    pub fn new(invoker: I, runs: usize, aggregator: Aggregator) -> Benchmarker<I> {
        Benchmarker {
            invoker,
            runs,
            aggregator,
        }
    }

    /// Run the program `self.runs` times. The first failing run aborts the
    /// whole collection; cleanup only happens after every run succeeded.
    pub fn collect(&mut self) -> Result<RunCollection> {
        let mut runs: Vec<Table> = Vec::with_capacity(self.runs);
        let mut independent = Vec::new();

        for run in 0..self.runs {
            let RunOutput {
                independent: x,
                measurements,
            } = self.invoker.invoke(run)?;

            if let Some(first) = runs.first() {
                if first.shape() != measurements.shape() {
                    return Err(MeasureError::ShapeMismatch {
                        run,
                        expected: first.shape(),
                        found: measurements.shape(),
                    });
                }
            }

            debug!(
                run,
                categories = measurements.rows(),
                samples = measurements.cols(),
                "run complete"
            );
            if (run + 1) % 10 == 0 || run + 1 == self.runs {
                info!("Completed {}/{} runs", run + 1, self.runs);
            }

            independent = x;
            runs.push(measurements);
        }

        if runs.is_empty() {
            return Err(MeasureError::NoRuns);
        }
        self.invoker.finish()?;

        Ok(RunCollection { independent, runs })
    }

    /// Collect all runs and aggregate them.
    pub fn measure(&mut self) -> Result<Measurement> {
        let collection = self.collect()?;
        info!(
            runs = collection.runs.len(),
            threshold = self.aggregator.threshold,
            rule = ?self.aggregator.rule,
            "Aggregating runs"
        );
        let aggregated = self.aggregator.aggregate(&collection.runs)?;
        Ok(Measurement {
            independent: collection.independent,
            aggregated,
        })
    }
}
