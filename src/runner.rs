use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::Layout;
use crate::error::{MeasureError, Result};
use crate::table::Table;

/// One run of the measurement program, split into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// Row 0 of the run: the independent variable, one value per sample point.
    pub independent: Vec<f64>,
    /// The dependent measurements, one row per category.
    pub measurements: Table,
}

impl RunOutput {
    /// Split a table in metric-per-row orientation into its independent and
    /// dependent parts.
    pub fn from_table(table: &Table) -> Result<RunOutput> {
        let (independent, measurements) = table.split_first_row()?;
        Ok(RunOutput {
            independent,
            measurements,
        })
    }

    /// Parse raw program output laid out as `layout`.
    pub fn parse(text: &str, layout: Layout) -> Result<RunOutput> {
        let table = Table::parse(text)?;
        let table = match layout {
            Layout::SampleRows => table.transpose(),
            Layout::MetricRows => table,
        };
        RunOutput::from_table(&table)
    }
}

/// Something that can produce one run of measurements.
pub trait Invoker {
    /// Execute run number `run` (zero based).
    fn invoke(&mut self, run: usize) -> Result<RunOutput>;

    /// Release whatever the runs left behind. Called once after the last
    /// successful run.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Runs a shell command line, redirecting its stdout into a temp file that is
/// parsed after every run and removed once all runs are done.
#[derive(Debug, Clone)]
pub struct ShellInvoker {
    pub command: String,
    pub temp_file: PathBuf,
    pub layout: Layout,
}

impl ShellInvoker {
    pub fn new(command: &str, temp_file: impl Into<PathBuf>, layout: Layout) -> ShellInvoker {
        ShellInvoker {
            command: command.to_string(),
            temp_file: temp_file.into(),
            layout,
        }
    }

    pub fn temp_file(&self) -> &Path {
        &self.temp_file
    }

    fn execute_command(&self, run: usize) -> Result<()> {
        let stdout = File::create(&self.temp_file)
            .map_err(|e| MeasureError::io(&self.temp_file, e))?;

        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| MeasureError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(MeasureError::Invocation {
                run,
                command: self.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Invoker for ShellInvoker {
    fn invoke(&mut self, run: usize) -> Result<RunOutput> {
        debug!(run, command = %self.command, "invoking measurement program");
        self.execute_command(run)?;

        let text = fs::read_to_string(&self.temp_file)
            .map_err(|e| MeasureError::io(&self.temp_file, e))?;
        RunOutput::parse(&text, self.layout)
    }

    fn finish(&mut self) -> Result<()> {
        debug!(path = %self.temp_file.display(), "removing temp file");
        match fs::remove_file(&self.temp_file) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MeasureError::io(&self.temp_file, e)),
        }
    }
}
