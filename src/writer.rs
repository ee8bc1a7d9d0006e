use std::path::Path;

use serde::Serialize;

use tracing::info;

use crate::error::{MeasureError, Result};
use crate::table::Table;
use crate::utils::ensure_parent_dir;

pub trait TableWriter {
    fn write_table(&self, table: &Table, path: &Path) -> Result<()>;
}

/// Writes the aggregated table as plot data: one line per sample point, one
/// space separated column per category.
#[derive(Debug, Clone, Default)]
pub struct PlotDataWriter {
    /// Leading column holding the independent variable, if any.
    pub independent: Option<Vec<f64>>,
}

impl PlotDataWriter {
    pub fn new() -> Self {
        PlotDataWriter { independent: None }
    }

    pub fn with_independent(independent: Vec<f64>) -> Self {
        PlotDataWriter {
            independent: Some(independent),
        }
    }
}

impl TableWriter for PlotDataWriter {
    /// `table` is in category-per-row orientation; it is transposed on the way
    /// out. Any existing file at `path` is replaced.
    fn write_table(&self, table: &Table, path: &Path) -> Result<()> {
        if let Some(x) = &self.independent {
            if x.len() != table.cols() {
                return Err(MeasureError::Malformed(format!(
                    "independent variable has {} points, table has {} samples",
                    x.len(),
                    table.cols()
                )));
            }
        }

        info!(
            samples = table.cols(),
            categories = table.rows(),
            path = %path.display(),
            "writing plot data"
        );
        ensure_parent_dir(path)?;

        let transposed = table.transpose();
        let records = transposed.iter_rows().enumerate().map(|(s, row)| {
            let mut record = Vec::with_capacity(row.len() + 1);
            if let Some(x) = &self.independent {
                record.push(x[s]);
            }
            record.extend_from_slice(row);
            record
        });
        write_records(path, records)
    }
}

/// Write each record as one space separated line, without a header.
pub fn write_records<R, I>(path: &Path, records: I) -> Result<()>
where
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| MeasureError::csv(path, e))?;
    for record in records {
        wtr.serialize(record).map_err(|e| MeasureError::csv(path, e))?;
    }
    wtr.flush().map_err(|e| MeasureError::io(path, e))?;
    Ok(())
}

/// Read a file produced by [`PlotDataWriter`] back into a table, in file
/// orientation (one row per sample point).
pub fn read_plot_data(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| MeasureError::csv(path, e))?;

    let mut rows = Vec::new();
    for record in rdr.deserialize::<Vec<f64>>() {
        rows.push(record.map_err(|e| MeasureError::csv(path, e))?);
    }
    if rows.is_empty() {
        return Err(MeasureError::Malformed(format!(
            "{} holds no rows",
            path.display()
        )));
    }
    Table::from_rows(rows)
}
