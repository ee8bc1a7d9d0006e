use crate::error::{MeasureError, Result};

/// A dense, row-major table of `f64` values.
///
/// In a run's output each row is one metric and each column one sample point.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Table {
    pub fn zeros(rows: usize, cols: usize) -> Table {
        Table {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a table from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Table> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MeasureError::Ragged {
                    line: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Table {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Parse whitespace-separated numeric text.
    ///
    /// Anything from a `#` to the end of a line is a comment. Lines left
    /// blank are skipped; each remaining line becomes one row and all rows
    /// must have the same number of fields.
    pub fn parse(text: &str) -> Result<Table> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut width: Option<usize> = None;

        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            let content = line.split_once('#').map_or(line, |(data, _)| data);
            let trimmed = content.trim();
            if trimmed.is_empty() {
                continue;
            }

            let row = trimmed
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| MeasureError::Parse {
                        line: line_no,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            match width {
                Some(expected) if expected != row.len() => {
                    return Err(MeasureError::Ragged {
                        line: line_no,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
                None => width = Some(row.len()),
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(MeasureError::Malformed("no numeric rows".to_string()));
        }
        Table::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(|r| self.row(r))
    }

    pub fn transpose(&self) -> Table {
        let mut out = Table::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    /// Split off the first row, returning it with the remaining rows.
    pub fn split_first_row(&self) -> Result<(Vec<f64>, Table)> {
        if self.rows < 2 {
            return Err(MeasureError::Malformed(format!(
                "expected an independent variable and at least one measurement, found {} metric(s)",
                self.rows
            )));
        }
        let first = self.row(0).to_vec();
        let rest = Table {
            rows: self.rows - 1,
            cols: self.cols,
            data: self.data[self.cols..].to_vec(),
        };
        Ok((first, rest))
    }
}
