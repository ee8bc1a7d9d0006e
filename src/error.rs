use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can abort a measurement.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("run {run}: `{command}` exited with {status}: {stderr}")]
    Invocation {
        run: usize,
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("line {line}: cannot parse `{token}` as a number")]
    Parse { line: usize, token: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("malformed table: {0}")]
    Malformed(String),

    #[error("run {run}: shape {found:?} does not match first run {expected:?}")]
    ShapeMismatch {
        run: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("no runs to aggregate")]
    NoRuns,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl MeasureError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        MeasureError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn csv(path: impl AsRef<std::path::Path>, source: csv::Error) -> Self {
        MeasureError::Csv {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MeasureError>;
