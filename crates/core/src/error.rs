//! Error types for report extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a report-processing run.
///
/// Geometry problems (bad coordinates, unmatched cells) never surface here;
/// they are logged and the offending object is dropped. Only missing inputs
/// and serialization failures stop the run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("empty page collection")]
    EmptyPages,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
