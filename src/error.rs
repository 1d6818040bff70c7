use std::path::PathBuf;

use crate::config::ConfigError;

/// Every failure of a run. All of them are terminal.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no CSV file supplied")]
    NoFile,
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),
    #[error("CSV parse error: no columns to parse from file")]
    EmptyFile,
    #[error("required column not found: {0}")]
    MissingColumn(String),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("GUI failed: {0}")]
    Gui(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
