//! CLI error types.

use donutfractals_core::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Bad argument: {0}")]
    Usage(String),

    #[error("Failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported output format for {0}; use .png, .jpg or .jpeg")]
    OutputFormat(PathBuf),

    #[error("Render was cancelled")]
    Cancelled,
}
