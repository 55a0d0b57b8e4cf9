use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid target size: {0}KB. Must be greater than 0")]
    InvalidTargetSize(u64),

    #[error("Quality steps must not be empty")]
    EmptyQualitySteps,

    #[error("Invalid resize scale step: {0}. Must be between 0 and 1 (exclusive)")]
    InvalidResizeScaleStep(f64),

    #[error("Invalid minimum resize scale: {0}. Must be between 0.01 and 1")]
    InvalidMinResizeScale(f64),

    #[error("Invalid slug \"{0}\". Only lowercase letters (a-z), digits (0-9), and hyphens (-) are allowed")]
    InvalidSlug(String),

    #[error("Input directory does not exist: {0}")]
    InputDirNotFound(PathBuf),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Output directory already exists: {0}. Remove it first to avoid overwriting")]
    OutputDirExists(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Could not write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AgentError>;
