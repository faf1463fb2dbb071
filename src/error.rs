use thiserror::Error;

/// Errors that can occur while loading a [`crate::config::BoardConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors that can occur while exporting the canvas as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Canvas snapshot is empty")]
    EmptyCanvas,

    #[error("Snapshot of {width}x{height} does not match its pixel data")]
    SizeMismatch { width: usize, height: usize },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Download(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ExportResult<T> = Result<T, ExportError>;
