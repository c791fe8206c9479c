use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixgeneError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image {path:?}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Codec error: {0}")]
    Codec(String),

    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PixgeneError>;
