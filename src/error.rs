//! Error types for prayer loading and layout
//!
//! Only data loading is fallible. Once a prayer has been classified, drawing
//! and pagination always succeed; a broken synchronization invariant is a bug
//! and panics instead of surfacing here.

use thiserror::Error;

/// Top-level error type for the layout core
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Prayer record matches none of the known structures
    #[error("Unrecognized prayer structure for \"{title}\"")]
    UnrecognizedPrayerStructure { title: String },

    /// Layout configuration is unusable
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// JSON input could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML input could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
