//! Input validation and loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Raw input that does not have the `[{ text: string }, ...]` shape
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("items must be a sequence of {{ text: string }} objects, found {found}")]
    NotASequence { found: &'static str },

    #[error("item {index} must be an object shaped {{ text: string }}, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("item {index} is missing required field `text`")]
    MissingText { index: usize },

    #[error("item {index} field `text` must be a string, found {found}")]
    TextNotString { index: usize, found: &'static str },
}

/// Failure to turn an items file into a collection
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read items file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported items file {} (expected .json or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid items in {}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}
