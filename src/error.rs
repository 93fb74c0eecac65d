//! Error kinds surfaced to the command layer.

use std::path::PathBuf;
use thiserror::Error;

pub type DocResult<T> = Result<T, DocError>;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read bundle {path}: {source}")]
    BundleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bundle must be a JSON object of id -> text
    #[error("invalid bundle {path}: {source}")]
    BundleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no document with id '{0}'")]
    UnknownDocument(String),

    #[error("no folder at path '{0}'")]
    UnknownFolder(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
