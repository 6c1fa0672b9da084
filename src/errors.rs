//! Unified error type for the storefront admin layer.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure the admin layer can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or setting could not be used
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable reason
        message: String,
    },

    /// A store mutation targeted an identifier that is not in the collection
    #[error("{kind} with id {id} not found")]
    RecordNotFound {
        /// Record kind, e.g. "book"
        kind: &'static str,
        /// The missing identifier
        id: i64,
    },

    /// A record was added with an identifier already present in its collection
    #[error("{kind} with id {id} already exists")]
    DuplicateId {
        /// Record kind, e.g. "book"
        kind: &'static str,
        /// The clashing identifier
        id: i64,
    },

    /// A monetary value was negative or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// A submitted form field failed validation
    #[error("Invalid {field}: {message}")]
    InvalidField {
        /// Form field name
        field: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// `submit` was called while no create/edit form was open
    #[error("No create or edit form is open")]
    NoOpenForm,

    /// The selected image file could not be read
    #[error("Failed to read image {}: {source}", .path.display())]
    ImageRead {
        /// Path of the selected file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Filesystem failure outside of image reads
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable is missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Transport or decoding failure talking to the storefront API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storefront API answered with a non-success status
    #[error("Storefront API returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// An image read task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
