use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures while fetching or decoding the forecast. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("Failed to reach Open-Meteo: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Open-Meteo request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Body was not JSON or a required field was missing.
    #[error("Failed to parse Open-Meteo JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Open-Meteo daily field `{field}` has {found} entries, expected {expected}")]
    Misaligned {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Open-Meteo response contained no daily forecast data")]
    NoDays,
}

/// Failures reading or writing the target document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write document: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
