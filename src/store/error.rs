use axum::http::StatusCode;
use thiserror::Error;

/// Failure modes of the remote table store.
///
/// Every remote-facing operation in the crate reports through this taxonomy so
/// handlers can map each kind to a distinct HTTP status.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store client was never constructed (missing credentials) or failed
    /// to construct. Surfaced at call time, not at process startup.
    #[error("Database connection not available")]
    NotConfigured,

    /// The store could not be reached, or the response could not be read.
    #[error("store request failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// The store answered with an error indicator.
    #[error("store returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// A query returned zero rows and the follow-up existence probe could not
    /// confirm the table is populated and readable.
    #[error("{0}")]
    DataUnavailable(String),
}

impl StoreError {
    /// The HTTP status this error surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::Connection(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::Backend { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::DataUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
