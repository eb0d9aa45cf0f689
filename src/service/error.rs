use thiserror::Error;

/// Failure of a request-level operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing or empty required input; the client should not retry as is.
    #[error("{0}")]
    InvalidRequest(String),

    /// A legitimate empty result (e.g. no usable audio stream).
    #[error("{0}")]
    NotFound(String),

    /// The underlying provider failed.
    #[error("{0}")]
    BackendFailure(String),
}

impl ServiceError {
    /// Render an `anyhow` chain into a backend failure, logging it once.
    pub fn backend(op: &str, err: anyhow::Error) -> Self {
        let msg = format!("{err:#}");
        tracing::error!(op, error = %msg, "backend failure");
        Self::BackendFailure(msg)
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
