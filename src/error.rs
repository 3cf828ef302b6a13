//! Error taxonomy shared across the query pipeline.

use axum::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while answering one query.
#[derive(Debug, Error)]
pub enum AppError {
    /// The completion-provider credential is not configured.
    #[error("completion provider credential missing (set OPENAI_API_KEY)")]
    MissingCredential,

    /// A local construction failure (e.g. an HTTP client that would not
    /// build), as opposed to an upstream call that failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller sent an empty or whitespace-only query.
    #[error("query must not be empty")]
    EmptyQuery,

    /// The completion call failed or its output was not a valid parameter
    /// mapping.
    #[error("query translation failed: {0}")]
    Translation(String),

    /// The registry search failed (network, timeout, status, or bad JSON).
    #[error("registry fetch failed: {0}")]
    Fetch(String),
}

impl AppError {
    /// HTTP status this error surfaces as at the API boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyQuery => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Translation(_) | Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::MissingCredential | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_separates_caller_config_and_upstream_faults() {
        assert_eq!(AppError::EmptyQuery.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::Translation("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(AppError::Fetch("x".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::MissingCredential.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Config("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
