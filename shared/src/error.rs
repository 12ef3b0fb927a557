use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Error kinds shared by every service crate.
///
/// Stores raise `Store` for failed relational operations, `NotFound` when
/// an update or lookup matched no row, and `InvalidArgument` for values
/// rejected before any statement is issued. `UnknownItemType` is the batch
/// routing failure; `DeadlineExceeded` is a downstream call that ran past
/// its per-call deadline, kept distinct from explicit failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unknown item type: {0}")]
    UnknownItemType(String),

    #[error("deadline exceeded while {0}")]
    DeadlineExceeded(String),

    #[error("store failure: {0}")]
    Store(String),
}

impl ServiceError {
    /// Wraps an underlying relational-store error.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::UnknownItemType(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result of a single-row mutation: `NotFound` exactly when no row
/// matched, success otherwise. Every status/quantity/note update path
/// goes through this mapping.
pub fn ensure_row_matched(
    matched: usize,
    what: impl std::fmt::Display,
) -> Result<(), ServiceError> {
    if matched == 0 {
        return Err(ServiceError::NotFound(format!("{} not found", what)));
    }
    Ok(())
}

/// Quantities are rejected before any statement is issued unless >= 1.
pub fn ensure_positive_quantity(quantity: i32) -> Result<(), ServiceError> {
    if quantity <= 0 {
        return Err(ServiceError::InvalidArgument(
            "quantity must be a positive integer".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
