//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure renders as `{"detail": "<message>"}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use mergington_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("update not applied: {0}")]
  UpdateFailed(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Convert any backend error into the matching API error.
  pub fn from_store<E: Into<CoreError>>(err: E) -> Self { Self::from(err.into()) }
}

impl From<CoreError> for ApiError {
  fn from(err: CoreError) -> Self {
    match err {
      CoreError::ActivityNotFound(_) => Self::NotFound("Activity not found".into()),
      CoreError::AlreadyRegistered { .. } => {
        Self::BadRequest("Student already signed up".into())
      }
      CoreError::NotRegistered { .. } => {
        Self::BadRequest("Student is not signed up".into())
      }
      CoreError::PersistenceFailure(_) => {
        Self::UpdateFailed("Failed to update activity".into())
      }
      CoreError::Store(e) => Self::Store(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, detail) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::UpdateFailed(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
      }
    };
    (status, Json(json!({ "detail": detail }))).into_response()
  }
}
