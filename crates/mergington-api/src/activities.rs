//! Handlers for `/activities` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/activities` | Every activity keyed by name |
//! | `POST` | `/activities/{activity_name}/signup` | `?email=`; 404 / 400 / 500 |
//! | `POST` | `/activities/{activity_name}/unregister` | `?email=`; 404 / 400 / 500 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
};
use mergington_core::{ActivityMap, store::ActivityStore};
use serde::Serialize;

use crate::error::ApiError;

/// Raw query pairs. Kept as a list so a repeated `email` resolves to its
/// last value instead of failing deserialisation.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Success body for roster changes.
#[derive(Debug, Serialize)]
pub struct Message {
  pub message: String,
}

/// The `email` query parameter, taken verbatim. No address validation is
/// applied; the last occurrence wins.
fn email_param(params: QueryPairs) -> Result<String, ApiError> {
  let Query(pairs) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
  pairs
    .into_iter()
    .rev()
    .find_map(|(key, value)| (key == "email").then_some(value))
    .ok_or_else(|| ApiError::BadRequest("missing query parameter `email`".into()))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /activities`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<ActivityMap>, ApiError>
where
  S: ActivityStore,
{
  let activities = store.list_all().await.map_err(ApiError::from_store)?;
  Ok(Json(activities))
}

// ─── Signup ───────────────────────────────────────────────────────────────────

/// `POST /activities/{activity_name}/signup?email=<email>`
pub async fn signup<S>(
  State(store): State<Arc<S>>,
  Path(activity_name): Path<String>,
  params: QueryPairs,
) -> Result<Json<Message>, ApiError>
where
  S: ActivityStore,
{
  let email = email_param(params)?;

  store
    .add_participant(&activity_name, &email)
    .await
    .map_err(|e| {
      let err = ApiError::from_store(e);
      tracing::debug!(activity = %activity_name, %email, error = %err, "signup rejected");
      err
    })?;

  tracing::info!(activity = %activity_name, %email, "signed up");
  Ok(Json(Message {
    message: format!("Signed up {email} for {activity_name}"),
  }))
}

// ─── Unregister ───────────────────────────────────────────────────────────────

/// `POST /activities/{activity_name}/unregister?email=<email>`
pub async fn unregister<S>(
  State(store): State<Arc<S>>,
  Path(activity_name): Path<String>,
  params: QueryPairs,
) -> Result<Json<Message>, ApiError>
where
  S: ActivityStore,
{
  let email = email_param(params)?;

  store
    .remove_participant(&activity_name, &email)
    .await
    .map_err(|e| {
      let err = ApiError::from_store(e);
      tracing::debug!(activity = %activity_name, %email, error = %err, "unregister rejected");
      err
    })?;

  tracing::info!(activity = %activity_name, %email, "unregistered");
  Ok(Json(Message {
    message: format!("Unregistered {email} from {activity_name}"),
  }))
}
