//! JSON REST API for the Mergington activity directory.
//!
//! Exposes an axum [`Router`] backed by any
//! [`mergington_core::store::ActivityStore`]. Static assets, tracing layers,
//! and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new().merge(mergington_api::api_router(store.clone()))
//! ```

pub mod activities;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use mergington_core::store::ActivityStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ActivityStore + 'static,
{
  Router::new()
    .route("/activities", get(activities::list::<S>))
    .route("/activities/{activity_name}/signup", post(activities::signup::<S>))
    .route("/activities/{activity_name}/unregister", post(activities::unregister::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
