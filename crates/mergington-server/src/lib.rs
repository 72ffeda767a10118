//! Process wiring for the Mergington activity directory.
//!
//! Combines the JSON API with the root redirect, the static client mount,
//! and request tracing, and owns the startup sequence: open the store within
//! a fixed timeout, then seed it.

pub mod bootstrap;
pub mod error;
pub mod settings;

pub use bootstrap::{SeedMode, bootstrap};
pub use error::Error;
pub use settings::load_settings;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use axum::{Router, response::Redirect, routing::get};
use mergington_core::store::ActivityStore;
use mergington_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Where `GET /` sends the browser.
pub const CLIENT_ENTRY: &str = "/static/index.html";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `MERGINGTON_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  pub static_dir:           PathBuf,
  pub seed_mode:            SeedMode,
  pub connect_timeout_secs: u64,
}

impl ServerConfig {
  pub fn connect_timeout(&self) -> Duration { Duration::from_secs(self.connect_timeout_secs) }
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// Open the SQLite store at `path`, giving up after `timeout`.
pub async fn open_store(path: &Path, timeout: Duration) -> Result<SqliteStore, Error> {
  match tokio::time::timeout(timeout, SqliteStore::open(path, timeout)).await {
    Ok(Ok(store)) => Ok(store),
    Ok(Err(e)) => Err(Error::StoreUnavailable(e)),
    Err(_) => Err(Error::ConnectTimeout(timeout)),
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router for `store`.
pub fn router<S>(store: Arc<S>, static_dir: &Path) -> Router
where
  S: ActivityStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .merge(mergington_api::api_router(store))
    .nest_service("/static", ServeDir::new(static_dir))
    .layer(TraceLayer::new_for_http())
}

async fn root() -> Redirect { Redirect::temporary(CLIENT_ENTRY) }

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use serde_json::Value;
  use tower::ServiceExt as _;

  async fn app(mode: SeedMode) -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    bootstrap(&store, mode).await.unwrap();
    router(Arc::new(store), Path::new("does-not-exist"))
  }

  async fn oneshot(app: Router, method: &str, uri: &str) -> axum::response::Response {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::empty())
      .unwrap();
    app.oneshot(req).await.unwrap()
  }

  #[tokio::test]
  async fn root_redirects_to_client() {
    let resp = oneshot(app(SeedMode::Skip).await, "GET", "/").await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), CLIENT_ENTRY);
  }

  #[tokio::test]
  async fn api_is_mounted_at_root() {
    let resp = oneshot(app(SeedMode::IfEmpty).await, "GET", "/activities").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 9);
  }

  #[tokio::test]
  async fn missing_static_file_is_404() {
    let resp = oneshot(app(SeedMode::Skip).await, "GET", "/static/index.html").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn signup_flows_through_full_router() {
    let app  = app(SeedMode::IfEmpty).await;
    let resp = oneshot(
      app.clone(),
      "POST",
      "/activities/Chess%20Club/signup?email=new@mergington.edu",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = oneshot(
      app,
      "POST",
      "/activities/Chess%20Club/signup?email=new@mergington.edu",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn open_store_creates_file() {
    let path = std::env::temp_dir().join(format!("mergington-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let store = open_store(&path, Duration::from_secs(5)).await.unwrap();
    assert!(store.list_all().await.unwrap().is_empty());
    assert!(path.exists());

    drop(store);
    for suffix in ["", "-wal", "-shm"] {
      let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
  }

  #[tokio::test]
  async fn open_store_in_missing_directory_is_unavailable() {
    let path = Path::new("/nonexistent-dir-for-mergington/store.db");
    let err  = open_store(path, Duration::from_secs(5)).await.unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable(_)), "{err}");
  }
}
