//! Error type for `mergington-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] mergington_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("activity {activity:?} has invalid capacity {value}")]
  InvalidCapacity { activity: String, value: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for mergington_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::Core(e) => e,
      other => mergington_core::Error::Store(Box::new(other)),
    }
  }
}
