//! Startup errors. All of them are fatal.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store unavailable: {0}")]
  StoreUnavailable(#[source] mergington_store_sqlite::Error),

  #[error("store did not open within {0:?}")]
  ConnectTimeout(Duration),

  #[error("failed to seed activities: {0}")]
  Seed(#[source] mergington_core::Error),
}
