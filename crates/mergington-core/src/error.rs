//! Error types for `mergington-core`.

use thiserror::Error;

/// Outcome taxonomy shared by every [`ActivityStore`](crate::store::ActivityStore)
/// backend.
#[derive(Debug, Error)]
pub enum Error {
  #[error("activity not found: {0:?}")]
  ActivityNotFound(String),

  #[error("{email} is already signed up for {activity:?}")]
  AlreadyRegistered { activity: String, email: String },

  #[error("{email} is not signed up for {activity:?}")]
  NotRegistered { activity: String, email: String },

  /// The activity was found, but the follow-up write modified nothing.
  /// Usually a concurrent signup or unregister won the race.
  #[error("update to activity {0:?} was not applied")]
  PersistenceFailure(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
