//! The `ActivityStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `mergington-store-sqlite`). The HTTP layer and the server bootstrap depend
//! on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::activity::{Activity, ActivityMap};

/// Abstraction over the activity collection, keyed by activity name.
///
/// Backend errors must convert into [`crate::Error`] so callers can tell the
/// domain outcomes (`ActivityNotFound`, `AlreadyRegistered`, ...) apart from
/// plain storage failures.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ActivityStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Seeding ───────────────────────────────────────────────────────────

  /// Replace the whole collection with `activities`. Existing participants
  /// are discarded.
  fn seed(
    &self,
    activities: ActivityMap,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert `activities` only if the collection is empty. Returns `true` if
  /// anything was inserted.
  fn ensure_seeded(
    &self,
    activities: ActivityMap,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every stored activity, keyed by name. Empty if the collection is.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<ActivityMap, Self::Error>> + Send + '_;

  /// Point lookup by name. Returns `None` if not found.
  fn find_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Activity>, Self::Error>> + Send + 'a;

  // ── Roster writes ─────────────────────────────────────────────────────

  /// Append `email` to the activity's participants.
  ///
  /// Fails with `ActivityNotFound`, `AlreadyRegistered`, or
  /// `PersistenceFailure` when the write modified nothing.
  fn add_participant<'a>(
    &'a self,
    name: &'a str,
    email: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove `email` from the activity's participants, keeping the order of
  /// everyone else.
  ///
  /// Fails with `ActivityNotFound`, `NotRegistered`, or `PersistenceFailure`
  /// when the write modified nothing.
  fn remove_participant<'a>(
    &'a self,
    name: &'a str,
    email: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
