//! Startup seeding of the activity collection.

use std::fmt;

use clap::ValueEnum;
use mergington_core::{seed::initial_activities, store::ActivityStore};
use serde::Deserialize;

use crate::error::Error;

/// How the seed activities are applied when the server starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SeedMode {
  /// Wipe the collection and load the seed set. Discards every signup.
  Reset,
  /// Load the seed set only into an empty collection.
  #[default]
  IfEmpty,
  /// Leave the collection untouched.
  Skip,
}

impl fmt::Display for SeedMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.to_possible_value() {
      Some(value) => f.write_str(value.get_name()),
      None => Ok(()),
    }
  }
}

/// Apply `mode` to `store`. Must complete before the listener is bound.
pub async fn bootstrap<S: ActivityStore>(store: &S, mode: SeedMode) -> Result<(), Error> {
  match mode {
    SeedMode::Reset => {
      store
        .seed(initial_activities())
        .await
        .map_err(|e| Error::Seed(e.into()))?;
      tracing::warn!("activity collection reset to seed data");
    }
    SeedMode::IfEmpty => {
      let seeded = store
        .ensure_seeded(initial_activities())
        .await
        .map_err(|e| Error::Seed(e.into()))?;
      if seeded {
        tracing::info!("empty store seeded with initial activities");
      } else {
        tracing::info!("store already populated; seeding skipped");
      }
    }
    SeedMode::Skip => tracing::info!("seeding disabled"),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  use mergington_store_sqlite::SqliteStore;

  async fn store() -> SqliteStore { SqliteStore::open_in_memory().await.unwrap() }

  #[tokio::test]
  async fn if_empty_seeds_fresh_store() {
    let s = store().await;
    bootstrap(&s, SeedMode::IfEmpty).await.unwrap();
    assert_eq!(s.list_all().await.unwrap(), initial_activities());
  }

  #[tokio::test]
  async fn if_empty_keeps_existing_signups() {
    let s = store().await;
    bootstrap(&s, SeedMode::IfEmpty).await.unwrap();
    s.add_participant("Chess Club", "new@mergington.edu").await.unwrap();

    bootstrap(&s, SeedMode::IfEmpty).await.unwrap();
    let chess = s.find_by_name("Chess Club").await.unwrap().unwrap();
    assert_eq!(chess.participants.len(), 3);
  }

  #[tokio::test]
  async fn reset_discards_signups() {
    let s = store().await;
    bootstrap(&s, SeedMode::IfEmpty).await.unwrap();
    s.add_participant("Chess Club", "new@mergington.edu").await.unwrap();

    bootstrap(&s, SeedMode::Reset).await.unwrap();
    assert_eq!(s.list_all().await.unwrap(), initial_activities());
  }

  #[tokio::test]
  async fn skip_leaves_store_empty() {
    let s = store().await;
    bootstrap(&s, SeedMode::Skip).await.unwrap();
    assert!(s.list_all().await.unwrap().is_empty());
  }

  #[test]
  fn mode_names_are_kebab_case() {
    let names: Vec<String> = SeedMode::value_variants().iter().map(ToString::to_string).collect();
    assert_eq!(names, ["reset", "if-empty", "skip"]);
  }

  #[test]
  fn display_parses_back_through_clap_and_serde() {
    for mode in SeedMode::value_variants() {
      let name = mode.to_string();
      assert_eq!(SeedMode::from_str(&name, false).unwrap(), *mode);
      let from_serde: SeedMode = serde_json::from_value(serde_json::json!(name)).unwrap();
      assert_eq!(from_serde, *mode);
    }
  }
}
