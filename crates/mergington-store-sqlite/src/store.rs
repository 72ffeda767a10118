//! [`SqliteStore`] — the SQLite implementation of [`ActivityStore`].

use std::{fmt, path::Path, time::Duration};

use mergington_core::{Activity, ActivityMap, store::ActivityStore};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::RawActivity,
  schema::{APPEND_IF_ABSENT, INSERT, REMOVE_IF_PRESENT, SCHEMA, SELECT_ALL, SELECT_ONE},
  Error, Result,
};

type CoreError = mergington_core::Error;

// ─── Store ───────────────────────────────────────────────────────────────────

/// An activity store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl fmt::Debug for SqliteStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SqliteStore").finish_non_exhaustive()
  }
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// `busy_timeout` bounds how long a statement waits on a lock held by
  /// another connection to the same file.
  pub async fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    conn
      .call(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        Ok(())
      })
      .await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Append `email` to the roster in one statement, unless already present.
  /// Returns the number of rows modified.
  pub(crate) async fn append_if_absent(&self, name: &str, email: &str) -> Result<usize> {
    let name  = name.to_owned();
    let email = email.to_owned();
    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute(APPEND_IF_ABSENT, rusqlite::params![name, email])?))
      .await?;
    Ok(changed)
  }

  /// Remove `email` from the roster in one statement, if present.
  /// Returns the number of rows modified.
  pub(crate) async fn remove_if_present(&self, name: &str, email: &str) -> Result<usize> {
    let name  = name.to_owned();
    let email = email.to_owned();
    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute(REMOVE_IF_PRESENT, rusqlite::params![name, email])?))
      .await?;
    Ok(changed)
  }

  /// Look up `name`, failing with `ActivityNotFound` if it is absent.
  async fn require(&self, name: &str) -> Result<Activity> {
    self
      .find_by_name(name)
      .await?
      .ok_or_else(|| CoreError::ActivityNotFound(name.to_owned()).into())
  }
}

fn encode_all(activities: ActivityMap) -> Result<Vec<RawActivity>> {
  activities
    .into_iter()
    .map(|(name, activity)| RawActivity::encode(name, activity))
    .collect()
}

fn insert_all(conn: &rusqlite::Connection, rows: &[RawActivity]) -> rusqlite::Result<()> {
  let mut stmt = conn.prepare(INSERT)?;
  for row in rows {
    stmt.execute(rusqlite::params![
      row.name,
      row.description,
      row.schedule,
      row.max_participants,
      row.participants,
    ])?;
  }
  Ok(())
}

// ─── ActivityStore impl ──────────────────────────────────────────────────────

impl ActivityStore for SqliteStore {
  type Error = Error;

  // ── Seeding ───────────────────────────────────────────────────────────────

  async fn seed(&self, activities: ActivityMap) -> Result<()> {
    let rows  = encode_all(activities)?;
    let count = rows.len();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM activities", [])?;
        insert_all(&tx, &rows)?;
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::info!(count, "replaced activity collection");
    Ok(())
  }

  async fn ensure_seeded(&self, activities: ActivityMap) -> Result<bool> {
    let rows = encode_all(activities)?;

    let seeded = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let populated: bool =
          tx.query_row("SELECT EXISTS (SELECT 1 FROM activities)", [], |r| r.get(0))?;
        if populated {
          return Ok(false);
        }
        insert_all(&tx, &rows)?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    Ok(seeded)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_all(&self) -> Result<ActivityMap> {
    let raws: Vec<RawActivity> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(SELECT_ALL)?;
        let rows = stmt
          .query_map([], RawActivity::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawActivity::into_activity).collect()
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<Activity>> {
    let name = name.to_owned();

    let raw: Option<RawActivity> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(SELECT_ONE, rusqlite::params![name], RawActivity::from_row)
            .optional()?,
        )
      })
      .await?;

    raw
      .map(|r| r.into_activity().map(|(_, activity)| activity))
      .transpose()
  }

  // ── Roster writes ─────────────────────────────────────────────────────────

  async fn add_participant(&self, name: &str, email: &str) -> Result<()> {
    let activity = self.require(name).await?;
    if activity.has_participant(email) {
      return Err(
        CoreError::AlreadyRegistered {
          activity: name.to_owned(),
          email:    email.to_owned(),
        }
        .into(),
      );
    }

    if self.append_if_absent(name, email).await? == 0 {
      tracing::warn!(activity = name, email, "signup lost a race; roster unchanged");
      return Err(CoreError::PersistenceFailure(name.to_owned()).into());
    }
    Ok(())
  }

  async fn remove_participant(&self, name: &str, email: &str) -> Result<()> {
    let activity = self.require(name).await?;
    if !activity.has_participant(email) {
      return Err(
        CoreError::NotRegistered {
          activity: name.to_owned(),
          email:    email.to_owned(),
        }
        .into(),
      );
    }

    if self.remove_if_present(name, email).await? == 0 {
      tracing::warn!(activity = name, email, "unregister lost a race; roster unchanged");
      return Err(CoreError::PersistenceFailure(name.to_owned()).into());
    }
    Ok(())
  }
}
