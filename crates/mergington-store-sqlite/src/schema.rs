//! SQL schema for the Mergington SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One document per activity, keyed by its human-readable name.
CREATE TABLE IF NOT EXISTS activities (
    name              TEXT PRIMARY KEY,
    description       TEXT NOT NULL,
    schedule          TEXT NOT NULL,
    max_participants  INTEGER NOT NULL CHECK (max_participants > 0),
    participants      TEXT NOT NULL DEFAULT '[]'   -- JSON array, signup order
                      CHECK (json_valid(participants) AND json_type(participants) = 'array')
);

PRAGMA user_version = 1;
";

pub const SELECT_ALL: &str = "
SELECT name, description, schedule, max_participants, participants
  FROM activities
 ORDER BY name
";

pub const SELECT_ONE: &str = "
SELECT name, description, schedule, max_participants, participants
  FROM activities
 WHERE name = ?1
";

pub const INSERT: &str = "
INSERT INTO activities (name, description, schedule, max_participants, participants)
VALUES (?1, ?2, ?3, ?4, ?5)
";

/// Append `?2` to the roster of `?1` unless it is already there.
pub const APPEND_IF_ABSENT: &str = "
UPDATE activities
   SET participants = json_insert(participants, '$[#]', ?2)
 WHERE name = ?1
   AND NOT EXISTS (
         SELECT 1 FROM json_each(activities.participants) WHERE value = ?2
       )
";

/// Drop the first occurrence of `?2` from the roster of `?1`, if present.
pub const REMOVE_IF_PRESENT: &str = "
UPDATE activities
   SET participants = json_remove(
         participants,
         (SELECT fullkey FROM json_each(activities.participants) WHERE value = ?2 LIMIT 1)
       )
 WHERE name = ?1
   AND EXISTS (
         SELECT 1 FROM json_each(activities.participants) WHERE value = ?2
       )
";
