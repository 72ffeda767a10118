//! Conversion between [`Activity`] and the plain column values stored in
//! SQLite. Rosters are stored as compact JSON arrays.

use mergington_core::Activity;

use crate::{Error, Result};

/// An `activities` row as read from or written to SQLite.
#[derive(Debug, Clone)]
pub struct RawActivity {
  pub name:             String,
  pub description:      String,
  pub schedule:         String,
  pub max_participants: i64,
  pub participants:     String,
}

impl RawActivity {
  pub fn encode(name: String, activity: Activity) -> Result<Self> {
    Ok(Self {
      name,
      description:      activity.description,
      schedule:         activity.schedule,
      max_participants: i64::from(activity.max_participants),
      participants:     serde_json::to_string(&activity.participants)?,
    })
  }

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      name:             row.get(0)?,
      description:      row.get(1)?,
      schedule:         row.get(2)?,
      max_participants: row.get(3)?,
      participants:     row.get(4)?,
    })
  }

  pub fn into_activity(self) -> Result<(String, Activity)> {
    let max_participants = u32::try_from(self.max_participants).map_err(|_| {
      Error::InvalidCapacity {
        activity: self.name.clone(),
        value:    self.max_participants,
      }
    })?;
    let participants: Vec<String> = serde_json::from_str(&self.participants)?;

    Ok((self.name, Activity {
      description: self.description,
      schedule: self.schedule,
      max_participants,
      participants,
    }))
  }
}
