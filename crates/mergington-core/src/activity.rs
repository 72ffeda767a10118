//! The activity record and its name-keyed collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An extracurricular offering. The name is not part of the record; it is
/// the key the record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub description:      String,
  pub schedule:         String,
  /// Advisory capacity. Signups past this number are still accepted.
  pub max_participants: u32,
  /// Participant emails in signup order, without duplicates.
  pub participants:     Vec<String>,
}

impl Activity {
  pub fn has_participant(&self, email: &str) -> bool {
    self.participants.iter().any(|p| p == email)
  }
}

/// Every activity keyed by its unique name.
pub type ActivityMap = BTreeMap<String, Activity>;
