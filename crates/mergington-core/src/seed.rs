//! The fixed set of activities loaded at startup.

use crate::activity::{Activity, ActivityMap};

/// `(name, description, schedule, max_participants, participants)`
type SeedRow = (&'static str, &'static str, &'static str, u32, [&'static str; 2]);

const SEED: [SeedRow; 9] = [
  (
    "Chess Club",
    "Learn strategies and compete in chess tournaments",
    "Fridays, 3:30 PM - 5:00 PM",
    12,
    ["michael@mergington.edu", "daniel@mergington.edu"],
  ),
  (
    "Programming Class",
    "Learn programming fundamentals and build software projects",
    "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
    20,
    ["emma@mergington.edu", "sophia@mergington.edu"],
  ),
  (
    "Gym Class",
    "Physical education and sports activities",
    "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
    30,
    ["john@mergington.edu", "olivia@mergington.edu"],
  ),
  (
    "Soccer Team",
    "Join the school soccer team and compete in matches",
    "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
    22,
    ["liam@mergington.edu", "noah@mergington.edu"],
  ),
  (
    "Basketball Team",
    "Practice basketball skills and participate in tournaments",
    "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
    15,
    ["ava@mergington.edu", "mia@mergington.edu"],
  ),
  (
    "Art Club",
    "Explore various art techniques and create your own masterpieces",
    "Mondays, 3:30 PM - 5:00 PM",
    15,
    ["isabella@mergington.edu", "amelia@mergington.edu"],
  ),
  (
    "Drama Club",
    "Learn acting skills and participate in school plays",
    "Thursdays, 4:00 PM - 5:30 PM",
    20,
    ["elijah@mergington.edu", "lucas@mergington.edu"],
  ),
  (
    "Math Club",
    "Solve challenging math problems and prepare for competitions",
    "Wednesdays, 3:30 PM - 4:30 PM",
    10,
    ["charlotte@mergington.edu", "harper@mergington.edu"],
  ),
  (
    "Science Club",
    "Conduct experiments and explore scientific concepts",
    "Fridays, 4:00 PM - 5:00 PM",
    12,
    ["henry@mergington.edu", "jack@mergington.edu"],
  ),
];

/// The seed collection as an owned [`ActivityMap`].
pub fn initial_activities() -> ActivityMap {
  SEED
    .iter()
    .map(|(name, description, schedule, max_participants, participants)| {
      let activity = Activity {
        description:      (*description).to_owned(),
        schedule:         (*schedule).to_owned(),
        max_participants: *max_participants,
        participants:     participants.iter().map(|p| (*p).to_owned()).collect(),
      };
      ((*name).to_owned(), activity)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nine_uniquely_named_activities() {
    let activities = initial_activities();
    assert_eq!(activities.len(), SEED.len());
    assert_eq!(activities.len(), 9);
  }

  #[test]
  fn chess_club_roster() {
    let activities = initial_activities();
    let chess = &activities["Chess Club"];
    assert_eq!(chess.max_participants, 12);
    assert_eq!(
      chess.participants,
      vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
  }

  #[test]
  fn every_roster_fits_its_capacity() {
    for (name, activity) in initial_activities() {
      assert!(activity.max_participants > 0, "{name}");
      assert!(activity.participants.len() <= activity.max_participants as usize, "{name}");
    }
  }
}
