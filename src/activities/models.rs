use serde::{ser::Serializer, Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Key of the record in the catalog, never part of the serialized body.
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(name: &str, description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            schedule: schedule.to_owned(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| (*p).to_owned()).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    /// Appends `email` to the roster. Nothing is mutated when a check fails.
    pub fn sign_up(&mut self, email: &str) -> Result<(), AppError> {
        if self.is_registered(email) {
            return Err(AppError::AlreadySignedUp);
        }
        if self.is_full() {
            return Err(AppError::ActivityFull);
        }
        self.participants.push(email.to_owned());
        Ok(())
    }

    pub fn unregister(&mut self, email: &str) -> Result<(), AppError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(AppError::NotRegistered)?;
        self.participants.remove(position);
        Ok(())
    }
}

/// Every activity offered, kept in the order it was seeded.
///
/// Serializes as a map keyed by activity name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog(Vec<Activity>);

impl Catalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self(activities)
    }

    pub fn seed() -> Self {
        Self(vec![
            Activity::new(
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
            Activity::new(
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
            Activity::new(
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
            Activity::new(
                "Soccer Team",
                "Join the school soccer team and compete in matches",
                "Tuesdays, 4:00 PM - 5:30 PM",
                18,
            ),
            Activity::new(
                "Basketball Club",
                "Practice basketball skills and play in tournaments",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            ),
            Activity::new(
                "Art Workshop",
                "Explore painting, drawing, and sculpture techniques",
                "Wednesdays, 4:00 PM - 5:30 PM",
                16,
            ),
            Activity::new(
                "Drama Club",
                "Act, direct, and produce school plays and performances",
                "Mondays, 3:30 PM - 5:00 PM",
                20,
            ),
            Activity::new(
                "Math Olympiad",
                "Prepare for math competitions and solve challenging problems",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            ),
            Activity::new(
                "Science Club",
                "Conduct experiments and explore scientific topics",
                "Thursdays, 4:00 PM - 5:30 PM",
                14,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.iter_mut().find(|a| a.name == name)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (&a.name, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Activity {
        Activity::new("Tiny", "", "", 2)
    }

    #[test]
    fn test_sign_up_rejects_duplicates() {
        let mut activity = tiny();
        activity.sign_up("a@example.com").unwrap();

        let result = activity.sign_up("a@example.com");

        assert!(matches!(result, Err(AppError::AlreadySignedUp)));
        assert_eq!(activity.participants, vec!["a@example.com"]);
    }

    #[test]
    fn test_sign_up_rejects_when_full() {
        let mut activity = tiny();
        activity.sign_up("a@example.com").unwrap();
        activity.sign_up("b@example.com").unwrap();
        assert!(activity.is_full());
        assert_eq!(activity.spots_left(), 0);

        let result = activity.sign_up("c@example.com");

        assert!(matches!(result, Err(AppError::ActivityFull)));
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn test_duplicate_is_reported_before_capacity() {
        let mut activity = Activity::new("Solo", "", "", 1).with_participants(&["a@example.com"]);

        let result = activity.sign_up("a@example.com");

        assert!(matches!(result, Err(AppError::AlreadySignedUp)));
    }

    #[test]
    fn test_unregister_keeps_order_of_the_rest() {
        let mut activity = Activity::new("Trio", "", "", 3).with_participants(&[
            "a@example.com",
            "b@example.com",
            "c@example.com",
        ]);

        activity.unregister("b@example.com").unwrap();

        assert_eq!(activity.participants, vec!["a@example.com", "c@example.com"]);
        assert!(matches!(
            activity.unregister("b@example.com"),
            Err(AppError::NotRegistered)
        ));
    }

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seed();

        assert_eq!(catalog.len(), 9);
        let soccer = catalog.find("Soccer Team").unwrap();
        assert_eq!(soccer.max_participants, 18);
        assert!(soccer.participants.is_empty());
        assert!(catalog
            .find("Chess Club")
            .unwrap()
            .is_registered("michael@mergington.edu"));
        assert!(catalog.find("chess club").is_none());
    }

    #[test]
    fn test_catalog_serializes_as_map_in_seed_order() {
        let catalog = Catalog::seed();

        let body = serde_json::to_string(&catalog).unwrap();

        assert!(body.starts_with("{\"Chess Club\":{\"description\""));
        assert!(!body.contains("\"name\""));
        let chess = body.find("Chess Club").unwrap();
        let science = body.find("Science Club").unwrap();
        assert!(chess < science);
    }
}
