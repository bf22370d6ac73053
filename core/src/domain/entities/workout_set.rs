//! A single logged weight-lifting set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One set of one exercise, logged by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Unique identifier
    pub id: Uuid,

    /// User who logged the set
    pub user_id: Uuid,

    /// Exercise the set belongs to
    pub exercise_id: Uuid,

    /// When the set was logged
    pub logged_at: DateTime<Utc>,

    /// Weight lifted, kilograms
    pub weight_kg: f64,

    /// Repetition count
    pub reps: i32,

    /// Free-form comment
    pub comment: Option<String>,
}

impl WorkoutSet {
    /// Creates a new set logged now
    pub fn new(
        user_id: Uuid,
        exercise_id: Uuid,
        weight_kg: f64,
        reps: i32,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            exercise_id,
            logged_at: Utc::now(),
            weight_kg,
            reps,
            comment,
        }
    }

    /// Calendar day (UTC) the set was logged on
    pub fn day(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set() {
        let set = WorkoutSet::new(Uuid::new_v4(), Uuid::new_v4(), 62.5, 8, None);
        assert_eq!(set.weight_kg, 62.5);
        assert_eq!(set.reps, 8);
        assert_eq!(set.day(), set.logged_at.date_naive());
    }
}
