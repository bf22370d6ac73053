//! Exercise catalog entry and its closed attribute enumerations.
//!
//! Equipment and muscle group are closed enums with exhaustive matching;
//! anything outside the set is rejected at the boundary via `FromStr`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Equipment used for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Machine,
    Cable,
    Dumbbell,
    Barbell,
    Bodyweight,
    Other,
}

impl Equipment {
    /// Stable storage/wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Machine => "machine",
            Equipment::Cable => "cable",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Barbell => "barbell",
            Equipment::Bodyweight => "bodyweight",
            Equipment::Other => "other",
        }
    }
}

impl std::str::FromStr for Equipment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "machine" => Ok(Equipment::Machine),
            "cable" => Ok(Equipment::Cable),
            "dumbbell" => Ok(Equipment::Dumbbell),
            "barbell" => Ok(Equipment::Barbell),
            "bodyweight" => Ok(Equipment::Bodyweight),
            "other" => Ok(Equipment::Other),
            _ => Err(format!("Unknown equipment: {}", s)),
        }
    }
}

/// Primary muscle group targeted by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Muscle {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Fullbody,
    Other,
}

impl Muscle {
    /// Stable storage/wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Muscle::Chest => "chest",
            Muscle::Back => "back",
            Muscle::Legs => "legs",
            Muscle::Shoulders => "shoulders",
            Muscle::Arms => "arms",
            Muscle::Core => "core",
            Muscle::Fullbody => "fullbody",
            Muscle::Other => "other",
        }
    }
}

impl std::str::FromStr for Muscle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chest" => Ok(Muscle::Chest),
            "back" => Ok(Muscle::Back),
            "legs" => Ok(Muscle::Legs),
            "shoulders" => Ok(Muscle::Shoulders),
            "arms" => Ok(Muscle::Arms),
            "core" => Ok(Muscle::Core),
            "fullbody" => Ok(Muscle::Fullbody),
            "other" => Ok(Muscle::Other),
            _ => Err(format!("Unknown muscle group: {}", s)),
        }
    }
}

/// Catalog visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    /// Visible to every user (shared catalog)
    Public,
    /// Visible only to the owner
    Private,
}

impl Visibility {
    /// Stable storage identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "PUBLIC",
            Visibility::Private => "PRIVATE",
        }
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Visibility::Public),
            "PRIVATE" => Ok(Visibility::Private),
            _ => Err(format!("Unknown visibility: {}", s)),
        }
    }
}

/// An exercise a user can log sets against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Equipment used
    pub equipment: Equipment,

    /// Primary muscle group
    pub muscle: Muscle,

    /// Free-form notes
    pub notes: Option<String>,

    /// Illustration URL
    pub image_url: Option<String>,

    /// Shared or owner-only
    pub visibility: Visibility,

    /// Owner; None for shared catalog entries
    pub owner_id: Option<Uuid>,
}

impl Exercise {
    /// Creates a private exercise owned by `owner_id`
    pub fn new_private(
        name: String,
        equipment: Equipment,
        muscle: Muscle,
        notes: Option<String>,
        image_url: Option<String>,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            equipment,
            muscle,
            notes,
            image_url,
            visibility: Visibility::Private,
            owner_id: Some(owner_id),
        }
    }

    /// Whether `user_id` may see and log against this exercise
    pub fn visible_to(&self, user_id: Uuid) -> bool {
        match self.visibility {
            Visibility::Public => true,
            Visibility::Private => self.owner_id == Some(user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_round_trip() {
        for s in ["machine", "cable", "dumbbell", "barbell", "bodyweight", "other"] {
            let parsed: Equipment = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert!("kettlebell".parse::<Equipment>().is_err());
    }

    #[test]
    fn test_muscle_round_trip() {
        for s in [
            "chest", "back", "legs", "shoulders", "arms", "core", "fullbody", "other",
        ] {
            let parsed: Muscle = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert!("neck".parse::<Muscle>().is_err());
    }

    #[test]
    fn test_visibility_rules() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let private = Exercise::new_private(
            "Incline press".to_string(),
            Equipment::Dumbbell,
            Muscle::Chest,
            None,
            None,
            owner,
        );
        assert!(private.visible_to(owner));
        assert!(!private.visible_to(stranger));

        let mut public = private.clone();
        public.visibility = Visibility::Public;
        public.owner_id = None;
        assert!(public.visible_to(stranger));
    }
}
