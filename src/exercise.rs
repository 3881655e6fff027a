use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug::Slug;

/// Skill level shown on exercise cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Body region an exercise belongs to. The `"all"` value accepted by the
/// exercise list endpoint is a filter sentinel, not a category; it never
/// appears on a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Upper,
    Lower,
    Core,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Core => "core",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One entry of the exercise library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub target_muscles: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub image_url: String,
    pub instructions: String,
    pub tips: Vec<String>,
    pub slug: Slug,
}

/// Insert payload for [`crate::store::ContentStore::insert_exercise`].
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub target_muscles: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub image_url: String,
    pub instructions: String,
    pub tips: Vec<String>,
    pub slug: Slug,
}

impl NewExercise {
    pub(crate) fn into_exercise(self, id: Uuid) -> Exercise {
        Exercise {
            id,
            name: self.name,
            target_muscles: self.target_muscles,
            difficulty: self.difficulty,
            category: self.category,
            image_url: self.image_url,
            instructions: self.instructions,
            tips: self.tips,
            slug: self.slug,
        }
    }
}
