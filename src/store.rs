use thiserror::Error;
use uuid::Uuid;

use crate::{
    article::{BlogPost, NewBlogPost},
    equipment::{Equipment, NewEquipment},
    exercise::{Exercise, NewExercise},
};

/// A record's slug is already taken within its collection.
///
/// Slug lookups assume at most one match, so collisions are rejected at
/// insert time rather than left to seed data discipline.
#[derive(Debug, Error)]
#[error("slug `{slug}` is already taken by another {collection}")]
pub struct SlugConflict {
    pub collection: &'static str,
    pub slug: String,
}

/// In-memory owner of the three content collections.
///
/// The store is constructed empty, populated once by seeding, and read for
/// the rest of the process lifetime. Ids are fresh v4 uuids; iteration
/// order is insertion order and stable within a run.
#[derive(Debug, Default)]
pub struct ContentStore {
    posts: Vec<BlogPost>,
    exercises: Vec<Exercise>,
    equipment: Vec<Equipment>,
}

impl ContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_post(&mut self, new: NewBlogPost) -> Result<&BlogPost, SlugConflict> {
        if self.posts.iter().any(|post| post.slug == new.slug) {
            return Err(SlugConflict {
                collection: "blog post",
                slug: new.slug.into_string(),
            });
        }
        self.posts.push(new.into_post(Uuid::new_v4()));
        Ok(self.posts.last().expect("just inserted"))
    }

    pub fn insert_exercise(&mut self, new: NewExercise) -> Result<&Exercise, SlugConflict> {
        if self.exercises.iter().any(|exercise| exercise.slug == new.slug) {
            return Err(SlugConflict {
                collection: "exercise",
                slug: new.slug.into_string(),
            });
        }
        self.exercises.push(new.into_exercise(Uuid::new_v4()));
        Ok(self.exercises.last().expect("just inserted"))
    }

    /// Equipment carries no slug, so inserting it cannot conflict.
    pub fn insert_equipment(&mut self, new: NewEquipment) -> &Equipment {
        self.equipment.push(new.into_equipment(Uuid::new_v4()));
        self.equipment.last().expect("just inserted")
    }

    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }
}
