use crate::{
    article::BlogPost,
    equipment::Equipment,
    exercise::Exercise,
    store::ContentStore,
};

/// Filter value that selects every exercise category.
pub const ALL_CATEGORIES: &str = "all";

/// Read-only view over a seeded [`ContentStore`].
///
/// Constructed once seeding has finished; from that point on every
/// operation is a scan over a few dozen records, so lookups stay linear
/// and absence is an ordinary `None`, never an error.
#[derive(Debug)]
pub struct Catalog {
    store: ContentStore,
}

impl Catalog {
    #[must_use]
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn blog_posts(&self) -> &[BlogPost] {
        self.store.posts()
    }

    #[must_use]
    pub fn blog_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.store.posts().iter().find(|post| post.slug.as_str() == slug)
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        self.store.exercises()
    }

    /// Exercises matching `category`. The [`ALL_CATEGORIES`] sentinel lifts
    /// the restriction; any other unknown value simply matches nothing. The
    /// filter is a plain predicate, not a validated enum.
    #[must_use]
    pub fn exercises_by_category(&self, category: &str) -> Vec<&Exercise> {
        if category == ALL_CATEGORIES {
            return self.store.exercises().iter().collect();
        }
        self.store
            .exercises()
            .iter()
            .filter(|exercise| exercise.category.as_str() == category)
            .collect()
    }

    #[must_use]
    pub fn exercise_by_slug(&self, slug: &str) -> Option<&Exercise> {
        self.store
            .exercises()
            .iter()
            .find(|exercise| exercise.slug.as_str() == slug)
    }

    #[must_use]
    pub fn equipment(&self) -> &[Equipment] {
        self.store.equipment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn all_sentinel_matches_full_listing() {
        let catalog = seed::sample_catalog().unwrap();
        let all: Vec<_> = catalog
            .exercises_by_category(ALL_CATEGORIES)
            .iter()
            .map(|e| e.id)
            .collect();
        let unfiltered: Vec<_> = catalog.exercises().iter().map(|e| e.id).collect();
        assert_eq!(all, unfiltered);
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let catalog = seed::sample_catalog().unwrap();
        let upper = catalog.exercises_by_category("upper");
        assert!(!upper.is_empty());
        assert!(upper.iter().all(|e| e.category.as_str() == "upper"));

        let total = catalog.exercises().len();
        let by_category: usize = ["upper", "lower", "core"]
            .iter()
            .map(|c| catalog.exercises_by_category(c).len())
            .sum();
        assert_eq!(by_category, total);
    }

    #[test]
    fn unknown_category_is_empty_not_an_error() {
        let catalog = seed::sample_catalog().unwrap();
        assert!(catalog.exercises_by_category("cardio").is_empty());
    }

    #[test]
    fn slug_lookup_hits_and_misses() {
        let catalog = seed::sample_catalog().unwrap();
        let post = catalog.blog_post_by_slug("mastering-deadlift-form-guide").unwrap();
        assert_eq!(post.category, "Strength");
        assert!(catalog.blog_post_by_slug("no-such-article").is_none());

        assert!(catalog.exercise_by_slug("pull-ups").is_some());
        assert!(catalog.exercise_by_slug("no-such-exercise").is_none());
    }
}
