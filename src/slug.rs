use slug::slugify;
use std::{fmt, str::FromStr};

#[derive(Debug, thiserror::Error)]
#[error("slug is empty")]
pub struct EmptySlug;

/// URL-safe, human-readable identifier for a blog post or exercise,
/// distinct from its generated id.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn from_title(title: &str) -> Result<Self, EmptySlug> {
        let generated = slugify(title);
        Slug::from_str(&generated)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Slug {
    type Err = EmptySlug;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmptySlug);
        }

        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_title() {
        let slug = Slug::from_title("Overhead Press").unwrap();
        assert_eq!(slug.as_str(), "overhead-press");
    }

    #[test]
    fn keeps_explicit_value_trimmed() {
        let slug: Slug = " pull-ups ".parse().unwrap();
        assert_eq!(slug.as_str(), "pull-ups");
    }

    #[test]
    fn rejects_blank_input() {
        assert!(Slug::from_str("   ").is_err());
        assert!(Slug::from_title("!!!").is_err());
    }
}
