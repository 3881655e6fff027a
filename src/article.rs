use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug::Slug;

/// A published blog article.
///
/// `content` is long-form text carrying the block markers understood by
/// [`crate::render::blocks`]; `publish_date` is a display string, never
/// parsed or ordered by.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub publish_date: String,
    pub image_url: String,
    pub slug: Slug,
}

/// Insert payload for [`crate::store::ContentStore::insert_post`]; the store
/// assigns the id.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub publish_date: String,
    pub image_url: String,
    pub slug: Slug,
}

impl NewBlogPost {
    pub(crate) fn into_post(self, id: Uuid) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            category: self.category,
            publish_date: self.publish_date,
            image_url: self.image_url,
            slug: self.slug,
        }
    }
}
