use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resources::CollectionResource;

/// Format of `BlogPost::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    /// Stamped on create, kept across updates.
    pub date: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl CollectionResource for BlogPost {
    const COLLECTION: &'static str = "blog";
    const LABEL: &'static str = "Blog post";
    const TAG_FIELD: Option<&'static str> = Some("tags");
    type Draft = BlogPostDraft;

    fn mint(id: String, draft: BlogPostDraft, today: NaiveDate) -> Self {
        let BlogPostDraft {
            title,
            excerpt,
            content,
            tags,
        } = draft;
        BlogPost {
            id,
            date: today.format(DATE_FORMAT).to_string(),
            title,
            excerpt,
            content,
            tags,
        }
    }
}
