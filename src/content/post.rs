//! Post and Category models

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Entry id: slugified path relative to the content directory, no extension
    pub id: String,

    /// Source file path
    pub source: PathBuf,

    /// Post title
    pub title: String,

    /// Short summary
    pub description: String,

    /// Publication date
    pub publish_date: DateTime<Utc>,

    /// Last updated date
    pub updated_date: Option<DateTime<Utc>>,

    /// Drafts never appear in published views
    pub is_draft: bool,

    /// Image asset reference, as written in the front-matter
    pub hero_image: Option<String>,

    /// Id of the category this post belongs to
    pub category: String,

    /// Post tags, in front-matter order
    pub tags: Vec<String>,

    /// Raw markdown/MDX after the front-matter
    #[serde(skip_serializing)]
    pub body: String,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: &str, title: &str, publish_date: DateTime<Utc>, category: &str) -> Self {
        Self {
            id: id.to_string(),
            source: PathBuf::from(format!("{}.md", id)),
            title: title.to_string(),
            description: String::new(),
            publish_date,
            updated_date: None,
            is_draft: false,
            hero_image: None,
            category: category.to_string(),
            tags: Vec::new(),
            body: String::new(),
        }
    }

    /// Builder-style helper for tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper marking the post as a draft
    pub fn draft(mut self) -> Self {
        self.is_draft = true;
        self
    }
}

/// A category from the site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Reference key used by posts
    pub id: String,
    /// URL path segment
    pub slug: String,
    /// Display name
    pub name: String,
}

impl Category {
    pub fn new(id: &str, slug: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            slug: slug.to_string(),
            name: name.to_string(),
        }
    }

    /// Site-relative path of the category listing page
    pub fn path(&self, category_dir: &str) -> String {
        format!("/{}/{}/", category_dir.trim_matches('/'), self.slug)
    }
}
