//! Loaded-once snapshot of the post and category collections

use std::collections::{HashMap, HashSet};

use super::{Category, Post};
use crate::error::ContentError;

/// Immutable snapshot of all validated entries for one build cycle
///
/// Iteration order of both collections is the order they were supplied in;
/// the published view relies on it for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    categories: Vec<Category>,
    posts: Vec<Post>,
}

impl ContentStore {
    /// Build a store, rejecting duplicate category ids/slugs and post ids
    pub fn new(categories: Vec<Category>, posts: Vec<Post>) -> Result<Self, ContentError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for category in &categories {
            if !ids.insert(category.id.as_str()) {
                return Err(ContentError::DuplicateCategory {
                    field: "id",
                    value: category.id.clone(),
                });
            }
            if !slugs.insert(category.slug.as_str()) {
                return Err(ContentError::DuplicateCategory {
                    field: "slug",
                    value: category.slug.clone(),
                });
            }
        }

        let mut seen: HashMap<&str, &Post> = HashMap::new();
        for post in &posts {
            if let Some(first) = seen.insert(post.id.as_str(), post) {
                return Err(ContentError::DuplicatePost {
                    id: post.id.clone(),
                    first: first.source.clone(),
                    second: post.source.clone(),
                });
            }
        }

        Ok(Self { categories, posts })
    }

    /// All posts, drafts included, in store order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// All categories, in configuration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Resolve a post's category reference against this snapshot
    pub fn resolve_category(&self, post: &Post) -> Option<&Category> {
        self.category(&post.category)
    }

    /// Posts whose category reference does not resolve
    pub fn dangling_references(&self) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| self.resolve_category(p).is_none())
            .collect()
    }

    /// Fail on the first post whose category reference does not resolve
    pub fn check_references(&self) -> Result<(), ContentError> {
        match self.dangling_references().first() {
            Some(post) => Err(ContentError::UnknownCategory {
                post: post.id.clone(),
                category: post.category.clone(),
            }),
            None => Ok(()),
        }
    }
}
