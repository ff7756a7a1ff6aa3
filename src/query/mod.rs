//! Aggregated views over a content store
//!
//! Every function here is pure: it re-derives its result from the store it is
//! given and never mutates it, so repeated calls within a build cycle return
//! identical results.

mod paginator;

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::{Category, ContentStore, Post};

pub use paginator::Paginator;

/// A category with its published posts, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a Category,
    pub posts: Vec<&'a Post>,
}

/// A tag with its published posts, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagGroup<'a> {
    pub tag: &'a str,
    pub posts: Vec<&'a Post>,
}

impl TagGroup<'_> {
    /// URL-friendly form of the tag
    pub fn slug(&self) -> String {
        slug::slugify(self.tag)
    }

    /// Site-relative path of the tag listing page
    pub fn path(&self, tag_dir: &str) -> String {
        format!("/{}/{}/", tag_dir.trim_matches('/'), self.slug())
    }
}

/// Published posts, newest first
///
/// Drafts are dropped. The sort is stable, so posts sharing a publish date
/// keep their store order.
pub fn published_posts(store: &ContentStore) -> Vec<&Post> {
    let mut posts: Vec<&Post> = store.posts().iter().filter(|p| !p.is_draft).collect();
    posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    posts
}

/// One group per configured category, in configuration order
///
/// Categories without posts get an empty group. Posts whose category does
/// not resolve are in no group.
pub fn categories_with_posts(store: &ContentStore) -> Vec<CategoryGroup<'_>> {
    let published = published_posts(store);

    store
        .categories()
        .iter()
        .map(|category| CategoryGroup {
            category,
            posts: published
                .iter()
                .copied()
                .filter(|p| p.category == category.id)
                .collect(),
        })
        .collect()
}

/// Tag buckets in order of first appearance across the published view
///
/// Tags are compared as exact strings. Every occurrence of a tag in a post's
/// list appends the post to that tag's bucket.
pub fn tags_with_posts(store: &ContentStore) -> Vec<TagGroup<'_>> {
    let mut buckets: IndexMap<&str, Vec<&Post>> = IndexMap::new();

    for post in published_posts(store) {
        for tag in &post.tags {
            buckets.entry(tag.as_str()).or_default().push(post);
        }
    }

    buckets
        .into_iter()
        .map(|(tag, posts)| TagGroup { tag, posts })
        .collect()
}

/// The group for a single category, looked up by URL slug
pub fn category_by_slug<'a>(store: &'a ContentStore, slug: &str) -> Option<CategoryGroup<'a>> {
    let category = store.category_by_slug(slug)?;
    let posts = published_posts(store)
        .into_iter()
        .filter(|p| p.category == category.id)
        .collect();
    Some(CategoryGroup { category, posts })
}

/// Published posts carrying `tag`, newest first
pub fn posts_tagged<'a>(store: &'a ContentStore, tag: &str) -> Vec<&'a Post> {
    published_posts(store)
        .into_iter()
        .filter(|p| p.tags.iter().any(|t| t == tag))
        .collect()
}

/// Neighbours of a post within a newest-first list: (newer, older)
pub fn adjacent<'a>(posts: &[&'a Post], id: &str) -> (Option<&'a Post>, Option<&'a Post>) {
    let Some(pos) = posts.iter().position(|p| p.id == id) else {
        return (None, None);
    };
    let newer = pos.checked_sub(1).map(|i| posts[i]);
    let older = posts.get(pos + 1).copied();
    (newer, older)
}
