//! Content loader - loads the post collection and category list into a store

use std::fs;
use std::path::{Component, Path};
use walkdir::{DirEntry, WalkDir};

use super::schema::{validate_categories, validate_post};
use super::{ContentStore, FrontMatter, Post};
use crate::error::ContentError;
use crate::Blog;

/// Loads content from the content directory and site configuration
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load and validate everything into one snapshot
    ///
    /// Any invalid entry aborts the whole load.
    pub fn load(&self) -> Result<ContentStore, ContentError> {
        let categories = validate_categories(&self.blog.config.categories)?;
        let posts = self.load_posts()?;
        let store = ContentStore::new(categories, posts)?;

        if self.blog.config.strict_categories {
            store.check_references()?;
        } else {
            for post in store.dangling_references() {
                tracing::warn!(
                    "Post {} references unknown category {:?}; it will not appear in any category",
                    post.id,
                    post.category
                );
            }
        }

        let drafts = store.posts().iter().filter(|p| p.is_draft).count();
        tracing::info!(
            "Loaded {} posts ({} drafts) and {} categories",
            store.posts().len(),
            drafts,
            store.categories().len()
        );

        Ok(store)
    }

    /// Load all posts under the content directory, in file-name order
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        let walker = WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_excluded(e));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| content_dir.clone());
                ContentError::io(path, e.into())
            })?;

            let path = entry.path();
            if entry.file_type().is_file() && is_content_file(path) {
                posts.push(self.load_post(path)?);
            }
        }

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(path, &content)?;

        let id = entry_id(&self.blog.content_dir, path);
        let mut post = validate_post(&id, &fm.data)?;

        if let Some(image) = &post.hero_image {
            check_asset(&post.id, path, image)?;
        }

        post.source = path.to_path_buf();
        post.body = body.to_string();

        tracing::debug!("Loaded post {} from {:?}", post.id, path);
        Ok(post)
    }
}

/// Entry id: slugified relative path without extension; `dir/index` is `dir`
pub fn entry_id(content_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(content_dir).unwrap_or(path);
    let relative = relative.with_extension("");

    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(slug::slugify(s.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect();

    if parts.len() > 1 && parts.last().map(String::as_str) == Some("index") {
        parts.pop();
    }

    parts.join("/")
}

/// Relative hero images must exist next to the post; site paths and URLs are not checked
fn check_asset(post_id: &str, post_path: &Path, image: &str) -> Result<(), ContentError> {
    if image.starts_with('/') || image.contains("://") {
        return Ok(());
    }

    let resolved = post_path
        .parent()
        .map(|dir| dir.join(image))
        .unwrap_or_else(|| Path::new(image).to_path_buf());

    if resolved.exists() {
        Ok(())
    } else {
        Err(ContentError::MissingAsset {
            post: post_id.to_string(),
            image: image.to_string(),
            resolved,
        })
    }
}

/// Names starting with `_` or `.` are kept out of the collection
fn is_excluded(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('_') || s.starts_with('.'))
        .unwrap_or(false)
}

/// Check if a file is a markdown or MDX file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown" || e == "mdx")
        .unwrap_or(false)
}
