//! blog-content: content collections for a markdown/MDX blog
//!
//! Posts are loaded from front-matter files, validated against a schema and
//! collected with the configured categories into a [`content::ContentStore`].
//! The [`query`] module derives the published, per-category and per-tag views
//! that page templates consume.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod query;

use anyhow::Result;
use std::path::Path;

pub use error::ContentError;

/// The blog site: configuration plus resolved directories
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Post collection directory
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Load the content store for this build cycle
    pub fn load(&self) -> Result<content::ContentStore, ContentError> {
        content::ContentLoader::new(self).load()
    }

    /// Load the content store on the blocking pool
    ///
    /// This is the one suspension point of a cycle; callers await it once
    /// and run every query against the returned snapshot.
    pub async fn fetch(&self) -> Result<content::ContentStore> {
        let blog = self.clone();
        let store = tokio::task::spawn_blocking(move || blog.load()).await??;
        Ok(store)
    }
}
