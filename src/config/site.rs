//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::RawRecord;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,

    // Directory
    /// Directory holding the post collection, relative to the base directory
    pub content_dir: String,
    pub category_dir: String,
    pub tag_dir: String,

    // Writing
    pub new_post_name: String,

    // Date format (Moment.js style)
    pub date_format: String,

    // Pagination
    pub per_page: usize,

    // Category & Tag
    /// Fail the load when a post names a category that is not configured
    pub strict_categories: bool,
    /// Category collection, validated when the content store is loaded
    pub categories: Vec<RawRecord>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            url: "http://example.com".to_string(),

            content_dir: "src/content/blog".to_string(),
            category_dir: "category".to_string(),
            tag_dir: "tags".to_string(),

            new_post_name: ":title.md".to_string(),

            date_format: "YYYY-MM-DD".to_string(),

            per_page: 10,

            strict_categories: false,
            categories: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}
