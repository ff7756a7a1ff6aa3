//! Create a new post

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::content::schema::validate_categories;
use crate::Blog;

/// Options for a new post
#[derive(Debug, Default)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub tags: &'a [String],
    pub draft: bool,
    pub mdx: bool,
    /// File name (without extension) overriding `new_post_name`
    pub path: Option<&'a str>,
}

/// Front-matter written into the scaffold
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Scaffold<'a> {
    title: &'a str,
    description: &'a str,
    publish_date: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_draft: bool,
    category: &'a str,
    tags: &'a [String],
}

/// Create a post file whose front-matter passes the schema
pub fn create_post(blog: &Blog, post: &NewPost<'_>) -> Result<PathBuf> {
    let now = chrono::Utc::now();

    if post.title.trim().is_empty() {
        anyhow::bail!("Post title must not be empty");
    }

    let categories = validate_categories(&blog.config.categories)?;
    if !categories.iter().any(|c| c.id == post.category) {
        let known: Vec<_> = categories.iter().map(|c| c.id.as_str()).collect();
        anyhow::bail!(
            "Unknown category: {}. Available: {}",
            post.category,
            known.join(", ")
        );
    }

    // Generate filename
    let filename = if let Some(p) = post.path {
        let relative = Path::new(p);
        if p.trim().is_empty()
            || !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            anyhow::bail!("Path must stay inside the content directory: {}", p);
        }
        format!("{}.md", p)
    } else {
        let slug = slug::slugify(post.title);
        if slug.is_empty() {
            anyhow::bail!(
                "Title {:?} has no characters usable in a file name; pass --path",
                post.title
            );
        }

        blog.config
            .new_post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
            .replace(":i_month", &now.format("%-m").to_string())
            .replace(":i_day", &now.format("%-d").to_string())
    };

    let mut file_path = blog.content_dir.join(filename);
    if post.mdx {
        file_path.set_extension("mdx");
    }

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold = Scaffold {
        title: post.title,
        description: "",
        publish_date: now.format("%Y-%m-%d").to_string(),
        is_draft: post.draft,
        category: post.category,
        tags: post.tags,
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&scaffold)?);

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
