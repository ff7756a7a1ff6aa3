//! Export the aggregated views as JSON for templates

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::{Category, ContentStore, Post};
use crate::query;

/// Everything a template needs for one build, in one document
#[derive(Debug, Serialize)]
pub struct SiteData<'a> {
    pub site: SiteMeta<'a>,
    pub posts: Vec<&'a Post>,
    pub categories: Vec<CategoryEntry<'a>>,
    pub tags: Vec<TagEntry<'a>>,
}

/// Site metadata from the configuration
#[derive(Debug, Serialize)]
pub struct SiteMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    pub url: &'a str,
}

/// A category group; posts are listed by id, the full posts are in `posts`
#[derive(Debug, Serialize)]
pub struct CategoryEntry<'a> {
    pub category: &'a Category,
    pub path: String,
    pub posts: Vec<&'a str>,
}

/// A tag bucket; posts are listed by id, the full posts are in `posts`
#[derive(Debug, Serialize)]
pub struct TagEntry<'a> {
    pub tag: &'a str,
    pub slug: String,
    pub path: String,
    pub posts: Vec<&'a str>,
}

fn post_ids<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

impl<'a> SiteData<'a> {
    pub fn build(config: &'a SiteConfig, store: &'a ContentStore) -> Self {
        let categories = query::categories_with_posts(store)
            .into_iter()
            .map(|g| CategoryEntry {
                category: g.category,
                path: g.category.path(&config.category_dir),
                posts: post_ids(&g.posts),
            })
            .collect();

        let tags = query::tags_with_posts(store)
            .into_iter()
            .map(|g| TagEntry {
                tag: g.tag,
                slug: g.slug(),
                path: g.path(&config.tag_dir),
                posts: post_ids(&g.posts),
            })
            .collect();

        Self {
            site: SiteMeta {
                title: &config.title,
                description: &config.description,
                author: &config.author,
                url: &config.url,
            },
            posts: query::published_posts(store),
            categories,
            tags,
        }
    }
}

/// Write the site data to `output`, or stdout when none is given
pub fn run(config: &SiteConfig, store: &ContentStore, output: Option<&Path>) -> Result<()> {
    let json = to_json(config, store)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::info!("Wrote site data to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Serialize the site data as pretty-printed JSON
pub fn to_json(config: &SiteConfig, store: &ContentStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SiteData::build(config, store))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn store() -> ContentStore {
        let day = |d| Utc.with_ymd_and_hms(2025, 9, d, 0, 0, 0).unwrap();
        ContentStore::new(
            vec![
                Category::new("tech", "tech", "Technology"),
                Category::new("design", "design", "Design"),
                Category::new("scratch", "scratch", "Scratchpad"),
            ],
            vec![
                Post::new("a", "A", day(5), "tech").with_tags(["js"]),
                Post::new("b", "B", day(3), "tech").with_tags(["js", "Web Dev"]),
                Post::new("c", "C", day(1), "design"),
                Post::new("d", "D", day(6), "tech").draft(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_dump_shape() {
        let config = SiteConfig::default();
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&config, &store()).unwrap()).unwrap();

        let post_ids: Vec<_> = json["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(post_ids, vec!["a", "b", "c"]);

        assert_eq!(json["categories"][0]["category"]["id"], "tech");
        assert_eq!(json["categories"][0]["path"], "/category/tech/");
        assert_eq!(json["categories"][0]["posts"], serde_json::json!(["a", "b"]));
        assert_eq!(json["categories"][2]["posts"], serde_json::json!([]));

        assert_eq!(json["tags"][0]["tag"], "js");
        assert_eq!(json["tags"][1]["slug"], "web-dev");
        assert_eq!(json["tags"][1]["path"], "/tags/web-dev/");
        assert_eq!(json["tags"][1]["posts"], serde_json::json!(["b"]));
    }

    #[test]
    fn test_dump_includes_site_metadata() {
        let config: SiteConfig =
            serde_yaml::from_str("title: Notes\nauthor: Sam\nurl: https://notes.example\n")
                .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&config, &store()).unwrap()).unwrap();
        assert_eq!(json["site"]["title"], "Notes");
        assert_eq!(json["site"]["author"], "Sam");
        assert_eq!(json["site"]["url"], "https://notes.example");
        assert_eq!(json["site"]["description"], "");
    }

    #[test]
    fn test_dump_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/site.json");
        run(&SiteConfig::default(), &store(), Some(&path)).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"publishDate\""));
    }
}
