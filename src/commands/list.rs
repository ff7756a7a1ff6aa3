//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::ContentStore;
use crate::helpers::format_date;
use crate::query::{self, Paginator};
use crate::Blog;

/// List site content by type
pub fn run(
    blog: &Blog,
    store: &ContentStore,
    content_type: &str,
    page: Option<usize>,
) -> Result<()> {
    print!("{}", render(blog, store, content_type, page)?);
    Ok(())
}

/// Build the listing text for one content type
///
/// `page` selects one page of `per_page` published posts.
pub fn render(
    blog: &Blog,
    store: &ContentStore,
    content_type: &str,
    page: Option<usize>,
) -> Result<String> {
    let date_format = &blog.config.date_format;
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let posts = query::published_posts(store);
            writeln!(out, "Posts ({}):", posts.len())?;

            let paginator = Paginator::new(&posts, blog.config.per_page);
            let shown = match page {
                Some(n) => match paginator.page(n) {
                    Some(items) => {
                        writeln!(out, "Page {} of {}", n, paginator.page_count())?;
                        items
                    }
                    None => anyhow::bail!(
                        "Page {} out of range (1..={})",
                        n,
                        paginator.page_count()
                    ),
                },
                None => &posts[..],
            };

            for post in shown {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    format_date(&post.publish_date, date_format),
                    post.title,
                    post.id
                )?;
            }
        }
        "draft" | "drafts" => {
            let drafts: Vec<_> = store.posts().iter().filter(|p| p.is_draft).collect();
            writeln!(out, "Drafts ({}):", drafts.len())?;
            for post in drafts {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    format_date(&post.publish_date, date_format),
                    post.title,
                    post.id
                )?;
            }
        }
        "category" | "categories" => {
            let groups = query::categories_with_posts(store);
            writeln!(out, "Categories ({}):", groups.len())?;
            for group in groups {
                writeln!(
                    out,
                    "  {} ({}) {}",
                    group.category.name,
                    group.posts.len(),
                    group.category.path(&blog.config.category_dir)
                )?;
            }
        }
        "tag" | "tags" => {
            let groups = query::tags_with_posts(store);
            writeln!(out, "Tags ({}):", groups.len())?;
            for group in groups {
                writeln!(
                    out,
                    "  {} ({}) {}",
                    group.tag,
                    group.posts.len(),
                    group.path(&blog.config.tag_dir)
                )?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, draft, category, tag",
                content_type
            );
        }
    }

    Ok(out)
}
