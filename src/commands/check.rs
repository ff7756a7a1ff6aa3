//! Validate site content

use anyhow::Result;

use crate::content::ContentStore;
use crate::query;

/// Report on a store that loaded successfully
///
/// Loading already enforced the schema; this adds the reference check and
/// prints a summary. Dangling category references fail the check even when
/// the load tolerated them.
pub fn run(store: &ContentStore) -> Result<()> {
    println!("{}", summary(store));

    let dangling = store.dangling_references();
    for post in &dangling {
        println!(
            "  unknown category {:?} in post {} ({})",
            post.category,
            post.id,
            post.source.display()
        );
    }
    if !dangling.is_empty() {
        anyhow::bail!(
            "{} post(s) reference unknown categories",
            dangling.len()
        );
    }

    println!("Content OK");
    Ok(())
}

/// One-line description of the store's contents
pub fn summary(store: &ContentStore) -> String {
    let published = query::published_posts(store).len();
    let drafts = store.posts().len() - published;
    let tags = query::tags_with_posts(store).len();
    format!(
        "{} published post(s), {} draft(s), {} categories, {} tags",
        published,
        drafts,
        store.categories().len(),
        tags
    )
}
