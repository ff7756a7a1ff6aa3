//! Content module - post/category models, schema validation and the loaded store

mod frontmatter;
pub mod loader;
mod post;
pub mod schema;
mod store;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use post::{Category, Post};
pub use store::ContentStore;

/// Untyped key/value record as read from front-matter or configuration
pub type RawRecord = serde_yaml::Mapping;
