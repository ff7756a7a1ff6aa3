//! Error types for content loading and validation

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Kind of content entry an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Post,
    Category,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Post => f.write_str("post"),
            EntityKind::Category => f.write_str("category"),
        }
    }
}

/// What is wrong with a single frontmatter field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldProblem {
    #[error("is required")]
    Missing,

    #[error("must not be empty")]
    Empty,

    #[error("expected {expected}")]
    WrongType { expected: &'static str },

    #[error("`{value}` is not a recognizable date")]
    BadDate { value: String },
}

/// Errors raised while loading the content store
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{}: invalid front-matter: {message}", .path.display())]
    FrontMatter { path: PathBuf, message: String },

    #[error("{kind} `{entry}`: field `{field}` {problem}")]
    Validation {
        kind: EntityKind,
        entry: String,
        field: String,
        problem: FieldProblem,
    },

    #[error("duplicate category {field} `{value}`")]
    DuplicateCategory { field: &'static str, value: String },

    #[error("duplicate post id `{id}` ({} and {})", .first.display(), .second.display())]
    DuplicatePost {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("post `{post}` references unknown category `{category}`")]
    UnknownCategory { post: String, category: String },

    #[error("post `{post}`: hero image `{image}` not found at {}", .resolved.display())]
    MissingAsset {
        post: String,
        image: String,
        resolved: PathBuf,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    pub(crate) fn validation(
        kind: EntityKind,
        entry: &str,
        field: impl Into<String>,
        problem: FieldProblem,
    ) -> Self {
        ContentError::Validation {
            kind,
            entry: entry.to_string(),
            field: field.into(),
            problem,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }
}
