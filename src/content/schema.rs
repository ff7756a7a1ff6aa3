//! Schema validation for post front-matter and category records
//!
//! Each entity kind has one explicit validation function that turns a raw
//! record into a typed value or a [`ContentError::Validation`] naming the
//! entry and the offending field.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde_yaml::Value;

use super::{Category, Post, RawRecord};
use crate::error::{ContentError, EntityKind, FieldProblem};

/// Date-time layouts without an offset; interpreted as UTC
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Layouts carrying an explicit offset that RFC 3339 does not accept
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
];

/// Date-only layouts; midnight UTC
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Validate a post's front-matter record
///
/// `id` is the entry id used in error messages. The returned post has an
/// empty `source` and `body`; the loader fills those in.
pub fn validate_post(id: &str, record: &RawRecord) -> Result<Post, ContentError> {
    let fields = Fields::new(EntityKind::Post, id, record);

    let title = fields.non_empty_str("title")?;
    let description = fields.required_str("description")?;
    let publish_date = fields
        .date("publishDate")?
        .ok_or_else(|| fields.error("publishDate", FieldProblem::Missing))?;
    let updated_date = fields.date("updatedDate")?;
    let is_draft = fields.bool_or("isDraft", false)?;
    let hero_image = fields.optional_non_empty_str("heroImage")?;
    let category = fields.reference("category")?;
    let tags = fields.string_list("tags")?;

    Ok(Post {
        id: id.to_string(),
        source: Default::default(),
        title: title.to_string(),
        description: description.to_string(),
        publish_date,
        updated_date,
        is_draft,
        hero_image: hero_image.map(str::to_string),
        category: category.to_string(),
        tags,
        body: String::new(),
    })
}

/// Validate one category record from the site configuration
pub fn validate_category(entry: &str, record: &RawRecord) -> Result<Category, ContentError> {
    let fields = Fields::new(EntityKind::Category, entry, record);

    Ok(Category {
        id: fields.non_empty_str("id")?.to_string(),
        slug: fields.non_empty_str("slug")?.to_string(),
        name: fields.non_empty_str("name")?.to_string(),
    })
}

/// Validate the configured category list, in order
pub fn validate_categories(records: &[RawRecord]) -> Result<Vec<Category>, ContentError> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| validate_category(&format!("categories[{}]", i), record))
        .collect()
}

/// Coerce a front-matter value into a UTC date-time
///
/// Strings are tried against RFC 3339 and a list of common layouts;
/// numbers are milliseconds since the Unix epoch.
pub fn coerce_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_string(s),
        Value::Number(n) => {
            if let Some(ms) = n.as_i64() {
                DateTime::<Utc>::from_timestamp_millis(ms)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .and_then(|f| DateTime::<Utc>::from_timestamp_millis(f as i64))
            }
        }
        Value::Tagged(tagged) => coerce_date(&tagged.value),
        _ => None,
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Typed accessors over one record, producing errors tagged with the entry
struct Fields<'a> {
    kind: EntityKind,
    entry: &'a str,
    record: &'a RawRecord,
}

impl<'a> Fields<'a> {
    fn new(kind: EntityKind, entry: &'a str, record: &'a RawRecord) -> Self {
        Self {
            kind,
            entry,
            record,
        }
    }

    fn error(&self, field: impl Into<String>, problem: FieldProblem) -> ContentError {
        ContentError::validation(self.kind, self.entry, field, problem)
    }

    /// Explicit `null` counts as absent
    fn get(&self, key: &str) -> Option<&'a Value> {
        match self.record.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn optional_str(&self, key: &str) -> Result<Option<&'a str>, ContentError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.error(key, FieldProblem::WrongType { expected: "a string" })),
        }
    }

    fn optional_non_empty_str(&self, key: &str) -> Result<Option<&'a str>, ContentError> {
        match self.optional_str(key)? {
            Some(s) if s.trim().is_empty() => Err(self.error(key, FieldProblem::Empty)),
            other => Ok(other),
        }
    }

    fn required_str(&self, key: &str) -> Result<&'a str, ContentError> {
        self.optional_str(key)?
            .ok_or_else(|| self.error(key, FieldProblem::Missing))
    }

    fn non_empty_str(&self, key: &str) -> Result<&'a str, ContentError> {
        self.optional_non_empty_str(key)?
            .ok_or_else(|| self.error(key, FieldProblem::Missing))
    }

    fn bool_or(&self, key: &str, default: bool) -> Result<bool, ContentError> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.error(key, FieldProblem::WrongType { expected: "a boolean" })),
        }
    }

    fn date(&self, key: &str) -> Result<Option<DateTime<Utc>>, ContentError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        match value {
            Value::String(s) => coerce_date(value)
                .map(Some)
                .ok_or_else(|| self.error(key, FieldProblem::BadDate { value: s.clone() })),
            Value::Number(n) => coerce_date(value)
                .map(Some)
                .ok_or_else(|| self.error(key, FieldProblem::BadDate { value: n.to_string() })),
            _ => coerce_date(value)
                .map(Some)
                .ok_or_else(|| self.error(key, FieldProblem::WrongType { expected: "a date" })),
        }
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>, ContentError> {
        let Some(value) = self.get(key) else {
            return Ok(Vec::new());
        };
        let Value::Sequence(items) = value else {
            return Err(self.error(
                key,
                FieldProblem::WrongType {
                    expected: "a list of strings",
                },
            ));
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) if s.trim().is_empty() => {
                    Err(self.error(format!("{}[{}]", key, i), FieldProblem::Empty))
                }
                Value::String(s) => Ok(s.clone()),
                _ => Err(self.error(
                    format!("{}[{}]", key, i),
                    FieldProblem::WrongType { expected: "a string" },
                )),
            })
            .collect()
    }

    /// A reference is either a bare id or `{ collection: ..., id: ... }`
    fn reference(&self, key: &str) -> Result<&'a str, ContentError> {
        let expected = FieldProblem::WrongType {
            expected: "a category id",
        };
        match self.get(key) {
            None => Err(self.error(key, FieldProblem::Missing)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(self.error(key, FieldProblem::Empty))
            }
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(Value::Mapping(m)) => match m.get("id") {
                Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.as_str()),
                _ => Err(self.error(format!("{}.id", key), expected)),
            },
            Some(_) => Err(self.error(key, expected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(yaml: &str) -> RawRecord {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn problem(err: ContentError) -> (String, FieldProblem) {
        match err {
            ContentError::Validation { field, problem, .. } => (field, problem),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_full_post() {
        let post = validate_post(
            "hello-world",
            &record(
                r#"
title: Hello World
description: First post
publishDate: 2025-09-05
updatedDate: "2025-09-07T08:30:00Z"
isDraft: false
heroImage: ./hero.png
category: tech
tags: [js, css]
"#,
            ),
        )
        .unwrap();

        assert_eq!(post.id, "hello-world");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.description, "First post");
        assert_eq!(
            post.publish_date,
            Utc.with_ymd_and_hms(2025, 9, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(
            post.updated_date,
            Some(Utc.with_ymd_and_hms(2025, 9, 7, 8, 30, 0).unwrap())
        );
        assert_eq!(post.hero_image.as_deref(), Some("./hero.png"));
        assert_eq!(post.category, "tech");
        assert_eq!(post.tags, vec!["js", "css"]);
    }

    #[test]
    fn test_post_defaults() {
        let post = validate_post(
            "minimal",
            &record("title: Minimal\ndescription: ''\npublishDate: 2025-01-01\ncategory: tech\n"),
        )
        .unwrap();
        assert!(!post.is_draft);
        assert!(post.tags.is_empty());
        assert_eq!(post.updated_date, None);
        assert_eq!(post.hero_image, None);
        assert_eq!(post.description, "");
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let post = validate_post(
            "nulls",
            &record(
                "title: T\ndescription: d\npublishDate: 2025-01-01\ncategory: tech\ntags:\nisDraft: ~\nupdatedDate: null\n",
            ),
        )
        .unwrap();
        assert!(post.tags.is_empty());
        assert!(!post.is_draft);
        assert_eq!(post.updated_date, None);
    }

    #[test]
    fn test_missing_and_empty_title() {
        let err = validate_post(
            "p",
            &record("description: d\npublishDate: 2025-01-01\ncategory: tech\n"),
        )
        .unwrap_err();
        assert_eq!(problem(err), ("title".to_string(), FieldProblem::Missing));

        let err = validate_post(
            "p",
            &record("title: '  '\ndescription: d\npublishDate: 2025-01-01\ncategory: tech\n"),
        )
        .unwrap_err();
        assert_eq!(problem(err), ("title".to_string(), FieldProblem::Empty));
    }

    #[test]
    fn test_missing_publish_date() {
        let err = validate_post("p", &record("title: T\ndescription: d\ncategory: tech\n"))
            .unwrap_err();
        assert_eq!(
            problem(err),
            ("publishDate".to_string(), FieldProblem::Missing)
        );
    }

    #[test]
    fn test_bad_date_names_value() {
        let err = validate_post(
            "p",
            &record("title: T\ndescription: d\npublishDate: someday\ncategory: tech\n"),
        )
        .unwrap_err();
        assert_eq!(
            problem(err),
            (
                "publishDate".to_string(),
                FieldProblem::BadDate {
                    value: "someday".to_string()
                }
            )
        );
    }

    #[test]
    fn test_wrong_types() {
        let base = "title: T\ndescription: d\npublishDate: 2025-01-01\ncategory: tech\n";

        let err = validate_post("p", &record(&format!("{base}isDraft: 'yes'\n"))).unwrap_err();
        assert_eq!(
            problem(err),
            (
                "isDraft".to_string(),
                FieldProblem::WrongType {
                    expected: "a boolean"
                }
            )
        );

        let err = validate_post("p", &record(&format!("{base}tags: rust\n"))).unwrap_err();
        assert_eq!(problem(err).0, "tags");

        let err = validate_post("p", &record(&format!("{base}tags: [rust, 7]\n"))).unwrap_err();
        assert_eq!(problem(err).0, "tags[1]");

        let err = validate_post("p", &record(&format!("{base}heroImage: 3\n"))).unwrap_err();
        assert_eq!(problem(err).0, "heroImage");
    }

    #[test]
    fn test_category_reference_forms() {
        let post = validate_post(
            "p",
            &record(
                "title: T\ndescription: d\npublishDate: 2025-01-01\ncategory:\n  collection: category\n  id: design\n",
            ),
        )
        .unwrap();
        assert_eq!(post.category, "design");

        let err = validate_post(
            "p",
            &record("title: T\ndescription: d\npublishDate: 2025-01-01\ncategory: [a]\n"),
        )
        .unwrap_err();
        assert_eq!(problem(err).0, "category");

        let err = validate_post("p", &record("title: T\ndescription: d\npublishDate: 2025-01-01\n"))
            .unwrap_err();
        assert_eq!(problem(err), ("category".to_string(), FieldProblem::Missing));
    }

    #[test]
    fn test_coerce_date_layouts() {
        let midnight = Utc.with_ymd_and_hms(2025, 9, 5, 0, 0, 0).unwrap();
        for s in [
            "2025-09-05",
            "2025/09/05",
            "September 5, 2025",
            "Sep 5 2025",
            "5 September 2025",
            "2025-09-05T00:00:00Z",
            "2025-09-05 00:00:00",
            "2025-09-05T02:00:00+02:00",
            "2025-09-05T02:00:00+0200",
        ] {
            assert_eq!(
                coerce_date(&Value::String(s.to_string())),
                Some(midnight),
                "{s}"
            );
        }
    }

    #[test]
    fn test_coerce_date_from_millis() {
        let value: Value = serde_yaml::from_str("1757030400000").unwrap();
        assert_eq!(
            coerce_date(&value),
            Some(Utc.with_ymd_and_hms(2025, 9, 5, 0, 0, 0).unwrap())
        );
        assert_eq!(coerce_date(&Value::Bool(true)), None);
    }

    #[test]
    fn test_validate_categories() {
        let records: Vec<RawRecord> = serde_yaml::from_str(
            r#"
- id: tech
  slug: tech
  name: Technology
- id: design
  name: Design
"#,
        )
        .unwrap();

        let err = validate_categories(&records).unwrap_err();
        assert_eq!(
            err.to_string(),
            "category `categories[1]`: field `slug` is required"
        );

        let categories = validate_categories(&records[..1]).unwrap();
        assert_eq!(categories, vec![Category::new("tech", "tech", "Technology")]);
    }
}
