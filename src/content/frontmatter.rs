//! Front-matter parsing

use std::path::Path;

use super::RawRecord;
use crate::error::ContentError;

/// Front-matter block of a post, as an untyped key/value record
///
/// Typing happens later in [`super::schema`]; this layer only splits the
/// block from the body and decodes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub data: RawRecord,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// A file without any front-matter yields an empty record, which the
    /// schema then rejects for its missing required fields.
    pub fn parse<'a>(path: &Path, content: &'a str) -> Result<(Self, &'a str), ContentError> {
        let content = content.trim_start_matches('\u{feff}');
        let trimmed = content.trim_start();

        // YAML front-matter (---)
        if let Some(rest) = trimmed.strip_prefix("---") {
            return Self::parse_yaml(path, rest);
        }

        // JSON front-matter (;;; or {"key":)
        if trimmed.starts_with(";;;") || (!is_mdx(path) && starts_json_object(trimmed)) {
            return Self::parse_json(path, trimmed);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml<'a>(path: &Path, rest: &'a str) -> Result<(Self, &'a str), ContentError> {
        // The opening fence must stand on its own line
        let rest = match rest.find('\n') {
            Some(pos) if rest[..pos].trim().is_empty() => &rest[pos + 1..],
            _ => return Err(malformed(path, "opening `---` must be on its own line")),
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml_content = &rest[..offset];
                let remaining = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);

                if yaml_content.trim().is_empty() {
                    return Ok((FrontMatter::default(), remaining));
                }

                let data = serde_yaml::from_str::<RawRecord>(yaml_content)
                    .map_err(|e| malformed(path, e))?;
                return Ok((FrontMatter { data }, remaining));
            }
            offset += line.len();
        }

        Err(malformed(path, "missing closing `---`"))
    }

    fn parse_json<'a>(path: &Path, content: &'a str) -> Result<(Self, &'a str), ContentError> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest
                .find(";;;")
                .ok_or_else(|| malformed(path, "missing closing `;;;`"))?;
            let json_content = &rest[..end_pos];
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

            let data = serde_json::from_str::<RawRecord>(json_content)
                .map_err(|e| malformed(path, e))?;
            return Ok((FrontMatter { data }, remaining));
        }

        // Leading JSON object; the stream deserializer tells where it ends
        let mut stream = serde_json::Deserializer::from_str(content).into_iter::<RawRecord>();
        match stream.next() {
            Some(Ok(data)) => {
                let remaining = content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);
                Ok((FrontMatter { data }, remaining))
            }
            Some(Err(e)) => Err(malformed(path, e)),
            None => Err(malformed(path, "empty JSON front-matter")),
        }
    }

    /// Whether the block declared no fields at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// MDX bodies may open with a `{...}` expression, so only `;;;` marks JSON there
fn is_mdx(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "mdx")
}

/// A leading `{` counts as front-matter only when a key string or `}` follows
fn starts_json_object(content: &str) -> bool {
    content
        .strip_prefix('{')
        .map(|rest| rest.trim_start())
        .is_some_and(|rest| rest.starts_with('"') || rest.starts_with('}'))
}

fn malformed(path: &Path, message: impl ToString) -> ContentError {
    ContentError::FrontMatter {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
