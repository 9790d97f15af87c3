//! Front-matter parsing

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `---`, block, `---`, body. The closing delimiter may end the input.
    static ref FRONT_MATTER_RE: Regex =
        Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---(?:\r?\n(.*)|\r?\n?\z)").unwrap();
}

/// A front-matter value: the literals `true`/`false` become booleans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Str(String),
    Bool(bool),
}

impl MetaValue {
    fn parse(raw: &str) -> Self {
        match raw {
            "true" => MetaValue::Bool(true),
            "false" => MetaValue::Bool(false),
            other => MetaValue::Str(other.to_string()),
        }
    }

    /// The string form, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Str(s) => Some(s),
            MetaValue::Bool(_) => None,
        }
    }
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, MetaValue>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, remaining_content); never fails.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(caps) = FRONT_MATTER_RE.captures(content) else {
            return (FrontMatter::default(), content);
        };

        let block = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let mut fields = IndexMap::new();
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), MetaValue::parse(value.trim()));
        }

        (FrontMatter { fields }, body)
    }

    /// Look up any key
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }

    /// Whether no keys were found
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Non-empty `title`
    pub fn title(&self) -> Option<&str> {
        self.non_empty_str("title")
    }

    /// Non-empty `date`, kept as written
    pub fn date(&self) -> Option<&str> {
        self.non_empty_str("date")
    }

    /// Tags from the comma-separated `tags` field: trimmed, lowercased,
    /// empties and repeats dropped
    pub fn tags(&self) -> Vec<String> {
        let Some(raw) = self.non_empty_str("tags") else {
            return Vec::new();
        };

        let mut tags: Vec<String> = Vec::new();
        for tag in raw.split(',').map(|t| t.trim().to_lowercase()) {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Only a literal `draft: true` marks a draft
    pub fn is_draft(&self) -> bool {
        matches!(self.fields.get("draft"), Some(MetaValue::Bool(true)))
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(MetaValue::as_str)
            .filter(|s| !s.is_empty())
    }
}
