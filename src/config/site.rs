//! Site configuration (devlog.config.json)

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What to do when the source directory does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSource {
    /// Create the directory with an example post
    #[default]
    Seed,
    /// Fail the build
    Abort,
}

/// Main site configuration
#[derive(Debug, Clone)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub author: String,
    pub author_url: String,
    pub site_url: String,

    // Features
    pub tag_pages: bool,
    pub sitemap: bool,
    pub post_nav: bool,
    pub content_filter: bool,

    // Writing
    pub excerpt_length: usize,
    pub missing_source: MissingSource,
    pub highlight_theme: String,

    // Deploy
    pub deploy_repo: String,

    /// Unrecognized keys, kept verbatim and in file order
    pub extra: IndexMap<String, Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Devlog".to_string(),
            tagline: String::new(),
            author: String::new(),
            author_url: String::new(),
            site_url: String::new(),

            tag_pages: true,
            sitemap: true,
            post_nav: true,
            content_filter: false,

            excerpt_length: 160,
            missing_source: MissingSource::Seed,
            highlight_theme: "base16-ocean.dark".to_string(),

            deploy_repo: String::new(),

            extra: IndexMap::new(),
        }
    }
}

/// A problem found while loading the configuration. Never fatal.
#[derive(Debug, Error)]
pub enum ConfigIssue {
    #[error("Failed to read config at {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config root should be an object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Config \"{key}\" should be {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl SiteConfig {
    /// Load configuration from a file.
    ///
    /// A missing file gives the defaults. Unreadable or malformed files also
    /// give the defaults, with the issue returned alongside.
    pub fn load<P: AsRef<Path>>(path: P) -> (Self, Vec<ConfigIssue>) {
        let path = path.as_ref();
        if !path.exists() {
            return (Self::default(), Vec::new());
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                let issue = ConfigIssue::Unreadable {
                    path: path.to_path_buf(),
                    source,
                };
                return (Self::default(), vec![issue]);
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(raw) => Self::from_value(raw),
            Err(source) => {
                let issue = ConfigIssue::Malformed {
                    path: path.to_path_buf(),
                    source,
                };
                (Self::default(), vec![issue])
            }
        }
    }

    /// Load configuration and log every issue as a warning
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let (config, issues) = Self::load(path.as_ref());
        for issue in &issues {
            tracing::warn!("{}", issue);
        }
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        config
    }

    /// Build a configuration from parsed JSON, validating the known keys
    pub fn from_value(raw: Value) -> (Self, Vec<ConfigIssue>) {
        let mut raw = match raw {
            Value::Object(map) => map,
            other => {
                let issue = ConfigIssue::NotAnObject {
                    found: json_type(&other),
                };
                return (Self::default(), vec![issue]);
            }
        };

        let defaults = Self::default();
        let mut issues = Vec::new();
        let mut fields = Fields {
            raw: &mut raw,
            issues: &mut issues,
        };

        let config = Self {
            title: fields.take("title", "string", defaults.title),
            tagline: fields.take("tagline", "string", defaults.tagline),
            author: fields.take("author", "string", defaults.author),
            author_url: fields.take("authorUrl", "string", defaults.author_url),
            site_url: fields.take("siteUrl", "string", defaults.site_url),

            tag_pages: fields.take("tagPages", "boolean", defaults.tag_pages),
            sitemap: fields.take("sitemap", "boolean", defaults.sitemap),
            post_nav: fields.take("postNav", "boolean", defaults.post_nav),
            content_filter: fields.take("contentFilter", "boolean", defaults.content_filter),

            excerpt_length: fields.take("excerptLength", "integer", defaults.excerpt_length),
            missing_source: fields.take(
                "missingSource",
                "\"seed\" or \"abort\"",
                defaults.missing_source,
            ),
            highlight_theme: fields.take("highlightTheme", "string", defaults.highlight_theme),

            deploy_repo: fields.take("deployRepo", "string", defaults.deploy_repo),

            extra: raw.into_iter().collect(),
        };

        (config, issues)
    }

    /// Site URL without a trailing slash, for building absolute links
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

/// Pulls recognized keys out of the raw map, leaving the rest as passthrough
struct Fields<'a> {
    raw: &'a mut Map<String, Value>,
    issues: &'a mut Vec<ConfigIssue>,
}

impl Fields<'_> {
    fn take<T: DeserializeOwned>(&mut self, key: &str, expected: &'static str, default: T) -> T {
        let Some(value) = self.raw.shift_remove(key) else {
            return default;
        };

        match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => parsed,
            Err(_) => {
                self.issues.push(ConfigIssue::TypeMismatch {
                    key: key.to_string(),
                    expected,
                    found: json_type(&value),
                });
                default
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
