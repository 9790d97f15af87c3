//! Initialize a new devlog

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::Devlog;

/// File name of the example post
pub const SEED_POST: &str = "001-hello.md";

/// Create the source directory holding one example post.
///
/// An existing example post is left untouched.
pub fn seed_source(source_dir: &Path) -> Result<()> {
    fs::create_dir_all(source_dir)
        .with_context(|| format!("Failed to create {:?}", source_dir))?;

    let post_path = source_dir.join(SEED_POST);
    if post_path.exists() {
        return Ok(());
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let post = format!(
        r#"---
title: Hello
date: {}
tags: meta
---

Welcome to your devlog! This is the first post. Edit it or delete it, then
write the next one with:

```bash
$ devlog new "What I built today"
```

## Building

```bash
$ devlog build
```

Pages land in the output directory, ready to be served with `devlog serve`
or published with `devlog deploy`.
"#,
        today
    );

    fs::write(&post_path, post).with_context(|| format!("Failed to write {:?}", post_path))?;
    tracing::debug!("Seeded: {:?}", post_path);
    Ok(())
}

/// Default configuration file content
pub fn default_config() -> Result<String> {
    let defaults = SiteConfig::default();
    let value = json!({
        "title": defaults.title,
        "tagline": defaults.tagline,
        "author": defaults.author,
        "authorUrl": defaults.author_url,
        "siteUrl": defaults.site_url,
        "tagPages": defaults.tag_pages,
        "sitemap": defaults.sitemap,
        "postNav": defaults.post_nav,
        "contentFilter": defaults.content_filter,
        "excerptLength": defaults.excerpt_length,
        "missingSource": "seed",
        "highlightTheme": defaults.highlight_theme,
        "deployRepo": defaults.deploy_repo,
    });

    let mut content = serde_json::to_string_pretty(&value)?;
    content.push('\n');
    Ok(content)
}

/// Seed the source directory and write the default config.
///
/// Returns the paths that were created; existing files are left alone.
pub fn init_site(devlog: &Devlog) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    let source_dir = &devlog.paths.source_dir;
    if source_dir.exists() {
        tracing::info!("Source directory {:?} exists, leaving it alone", source_dir);
    } else {
        seed_source(source_dir)?;
        created.push(source_dir.join(SEED_POST));
    }

    let config_path = &devlog.paths.config_path;
    if config_path.exists() {
        tracing::info!("Config {:?} exists, leaving it alone", config_path);
    } else {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        fs::write(config_path, default_config()?)
            .with_context(|| format!("Failed to write {:?}", config_path))?;
        created.push(config_path.clone());
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SitePaths;
    use crate::content::FrontMatter;

    fn devlog_at(base: &Path) -> Devlog {
        Devlog::with_config(SitePaths::under(base), SiteConfig::default())
    }

    #[test]
    fn test_seed_post_front_matter() {
        let tmp = tempfile::tempdir().unwrap();
        seed_source(tmp.path()).unwrap();

        let raw = fs::read_to_string(tmp.path().join(SEED_POST)).unwrap();
        let (fm, body) = FrontMatter::parse(&raw);
        assert_eq!(fm.title(), Some("Hello"));
        assert_eq!(fm.tags(), vec!["meta"]);
        assert!(!fm.is_draft());
        assert!(body.contains("devlog new"));
    }

    #[test]
    fn test_seed_post_passes_content_filter() {
        let tmp = tempfile::tempdir().unwrap();
        seed_source(tmp.path()).unwrap();
        let raw = fs::read_to_string(tmp.path().join(SEED_POST)).unwrap();
        assert!(!crate::content::filter::contains_sensitive(&raw));
    }

    #[test]
    fn test_default_config_round_trips() {
        let content = default_config().unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let (config, issues) = SiteConfig::from_value(value);
        assert!(issues.is_empty());
        assert_eq!(config.title, "Devlog");
        assert_eq!(config.excerpt_length, 160);
        assert!(config.extra.is_empty());
        assert!(content.starts_with("{\n  \"title\""));
    }

    #[test]
    fn test_init_creates_then_leaves_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let devlog = devlog_at(tmp.path());

        let created = init_site(&devlog).unwrap();
        assert_eq!(created.len(), 2);
        assert!(devlog.paths.source_dir.join(SEED_POST).exists());
        assert!(devlog.paths.config_path.exists());

        fs::write(&devlog.paths.config_path, r#"{"title": "Mine"}"#).unwrap();
        let created = init_site(&devlog).unwrap();
        assert!(created.is_empty());
        assert_eq!(
            fs::read_to_string(&devlog.paths.config_path).unwrap(),
            r#"{"title": "Mine"}"#
        );
    }

    #[test]
    fn test_init_keeps_existing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let devlog = devlog_at(tmp.path());
        fs::create_dir_all(&devlog.paths.source_dir).unwrap();
        fs::write(devlog.paths.source_dir.join("001-mine.md"), "mine").unwrap();

        init_site(&devlog).unwrap();
        assert!(!devlog.paths.source_dir.join(SEED_POST).exists());
    }
}
