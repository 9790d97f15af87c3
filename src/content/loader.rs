//! Content loader - turns the source directory into a `SiteIndex`

use anyhow::{bail, Context, Result};
use std::fs;
use walkdir::WalkDir;

use super::{filter, text, FrontMatter, MarkdownRenderer, Post, SiteIndex};
use crate::commands::init;
use crate::config::MissingSource;
use crate::Devlog;

/// Loads posts from the source directory
pub struct ContentLoader<'a> {
    devlog: &'a Devlog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(devlog: &'a Devlog) -> Self {
        let renderer = MarkdownRenderer::with_theme(&devlog.config.highlight_theme);
        Self { devlog, renderer }
    }

    /// Load every publishable post, newest first
    pub fn load(&self) -> Result<SiteIndex> {
        self.ensure_source()?;

        let mut index = SiteIndex::default();
        for name in self.source_files()? {
            let path = self.devlog.paths.source_dir.join(&name);
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let (fm, body) = FrontMatter::parse(&raw);

            if self.devlog.config.content_filter {
                if let Some(rule) = filter::scan(&raw) {
                    tracing::warn!("Skipping {} (sensitive content: {})", name, rule.name);
                    index.filtered += 1;
                    continue;
                }
            }

            if fm.is_draft() {
                tracing::info!("Skipping {} (draft)", name);
                index.drafts += 1;
                continue;
            }

            let post = self.build_post(&name, &fm, body);
            tracing::debug!("Loaded {} -> {}", name, post.path());
            index.push(post);
        }

        Ok(index)
    }

    /// Apply the missing-source policy
    fn ensure_source(&self) -> Result<()> {
        let source_dir = &self.devlog.paths.source_dir;
        if source_dir.is_dir() {
            return Ok(());
        }

        match self.devlog.config.missing_source {
            MissingSource::Seed => {
                tracing::info!("Source directory {:?} missing, seeding it", source_dir);
                init::seed_source(source_dir)
            }
            MissingSource::Abort => bail!("Source directory {:?} does not exist", source_dir),
        }
    }

    /// Markdown file names in the source directory, sorted descending
    fn source_files(&self) -> Result<Vec<String>> {
        let source_dir = &self.devlog.paths.source_dir;
        let mut names = Vec::new();

        for entry in WalkDir::new(source_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            // Broken symlinks (editor lock files among them) must not stop the build
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(e).with_context(|| format!("Failed to list {:?}", source_dir));
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", source_dir, e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
                continue;
            };
            if is_markdown_file(name) {
                names.push(name.to_string());
            }
        }

        names.sort_unstable_by(|a, b| b.cmp(a));
        Ok(names)
    }

    fn build_post(&self, name: &str, fm: &FrontMatter, body: &str) -> Post {
        let slug = name.strip_suffix(".md").unwrap_or(name).to_string();
        let plain = text::strip_markdown(body);

        Post {
            title: fm.title().unwrap_or(&slug).to_string(),
            date: fm.date().unwrap_or_default().to_string(),
            tags: fm.tags(),
            content: self.renderer.render(body),
            excerpt: text::excerpt(&plain, self.devlog.config.excerpt_length),
            reading_time: text::reading_time(&plain),
            source: name.to_string(),
            slug,
        }
    }
}

/// Visible `.md` files only
pub(crate) fn is_markdown_file(name: &str) -> bool {
    name.ends_with(".md") && !name.starts_with('.')
}
