//! Generator module - writes the static site from a loaded `SiteIndex`

mod feed;
mod sitemap;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::SiteIndex;
use crate::helpers::tag_page;
use crate::templates;
use crate::Devlog;

pub use feed::{build_feed, FEED_LIMIT};
pub use sitemap::build_sitemap;

/// Static site generator
pub struct Generator<'a> {
    devlog: &'a Devlog,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(devlog: &'a Devlog) -> Self {
        Self { devlog }
    }

    /// Generate the entire site
    pub fn generate(&self, index: &SiteIndex) -> Result<()> {
        let output_dir = &self.devlog.paths.output_dir;
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {:?}", output_dir))?;

        self.generate_post_pages(index)?;
        self.generate_index_page(index)?;

        if self.devlog.config.tag_pages {
            self.generate_tag_pages(index)?;
        }

        self.write_page("404.html", "Not Found", templates::not_found_body())?;

        if self.devlog.config.sitemap {
            self.write_file("sitemap.xml", &build_sitemap(&self.devlog.config, index))?;
        }

        self.write_file("rss.xml", &build_feed(&self.devlog.config, &index.posts))?;

        Ok(())
    }

    /// Generate individual post pages
    fn generate_post_pages(&self, index: &SiteIndex) -> Result<()> {
        let config = &self.devlog.config;

        for (i, post) in index.posts.iter().enumerate() {
            let (prev, next) = if config.post_nav {
                (index.prev(i), index.next(i))
            } else {
                (None, None)
            };

            let body = templates::post_body(post, prev, next, config);
            self.write_page(&post.path(), &post.title, &body)?;
        }

        Ok(())
    }

    /// Generate the home page
    fn generate_index_page(&self, index: &SiteIndex) -> Result<()> {
        let body = templates::index_body(&index.posts, &self.devlog.config);
        self.write_page("index.html", "Home", &body)
    }

    /// Generate the tags overview and one page per tag
    fn generate_tag_pages(&self, index: &SiteIndex) -> Result<()> {
        self.write_page("tags.html", "Tags", &templates::tags_body(&index.tags))?;

        for tag in index.tags.names() {
            let posts = index.tags.posts_for(tag, &index.posts);
            let body = templates::tag_body(tag, &posts);
            self.write_page(&tag_page(tag), &format!("#{}", tag), &body)?;
        }

        Ok(())
    }

    /// Render a body inside the layout and write it
    fn write_page(&self, name: &str, title: &str, body: &str) -> Result<()> {
        let html = templates::layout(title, body, &self.devlog.config);
        self.write_file(name, &html)
    }

    fn write_file(&self, name: &str, content: &str) -> Result<()> {
        let output_path = self.devlog.paths.output_dir.join(Path::new(name));
        fs::write(&output_path, content)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}
