//! Create a new post

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::content::loader::is_markdown_file;
use crate::Devlog;

/// Prefix width for a directory without numbered posts
const DEFAULT_PREFIX_WIDTH: usize = 4;

/// Leading number of a file name such as `012-title.md`, with its digit count
fn numeric_prefix(name: &str) -> Option<(u32, usize)> {
    let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok().map(|n| (n, digits.len()))
}

/// Numbered posts already in the source directory
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Numbering {
    /// Highest prefix found
    pub highest: u32,
    /// Widest prefix found, in digits
    pub width: usize,
    /// Greatest numbered file name: the post listed first
    pub newest: Option<String>,
}

impl Numbering {
    /// Scan the visible `.md` files of `source_dir`
    pub fn scan(source_dir: &Path) -> Result<Self> {
        let mut numbering = Self::default();
        if !source_dir.exists() {
            return Ok(numbering);
        }

        for entry in
            fs::read_dir(source_dir).with_context(|| format!("Failed to list {:?}", source_dir))?
        {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !is_markdown_file(&name) {
                continue;
            }
            let Some((n, width)) = numeric_prefix(&name) else {
                continue;
            };

            numbering.highest = numbering.highest.max(n);
            numbering.width = numbering.width.max(width);
            if numbering.newest.as_deref().map_or(true, |newest| name.as_str() > newest) {
                numbering.newest = Some(name);
            }
        }

        Ok(numbering)
    }

    /// Prefix of the next post
    pub fn next(&self) -> u32 {
        self.highest + 1
    }

    /// Padding of the next prefix: the widest existing one
    pub fn next_width(&self) -> usize {
        if self.width == 0 {
            DEFAULT_PREFIX_WIDTH
        } else {
            self.width
        }
    }

    /// File name of the next post
    pub fn next_file_name(&self, title: &str) -> Result<String> {
        post_file_name(self.next(), self.next_width(), title)
    }

    /// Whether `name` is listed before every existing numbered post
    pub fn sorts_first(&self, name: &str) -> bool {
        self.newest.as_deref().map_or(true, |newest| name > newest)
    }
}

/// File name for a new post: `<NNN>-<slug>.md`
pub fn post_file_name(prefix: u32, width: usize, title: &str) -> Result<String> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Title {:?} has nothing to build a file name from", title);
    }
    Ok(format!("{:0width$}-{}.md", prefix, slug, width = width))
}

/// Front-matter scaffold for a new post
pub fn scaffold(title: &str, date: &str, tags: &[String], draft: bool) -> String {
    let mut content = format!("---\ntitle: {}\ndate: {}\n", title, date);
    if !tags.is_empty() {
        content.push_str(&format!("tags: {}\n", tags.join(", ")));
    }
    if draft {
        content.push_str("draft: true\n");
    }
    content.push_str("---\n\n");
    content
}

/// Split a `--tags` value on commas
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Create the next numbered post in the source directory
pub fn create_post(devlog: &Devlog, title: &str, tags: &[String], draft: bool) -> Result<PathBuf> {
    let title = title.trim();
    let source_dir = &devlog.paths.source_dir;
    fs::create_dir_all(source_dir)
        .with_context(|| format!("Failed to create {:?}", source_dir))?;

    let numbering = Numbering::scan(source_dir)?;
    let file_name = numbering.next_file_name(title)?;
    if !numbering.sorts_first(&file_name) {
        tracing::warn!(
            "{} sorts below {} and will be listed as an older post; \
             widen the numeric prefixes of the existing posts",
            file_name,
            numbering.newest.as_deref().unwrap_or_default()
        );
    }
    let file_path = source_dir.join(&file_name);

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let content = scaffold(title, &today, tags, draft);

    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("File already exists: {:?}", file_path)
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {:?}", file_path));
        }
    };
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {:?}", file_path))?;

    tracing::debug!("Created post {:?}", file_path);
    Ok(file_path)
}
