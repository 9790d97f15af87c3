//! List site content

use anyhow::{bail, Result};

use crate::content::loader::ContentLoader;
use crate::content::SiteIndex;
use crate::Devlog;

/// List site content by type
pub fn run(devlog: &Devlog, content_type: &str) -> Result<()> {
    let lines = match content_type {
        "post" | "posts" => post_lines(&ContentLoader::new(devlog).load()?),
        "tag" | "tags" => tag_lines(&ContentLoader::new(devlog).load()?),
        _ => bail!("Unknown type: {}. Available: post, tag", content_type),
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn post_lines(index: &SiteIndex) -> Vec<String> {
    let mut lines = vec![format!("Posts ({}):", index.posts.len())];
    lines.extend(index.posts.iter().map(|post| {
        if post.date.is_empty() {
            format!("  {} [{}]", post.title, post.source)
        } else {
            format!("  {} - {} [{}]", post.date, post.title, post.source)
        }
    }));
    lines
}

/// Tags by post count, most used first
fn tag_lines(index: &SiteIndex) -> Vec<String> {
    let mut tags: Vec<(&str, usize)> = index
        .tags
        .names()
        .map(|tag| (tag, index.tags.count(tag)))
        .collect();
    // names() is alphabetical and the sort is stable
    tags.sort_by(|a, b| b.1.cmp(&a.1));

    let mut lines = vec![format!("Tags ({}):", tags.len())];
    lines.extend(tags.iter().map(|(tag, count)| format!("  {} ({})", tag, count)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            source: format!("{}.md", slug),
            title: slug.to_uppercase(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: String::new(),
            excerpt: String::new(),
            reading_time: "1 min".to_string(),
        }
    }

    fn index() -> SiteIndex {
        let mut index = SiteIndex::default();
        index.push(post("002-b", "2024-02-01", &["go", "rust"]));
        index.push(post("001-a", "", &["rust", "ada"]));
        index
    }

    #[test]
    fn test_post_lines() {
        assert_eq!(
            post_lines(&index()),
            vec![
                "Posts (2):",
                "  2024-02-01 - 002-B [002-b.md]",
                "  001-A [001-a.md]",
            ]
        );
    }

    #[test]
    fn test_tag_lines_by_count() {
        assert_eq!(
            tag_lines(&index()),
            vec!["Tags (3):", "  rust (2)", "  ada (1)", "  go (1)"]
        );
    }

    #[test]
    fn test_unknown_type() {
        let tmp = tempfile::tempdir().unwrap();
        let devlog = Devlog::with_config(
            crate::config::SitePaths::under(tmp.path()),
            crate::config::SiteConfig::default(),
        );
        let err = run(&devlog, "category").unwrap_err();
        assert!(err.to_string().contains("Unknown type"));
    }
}
