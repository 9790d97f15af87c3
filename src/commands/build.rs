//! Build the static site

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::SiteIndex;
use crate::generator::Generator;
use crate::Devlog;

/// Load every post and write the whole site
pub fn run(devlog: &Devlog) -> Result<SiteIndex> {
    let start = std::time::Instant::now();

    let index = ContentLoader::new(devlog).load()?;
    tracing::info!(
        "Loaded {} posts ({} drafts skipped, {} filtered)",
        index.posts.len(),
        index.drafts,
        index.filtered
    );

    Generator::new(devlog).generate(&index)?;

    tracing::info!(
        "Generated {:?} in {:.2}s",
        devlog.paths.output_dir,
        start.elapsed().as_secs_f64()
    );
    println!("{}", summary(&index));

    Ok(index)
}

/// One-line build summary
pub fn summary(index: &SiteIndex) -> String {
    format!(
        "Built {}, {}",
        count(index.posts.len(), "post"),
        count(index.tags.len(), "tag")
    )
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, SitePaths};
    use std::fs;

    #[test]
    fn test_summary_counts() {
        assert_eq!(summary(&SiteIndex::default()), "Built 0 posts, 0 tags");
        assert_eq!(count(1, "post"), "1 post");
        assert_eq!(count(3, "tag"), "3 tags");
    }

    #[test]
    fn test_build_writes_site_and_counts() {
        let tmp = tempfile::tempdir().unwrap();
        let devlog = Devlog::with_config(SitePaths::under(tmp.path()), SiteConfig::default());
        let src = &devlog.paths.source_dir;
        fs::create_dir_all(src).unwrap();
        fs::write(src.join("001-a.md"), "---\ntags: rust, go\n---\nA").unwrap();
        fs::write(src.join("002-b.md"), "---\ntags: rust\n---\nB").unwrap();
        fs::write(src.join("003-c.md"), "---\ndraft: true\n---\nC").unwrap();

        let index = run(&devlog).unwrap();
        assert_eq!(summary(&index), "Built 2 posts, 2 tags");
        assert!(devlog.paths.output_dir.join("index.html").exists());
    }

    #[test]
    fn test_build_seeds_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let devlog = Devlog::with_config(SitePaths::under(tmp.path()), SiteConfig::default());

        let index = devlog.build().unwrap();
        assert_eq!(summary(&index), "Built 1 post, 1 tag");
        assert!(devlog.paths.output_dir.join("001-hello.html").exists());
    }
}
