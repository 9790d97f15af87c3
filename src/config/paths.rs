//! Source, output and config locations

use std::path::{Path, PathBuf};

/// Environment variable overriding the source directory
pub const POSTS_ENV: &str = "DEVLOG_POSTS";
/// Environment variable overriding the output directory
pub const OUTPUT_ENV: &str = "DEVLOG_OUTPUT";
/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "DEVLOG_CONFIG";

/// Where the site reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    /// Directory holding the markdown posts
    pub source_dir: PathBuf,
    /// Directory receiving the generated site
    pub output_dir: PathBuf,
    /// JSON configuration file
    pub config_path: PathBuf,
}

impl SitePaths {
    /// Conventional layout under a base directory
    pub fn under<P: AsRef<Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref();
        Self {
            source_dir: base_dir.join("devlog"),
            output_dir: base_dir.join("public"),
            config_path: base_dir.join("devlog.config.json"),
        }
    }

    /// Conventional layout, with each path overridable through `lookup`
    pub fn resolve<P, F>(base_dir: P, lookup: F) -> Self
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = base_dir.as_ref();
        let defaults = Self::under(base_dir);
        // Relative overrides are taken from the base directory
        let pick = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(|value| base_dir.join(value))
                .unwrap_or(default)
        };

        Self {
            source_dir: pick(POSTS_ENV, defaults.source_dir),
            output_dir: pick(OUTPUT_ENV, defaults.output_dir),
            config_path: pick(CONFIG_ENV, defaults.config_path),
        }
    }

    /// Conventional layout with overrides from the process environment
    pub fn from_env<P: AsRef<Path>>(base_dir: P) -> Self {
        Self::resolve(base_dir, |key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let paths = SitePaths::resolve("/site", |_| None);
        assert_eq!(paths.source_dir, PathBuf::from("/site/devlog"));
        assert_eq!(paths.output_dir, PathBuf::from("/site/public"));
        assert_eq!(paths.config_path, PathBuf::from("/site/devlog.config.json"));
    }

    #[test]
    fn test_overrides() {
        let paths = SitePaths::resolve("/site", |key| match key {
            POSTS_ENV => Some("/notes".to_string()),
            OUTPUT_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(paths.source_dir, PathBuf::from("/notes"));
        assert_eq!(paths.output_dir, PathBuf::from("/site/public"));
    }

    #[test]
    fn test_relative_override() {
        let paths = SitePaths::resolve("/site", |key| match key {
            CONFIG_ENV => Some("conf/devlog.json".to_string()),
            _ => None,
        });
        assert_eq!(paths.config_path, PathBuf::from("/site/conf/devlog.json"));
    }
}
