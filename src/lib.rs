//! devlog: a minimal static site generator for a developer log
//!
//! Markdown posts with a small front-matter block go in, a flat directory of
//! HTML pages, an RSS feed and a sitemap come out. Layout and styling are
//! built in; the behaviour is driven by `devlog.config.json`.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

use config::{SiteConfig, SitePaths};
use content::SiteIndex;

/// The main devlog application
#[derive(Debug, Clone)]
pub struct Devlog {
    /// Site configuration
    pub config: SiteConfig,
    /// Source, output and config locations
    pub paths: SitePaths,
}

impl Devlog {
    /// Create a devlog rooted at `base_dir`, honouring the path overrides
    /// from the environment. Config problems are logged, never fatal.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let paths = SitePaths::from_env(base_dir.as_ref());
        let config = SiteConfig::load_or_default(&paths.config_path);
        Self { config, paths }
    }

    /// Create a devlog from explicit paths and configuration
    pub fn with_config(paths: SitePaths, config: SiteConfig) -> Self {
        Self { config, paths }
    }

    /// Re-read the config file, keeping the paths
    pub fn reload(&self) -> Self {
        Self {
            config: SiteConfig::load_or_default(&self.paths.config_path),
            paths: self.paths.clone(),
        }
    }

    /// Build the static site
    pub fn build(&self) -> Result<SiteIndex> {
        commands::build::run(self)
    }

    /// Delete the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
