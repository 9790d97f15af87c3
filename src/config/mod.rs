//! Configuration module

mod paths;
mod site;

pub use paths::SitePaths;
pub use site::ConfigIssue;
pub use site::MissingSource;
pub use site::SiteConfig;
