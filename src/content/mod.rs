//! Content module - handles posts and content processing

pub mod filter;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod text;

pub use frontmatter::{FrontMatter, MetaValue};
pub use markdown::MarkdownRenderer;
pub use post::{Post, SiteIndex, TagIndex};
