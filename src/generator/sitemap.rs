//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url><loc>https://example.com/</loc></url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::content::SiteIndex;
use crate::helpers::{escape_xml, full_url, tag_href};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build `sitemap.xml`: the root, the tags overview, every post, every tag page
pub fn build_sitemap(config: &SiteConfig, index: &SiteIndex) -> String {
    let base_url = config.base_url();

    let mut paths = vec![String::new()];
    if config.tag_pages {
        paths.push("tags.html".to_string());
    }
    paths.extend(index.posts.iter().map(|post| post.href()));
    if config.tag_pages {
        paths.extend(index.tags.names().map(tag_href));
    }

    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for path in paths {
        xml.push_str(&format!(
            "  <url><loc>{}</loc></url>\n",
            escape_xml(&full_url(base_url, &path))
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}
