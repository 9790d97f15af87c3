//! RSS 2.0 feed generation

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{cdata, escape_xml, full_url, parse_date, rfc822, strip_invalid_xml_chars};

/// Most recent posts included in the feed
pub const FEED_LIMIT: usize = 20;

/// Build `rss.xml` from the newest posts
pub fn build_feed(config: &SiteConfig, posts: &[Post]) -> String {
    let base_url = config.base_url();

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    feed.push('\n');
    feed.push_str(r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">"#);
    feed.push('\n');
    feed.push_str("<channel>\n");
    feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
    feed.push_str(&format!("  <link>{}</link>\n", escape_xml(&config.site_url)));
    feed.push_str(&format!(
        "  <description>{}</description>\n",
        escape_xml(&config.tagline)
    ));
    if !base_url.is_empty() {
        feed.push_str(&format!(
            "  <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
            escape_xml(&full_url(base_url, "rss.xml"))
        ));
    }

    for post in posts.iter().take(FEED_LIMIT) {
        let link = escape_xml(&full_url(base_url, &post.href()));

        feed.push_str("  <item>\n");
        feed.push_str(&format!("    <title>{}</title>\n", cdata(&post.title)));
        feed.push_str(&format!("    <link>{}</link>\n", link));
        feed.push_str(&format!("    <guid>{}</guid>\n", link));
        match parse_date(&post.date) {
            Some(date) => {
                feed.push_str(&format!("    <pubDate>{}</pubDate>\n", rfc822(&date)));
            }
            None if !post.date.is_empty() => {
                tracing::debug!("No pubDate for {}: cannot parse {:?}", post.slug, post.date);
            }
            None => {}
        }
        feed.push_str(&format!(
            "    <description>{}</description>\n",
            cdata(&strip_invalid_xml_chars(&post.content))
        ));
        feed.push_str("  </item>\n");
    }

    feed.push_str("</channel>\n");
    feed.push_str("</rss>\n");
    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str, content: &str) -> Post {
        Post {
            slug: slug.to_string(),
            source: format!("{}.md", slug),
            title: slug.to_string(),
            date: date.to_string(),
            tags: Vec::new(),
            content: content.to_string(),
            excerpt: String::new(),
            reading_time: "1 min".to_string(),
        }
    }

    fn config() -> SiteConfig {
        SiteConfig {
            title: "Log".to_string(),
            tagline: "Notes & things".to_string(),
            site_url: "https://example.com/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_channel() {
        let xml = build_feed(&config(), &[]);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<title>Log</title>"));
        assert!(xml.contains("<link>https://example.com/</link>"));
        assert!(xml.contains("<description>Notes &amp; things</description>"));
        assert!(xml.trim_end().ends_with("</rss>"));
    }

    #[test]
    fn test_item_fields() {
        let xml = build_feed(&config(), &[post("001-a", "2024-01-15", "<p>Hi</p>")]);
        assert!(xml.contains("<title><![CDATA[001-a]]></title>"));
        assert!(xml.contains("<link>https://example.com/001-a.html</link>"));
        assert!(xml.contains("<guid>https://example.com/001-a.html</guid>"));
        assert!(xml.contains("<pubDate>Mon, 15 Jan 2024 00:00:00 GMT</pubDate>"));
        assert!(xml.contains("<description><![CDATA[<p>Hi</p>]]></description>"));
    }

    #[test]
    fn test_description_escapes_cdata_terminator() {
        let xml = build_feed(&config(), &[post("001-a", "", "<code>x]]>y</code>")]);
        assert!(xml.contains("<![CDATA[<code>x]]&gt;y</code>]]>"));
        let description = xml
            .split("<description><![CDATA[")
            .nth(1)
            .and_then(|rest| rest.split("</description>").next())
            .unwrap();
        assert_eq!(description.matches("]]>").count(), 1);
    }

    #[test]
    fn test_unparseable_date_has_no_pub_date() {
        let xml = build_feed(&config(), &[post("001-a", "someday", "x")]);
        assert!(!xml.contains("<pubDate>"));
    }

    #[test]
    fn test_limit() {
        let posts: Vec<Post> = (0..25)
            .map(|i| post(&format!("{:03}", 25 - i), "", "x"))
            .collect();
        let xml = build_feed(&config(), &posts);
        assert_eq!(xml.matches("<item>").count(), FEED_LIMIT);
        assert!(xml.contains("/025.html"));
        assert!(!xml.contains("/005.html"));
    }
}
