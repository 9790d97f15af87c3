//! Built-in page templates
//!
//! Every function here is a pure function of its arguments: no state and no
//! I/O, so the same posts and config always give the same bytes.

use crate::config::SiteConfig;
use crate::content::{Post, TagIndex};
use crate::helpers::{html_escape, tag_href};

/// Embedded stylesheet
const STYLE: &str = include_str!("style.css");

/// Wrap a body fragment in the full site page
pub fn layout(title: &str, body: &str, config: &SiteConfig) -> String {
    let site_title = html_escape(&config.title);
    let page_title = if config.title.is_empty() {
        html_escape(title)
    } else {
        format!("{} | {}", html_escape(title), site_title)
    };
    let tagline = if config.tagline.is_empty() {
        String::new()
    } else {
        format!("\n        <p>{}</p>", html_escape(&config.tagline))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="devlog {version}">
    <title>{page_title}</title>
    <link rel="alternate" type="application/rss+xml" title="{site_title}" href="rss.xml">
    <style>
{style}    </style>
</head>
<body>
    <header class="site-header">
        <h1><a href="index.html">{site_title}</a></h1>{tagline}
    </header>
    <nav>
{nav}    </nav>
    <main>
{body}
    </main>
    <footer>Built with <a href="{repository}">devlog</a></footer>
</body>
</html>
"#,
        version = env!("CARGO_PKG_VERSION"),
        style = STYLE,
        nav = nav(config),
        repository = env!("CARGO_PKG_REPOSITORY"),
    )
}

fn nav(config: &SiteConfig) -> String {
    let mut links = vec![r#"<a href="index.html">Posts</a>"#.to_string()];
    if config.tag_pages {
        links.push(r#"<a href="tags.html">Tags</a>"#.to_string());
    }
    links.push(r#"<a href="rss.xml">RSS</a>"#.to_string());
    if !config.author.is_empty() && !config.author_url.is_empty() {
        links.push(format!(
            r#"<a href="{}">{}</a>"#,
            html_escape(&config.author_url),
            html_escape(&config.author)
        ));
    }

    links
        .iter()
        .map(|link| format!("        {}\n", link))
        .collect()
}

/// "date · reading time", skipping an empty date
fn meta_line(post: &Post) -> String {
    if post.date.is_empty() {
        post.reading_time.clone()
    } else {
        format!("{} · {}", html_escape(&post.date), post.reading_time)
    }
}

/// Tag chips; links only when tag pages are generated
fn tag_list(tags: &[String], config: &SiteConfig) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let chips: String = tags
        .iter()
        .map(|tag| {
            if config.tag_pages {
                format!(
                    r#"<a href="{}" class="tag">{}</a>"#,
                    tag_href(tag),
                    html_escape(tag)
                )
            } else {
                format!(r#"<span class="tag">{}</span>"#, html_escape(tag))
            }
        })
        .collect();

    format!(r#"<div class="tags">{}</div>"#, chips)
}

fn post_link(post: &Post) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        post.href(),
        html_escape(&post.title)
    )
}

/// Body of a single post page.
///
/// `prev` is the older neighbour and `next` the newer one; both are `None`
/// when navigation is disabled.
pub fn post_body(
    post: &Post,
    prev: Option<&Post>,
    next: Option<&Post>,
    config: &SiteConfig,
) -> String {
    let nav = if config.post_nav {
        let prev = prev
            .map(|p| format!(r#"<a href="{}">← {}</a>"#, p.href(), html_escape(&p.title)))
            .unwrap_or_else(|| "<span></span>".to_string());
        let next = next
            .map(|p| format!(r#"<a href="{}">{} →</a>"#, p.href(), html_escape(&p.title)))
            .unwrap_or_else(|| "<span></span>".to_string());
        format!("\n<div class=\"post-nav\">{}{}</div>", prev, next)
    } else {
        String::new()
    };

    format!(
        r#"<article>
<h1>{title}</h1>
<div class="meta">{meta}</div>
{tags}
<div class="content">{content}</div>{nav}
</article>"#,
        title = html_escape(&post.title),
        meta = meta_line(post),
        tags = tag_list(&post.tags, config),
        content = post.content,
        nav = nav,
    )
}

/// Body of the home page
pub fn index_body(posts: &[Post], config: &SiteConfig) -> String {
    if posts.is_empty() {
        return "<p>No posts yet.</p>".to_string();
    }

    posts
        .iter()
        .map(|post| {
            format!(
                r#"<article>
<h2>{link}</h2>
<div class="meta">{meta}</div>
{tags}
<p class="excerpt">{excerpt}</p>
</article>
"#,
                link = post_link(post),
                meta = meta_line(post),
                tags = tag_list(&post.tags, config),
                excerpt = html_escape(&post.excerpt),
            )
        })
        .collect()
}

/// Body of the tags overview: every tag with its post count
pub fn tags_body(tags: &TagIndex) -> String {
    if tags.is_empty() {
        return "<h1>Tags</h1>\n<p>No tags yet.</p>".to_string();
    }

    let items: String = tags
        .names()
        .map(|tag| {
            format!(
                r#"<li><a href="{}">{}</a> ({})</li>"#,
                tag_href(tag),
                html_escape(tag),
                tags.count(tag)
            )
        })
        .collect();

    format!("<h1>Tags</h1>\n<ul>{}</ul>", items)
}

/// Body of one tag page
pub fn tag_body(tag: &str, posts: &[&Post]) -> String {
    let entries: String = posts
        .iter()
        .map(|post| {
            format!(
                "<article>\n<h2>{}</h2>\n<div class=\"meta\">{}</div>\n</article>\n",
                post_link(post),
                html_escape(&post.date)
            )
        })
        .collect();

    format!("<h1>#{}</h1>\n{}", html_escape(tag), entries)
}

/// Body of the not-found page
pub fn not_found_body() -> &'static str {
    r#"<p>Page not found. <a href="index.html">Go home</a>.</p>"#
}
