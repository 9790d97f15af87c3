//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone when encoding a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// File name of a tag page. Path separators (and `%`) are percent-encoded,
/// so the page always lands in the output directory and distinct tags never
/// share a file.
///
/// # Examples
/// ```ignore
/// tag_page("rust") // -> "tag-rust.html"
/// tag_page("a/b")  // -> "tag-a%2Fb.html"
/// ```
pub fn tag_page(tag: &str) -> String {
    let mut name = String::with_capacity(tag.len() + 9);
    name.push_str("tag-");
    for c in tag.chars() {
        match c {
            '%' => name.push_str("%25"),
            '/' => name.push_str("%2F"),
            '\\' => name.push_str("%5C"),
            c => name.push(c),
        }
    }
    name.push_str(".html");
    name
}

/// Relative link to a tag page, percent-encoded
///
/// # Examples
/// ```ignore
/// tag_href("c sharp") // -> "tag-c%20sharp.html"
/// ```
pub fn tag_href(tag: &str) -> String {
    encode_segment(&tag_page(tag))
}

/// Encode a single URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Absolute URL for a site-relative path
///
/// # Examples
/// ```ignore
/// full_url("https://example.com", "about.html") // -> "https://example.com/about.html"
/// ```
pub fn full_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_page() {
        assert_eq!(tag_page("rust"), "tag-rust.html");
        assert_eq!(tag_page("../etc"), "tag-..%2Fetc.html");
        assert_eq!(tag_page("a\\b"), "tag-a%5Cb.html");
    }

    #[test]
    fn test_tag_page_names_do_not_collide() {
        let names = ["a/b", "a-b", "a%2Fb", "a\\b"].map(tag_page);
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_tag_href() {
        assert_eq!(tag_href("rust"), "tag-rust.html");
        assert_eq!(tag_href("c sharp"), "tag-c%20sharp.html");
        assert_eq!(tag_href("c#"), "tag-c%23.html");
        // The escaped file name is escaped again for the link
        assert_eq!(tag_href("a/b"), "tag-a%252Fb.html");
    }

    #[test]
    fn test_full_url() {
        assert_eq!(
            full_url("https://example.com/", "/a.html"),
            "https://example.com/a.html"
        );
        assert_eq!(full_url("https://example.com", ""), "https://example.com/");
        assert_eq!(full_url("", "a.html"), "/a.html");
    }
}
