//! Post model and the indexes built over it

use std::collections::BTreeMap;

use crate::helpers::encode_segment;

/// A blog post, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// File name without `.md`; unique within a build
    pub slug: String,

    /// Source file name
    pub source: String,

    /// Post title (front-matter `title`, or the slug)
    pub title: String,

    /// Date as written in the front-matter; may be empty
    pub date: String,

    /// Lowercase tags, first occurrence order
    pub tags: Vec<String>,

    /// Rendered HTML content
    pub content: String,

    /// Plain-text excerpt
    pub excerpt: String,

    /// Reading time such as "3 min"
    pub reading_time: String,
}

impl Post {
    /// Output file name, relative to the site root
    pub fn path(&self) -> String {
        format!("{}.html", self.slug)
    }

    /// Relative link to the post page, percent-encoded
    pub fn href(&self) -> String {
        encode_segment(&self.path())
    }
}

/// Tag name to the positions of its posts in the post list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: BTreeMap<String, Vec<usize>>,
}

impl TagIndex {
    /// Record that the post at `position` carries `tag`
    pub fn insert(&mut self, tag: &str, position: usize) {
        self.tags.entry(tag.to_lowercase()).or_default().push(position);
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag names, alphabetically
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Posts carrying `tag`, in post-list order
    pub fn posts_for<'a>(&self, tag: &str, posts: &'a [Post]) -> Vec<&'a Post> {
        self.tags
            .get(tag)
            .map(|positions| positions.iter().filter_map(|&i| posts.get(i)).collect())
            .unwrap_or_default()
    }

    /// Number of posts carrying `tag`
    pub fn count(&self, tag: &str) -> usize {
        self.tags.get(tag).map_or(0, Vec::len)
    }
}

/// Everything a build pass loads from the source directory
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    /// Posts, newest first (descending file name)
    pub posts: Vec<Post>,
    /// Tag index over `posts`
    pub tags: TagIndex,
    /// Drafts left out
    pub drafts: usize,
    /// Sources dropped by the content filter
    pub filtered: usize,
}

impl SiteIndex {
    /// Append a post and index its tags
    pub fn push(&mut self, post: Post) {
        let position = self.posts.len();
        for tag in &post.tags {
            self.tags.insert(tag, position);
        }
        self.posts.push(post);
    }

    /// The older neighbour (next in the list)
    pub fn prev(&self, position: usize) -> Option<&Post> {
        self.posts.get(position + 1)
    }

    /// The newer neighbour (previous in the list)
    pub fn next(&self, position: usize) -> Option<&Post> {
        position.checked_sub(1).and_then(|i| self.posts.get(i))
    }
}
