//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;
use std::path::{Component, Path};

/// Characters escaped inside a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Derive a post slug from its file path
///
/// # Examples
/// ```ignore
/// derive_slug(Path::new("/site/blog/2023/05/01/post.md"), 4) // -> "2023/05/01/post"
/// ```
pub fn derive_slug(path: &Path, segments: usize) -> String {
    let parts: Vec<Cow<'_, str>> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    let start = parts.len().saturating_sub(segments);
    let joined = parts[start..].join("/");

    match joined.strip_suffix(".md") {
        Some(stripped) => stripped.to_string(),
        None => joined,
    }
}

/// Build the absolute URL of a post
///
/// # Examples
/// ```ignore
/// post_url("https://fr.react.dev", "blog", "2023/05/01/post")
/// // -> "https://fr.react.dev/blog/2023/05/01/post"
/// ```
pub fn post_url(origin: &str, blog_path: &str, slug: &str) -> String {
    let mut url = origin.trim_end_matches('/').to_string();

    let blog_path = blog_path.trim_matches('/');
    if !blog_path.is_empty() {
        url.push('/');
        url.push_str(blog_path);
    }

    for segment in slug.split('/').filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(&utf8_percent_encode(segment, PATH_SEGMENT).to_string());
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_last_four_segments() {
        let path = Path::new("/home/site/src/content/blog/2023/05/01/post.md");
        assert_eq!(derive_slug(path, 4), "2023/05/01/post");
    }

    #[test]
    fn test_slug_short_path() {
        assert_eq!(derive_slug(Path::new("blog/post.md"), 4), "blog/post");
        assert_eq!(derive_slug(Path::new("post.md"), 4), "post");
    }

    #[test]
    fn test_slug_only_strips_trailing_md() {
        let path = Path::new("/a/b/notes.md.d/c/draft.mdx");
        let slug = derive_slug(path, 4);
        assert_eq!(slug, "b/notes.md.d/c/draft.mdx");
        assert!(!derive_slug(Path::new("/x/y/z/w/post.md"), 4).ends_with(".md"));
    }

    #[test]
    fn test_post_url() {
        assert_eq!(
            post_url("https://fr.react.dev", "blog", "2023/05/01/post"),
            "https://fr.react.dev/blog/2023/05/01/post"
        );
        assert_eq!(
            post_url("https://example.com/", "/news/", "a/b"),
            "https://example.com/news/a/b"
        );
        assert_eq!(post_url("https://example.com", "", "a"), "https://example.com/a");
    }

    #[test]
    fn test_post_url_escapes_segments() {
        assert_eq!(
            post_url("https://example.com", "blog", "2023/mon article#1"),
            "https://example.com/blog/2023/mon%20article%231"
        );
        assert_eq!(
            post_url("https://example.com", "blog", "déjà-vu"),
            "https://example.com/blog/d%C3%A9j%C3%A0-vu"
        );
    }
}
