//! Validate content without writing the feed

use anyhow::Result;

use crate::Site;

/// Build the feed in memory and report how many posts passed
pub fn run(site: &Site) -> Result<usize> {
    let doc = site.build_feed()?;
    println!(
        "{} posts in {:?} have complete feed metadata",
        doc.items.len(),
        site.content_dir
    );
    Ok(doc.items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;

    #[test]
    fn test_check_counts_posts() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        let post = site.content_dir.join("2023/05/01/post.md");
        fs::create_dir_all(post.parent().unwrap()).unwrap();
        fs::write(
            &post,
            "---\ntitle: T\nauthor: A\ndate: 2023-05-01\ndescription: D\n---\n",
        )
        .unwrap();
        fs::write(site.content_dir.join("index.md"), "").unwrap();

        assert_eq!(run(&site).unwrap(), 1);
        assert!(!site.output_path.exists());
    }

    #[test]
    fn test_check_reports_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(&site.content_dir).unwrap();
        fs::write(site.content_dir.join("draft.md"), "---\ntitle: T\n---\n").unwrap();

        let err = run(&site).unwrap_err();
        assert_eq!(
            err.to_string(),
            "draft.md: Blog posts must include an author in the metadata, for RSS feeds"
        );
    }
}
