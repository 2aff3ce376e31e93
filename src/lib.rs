//! blogfeed: RSS feed generator for Markdown blogs
//!
//! This crate walks a directory of Markdown posts, reads the `title`,
//! `author`, `date` and `description` fields from each post's front-matter
//! and writes an RSS 2.0 feed. A post with missing metadata stops the build
//! so a broken feed is never published.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::FeedError;
pub use feed::{build_feed, serialize, FeedBuilder, FeedDocument, FeedItem, FeedOrder};

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The site whose blog feed is being built
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the blog posts
    pub content_dir: PathBuf,
    /// Feed output file
    pub output_path: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let output_path = base_dir.join(&config.output);

        Self {
            config,
            base_dir,
            content_dir,
            output_path,
        }
    }

    /// Build the feed document without writing it
    pub fn build_feed(&self) -> Result<FeedDocument> {
        Ok(feed::build_feed(&self.config, &self.content_dir)?)
    }

    /// Build and write the feed
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove the generated feed
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.content_dir, dir.path().join("src/content/blog"));
        assert_eq!(site.output_path, dir.path().join("public/rss.xml"));
    }

    #[test]
    fn test_site_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "content_dir: posts\noutput: dist/feed.xml\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.content_dir, dir.path().join("posts"));
        assert_eq!(site.output_path, dir.path().join("dist/feed.xml"));
    }

    #[test]
    fn test_site_rejects_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "slug_segments: many\n").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
