//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::feed::FeedOrder;

/// Feed channel metadata, input/output paths and build limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Channel
    pub title: String,
    pub description: String,
    pub language: String,
    pub generator: String,

    // URL
    /// Site origin, prefixed to every item URL
    pub url: String,
    pub feed_url: String,
    pub favicon: String,
    /// Path segment between the origin and each post slug
    pub blog_path: String,

    // Directory
    pub content_dir: String,
    pub output: String,

    // Items
    /// Trailing path segments kept when deriving a slug
    pub slug_segments: usize,
    pub max_depth: usize,
    pub order: FeedOrder,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog React".to_string(),
            description: "Ce blog est la source officielle des mises à jour par l’équipe React.  \
                Toute annonce importante, y compris les notes de versions et les avertissements \
                de dépréciation, sera faite ici en premier."
                .to_string(),
            language: "fr".to_string(),
            generator: "react.dev rss module".to_string(),

            url: "https://fr.react.dev".to_string(),
            feed_url: "https://fr.react.dev/rss.xml".to_string(),
            favicon: "https://fr.react.dev/favicon.ico".to_string(),
            blog_path: "blog".to_string(),

            content_dir: "src/content/blog".to_string(),
            output: "public/rss.xml".to_string(),

            slug_segments: 4,
            max_depth: 32,
            order: FeedOrder::Discovery,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Site URL with a single trailing slash, used as the channel link
    pub fn site_url(&self) -> String {
        format!("{}/", self.url.trim_end_matches('/'))
    }
}
