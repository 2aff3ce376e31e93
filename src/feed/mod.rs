//! Feed module - builds a feed document from post front-matter and writes it as RSS

pub mod builder;
pub mod rss;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

pub use builder::{build_feed, FeedBuilder};
pub use self::rss::serialize;

/// File name that never becomes a feed item
pub const INDEX_FILE: &str = "index.md";

/// Item ordering of the finished feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedOrder {
    /// Reverse of the file-name ordered directory walk
    #[default]
    Discovery,
    /// Newest parsed date first
    Date,
}

/// A single post in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Base file name of the post
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: DateTime<Utc>,
    /// Absolute post URL
    pub url: String,
    pub description: String,
}

/// Channel-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMeta {
    pub title: String,
    pub description: String,
    pub feed_url: String,
    pub site_url: String,
    pub language: String,
    pub favicon: String,
    pub generator: String,
}

impl ChannelMeta {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            feed_url: config.feed_url.clone(),
            site_url: config.site_url(),
            language: config.language.clone(),
            favicon: config.favicon.clone(),
            generator: config.generator.clone(),
        }
    }
}

/// A complete, validated feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub channel: ChannelMeta,
    /// Build time, written as both `pubDate` and `lastBuildDate`
    pub pub_date: DateTime<Utc>,
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    /// Serialize to indented RSS 2.0
    pub fn to_xml(&self) -> crate::error::Result<String> {
        serialize(self)
    }
}
