//! Feed builder - turns a directory of posts into a `FeedDocument`

use chrono::{DateTime, Utc};
use std::path::Path;

use super::{ChannelMeta, FeedDocument, FeedItem, FeedOrder, INDEX_FILE};
use crate::config::SiteConfig;
use crate::content::{loader, ContentFile, ContentLoader, FrontMatter};
use crate::error::{FeedError, RequiredField, Result};
use crate::helpers::{derive_slug, parse_date, post_url};

/// Build a feed from `content_dir`, stamped with the current time
pub fn build_feed(config: &SiteConfig, content_dir: &Path) -> Result<FeedDocument> {
    FeedBuilder::new(config).build(content_dir)
}

/// Builds feed documents for one site configuration
pub struct FeedBuilder<'a> {
    config: &'a SiteConfig,
    order: FeedOrder,
    build_time: Option<DateTime<Utc>>,
}

impl<'a> FeedBuilder<'a> {
    /// Create a new feed builder
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            order: config.order,
            build_time: None,
        }
    }

    /// Override the configured item order
    pub fn order(mut self, order: FeedOrder) -> Self {
        self.order = order;
        self
    }

    /// Fix the publish timestamp instead of reading the clock
    pub fn build_time(mut self, time: DateTime<Utc>) -> Self {
        self.build_time = Some(time);
        self
    }

    /// Walk `content_dir` and build the feed.
    ///
    /// Stops at the first file that cannot be read or fails validation.
    pub fn build(&self, content_dir: &Path) -> Result<FeedDocument> {
        let mut files = ContentLoader::new(content_dir, self.config.max_depth).enumerate()?;
        files.reverse();

        let mut items = Vec::with_capacity(files.len());
        for path in files {
            if loader::file_name(&path) == INDEX_FILE {
                tracing::debug!("Skipping {:?}", path);
                continue;
            }

            let file = ContentFile::read(&path)?;
            items.push(self.build_item(&file)?);
        }

        if self.order == FeedOrder::Date {
            items.sort_by(|a, b| b.date.cmp(&a.date));
        }

        tracing::info!("Collected {} feed items", items.len());

        Ok(FeedDocument {
            channel: ChannelMeta::from_config(self.config),
            pub_date: self.build_time.unwrap_or_else(Utc::now),
            items,
        })
    }

    /// Validate one post's front-matter and turn it into a feed item
    fn build_item(&self, file: &ContentFile) -> Result<FeedItem> {
        let id = file.file_name();
        let (fm, _body) = FrontMatter::parse(&file.text).map_err(|source| {
            FeedError::FrontMatter {
                file: id.clone(),
                source,
            }
        })?;

        let title = require(fm.title, &id, RequiredField::Title)?;
        let author = require(fm.author, &id, RequiredField::Author)?;
        let raw_date = require(fm.date, &id, RequiredField::Date)?;
        let description = require(fm.description, &id, RequiredField::Description)?;

        let date = parse_date(&raw_date).ok_or_else(|| FeedError::InvalidDate {
            file: id.clone(),
            value: raw_date,
        })?;

        let slug = derive_slug(&file.path, self.config.slug_segments);
        let url = post_url(&self.config.url, &self.config.blog_path, &slug);

        tracing::debug!("Feed item {} -> {}", id, url);

        Ok(FeedItem {
            id,
            title,
            author,
            date,
            url,
            description,
        })
    }
}

/// A required field must be present and non-blank
fn require(value: Option<String>, file: &str, field: RequiredField) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FeedError::MissingField {
            file: file.to_string(),
            field,
        }),
    }
}
