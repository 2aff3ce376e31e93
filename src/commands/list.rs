//! List the posts that would appear in the feed

use anyhow::Result;

use crate::feed::FeedItem;
use crate::Site;

/// Output format for `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}

/// Print feed items in feed order
pub fn run(site: &Site, format: ListFormat) -> Result<()> {
    let doc = site.build_feed()?;
    println!("{}", render(&doc.items, format)?);
    Ok(())
}

/// Render feed items as text lines or pretty JSON
pub fn render(items: &[FeedItem], format: ListFormat) -> Result<String> {
    match format {
        ListFormat::Text => {
            let mut out = format!("Posts ({}):", items.len());
            for item in items {
                out.push_str(&format!(
                    "\n  {} - {} [{}] {}",
                    item.date.format("%Y-%m-%d"),
                    item.title,
                    item.id,
                    item.url
                ));
            }
            Ok(out)
        }
        ListFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}
