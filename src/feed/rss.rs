//! RSS 2.0 serialization.

use rss::extension::atom::{AtomExtensionBuilder, Link};
use rss::extension::dublincore::DublinCoreExtensionBuilder;
use rss::{Channel, ChannelBuilder, GuidBuilder, ImageBuilder, Item, ItemBuilder};

use super::{FeedDocument, FeedItem};
use crate::error::Result;
use crate::helpers::date_rfc2822;

const INDENT_SIZE: usize = 2;

/// Serialize a feed document as indented RSS 2.0.
///
/// Equal documents always produce identical output.
pub fn serialize(doc: &FeedDocument) -> Result<String> {
    let channel = to_channel(doc);
    let buf = channel.pretty_write_to(Vec::new(), b' ', INDENT_SIZE)?;
    Ok(String::from_utf8(buf)?)
}

fn to_channel(doc: &FeedDocument) -> Channel {
    let meta = &doc.channel;
    let built = date_rfc2822(&doc.pub_date);

    let self_link = Link {
        href: meta.feed_url.clone(),
        rel: "self".to_string(),
        mime_type: Some("application/rss+xml".to_string()),
        ..Default::default()
    };

    let image = ImageBuilder::default()
        .url(meta.favicon.clone())
        .title(meta.title.clone())
        .link(meta.site_url.clone())
        .build();

    let items: Vec<Item> = doc.items.iter().map(to_item).collect();

    ChannelBuilder::default()
        .title(meta.title.clone())
        .link(meta.site_url.clone())
        .description(meta.description.clone())
        .language(meta.language.clone())
        .generator(meta.generator.clone())
        .pub_date(built.clone())
        .last_build_date(built)
        .image(image)
        .atom_ext(AtomExtensionBuilder::default().links(vec![self_link]).build())
        .items(items)
        .build()
}

fn to_item(item: &FeedItem) -> Item {
    let guid = GuidBuilder::default()
        .value(item.id.clone())
        .permalink(false)
        .build();

    let creator = DublinCoreExtensionBuilder::default()
        .creators(vec![item.author.clone()])
        .build();

    ItemBuilder::default()
        .title(item.title.clone())
        .link(item.url.clone())
        .description(item.description.clone())
        .guid(guid)
        .dublin_core_ext(creator)
        .pub_date(date_rfc2822(&item.date))
        .build()
}
