//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer that reads any YAML scalar as a string.
/// `null` becomes `None`; sequences and mappings are rejected.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarString)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Front-matter data from a blog post.
///
/// Only the keys the feed needs are kept; anything else in the block is
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, remaining_content)
    ///
    /// The block must open on the first line with `---` (optionally
    /// `---yaml`). A block that is never closed runs to the end of the file.
    /// Content without a block yields empty front-matter.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some((opener, rest)) = split_line(content) else {
            return Ok((FrontMatter::default(), content));
        };
        if !matches!(opener.trim_end(), "---" | "---yaml") {
            return Ok((FrontMatter::default(), content));
        }

        let (yaml_content, remaining) = find_closing(rest);

        // An empty block carries no fields
        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }
}

/// Split off the first line, without its line terminator
fn split_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    match s.find('\n') {
        Some(pos) => Some((s[..pos].trim_end_matches('\r'), &s[pos + 1..])),
        None => Some((s, "")),
    }
}

/// Locate the closing `---` line. Returns (block, body after the closer)
fn find_closing(rest: &str) -> (&str, &str) {
    let mut offset = 0;
    let mut remaining = rest;

    while let Some((line, tail)) = split_line(remaining) {
        if line.trim_end() == "---" {
            return (&rest[..offset], tail.trim_start_matches(['\n', '\r']));
        }
        offset = rest.len() - tail.len();
        remaining = tail;
    }

    (rest, "")
}
