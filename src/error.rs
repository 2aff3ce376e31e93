//! Feed build errors

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Front-matter fields every post must carry to appear in the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Author,
    Date,
    Description,
}

impl RequiredField {
    /// Validation order
    pub const ALL: [RequiredField; 4] = [
        RequiredField::Title,
        RequiredField::Author,
        RequiredField::Date,
        RequiredField::Description,
    ];

    /// Front-matter key name
    pub fn key(self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Author => "author",
            RequiredField::Date => "date",
            RequiredField::Description => "description",
        }
    }

    fn article(self) -> &'static str {
        match self {
            RequiredField::Author => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors raised while building or serializing a feed.
///
/// Every variant is fatal: the build stops at the first one and no feed is
/// produced.
#[derive(Error, Debug)]
pub enum FeedError {
    /// A required front-matter field is absent or blank
    #[error(
        "{file}: Blog posts must include {} {field} in the metadata, for RSS feeds",
        .field.article()
    )]
    MissingField { file: String, field: RequiredField },

    /// The `date` field could not be read as a calendar date
    #[error("{file}: unrecognized date {value:?} in the metadata")]
    InvalidDate { file: String, value: String },

    /// The front-matter block is not valid YAML
    #[error("{file}: malformed front matter: {source}")]
    FrontMatter {
        file: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A directory or file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Following symlinks led back to an ancestor directory
    #[error("symlink cycle detected at {}", .path.display())]
    SymlinkCycle { path: PathBuf },

    /// An entry sits deeper below the content root than allowed
    #[error("{} is nested deeper than {limit} levels", .path.display())]
    DepthExceeded { path: PathBuf, limit: usize },

    /// The RSS writer failed
    #[error("failed to serialize feed: {0}")]
    Serialize(#[from] rss::Error),

    /// The serialized feed was not valid UTF-8
    #[error("serialized feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl FeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FeedError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
