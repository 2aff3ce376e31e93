//! Helper functions shared by the feed builder and serializer

mod date;
mod url;

pub use date::*;
pub use url::*;
