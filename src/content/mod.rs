//! Content module - locates post files and reads their front-matter

mod frontmatter;
pub mod loader;

pub use frontmatter::FrontMatter;
pub use loader::{ContentFile, ContentLoader};
