//! Content loader - enumerates and reads post files from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{FeedError, Result};

/// A content file read once per build
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub path: PathBuf,
    pub text: String,
}

impl ContentFile {
    /// Read a file as UTF-8 text
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| FeedError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Base file name, used as the feed item id
    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }
}

/// Walks a content directory with a depth limit and symlink cycle detection
pub struct ContentLoader {
    root: PathBuf,
    max_depth: usize,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new<P: AsRef<Path>>(root: P, max_depth: usize) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_depth,
        }
    }

    /// List every file below the root in pre-order.
    ///
    /// Entries of a directory are visited in file-name order. Directories
    /// themselves are not listed.
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(&self.root).map_err(|e| FeedError::io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(FeedError::io(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
            ));
        }

        let mut files = Vec::new();

        // One level past the limit so an over-deep entry is seen and rejected
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .max_depth(self.max_depth.saturating_add(1))
        {
            let entry = entry.map_err(|e| self.walk_error(e))?;

            if entry.depth() > self.max_depth {
                return Err(FeedError::DepthExceeded {
                    path: entry.path().to_path_buf(),
                    limit: self.max_depth,
                });
            }

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        tracing::debug!("Discovered {} files under {:?}", files.len(), self.root);
        Ok(files)
    }

    fn walk_error(&self, err: walkdir::Error) -> FeedError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());

        if err.loop_ancestor().is_some() {
            return FeedError::SymlinkCycle { path };
        }

        let source = err.into_io_error().unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
        });
        FeedError::io(path, source)
    }
}

/// Base name of a path as a string
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
