//! Remove the generated feed

use anyhow::Result;
use std::fs;

use crate::Site;

/// Delete the feed output file if present
pub fn run(site: &Site) -> Result<()> {
    if site.output_path.exists() {
        fs::remove_file(&site.output_path)?;
        tracing::info!("Deleted: {:?}", site.output_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_clean_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(site.output_path.parent().unwrap()).unwrap();
        fs::write(&site.output_path, "<rss/>").unwrap();

        run(&site).unwrap();
        assert!(!site.output_path.exists());

        // Nothing left to delete
        run(&site).unwrap();
    }
}
