//! Generate the feed file

use anyhow::{Context, Result};
use notify::Watcher;
use std::fs;
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::feed::{FeedBuilder, FeedOrder};
use crate::Site;

/// Build the feed and write it to the configured output path
pub fn run(site: &Site) -> Result<()> {
    run_with_options(site, None)
}

/// Generate with an optional item order override
pub fn run_with_options(site: &Site, order: Option<FeedOrder>) -> Result<()> {
    let start = Instant::now();

    let mut builder = FeedBuilder::new(&site.config);
    if let Some(order) = order {
        builder = builder.order(order);
    }

    // Serialize fully before touching the output so a failed build keeps the old feed
    let doc = builder.build(&site.content_dir)?;
    let xml = doc.to_xml()?;
    write_output(&site.output_path, &xml)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {:?} with {} items in {:.2}s",
        site.output_path,
        doc.items.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

fn write_output(path: &Path, xml: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }
    fs::write(path, xml).with_context(|| format!("Failed to write feed to {:?}", path))?;
    Ok(())
}

/// Watch the content directory and config file, regenerating on change
pub fn watch(site: &Site, order: Option<FeedOrder>) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&site.content_dir, notify::RecursiveMode::Recursive)?;

    let config_path = site.base_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching {:?} for changes. Press Ctrl+C to stop.", site.content_dir);

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Debounce: only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("Content changed, regenerating feed...");
                    if let Err(e) = reload(site).and_then(|site| run_with_options(&site, order)) {
                        tracing::error!("Feed generation failed: {:#}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// Re-read the config so edits to `_config.yml` apply on the next rebuild
fn reload(site: &Site) -> Result<Site> {
    Site::new(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    const POST: &str =
        "---\ntitle: Hello\nauthor: Ada\ndate: 2023-05-01\ndescription: First post\n---\nBody\n";

    fn site_with_post(dir: &Path) -> Site {
        let post = dir.join("src/content/blog/2023/05/01/post.md");
        fs::create_dir_all(post.parent().unwrap()).unwrap();
        fs::write(&post, POST).unwrap();
        Site::with_config(dir, SiteConfig::default())
    }

    #[test]
    fn test_generate_writes_feed() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_with_post(dir.path());

        run(&site).unwrap();

        let xml = fs::read_to_string(dir.path().join("public/rss.xml")).unwrap();
        assert!(xml.contains("<title>Hello</title>"));
        assert!(xml.contains("https://fr.react.dev/blog/2023/05/01/post"));
    }

    #[test]
    fn test_failed_build_keeps_previous_feed() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_with_post(dir.path());
        run(&site).unwrap();
        let before = fs::read_to_string(&site.output_path).unwrap();

        fs::write(
            site.content_dir.join("2023/05/01/broken.md"),
            "---\ntitle: Broken\n---\n",
        )
        .unwrap();

        let err = run(&site).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
        assert_eq!(fs::read_to_string(&site.output_path).unwrap(), before);
    }

    #[test]
    fn test_failed_first_build_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());

        // Content directory does not exist
        assert!(run(&site).is_err());
        assert!(!site.output_path.exists());
    }
}
