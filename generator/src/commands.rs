//! Generator commands
//!
//! Batch jobs run locally or from CI: write the RSS feed to disk, or bake the
//! latest issue and archive into a static HTML page.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use newsletter_core::domain::ports::{ARCHIVE_CONTAINER, LATEST_CONTAINER};
use newsletter_core::{NewsletterService, NewsletterSource, TemplatePage};

/// Fetch newsletters and write the RSS feed to `output`.
///
/// Fetch and write failures are fatal.
pub async fn generate_rss<S>(service: &NewsletterService<S>, output: &Path, limit: usize) -> Result<()>
where
    S: NewsletterSource + ?Sized,
{
    let xml = service
        .rss_feed(limit)
        .await
        .context("Failed to fetch newsletters from Sanity")?;

    write_replacing(output, &xml).await?;
    tracing::info!(path = %output.display(), "RSS feed generated successfully");

    Ok(())
}

/// Render the page containers of `template` into `output`.
///
/// A failed fetch still produces a page, with the placeholder content.
pub async fn render_page<S>(
    service: &NewsletterService<S>,
    template: &Path,
    output: &Path,
    limit: usize,
) -> Result<()>
where
    S: NewsletterSource + ?Sized,
{
    let html = tokio::fs::read_to_string(template)
        .await
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let mut page = TemplatePage::new(html);

    for container in [LATEST_CONTAINER, ARCHIVE_CONTAINER] {
        if !page.has_container(container) {
            tracing::warn!(container, template = %template.display(), "Template has no such container");
        }
    }

    service.render_page(&mut page, limit).await;

    write_replacing(output, page.html()).await?;
    tracing::info!(path = %output.display(), "Newsletter page rendered");

    Ok(())
}

/// Write through a sibling temp file and rename it over `path`, so readers
/// never observe a half-written file.
async fn write_replacing(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp = temp_path(path)?;
    tokio::fs::write(&tmp, contents)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            tracing::warn!(path = %tmp.display(), "Failed to remove temp file: {}", cleanup);
        }
        return Err(e).with_context(|| format!("Failed to move {} into place", tmp.display()));
    }

    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let mut name = path
        .file_name()
        .with_context(|| format!("Output path {} has no file name", path.display()))?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use newsletter_core::config::BATCH_FEED_LIMIT;
    use newsletter_core::test_utils::{
        test_records, FailingNewsletterSource, InMemoryNewsletterSource,
    };
    use newsletter_core::SiteConfig;

    use super::*;

    const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div id="latest-issue-container"><p>Loading...</p></div>
  <div id="archive-container"></div>
</body>
</html>"#;

    fn service_with(records: usize) -> NewsletterService<InMemoryNewsletterSource> {
        NewsletterService::new(
            Arc::new(InMemoryNewsletterSource::new().with_records(test_records(records))),
            SiteConfig::default(),
        )
    }

    fn failing_service() -> NewsletterService<FailingNewsletterSource> {
        NewsletterService::new(
            Arc::new(FailingNewsletterSource::new(500)),
            SiteConfig::default(),
        )
    }

    #[tokio::test]
    async fn writes_feed_creating_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("docs/newsletter/rss.xml");

        generate_rss(&service_with(3), &output, BATCH_FEED_LIMIT)
            .await
            .unwrap();

        let xml = std::fs::read_to_string(&output).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(xml.matches("<item>").count(), 3);
        assert!(!output.with_file_name("rss.xml.tmp").exists());
    }

    #[tokio::test]
    async fn overwrites_existing_feed() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rss.xml");
        std::fs::write(&output, "stale").unwrap();

        generate_rss(&service_with(1), &output, BATCH_FEED_LIMIT)
            .await
            .unwrap();

        let xml = std::fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<item>"));
    }

    #[tokio::test]
    async fn fetch_failure_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("rss.xml");

        let err = generate_rss(&failing_service(), &output, BATCH_FEED_LIMIT)
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to fetch newsletters"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn renders_page_template() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("newsletter.html");
        let output = dir.path().join("out/newsletter.html");
        std::fs::write(&template, TEMPLATE).unwrap();

        render_page(&service_with(3), &template, &output, 10)
            .await
            .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<h3>Issue 1</h3>"));
        assert!(!html.contains("Loading..."));
        assert_eq!(html.matches("class=\"archive-item\"").count(), 2);
        assert!(html.contains("<body>"));
    }

    #[tokio::test]
    async fn page_falls_back_to_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("newsletter.html");
        std::fs::write(&template, TEMPLATE).unwrap();

        render_page(&failing_service(), &template, &template, 10)
            .await
            .unwrap();

        let html = std::fs::read_to_string(&template).unwrap();
        assert!(html.contains("Coming Soon"));
        assert!(html.contains("No past issues yet."));
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_page(
            &service_with(1),
            &dir.path().join("nope.html"),
            &dir.path().join("out.html"),
            10,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the rename fail after the temp write
        let output = dir.path().join("rss.xml");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("keep"), "x").unwrap();

        let err = generate_rss(&service_with(1), &output, BATCH_FEED_LIMIT)
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("into place"));
        assert!(!dir.path().join("rss.xml.tmp").exists());
        assert!(output.is_dir());
    }

    #[test]
    fn temp_path_is_a_sibling() {
        assert_eq!(
            temp_path(Path::new("docs/newsletter/rss.xml")).unwrap(),
            PathBuf::from("docs/newsletter/rss.xml.tmp")
        );
        assert!(temp_path(Path::new("/")).is_err());
    }
}
