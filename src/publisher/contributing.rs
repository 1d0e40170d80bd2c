//! Contributing-guidelines republish
//!
//! Copies .github/CONTRIBUTING.md into the website pages directory with a
//! small fixed front-matter block. Runs exactly once per invocation. A
//! missing source is fatal: unlike guides, the file ships with the
//! repository, so its absence means a broken checkout.

use std::fs;
use tracing::info;

use super::renderer;
use crate::io::SitePaths;
use crate::{GuidepubError, Result};

/// Publish the contributing page.
pub fn publish(paths: &SitePaths, dry_run: bool) -> Result<()> {
    let source = &paths.contributing_source;
    let destination = &paths.contributing_dest;

    let content = fs::read_to_string(source).map_err(|e| {
        GuidepubError::Publish(format!(
            "Failed to read contributing guidelines {}: {}",
            source.display(),
            e
        ))
    })?;

    let rendered = renderer::render_contributing(&content);

    if dry_run {
        info!("Dry run: would write {}", destination.display());
        return Ok(());
    }

    info!("Writing to file: {}", destination.display());
    fs::write(destination, rendered).map_err(|e| {
        GuidepubError::Publish(format!(
            "Failed to write {}: {}",
            destination.display(),
            e
        ))
    })?;

    info!("Copied {} to {}", source.display(), destination.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn project_with_contributing(content: &str) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".github")).unwrap();
        fs::create_dir_all(dir.path().join("web/src/pages")).unwrap();
        fs::write(dir.path().join(".github/CONTRIBUTING.md"), content).unwrap();
        dir
    }

    #[test]
    fn test_contributing_page_is_published() {
        let dir = project_with_contributing("Be kind.\n");
        let paths = SitePaths::for_project(dir.path());

        publish(&paths, false).unwrap();

        let published = fs::read_to_string(paths.contributing_dest).unwrap();
        assert!(published.starts_with("---\nlayout: ../layouts/MarkdownLayout.astro\n"));
        assert!(published.contains("title: Contributing Guidelines"));
        assert!(published.ends_with("Be kind.\n"));
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempdir().unwrap();
        let paths = SitePaths::for_project(dir.path());

        let result = publish(&paths, false);

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("CONTRIBUTING.md"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = project_with_contributing("Be kind.\n");
        let paths = SitePaths::for_project(dir.path());

        publish(&paths, true).unwrap();

        assert!(!paths.contributing_dest.exists());
    }
}
