use std::path::PathBuf;
use tracing::info;

use super::CommandHandler;
use crate::config::Manifest;
use crate::io::SitePaths;
use crate::publisher::Publisher;
use crate::Result;

/// Handler for the `publish` command
pub struct PublishCommand {
    pub project_root: PathBuf,
    pub manifest: Option<PathBuf>,
    pub dry_run: bool,
}

impl CommandHandler for PublishCommand {
    fn execute(&self) -> Result<()> {
        let mut paths = SitePaths::for_project(&self.project_root);
        if let Some(manifest) = &self.manifest {
            paths.manifest_file = manifest.clone();
        }

        let manifest = Manifest::load(&paths.manifest_file)?;

        let summary = Publisher::new(paths)
            .with_dry_run(self.dry_run)
            .run(&manifest)?;

        info!(
            "Published {} guides ({} skipped)",
            summary.published,
            summary.skipped.len()
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "publish"
    }
}

impl PublishCommand {
    /// Create new publish command
    pub fn new(project_root: PathBuf, manifest: Option<PathBuf>, dry_run: bool) -> Self {
        Self {
            project_root,
            manifest,
            dry_run,
        }
    }
}
