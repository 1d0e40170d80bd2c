//! Guide publishing pipeline
//!
//! A straight-line batch transform: for each manifest record, read the
//! source guide, wrap it in generated header and footer blocks, and write
//! it to the website pages directory. Records whose source file is missing
//! are skipped with a warning; the contributing page is republished once
//! at the end of the run.

pub mod contributing;
pub mod renderer;

use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Manifest;
use crate::io::SitePaths;
use crate::{GuidepubError, Result};

/// Outcome of one publishing run
#[derive(Debug, Default)]
pub struct PublishSummary {
    /// Number of guides rendered and written
    pub published: usize,
    /// Guide stems skipped because their source file was missing
    pub skipped: Vec<String>,
}

/// Drives one publishing run over a project tree
pub struct Publisher {
    paths: SitePaths,
    dry_run: bool,
}

impl Publisher {
    /// Create a publisher for the given project layout
    pub fn new(paths: SitePaths) -> Self {
        Self {
            paths,
            dry_run: false,
        }
    }

    /// Render without writing anything
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Publish every guide in the manifest, then the contributing page.
    ///
    /// A guide whose source file does not exist is skipped with a warning
    /// and the remaining records still publish. Read and write failures on
    /// an existing source abort the run; partial output from earlier
    /// records is left in place.
    pub fn run(&self, manifest: &Manifest) -> Result<PublishSummary> {
        let mut summary = PublishSummary::default();

        for guide in &manifest.guides {
            let source = self.paths.guide_source(&guide.file);

            if !source.exists() {
                warn!(
                    "Skipping {} as doc could not be found in {}",
                    guide.file,
                    source.display()
                );
                summary.skipped.push(guide.file.clone());
                continue;
            }

            let destination = self.paths.guide_destination(&guide.file);
            let content = fs::read_to_string(&source).map_err(|e| {
                GuidepubError::Publish(format!("Failed to read {}: {}", source.display(), e))
            })?;

            let now = Local::now();
            let rendered =
                renderer::render_guide(guide, &content, &source, now.date_naive(), now);

            if self.dry_run {
                info!("Dry run: would write {}", destination.display());
            } else {
                self.write(&destination, &rendered)?;
                info!("Copied {} to {}", source.display(), destination.display());
            }

            summary.published += 1;
        }

        contributing::publish(&self.paths, self.dry_run)?;

        Ok(summary)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        info!("Writing to file: {}", path.display());
        fs::write(path, content).map_err(|e| {
            GuidepubError::Publish(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
