use serde::Serialize;
use std::path::PathBuf;

use super::CommandHandler;
use crate::config::Manifest;
use crate::io::SitePaths;
use crate::{GuidepubError, Result};

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub project_root: PathBuf,
    pub manifest: Option<PathBuf>,
    pub strict: bool,
    pub json: bool,
}

/// Machine-readable validation report for --json output
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Number of guide records in the manifest
    pub guides: usize,
    /// Guide stems whose source file is missing
    pub missing: Vec<String>,
    /// True when every referenced source file exists
    pub ok: bool,
}

impl CommandHandler for ValidateCommand {
    fn execute(&self) -> Result<()> {
        let mut paths = SitePaths::for_project(&self.project_root);
        if let Some(manifest) = &self.manifest {
            paths.manifest_file = manifest.clone();
        }

        let manifest = Manifest::load(&paths.manifest_file)?;
        let report = self.check(&paths, &manifest);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Manifest: {}", paths.manifest_file.display());
            println!("Guides listed: {}", report.guides);
            for file in &report.missing {
                println!("Missing source: {}", paths.guide_source(file).display());
            }
            if report.ok {
                println!("All guide sources present");
            }
        }

        if self.strict && !report.ok {
            return Err(GuidepubError::Manifest(format!(
                "{} guide source(s) missing",
                report.missing.len()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

impl ValidateCommand {
    /// Create new validate command
    pub fn new(
        project_root: PathBuf,
        manifest: Option<PathBuf>,
        strict: bool,
        json: bool,
    ) -> Self {
        Self {
            project_root,
            manifest,
            strict,
            json,
        }
    }

    fn check(&self, paths: &SitePaths, manifest: &Manifest) -> ValidationReport {
        let missing: Vec<String> = manifest
            .guides
            .iter()
            .filter(|g| !paths.guide_source(&g.file).exists())
            .map(|g| g.file.clone())
            .collect();

        ValidationReport {
            guides: manifest.guides.len(),
            ok: missing.is_empty(),
            missing,
        }
    }
}
