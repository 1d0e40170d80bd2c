//! Manifest parser - the resources.yml guide list
//!
//! The manifest is a declarative list - no logic, just publishing metadata

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::{GuidepubError, Result};

/// One entry in the manifest describing a single markdown guide
/// and its publishing metadata.
///
/// Only `file` is required. The remaining fields are free-form text
/// substituted verbatim into the generated front-matter; an absent field
/// renders as an empty value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideRecord {
    /// Base name of the guide, without extension. Names both the source
    /// file under guides/ and the destination file.
    pub file: String,

    #[serde(default, deserialize_with = "opt_scalar")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "opt_scalar")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "opt_scalar")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "opt_scalar")]
    pub icon: Option<String>,

    #[serde(default, deserialize_with = "opt_scalar")]
    pub tags: Option<String>,

    #[serde(default, deserialize_with = "opt_scalar")]
    pub index: Option<String>,

    #[serde(default, deserialize_with = "opt_scalar")]
    pub created: Option<String>,
}

/// The parsed resources.yml: an ordered sequence of guides to publish.
/// Manifest order is preserved for iteration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub guides: Vec<GuideRecord>,
}

impl Manifest {
    /// Load the manifest from a YAML file.
    ///
    /// A missing or unparseable manifest is fatal - nothing has been
    /// published yet at this point, so the run aborts cleanly.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading manifest: {}", path.display());

        if !path.exists() {
            return Err(GuidepubError::Manifest(format!(
                "Manifest file {} not found",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            GuidepubError::Manifest(format!(
                "Failed to read manifest {}: {}",
                path.display(),
                e
            ))
        })?;

        let manifest: Manifest = serde_yaml_ng::from_str(&content).map_err(|e| {
            GuidepubError::Manifest(format!(
                "Failed to parse manifest {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded {} guide records", manifest.guides.len());

        Ok(manifest)
    }
}

// Manifest values are free-form: `index: 1` and `index: '1'` both appear
// in the wild. Accept any YAML scalar and keep its textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn opt_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(Scalar::into_string))
}
