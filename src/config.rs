use serde::{Deserialize, Serialize};

use crate::pipeline::extraction::ExtractionError;

/// Application-level constants
pub const APP_NAME: &str = "Cablemap";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "cablemap_lib=info"
}

/// Switches for the optional steps of [`MetadataExtractor`].
///
/// Missing fields in a JSON document take their default.
///
/// [`MetadataExtractor`]: crate::pipeline::extraction::MetadataExtractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Repair misspelled tags and split glued ones.
    pub canonicalize_tags: bool,
    /// Rewrite all-caps authority names in name case.
    pub normalize_classified_by: bool,
    pub titlefy_subject: bool,
    pub clean_content: bool,
    /// Drop citations of the cable itself.
    pub skip_self_references: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            canonicalize_tags: true,
            normalize_classified_by: false,
            titlefy_subject: true,
            clean_content: true,
            skip_self_references: true,
        }
    }
}

impl ExtractionConfig {
    /// Load a (possibly partial) JSON document over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ExtractionError> {
        Ok(serde_json::from_str(json)?)
    }
}
