pub mod classified_by;
pub mod content;
pub mod orchestrator;
pub mod reference_id;
pub mod references;
pub mod subject;
pub mod tags;

pub use classified_by::parse_classified_by;
pub use content::clean_content;
pub use orchestrator::*;
pub use reference_id::{canonicalize, parse};
pub use references::{cited_cables, parse_references, References};
pub use subject::titlefy;
pub use tags::{parse_tags, tag_kind};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Illegal reference identifier: {0}")]
    InvalidReferenceId(String),

    #[error("Reference identifier {reference_id} has no valid equivalent (would be {suggested})")]
    NoKnownEquivalent {
        reference_id: String,
        suggested: String,
    },

    #[error("Invalid {part} in cable identifier: {value:?}")]
    InvalidPart { part: &'static str, value: String },

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
