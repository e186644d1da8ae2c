use serde::{Deserialize, Serialize};

use super::cable_id::CanonicalCableId;
use super::reference::Reference;
use super::tag::Tag;

/// Raw text of one cable, split into the parts the extractors read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CableText {
    /// Identifier as published; may be malformed.
    pub reference_id: String,
    pub subject: Option<String>,
    /// Everything above the body: addressees, E.O. line, TAGS, SUBJECT.
    pub header: String,
    pub body: String,
}

/// Structured metadata extracted from one cable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CableMetadata {
    pub reference_id: CanonicalCableId,
    pub subject: Option<String>,
    pub tags: Vec<Tag>,
    pub references: Vec<Reference>,
    pub classified_by: Vec<String>,
    pub content: String,
}

impl CableMetadata {
    /// Ids of all cited cables, in order of first citation.
    pub fn cited_cables(&self) -> Vec<CanonicalCableId> {
        let mut ids: Vec<CanonicalCableId> = Vec::new();
        for id in self.references.iter().filter_map(Reference::cable_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}
