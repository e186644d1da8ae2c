use super::classified_by::parse_classified_by;
use super::content::clean_content;
use super::reference_id::canonicalize;
use super::references::parse_references;
use super::subject::titlefy;
use super::tags::parse_tags;
use super::ExtractionError;
use crate::config::ExtractionConfig;
use crate::models::{CableMetadata, CableText, Reference, Tag};

/// Runs every extractor over one cable.
///
/// Holds only its configuration, so one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    config: ExtractionConfig,
}

impl MetadataExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract the metadata of `cable`.
    ///
    /// Fails only when the reference id cannot be canonicalized.
    pub fn extract(&self, cable: &CableText) -> Result<CableMetadata, ExtractionError> {
        let reference_id = canonicalize(&cable.reference_id)?;
        let year: u32 = reference_id
            .year()
            .parse()
            .map_err(|_| ExtractionError::InvalidPart {
                part: "year",
                value: reference_id.year().to_string(),
            })?;

        let tags: Vec<Tag> = parse_tags(&cable.header, self.config.canonicalize_tags)
            .into_iter()
            .map(Tag::new)
            .collect();

        let own_id = self
            .config
            .skip_self_references
            .then_some(cable.reference_id.as_str());
        let references: Vec<Reference> = parse_references(&cable.body, year, own_id).collect();

        let classified_by: Vec<String> =
            parse_classified_by(&cable.body, self.config.normalize_classified_by).collect();

        let subject = if self.config.titlefy_subject {
            titlefy(cable.subject.as_deref())
        } else {
            cable.subject.clone()
        };

        let content = if self.config.clean_content {
            clean_content(&cable.body)
        } else {
            cable.body.clone()
        };

        tracing::debug!(
            reference_id = %reference_id,
            tags = tags.len(),
            references = references.len(),
            classified_by = classified_by.len(),
            "Extracted cable metadata"
        );

        Ok(CableMetadata {
            reference_id,
            subject,
            tags,
            references,
            classified_by,
            content,
        })
    }
}
