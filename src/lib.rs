pub mod catalog;
pub mod config;
pub mod models;
pub mod pipeline;

pub use config::ExtractionConfig;
pub use models::{CableMetadata, CableText, CanonicalCableId, Reference, ReferenceKind, Tag, TagKind};
pub use pipeline::extraction::{ExtractionError, MetadataExtractor};

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`config::default_log_filter`]. Later calls are no-ops.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} tracing ready", config::APP_NAME, config::APP_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_repeatable() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn crate_root_exports_extractor() {
        let cable = CableText {
            reference_id: "09BERLIN1167".into(),
            ..CableText::default()
        };
        let meta = MetadataExtractor::new(ExtractionConfig::default()).extract(&cable).unwrap();
        assert_eq!(meta.reference_id.station(), "BERLIN");
    }
}
