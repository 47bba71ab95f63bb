// src/extractors/mod.rs
pub mod entries;
pub mod header;
pub mod labels;
pub mod models;
pub mod section;

// Re-export key extraction types for convenience
pub use entries::{scan_entries, LookaheadPolicy, PendingEntry, ScanState};
pub use header::{extract_header, Header};
pub use labels::Label;
pub use models::{ExtractionResult, OutageEntry};
pub use section::{isolate, normalize, Section};

/// Tunables of the extraction pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub lookahead: LookaheadPolicy,
}

/// Turns the visible text of a result page into an [`ExtractionResult`].
/// Never fails: missing pieces come back as `None` or empty strings.
#[derive(Debug, Clone, Default)]
pub struct OutageExtractor {
    config: ExtractorConfig,
}

impl OutageExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ExtractorConfig {
        self.config
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        let section = isolate(text);
        let lines = normalize(section.text);
        tracing::debug!(
            "Section spans bytes {}..{} ({} non-empty lines, fallback = {})",
            section.start,
            section.end,
            lines.len(),
            section.is_fallback()
        );

        let header = extract_header(&lines);
        let entries = scan_entries(&lines, self.config.lookahead);

        ExtractionResult {
            customer: header.customer,
            address: header.address,
            entries,
        }
    }
}

/// Runs the pipeline with the default configuration.
pub fn extract(text: &str) -> ExtractionResult {
    OutageExtractor::new().extract(text)
}
