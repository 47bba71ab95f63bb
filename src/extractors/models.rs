// src/extractors/models.rs
use serde::{Deserialize, Serialize};

/// One schedule block found in the announcement section.
/// `time_window` and `reason` are empty when the block never named them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageEntry {
    pub code: String,
    pub time_window: String,
    pub reason: String,
}

/// Everything pulled out of one result page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub customer: Option<String>,
    pub address: Option<String>,
    pub entries: Vec<OutageEntry>,
}

impl ExtractionResult {
    pub fn has_outages(&self) -> bool {
        !self.entries.is_empty()
    }
}
