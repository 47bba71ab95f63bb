// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::extractors::ExtractionResult;
use crate::utils::error::StorageError;

const ARTIFACT_PREFIX: &str = "outage";

/// What gets written to disk for one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageRecord {
    pub customer_code: Option<String>,
    pub source: String,
    pub extracted_at: String,
    #[serde(flatten)]
    pub result: ExtractionResult,
}

impl OutageRecord {
    pub fn new(customer_code: Option<String>, source: String, result: ExtractionResult) -> Self {
        Self {
            customer_code,
            source,
            extracted_at: chrono::Utc::now().to_rfc3339(),
            result,
        }
    }
}

/// Paths of the files written by [`StorageManager::save_record`].
#[derive(Debug, Clone)]
pub struct SavedArtifacts {
    pub record: PathBuf,
    pub page_text: PathBuf,
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Common stem of both artifacts, e.g. `outage_PB0701234_20261019-081500`.
    fn artifact_stem(&self, customer_code: Option<&str>) -> String {
        let code = customer_code
            .map(sanitize_for_filename)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
        format!("{}_{}_{}", ARTIFACT_PREFIX, code, ts)
    }

    /// Saves the record as pretty JSON plus the raw page text it came from.
    pub fn save_record(&self, record: &OutageRecord, page_text: &str) -> Result<SavedArtifacts, StorageError> {
        let stem = self.artifact_stem(record.customer_code.as_deref());

        let record_path = self.base_dir.join(format!("{}.json", stem));
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&record_path, json).map_err(StorageError::IoError)?;
        tracing::info!("Saved extraction record to {}", record_path.display());

        let text_path = self.base_dir.join(format!("{}.txt", stem));
        fs::write(&text_path, page_text).map_err(StorageError::IoError)?;
        tracing::info!("Saved page text to {}", text_path.display());

        Ok(SavedArtifacts { record: record_path, page_text: text_path })
    }
}

/// Keeps ASCII alphanumerics, '-' and '_'; everything else becomes '_'.
fn sanitize_for_filename(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::OutageEntry;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("outage_extractor_storage_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_new_creates_directory() {
        let dir = temp_dir("create").join("nested");
        let _ = fs::remove_dir_all(&dir);
        let storage = StorageManager::new(&dir).unwrap();
        assert!(storage.base_dir().is_dir());
    }

    #[test]
    fn test_save_record_round_trip() {
        let storage = StorageManager::new(temp_dir("save")).unwrap();
        let result = ExtractionResult {
            customer: Some("Nguyen Van A".to_string()),
            address: None,
            entries: vec![OutageEntry {
                code: "ABC123".to_string(),
                time_window: "08:00-10:00".to_string(),
                reason: String::new(),
            }],
        };
        let record = OutageRecord::new(Some("PB07/123".to_string()), "stdin".to_string(), result);

        let saved = storage.save_record(&record, "raw page").unwrap();
        let file_name = saved.record.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("outage_PB07_123_"), "unexpected name {}", file_name);
        assert!(file_name.ends_with(".json"));

        let loaded: OutageRecord = serde_json::from_str(&fs::read_to_string(&saved.record).unwrap()).unwrap();
        assert_eq!(loaded, record);
        assert_eq!(fs::read_to_string(&saved.page_text).unwrap(), "raw page");
    }

    #[test]
    fn test_sanitize_for_filename() {
        assert_eq!(sanitize_for_filename(" PB 07/1 "), "PB_07_1");
        assert_eq!(sanitize_for_filename("Mã"), "M_");
    }
}
