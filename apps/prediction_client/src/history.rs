use std::fs;
use std::path::PathBuf;

use astro_prediction::PredictionRequest;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HistoryError;

pub const DEFAULT_HISTORY_PATH: &str = "prediction_history.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    #[serde(flatten)]
    pub request: PredictionRequest,
    pub result: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub offline: bool,
}

impl HistoryEntry {
    pub fn new(request: PredictionRequest, result: String, offline: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            result,
            timestamp: Utc::now().to_rfc3339(),
            offline,
        }
    }
}

/// Newest-first list of past predictions kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing or unreadable history reads as empty.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unparsable history at {}: {}", self.path.display(), e);
            Vec::new()
        })
    }

    pub fn record(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut history = self.load();
        history.insert(0, entry);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&history)?)?;

        tracing::debug!(entries = history.len(), "Saved prediction history");
        Ok(())
    }
}
