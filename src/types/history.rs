// src/types/history.rs
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;

pub const MAX_HISTORY_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisHistoryEntry {
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,
    pub analysis: AnalysisResult,
}

impl AnalysisHistoryEntry {
    pub fn now(analysis: AnalysisResult) -> Self {
        Self {
            timestamp: iso_timestamp(),
            analysis,
        }
    }
}

/// Newest-first list of completed analyses, never longer than
/// [`MAX_HISTORY_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisHistory {
    entries: Vec<AnalysisHistoryEntry>,
}

impl AnalysisHistory {
    pub fn from_entries(mut entries: Vec<AnalysisHistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }

    pub fn push(&mut self, entry: AnalysisHistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn entries(&self) -> &[AnalysisHistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&AnalysisHistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
