// src/export.rs
//! JSON export of the current analysis

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app_log;
use crate::core::FsOps;
use crate::session::Session;
use crate::types::history::iso_timestamp;
use crate::types::AnalysisResult;
use crate::utils::{epoch_millis, export_file_path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub timestamp: String,
    pub filename: String,
    pub analysis: AnalysisResult,
}

pub struct Exporter;

impl Exporter {
    pub fn document(session: &Session) -> Option<ExportDocument> {
        let analysis = session.state.analysis_results.clone()?;
        let filename = session
            .state
            .current_file
            .as_ref()
            .map(|f| f.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Some(ExportDocument {
            timestamp: iso_timestamp(),
            filename,
            analysis,
        })
    }

    async fn write(session: &Session, document: &ExportDocument) -> Result<PathBuf> {
        let path = export_file_path(&session.output_dir, epoch_millis());
        let content =
            serde_json::to_string_pretty(document).context("Failed to serialize export")?;
        FsOps::write_file_safe(&path, &content).await?;
        Ok(path)
    }

    /// Write `resume-analysis-<epoch-ms>.json` to the output directory.
    /// Outcomes are reported through the toasts.
    pub async fn export_results(session: &mut Session) -> Option<PathBuf> {
        let Some(document) = Self::document(session) else {
            session.toasts.show_error("No results to export.");
            return None;
        };

        match Self::write(session, &document).await {
            Ok(path) => {
                app_log!(info, "Exported analysis to {}", path.display());
                session.toasts.show_success("Results exported successfully!");
                Some(path)
            }
            Err(e) => {
                app_log!(error, "Export failed: {:#}", e);
                session.toasts.show_error(format!("Export failed: {}", e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{session_with, FakeApi};
    use crate::upload::SelectedFile;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_nothing_to_export() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        assert!(Exporter::export_results(&mut session).await.is_none());
        assert_eq!(session.toasts.current_error(), Some("No results to export."));
    }

    #[tokio::test]
    async fn test_export_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        session.output_dir = dir.path().to_path_buf();

        let raw = json!({
            "scores": {"overall_score": 88, "completeness_score": 70.5},
            "skills_analysis": {"tools": ["Git", {"name": "Docker", "proficiency": "Intermediate"}]},
            "custom_backend_field": {"nested": [1, 2, 3]}
        });
        session.state.analysis_results = Some(AnalysisResult::from_value(raw.clone()));
        session.state.current_file = Some(SelectedFile::in_memory("cv.pdf", vec![1]));

        let path = Exporter::export_results(&mut session).await.unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("resume-analysis-"));
        assert_eq!(session.toasts.current_success(), Some("Results exported successfully!"));

        let content = std::fs::read_to_string(&path).unwrap();
        let document: ExportDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(document.filename, "cv.pdf");
        assert_eq!(document.analysis.raw(), &raw);
        assert_eq!(&document.analysis, session.state.analysis_results.as_ref().unwrap());
    }

    #[tokio::test]
    async fn test_filename_falls_back_to_unknown() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        session.state.analysis_results = Some(AnalysisResult::from_value(json!({})));
        let document = Exporter::document(&session).unwrap();
        assert_eq!(document.filename, "Unknown");
    }
}
