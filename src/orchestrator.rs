// src/orchestrator.rs
//! Single-flight analysis run: upload, optional comparison, render

use uuid::Uuid;

use crate::app_log;
use crate::error::{DegradedFeature, ValidationError, ValidationErrorType};
use crate::render::results::build_results_html;
use crate::session::Session;
use crate::state::AnalysisPhase;
use crate::types::{AnalysisHistoryEntry, AnalysisResult, JobComparison};
use crate::ui::page::{ACTION_BUTTONS, ANALYZE_BUTTON, LOADING_STATE, RESULTS_SECTION};
use crate::upload::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Precondition failed; nothing was sent.
    Rejected,
    /// The upload or analysis call failed with this message.
    Failed(String),
    Completed { compared: bool },
}

pub struct AnalysisOrchestrator;

impl AnalysisOrchestrator {
    /// Run one analysis of the selected file. The busy flag, loading
    /// panel and analyze button are released on every path.
    pub async fn start(session: &mut Session) -> AnalysisOutcome {
        let Some(file) = session.state.current_file.clone() else {
            let err = ValidationError::new(
                ValidationErrorType::MissingFile,
                "Please select a resume file first.",
            );
            session.toasts.show_error(err.message);
            return AnalysisOutcome::Rejected;
        };

        if !session.state.try_begin() {
            session
                .toasts
                .show_error("Analysis already in progress. Please wait...");
            return AnalysisOutcome::Rejected;
        }

        let run_id = Uuid::new_v4();
        app_log!(info, "[{}] Starting analysis of {}", run_id, file.name);

        session.page.show(LOADING_STATE);
        session.page.hide(ACTION_BUTTONS);
        session.page.disable_button(ANALYZE_BUTTON, "Analyzing...");
        session.page.scroll_into_view(LOADING_STATE);

        let result = Self::run(session, &file, run_id).await;

        session.state.finish();
        session.page.hide(LOADING_STATE);
        session.page.restore_button(ANALYZE_BUTTON);

        match result {
            Ok(compared) => {
                app_log!(info, "[{}] Analysis complete", run_id);
                AnalysisOutcome::Completed { compared }
            }
            Err(message) => {
                app_log!(error, "[{}] Analysis error: {}", run_id, message);
                session
                    .toasts
                    .show_error(format!("Analysis failed: {}", message));
                if session.state.current_file.is_some() {
                    session.page.show(ACTION_BUTTONS);
                }
                AnalysisOutcome::Failed(message)
            }
        }
    }

    async fn run(session: &mut Session, file: &SelectedFile, run_id: Uuid) -> Result<bool, String> {
        let content = file.read_bytes().await.map_err(|e| format!("{:#}", e))?;
        let raw = session
            .api
            .analyze_resume(&file.name, content)
            .await
            .map_err(|e| e.to_string())?;
        session.state.analysis_results = Some(AnalysisResult::from_value(raw));
        session.state.job_comparison = None;

        let job_description = session.page.job_description.trim().to_string();
        let compared = if job_description.is_empty() {
            false
        } else {
            session.state.advance(AnalysisPhase::ComparingJob);
            Self::compare(session, &job_description, run_id).await
        };

        session.state.advance(AnalysisPhase::Rendering);
        Self::render(session).await;
        Ok(compared)
    }

    /// Best effort: a failed comparison leaves the section out.
    async fn compare(session: &mut Session, job_description: &str, run_id: Uuid) -> bool {
        let resume_text = session
            .state
            .analysis_results
            .as_ref()
            .map(|a| a.text_content().to_string())
            .unwrap_or_default();

        match session.api.compare_job(&resume_text, job_description).await {
            Ok(payload) => {
                let comparison: JobComparison =
                    serde_json::from_value(payload.clone()).unwrap_or_default();
                if let Some(analysis) = session.state.analysis_results.as_mut() {
                    analysis.attach_job_comparison(payload);
                }
                session.state.job_comparison = Some(comparison);
                app_log!(info, "[{}] Job comparison attached", run_id);
                true
            }
            Err(e) => {
                DegradedFeature::new("job comparison", e).log();
                false
            }
        }
    }

    async fn render(session: &mut Session) {
        let Some(analysis) = session.state.analysis_results.clone() else {
            return;
        };

        session
            .page
            .render_into(RESULTS_SECTION, build_results_html(&analysis));
        session.page.scroll_into_view(RESULTS_SECTION);

        let html = session.page.html(RESULTS_SECTION).to_string();
        session
            .charts
            .init_charts(&html, &analysis, session.skills_database.as_ref());

        session.record_history(AnalysisHistoryEntry::now(analysis)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::SKILLS_CHART;
    use crate::error::ApiError;
    use crate::session::testing::{session_with, FakeApi};
    use crate::types::MAX_HISTORY_ENTRIES;
    use crate::upload::UploadController;
    use serde_json::json;
    use std::sync::Arc;

    fn sample_analysis() -> serde_json::Value {
        json!({
            "basic_info": {"text_content": "Jane Doe, backend engineer"},
            "scores": {"overall_score": 78, "technical_skills_score": 81},
            "skills_analysis": {"programming_languages": ["Rust", "Python"]},
            "experience_analysis": {"estimated_level": "Mid-Level", "years_pattern": 6}
        })
    }

    async fn session_with_file(api: Arc<FakeApi>) -> Session {
        let mut session = session_with(api).await;
        let file = SelectedFile::in_memory("resume.pdf", b"%PDF-1.4".to_vec());
        assert!(UploadController::select_file(&mut session, file));
        session
    }

    fn assert_released(session: &Session) {
        assert!(!session.state.is_analyzing());
        assert!(!session.page.is_visible(LOADING_STATE));
        assert!(session.page.buttons_idle());
    }

    #[tokio::test]
    async fn test_requires_selected_file() {
        let api = Arc::new(FakeApi::default());
        let mut session = session_with(api.clone()).await;

        assert_eq!(AnalysisOrchestrator::start(&mut session).await, AnalysisOutcome::Rejected);
        assert_eq!(session.toasts.current_error(), Some("Please select a resume file first."));
        assert_eq!(FakeApi::calls(&api.analyze_calls), 0);
    }

    #[tokio::test]
    async fn test_no_second_request_while_busy() {
        let api = Arc::new(FakeApi::default().with_analysis(Ok(sample_analysis())));
        let mut session = session_with_file(api.clone()).await;
        assert!(session.state.try_begin());

        assert_eq!(AnalysisOrchestrator::start(&mut session).await, AnalysisOutcome::Rejected);
        assert_eq!(
            session.toasts.current_error(),
            Some("Analysis already in progress. Please wait...")
        );
        assert_eq!(FakeApi::calls(&api.analyze_calls), 0);
        assert_eq!(session.state.phase(), AnalysisPhase::Submitting);
    }

    #[tokio::test]
    async fn test_backend_rejection() {
        let api = Arc::new(
            FakeApi::default().with_analysis(Err(ApiError::Rejected("parse failed".into()))),
        );
        let mut session = session_with_file(api).await;

        let outcome = AnalysisOrchestrator::start(&mut session).await;
        assert_eq!(outcome, AnalysisOutcome::Failed("parse failed".into()));
        assert_eq!(session.toasts.current_error(), Some("Analysis failed: parse failed"));
        assert_eq!(session.state.phase(), AnalysisPhase::Idle);
        assert!(session.state.analysis_results.is_none());
        assert!(session.state.history.is_empty());
        assert!(session.page.is_visible(ACTION_BUTTONS));
        assert_released(&session);
    }

    #[tokio::test]
    async fn test_completed_run_renders_and_records() {
        let api = Arc::new(FakeApi::default().with_analysis(Ok(sample_analysis())));
        let mut session = session_with_file(api.clone()).await;

        let outcome = AnalysisOrchestrator::start(&mut session).await;
        assert_eq!(outcome, AnalysisOutcome::Completed { compared: false });
        assert_eq!(FakeApi::calls(&api.compare_calls), 0);

        assert!(session.page.is_visible(RESULTS_SECTION));
        assert!(session.page.html(RESULTS_SECTION).contains("Analysis Complete!"));
        assert!(session.charts.get(SKILLS_CHART).is_some());
        assert_eq!(session.state.history.len(), 1);
        assert_released(&session);
    }

    #[tokio::test]
    async fn test_comparison_is_attached() {
        let api = Arc::new(
            FakeApi::default()
                .with_analysis(Ok(sample_analysis()))
                .with_comparison(Ok(json!({"match_score": 67, "strong_matches": ["Rust"]}))),
        );
        let mut session = session_with_file(api.clone()).await;
        session.page.job_description = "  Rust backend role  ".to_string();

        let outcome = AnalysisOrchestrator::start(&mut session).await;
        assert_eq!(outcome, AnalysisOutcome::Completed { compared: true });
        assert_eq!(FakeApi::calls(&api.compare_calls), 1);
        assert!(session.page.html(RESULTS_SECTION).contains("67%"));
        let attached = session.state.analysis_results.as_ref().unwrap().job_comparison();
        assert_eq!(attached.unwrap().match_score, 67.0);
    }

    #[tokio::test]
    async fn test_comparison_failure_is_degraded() {
        let api = Arc::new(
            FakeApi::default()
                .with_analysis(Ok(sample_analysis()))
                .with_comparison(Err(ApiError::Rejected("comparison down".into()))),
        );
        let mut session = session_with_file(api).await;
        session.page.job_description = "Rust backend role".to_string();

        let outcome = AnalysisOrchestrator::start(&mut session).await;
        assert_eq!(outcome, AnalysisOutcome::Completed { compared: false });
        assert_eq!(session.toasts.current_error(), None);
        assert!(!session.page.html(RESULTS_SECTION).contains("job-comparison-section"));
        assert_released(&session);
    }

    #[tokio::test]
    async fn test_history_is_capped_newest_first() {
        let api = Arc::new(FakeApi::default());
        let mut session = session_with_file(api.clone()).await;

        for run in 0..12 {
            api.script_analysis(Ok(json!({"scores": {"overall_score": run}})));
            let outcome = AnalysisOrchestrator::start(&mut session).await;
            assert_eq!(outcome, AnalysisOutcome::Completed { compared: false });
        }

        let history = &session.state.history;
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        let newest = history.get(0).unwrap();
        assert_eq!(newest.analysis.score("overall_score"), 11.0);
        let oldest = history.get(MAX_HISTORY_ENTRIES - 1).unwrap();
        assert_eq!(oldest.analysis.score("overall_score"), 2.0);
    }
}
