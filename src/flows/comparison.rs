// src/flows/comparison.rs
use crate::app_log;
use crate::error::{ValidationError, ValidationErrorType};
use crate::render::comparison::build_detailed_comparison_html;
use crate::session::Session;
use crate::types::JobComparison;
use crate::ui::page::{COMPARE_BUTTON, DETAILED_COMPARISON_CONTAINER};

pub struct ComparisonFlow;

impl ComparisonFlow {
    fn preconditions(session: &Session) -> Result<(String, String), ValidationError> {
        let job_description = session.page.job_description.trim();
        if job_description.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorType::MissingInput,
                "Please enter a job description to compare against.",
            ));
        }

        let analysis = session.state.analysis_results.as_ref().ok_or_else(|| {
            ValidationError::new(
                ValidationErrorType::MissingAnalysis,
                "Please analyze a resume first.",
            )
        })?;

        Ok((analysis.text_content().to_string(), job_description.to_string()))
    }

    /// Detailed comparison of the analyzed resume against the job
    /// description in the input.
    pub async fn compare(session: &mut Session) -> bool {
        let (resume_text, job_description) = match Self::preconditions(session) {
            Ok(inputs) => inputs,
            Err(e) => {
                session.toasts.show_error(e.message);
                return false;
            }
        };

        session.page.disable_button(COMPARE_BUTTON, "Comparing...");
        let result = session.api.compare_job(&resume_text, &job_description).await;

        let succeeded = match result {
            Ok(payload) => {
                let comparison: JobComparison = serde_json::from_value(payload).unwrap_or_else(|e| {
                    app_log!(warn, "Ignoring malformed comparison: {}", e);
                    JobComparison::default()
                });
                session.page.render_into(
                    DETAILED_COMPARISON_CONTAINER,
                    build_detailed_comparison_html(&comparison),
                );
                session.page.scroll_into_view(DETAILED_COMPARISON_CONTAINER);
                app_log!(info, "Detailed comparison: {}% match", comparison.match_score);
                session.state.job_comparison = Some(comparison);
                true
            }
            Err(e) => {
                app_log!(error, "Job comparison error: {} ({})", e, e.code());
                session
                    .toasts
                    .show_error(format!("Job comparison failed: {}", e));
                false
            }
        };

        session.page.restore_button(COMPARE_BUTTON);
        succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::session::testing::{session_with, FakeApi};
    use crate::types::AnalysisResult;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_requires_job_description_first() {
        let api = Arc::new(FakeApi::default());
        let mut session = session_with(api.clone()).await;
        session.page.job_description = "   ".to_string();

        assert!(!ComparisonFlow::compare(&mut session).await);
        assert_eq!(
            session.toasts.current_error(),
            Some("Please enter a job description to compare against.")
        );

        session.page.job_description = "Rust developer".to_string();
        assert!(!ComparisonFlow::compare(&mut session).await);
        assert_eq!(session.toasts.current_error(), Some("Please analyze a resume first."));
        assert_eq!(FakeApi::calls(&api.compare_calls), 0);
    }

    #[tokio::test]
    async fn test_renders_detailed_comparison() {
        let api = Arc::new(FakeApi::default().with_comparison(Ok(json!({
            "match_score": 81,
            "missing_skills": ["Kubernetes"],
            "overall_assessment": "Strong fit"
        }))));
        let mut session = session_with(api).await;
        session.page.job_description = "Platform engineer".to_string();
        session.state.analysis_results = Some(AnalysisResult::from_value(json!({})));

        assert!(ComparisonFlow::compare(&mut session).await);
        let html = session.page.html(DETAILED_COMPARISON_CONTAINER);
        assert!(html.contains("Kubernetes"));
        assert!(html.contains("Strong fit"));
        assert_eq!(session.state.job_comparison.as_ref().unwrap().match_score, 81.0);
        assert!(session.page.button(COMPARE_BUTTON).unwrap().is_idle());
    }

    #[tokio::test]
    async fn test_failure_shows_toast_and_restores_button() {
        let api = Arc::new(FakeApi::default().with_comparison(Err(ApiError::Status {
            status: 500,
            message: "Comparison failed".into(),
        })));
        let mut session = session_with(api).await;
        session.page.job_description = "Data engineer".to_string();
        session.state.analysis_results = Some(AnalysisResult::from_value(json!({})));

        assert!(!ComparisonFlow::compare(&mut session).await);
        assert_eq!(
            session.toasts.current_error(),
            Some("Job comparison failed: Comparison failed")
        );
        assert!(!session.page.is_visible(DETAILED_COMPARISON_CONTAINER));
        assert!(session.page.button(COMPARE_BUTTON).unwrap().is_idle());
    }
}
