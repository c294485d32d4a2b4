// src/flows/career.rs
use crate::app_log;
use crate::error::{ValidationError, ValidationErrorType};
use crate::render::career::build_career_suggestions_html;
use crate::session::Session;
use crate::ui::page::{CAREER_BUTTON, CAREER_SUGGESTIONS_CONTAINER};

pub struct CareerFlow;

impl CareerFlow {
    /// Request career suggestions for the current analysis and render
    /// them. The trigger button is restored whatever the outcome.
    pub async fn generate(session: &mut Session) -> bool {
        let Some(analysis) = session.state.analysis_results.as_ref() else {
            let err = ValidationError::new(
                ValidationErrorType::MissingAnalysis,
                "Please analyze a resume first.",
            );
            session.toasts.show_error(err.message);
            return false;
        };

        let resume_text = analysis.text_content().to_string();
        let skills_analysis = analysis.skills_analysis_value();

        session.page.disable_button(CAREER_BUTTON, "Generating...");
        let result = session
            .api
            .career_suggestions(&resume_text, &skills_analysis)
            .await;

        let succeeded = match result {
            Ok(payload) => {
                if let Some(analysis) = session.state.analysis_results.as_mut() {
                    analysis.attach_career_suggestions(payload);
                }
                let suggestions = session
                    .state
                    .analysis_results
                    .as_ref()
                    .and_then(|a| a.career_suggestions())
                    .unwrap_or_default();

                session.page.render_into(
                    CAREER_SUGGESTIONS_CONTAINER,
                    build_career_suggestions_html(&suggestions),
                );
                session.page.scroll_into_view(CAREER_SUGGESTIONS_CONTAINER);
                app_log!(info, "Rendered {} career paths", suggestions.career_paths.len());
                true
            }
            Err(e) => {
                app_log!(error, "Career suggestions error: {} ({})", e, e.code());
                session
                    .toasts
                    .show_error(format!("Failed to generate career suggestions: {}", e));
                false
            }
        };

        session.page.restore_button(CAREER_BUTTON);
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
    async fn test_requires_analysis() {
        let api = Arc::new(FakeApi::default());
        let mut session = session_with(api.clone()).await;

        assert!(!CareerFlow::generate(&mut session).await);
        assert_eq!(session.toasts.current_error(), Some("Please analyze a resume first."));
        assert_eq!(FakeApi::calls(&api.career_calls), 0);
    }

    #[tokio::test]
    async fn test_suggestions_are_rendered_and_attached() {
        let api = Arc::new(FakeApi::default().with_suggestions(Ok(json!({
            "career_paths": [{"title": "Staff Engineer", "match_percentage": 90}],
            "action_plan": ["Lead a cross-team initiative"]
        }))));
        let mut session = session_with(api.clone()).await;
        session.state.analysis_results = Some(AnalysisResult::from_value(json!({
            "basic_info": {"text_content": "resume"}
        })));

        assert!(CareerFlow::generate(&mut session).await);
        assert!(session.page.is_visible(CAREER_SUGGESTIONS_CONTAINER));
        assert!(session.page.html(CAREER_SUGGESTIONS_CONTAINER).contains("Staff Engineer"));
        assert!(session
            .state
            .analysis_results
            .as_ref()
            .unwrap()
            .career_suggestions()
            .is_some());
        assert!(session.page.button(CAREER_BUTTON).unwrap().is_idle());
    }

    #[tokio::test]
    async fn test_failure_restores_button() {
        let api = Arc::new(
            FakeApi::default().with_suggestions(Err(ApiError::Rejected("model offline".into()))),
        );
        let mut session = session_with(api).await;
        session.state.analysis_results = Some(AnalysisResult::from_value(json!({})));

        assert!(!CareerFlow::generate(&mut session).await);
        assert_eq!(
            session.toasts.current_error(),
            Some("Failed to generate career suggestions: model offline")
        );
        let button = session.page.button(CAREER_BUTTON).unwrap();
        assert!(!button.disabled);
        assert!(button.label.contains("Get Career Suggestions"));
    }
}
