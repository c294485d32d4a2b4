// src/flows/market.rs
use crate::app_log;
use crate::error::DegradedFeature;
use crate::render::market::build_market_comparison_html;
use crate::session::Session;
use crate::types::SkillsDatabase;
use crate::ui::page::MARKET_COMPARISON_CONTAINER;

pub struct MarketFlow;

impl MarketFlow {
    /// Fetch the skills catalogue, render the skills-vs-demand panel and
    /// feed the market-demand chart. Failures are logged only.
    pub async fn compare_with_market_demand(session: &mut Session) -> bool {
        if session.state.analysis_results.is_none() {
            app_log!(debug, "No analysis yet, skipping market comparison");
            return false;
        }

        let payload = match session.api.skills_database().await {
            Ok(payload) => payload,
            Err(e) => {
                DegradedFeature::new("market demand", e).log();
                return false;
            }
        };

        let database: SkillsDatabase = match serde_json::from_value(payload) {
            Ok(database) => database,
            Err(e) => {
                DegradedFeature::new("market demand", e).log();
                return false;
            }
        };
        app_log!(
            info,
            "Skills database loaded: {} skills in {} categories",
            database.skill_count(),
            database.category_count()
        );

        let Some(analysis) = session.state.analysis_results.as_ref() else {
            return false;
        };
        session.page.render_into(
            MARKET_COMPARISON_CONTAINER,
            build_market_comparison_html(analysis, &database),
        );
        session.charts.refresh_market_demand(
            session.page.html(MARKET_COMPARISON_CONTAINER),
            analysis,
            Some(&database),
        );
        session.skills_database = Some(database);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::MARKET_DEMAND_CHART;
    use crate::error::ApiError;
    use crate::session::testing::{session_with, FakeApi};
    use crate::types::AnalysisResult;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_failure_is_degraded_not_surfaced() {
        let api = Arc::new(FakeApi::default().with_skills(Err(ApiError::Rejected("down".into()))));
        let mut session = session_with(api).await;
        session.state.analysis_results = Some(AnalysisResult::from_value(json!({})));

        assert!(!MarketFlow::compare_with_market_demand(&mut session).await);
        assert_eq!(session.toasts.current_error(), None);
        assert!(!session.page.is_visible(MARKET_COMPARISON_CONTAINER));
    }

    #[tokio::test]
    async fn test_renders_panel_and_chart() {
        let api = Arc::new(FakeApi::default().with_skills(Ok(json!({
            "cloud": {"name": "Cloud", "skills": [
                {"name": "AWS", "category": "cloud", "demand": "High", "learning_difficulty": "Medium"}
            ]}
        }))));
        let mut session = session_with(api.clone()).await;

        assert!(!MarketFlow::compare_with_market_demand(&mut session).await);
        assert_eq!(FakeApi::calls(&api.skills_calls), 0);

        session.state.analysis_results = Some(AnalysisResult::from_value(json!({
            "skills_analysis": {"cloud_platforms": ["AWS"]}
        })));
        assert!(MarketFlow::compare_with_market_demand(&mut session).await);
        assert!(session.page.html(MARKET_COMPARISON_CONTAINER).contains("AWS"));
        assert!(session.charts.get(MARKET_DEMAND_CHART).is_some());
        assert!(session.skills_database.is_some());
    }
}
