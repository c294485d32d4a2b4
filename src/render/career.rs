// src/render/career.rs
use super::{escape, heading};
use crate::types::{format_number, CareerPath, CareerSuggestions};

pub fn build_career_suggestions_html(suggestions: &CareerSuggestions) -> String {
    let paths = if suggestions.career_paths.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="career-paths"><h4>Recommended Career Paths</h4><div class="paths-grid">{}</div></div>"#,
            suggestions
                .career_paths
                .iter()
                .map(build_career_path)
                .collect::<String>()
        )
    };

    let skills = if suggestions.skills_to_develop.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="skills-development">{}<div class="skills-tags">{}</div></div>"#,
            heading("h4", "fa-chart-line", "Skills to Develop"),
            suggestions
                .skills_to_develop
                .iter()
                .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, escape(skill)))
                .collect::<String>()
        )
    };

    let plan = if suggestions.action_plan.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="action-plan">{}<ol class="plan-steps">{}</ol></div>"#,
            heading("h4", "fa-tasks", "Action Plan"),
            suggestions
                .action_plan
                .iter()
                .map(|step| {
                    format!(
                        r#"<li class="plan-step"><i class="fas fa-arrow-right"></i> {}</li>"#,
                        escape(step)
                    )
                })
                .collect::<String>()
        )
    };

    let insights = suggestions
        .market_insights
        .as_ref()
        .map(|insights| {
            format!(
                r#"<div class="market-insights">{}<div class="insights-grid"><div class="insight-card"><div class="insight-label">Demand Level</div><div class="insight-value">{}</div></div><div class="insight-card"><div class="insight-label">Salary Outlook</div><div class="insight-value">{}</div></div></div></div>"#,
                heading("h4", "fa-chart-pie", "Market Insights"),
                escape(insights.demand_level.as_deref().unwrap_or("Unknown")),
                escape(insights.salary_outlook.as_deref().unwrap_or("Unknown"))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="career-suggestions"><div class="suggestions-header">{}<p>Personalized recommendations based on your skills and experience</p></div>{}{}{}{}</div>"#,
        heading("h3", "fa-road", "Career Path Suggestions"),
        paths,
        skills,
        plan,
        insights
    )
}

fn build_career_path(path: &CareerPath) -> String {
    let percentage = format_number(path.match_percentage);
    let roadmap = if path.learning_path.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="learning-roadmap"><h6>Learning Path</h6><ul class="roadmap-steps">{}</ul></div>"#,
            path.learning_path
                .iter()
                .map(|step| {
                    format!(
                        r#"<li class="roadmap-step"><i class="fas fa-arrow-right"></i> {}</li>"#,
                        escape(step)
                    )
                })
                .collect::<String>()
        )
    };

    format!(
        r#"<div class="career-path-card"><div class="path-header"><h5>{}</h5><div class="match-indicator"><span class="match-percentage">{}%</span><div class="match-bar"><div class="match-fill" style="width: {}%"></div></div></div></div><p class="path-description">{}</p>{}</div>"#,
        escape(path.title.as_deref().unwrap_or("Career Path")),
        percentage,
        percentage,
        escape(path.description.as_deref().unwrap_or("")),
        roadmap
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};
    use serde_json::json;

    #[test]
    fn test_career_paths_and_fallbacks() {
        let suggestions: CareerSuggestions = serde_json::from_value(json!({
            "career_paths": [
                {"title": "Platform Engineer", "match_percentage": 85, "learning_path": ["Terraform", "Kubernetes"]},
                {"description": "Untitled path"}
            ],
            "skills_to_develop": ["Go"],
            "market_insights": {"demand_level": "High"}
        }))
        .unwrap();

        let html = build_career_suggestions_html(&suggestions);
        let doc = Html::parse_fragment(&html);
        let cards = Selector::parse(".career-path-card").unwrap();
        let steps = Selector::parse(".roadmap-step").unwrap();
        assert_eq!(doc.select(&cards).count(), 2);
        assert_eq!(doc.select(&steps).count(), 2);

        assert!(html.contains("Platform Engineer"));
        assert!(html.contains("85%"));
        assert!(html.contains("Career Path"));
        assert!(html.contains("0%"));
        assert!(html.contains("Unknown"));
        assert!(!html.contains("Action Plan"));
    }
}
