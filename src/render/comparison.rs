// src/render/comparison.rs
use super::{escape, heading};
use crate::types::{format_number, JobComparison};

fn icon_list(class: &str, item_class: &str, icon: &str, items: &[String]) -> String {
    format!(
        r#"<ul class="{}">{}</ul>"#,
        class,
        items
            .iter()
            .map(|item| {
                format!(
                    r#"<li class="{}"><i class="fas {}"></i> {}</li>"#,
                    item_class,
                    icon,
                    escape(item)
                )
            })
            .collect::<String>()
    )
}

pub fn build_detailed_comparison_html(comparison: &JobComparison) -> String {
    let mut grid = String::new();
    if !comparison.strong_matches.is_empty() {
        grid.push_str(&format!(
            r#"<div class="comparison-section">{}{}</div>"#,
            heading("h4", "fa-check-circle", "Strong Matches"),
            icon_list("matches-list", "match-item", "fa-check", &comparison.strong_matches)
        ));
    }
    if !comparison.missing_skills.is_empty() {
        grid.push_str(&format!(
            r#"<div class="comparison-section">{}{}</div>"#,
            heading("h4", "fa-exclamation-triangle", "Missing Skills"),
            icon_list("missing-list", "missing-item", "fa-times", &comparison.missing_skills)
        ));
    }

    let gaps = if comparison.priority_gaps.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="priority-gaps">{}<div class="gaps-tags">{}</div></div>"#,
            heading("h4", "fa-star", "Priority Gaps"),
            comparison
                .priority_gaps
                .iter()
                .map(|gap| format!(r#"<span class="gap-tag high-priority">{}</span>"#, escape(gap)))
                .collect::<String>()
        )
    };

    let recommendations = if comparison.recommendations.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="comparison-recommendations">{}<ol class="recommendations-list">{}</ol></div>"#,
            heading("h4", "fa-lightbulb", "Recommendations"),
            comparison
                .recommendations
                .iter()
                .map(|rec| format!(r#"<li class="recommendation-item">{}</li>"#, escape(rec)))
                .collect::<String>()
        )
    };

    let assessment = comparison
        .overall_assessment
        .as_deref()
        .map(|text| {
            format!(
                r#"<div class="overall-assessment">{}<p class="assessment-text">{}</p></div>"#,
                heading("h4", "fa-balance-scale", "Overall Assessment"),
                escape(text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="detailed-comparison"><div class="comparison-header">{}<p>In-depth analysis of your match with the job requirements</p></div><div class="comparison-score-large"><div class="score-circle"><span class="score-number">{}</span><span class="score-label">% Match</span></div></div><div class="comparison-grid">{}</div>{}{}{}</div>"#,
        heading("h3", "fa-search-plus", "Detailed Job Comparison"),
        format_number(comparison.match_score),
        grid,
        gaps,
        recommendations,
        assessment
    )
}
