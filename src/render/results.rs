// src/render/results.rs
//! The main results panel

use super::{category_title, escape, heading, list_items, proficiency_class, KNOWN_SKILL_CATEGORIES};
use crate::charts::mounts::{
    CAREER_PATH_CANVAS, EXPERIENCE_CANVAS, SCORE_CANVAS, SKILLS_CANVAS, SKILL_PROFICIENCY_CANVAS,
};
use crate::types::analysis::{
    COMPLETENESS_SCORE, EXPERIENCE_SCORE, OVERALL_SCORE, TECHNICAL_SKILLS_SCORE,
};
use crate::types::{format_number, AnalysisResult, SkillCategory};

/// (label, score key, description) for each score card.
const SCORE_CARDS: [(&str, &str, &str); 4] = [
    ("Overall Score", OVERALL_SCORE, "Comprehensive evaluation"),
    ("Technical Skills", TECHNICAL_SKILLS_SCORE, "Programming & tools"),
    ("Experience", EXPERIENCE_SCORE, "Years & level"),
    ("Completeness", COMPLETENESS_SCORE, "Resume quality"),
];

pub fn build_results_html(analysis: &AnalysisResult) -> String {
    let sections = [
        build_score_cards(analysis),
        build_skills_analysis(analysis),
        build_experience_analysis(analysis),
        build_recommendations(analysis),
        build_ai_summary(analysis),
        build_charts_section(),
        build_job_comparison(analysis),
        build_career_placeholder(),
    ];

    format!(
        r#"<div class="results-container">
<div class="results-header">
{heading}
<p>Your resume has been analyzed successfully. Below are the detailed insights.</p>
</div>
<div class="results-content">
{sections}
</div>
</div>"#,
        heading = heading("h2", "fa-chart-line", "Analysis Complete!"),
        sections = sections.concat()
    )
}

pub fn build_score_cards(analysis: &AnalysisResult) -> String {
    let cards: String = SCORE_CARDS
        .iter()
        .map(|(label, key, description)| {
            format!(
                r#"<div class="score-card"><div class="score-label">{}</div><div class="score-value" id="score-{}">{}<span class="score-max">/100</span></div><div class="score-description">{}</div></div>"#,
                label,
                key,
                format_number(analysis.score(key)),
                description
            )
        })
        .collect();

    format!(
        r#"<div class="score-section">{}<div class="results-grid">{}</div></div>"#,
        heading("h3", "fa-star", "Overall Assessment"),
        cards
    )
}

/// Known categories first in their fixed order, then the rest in backend order.
fn ordered_categories(analysis: &AnalysisResult) -> Vec<&SkillCategory> {
    let mut ordered: Vec<&SkillCategory> = KNOWN_SKILL_CATEGORIES
        .iter()
        .filter_map(|(key, _)| analysis.skill_category(key))
        .collect();

    ordered.extend(
        analysis
            .skill_categories()
            .iter()
            .filter(|c| !KNOWN_SKILL_CATEGORIES.iter().any(|(key, _)| *key == c.key)),
    );
    ordered
}

pub fn build_skills_analysis(analysis: &AnalysisResult) -> String {
    let categories: String = ordered_categories(analysis)
        .into_iter()
        .filter(|category| !category.skills.is_empty())
        .map(build_skill_category)
        .collect();

    if categories.is_empty() {
        return String::new();
    }

    format!(
        r#"<div class="skills-section">{}{}</div>"#,
        heading("h3", "fa-code", "Skills Analysis"),
        categories
    )
}

fn build_skill_category(category: &SkillCategory) -> String {
    let items: String = category
        .skills
        .iter()
        .map(|skill| {
            let badge = skill
                .proficiency
                .as_deref()
                .map(|p| {
                    format!(
                        r#"<span class="skill-level {}">{}</span>"#,
                        escape(&proficiency_class(p)),
                        escape(p)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<div class="skill-item"><span class="skill-name">{}</span>{}</div>"#,
                escape(&skill.name),
                badge
            )
        })
        .collect();

    format!(
        r#"<div class="skill-category" data-category="{}"><h4>{}</h4><div class="skills-grid">{}</div></div>"#,
        escape(&category.key),
        escape(&category_title(&category.key)),
        items
    )
}

pub fn build_experience_analysis(analysis: &AnalysisResult) -> String {
    if !analysis.has_experience_analysis() {
        return String::new();
    }

    let level = analysis.estimated_level().unwrap_or("Unknown");
    let years = analysis
        .years_pattern()
        .map(|years| {
            format!(
                r#"<div class="experience-item"><div class="experience-icon"><i class="fas fa-calendar"></i></div><div class="experience-content"><h4>Years of Experience: {}+</h4><p>Estimated from resume content analysis</p></div></div>"#,
                escape(&years)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="experience-section">{}<div class="experience-timeline"><div class="experience-item"><div class="experience-icon"><i class="fas fa-user-tie"></i></div><div class="experience-content"><h4>Estimated Level: {}</h4><p>Based on experience indicators and skill proficiency</p></div></div>{}</div></div>"#,
        heading("h3", "fa-briefcase", "Experience Analysis"),
        escape(level),
        years
    )
}

pub fn build_recommendations(analysis: &AnalysisResult) -> String {
    let recommendations = analysis.recommendations();
    if recommendations.is_empty() {
        return String::new();
    }

    let items: String = recommendations
        .iter()
        .map(|rec| {
            let priority = rec.priority.as_deref().unwrap_or("");
            format!(
                r#"<li class="recommendation-item"><i class="recommendation-icon fas fa-arrow-right"></i><div class="recommendation-content"><h4>{}</h4><p>{}</p><div class="recommendation-meta"><span class="priority {}">{} Priority</span><span class="category">{}</span></div></div></li>"#,
                escape(rec.title.as_deref().unwrap_or("")),
                escape(rec.description.as_deref().unwrap_or("")),
                escape(&proficiency_class(priority)),
                escape(priority),
                escape(rec.category.as_deref().unwrap_or(""))
            )
        })
        .collect();

    format!(
        r#"<div class="recommendations-section">{}<ul class="recommendations-list">{}</ul></div>"#,
        heading("h3", "fa-robot", "AI Recommendations"),
        items
    )
}

/// Rendered only when the summary text itself is present.
pub fn build_ai_summary(analysis: &AnalysisResult) -> String {
    let summary = analysis.ai_summary();
    let Some(detailed) = summary.summary.as_deref() else {
        return String::new();
    };

    let text = |value: &Option<String>| escape(value.as_deref().unwrap_or(""));

    format!(
        r#"<div class="ai-summary-section">{heading}<div class="ai-summary-content">
<div class="summary-overview"><h4>Overall Assessment</h4><p>{overall}</p></div>
<div class="summary-strengths"><h4>Key Strengths</h4><ul>{strengths}</ul></div>
<div class="summary-improvements"><h4>Areas for Improvement</h4><ul>{improvements}</ul></div>
<div class="summary-trajectory"><h4>Career Trajectory</h4><p>{trajectory}</p></div>
<div class="summary-competitiveness"><h4>Market Competitiveness</h4><p>{competitiveness}</p></div>
<div class="summary-detailed"><h4>Detailed Analysis</h4><p>{detailed}</p></div>
</div></div>"#,
        heading = heading("h3", "fa-brain", "AI Resume Summary"),
        overall = text(&summary.overall_assessment),
        strengths = list_items(&summary.key_strengths),
        improvements = list_items(&summary.areas_for_improvement),
        trajectory = text(&summary.career_trajectory),
        competitiveness = text(&summary.market_competitiveness),
        detailed = escape(detailed)
    )
}

/// Chart mount points; the chart adapter finds these by id.
pub fn build_charts_section() -> String {
    let charts: String = [
        ("Skills Distribution", SKILLS_CANVAS),
        ("Experience Profile", EXPERIENCE_CANVAS),
        ("Assessment Scores", SCORE_CANVAS),
        ("Career Development Path", CAREER_PATH_CANVAS),
        ("Skill Proficiency", SKILL_PROFICIENCY_CANVAS),
    ]
    .iter()
    .map(|(title, canvas)| {
        format!(
            r#"<div class="charts-container"><div class="chart-title">{}</div><div class="chart-wrapper"><canvas id="{}"></canvas></div></div>"#,
            title, canvas
        )
    })
    .collect();

    format!(
        r#"<div class="charts-section">{}{}</div>"#,
        heading("h3", "fa-chart-pie", "Visual Analysis"),
        charts
    )
}

/// Comparison attached during the analysis run; omitted when absent or errored.
pub fn build_job_comparison(analysis: &AnalysisResult) -> String {
    let Some(comparison) = analysis.job_comparison() else {
        return String::new();
    };
    if comparison.error.is_some() {
        return String::new();
    }

    let findings = |title: &str, items: &[String]| {
        if items.is_empty() {
            String::new()
        } else {
            format!(
                r#"<div class="findings"><h5>{}</h5><ul>{}</ul></div>"#,
                title,
                list_items(items)
            )
        }
    };

    format!(
        r#"<div class="job-comparison-section">{}<div class="comparison-results"><div class="comparison-side"><h4>Match Score</h4><div class="match-score"><div class="match-percentage-large">{}%</div><p>Overall match with job requirements</p></div></div><div class="comparison-side"><h4>Key Findings</h4>{}{}</div></div></div>"#,
        heading("h3", "fa-bullseye", "Job Comparison"),
        format_number(comparison.match_score),
        findings("Strong Matches", &comparison.strong_matches),
        findings("Missing Skills", &comparison.missing_skills)
    )
}

fn build_career_placeholder() -> String {
    format!(
        r#"<div class="career-suggestions-section">{}<div class="career-paths"><p>Career suggestions will appear here based on your skills and experience.</p></div></div>"#,
        heading("h3", "fa-road", "Career Suggestions")
    )
}
