// src/render/market.rs
use super::{escape, heading};
use crate::charts::mounts::MARKET_DEMAND_CANVAS;
use crate::types::{AnalysisResult, DemandLevel, SkillsDatabase};

/// Skills-vs-demand table for the user's skills, plus the high-demand
/// skills the resume does not mention.
pub fn build_market_comparison_html(analysis: &AnalysisResult, database: &SkillsDatabase) -> String {
    let names = analysis.skill_names();

    let rows: String = names
        .iter()
        .map(|name| {
            let entry = database.find(name);
            let demand = entry
                .and_then(|e| e.demand_level())
                .map(|d| d.label())
                .unwrap_or("Unknown");
            let category = entry.and_then(|e| e.category.as_deref()).unwrap_or("-");
            let difficulty = entry
                .and_then(|e| e.learning_difficulty.as_deref())
                .unwrap_or("-");
            format!(
                r#"<tr class="market-row"><td>{}</td><td>{}</td><td class="demand {}">{}</td><td>{}</td></tr>"#,
                escape(name),
                escape(category),
                demand.to_lowercase(),
                demand,
                escape(difficulty)
            )
        })
        .collect();

    let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    let gaps: String = database
        .by_demand(DemandLevel::High)
        .filter(|entry| !lowered.contains(&entry.name.to_lowercase()))
        .map(|entry| format!(r#"<span class="skill-tag high-demand">{}</span>"#, escape(&entry.name)))
        .collect();

    let table = if rows.is_empty() {
        "<p>No skills were detected in the resume.</p>".to_string()
    } else {
        format!(
            r#"<table class="market-table"><thead><tr><th>Skill</th><th>Category</th><th>Demand</th><th>Learning Difficulty</th></tr></thead><tbody>{}</tbody></table>"#,
            rows
        )
    };

    let gaps = if gaps.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="high-demand-gaps"><h5>High-Demand Skills to Consider</h5><div class="skills-tags">{}</div></div>"#,
            gaps
        )
    };

    format!(
        r#"<div class="market-comparison">{}{}{}<div class="chart-wrapper"><canvas id="{}"></canvas></div></div>"#,
        heading("h4", "fa-chart-area", "Skills vs Market Demand"),
        table,
        gaps,
        MARKET_DEMAND_CANVAS
    )
}
