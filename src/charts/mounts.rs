// src/charts/mounts.rs
//! Canvas mount points discovered in rendered HTML

use scraper::{Html, Selector};
use std::collections::BTreeSet;

pub const SKILLS_CANVAS: &str = "skillsChart";
pub const EXPERIENCE_CANVAS: &str = "experienceChart";
pub const SCORE_CANVAS: &str = "scoreChart";
pub const MARKET_DEMAND_CANVAS: &str = "marketDemandChart";
pub const CAREER_PATH_CANVAS: &str = "careerPathChart";
pub const SKILL_PROFICIENCY_CANVAS: &str = "skillProficiencyChart";

/// Ids of every `<canvas>` in the fragment.
pub fn find_mounts(html: &str) -> BTreeSet<String> {
    let doc = Html::parse_fragment(html);
    let Ok(selector) = Selector::parse("canvas[id]") else {
        return BTreeSet::new();
    };

    doc.select(&selector)
        .filter_map(|el| el.value().attr("id"))
        .map(str::to_string)
        .collect()
}
