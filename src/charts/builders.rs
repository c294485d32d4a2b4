// src/charts/builders.rs
//! Chart.js configurations derived from analysis results

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::render::title_case_key;
use crate::types::analysis::{
    COMPLETENESS_SCORE, EXPERIENCE_SCORE, OVERALL_SCORE, TECHNICAL_SKILLS_SCORE,
};
use crate::types::{AnalysisResult, DemandLevel, ExperienceLevel, SkillEntry, SkillsDatabase};

const SEGMENT_COLORS: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#84cc16", "#f97316",
];

pub const EXPERIENCE_AXES: [&str; 6] = [
    "Technical Depth",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Innovation",
    "Mentoring",
];
const EXPERIENCE_DEFAULT: [u32; 6] = [75, 60, 80, 85, 70, 65];
const EXPERIENCE_SENIOR: [u32; 6] = [85, 80, 85, 90, 80, 85];
const EXPERIENCE_JUNIOR: [u32; 6] = [60, 40, 70, 65, 50, 35];
const EXPERIENCE_INDUSTRY: [u32; 6] = [70, 65, 75, 80, 70, 60];

/// Neutral demand for skills the catalogue does not know.
const NEUTRAL_DEMAND: f64 = 5.0;

/// Plotted when the skills catalogue is unavailable.
const ILLUSTRATIVE_HIGH_DEMAND: [(&str, f64, f64); 4] = [
    ("Kubernetes", 9.0, 4.0),
    ("Docker", 8.0, 3.0),
    ("AI/ML", 9.0, 2.0),
    ("Cloud Native", 8.0, 5.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Doughnut,
    Radar,
    Bar,
    Scatter,
    Line,
}

/// A Chart.js `{type, data, options}` configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: Value,
    pub options: Value,
}

fn default_options() -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "position": "top",
                "labels": {
                    "usePointStyle": true,
                    "padding": 20,
                    "font": {"family": "Inter", "size": 12}
                }
            },
            "tooltip": {
                "backgroundColor": "rgba(0, 0, 0, 0.8)",
                "titleColor": "#ffffff",
                "bodyColor": "#ffffff",
                "borderColor": "#3b82f6",
                "borderWidth": 1,
                "cornerRadius": 8,
                "displayColors": true,
                "padding": 12
            }
        },
        "animation": {"duration": 1000, "easing": "easeInOutQuart"}
    })
}

fn tick_font(size: u32) -> Value {
    json!({"font": {"family": "Inter", "size": size}, "color": "#64748b"})
}

fn axis_title(text: &str) -> Value {
    json!({
        "display": true,
        "text": text,
        "font": {"family": "Inter", "size": 12, "weight": "500"},
        "color": "#1e293b"
    })
}

/// Default options plus a title plugin and optional scales.
fn options(title: Option<&str>, scales: Option<Value>) -> Value {
    let mut options = default_options();
    if let Some(title) = title {
        options["plugins"]["title"] = json!({
            "display": true,
            "text": title,
            "font": {"family": "Inter", "size": 16, "weight": "bold"},
            "color": "#1e293b",
            "padding": 20
        });
    }
    if let Some(scales) = scales {
        options["scales"] = scales;
    }
    options
}

pub fn proficiency_score(proficiency: Option<&str>) -> f64 {
    match proficiency {
        Some("Advanced") => 90.0,
        Some("Intermediate") => 70.0,
        Some("Beginner") => 50.0,
        _ => 60.0,
    }
}

/// (fill, border) colors for a proficiency level.
pub fn proficiency_colors(proficiency: Option<&str>) -> (&'static str, &'static str) {
    match proficiency {
        Some("Advanced") => ("#10b981", "#059669"),
        Some("Intermediate") => ("#f59e0b", "#d97706"),
        Some("Beginner") => ("#ef4444", "#dc2626"),
        _ => ("#94a3b8", "#64748b"),
    }
}

/// One segment per non-empty category, sized by skill count.
pub fn skills_chart(analysis: &AnalysisResult) -> Option<ChartConfig> {
    let (labels, values): (Vec<String>, Vec<usize>) = analysis
        .skill_categories()
        .iter()
        .filter(|c| !c.skills.is_empty())
        .map(|c| (title_case_key(&c.key), c.skills.len()))
        .unzip();

    if labels.is_empty() {
        return None;
    }

    Some(ChartConfig {
        chart_type: ChartType::Doughnut,
        data: json!({
            "labels": labels,
            "datasets": [{
                "data": values,
                "backgroundColor": SEGMENT_COLORS,
                "borderWidth": 2,
                "borderColor": "#ffffff",
                "hoverOffset": 10
            }]
        }),
        options: options(Some("Skills Distribution"), None),
    })
}

pub fn experience_profile(level: &ExperienceLevel) -> [u32; 6] {
    match level {
        ExperienceLevel::Senior => EXPERIENCE_SENIOR,
        ExperienceLevel::Junior => EXPERIENCE_JUNIOR,
        _ => EXPERIENCE_DEFAULT,
    }
}

pub fn experience_chart(analysis: &AnalysisResult) -> ChartConfig {
    let scales = json!({
        "r": {
            "beginAtZero": true,
            "max": 100,
            "ticks": {"stepSize": 20, "font": {"family": "Inter", "size": 11}, "color": "#64748b"},
            "grid": {"color": "#e2e8f0"},
            "angleLines": {"color": "#e2e8f0"},
            "pointLabels": {"font": {"family": "Inter", "size": 12, "weight": "500"}, "color": "#1e293b"}
        }
    });

    ChartConfig {
        chart_type: ChartType::Radar,
        data: json!({
            "labels": EXPERIENCE_AXES,
            "datasets": [{
                "label": "Your Skills",
                "data": experience_profile(&analysis.experience_level()),
                "backgroundColor": "rgba(59, 130, 246, 0.2)",
                "borderColor": "#3b82f6",
                "borderWidth": 2,
                "pointBackgroundColor": "#3b82f6",
                "pointBorderColor": "#ffffff",
                "pointBorderWidth": 2,
                "pointRadius": 5
            }, {
                "label": "Industry Average",
                "data": EXPERIENCE_INDUSTRY,
                "backgroundColor": "rgba(16, 185, 129, 0.1)",
                "borderColor": "#10b981",
                "borderWidth": 2,
                "borderDash": [5, 5],
                "pointBackgroundColor": "#10b981",
                "pointBorderColor": "#ffffff",
                "pointBorderWidth": 2,
                "pointRadius": 4
            }]
        }),
        options: options(Some("Experience Profile vs Industry"), Some(scales)),
    }
}

pub fn score_chart(analysis: &AnalysisResult) -> ChartConfig {
    let scores = [
        ("Technical Skills", TECHNICAL_SKILLS_SCORE),
        ("Experience", EXPERIENCE_SCORE),
        ("Completeness", COMPLETENESS_SCORE),
        ("Overall", OVERALL_SCORE),
    ];
    let labels: Vec<&str> = scores.iter().map(|(label, _)| *label).collect();
    let values: Vec<f64> = scores.iter().map(|(_, key)| analysis.score(key)).collect();

    let scales = json!({
        "y": {"beginAtZero": true, "max": 100, "grid": {"color": "#f1f5f9"}, "ticks": tick_font(11)},
        "x": {
            "grid": {"display": false},
            "ticks": {"font": {"family": "Inter", "size": 11, "weight": "500"}, "color": "#1e293b"}
        }
    });

    ChartConfig {
        chart_type: ChartType::Bar,
        data: json!({
            "labels": labels,
            "datasets": [{
                "label": "Score",
                "data": values,
                "backgroundColor": [
                    "rgba(59, 130, 246, 0.8)",
                    "rgba(16, 185, 129, 0.8)",
                    "rgba(245, 158, 11, 0.8)",
                    "rgba(139, 92, 246, 0.8)"
                ],
                "borderColor": ["#3b82f6", "#10b981", "#f59e0b", "#8b5cf6"],
                "borderWidth": 2,
                "borderRadius": 8,
                "borderSkipped": false
            }]
        }),
        options: options(Some("Assessment Scores"), Some(scales)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketDemandData {
    pub user_skills: Vec<ScatterPoint>,
    pub high_demand_skills: Vec<ScatterPoint>,
}

/// User skills at (catalogue demand, proficiency / 10); high-demand
/// skills missing from the resume at zero proficiency.
pub fn market_demand_data(
    analysis: &AnalysisResult,
    database: Option<&SkillsDatabase>,
) -> MarketDemandData {
    let database = database.filter(|db| !db.is_empty());

    let mut seen: Vec<String> = Vec::new();
    let mut user_skills = Vec::new();
    for skill in analysis.skill_categories().iter().flat_map(|c| c.skills.iter()) {
        let key = skill.name.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let demand = database
            .and_then(|db| db.find(&skill.name))
            .and_then(|entry| entry.demand_level())
            .map(|level| level.score())
            .unwrap_or(NEUTRAL_DEMAND);

        user_skills.push(ScatterPoint {
            x: demand,
            y: proficiency_score(skill.proficiency.as_deref()) / 10.0,
            label: skill.name.clone(),
        });
    }

    let high_demand_skills = match database {
        Some(db) => db
            .by_demand(DemandLevel::High)
            .filter(|entry| !seen.contains(&entry.name.to_lowercase()))
            .map(|entry| ScatterPoint {
                x: DemandLevel::High.score(),
                y: 0.0,
                label: entry.name.clone(),
            })
            .collect(),
        None => ILLUSTRATIVE_HIGH_DEMAND
            .iter()
            .map(|(label, x, y)| ScatterPoint {
                x: *x,
                y: *y,
                label: label.to_string(),
            })
            .collect(),
    };

    MarketDemandData {
        user_skills,
        high_demand_skills,
    }
}

pub fn market_demand_chart(
    analysis: &AnalysisResult,
    database: Option<&SkillsDatabase>,
) -> Option<ChartConfig> {
    let data = market_demand_data(analysis, database);
    if data.user_skills.is_empty() && data.high_demand_skills.is_empty() {
        return None;
    }

    let scales = json!({
        "x": {
            "type": "linear",
            "position": "bottom",
            "title": axis_title("Market Demand (Score out of 10)"),
            "grid": {"color": "#f1f5f9"},
            "ticks": tick_font(11)
        },
        "y": {
            "title": axis_title("Your Proficiency (Score out of 10)"),
            "grid": {"color": "#f1f5f9"},
            "ticks": tick_font(11)
        }
    });

    Some(ChartConfig {
        chart_type: ChartType::Scatter,
        data: json!({
            "datasets": [{
                "label": "Your Skills",
                "data": data.user_skills,
                "backgroundColor": "#3b82f6",
                "borderColor": "#1d4ed8",
                "borderWidth": 2,
                "pointRadius": 8,
                "pointHoverRadius": 10
            }, {
                "label": "High Demand Skills",
                "data": data.high_demand_skills,
                "backgroundColor": "#10b981",
                "borderColor": "#059669",
                "borderWidth": 2,
                "pointRadius": 6,
                "pointHoverRadius": 8
            }]
        }),
        options: options(Some("Skills vs Market Demand"), Some(scales)),
    })
}

/// (milestones, progress, target) for the estimated level; Mid-Level otherwise.
pub fn career_path_preset(level: &ExperienceLevel) -> ([&'static str; 5], [u32; 5], [u32; 5]) {
    match level {
        ExperienceLevel::Junior => (
            ["Current", "6 Months", "1 Year", "2 Years", "3 Years"],
            [40, 55, 70, 80, 90],
            [50, 65, 75, 85, 95],
        ),
        ExperienceLevel::Senior => (
            ["Current", "Lead", "Principal", "Architect", "Expert"],
            [75, 82, 88, 92, 96],
            [80, 85, 90, 94, 98],
        ),
        _ => (
            ["Current", "6 Months", "1 Year", "2 Years", "Senior"],
            [60, 70, 80, 88, 95],
            [65, 75, 85, 90, 98],
        ),
    }
}

pub fn career_path_chart(analysis: &AnalysisResult) -> ChartConfig {
    let (labels, progress, target) = career_path_preset(&analysis.experience_level());

    let scales = json!({
        "y": {
            "beginAtZero": true,
            "max": 100,
            "title": axis_title("Skill Level (%)"),
            "grid": {"color": "#f1f5f9"},
            "ticks": tick_font(11)
        },
        "x": {
            "title": axis_title("Career Milestones"),
            "grid": {"color": "#f1f5f9"},
            "ticks": tick_font(11)
        }
    });

    ChartConfig {
        chart_type: ChartType::Line,
        data: json!({
            "labels": labels,
            "datasets": [{
                "label": "Career Progress",
                "data": progress,
                "backgroundColor": "rgba(59, 130, 246, 0.1)",
                "borderColor": "#3b82f6",
                "borderWidth": 3,
                "fill": true,
                "tension": 0.4,
                "pointBackgroundColor": "#3b82f6",
                "pointBorderColor": "#ffffff",
                "pointBorderWidth": 3,
                "pointRadius": 6,
                "pointHoverRadius": 8
            }, {
                "label": "Target Level",
                "data": target,
                "backgroundColor": "rgba(16, 185, 129, 0.05)",
                "borderColor": "#10b981",
                "borderWidth": 2,
                "borderDash": [10, 5],
                "fill": false,
                "pointBackgroundColor": "#10b981",
                "pointBorderColor": "#ffffff",
                "pointBorderWidth": 2,
                "pointRadius": 4,
                "pointHoverRadius": 6
            }]
        }),
        options: options(Some("Career Development Path"), Some(scales)),
    }
}

/// Horizontal bar per skill, colored by proficiency.
pub fn skill_proficiency_chart(skills: &[SkillEntry]) -> Option<ChartConfig> {
    if skills.is_empty() {
        return None;
    }

    let labels: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    let scores: Vec<f64> = skills
        .iter()
        .map(|s| proficiency_score(s.proficiency.as_deref()))
        .collect();
    let (fills, borders): (Vec<&str>, Vec<&str>) = skills
        .iter()
        .map(|s| proficiency_colors(s.proficiency.as_deref()))
        .unzip();

    let scales = json!({
        "x": {"beginAtZero": true, "max": 100, "grid": {"color": "#f1f5f9"}, "ticks": tick_font(11)},
        "y": {
            "grid": {"display": false},
            "ticks": {"font": {"family": "Inter", "size": 11}, "color": "#1e293b"}
        }
    });
    let mut options = options(None, Some(scales));
    options["indexAxis"] = json!("y");

    Some(ChartConfig {
        chart_type: ChartType::Bar,
        data: json!({
            "labels": labels,
            "datasets": [{
                "label": "Proficiency Level",
                "data": scores,
                "backgroundColor": fills,
                "borderColor": borders,
                "borderWidth": 2,
                "borderRadius": 6
            }]
        }),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(value: Value) -> AnalysisResult {
        AnalysisResult::from_value(value)
    }

    #[test]
    fn test_skills_chart_counts_non_empty_categories() {
        let result = analysis(json!({"skills_analysis": {
            "programming_languages": ["Rust", "Go", "Python"],
            "databases": [],
            "cloud_platforms": ["AWS"]
        }}));
        let chart = skills_chart(&result).unwrap();
        assert_eq!(chart.chart_type, ChartType::Doughnut);
        assert_eq!(chart.data["labels"], json!(["Programming Languages", "Cloud Platforms"]));
        assert_eq!(chart.data["datasets"][0]["data"], json!([3, 1]));
        assert_eq!(chart.options["plugins"]["title"]["text"], "Skills Distribution");

        assert!(skills_chart(&analysis(json!({}))).is_none());
    }

    #[test]
    fn test_experience_profiles_by_level() {
        let senior = experience_chart(&analysis(json!({"experience_analysis": {"estimated_level": "Senior"}})));
        assert_eq!(senior.data["datasets"][0]["data"], json!([85, 80, 85, 90, 80, 85]));
        assert_eq!(senior.data["datasets"][1]["data"], json!([70, 65, 75, 80, 70, 60]));

        let junior = experience_chart(&analysis(json!({"experience_analysis": {"estimated_level": "Junior"}})));
        assert_eq!(junior.data["datasets"][0]["data"], json!([60, 40, 70, 65, 50, 35]));

        let unknown = experience_chart(&analysis(json!({})));
        assert_eq!(unknown.data["datasets"][0]["data"], json!([75, 60, 80, 85, 70, 65]));
    }

    #[test]
    fn test_score_chart_defaults_to_zero() {
        let chart = score_chart(&analysis(json!({"scores": {"overall_score": 80}})));
        assert_eq!(
            chart.data["labels"],
            json!(["Technical Skills", "Experience", "Completeness", "Overall"])
        );
        assert_eq!(chart.data["datasets"][0]["data"], json!([0.0, 0.0, 0.0, 80.0]));
    }

    #[test]
    fn test_market_demand_uses_catalogue_when_available() {
        let result = analysis(json!({"skills_analysis": {
            "programming_languages": [{"name": "Python", "proficiency": "Advanced"}, "Fortran"]
        }}));
        let database: SkillsDatabase = serde_json::from_value(json!({
            "languages": {"name": "Languages", "skills": [
                {"name": "Python", "demand": "High"},
                {"name": "Rust", "demand": "High"},
                {"name": "Perl", "demand": "Low"}
            ]}
        }))
        .unwrap();

        let data = market_demand_data(&result, Some(&database));
        assert_eq!(data.user_skills[0], ScatterPoint { x: 9.0, y: 9.0, label: "Python".into() });
        assert_eq!(data.user_skills[1].x, NEUTRAL_DEMAND);
        assert_eq!(data.user_skills[1].y, 6.0);
        let missing: Vec<&str> = data.high_demand_skills.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(missing, vec!["Rust"]);
    }

    #[test]
    fn test_market_demand_falls_back_without_catalogue() {
        let result = analysis(json!({"skills_analysis": {"tools": ["Git"]}}));
        let data = market_demand_data(&result, None);
        assert_eq!(data.user_skills[0].x, NEUTRAL_DEMAND);
        assert_eq!(data.high_demand_skills.len(), 4);
        assert_eq!(data.high_demand_skills[0].label, "Kubernetes");
    }

    #[test]
    fn test_career_path_defaults_to_mid_level() {
        let chart = career_path_chart(&analysis(json!({})));
        assert_eq!(chart.data["labels"][4], "Senior");
        let senior = career_path_chart(&analysis(json!({"experience_analysis": {"estimated_level": "Senior"}})));
        assert_eq!(senior.data["labels"][1], "Lead");
    }

    #[test]
    fn test_skill_proficiency_colors() {
        let skills = vec![
            SkillEntry { name: "Rust".into(), proficiency: Some("Advanced".into()) },
            SkillEntry { name: "Go".into(), proficiency: None },
        ];
        let chart = skill_proficiency_chart(&skills).unwrap();
        assert_eq!(chart.options["indexAxis"], "y");
        assert_eq!(chart.data["datasets"][0]["data"], json!([90.0, 60.0]));
        assert_eq!(chart.data["datasets"][0]["backgroundColor"], json!(["#10b981", "#94a3b8"]));
        assert!(skill_proficiency_chart(&[]).is_none());
    }
}
