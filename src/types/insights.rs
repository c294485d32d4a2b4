// src/types/insights.rs
//! Typed views over the AI-generated parts of a result

use serde::{Deserialize, Serialize};

use super::{number_or_zero, opt_text, text_list};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSummary {
    #[serde(deserialize_with = "opt_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub overall_assessment: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub key_strengths: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub areas_for_improvement: Vec<String>,
    #[serde(deserialize_with = "opt_text")]
    pub career_trajectory: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub market_competitiveness: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AiRecommendations {
    pub recommendations: Vec<AiRecommendation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiRecommendation {
    #[serde(deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobComparison {
    #[serde(deserialize_with = "number_or_zero")]
    pub match_score: f64,
    #[serde(deserialize_with = "text_list")]
    pub strong_matches: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub missing_skills: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub priority_gaps: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub recommendations: Vec<String>,
    #[serde(deserialize_with = "opt_text")]
    pub overall_assessment: Option<String>,
    /// Set by the backend when its own comparison step failed.
    #[serde(deserialize_with = "opt_text")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerSuggestions {
    pub career_paths: Vec<CareerPath>,
    #[serde(deserialize_with = "text_list")]
    pub learning_path: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub skills_to_develop: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub action_plan: Vec<String>,
    pub market_insights: Option<MarketInsights>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerPath {
    #[serde(deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "number_or_zero")]
    pub match_percentage: f64,
    #[serde(deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub learning_path: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketInsights {
    #[serde(deserialize_with = "opt_text")]
    pub demand_level: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub salary_outlook: Option<String>,
}
