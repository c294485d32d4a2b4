// src/types/analysis.rs
//! Analysis result tree as returned by `/api/analyze-resume`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::insights::{AiRecommendation, AiRecommendations, AiSummary, CareerSuggestions, JobComparison};
use super::{lenient, value_text};

pub const OVERALL_SCORE: &str = "overall_score";
pub const TECHNICAL_SKILLS_SCORE: &str = "technical_skills_score";
pub const EXPERIENCE_SCORE: &str = "experience_score";
pub const COMPLETENESS_SCORE: &str = "completeness_score";

/// One skill, whichever shape the backend sent it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub proficiency: Option<String>,
}

impl SkillEntry {
    /// Accepts `"Python"` or `{"name": "Python", "proficiency": "Advanced"}`.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) if !name.is_empty() => Some(Self {
                name: name.clone(),
                proficiency: None,
            }),
            Value::Object(obj) => {
                let name = obj.get("name").and_then(value_text).filter(|n| !n.is_empty())?;
                let proficiency = obj
                    .get("proficiency")
                    .and_then(value_text)
                    .filter(|p| !p.is_empty());
                Some(Self { name, proficiency })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    /// snake_case key as sent by the backend, e.g. `cloud_platforms`
    pub key: String,
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    Senior,
    Unknown,
}

impl ExperienceLevel {
    pub fn parse(level: Option<&str>) -> Self {
        match level {
            Some("Junior") => Self::Junior,
            Some("Mid-Level") => Self::MidLevel,
            Some("Senior") => Self::Senior,
            _ => Self::Unknown,
        }
    }
}

/// Backend analysis, kept verbatim for export, with skills normalized once
/// on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    raw: Value,
    skills: Vec<SkillCategory>,
}

impl AnalysisResult {
    pub fn from_value(raw: Value) -> Self {
        let skills = normalize_skills(raw.get("skills_analysis"));
        Self { raw, skills }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn section(&self, key: &str) -> Option<&Value> {
        self.raw.get(key).filter(|v| !v.is_null())
    }

    /// `basic_info.text_content`, or empty.
    pub fn text_content(&self) -> &str {
        self.raw
            .pointer("/basic_info/text_content")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Named score, `0` when absent or non-numeric.
    pub fn score(&self, key: &str) -> f64 {
        self.raw
            .get("scores")
            .and_then(|scores| scores.get(key))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// All categories in backend order, including empty ones.
    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skills
    }

    pub fn skill_category(&self, key: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|c| c.key == key)
    }

    pub fn has_skills_analysis(&self) -> bool {
        matches!(self.section("skills_analysis"), Some(Value::Object(map)) if !map.is_empty())
    }

    /// Flattened, de-duplicated skill names in first-seen order.
    pub fn skill_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for skill in self.skills.iter().flat_map(|c| c.skills.iter()) {
            if !names.contains(&skill.name) {
                names.push(skill.name.clone());
            }
        }
        names
    }

    /// Raw `skills_analysis` sub-tree (or `{}`) for the career-suggestions request.
    pub fn skills_analysis_value(&self) -> Value {
        self.section("skills_analysis")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    pub fn has_experience_analysis(&self) -> bool {
        matches!(self.section("experience_analysis"), Some(Value::Object(map)) if !map.is_empty())
    }

    pub fn estimated_level(&self) -> Option<&str> {
        self.raw
            .pointer("/experience_analysis/estimated_level")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        ExperienceLevel::parse(self.estimated_level())
    }

    /// `experience_analysis.years_pattern`, skipped when falsy.
    pub fn years_pattern(&self) -> Option<String> {
        let value = self.raw.pointer("/experience_analysis/years_pattern")?;
        match value {
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Bool(false) => None,
            other => value_text(other).filter(|s| !s.is_empty()),
        }
    }

    pub fn ai_summary(&self) -> AiSummary {
        lenient(self.section("ai_summary"), "ai_summary")
    }

    pub fn recommendations(&self) -> Vec<AiRecommendation> {
        let recs: AiRecommendations =
            lenient(self.section("ai_recommendations"), "ai_recommendations");
        recs.recommendations
    }

    pub fn job_comparison(&self) -> Option<JobComparison> {
        self.section("job_comparison")
            .map(|v| lenient(Some(v), "job_comparison"))
    }

    pub fn career_suggestions(&self) -> Option<CareerSuggestions> {
        self.section("career_suggestions")
            .map(|v| lenient(Some(v), "career_suggestions"))
    }

    pub fn attach_job_comparison(&mut self, comparison: Value) {
        self.attach("job_comparison", comparison);
    }

    pub fn attach_career_suggestions(&mut self, suggestions: Value) {
        self.attach("career_suggestions", suggestions);
    }

    fn attach(&mut self, key: &str, value: Value) {
        if !self.raw.is_object() {
            self.raw = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.raw {
            map.insert(key.to_string(), value);
        }
    }
}

fn normalize_skills(skills_analysis: Option<&Value>) -> Vec<SkillCategory> {
    let Some(Value::Object(categories)) = skills_analysis else {
        return Vec::new();
    };

    categories
        .iter()
        .filter_map(|(key, entries)| {
            let entries = entries.as_array()?;
            Some(SkillCategory {
                key: key.clone(),
                skills: entries.iter().filter_map(SkillEntry::from_value).collect(),
            })
        })
        .collect()
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnalysisResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
