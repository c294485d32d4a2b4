// src/types/skills_db.rs
//! Reference skills catalogue served by `/api/skills-database`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::opt_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Position on the 0-10 market-demand axis.
    pub fn score(&self) -> f64 {
        match self {
            Self::High => 9.0,
            Self::Medium => 6.0,
            Self::Low => 3.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsDbEntry {
    pub name: String,
    #[serde(deserialize_with = "opt_text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub demand: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub learning_difficulty: Option<String>,
}

impl SkillsDbEntry {
    pub fn demand_level(&self) -> Option<DemandLevel> {
        self.demand.as_deref().and_then(DemandLevel::parse)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsDbCategory {
    pub name: String,
    pub skills: Vec<SkillsDbEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillsDatabase {
    categories: BTreeMap<String, SkillsDbCategory>,
}

impl SkillsDatabase {
    pub fn categories(&self) -> impl Iterator<Item = (&String, &SkillsDbCategory)> {
        self.categories.iter()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Skills across every category.
    pub fn skill_count(&self) -> usize {
        self.categories.values().map(|c| c.skills.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.skill_count() == 0
    }

    /// Case-insensitive lookup across all categories.
    pub fn find(&self, skill: &str) -> Option<&SkillsDbEntry> {
        let wanted = skill.to_lowercase();
        self.categories
            .values()
            .flat_map(|c| c.skills.iter())
            .find(|entry| entry.name.to_lowercase() == wanted)
    }

    pub fn by_demand(&self, level: DemandLevel) -> impl Iterator<Item = &SkillsDbEntry> {
        self.categories
            .values()
            .flat_map(|c| c.skills.iter())
            .filter(move |entry| entry.demand_level() == Some(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn database() -> SkillsDatabase {
        serde_json::from_value(json!({
            "programming_languages": {
                "name": "Programming Languages",
                "skills": [
                    {"name": "Python", "category": "Backend", "demand": "High", "learning_difficulty": "Medium"},
                    {"name": "Ruby", "category": "Backend", "demand": "Low", "learning_difficulty": "Medium"}
                ]
            },
            "cloud_platforms": {
                "name": "Cloud Platforms",
                "skills": [{"name": "AWS", "demand": "High"}]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let db = database();
        assert_eq!(db.find("python").unwrap().demand_level(), Some(DemandLevel::High));
        assert!(db.find("Cobol").is_none());
    }

    #[test]
    fn test_counts_skills_and_categories_separately() {
        let db = database();
        assert_eq!(db.category_count(), 2);
        assert_eq!(db.skill_count(), 3);
        assert!(!db.is_empty());
        assert!(SkillsDatabase::default().is_empty());
    }

    #[test]
    fn test_by_demand() {
        let db = database();
        let high: Vec<_> = db.by_demand(DemandLevel::High).map(|e| e.name.as_str()).collect();
        assert_eq!(high, vec!["AWS", "Python"]);
    }
}
