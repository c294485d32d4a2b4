// src/types/suggestion.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    CoreSkill,
    TrendingSkill,
    Certification,
    Experience,
}

impl SuggestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoreSkill => "core_skill",
            Self::TrendingSkill => "trending_skill",
            Self::Certification => "certification",
            Self::Experience => "experience",
        }
    }

    /// Badge text, e.g. `CORE SKILL`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::CoreSkill => "fas fa-cog",
            Self::TrendingSkill => "fas fa-trending-up",
            Self::Certification => "fas fa-certificate",
            Self::Experience => "fas fa-briefcase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::High => "high-priority",
            Self::Medium => "medium-priority",
        }
    }
}

/// Client-side skills enhancement hint. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub skill: String,
    pub priority: Priority,
    pub description: String,
    pub action: String,
}
