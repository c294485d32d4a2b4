// src/flows/enhancement.rs
//! Client-side skills enhancement plan

use crate::app_log;
use crate::render::enhancement::build_enhancement_html;
use crate::session::Session;
use crate::types::{
    AnalysisResult, EnhancementSuggestion, ExperienceLevel, Priority, SuggestionType,
};
use crate::ui::page::ENHANCEMENT_SUGGESTIONS_CONTAINER;

const CORE_SKILLS: [&str; 5] = ["Git", "Testing", "CI/CD", "Code Review", "Agile"];

const TRENDING_SKILLS: [(&str, Priority, &str); 4] = [
    ("Docker", Priority::High, "Essential for modern development"),
    ("Kubernetes", Priority::Medium, "Container orchestration is in high demand"),
    ("AI/ML Integration", Priority::Medium, "AI skills are becoming crucial"),
    ("Cloud Native", Priority::High, "Cloud-native development is the future"),
];

/// (certification, priority, relevant for)
const CERTIFICATIONS: [(&str, Priority, &str); 4] = [
    ("AWS Certified Developer", Priority::High, "Cloud skills"),
    ("Kubernetes Certified Administrator", Priority::Medium, "DevOps"),
    ("Google Cloud Professional", Priority::Medium, "Multi-cloud"),
    ("CompTIA Security+", Priority::High, "Security awareness"),
];

pub struct EnhancementFlow;

impl EnhancementFlow {
    /// Core skills, trending skills and certifications the resume lacks,
    /// then one experience step for Junior and Mid-Level profiles.
    pub fn suggestions_for(analysis: &AnalysisResult) -> Vec<EnhancementSuggestion> {
        let held = analysis.skill_names();
        let missing = |skill: &str| !held.iter().any(|h| h == skill);
        let mut suggestions = Vec::new();

        for skill in CORE_SKILLS.iter().filter(|s| missing(s)) {
            suggestions.push(EnhancementSuggestion {
                suggestion_type: SuggestionType::CoreSkill,
                skill: skill.to_string(),
                priority: Priority::High,
                description: format!("Add {} to strengthen your technical foundation", skill),
                action: format!("Learn {} fundamentals and practice with real projects", skill),
            });
        }

        for (skill, priority, description) in TRENDING_SKILLS.iter().filter(|(s, _, _)| missing(s)) {
            suggestions.push(EnhancementSuggestion {
                suggestion_type: SuggestionType::TrendingSkill,
                skill: skill.to_string(),
                priority: *priority,
                description: description.to_string(),
                action: format!("Start with {} basics and build practical experience", skill),
            });
        }

        for (cert, priority, relevant_for) in CERTIFICATIONS.iter().filter(|(c, _, _)| missing(c)) {
            suggestions.push(EnhancementSuggestion {
                suggestion_type: SuggestionType::Certification,
                skill: cert.to_string(),
                priority: *priority,
                description: format!("Relevant for {}", relevant_for),
                action: format!("Prepare for {} certification exam", cert),
            });
        }

        match analysis.experience_level() {
            ExperienceLevel::Junior => suggestions.push(EnhancementSuggestion {
                suggestion_type: SuggestionType::Experience,
                skill: "Lead small projects".to_string(),
                priority: Priority::High,
                description: "Develop leadership experience through small project ownership".to_string(),
                action: "Volunteer to lead a project or feature development".to_string(),
            }),
            ExperienceLevel::MidLevel => suggestions.push(EnhancementSuggestion {
                suggestion_type: SuggestionType::Experience,
                skill: "Mentor junior developers".to_string(),
                priority: Priority::Medium,
                description: "Build leadership and communication skills".to_string(),
                action: "Offer to mentor a junior team member".to_string(),
            }),
            ExperienceLevel::Senior | ExperienceLevel::Unknown => {}
        }

        suggestions
    }

    /// Render the plan for the current analysis. Returns the number of
    /// suggestions shown; nothing is rendered without an analysis.
    pub fn show(session: &mut Session) -> usize {
        let Some(analysis) = session.state.analysis_results.as_ref() else {
            app_log!(debug, "No analysis yet, skipping enhancement plan");
            return 0;
        };

        let suggestions = Self::suggestions_for(analysis);
        if suggestions.is_empty() {
            return 0;
        }

        session
            .page
            .render_into(ENHANCEMENT_SUGGESTIONS_CONTAINER, build_enhancement_html(&suggestions));
        suggestions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analysis(value: serde_json::Value) -> AnalysisResult {
        AnalysisResult::from_value(value)
    }

    #[test]
    fn test_missing_core_skills_only() {
        let result = analysis(json!({
            "skills_analysis": {"tools": ["Git", {"name": "Agile"}, "Docker"]},
            "experience_analysis": {"estimated_level": "Senior"}
        }));
        let suggestions = EnhancementFlow::suggestions_for(&result);

        let core: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.suggestion_type == SuggestionType::CoreSkill)
            .map(|s| s.skill.as_str())
            .collect();
        assert_eq!(core, vec!["Testing", "CI/CD", "Code Review"]);
        assert!(suggestions.iter().all(|s| s.skill != "Docker"));
        assert!(suggestions
            .iter()
            .all(|s| s.suggestion_type != SuggestionType::Experience));
        assert_eq!(
            suggestions[0].description,
            "Add Testing to strengthen your technical foundation"
        );
    }

    #[test]
    fn test_experience_step_by_level() {
        let junior = EnhancementFlow::suggestions_for(&analysis(json!({
            "experience_analysis": {"estimated_level": "Junior"}
        })));
        let last = junior.last().unwrap();
        assert_eq!(last.skill, "Lead small projects");
        assert_eq!(last.priority, Priority::High);

        let mid = EnhancementFlow::suggestions_for(&analysis(json!({
            "experience_analysis": {"estimated_level": "Mid-Level"}
        })));
        assert_eq!(mid.last().unwrap().skill, "Mentor junior developers");

        // 5 core + 4 trending + 4 certifications, no experience step
        let unknown = EnhancementFlow::suggestions_for(&analysis(json!({})));
        assert_eq!(unknown.len(), 13);
    }

    #[test]
    fn test_certification_text() {
        let suggestions = EnhancementFlow::suggestions_for(&analysis(json!({})));
        let cert = suggestions
            .iter()
            .find(|s| s.skill == "CompTIA Security+")
            .unwrap();
        assert_eq!(cert.description, "Relevant for Security awareness");
        assert_eq!(cert.action, "Prepare for CompTIA Security+ certification exam");
    }
}
