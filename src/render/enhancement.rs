// src/render/enhancement.rs
use super::{escape, heading};
use crate::types::EnhancementSuggestion;

pub fn build_enhancement_html(suggestions: &[EnhancementSuggestion]) -> String {
    format!(
        r#"<div class="enhancement-suggestions"><div class="suggestions-header">{}<p>Personalized recommendations to boost your career prospects</p></div><div class="suggestions-grid">{}</div></div>"#,
        heading("h3", "fa-rocket", "Skills Enhancement Plan"),
        suggestions.iter().map(build_suggestion).collect::<String>()
    )
}

fn build_suggestion(suggestion: &EnhancementSuggestion) -> String {
    let priority_class = suggestion.priority.css_class();
    format!(
        r#"<div class="suggestion-card" data-type="{kind}"><div class="suggestion-header"><div class="suggestion-type {class}"><i class="{icon}"></i> {label}</div><div class="suggestion-priority {class}">{priority} Priority</div></div><h4>{skill}</h4><p class="suggestion-description">{description}</p><div class="suggestion-action"><i class="fas fa-arrow-right"></i> {action}</div></div>"#,
        kind = suggestion.suggestion_type.as_str(),
        class = priority_class,
        icon = suggestion.suggestion_type.icon(),
        label = suggestion.suggestion_type.label(),
        priority = suggestion.priority.as_str(),
        skill = escape(&suggestion.skill),
        description = escape(&suggestion.description),
        action = escape(&suggestion.action)
    )
}
