// src/render/mod.rs
//! Pure mappings from result trees to HTML fragments

pub mod career;
pub mod comparison;
pub mod enhancement;
pub mod market;
pub mod results;
pub mod upload;

/// Skill categories with a fixed title, in display order.
pub const KNOWN_SKILL_CATEGORIES: [(&str, &str); 7] = [
    ("programming_languages", "Programming Languages"),
    ("frameworks", "Frameworks & Libraries"),
    ("databases", "Databases"),
    ("cloud_platforms", "Cloud Platforms"),
    ("tools", "Development Tools"),
    ("certifications", "Certifications"),
    ("soft_skills", "Soft Skills"),
];

/// Escape text for HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `cloud_platforms` -> `Cloud Platforms`
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Fixed title for known categories, derived otherwise.
pub fn category_title(key: &str) -> String {
    KNOWN_SKILL_CATEGORIES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, title)| title.to_string())
        .unwrap_or_else(|| title_case_key(key))
}

/// CSS class for a proficiency badge.
pub fn proficiency_class(proficiency: &str) -> String {
    proficiency.to_lowercase()
}

/// `<ul>` items, one per entry.
pub(crate) fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

/// Section heading with a Font Awesome icon.
pub(crate) fn heading(tag: &str, icon: &str, text: &str) -> String {
    format!(
        r#"<{tag}><i class="fas {icon}"></i> {text}</{tag}>"#,
        tag = tag,
        icon = icon,
        text = text
    )
}
