// src/ui/page.rs
//! In-memory page: regions, trigger buttons, upload area and the
//! job-description input

use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::render::upload::{empty_upload_html, FILE_INPUT};

pub const JOB_COMPARISON: &str = "jobComparison";
pub const ACTION_BUTTONS: &str = "actionButtons";
pub const LOADING_STATE: &str = "loadingState";
pub const RESULTS_SECTION: &str = "resultsSection";
pub const CAREER_SUGGESTIONS_CONTAINER: &str = "careerSuggestionsContainer";
pub const DETAILED_COMPARISON_CONTAINER: &str = "detailedComparisonContainer";
pub const ENHANCEMENT_SUGGESTIONS_CONTAINER: &str = "enhancementSuggestionsContainer";
pub const MARKET_COMPARISON_CONTAINER: &str = "marketComparisonContainer";
pub const PAGE_TOP: &str = "top";

pub const ANALYZE_BUTTON: &str = "analyzeBtn";
pub const CAREER_BUTTON: &str = "getCareerSuggestions";
pub const COMPARE_BUTTON: &str = "compareJobBtn";

const REGIONS: [&str; 8] = [
    JOB_COMPARISON,
    ACTION_BUTTONS,
    LOADING_STATE,
    RESULTS_SECTION,
    CAREER_SUGGESTIONS_CONTAINER,
    DETAILED_COMPARISON_CONTAINER,
    ENHANCEMENT_SUGGESTIONS_CONTAINER,
    MARKET_COMPARISON_CONTAINER,
];

/// Regions that end up in a written report, in page order.
pub const REPORT_REGIONS: [&str; 5] = [
    RESULTS_SECTION,
    DETAILED_COMPARISON_CONTAINER,
    CAREER_SUGGESTIONS_CONTAINER,
    ENHANCEMENT_SUGGESTIONS_CONTAINER,
    MARKET_COMPARISON_CONTAINER,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadVisual {
    Empty,
    FileSelected,
    Error,
}

/// A CSS class applied for a fixed time, e.g. the `success` flash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientCue {
    pub class: &'static str,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct UploadArea {
    pub html: String,
    pub visual: UploadVisual,
    pub dragover: bool,
    pub cue: Option<TransientCue>,
}

impl UploadArea {
    fn empty() -> Self {
        Self {
            html: empty_upload_html(),
            visual: UploadVisual::Empty,
            dragover: false,
            cue: None,
        }
    }

    /// Native `#resumeFile` inputs in the current markup.
    pub fn file_input_count(&self) -> usize {
        let Ok(selector) = Selector::parse(&format!("input#{}", FILE_INPUT)) else {
            return 0;
        };
        Html::parse_fragment(&self.html).select(&selector).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub visible: bool,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerButton {
    idle_label: String,
    pub label: String,
    pub disabled: bool,
}

impl TriggerButton {
    fn new(label: &str) -> Self {
        Self {
            idle_label: label.to_string(),
            label: label.to_string(),
            disabled: false,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.disabled && self.label == self.idle_label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: &'static str,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub upload_area: UploadArea,
    /// Mirrors the job-description textarea.
    pub job_description: String,
    regions: BTreeMap<&'static str, Region>,
    buttons: BTreeMap<&'static str, TriggerButton>,
    scrolls: Vec<ScrollRequest>,
}

impl Default for Page {
    fn default() -> Self {
        let regions = REGIONS.iter().map(|id| (*id, Region::default())).collect();

        let buttons = [
            (ANALYZE_BUTTON, r#"<i class="fas fa-search"></i> Analyze Resume"#),
            (CAREER_BUTTON, r#"<i class="fas fa-road"></i> Get Career Suggestions"#),
            (COMPARE_BUTTON, r#"<i class="fas fa-bullseye"></i> Detailed Comparison"#),
        ]
        .into_iter()
        .map(|(id, label)| (id, TriggerButton::new(label)))
        .collect();

        Self {
            upload_area: UploadArea::empty(),
            job_description: String::new(),
            regions,
            buttons,
            scrolls: Vec::new(),
        }
    }
}

impl Page {
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.region(id).map(|r| r.visible).unwrap_or(false)
    }

    pub fn html(&self, id: &str) -> &str {
        self.region(id).map(|r| r.html.as_str()).unwrap_or("")
    }

    pub fn show(&mut self, id: &str) {
        if let Some(region) = self.regions.get_mut(id) {
            region.visible = true;
        }
    }

    pub fn hide(&mut self, id: &str) {
        if let Some(region) = self.regions.get_mut(id) {
            region.visible = false;
        }
    }

    /// Replace a region's content and reveal it.
    pub fn render_into(&mut self, id: &str, html: String) {
        if let Some(region) = self.regions.get_mut(id) {
            region.html = html;
            region.visible = true;
        }
    }

    pub fn button(&self, id: &str) -> Option<&TriggerButton> {
        self.buttons.get(id)
    }

    /// Disable a trigger and swap in a spinner label.
    pub fn disable_button(&mut self, id: &str, busy_text: &str) {
        if let Some(button) = self.buttons.get_mut(id) {
            button.disabled = true;
            button.label = format!(r#"<i class="fas fa-spinner fa-spin"></i> {}"#, busy_text);
        }
    }

    /// Re-enable a trigger with its original label.
    pub fn restore_button(&mut self, id: &str) {
        if let Some(button) = self.buttons.get_mut(id) {
            button.disabled = false;
            button.label = button.idle_label.clone();
        }
    }

    pub fn buttons_idle(&self) -> bool {
        self.buttons.values().all(TriggerButton::is_idle)
    }

    pub fn scroll_into_view(&mut self, target: &'static str) {
        self.scroll_after(target, Duration::ZERO);
    }

    pub fn scroll_after(&mut self, target: &'static str, delay: Duration) {
        self.scrolls.push(ScrollRequest { target, delay });
    }

    pub fn pending_scrolls(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    pub fn take_scrolls(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scrolls)
    }

    /// Back to the empty upload markup with exactly one file input;
    /// safe to call repeatedly.
    pub fn reset_upload_area(&mut self) {
        self.upload_area = UploadArea::empty();
    }

    pub fn set_upload_selected(&mut self, html: String) {
        let area = &mut self.upload_area;
        area.html = html;
        area.visual = UploadVisual::FileSelected;
        area.dragover = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_hides_every_region() {
        let page = Page::default();
        for id in REGIONS {
            assert!(!page.is_visible(id), "{} should start hidden", id);
        }
        assert_eq!(page.upload_area.visual, UploadVisual::Empty);
        assert!(page.buttons_idle());
    }

    #[test]
    fn test_disable_and_restore_button() {
        let mut page = Page::default();
        page.disable_button(CAREER_BUTTON, "Generating...");
        let button = page.button(CAREER_BUTTON).unwrap();
        assert!(button.disabled);
        assert!(button.label.contains("Generating..."));
        assert!(!page.buttons_idle());

        page.restore_button(CAREER_BUTTON);
        let button = page.button(CAREER_BUTTON).unwrap();
        assert!(button.label.contains("Get Career Suggestions"));
        assert!(page.buttons_idle());
    }

    #[test]
    fn test_render_into_reveals_region() {
        let mut page = Page::default();
        page.render_into(RESULTS_SECTION, "<p>done</p>".to_string());
        assert!(page.is_visible(RESULTS_SECTION));
        assert_eq!(page.html(RESULTS_SECTION), "<p>done</p>");
        assert_eq!(page.html("noSuchRegion"), "");
    }

    #[test]
    fn test_reset_upload_area_is_idempotent() {
        let mut page = Page::default();
        assert_eq!(page.upload_area.file_input_count(), 1);
        page.set_upload_selected("<div>cv.pdf</div>".to_string());
        assert_eq!(page.upload_area.file_input_count(), 0);

        page.reset_upload_area();
        page.reset_upload_area();
        assert_eq!(page.upload_area.visual, UploadVisual::Empty);
        assert_eq!(page.upload_area.file_input_count(), 1);
    }

    #[test]
    fn test_scroll_requests_are_drained() {
        let mut page = Page::default();
        page.scroll_after(JOB_COMPARISON, Duration::from_millis(500));
        page.scroll_into_view(RESULTS_SECTION);
        assert_eq!(page.pending_scrolls().len(), 2);
        let scrolls = page.take_scrolls();
        assert_eq!(scrolls[0].delay, Duration::from_millis(500));
        assert!(page.pending_scrolls().is_empty());
    }
}
