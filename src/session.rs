// src/session.rs
//! One user session: state, page, toasts, charts and their collaborators

use std::path::PathBuf;
use std::sync::Arc;

use crate::app_log;
use crate::charts::ChartAdapter;
use crate::core::storage::{ANALYSIS_HISTORY_KEY, JOB_DESCRIPTION_KEY};
use crate::core::{LocalStorage, ResumeApi};
use crate::error::DegradedFeature;
use crate::state::AppState;
use crate::types::{AnalysisHistory, AnalysisHistoryEntry, SkillsDatabase};
use crate::ui::{Page, Toasts};

pub struct Session {
    pub state: AppState,
    pub page: Page,
    pub toasts: Toasts,
    pub charts: ChartAdapter,
    /// Last skills catalogue fetched, if any
    pub skills_database: Option<SkillsDatabase>,
    pub storage: LocalStorage,
    pub api: Arc<dyn ResumeApi>,
    pub output_dir: PathBuf,
}

impl Session {
    /// Build a session and restore the saved job description and history.
    /// Restore failures are logged and the session starts empty.
    pub async fn open(api: Arc<dyn ResumeApi>, storage: LocalStorage, output_dir: PathBuf) -> Self {
        let mut session = Self {
            state: AppState::default(),
            page: Page::default(),
            toasts: Toasts::default(),
            charts: ChartAdapter::default(),
            skills_database: None,
            storage,
            api,
            output_dir,
        };

        match session.storage.get_item(JOB_DESCRIPTION_KEY).await {
            Ok(Some(saved)) => session.page.job_description = saved,
            Ok(None) => {}
            Err(e) => DegradedFeature::new("job description restore", e).log(),
        }

        match session
            .storage
            .load_json::<Vec<AnalysisHistoryEntry>>(ANALYSIS_HISTORY_KEY)
            .await
        {
            Ok(Some(entries)) => {
                session.state.history = AnalysisHistory::from_entries(entries);
                app_log!(debug, "Restored {} history entries", session.state.history.len());
            }
            Ok(None) => {}
            Err(e) => DegradedFeature::new("analysis history restore", e).log(),
        }

        session
    }

    /// Mirror the textarea and autosave it.
    pub async fn set_job_description(&mut self, text: impl Into<String>) {
        self.page.job_description = text.into();
        if let Err(e) = self
            .storage
            .set_item(JOB_DESCRIPTION_KEY, &self.page.job_description)
            .await
        {
            DegradedFeature::new("job description autosave", e).log();
        }
    }

    pub async fn forget_job_description(&mut self) {
        if let Err(e) = self.storage.remove_item(JOB_DESCRIPTION_KEY).await {
            DegradedFeature::new("job description removal", e).log();
        }
    }

    /// Add a completed run to the history and persist it.
    pub async fn record_history(&mut self, entry: AnalysisHistoryEntry) {
        self.state.history.push(entry);
        self.save_history().await;
    }

    pub async fn clear_history(&mut self) {
        self.state.history.clear();
        if let Err(e) = self.storage.remove_item(ANALYSIS_HISTORY_KEY).await {
            DegradedFeature::new("analysis history persistence", e).log();
        }
    }

    async fn save_history(&self) {
        if let Err(e) = self
            .storage
            .save_json(ANALYSIS_HISTORY_KEY, &self.state.history)
            .await
        {
            DegradedFeature::new("analysis history persistence", e).log();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted backend for session-level tests

    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::Session;
    use crate::core::{LocalStorage, ResumeApi};
    use crate::error::ApiError;

    #[derive(Default)]
    pub struct FakeApi {
        pub analysis: Mutex<Option<Result<Value, ApiError>>>,
        pub comparison: Mutex<Option<Result<Value, ApiError>>>,
        pub suggestions: Mutex<Option<Result<Value, ApiError>>>,
        pub skills: Mutex<Option<Result<Value, ApiError>>>,
        pub analyze_calls: AtomicUsize,
        pub compare_calls: AtomicUsize,
        pub career_calls: AtomicUsize,
        pub skills_calls: AtomicUsize,
    }

    fn take(slot: &Mutex<Option<Result<Value, ApiError>>>, what: &str) -> Result<Value, ApiError> {
        slot.lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ApiError::Rejected(format!("no scripted {}", what))))
    }

    fn put(slot: &Mutex<Option<Result<Value, ApiError>>>, value: Result<Value, ApiError>) {
        *slot.lock().unwrap() = Some(value);
    }

    impl FakeApi {
        pub fn with_analysis(self, value: Result<Value, ApiError>) -> Self {
            put(&self.analysis, value);
            self
        }

        pub fn with_comparison(self, value: Result<Value, ApiError>) -> Self {
            put(&self.comparison, value);
            self
        }

        pub fn with_suggestions(self, value: Result<Value, ApiError>) -> Self {
            put(&self.suggestions, value);
            self
        }

        pub fn with_skills(self, value: Result<Value, ApiError>) -> Self {
            put(&self.skills, value);
            self
        }

        /// Re-arm the analysis response between runs.
        pub fn script_analysis(&self, value: Result<Value, ApiError>) {
            put(&self.analysis, value);
        }

        pub fn calls(counter: &AtomicUsize) -> usize {
            counter.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResumeApi for FakeApi {
        async fn analyze_resume(&self, _file_name: &str, _content: Vec<u8>) -> Result<Value, ApiError> {
            self.analyze_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.analysis, "analysis")
        }

        async fn compare_job(&self, _resume_text: &str, _job_description: &str) -> Result<Value, ApiError> {
            self.compare_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.comparison, "comparison")
        }

        async fn career_suggestions(&self, _resume_text: &str, _skills: &Value) -> Result<Value, ApiError> {
            self.career_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.suggestions, "suggestions")
        }

        async fn skills_database(&self) -> Result<Value, ApiError> {
            self.skills_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.skills, "skills")
        }

        async fn health(&self) -> Result<bool, ApiError> {
            Ok(true)
        }
    }

    pub async fn session_with(api: Arc<FakeApi>) -> Session {
        let storage = LocalStorage::in_memory().await.unwrap();
        let output_dir = std::env::temp_dir().join("realize-tests");
        Session::open(api, storage, output_dir).await
    }
}
