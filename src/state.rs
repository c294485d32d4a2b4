// src/state.rs
use crate::types::{AnalysisHistory, AnalysisResult, JobComparison};
use crate::upload::SelectedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Submitting,
    ComparingJob,
    Rendering,
}

impl AnalysisPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::ComparingJob => "comparing_job",
            Self::Rendering => "rendering",
        }
    }
}

/// Everything the client knows about the current user session.
#[derive(Debug, Default)]
pub struct AppState {
    pub current_file: Option<SelectedFile>,
    pub analysis_results: Option<AnalysisResult>,
    pub job_comparison: Option<JobComparison>,
    pub history: AnalysisHistory,
    phase: AnalysisPhase,
}

impl AppState {
    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase != AnalysisPhase::Idle
    }

    /// Claim the single run slot. Returns `false` when a run is in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.is_analyzing() {
            return false;
        }
        self.phase = AnalysisPhase::Submitting;
        true
    }

    /// Move between in-flight phases; ignored while idle.
    pub fn advance(&mut self, phase: AnalysisPhase) {
        if self.is_analyzing() && phase != AnalysisPhase::Idle {
            self.phase = phase;
        }
    }

    pub fn finish(&mut self) {
        self.phase = AnalysisPhase::Idle;
    }

    /// Drop the file, the busy flag and every result; history survives.
    pub fn reset(&mut self) {
        self.current_file = None;
        self.analysis_results = None;
        self.job_comparison = None;
        self.phase = AnalysisPhase::Idle;
    }
}
