//! RealiZe resume-analysis client: upload validation, backend calls,
//! analysis state, HTML rendering and chart configuration.

pub mod charts;
pub mod cli;
pub mod core;
pub mod error;
pub mod export;
pub mod flows;
pub mod orchestrator;
pub mod render;
pub mod report;
pub mod session;
pub mod state;
pub mod types;
pub mod ui;
pub mod upload;
pub mod utils;

pub use crate::core::{ApiClient, ConfigManager, LocalStorage, ResumeApi};
pub use error::{ApiError, ValidationError};
pub use orchestrator::{AnalysisOrchestrator, AnalysisOutcome};
pub use session::Session;
pub use state::{AnalysisPhase, AppState};
pub use types::analysis::AnalysisResult;
pub use upload::{SelectedFile, UploadController};

/// Log through `tracing` with the level as the first token.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
