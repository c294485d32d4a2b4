// src/error.rs
use std::fmt;
use thiserror::Error;

/// Transport-level failures of a backend call.
///
/// `Display` yields only the underlying message so call sites can build
/// user-facing text such as `"Analysis failed: <message>"`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the envelope's `error` field when present.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope reported `success: false` or lacked the payload.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response from server: {0}")]
    Malformed(String),

    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Status { .. } => "HTTP_ERROR",
            Self::Rejected(_) => "REQUEST_REJECTED",
            Self::Malformed(_) => "MALFORMED_RESPONSE",
            Self::Io(_) => "UPLOAD_READ_ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorType {
    WrongFormat,
    TooLarge,
    MissingFile,
    MissingInput,
    MissingAnalysis,
}

impl ValidationErrorType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongFormat => "FILE_WRONG_FORMAT",
            Self::TooLarge => "FILE_TOO_LARGE",
            Self::MissingFile => "FILE_MISSING",
            Self::MissingInput => "INPUT_MISSING",
            Self::MissingAnalysis => "ANALYSIS_MISSING",
        }
    }
}

/// User input rejected before any state change or network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub error_type: ValidationErrorType,
    pub message: String,
}

impl ValidationError {
    pub fn new(error_type: ValidationErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A secondary feature failed; the primary flow carries on without it.
#[derive(Debug, Error)]
#[error("{feature} unavailable: {source}")]
pub struct DegradedFeature {
    pub feature: &'static str,
    #[source]
    pub source: anyhow::Error,
}

impl DegradedFeature {
    pub fn new(feature: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self {
            feature,
            source: source.into(),
        }
    }

    /// Degraded features are only ever logged.
    pub fn log(&self) {
        crate::app_log!(warn, "{}", self);
    }
}
