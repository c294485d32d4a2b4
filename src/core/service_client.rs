// src/core/service_client.rs
//! HTTP client for the resume-analysis backend

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

use crate::app_log;
use crate::error::ApiError;
use crate::types::response::{
    ApiEnvelope, ANALYSIS_KEY, COMPARISON_KEY, SKILLS_KEY, SUGGESTIONS_KEY,
};

const ANALYZE_RESUME_ENDPOINT: &str = "/api/analyze-resume";
const COMPARE_JOB_ENDPOINT: &str = "/api/compare-job";
const CAREER_SUGGESTIONS_ENDPOINT: &str = "/api/career-suggestions";
const SKILLS_DATABASE_ENDPOINT: &str = "/api/skills-database";
const HEALTH_ENDPOINT: &str = "/health";

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// The five backend operations the client depends on.
#[async_trait]
pub trait ResumeApi: Send + Sync {
    /// Upload a PDF as multipart field `resume`; yields the `analysis` payload.
    async fn analyze_resume(&self, file_name: &str, content: Vec<u8>) -> Result<Value, ApiError>;

    /// Yields the `comparison` payload.
    async fn compare_job(&self, resume_text: &str, job_description: &str)
        -> Result<Value, ApiError>;

    /// Yields the `suggestions` payload.
    async fn career_suggestions(
        &self,
        resume_text: &str,
        skills_analysis: &Value,
    ) -> Result<Value, ApiError>;

    /// Yields the `skills` payload.
    async fn skills_database(&self) -> Result<Value, ApiError>;

    /// `true` when `/health` answers 2xx.
    async fn health(&self) -> Result<bool, ApiError>;
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: Option<u64>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Normalize a response into its payload or an [`ApiError`].
    async fn unwrap_envelope(
        response: reqwest::Response,
        key: &str,
        fallback_error: &str,
    ) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        app_log!(trace, "Response status: {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = ApiEnvelope::parse(&body)
                .map(|envelope| envelope.error_message(fallback_error))
                .unwrap_or_else(|_| fallback_error.to_string());
            app_log!(error, "Backend returned {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        ApiEnvelope::parse(&body)?.into_payload(key, fallback_error)
    }

    async fn post_json(
        &self,
        endpoint: &str,
        payload: &Value,
        key: &str,
        fallback_error: &str,
    ) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        app_log!(info, "POST {}", url);

        let response = self.client.post(&url).json(payload).send().await?;
        Self::unwrap_envelope(response, key, fallback_error).await
    }
}

#[async_trait]
impl ResumeApi for ApiClient {
    async fn analyze_resume(&self, file_name: &str, content: Vec<u8>) -> Result<Value, ApiError> {
        let url = self.url(ANALYZE_RESUME_ENDPOINT);

        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str(PDF_CONTENT_TYPE)?;
        let form = Form::new().part("resume", part);

        app_log!(info, "Uploading {} to {}", file_name, url);

        let response = self.client.post(&url).multipart(form).send().await?;
        Self::unwrap_envelope(response, ANALYSIS_KEY, "Analysis failed").await
    }

    async fn compare_job(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Value, ApiError> {
        let payload = json!({
            "resume_text": resume_text,
            "job_description": job_description,
        });
        self.post_json(COMPARE_JOB_ENDPOINT, &payload, COMPARISON_KEY, "Comparison failed")
            .await
    }

    async fn career_suggestions(
        &self,
        resume_text: &str,
        skills_analysis: &Value,
    ) -> Result<Value, ApiError> {
        let payload = json!({
            "resume_text": resume_text,
            "skills_analysis": skills_analysis,
        });
        self.post_json(
            CAREER_SUGGESTIONS_ENDPOINT,
            &payload,
            SUGGESTIONS_KEY,
            "Failed to generate career suggestions",
        )
        .await
    }

    async fn skills_database(&self) -> Result<Value, ApiError> {
        let url = self.url(SKILLS_DATABASE_ENDPOINT);
        app_log!(info, "GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::unwrap_envelope(response, SKILLS_KEY, "Failed to load skills database").await
    }

    async fn health(&self) -> Result<bool, ApiError> {
        let response = self.client.get(self.url(HEALTH_ENDPOINT)).send().await?;
        Ok(response.status().is_success())
    }
}

/// Probe `/health` and log the outcome; never fails.
pub async fn check_api_health(api: &dyn ResumeApi) -> bool {
    match api.health().await {
        Ok(true) => {
            app_log!(info, "API health check passed");
            true
        }
        Ok(false) => {
            app_log!(warn, "API health check failed");
            false
        }
        Err(e) => {
            app_log!(error, "API health check error: {}", e);
            false
        }
    }
}
