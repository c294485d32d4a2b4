// src/core/config_manager.rs
//! Configuration: optional `realize.yaml` plus environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "realize.yaml";
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// `REALIZE_ENV` / `ENVIRONMENT`, `local` when unset
    pub environment_name: String,
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub api_base_url: String,
    /// No client-side timeout unless configured.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct Profile {
    #[serde(flatten)]
    environment: EnvironmentConfig,
    #[serde(flatten)]
    service: ServiceConfig,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Profile,
    production: Option<Profile>,
}

impl ConfigManager {
    /// Load configuration from `path` (or `realize.yaml` / `$REALIZE_CONFIG`
    /// when present), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let environment = Self::environment_name();

        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("REALIZE_CONFIG").ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(file) => Self::from_file(&file, &environment)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE), &environment)?
            }
            None => Self::defaults(&environment)?,
        };

        config.apply_env_overrides();
        config.environment = config.environment.resolved()?;
        Ok(config)
    }

    fn environment_name() -> String {
        std::env::var("REALIZE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn defaults(environment: &str) -> Result<Self> {
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self {
            environment_name: environment.to_string(),
            environment: EnvironmentConfig {
                data_dir: base_dir.join("data"),
                output_dir: base_dir.join("out"),
                log_path: std::env::temp_dir().join("realize.log"),
            },
            service: ServiceConfig {
                api_base_url: DEFAULT_API_URL.to_string(),
                timeout_seconds: None,
            },
        })
    }

    fn from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let profile = match (environment, file.production) {
            ("production", Some(production)) => production,
            ("production", None) => anyhow::bail!("No 'production' section in configuration"),
            _ => file.local,
        };

        Ok(Self {
            environment_name: environment.to_string(),
            environment: profile.environment,
            service: profile.service,
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("REALIZE_API_URL") {
            self.service.api_base_url = url;
        }
        if let Ok(dir) = std::env::var("REALIZE_DATA_DIR") {
            self.environment.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("REALIZE_OUTPUT_DIR") {
            self.environment.output_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("REALIZE_LOG_PATH") {
            self.environment.log_path = PathBuf::from(path);
        }
        if let Some(secs) = std::env::var("REALIZE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.service.timeout_seconds = Some(secs);
        }
        self.service.api_base_url = self.service.api_base_url.trim_end_matches('/').to_string();
    }

    /// SQLite file backing the local key/value store.
    pub fn storage_path(&self) -> PathBuf {
        self.environment.data_dir.join("local_storage.db")
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        use crate::core::FsOps;

        FsOps::ensure_dir_exists(&self.environment.data_dir).await?;
        FsOps::ensure_dir_exists(&self.environment.output_dir).await?;
        if let Some(parent) = self.environment.log_path.parent() {
            FsOps::ensure_dir_exists(parent).await?;
        }
        Ok(())
    }
}

impl EnvironmentConfig {
    fn resolved(self) -> Result<Self> {
        Ok(Self {
            data_dir: resolve_path(self.data_dir)?,
            output_dir: resolve_path(self.output_dir)?,
            log_path: resolve_path(self.log_path)?,
        })
    }
}

fn resolve_path(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(current_dir.join(path))
    }
}
