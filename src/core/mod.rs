// src/core/mod.rs
//! Core services: configuration, file system, local storage and the backend client

pub mod config_manager;
pub mod fs_ops;
pub mod service_client;
pub mod storage;

pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
pub use service_client::{check_api_health, ApiClient, ResumeApi};
pub use storage::LocalStorage;
