// src/utils.rs
use std::path::{Path, PathBuf};

/// Milliseconds since the Unix epoch, used to name exported artifacts
pub fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Build the analysis export path
pub fn export_file_path(base: &Path, epoch_ms: i64) -> PathBuf {
    base.join(format!("resume-analysis-{}.json", epoch_ms))
}

/// Build a chart export path
pub fn chart_file_path(base: &Path, chart: &str, epoch_ms: i64) -> PathBuf {
    base.join(format!("chart-{}-{}.json", chart, epoch_ms))
}

/// Build the HTML report path
pub fn report_file_path(base: &Path, epoch_ms: i64) -> PathBuf {
    base.join(format!("resume-report-{}.html", epoch_ms))
}

/// Human readable size with 1024 steps, e.g. `1.5 MB`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    // Two decimals, trailing zeros dropped
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", crate::types::format_number(rounded), UNITS[exponent])
}

/// Display form of a file name: longer than 30 chars keeps the first 27 plus `...`
pub fn truncate_file_name(name: &str) -> String {
    if name.chars().count() > 30 {
        let head: String = name.chars().take(27).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Does the name end in `.pdf`, ignoring case
pub fn has_pdf_extension(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}
