// src/report.rs
//! Standalone HTML report of the visible page regions and live charts

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::app_log;
use crate::charts::ChartAdapter;
use crate::core::FsOps;
use crate::session::Session;
use crate::ui::page::REPORT_REGIONS;
use crate::ui::Page;
use crate::utils::{epoch_millis, report_file_path};

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";
const FONT_AWESOME_CDN: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// `new Chart(...)` calls for every live chart.
pub fn chart_mounts_script(charts: &ChartAdapter) -> Result<String> {
    let mut script = String::new();
    for (name, chart) in charts.iter() {
        let config = serde_json::to_string(&chart.config)
            .with_context(|| format!("Failed to serialize chart '{}'", name))?
            // keep `</script>` out of the inline script
            .replace("</", "<\\/");
        script.push_str(&format!(
            "  charts[{:?}] = new Chart(document.getElementById({:?}), {});\n",
            name, chart.canvas, config
        ));
    }
    Ok(script)
}

pub fn build_report_html(page: &Page, charts: &ChartAdapter) -> Result<String> {
    let body: String = REPORT_REGIONS
        .iter()
        .filter(|id| page.is_visible(id))
        .map(|id| format!("<section id=\"{}\">\n{}\n</section>\n", id, page.html(id)))
        .collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>RealiZe - Resume Analysis</title>
<link rel="stylesheet" href="{fa}">
<script src="{chartjs}"></script>
</head>
<body>
{body}<script>
const charts = {{}};
window.addEventListener('DOMContentLoaded', function () {{
{mounts}}});
window.addEventListener('resize', function () {{
  Object.values(charts).forEach(function (chart) {{ chart.resize(); }});
}});
</script>
</body>
</html>
"#,
        fa = FONT_AWESOME_CDN,
        chartjs = CHART_JS_CDN,
        body = body,
        mounts = chart_mounts_script(charts)?
    ))
}

pub struct ReportWriter;

impl ReportWriter {
    /// Write the report into the session's output directory.
    pub async fn write(session: &Session) -> Result<PathBuf> {
        let html = build_report_html(&session.page, &session.charts)?;
        let path = report_file_path(&session.output_dir, epoch_millis());
        FsOps::write_file_safe(&path, &html).await?;
        app_log!(info, "Report written: {}", path.display());
        Ok(path)
    }
}
