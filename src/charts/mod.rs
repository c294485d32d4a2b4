// src/charts/mod.rs
//! Chart registry: one live chart per name, each bound to a canvas mount

pub mod builders;
pub mod mounts;

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::FsOps;
use crate::types::{AnalysisResult, SkillsDatabase};
use crate::utils::{chart_file_path, epoch_millis};
use builders::ChartConfig;
use mounts::{
    find_mounts, CAREER_PATH_CANVAS, EXPERIENCE_CANVAS, MARKET_DEMAND_CANVAS, SCORE_CANVAS,
    SKILLS_CANVAS, SKILL_PROFICIENCY_CANVAS,
};

pub const SKILLS_CHART: &str = "skills";
pub const EXPERIENCE_CHART: &str = "experience";
pub const SCORES_CHART: &str = "scores";
pub const MARKET_DEMAND_CHART: &str = "marketDemand";
pub const CAREER_PATH_CHART: &str = "careerPath";
pub const SKILL_PROFICIENCY_CHART: &str = "skillProficiency";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub canvas: &'static str,
    pub config: ChartConfig,
    /// Bumped on every data update
    pub revision: u32,
    pub resize_count: u32,
}

#[derive(Debug, Default)]
pub struct ChartAdapter {
    charts: BTreeMap<String, ChartInstance>,
    destroyed: usize,
}

impl ChartAdapter {
    pub fn get(&self, name: &str) -> Option<&ChartInstance> {
        self.charts.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.charts.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ChartInstance)> {
        self.charts.iter()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Total instances torn down so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Register a chart, replacing any instance under the same name.
    fn create(&mut self, name: &str, canvas: &'static str, config: ChartConfig) {
        self.destroy_chart(name);
        app_log!(debug, "Creating chart '{}' on #{}", name, canvas);
        self.charts.insert(
            name.to_string(),
            ChartInstance {
                canvas,
                config,
                revision: 0,
                resize_count: 0,
            },
        );
    }

    /// Destroy every chart, then build each one whose mount point is in
    /// `html` and whose data is non-empty. Returns how many were created.
    pub fn init_charts(
        &mut self,
        html: &str,
        analysis: &AnalysisResult,
        database: Option<&SkillsDatabase>,
    ) -> usize {
        self.destroy_all();

        let mounts = find_mounts(html);
        let mounted = |canvas: &str| mounts.contains(canvas);

        if mounted(SKILLS_CANVAS) {
            if let Some(config) = builders::skills_chart(analysis) {
                self.create(SKILLS_CHART, SKILLS_CANVAS, config);
            }
        }
        if mounted(EXPERIENCE_CANVAS) {
            self.create(EXPERIENCE_CHART, EXPERIENCE_CANVAS, builders::experience_chart(analysis));
        }
        if mounted(SCORE_CANVAS) {
            self.create(SCORES_CHART, SCORE_CANVAS, builders::score_chart(analysis));
        }
        if mounted(MARKET_DEMAND_CANVAS) {
            if let Some(config) = builders::market_demand_chart(analysis, database) {
                self.create(MARKET_DEMAND_CHART, MARKET_DEMAND_CANVAS, config);
            }
        }
        if mounted(CAREER_PATH_CANVAS) {
            self.create(CAREER_PATH_CHART, CAREER_PATH_CANVAS, builders::career_path_chart(analysis));
        }
        if mounted(SKILL_PROFICIENCY_CANVAS) {
            let skills: Vec<_> = analysis
                .skill_categories()
                .iter()
                .flat_map(|c| c.skills.iter().cloned())
                .collect();
            if let Some(config) = builders::skill_proficiency_chart(&skills) {
                self.create(SKILL_PROFICIENCY_CHART, SKILL_PROFICIENCY_CANVAS, config);
            }
        }

        app_log!(info, "Initialized {} charts", self.charts.len());
        self.charts.len()
    }

    /// (Re)build only the market-demand chart, e.g. once the skills
    /// catalogue has arrived. Skipped when `html` lacks its mount.
    pub fn refresh_market_demand(
        &mut self,
        html: &str,
        analysis: &AnalysisResult,
        database: Option<&SkillsDatabase>,
    ) -> bool {
        if !find_mounts(html).contains(MARKET_DEMAND_CANVAS) {
            return false;
        }
        match builders::market_demand_chart(analysis, database) {
            Some(config) => {
                if self.charts.contains_key(MARKET_DEMAND_CHART) {
                    self.update_chart(MARKET_DEMAND_CHART, config.data)
                } else {
                    self.create(MARKET_DEMAND_CHART, MARKET_DEMAND_CANVAS, config);
                    true
                }
            }
            None => false,
        }
    }

    /// Swap a chart's data in place. Unknown names are ignored.
    pub fn update_chart(&mut self, name: &str, data: Value) -> bool {
        match self.charts.get_mut(name) {
            Some(chart) => {
                chart.config.data = data;
                chart.revision += 1;
                true
            }
            None => false,
        }
    }

    pub fn destroy_chart(&mut self, name: &str) -> bool {
        if self.charts.remove(name).is_some() {
            self.destroyed += 1;
            app_log!(debug, "Destroyed chart '{}'", name);
            true
        } else {
            false
        }
    }

    pub fn destroy_all(&mut self) {
        let names: Vec<String> = self.charts.keys().cloned().collect();
        for name in names {
            self.destroy_chart(&name);
        }
    }

    pub fn resize_all(&mut self) {
        for chart in self.charts.values_mut() {
            chart.resize_count += 1;
        }
    }

    /// Write one chart's configuration to `chart-<name>-<epoch-ms>.json`.
    pub async fn export_chart(&self, name: &str, output_dir: &Path) -> Result<Option<PathBuf>> {
        let Some(chart) = self.charts.get(name) else {
            return Ok(None);
        };

        let path = chart_file_path(output_dir, name, epoch_millis());
        let content = serde_json::to_string_pretty(&chart.config)
            .with_context(|| format!("Failed to serialize chart '{}'", name))?;
        FsOps::write_file_safe(&path, &content).await?;
        Ok(Some(path))
    }

    pub async fn export_all(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.charts.len());
        for name in self.charts.keys() {
            if let Some(path) = self.export_chart(name, output_dir).await? {
                written.push(path);
            }
        }
        Ok(written)
    }
}
