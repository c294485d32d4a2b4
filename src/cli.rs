// src/cli.rs
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_log;
use crate::core::{check_api_health, ApiClient, ConfigManager, FsOps, LocalStorage, ResumeApi};
use crate::export::Exporter;
use crate::flows::{CareerFlow, ComparisonFlow, EnhancementFlow, MarketFlow};
use crate::orchestrator::{AnalysisOrchestrator, AnalysisOutcome};
use crate::report::ReportWriter;
use crate::session::Session;
use crate::types::analysis::OVERALL_SCORE;
use crate::types::{format_number, SkillsDatabase};
use crate::upload::{SelectedFile, UploadController};

#[derive(Parser)]
#[command(name = "realize")]
#[command(about = "Analyze PDF resumes against the RealiZe backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./realize.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory for reports and exports, overrides the configuration
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a resume and write an HTML report
    Analyze(AnalyzeArgs),
    /// Analyze a resume, then run a detailed comparison with a job description
    Compare {
        file: PathBuf,
        #[command(flatten)]
        job: JobDescriptionArgs,
    },
    /// Analyze a resume, then request career suggestions
    Career { file: PathBuf },
    /// Check that the backend answers on /health
    Health,
    /// Print the skills database grouped by category
    SkillsDb {
        /// Print the raw JSON payload
        #[arg(long)]
        json: bool,
    },
    /// List saved analyses, newest first
    History {
        /// Remove every saved analysis
        #[arg(long)]
        clear: bool,
    },
    /// Show, replace or clear the saved job description
    JobDescription {
        #[command(subcommand)]
        action: JobDescriptionAction,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    pub file: PathBuf,

    #[command(flatten)]
    pub job: JobDescriptionArgs,

    /// Also request career suggestions
    #[arg(long)]
    pub career: bool,

    /// Also show client-side skill enhancement suggestions
    #[arg(long)]
    pub enhance: bool,

    /// Also compare skills with market demand
    #[arg(long)]
    pub market: bool,

    /// Write the analysis as JSON next to the report
    #[arg(long)]
    pub export: bool,

    /// Write each chart configuration as JSON
    #[arg(long)]
    pub export_charts: bool,
}

#[derive(Args)]
pub struct JobDescriptionArgs {
    /// Job description text
    #[arg(long, conflicts_with = "job_file")]
    pub job: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    pub job_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum JobDescriptionAction {
    /// Print the saved job description
    Show,
    /// Save a new job description
    Set { text: String },
    /// Remove the saved job description
    Clear,
}

impl JobDescriptionArgs {
    async fn resolve(&self) -> Result<Option<String>> {
        match (&self.job, &self.job_file) {
            (Some(text), _) => Ok(Some(text.clone())),
            (None, Some(path)) => Ok(Some(FsOps::read_file_safe(path).await?)),
            (None, None) => Ok(None),
        }
    }
}

/// Prints toasts shown since the last call.
#[derive(Default)]
struct ToastPrinter {
    errors_seen: usize,
    successes_seen: usize,
}

impl ToastPrinter {
    fn flush(&mut self, session: &Session) {
        let toasts = &session.toasts;
        if toasts.success.shown_count() > self.successes_seen {
            self.successes_seen = toasts.success.shown_count();
            if let Some(message) = toasts.success.message() {
                println!("✅ {}", message);
            }
        }
        if toasts.error.shown_count() > self.errors_seen {
            self.errors_seen = toasts.error.shown_count();
            if let Some(message) = toasts.error.message() {
                eprintln!("❌ {}", message);
            }
        }
    }
}

pub async fn handle_command(cli: Cli, config: &ConfigManager) -> Result<()> {
    let api_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.service.api_base_url.clone());
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.environment.output_dir.clone());
    FsOps::ensure_dir_exists(&output_dir).await?;

    let api: Arc<dyn ResumeApi> = Arc::new(ApiClient::new(
        api_url.trim_end_matches('/'),
        config.service.timeout_seconds,
    )?);
    let storage = LocalStorage::open(&config.storage_path()).await?;
    let mut session = Session::open(api, storage, output_dir).await;

    let result = dispatch(cli.command, &mut session).await;
    session.storage.close().await;
    result
}

async fn dispatch(command: Command, session: &mut Session) -> Result<()> {
    let mut toasts = ToastPrinter::default();

    match command {
        Command::Analyze(args) => {
            if let Some(text) = args.job.resolve().await? {
                session.set_job_description(text).await;
            }
            analyze_file(session, &args.file, &mut toasts).await?;

            if args.market && MarketFlow::compare_with_market_demand(session).await {
                println!("Market demand comparison added");
            }
            if args.enhance {
                let count = EnhancementFlow::show(session);
                println!("{} enhancement suggestions", count);
            }
            if args.career {
                CareerFlow::generate(session).await;
                toasts.flush(session);
            }
            if args.export {
                if let Some(path) = Exporter::export_results(session).await {
                    println!("Analysis exported: {}", path.display());
                }
                toasts.flush(session);
            }
            if args.export_charts {
                let paths = session.charts.export_all(&session.output_dir).await?;
                for path in paths {
                    println!("Chart exported: {}", path.display());
                }
            }
            write_report(session).await
        }

        Command::Compare { file, job } => {
            let Some(text) = job.resolve().await? else {
                bail!("Provide a job description with --job or --job-file");
            };
            // The detailed comparison below is the only comparison request.
            session.page.job_description.clear();
            analyze_file(session, &file, &mut toasts).await?;
            session.set_job_description(text).await;

            let compared = ComparisonFlow::compare(session).await;
            toasts.flush(session);
            if let Some(comparison) = session.state.job_comparison.as_ref().filter(|_| compared) {
                println!("Match score: {}%", format_number(comparison.match_score));
            }
            write_report(session).await
        }

        Command::Career { file } => {
            analyze_file(session, &file, &mut toasts).await?;
            let generated = CareerFlow::generate(session).await;
            toasts.flush(session);
            if !generated {
                bail!("Career suggestions unavailable");
            }
            write_report(session).await
        }

        Command::Health => {
            if check_api_health(session.api.as_ref()).await {
                println!("✅ Backend is healthy");
                Ok(())
            } else {
                bail!("Backend health check failed")
            }
        }

        Command::SkillsDb { json } => {
            let payload = session
                .api
                .skills_database()
                .await
                .context("Failed to load skills database")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&payload)?);
                return Ok(());
            }
            let database: SkillsDatabase =
                serde_json::from_value(payload).context("Malformed skills database")?;
            for (key, category) in database.categories() {
                let title = if category.name.is_empty() { key } else { &category.name };
                println!("{} ({} skills)", title, category.skills.len());
                for skill in &category.skills {
                    let demand = skill
                        .demand_level()
                        .map(|level| level.label())
                        .unwrap_or("Unknown");
                    println!("   {} - {} demand", skill.name, demand);
                }
            }
            Ok(())
        }

        Command::History { clear } => {
            if clear {
                session.clear_history().await;
                println!("History cleared");
                return Ok(());
            }
            if session.state.history.is_empty() {
                println!("No saved analyses");
            }
            for (index, entry) in session.state.history.entries().iter().enumerate() {
                println!(
                    "{:>2}. {}  overall {}  level {}",
                    index + 1,
                    entry.timestamp,
                    format_number(entry.analysis.score(OVERALL_SCORE)),
                    entry.analysis.estimated_level().unwrap_or("Unknown")
                );
            }
            Ok(())
        }

        Command::JobDescription { action } => {
            match action {
                JobDescriptionAction::Show => {
                    if session.page.job_description.is_empty() {
                        println!("No saved job description");
                    } else {
                        println!("{}", session.page.job_description);
                    }
                }
                JobDescriptionAction::Set { text } => {
                    session.set_job_description(text).await;
                    println!("Job description saved");
                }
                JobDescriptionAction::Clear => {
                    session.forget_job_description().await;
                    session.page.job_description.clear();
                    println!("Job description cleared");
                }
            }
            Ok(())
        }
    }
}

async fn analyze_file(session: &mut Session, path: &Path, toasts: &mut ToastPrinter) -> Result<()> {
    let file = SelectedFile::from_path(path).await?;
    let accepted = UploadController::select_file(session, file);
    toasts.flush(session);
    if !accepted {
        bail!("{} was rejected", path.display());
    }

    let outcome = AnalysisOrchestrator::start(session).await;
    toasts.flush(session);
    match outcome {
        AnalysisOutcome::Completed { compared } => {
            app_log!(info, "Analysis of {} completed (compared: {})", path.display(), compared);
            if let Some(analysis) = session.state.analysis_results.as_ref() {
                println!(
                    "Overall score: {}",
                    format_number(analysis.score(OVERALL_SCORE))
                );
            }
            Ok(())
        }
        AnalysisOutcome::Failed(message) => bail!("Analysis failed: {}", message),
        AnalysisOutcome::Rejected => bail!("Analysis was not started"),
    }
}

async fn write_report(session: &Session) -> Result<()> {
    let path = ReportWriter::write(session).await?;
    println!("Report written: {}", path.display());
    Ok(())
}
