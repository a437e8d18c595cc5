//! cronboard - job scheduling dashboard.
//!
//! Usage:
//!   cronboard jobs                         List jobs with their status
//!   cronboard occurrences [--job ID]       Print the projected calendar
//!   cronboard cron --at TIME --repeat P    Build a cron expression from a date
//!   cronboard next EXPR [--count N]        Print upcoming fire times
//!   cronboard dashboard                    Run the terminal dashboard

use chrono::Utc;
use clap::{Parser, Subcommand};
use cronboard::{
    Board, BoardConfig, CronSchedule, FixtureLoader, FixtureSource, InMemoryJobStore, JobId,
    Projector, RepeatPattern, SystemClock, date_to_cron, job_status, parse_timestamp,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Default configuration file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "cronboard.yaml";

/// cronboard - cron projection and job calendar
#[derive(Parser)]
#[command(name = "cronboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "CRONBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Fixture directory or base URL, overriding the configuration
    #[arg(short, long, global = true, value_name = "DIR_OR_URL")]
    fixtures: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List jobs with status, schedule and request
    Jobs,

    /// Print projected occurrences
    Occurrences {
        /// Only show occurrences of this job
        #[arg(long, value_name = "JOB_ID")]
        job: Option<String>,
    },

    /// Build a cron expression from a date and a repeat pattern
    Cron {
        /// Anchor date (RFC 3339, or local time in --tz)
        #[arg(long)]
        at: String,

        /// none, daily, every3days, weekly, monthly, 3monthly, 6monthly, yearly or custom
        #[arg(long, default_value = "daily")]
        repeat: String,

        /// Timezone the anchor is read in
        #[arg(long)]
        tz: Option<String>,

        /// Expression to use with --repeat custom
        #[arg(long)]
        custom: Option<String>,
    },

    /// Print the next fire times of a cron expression
    Next {
        /// Cron expression (5 or 6 fields, or a shortcut like @daily)
        #[arg(value_name = "EXPR")]
        expression: String,

        /// Timezone the expression is evaluated in
        #[arg(long)]
        tz: Option<String>,

        /// How many fire times to print
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Run the terminal dashboard
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The dashboard owns the terminal; only install logging for the other commands.
    if !matches!(cli.command, Commands::Dashboard) {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = load_config(cli.config.as_deref(), cli.fixtures.as_deref())?;

    match cli.command {
        Commands::Jobs => {
            list_jobs(&config).await?;
        }
        Commands::Occurrences { job } => {
            list_occurrences(&config, job.map(JobId::from)).await?;
        }
        Commands::Cron {
            at,
            repeat,
            tz,
            custom,
        } => {
            let tz = tz.unwrap_or_else(|| config.default_timezone.clone());
            print_cron(&at, &repeat, &tz, custom.as_deref())?;
        }
        Commands::Next {
            expression,
            tz,
            count,
        } => {
            let tz = tz.unwrap_or_else(|| config.default_timezone.clone());
            print_next(&expression, &tz, count)?;
        }
        Commands::Dashboard => {
            run_dashboard(&config).await?;
        }
    }

    Ok(())
}

/// Load the configuration file, if any, and apply CLI overrides.
fn load_config(
    path: Option<&Path>,
    fixtures: Option<&str>,
) -> Result<BoardConfig, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => BoardConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => BoardConfig::load(DEFAULT_CONFIG_FILE)?,
        None => BoardConfig::default(),
    };

    if let Some(fixtures) = fixtures {
        config.fixtures = FixtureSource::parse(fixtures).into();
    }

    Ok(config)
}

fn build_loader(config: &BoardConfig) -> Result<FixtureLoader, Box<dyn std::error::Error>> {
    let loader = FixtureLoader::new(FixtureSource::from(&config.fixtures))?
        .with_default_timezone(config.default_timezone.clone());
    Ok(loader)
}

fn build_board(config: &BoardConfig) -> Board {
    let projector = Projector::new(Arc::new(SystemClock))
        .with_occurrences_per_job(config.occurrences_per_job);
    Board::new(Arc::new(InMemoryJobStore::new()), projector)
}

/// List jobs with their table status.
async fn list_jobs(config: &BoardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let loader = build_loader(config)?;
    let jobs = loader.load_jobs().await;

    if jobs.is_empty() {
        println!("No jobs found in {}", loader.source());
        return Ok(());
    }

    println!("Jobs in {}:", loader.source());
    println!();

    let now = Utc::now();
    for job in &jobs {
        println!("ID: {}", job.id());
        println!("  Name: {}", job.title());
        if !job.description().is_empty() {
            println!("  Description: {}", job.description());
        }
        println!("  Status: {}", job_status(job, now));
        println!("  Schedule: {} ({})", job.schedule_label(), job.zone_id());
        if let Some(request) = job.request() {
            println!("  Request: {}", request.summary());
            for header in &request.http_headers {
                println!("    {}: {}", header.key, header.value);
            }
        }
        println!();
    }

    Ok(())
}

/// Print the projected calendar.
async fn list_occurrences(
    config: &BoardConfig,
    job: Option<JobId>,
) -> Result<(), Box<dyn std::error::Error>> {
    let loader = build_loader(config)?;
    let mut board = build_board(config);
    let count = board.reload_from(&loader).await?;
    info!(jobs = count, "Projected calendar");

    let occurrences: Vec<_> = board
        .occurrences()
        .iter()
        .filter(|o| job.as_ref().is_none_or(|id| &o.job_id == id))
        .collect();

    if occurrences.is_empty() {
        match job {
            Some(id) => warn!(job_id = %id, "No occurrences for job"),
            None => println!("No occurrences"),
        }
        return Ok(());
    }

    for occurrence in occurrences {
        println!(
            "{:<28} {:<20} {:<8} {}",
            occurrence.id.as_str(),
            occurrence.start.to_rfc3339(),
            occurrence.status,
            occurrence.title
        );
    }

    Ok(())
}

/// Print the cron expression for an anchor date and repeat pattern.
fn print_cron(
    at: &str,
    repeat: &str,
    tz: &str,
    custom: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pattern = RepeatPattern::from_keyword(repeat, custom)?;
    let anchor = parse_timestamp(at, tz)?;
    let zone: chrono_tz::Tz = tz
        .parse()
        .map_err(|_| format!("invalid timezone: {}", tz))?;

    match date_to_cron(&anchor.with_timezone(&zone), &pattern) {
        Some(expression) => println!("{}", expression),
        None => println!("(no repeat)"),
    }

    Ok(())
}

/// Print the next fire times of an expression.
fn print_next(expression: &str, tz: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = CronSchedule::with_timezone(expression, tz)?;
    let zone = schedule.timezone();

    for at in schedule.next_n_after(Utc::now(), count) {
        println!("{}  ({})", at.to_rfc3339(), at.with_timezone(&zone).format("%a %Y-%m-%d %H:%M %Z"));
    }

    Ok(())
}

/// Run the terminal dashboard.
async fn run_dashboard(config: &BoardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let loader = build_loader(config)?;
    let app = cronboard::tui::App::new(build_board(config), loader).await;
    cronboard::tui::run(app, config.refresh_interval()).await?;
    Ok(())
}
