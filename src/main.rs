// LogCellar - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (flags and environment variables)
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. One archiver run and the exit-code mapping:
//    0 = success / nothing to archive, 2 = source missing, 1 = anything else

use clap::Parser;
use logcellar::app::{archiver, demo};
use logcellar::core::matcher::{Clock, SystemClock};
use logcellar::core::model::RunOutcome;
use logcellar::platform::config::{self, AppConfig, PlatformPaths};
use logcellar::util::{self, constants};
use std::path::PathBuf;
use std::process::ExitCode;

/// LogCellar - daily log archiver.
///
/// Bundles the log files of one calendar day (default: yesterday) into
/// `logs_<date>.tar.gz` and removes the originals once the archive is safely
/// written.
#[derive(Parser, Debug)]
#[command(name = "logcellar", version, about)]
struct Cli {
    /// Directory scanned for log files [default: ./app_logs].
    #[arg(short = 's', long = "source-dir", env = constants::ENV_SOURCE_DIR)]
    source_dir: Option<PathBuf>,

    /// Directory the archive is written into [default: ./backups].
    #[arg(short = 'o', long = "dest-dir", env = constants::ENV_DEST_DIR)]
    dest_dir: Option<PathBuf>,

    /// Day to archive, as YYYY-MM-DD [default: yesterday].
    #[arg(long = "date", value_name = "YYYY-MM-DD", env = constants::ENV_TARGET_DATE)]
    date: Option<String>,

    /// Config file (defaults to config.toml in the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Create the source directory if it does not exist.
    #[arg(long = "create-dirs")]
    create_dirs: bool,

    /// Write dummy log files into the source directory before running.
    #[arg(long = "seed-demo", conflicts_with = "dry_run")]
    seed_demo: bool,

    /// List what would be archived without writing or deleting anything.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Print the run outcome as JSON on stdout.
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can take effect;
    // its warnings are emitted once the subscriber is up.
    let (config_path, explicit) = match cli.config.clone() {
        Some(path) => (path, true),
        None => (PlatformPaths::resolve().config_file(), false),
    };
    let (app_config, config_warnings) = config::load_config(&config_path, explicit);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        config = %config_path.display(),
        "LogCellar starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    match run(&cli, &app_config) {
        Ok(outcome) => {
            print_outcome(&outcome, cli.json);
            tracing::info!("Log archive run finished successfully");
            ExitCode::from(constants::EXIT_OK)
        }
        Err(e) => {
            let kind = e.kind();
            tracing::error!(error = %e, kind = ?kind, "Log archive run failed");
            eprintln!("Error: {e}");
            ExitCode::from(kind.exit_code())
        }
    }
}

/// Resolve the job from CLI/env, config, and clock, then run it.
fn run(cli: &Cli, app_config: &AppConfig) -> util::error::Result<RunOutcome> {
    let clock = SystemClock;
    let overrides = archiver::JobOverrides {
        source_dir: cli.source_dir.clone(),
        dest_dir: cli.dest_dir.clone(),
        target_date: cli.date.clone(),
        create_source_dir: cli.create_dirs || cli.seed_demo,
        dry_run: cli.dry_run,
    };
    let job = archiver::resolve_job(&overrides, app_config, &clock)?;

    if cli.seed_demo {
        demo::seed_demo_files(&job.source_dir, job.target_date, clock.today())?;
    }

    Ok(archiver::run(&job)?)
}

fn print_outcome(outcome: &RunOutcome, json: bool) {
    if !json {
        println!("{}", outcome.summary());
        return;
    }
    match serde_json::to_string_pretty(outcome) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialise outcome; printing summary");
            println!("{}", outcome.summary());
        }
    }
}
