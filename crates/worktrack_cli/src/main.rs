//! Terminal front end for the work-location tracker.
//!
//! # Responsibility
//! - Map command-line input onto one tracker session per invocation.
//! - Render acknowledgements, the current month grid and the raw log.

mod render;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use worktrack_core::{
    init_logging, LogLevel, Roster, SessionError, TrackerConfig, TrackerSession,
    DEFAULT_DATA_FILE,
};

#[derive(Parser)]
#[command(name = "worktrack")]
#[command(about = "Log daily office/home status and view the team month", long_about = None)]
struct Cli {
    /// CSV file holding all status records.
    #[arg(long, global = true, env = "WORKTRACK_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Roster member; repeat or comma-separate to replace the default roster.
    #[arg(long = "member", global = true, env = "WORKTRACK_ROSTER", value_delimiter = ',')]
    members: Vec<String>,

    /// Absolute directory for rotating log files; logging is off without it.
    #[arg(long, global = true, env = "WORKTRACK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "WORKTRACK_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log or update a member's status for a day
    Submit {
        #[arg(long)]
        name: String,
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// WFO or WFH
        #[arg(long)]
        status: String,
    },
    /// Show the current month grid
    Calendar {
        #[arg(long)]
        json: bool,
    },
    /// Show every record, newest first
    Log,
    /// List roster members
    Roster,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = match cli.log_level.as_deref() {
            Some(level) => level.parse::<LogLevel>().map_err(|err| anyhow!(err))?,
            None => LogLevel::for_build(),
        };
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let roster = if cli.members.is_empty() {
        Roster::default()
    } else {
        Roster::new(&cli.members).context("Invalid roster")?
    };
    let config = TrackerConfig::default()
        .with_data_file(cli.data_file)
        .with_roster(roster);
    let today = Local::now().date_naive();

    let mut session = TrackerSession::open(&config)
        .with_context(|| format!("Failed to load {}", config.data_file.display()))?;

    match cli.command {
        Commands::Submit { name, date, status } => {
            let date = date.unwrap_or(today);
            match session.submit(&name, date, &status) {
                Ok(submission) => println!("{}", submission.message()),
                Err(SessionError::Validation(err)) => {
                    return Err(anyhow!("Rejected: {err}"));
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Failed to save {}", config.data_file.display())
                    });
                }
            }
        }
        Commands::Calendar { json } => {
            let view = session.current_month_view(today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::month_grid(&view));
            }
        }
        Commands::Log => print!("{}", render::raw_log(&session.raw_log())),
        Commands::Roster => {
            for member in session.roster().members() {
                println!("{member}");
            }
        }
    }

    Ok(())
}
