//! `overlap` CLI — compute when a team of instructors is free together.
//!
//! Slot rows are read as JSON (the same rows the API layer returns) and results
//! are written as pretty-printed JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Shared windows for two instructors over a week (slots on stdin)
//! overlap compute --emails a@medic.test,b@medic.test \
//!     --start 2024-06-10 --end 2024-06-16 < slots.json
//!
//! # Replay a saved team view, only windows of an hour or more
//! overlap compute --view crew.json --start 2024-06-10 --end 2024-06-16 \
//!     -i slots.json --min-duration 60
//!
//! # Raw per-instructor listings
//! overlap individual --emails a@medic.test -i slots.json --start 2024-06-10 --end 2024-06-16
//!
//! # Overlaps + individual view + totals
//! overlap report --view crew.json -i slots.json --start 2024-06-10 --end 2024-06-16 -o report.json
//!
//! # Earliest 90-minute window
//! overlap first --view crew.json -i slots.json --start 2024-06-10 --end 2024-06-30 --min-duration 90
//! ```
//!
//! Set `RUST_LOG=overlap_engine=debug` to see what the engine did on stderr.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use overlap_engine::{AvailabilitySlot, SavedView, TeamSelection};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "overlap",
    version,
    about = "Find when a team of instructors is available at the same time"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Windows in which every selected instructor is available
    Compute {
        #[command(flatten)]
        team: TeamArgs,
        /// Only keep windows lasting at least this many minutes
        #[arg(long)]
        min_duration: Option<i64>,
    },
    /// Each instructor's submitted slots, grouped by date
    Individual {
        #[command(flatten)]
        team: TeamArgs,
    },
    /// Overlaps, individual view and summary totals
    Report {
        #[command(flatten)]
        team: TeamArgs,
    },
    /// The earliest window lasting at least --min-duration minutes
    First {
        #[command(flatten)]
        team: TeamArgs,
        /// Minimum window length in minutes
        #[arg(long, default_value_t = 1)]
        min_duration: i64,
    },
}

#[derive(Args)]
struct TeamArgs {
    /// Comma-separated instructor emails
    #[arg(
        long,
        value_delimiter = ',',
        required_unless_present = "view",
        conflicts_with = "view"
    )]
    emails: Vec<String>,
    /// Saved team view file: {"id", "name", "instructor_emails"}
    #[arg(long)]
    view: Option<String>,
    /// First date of the range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    start: NaiveDate,
    /// Last date of the range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    end: NaiveDate,
    /// Slots JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { team, min_duration } => {
            let (emails, slots) = load(&team)?;
            let mut windows = overlap_engine::compute_overlaps(&emails, &slots, team.start, team.end)
                .context("Failed to compute overlaps")?;
            if let Some(min) = min_duration {
                windows.retain(|w| w.duration_minutes >= min);
            }
            write_json(team.output.as_deref(), &windows)?;
        }
        Commands::Individual { team } => {
            let (emails, slots) = load(&team)?;
            let view = overlap_engine::build_individual_view(&emails, &slots, team.start, team.end)
                .context("Failed to build individual view")?;
            write_json(team.output.as_deref(), &view)?;
        }
        Commands::Report { team } => {
            let (emails, slots) = load(&team)?;
            let selection = TeamSelection::new(&emails).context("Failed to analyze team")?;
            let report = overlap_engine::analyze_team(&selection, &slots, team.start, team.end)
                .context("Failed to analyze team")?;
            write_json(team.output.as_deref(), &report)?;
        }
        Commands::First { team, min_duration } => {
            let (emails, slots) = load(&team)?;
            let first = overlap_engine::find_first_overlap(
                &emails,
                &slots,
                team.start,
                team.end,
                min_duration,
            )
            .context("Failed to search for an overlap")?;
            write_json(team.output.as_deref(), &first)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays valid JSON. Filter comes from `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

/// Resolve the instructor emails and read the slot rows.
fn load(team: &TeamArgs) -> Result<(Vec<String>, Vec<AvailabilitySlot>)> {
    let emails = match team.view.as_deref() {
        Some(path) => {
            let raw = read_input(Some(path))?;
            let stored: SavedView = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid saved view JSON in {}", path))?;
            let view = SavedView::new(stored.id.as_str(), &stored.name, &stored.instructor_emails)
                .with_context(|| format!("Saved view '{}' cannot be used", stored.name))?;
            info!(
                view = %view.name,
                instructors = view.instructor_emails.len(),
                "loaded saved view"
            );
            view.instructor_emails
        }
        None => team.emails.clone(),
    };

    let raw = read_input(team.input.as_deref())?;
    let slots: Vec<AvailabilitySlot> =
        serde_json::from_str(&raw).context("Invalid availability slots JSON")?;
    info!(slots = slots.len(), "read availability slots");

    Ok((emails, slots))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: serde::Serialize + ?Sized>(path: Option<&str>, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
