//! `rota` CLI — expand service definitions and resolve team schedules from
//! the command line.
//!
//! A planner/debugging tool layered on the engine: feed it the JSON snapshots
//! the datastore would supply and inspect what the UI would show.
//!
//! ## Usage
//!
//! ```sh
//! # Expand definitions over a range (stdin → stdout)
//! cat definitions.json | rota expand --start 2026-01-01 --end 2026-01-31
//!
//! # Expand from file to file, pre-filtered by campus and category
//! rota expand -i definitions.json -o occurrences.json \
//!   --start 2026-01-01 --end 2026-03-31 --campus north --category worship
//!
//! # Resolve a rotation's entries for one campus
//! rota resolve -i entries.json --rotation 2026-T1 --campus north
//!
//! # Who is scheduled on a specific date?
//! rota resolve -i entries.json --campus north --date 2026-02-01
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use rota_engine::filter::{DefinitionQuery, EntryQuery};
use rota_engine::model::{ScheduleEntry, ServiceDefinition};
use rota_engine::range::parse_date;

#[derive(Parser)]
#[command(
    name = "rota",
    version,
    about = "Occurrence expansion and schedule resolution for team rotations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand service definitions into dated occurrences within a range
    Expand {
        /// Input JSON file with an array of definitions (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Range start, ISO date (inclusive)
        #[arg(long)]
        start: String,
        /// Range end, ISO date (inclusive)
        #[arg(long)]
        end: String,
        /// Keep only definitions for this campus (shared ones included)
        #[arg(long)]
        campus: Option<String>,
        /// Keep only definitions with this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Resolve schedule entries to the applicable assignment(s)
    Resolve {
        /// Input JSON file with an array of entries (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Keep only entries of this rotation period before resolving
        #[arg(long)]
        rotation: Option<String>,
        /// Campus to resolve for; omitted means the unfiltered "list" view
        #[arg(long)]
        campus: Option<String>,
        /// Resolve a single date instead of the whole set
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            input,
            output,
            start,
            end,
            campus,
            category,
        } => {
            let json = read_input(input.as_deref())?;
            let definitions: Vec<ServiceDefinition> =
                serde_json::from_str(&json).context("Failed to parse definitions JSON")?;

            let definitions = if campus.is_some() || category.is_some() {
                DefinitionQuery {
                    campus_id: campus,
                    category,
                }
                .apply(&definitions)
            } else {
                definitions
            };

            let range_start = parse_date(&start).context("Invalid --start")?;
            let range_end = parse_date(&end).context("Invalid --end")?;

            let occurrences =
                rota_engine::expand_definitions(&definitions, range_start, range_end);
            let rendered = serde_json::to_string_pretty(&occurrences)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Resolve {
            input,
            output,
            rotation,
            campus,
            date,
        } => {
            let json = read_input(input.as_deref())?;
            let entries: Vec<ScheduleEntry> =
                serde_json::from_str(&json).context("Failed to parse entries JSON")?;

            let entries = match rotation {
                Some(rotation_period) => EntryQuery {
                    rotation_period,
                    campus_id: campus.clone(),
                }
                .apply(&entries),
                None => entries,
            };

            let rendered = match date {
                Some(date) => {
                    let date = parse_date(&date).context("Invalid --date")?;
                    let winner = rota_engine::entry_for_date(&entries, date, campus.as_deref());
                    serde_json::to_string_pretty(&winner)?
                }
                None => {
                    let resolved = rota_engine::applicable_entries(&entries, campus.as_deref());
                    serde_json::to_string_pretty(&resolved)?
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Read from a file when a path is given, otherwise from stdin.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("Failed to read {}", p)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Write to a file when a path is given, otherwise to stdout.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, content).with_context(|| format!("Failed to write {}", p)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
