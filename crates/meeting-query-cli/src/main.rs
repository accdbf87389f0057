//! `meetq` CLI — find meeting times from a JSON day of busy events.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots (stdin → stdout, JSON)
//! cat day.json | meetq find
//!
//! # Read from a file, print sorted human-readable slots
//! meetq find -i day.json --sort --format text
//!
//! # Validate an input document without solving it
//! meetq check -i day.json
//!
//! # Show resolver decisions on stderr
//! RUST_LOG=meeting_query=debug meetq find -i day.json
//! ```
//!
//! ## Input
//!
//! ```json
//! {
//!   "events": [
//!     { "name": "Standup", "when": { "start": "09:00", "end": "09:30" }, "attendees": ["alice"] }
//!   ],
//!   "request": { "attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30 }
//! }
//! ```
//!
//! Range bounds may be minutes since midnight or `HH:MM` text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_query::{query_detailed, Attendance, Event, MeetingOptions, MeetingRequest};
use serde::Deserialize;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find free meeting times around attendees' busy events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log resolver decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every free range that fits the request
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Sort slots by start time
        #[arg(long)]
        sort: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Validate an input document and summarize it
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// The document `find` and `check` read.
#[derive(Deserialize)]
struct QueryInput {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            sort,
            format,
        } => {
            let doc = read_document(input.as_deref())?;
            let mut options = query_detailed(&doc.events, &doc.request);
            if sort {
                options.slots.sort();
            }
            debug!(slots = options.slots.len(), "query finished");

            let rendered = match format {
                Format::Json => {
                    let mut json = serde_json::to_string_pretty(&options)
                        .context("Failed to serialize meeting options")?;
                    json.push('\n');
                    json
                }
                Format::Text => render_text(&options),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let doc = read_document(input.as_deref())?;
            println!("Events:              {}", doc.events.len());
            println!("Attendees:           {}", doc.request.attendees().len());
            println!(
                "Optional attendees:  {}",
                doc.request.optional_attendees().len()
            );
            println!("Duration:            {} min", doc.request.duration());
        }
    }

    Ok(())
}

/// Install a stderr subscriber so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "meeting_query=debug,meetq=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn render_text(options: &MeetingOptions) -> String {
    if options.slots.is_empty() {
        return "no available times\n".to_string();
    }
    let mut out = String::new();
    if options.attendance == Attendance::MandatoryOnly {
        out.push_str("# optional attendees dropped\n");
    }
    for slot in &options.slots {
        out.push_str(&format!("{} ({} min)\n", slot, slot.duration()));
    }
    out
}

fn read_document(path: Option<&str>) -> Result<QueryInput> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse meeting query document")
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
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
