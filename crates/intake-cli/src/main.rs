//! Service Request Intake CLI
//!
//! Thin wrapper around intake-core for running the form without a window.
//!
//! ## Usage
//!
//! ```bash
//! # Show which fields each step asks for
//! intake steps
//!
//! # Print an empty answers file
//! intake template > answers.json
//!
//! # Run an answers file through every step
//! intake submit answers.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intake_core::logging::setup_logging;
use intake_core::{
    summary_json, summary_text, Answers, IntakeRecord, ReplayOutcome, Step, TOTAL_STEPS,
};

/// Service Request Intake
#[derive(Parser)]
#[command(name = "intake")]
#[command(version = "0.1.0")]
#[command(about = "New Service Request - headless form driver")]
#[command(
    long_about = "Runs a JSON answers file through the same three-step form, validators and summary used by the desktop app."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the steps and the fields each one owns
    Steps,

    /// Print an empty answers file
    Template,

    /// Validate and submit an answers file
    Submit {
        /// Path to a JSON object keyed by camelCase field names
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Steps => {
            println!("{} steps", TOTAL_STEPS);
            for step in Step::all() {
                println!();
                println!("{}", step);
                for field in step.fields() {
                    let marker = if step.validated_fields().contains(field) {
                        ""
                    } else {
                        " (optional)"
                    };
                    println!("  {:<20} {}{}", field.key(), field.label(), marker);
                }
            }
        }

        Commands::Template => {
            let json = serde_json::to_string_pretty(&IntakeRecord::new())
                .context("Failed to render template")?;
            println!("{}", json);
        }

        Commands::Submit { path } => {
            let answers = Answers::load(&path)
                .with_context(|| format!("Failed to read answers from {}", path.display()))?;
            tracing::info!("Loaded {} answers from {}", answers.len(), path.display());

            match answers.replay().context("Failed to run answers")? {
                ReplayOutcome::Completed(nav) => {
                    println!("Thank You! Your Request Has Been Submitted.");
                    if let Some(at) = nav.completed_at() {
                        println!("Submitted at {}", at.format("%Y-%m-%d %H:%M"));
                    }
                    println!();
                    println!("{}", summary_text(nav.record()));
                    println!();
                    println!("{}", summary_json(nav.record())?);
                }
                ReplayOutcome::Blocked { step, errors } => {
                    println!("{}", step);
                    println!("{}", errors);
                    anyhow::bail!("{} did not validate ({} errors)", step, errors.len());
                }
            }
        }
    }

    Ok(())
}
