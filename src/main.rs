//! nasstats — media storage and duplicate report for a NAS share.
//!
//! Thin binary entry point. All logic lives in the `nasstats-core` crate.

use anyhow::Context;
use clap::{Parser, Subcommand};
use nasstats_core::model::size::{format_count, format_size};
use nasstats_core::platform::SystemVolumes;
use nasstats_core::report::Report;
use nasstats_core::{RunOutcome, ScanConfig, Stage, DEFAULT_REPORT_FILE};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "nasstats",
    version,
    about = "Scan Media* directories under the current directory and write a JSON storage report"
)]
struct Cli {
    /// Report file to write (or edit, for `forget`)
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Remove a deleted file from the duplicate list of an existing report
    Forget {
        /// Location exactly as it appears in the report
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Command::Forget { path }) => forget(&cli.output, &path),
        None => generate(&cli.output),
    }
}

fn generate(output: &Path) -> anyhow::Result<()> {
    let config = ScanConfig::current_dir().context("cannot determine working directory")?;

    let outcome = nasstats_core::run(&config, output, &SystemVolumes, &|stage| match stage {
        Stage::Scanning { .. } => println!("Scanning for media files..."),
        Stage::Writing { output } => println!("Writing media stats to {}...", output.display()),
    })
    .with_context(|| format!("failed to generate report for {}", config.root.display()))?;

    match outcome {
        RunOutcome::NoMediaDirectories => {
            println!(
                "No Media directories found in {}!",
                config.root.display()
            );
        }
        RunOutcome::NoMediaFiles => println!("No media files found in Media directories!"),
        RunOutcome::Written {
            output,
            total_files,
            total_bytes,
            duplicates,
            skipped,
            walk_errors,
        } => {
            println!(
                "Media stats written to '{}' with {} files found ({})",
                output.display(),
                format_count(total_files),
                format_size(total_bytes)
            );
            if duplicates > 0 {
                println!("Found {duplicates} duplicate file names");
            }
            if skipped > 0 {
                println!("Skipped {skipped} unreadable files");
            }
            if walk_errors > 0 {
                println!("Could not read {walk_errors} directories or entries");
            }
        }
    }
    Ok(())
}

fn forget(report_path: &Path, location: &str) -> anyhow::Result<()> {
    let mut report = Report::load(report_path)
        .with_context(|| format!("failed to read {}", report_path.display()))?;
    let touched = report.forget_location(location);
    if touched == 0 {
        println!("{location} is not listed as a duplicate; report unchanged");
        return Ok(());
    }
    report
        .save(report_path)
        .with_context(|| format!("failed to update {}", report_path.display()))?;
    println!(
        "Removed {location} from {touched} duplicate entries in {}",
        report_path.display()
    );
    Ok(())
}
