//! dumpcells - dump the intermediate extraction stages as CSV.
//!
//! Writes `<stem>_fragments.csv`, `<stem>_rectangles.csv` and
//! `<stem>_cells.csv` for each input. The cell dump is what the anchor
//! coordinates get recalibrated against when a report layout drifts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use udise_core::api::{ReportOptions, parse_report, split_pages};
use udise_core::converter::{write_cells, write_fragments, write_rectangles};
use udise_core::error::Result;

/// Dump the fragment, rectangle and joined-cell stages of a report as CSV.
#[derive(Parser, Debug)]
#[command(name = "dumpcells")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more decoded content-stream text files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Directory to write output files to (default: next to each input)
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,
}

fn process_file(path: &PathBuf, args: &Args) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let pages = split_pages(&text);
    let report = parse_report(&pages, &ReportOptions::default())?;

    let out_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => path.parent().map(PathBuf::from).unwrap_or_default(),
    };
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());

    write_fragments(&report.fragments, &out_dir.join(format!("{stem}_fragments.csv")))?;
    write_rectangles(
        &report.rectangles,
        &out_dir.join(format!("{stem}_rectangles.csv")),
    )?;
    write_cells(&report.cells, &out_dir.join(format!("{stem}_cells.csv")))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: file not found: {}", path.display());
            return ExitCode::FAILURE;
        }
        if let Err(e) = process_file(path, &args) {
            eprintln!("Error processing {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
