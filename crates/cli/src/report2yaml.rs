//! report2yaml - extract a UDISE school report into YAML.
//!
//! Takes the decoded content-stream text of one or more reports (pages
//! separated by form feeds) and writes `<stem>.yml` plus
//! `<stem>_enrollment.html` next to each input, with optional CSV dumps of
//! the intermediate stages.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use udise_core::api::{ReportOptions, parse_report, split_pages, write_report_files};
use udise_core::error::Result;
use udise_core::settings::{DEFAULT_MATCH_THRESHOLD, DEFAULT_PAGE, ExtractSettings};
use udise_core::template::Template;

/// Extract a UDISE school report into YAML.
#[derive(Parser, Debug)]
#[command(name = "report2yaml")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more decoded content-stream text files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// YAML template giving the output shape (default: empty)
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Directory to write output files to (default: next to each input)
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Also write the fragment/rectangle/cell CSV dumps
    #[arg(long = "dump-csv", action = ArgAction::SetTrue)]
    dump_csv: bool,

    /// 1-indexed page holding the enrollment table
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,

    /// Maximum X distance when matching numbers to grade columns
    #[arg(long = "match-threshold", default_value_t = DEFAULT_MATCH_THRESHOLD)]
    match_threshold: f64,
}

fn build_options(args: &Args) -> Result<ReportOptions> {
    let template = match &args.template {
        Some(path) => Template::load(path)?,
        None => Template::empty(),
    };
    Ok(ReportOptions {
        settings: ExtractSettings {
            page: args.page,
            match_threshold: args.match_threshold,
            ..ExtractSettings::default()
        },
        template,
        dump_csv: args.dump_csv,
    })
}

fn process_file(path: &PathBuf, options: &ReportOptions, args: &Args) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let pages = split_pages(&text);
    let report = parse_report(&pages, options)?;

    let out_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => path.parent().map(PathBuf::from).unwrap_or_default(),
    };
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());

    write_report_files(&report, options, &out_dir, &stem)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = match build_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: file not found: {}", path.display());
            return ExitCode::FAILURE;
        }
        if let Err(e) = process_file(path, &options, &args) {
            eprintln!("Error processing {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
