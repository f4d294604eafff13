//! CLI front-end for the matcher.
//!
//! Feeds two line lists (or one two-column delimited file) through
//! [`upv_audit::analyze`] and renders the report: stats summary, record
//! table, orphan list. Display state lives here; the core stays UI-free.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use upv_audit::io::{export_records, load_columns};
use upv_audit::{analyze, AnalysisReport, MatchRecord, MatchStatus};

//built-in demo dataset
const SAMPLE_LINE_NUMBERS: &str = "001-001-001\n001-001-002\n001-001-003\n002-001-001\n002-001-002\n003-001-001";
const SAMPLE_FILENAMES: &str = "001-001-001.upvf\n001-001-001.upvc\n001-001-002.upvf\n002-001-001.upvf\n002-001-001.upvc\n003-001-001.upvc";

#[derive(Parser, Debug)]
#[command(
    name = "upv-audit",
    about = "Audit line-number lists against UPVF/UPVC file pairs"
)]
struct Cli {
    /// File holding the line-number list, one per line
    #[arg(
        value_name = "LINE_NUMBERS",
        required_unless_present_any = ["combined", "sample"],
        conflicts_with_all = ["combined", "sample"],
        requires = "filenames"
    )]
    identifiers: Option<PathBuf>,

    /// File holding the filename list, one per line
    #[arg(value_name = "FILENAMES")]
    filenames: Option<PathBuf>,

    /// Single delimited file carrying both columns (CSV or
    /// whitespace-separated)
    #[arg(long, value_name = "FILE", conflicts_with = "sample")]
    combined: Option<PathBuf>,

    /// Run the built-in sample dataset
    #[arg(long)]
    sample: bool,

    /// Only show records with this status (repeatable): complete,
    /// missing-upvf, missing-upvc, missing-both
    #[arg(short, long, value_name = "STATUS")]
    status: Vec<MatchStatus>,

    /// Write the (filtered) records to a CSV file
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Print the full report as JSON instead of the table
    #[arg(long)]
    json: bool,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (identifiers, filenames) = gather_inputs(cli)?;
    let report = analyze(&identifiers, &filenames)?;

    let shown: Vec<&MatchRecord> = report
        .records
        .iter()
        .filter(|r| cli.status.is_empty() || cli.status.contains(&r.status))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &shown);
    }

    if let Some(path) = &cli.out {
        let filtered: Vec<MatchRecord> = shown.iter().map(|r| (*r).clone()).collect();
        export_records(&filtered, path)?;
        eprintln!("wrote {} records to {}", filtered.len(), path.display());
    }

    Ok(())
}

fn gather_inputs(cli: &Cli) -> Result<(String, String), Box<dyn std::error::Error>> {
    if cli.sample {
        return Ok((
            SAMPLE_LINE_NUMBERS.to_string(),
            SAMPLE_FILENAMES.to_string(),
        ));
    }

    if let Some(path) = &cli.combined {
        let loaded = load_columns(path)?;
        return Ok((loaded.identifiers, loaded.filenames));
    }

    let (Some(ids), Some(files)) = (&cli.identifiers, &cli.filenames) else {
        return Err("two input files required (or use --combined / --sample)".into());
    };
    Ok((fs::read_to_string(ids)?, fs::read_to_string(files)?))
}

fn print_report(report: &AnalysisReport, shown: &[&MatchRecord]) {
    let stats = &report.stats;

    println!(
        "Analyzed {} line numbers: {} complete ({:.1}% completion rate)",
        stats.total_identifiers,
        stats.complete_matches,
        stats.completion_rate()
    );
    println!(
        "  missing upvf: {}   missing upvc: {}   missing both: {}",
        stats.missing_upvf, stats.missing_upvc, stats.missing_both
    );
    println!(
        "  orphan files: {}   duplicates: {}   blank lines: {}   malformed: {}",
        stats.orphan_files, stats.duplicate_identifiers, stats.blank_lines,
        stats.malformed_filenames
    );

    println!();
    println!(
        "{:<16} {:<12} {:<14} {:<36} {}",
        "LINE NUMBER", "PREFIX", "STATUS", "UPVF FILES", "UPVC FILES"
    );
    for record in shown {
        println!(
            "{:<16} {:<12} {:<14} {:<36} {}",
            record.identifier,
            record.prefix,
            record.status,
            record.upvf_files.join(";"),
            record.upvc_files.join(";")
        );
    }

    if !report.orphans.is_empty() {
        println!();
        println!("Orphan files ({}):", report.orphans.len());
        for orphan in &report.orphans {
            println!("  [{}] {}", orphan.kind, orphan.filename);
        }
    }
}
