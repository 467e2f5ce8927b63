use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use bestiary::harness::{self, Suite};
use bestiary::{output, suites};

/// Bestiary - Check that every animal makes the right sound, eats the right food
/// and knows its tricks
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Suite files or directories (runs the built-in suites when empty)
    paths: Vec<PathBuf>,

    /// Output in JSON format
    #[arg(short = 'j', long)]
    json: bool,

    /// Only run suites with these names
    #[arg(short = 's', long = "suite", value_name = "NAME")]
    suites: Vec<String>,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn load_suites(cli: &Cli) -> Result<Vec<Suite>> {
    let mut all_suites = Vec::new();

    if cli.paths.is_empty() {
        all_suites = harness::builtin_suites();
    }
    for path in &cli.paths {
        all_suites.extend(suites::load_path(path)?);
    }

    let selected = suites::filter_suites(all_suites, &cli.suites)?;
    if selected.is_empty() {
        bail!("No suites to run");
    }
    Ok(selected)
}

// Returns whether every case passed
fn run(cli: &Cli) -> Result<bool> {
    let selected = load_suites(cli)?;
    tracing::info!(count = selected.len(), "running suites");

    let report = harness::run_all(&selected)?;

    // Output the results
    if cli.json {
        output::output_json(&report)?;
    } else {
        output::output_text(&report)?;
    }

    Ok(report.is_success())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match init_tracing(cli.verbose).and_then(|()| run(&cli)) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
