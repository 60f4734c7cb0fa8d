//! CLI definition, tracing setup, and change reporting.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use headingfix_markdown::{Disambiguation, Disambiguator, fix_file};
use headingfix_shared::load_config;
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Append job labels to repeated headings so every section gets a unique anchor.
#[derive(Parser)]
#[command(
    name = "fix-headings",
    version,
    about = "Disambiguate repeated #### headings by appending the enclosing job label.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Markdown file to rewrite in place.
    #[arg(default_value = "README.md")]
    pub path: PathBuf,

    /// TOML file replacing the built-in job table.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report the changes without writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr; stdout carries only the change report.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "headingfix=info,fix_headings=info",
        1 => "headingfix=debug,fix_headings=debug",
        _ => "headingfix=trace,fix_headings=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Run the disambiguation and print the change report to stdout.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let disambiguator = Disambiguator::new(config)?;

    info!(
        path = %cli.path.display(),
        dry_run = cli.dry_run,
        "disambiguating headings"
    );

    let result = fix_file(&cli.path, &disambiguator, !cli.dry_run)?;

    let stdout = std::io::stdout();
    report(&result, cli.dry_run, &mut stdout.lock()).wrap_err("failed to write report")?;

    Ok(())
}

/// Print one `Line N: old -> new` entry per change, then `Done!`.
fn report<W: Write>(result: &Disambiguation, dry_run: bool, out: &mut W) -> std::io::Result<()> {
    for change in &result.changes {
        writeln!(out, "{change}")?;
    }
    if dry_run {
        writeln!(out, "Dry run: {} heading(s) not written.", result.changes.len())?;
    }
    writeln!(out, "Done!")
}
