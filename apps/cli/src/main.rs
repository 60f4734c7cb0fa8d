//! fix-headings: disambiguate repeated README headings.
//!
//! Appends the enclosing job's label to repeated `####` headings and
//! overwrites the document in place.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
