mod cli;
mod error;
mod metadata;
mod tag;

use anyhow::Context;
use clap::Parser;

use crate::cli::Cli;
use crate::metadata::Metadata;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    log::info!("input file: {}", cli.input.display());
    if cli.strip {
        log::debug!("--strip has no effect; existing tags are always replaced");
    }

    // Cover art is pulled into memory up front so a bad --art path fails the
    // run before the audio file is touched.
    let metadata = Metadata::from_cli(cli)?;

    let mut writer = tag::open(&cli.input)
        .with_context(|| format!("cannot open {}", cli.input.display()))?;

    tag::apply(&metadata, writer.as_mut())
        .with_context(|| format!("cannot write tags to {}", cli.input.display()))?;

    Ok(())
}
