//! Charvocab CLI - build a character vocabulary from speech manifests.
//!
//! This is the main entry point for the `build-vocab` command-line tool.

mod commands;

use clap::Parser;
use commands::BuildCommand;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cmd = BuildCommand::parse();
    commands::build::run(cmd)?;

    Ok(())
}
