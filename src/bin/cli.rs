// src/bin/cli.rs
use clap::Parser;
use edux_status::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(cli::Args::parse())
}
