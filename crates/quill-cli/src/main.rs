// this_file: crates/quill-cli/src/main.rs

//! Quill CLI: curves and runic text on a raster canvas or a Line-us plotter.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Lissajous(args) => commands::curve::lissajous(&args),
        Commands::Rose(args) => commands::curve::rose(&args),
        Commands::Roulette(args) => commands::curve::roulette(&args),
        Commands::Write(args) => commands::write::run(&args),
        Commands::Calibrate(args) => commands::calibrate::run(&args),
        Commands::Info => {
            commands::info::run();
            Ok(())
        },
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
