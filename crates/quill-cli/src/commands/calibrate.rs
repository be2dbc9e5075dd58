//! Calibrate command: let the user set the pen height on the device
//!
//! The stylus goes down and stays there until Enter is pressed, so the
//! pen can be slid in its holder until it just touches the paper. The arm
//! then returns home.

use std::io::{self, Write};

use anyhow::{Context, Result};
use quill::plotter::{PlotterConfig, PlotterEngine, PlotterLink, RecordingLink};

use crate::cli::CalibrateArgs;

pub fn run(args: &CalibrateArgs) -> Result<()> {
    let config = PlotterConfig {
        address: args.address.clone(),
        ..Default::default()
    };

    if args.dry_run {
        let link = RecordingLink::new();
        calibrate(PlotterEngine::new(link.clone(), config)?)?;
        print!("{}", link.gcode());
    } else {
        let engine = PlotterEngine::connect(config)
            .with_context(|| format!("Failed to reach plotter at {}", args.address))?;
        calibrate(engine)?;
    }
    Ok(())
}

fn calibrate<L: PlotterLink>(mut engine: PlotterEngine<L>) -> Result<()> {
    engine.lower_stylus().context("Failed to lower the stylus")?;

    eprint!("Adjust the pen until it touches the paper, then press Enter...");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    engine.reset_position().context("Failed to home the arm")?;
    eprintln!("Calibrated.");
    Ok(())
}
