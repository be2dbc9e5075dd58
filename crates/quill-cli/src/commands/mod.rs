//! Subcommand implementations and the engine plumbing they share

pub mod calibrate;
pub mod curve;
pub mod info;
pub mod write;

use std::fs;

use anyhow::{bail, Context, Result};
use quill::export::ExportFormat;
use quill::plotter::{PlotterConfig, PlotterEngine, RecordingLink};
use quill::prelude::{PenEngine, Pipeline, RenderOutput, RenderParams};
use quill::render_raster::RasterEngine;

use crate::cli::{EngineArgs, EngineKind};

/// One drawing on the engine `args` selects, with its output delivered
///
/// `paint` gets a ready pipeline and must finalize it, which both
/// `Pipeline::write` and `Pipeline::trace` do. Raster output goes to the
/// output file; plotter output is summarised on stderr.
pub fn draw<F>(args: &EngineArgs, mut params: RenderParams, paint: F) -> Result<()>
where
    F: FnOnce(&mut Pipeline) -> quill::error::Result<RenderOutput>,
{
    params.stroke_width = args.stroke_width;

    match args.engine {
        EngineKind::Raster => {
            let format = output_format(args);
            if args.dry_run || args.slot.is_some() {
                log::warn!("--dry-run and --slot only apply to the plotter engine");
            }
            let engine = RasterEngine::new(args.width, args.height, &params)
                .context("Failed to create raster canvas")?;
            let output = run(Box::new(engine), params, paint)?;

            let bytes = format
                .exporter()
                .export(&output)
                .context("Failed to encode image")?;
            fs::write(&args.output, &bytes)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
            eprintln!(
                "Wrote {}x{} drawing to {} ({} bytes)",
                args.width,
                args.height,
                args.output.display(),
                bytes.len()
            );
        },
        EngineKind::Plotter => {
            let config = PlotterConfig {
                address: args.address.clone(),
                record_slot: args.slot,
                ..Default::default()
            };
            let output = if args.dry_run {
                let link = RecordingLink::new();
                let engine = PlotterEngine::new(link.clone(), config)?;
                let output = run(Box::new(engine), params, paint)?;
                print!("{}", link.gcode());
                output
            } else {
                let engine = PlotterEngine::connect(config)
                    .with_context(|| format!("Failed to reach plotter at {}", args.address))?;
                run(Box::new(engine), params, paint)?
            };
            summarize(&output)?;
        },
    }

    Ok(())
}

fn run<F>(engine: Box<dyn PenEngine>, params: RenderParams, paint: F) -> Result<RenderOutput>
where
    F: FnOnce(&mut Pipeline) -> quill::error::Result<RenderOutput>,
{
    let mut pipeline = Pipeline::builder()
        .engine(engine)
        .params(params)
        .build()
        .context("Invalid drawing parameters")?;
    paint(&mut pipeline).context("Drawing failed")
}

fn output_format(args: &EngineArgs) -> ExportFormat {
    args.format
        .map(ExportFormat::from)
        .or_else(|| ExportFormat::from_path(&args.output))
        .unwrap_or(ExportFormat::Png)
}

fn summarize(output: &RenderOutput) -> Result<()> {
    let RenderOutput::Plotted(summary) = output else {
        bail!("Plotter returned a bitmap");
    };
    eprintln!(
        "Plotted: {} moves, {} raises, {} lowers",
        summary.moves, summary.raises, summary.lowers
    );
    Ok(())
}
