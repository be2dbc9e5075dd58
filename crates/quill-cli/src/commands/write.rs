//! Write command: text through a stroke font

use anyhow::{Context, Result};
use quill::fonts;
use quill::prelude::RenderParams;

use crate::cli::WriteArgs;

pub fn run(args: &WriteArgs) -> Result<()> {
    let font = fonts::load(args.font.as_str(), args.mode)
        .with_context(|| format!("Failed to load font {}", args.font.as_str()))?;

    let params = RenderParams {
        margin: args.margin,
        ..Default::default()
    };

    super::draw(&args.engine, params, |pipeline| {
        let outcome = pipeline.write(&args.text, &font)?;
        log::info!("{} glyphs written", outcome.glyphs);
        Ok(outcome.output)
    })
}
