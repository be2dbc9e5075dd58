//! The engine that drives text and curves onto a canvas

// this_file: crates/quill-core/src/pipeline.rs

use std::collections::BTreeSet;

use crate::{
    error::{ConfigError, Result},
    font::Font,
    layout,
    tokenize::tokenize,
    traits::PenEngine,
    types::{BBox, Point, RenderOutput},
    RenderParams,
};

/// Pipeline for stroke drawing: Tokenize → Layout → Fit → Replay
///
/// One pipeline owns one pen engine for one drawing session. Two entry
/// points share it:
///
/// - [`Pipeline::write`] sends text through the font and lays glyphs out
/// - [`Pipeline::trace`] draws a precomputed point sequence as one line
///
/// Both finalize the engine, so a pipeline is good for a single call.
///
/// ```ignore
/// use quill_core::Pipeline;
///
/// let mut pipeline = Pipeline::builder()
///     .engine(Box::new(my_engine))
///     .params(RenderParams { margin: 0.1, ..Default::default() })
///     .build()?;
///
/// let outcome = pipeline.write("Hello", &font)?;
/// ```
pub struct Pipeline {
    engine: Box<dyn PenEngine>,
    canvas: BBox,
    params: RenderParams,
}

/// What a `write` produced, and what it had to leave out
#[derive(Debug)]
pub struct WriteOutcome {
    pub output: RenderOutput,
    /// Number of glyphs drawn
    pub glyphs: usize,
    /// Characters the font couldn't resolve
    pub unresolved: BTreeSet<char>,
}

impl Pipeline {
    /// Start building a new pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn canvas(&self) -> BBox {
        self.canvas
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Write `text` with `font` and finalize the engine.
    ///
    /// Characters the font can't resolve are dropped, logged once and
    /// returned in [`WriteOutcome::unresolved`].
    pub fn write(&mut self, text: &str, font: &Font) -> Result<WriteOutcome> {
        let tokenized = tokenize(text, font);

        if !tokenized.unresolved.is_empty() {
            let dropped: String = tokenized.unresolved.iter().collect();
            log::warn!(
                "Font {} can't write {:?}; those characters are skipped",
                font.name(),
                dropped
            );
        }

        let glyphs = tokenized.glyphs();
        log::info!(
            "Writing {} glyphs with {} on {}",
            glyphs.len(),
            font.name(),
            self.engine.name()
        );

        let output = layout::render(
            &glyphs,
            font,
            self.canvas,
            self.engine.as_mut(),
            self.params.margin,
        )?;

        Ok(WriteOutcome {
            output,
            glyphs: glyphs.len(),
            unresolved: tokenized.unresolved,
        })
    }

    /// Trace a closed curve through `points` and finalize the engine
    pub fn trace(&mut self, points: &[Point]) -> Result<RenderOutput> {
        log::info!("Tracing {} points on {}", points.len(), self.engine.name());
        layout::trace_points(points, self.canvas, self.engine.as_mut())
    }
}

/// Build pipelines your way, piece by piece
///
/// ```ignore
/// let pipeline = Pipeline::builder()
///     .engine(Box::new(RasterEngine::new(256, 256, &params)?))
///     .canvas(BBox::new(0.0, 256.0, 256.0, 0.0))
///     .build()?;
/// ```
#[derive(Default)]
pub struct PipelineBuilder {
    engine: Option<Box<dyn PenEngine>>,
    canvas: Option<BBox>,
    params: RenderParams,
}

impl PipelineBuilder {
    /// Start with a clean slate
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose who holds the pen
    pub fn engine(mut self, engine: Box<dyn PenEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Draw into `canvas` instead of the engine's own canvas
    pub fn canvas(mut self, canvas: BBox) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn params(mut self, params: RenderParams) -> Self {
        self.params = params;
        self
    }

    /// Create the pipeline, ready to run
    pub fn build(self) -> Result<Pipeline> {
        let engine = self.engine.ok_or(ConfigError::MissingEngine)?;
        self.params.validate()?;

        let canvas = self.canvas.unwrap_or_else(|| engine.canvas());
        if canvas.is_degenerate() {
            return Err(ConfigError::DegenerateBox {
                width: canvas.width(),
                height: canvas.height(),
            }
            .into());
        }

        Ok(Pipeline {
            engine,
            canvas,
            params: self.params,
        })
    }
}
