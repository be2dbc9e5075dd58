//! Plotter engine - pen strokes onto paper with a Line-us arm
//!
//! The expensive end of the [`PenEngine`] contract. Every motion is a
//! round-trip to the device, and a move with the stylus down leaves ink,
//! so the engine tracks the pen state and only skips the
//! raise/move/lower dance when a segment continues exactly where the last
//! one ended.
//!
//! Coordinates are rounded to whole device units before they are sent;
//! the arm can't resolve anything finer.
//!
//! ```
//! use quill_core::PenEngine;
//! use quill_core::types::Point;
//! use quill_plotter::{PlotterConfig, PlotterEngine, RecordingLink};
//!
//! let link = RecordingLink::new();
//! let mut engine = PlotterEngine::new(link.clone(), PlotterConfig::default())?;
//! engine.draw_segment(Point::new(700.4, 0.0), Point::new(900.0, 10.6))?;
//! assert_eq!(
//!     link.gcode(),
//!     "G01 Z1000\nG01 X700 Y0\nG01 Z200\nG01 X900 Y11\n"
//! );
//! # Ok::<(), quill_core::QuillError>(())
//! ```

use quill_core::{
    error::{ConfigError, Result},
    traits::PenEngine,
    types::{BBox, PlotSummary, Point, RenderOutput},
};

pub mod command;
pub mod link;

pub use command::Command;
pub use link::{PlotterLink, RecordingLink, TcpLink};

/// Where a Line-us answers by default
pub const DEFAULT_ADDRESS: &str = "line-us.local:1337";

/// Stylus height clear of the paper
pub const HIGH_Z: i64 = 1000;

/// Stylus height touching the paper
pub const LOW_Z: i64 = 200;

/// The reachable drawing area of a Line-us, y pointing up
pub const DEVICE_CANVAS: BBox = BBox::new(650.0, -1000.0, 1775.0, 1000.0);

/// Highest memory slot the device can record into
pub const MAX_SLOT: u32 = 32;

/// How to reach and drive the device
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterConfig {
    pub address: String,
    pub canvas: BBox,
    pub high_z: i64,
    pub low_z: i64,
    /// Record the session into this slot instead of only drawing it
    pub record_slot: Option<u32>,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            canvas: DEVICE_CANVAS,
            high_z: HIGH_Z,
            low_z: LOW_Z,
            record_slot: None,
        }
    }
}

fn check_slot(slot: u32) -> Result<u32> {
    if (1..=MAX_SLOT).contains(&slot) {
        Ok(slot)
    } else {
        Err(ConfigError::InvalidSlot(slot).into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stylus {
    Unknown,
    Up,
    Down,
}

/// A pen engine that drives a physical plotter through a [`PlotterLink`]
pub struct PlotterEngine<L: PlotterLink> {
    link: L,
    config: PlotterConfig,
    stylus: Stylus,
    position: Option<(i64, i64)>,
    summary: PlotSummary,
    recording: bool,
}

impl PlotterEngine<TcpLink> {
    /// Connect to the device at `config.address`
    pub fn connect(config: PlotterConfig) -> Result<Self> {
        if let Some(slot) = config.record_slot {
            check_slot(slot)?;
        }
        let link = TcpLink::connect(&config.address)?;
        Self::new(link, config)
    }
}

impl<L: PlotterLink> PlotterEngine<L> {
    /// Drive `link` with `config`, starting a recording if a slot is set
    pub fn new(link: L, config: PlotterConfig) -> Result<Self> {
        let slot = config.record_slot.map(check_slot).transpose()?;

        log::debug!(
            "Plotter: canvas {:?}, z {}..{}",
            config.canvas,
            config.low_z,
            config.high_z
        );

        let mut engine = Self {
            link,
            config,
            stylus: Stylus::Unknown,
            position: None,
            summary: PlotSummary::default(),
            recording: false,
        };
        if let Some(slot) = slot {
            engine.start_recording(slot)?;
        }
        Ok(engine)
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    /// Commands issued so far
    pub fn summary(&self) -> PlotSummary {
        self.summary
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    fn send(&mut self, command: Command) -> Result<()> {
        log::trace!("Plotter: {}", command);
        self.link.send(&command)?;
        Ok(())
    }

    pub fn raise_stylus(&mut self) -> Result<()> {
        self.send(Command::move_z(self.config.high_z))?;
        self.stylus = Stylus::Up;
        self.summary.raises += 1;
        Ok(())
    }

    pub fn lower_stylus(&mut self) -> Result<()> {
        self.send(Command::move_z(self.config.low_z))?;
        self.stylus = Stylus::Down;
        self.summary.lowers += 1;
        Ok(())
    }

    /// Send the arm home
    ///
    /// The device homes with the stylus up, and its position afterwards is
    /// whatever the firmware calls home, so both are forgotten here.
    pub fn reset_position(&mut self) -> Result<()> {
        self.send(Command::Home)?;
        self.stylus = Stylus::Unknown;
        self.position = None;
        Ok(())
    }

    pub fn start_recording(&mut self, slot: u32) -> Result<()> {
        let slot = check_slot(slot)?;
        self.send(Command::StartRecording(slot))?;
        self.recording = true;
        log::info!("Plotter: recording into slot {}", slot);
        Ok(())
    }

    pub fn stop_recording(&mut self) -> Result<()> {
        self.send(Command::StopRecording)?;
        self.recording = false;
        Ok(())
    }

    fn move_to(&mut self, (x, y): (i64, i64)) -> Result<()> {
        self.send(Command::move_xy(x, y))?;
        self.position = Some((x, y));
        self.summary.moves += 1;
        Ok(())
    }

    fn place(&mut self, target: (i64, i64)) -> Result<()> {
        self.raise_stylus()?;
        self.move_to(target)?;
        self.lower_stylus()
    }

    fn pen_down_at(&self, at: (i64, i64)) -> bool {
        self.stylus == Stylus::Down && self.position == Some(at)
    }
}

fn round(p: Point) -> (i64, i64) {
    (p.x.round() as i64, p.y.round() as i64)
}

impl<L: PlotterLink> PenEngine for PlotterEngine<L> {
    fn name(&self) -> &'static str {
        "plotter"
    }

    fn canvas(&self) -> BBox {
        self.config.canvas
    }

    fn position(&self) -> Option<Point> {
        self.position.map(|(x, y)| Point::new(x as f64, y as f64))
    }

    fn set_position(&mut self, p: Point) -> Result<()> {
        self.place(round(p))
    }

    fn draw_to(&mut self, p: Point) -> Result<()> {
        let target = round(p);
        match (self.stylus, self.position) {
            (Stylus::Down, Some(_)) => self.move_to(target),
            _ => self.place(target),
        }
    }

    fn draw_segment(&mut self, from: Point, to: Point) -> Result<()> {
        let start = round(from);
        if !self.pen_down_at(start) {
            self.place(start)?;
        }
        self.move_to(round(to))
    }

    fn finalize(&mut self) -> Result<RenderOutput> {
        if self.recording {
            self.stop_recording()?;
        }
        log::info!(
            "Plotter: {} moves, {} raises, {} lowers",
            self.summary.moves,
            self.summary.raises,
            self.summary.lowers
        );
        Ok(RenderOutput::Plotted(self.summary))
    }
}
