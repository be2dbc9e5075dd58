//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use quill::export::ExportFormat;
use quill::fonts::CirthMode;
use quill::plotter::DEFAULT_ADDRESS;

/// Quill - curves and runes for pixels and plotters
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a Lissajous figure
    Lissajous(LissajousArgs),

    /// Draw a rose (rhodonea) curve
    Rose(RoseArgs),

    /// Draw a hypo- or epitrochoid
    Roulette(RouletteArgs),

    /// Write text in Ogham or Cirth
    #[command(alias = "w")]
    Write(WriteArgs),

    /// Set the plotter's pen height by hand
    Calibrate(CalibrateArgs),

    /// Display information about available fonts, engines and formats
    #[command(alias = "i")]
    Info,
}

/// Which pen engine draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// tiny-skia pixmap written to an image file
    Raster,
    /// Line-us arm over the network
    Plotter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Ppm,
    Pgm,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => ExportFormat::Png,
            OutputFormat::Ppm => ExportFormat::Ppm,
            OutputFormat::Pgm => ExportFormat::Pgm,
        }
    }
}

/// Engine options shared by every drawing command
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Pen engine
    #[arg(short = 'e', long = "engine", value_enum, default_value_t = EngineKind::Raster)]
    pub engine: EngineKind,

    /// Canvas width in pixels (raster)
    #[arg(short = 'W', long = "width", default_value_t = 256)]
    pub width: u32,

    /// Canvas height in pixels (raster)
    #[arg(short = 'H', long = "height", default_value_t = 256)]
    pub height: u32,

    /// Output file path (raster)
    #[arg(short = 'o', long = "output", default_value = "quill.png")]
    pub output: PathBuf,

    /// Output format; guessed from the output extension when omitted
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Plotter address as host:port
    #[arg(long = "address", default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Record the drawing into this plotter memory slot (1-32)
    #[arg(long = "slot")]
    pub slot: Option<u32>,

    /// Print the plotter's G-code instead of connecting
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Line width in pixels (raster)
    #[arg(long = "stroke-width", default_value_t = 1.0)]
    pub stroke_width: f32,
}

#[derive(Args, Debug)]
pub struct LissajousArgs {
    /// Frequency along x
    #[arg(short = 'a', default_value_t = 5)]
    pub a: u32,

    /// Frequency along y
    #[arg(short = 'b', default_value_t = 3)]
    pub b: u32,

    /// Phase shift as a fraction of pi, between -0.5 and 0.5
    #[arg(short = 'P', long = "phase", default_value_t = 0.5, allow_negative_numbers = true)]
    pub phase: f64,

    /// Number of points to sample
    #[arg(short = 'p', long = "points", default_value_t = 256)]
    pub points: usize,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Args, Debug)]
pub struct RoseArgs {
    /// Numerator of the petal ratio
    #[arg(short = 'n', default_value_t = 5)]
    pub n: u32,

    /// Denominator of the petal ratio
    #[arg(short = 'd', default_value_t = 3)]
    pub d: u32,

    /// Number of points to sample
    #[arg(short = 'p', long = "points", default_value_t = 256)]
    pub points: usize,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Roulette family
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RouletteKind {
    /// Hypotrochoid
    Ht,
    /// Epitrochoid
    Et,
    /// Hypocycloid
    Hc,
    /// Epicycloid
    Ec,
}

#[derive(Args, Debug)]
pub struct RouletteArgs {
    /// Radius of the fixed circle
    #[arg(short = 'R', default_value_t = 5)]
    pub big_r: u32,

    /// Radius of the rolling circle
    #[arg(short = 'r', default_value_t = 3)]
    pub r: u32,

    /// Distance of the pen from the rolling circle's center (trochoids only)
    #[arg(short = 'd', default_value_t = 5.0, allow_negative_numbers = true)]
    pub d: f64,

    /// Number of points to sample
    #[arg(short = 'n', long = "points", default_value_t = 256)]
    pub points: usize,

    /// Curve type
    #[arg(short = 't', long = "type", value_enum, default_value_t = RouletteKind::Ht)]
    pub kind: RouletteKind,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FontName {
    Ogham,
    Cirth,
}

impl FontName {
    pub fn as_str(self) -> &'static str {
        match self {
            FontName::Ogham => "ogham",
            FontName::Cirth => "cirth",
        }
    }
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Text to write
    pub text: String,

    /// Stroke font
    #[arg(short = 'f', long = "font", value_enum, default_value_t = FontName::Ogham)]
    pub font: FontName,

    /// Cirth mode: daeron, angerthas, moria, erebor
    #[arg(short = 'm', long = "mode", default_value = "angerthas")]
    pub mode: CirthMode,

    /// Space around the text, as a fraction of its size
    #[arg(long = "margin", default_value_t = 0.05)]
    pub margin: f64,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Args, Debug)]
pub struct CalibrateArgs {
    /// Plotter address as host:port
    #[arg(long = "address", default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Print the plotter's G-code instead of connecting
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_write_defaults() {
        let cli = Cli::try_parse_from(["quill", "write", "beith"]).unwrap();
        let Commands::Write(args) = cli.command else {
            panic!("expected write");
        };
        assert_eq!(args.font, FontName::Ogham);
        assert_eq!(args.mode, CirthMode::AngerthasDaeron);
        assert_eq!(args.engine.engine, EngineKind::Raster);
        assert_eq!(args.engine.output, PathBuf::from("quill.png"));
        assert_eq!(args.engine.address, DEFAULT_ADDRESS);
    }

    #[test]
    fn test_roulette_flags() {
        let cli = Cli::try_parse_from([
            "quill", "roulette", "-R", "7", "-r", "2", "-d", "-1.5", "-t", "ec", "-e", "plotter",
            "--dry-run", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Roulette(args) = cli.command else {
            panic!("expected roulette");
        };
        assert_eq!((args.big_r, args.r, args.d), (7, 2, -1.5));
        assert_eq!(args.kind, RouletteKind::Ec);
        assert_eq!(args.engine.engine, EngineKind::Plotter);
        assert!(args.engine.dry_run);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["quill", "write", "x", "-f", "cirth", "-m", "quenya"]).is_err());
    }
}
