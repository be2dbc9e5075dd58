//! Error types for Quill

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuillError>;

/// Main error type for Quill
#[derive(Debug, Error)]
pub enum QuillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connection failed: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Device error: {0}")]
    Device(String),

    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bad input caught before anything is drawn
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Degenerate bounding box: {width}x{height}")]
    DegenerateBox { width: f64, height: f64 },

    #[error("Unknown glyph: {0}")]
    UnknownGlyph(String),

    #[error("Unknown font: {0}")]
    UnknownFont(String),

    #[error("Invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Incorrect slot number {0} (must be between 1 and 32)")]
    InvalidSlot(u32),

    #[error("Curve has no points")]
    EmptyCurve,

    #[error("Non-finite coordinate in point sequence")]
    NonFiniteCoordinate,

    #[error("Nothing to draw")]
    NothingToDraw,

    #[error("No pen engine configured")]
    MissingEngine,
}

/// The plotting device could not be reached
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Can't connect to {address}: {source}")]
    Unreachable {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Handshake failed: {0}")]
    Handshake(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixmap creation failed")]
    PixmapCreationFailed,
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Format not supported: {0}")]
    FormatNotSupported(String),

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
