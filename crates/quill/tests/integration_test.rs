//! Integration tests for the Quill pipeline, end to end

use quill::export::{ExportFormat, PngExporter, PnmExporter};
use quill::fonts::{self, CirthMode};
use quill::plotter::{PlotterConfig, PlotterEngine, RecordingLink};
use quill::prelude::*;
use quill::render_raster::RasterEngine;

fn raster(width: u32, height: u32) -> Pipeline {
    let params = RenderParams::default();
    let engine = RasterEngine::new(width, height, &params).unwrap();
    Pipeline::builder()
        .engine(Box::new(engine))
        .params(params)
        .build()
        .unwrap()
}

#[test]
fn test_full_pipeline() {
    let font = fonts::load("cirth", CirthMode::AngerthasMoria).unwrap();
    let outcome = raster(240, 80).write("Khazad-dum", &font).unwrap();

    assert!(outcome.glyphs > 0);
    assert!(outcome.unresolved.contains(&'-'));

    let png = PngExporter::new().export(&outcome.output).unwrap();
    let image = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (240, 80));
    assert!(image.pixels().any(|p| p.0 != [255, 255, 255, 255]));
}

#[test]
fn test_curve_to_pgm() {
    let curve = Trochoid::hypocycloid(5, 3).unwrap();
    let output = raster(50, 40).trace(&curve.compute(300)).unwrap();

    let pgm = PnmExporter::pgm().export(&output).unwrap();
    let text = String::from_utf8(pgm).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P2"));
    assert_eq!(lines.next(), Some("50 40"));
    assert_eq!(lines.next(), Some("255"));
    assert!(lines.any(|row| row.split_whitespace().any(|v| v != "255")));
}

#[test]
fn test_same_drawing_on_both_engines() {
    let curve = Lissajous::new(3, 2, 0.25).unwrap();
    let points = curve.compute(120);

    assert!(matches!(
        raster(64, 64).trace(&points).unwrap(),
        RenderOutput::Bitmap(_)
    ));

    let link = RecordingLink::new();
    let engine = PlotterEngine::new(link.clone(), PlotterConfig::default()).unwrap();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(engine))
        .build()
        .unwrap();
    let output = pipeline.trace(&points).unwrap();

    match &output {
        RenderOutput::Plotted(summary) => {
            assert_eq!(summary.moves, 121);
            assert_eq!((summary.raises, summary.lowers), (1, 1));
        },
        other => panic!("expected a plot summary, got {other:?}"),
    }
    assert!(link.gcode().starts_with("G01 Z1000\n"));

    // A plot can't be saved as an image
    assert!(ExportFormat::Png.exporter().export(&output).is_err());
}

#[test]
fn test_engines_are_listed() {
    assert_eq!(quill::ENGINES, &["raster", "plotter"]);
}
