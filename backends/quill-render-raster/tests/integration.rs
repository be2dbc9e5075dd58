//! Integration tests for the raster engine behind a pipeline

use quill_core::{
    error::{ConfigError, QuillError},
    types::{BitmapData, Point, RenderOutput},
    Curve, Pipeline, RenderParams,
};
use quill_curves::{Lissajous, Rose};
use quill_fonts::{cirth, ogham, CirthMode};
use quill_render_raster::RasterEngine;

fn pipeline(width: u32, height: u32) -> Pipeline {
    let params = RenderParams::default();
    let engine = RasterEngine::new(width, height, &params).expect("raster engine");
    Pipeline::builder()
        .engine(Box::new(engine))
        .params(params)
        .build()
        .expect("pipeline")
}

fn into_bitmap(output: RenderOutput) -> BitmapData {
    match output {
        RenderOutput::Bitmap(bitmap) => bitmap,
        other => panic!("expected a bitmap, got {other:?}"),
    }
}

fn inked_pixels(bitmap: &BitmapData) -> usize {
    bitmap
        .data
        .chunks_exact(4)
        .filter(|px| px[..3] != [255, 255, 255])
        .count()
}

#[test]
fn test_renderer_creation() {
    let pipeline = pipeline(32, 32);
    assert_eq!(pipeline.engine_name(), "raster");
}

#[test]
fn test_lissajous_is_traced() {
    let points = Lissajous::new(5, 3, 0.5).expect("curve").compute(256);
    let bitmap = into_bitmap(pipeline(128, 128).trace(&points).expect("trace"));

    assert_eq!((bitmap.width, bitmap.height), (128, 128));
    assert!(inked_pixels(&bitmap) > 100);
}

#[test]
fn test_curve_touches_every_canvas_edge() {
    // A rose fills its box both ways, so each border column/row gets ink
    let points = Rose::new(2, 1).expect("curve").compute(512);
    let bitmap = into_bitmap(pipeline(64, 64).trace(&points).expect("trace"));

    let inked = |x: u32, y: u32| {
        let idx = ((y * bitmap.width + x) * 4) as usize;
        bitmap.data[idx..idx + 3] != [255, 255, 255]
    };
    assert!((0..64).any(|y| inked(0, y) || inked(1, y)));
    assert!((0..64).any(|x| inked(x, 0) || inked(x, 1)));
}

#[test]
fn test_ogham_text_is_written() {
    let font = ogham::font().expect("ogham");
    let outcome = pipeline(256, 64).write("beith luis", &font).expect("write");

    // "ui" in "luis" is one glyph, uillean
    assert_eq!(outcome.glyphs, 8);
    assert_eq!(outcome.unresolved.iter().collect::<String>(), " ");
    assert!(inked_pixels(&into_bitmap(outcome.output)) > 0);
}

#[test]
fn test_cirth_text_is_written() {
    let font = cirth::font(CirthMode::AngerthasErebor).expect("cirth");
    let outcome = pipeline(200, 100).write("khazad", &font).expect("write");
    assert!(outcome.unresolved.is_empty());
    assert!(inked_pixels(&into_bitmap(outcome.output)) > 0);
}

#[test]
fn test_unwritable_text_draws_nothing() {
    let font = ogham::font().expect("ogham");
    let err = pipeline(32, 32).write("1234", &font).unwrap_err();
    assert!(matches!(err, QuillError::Config(ConfigError::NothingToDraw)));
}

#[test]
fn test_flat_curve_is_rejected() {
    let points = [Point::new(0.0, 1.0), Point::new(1.0, 1.0)];
    let err = pipeline(32, 32).trace(&points).unwrap_err();
    assert!(matches!(err, QuillError::Config(ConfigError::DegenerateBox { .. })));
}
