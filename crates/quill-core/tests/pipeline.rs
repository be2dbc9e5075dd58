use std::cell::RefCell;
use std::rc::Rc;

use quill_core::{
    font::{Font, Glyph, Guide, Stroke},
    traits::PenEngine,
    types::{BBox, PlotSummary, Point, RenderOutput},
    ConfigError, Pipeline, QuillError, RenderParams, Result,
};

/// Shared record of what the engine was asked to do
type Journal = Rc<RefCell<Vec<String>>>;

struct JournalEngine {
    journal: Journal,
    position: Option<Point>,
}

impl JournalEngine {
    fn new(journal: Journal) -> Self {
        Self {
            journal,
            position: None,
        }
    }
}

impl PenEngine for JournalEngine {
    fn name(&self) -> &'static str {
        "journal"
    }

    fn canvas(&self) -> BBox {
        BBox::new(0.0, 210.0, 105.0, 0.0)
    }

    fn position(&self) -> Option<Point> {
        self.position
    }

    fn set_position(&mut self, p: Point) -> Result<()> {
        self.journal.borrow_mut().push("set".into());
        self.position = Some(p);
        Ok(())
    }

    fn draw_to(&mut self, p: Point) -> Result<()> {
        self.journal.borrow_mut().push("to".into());
        self.position = Some(p);
        Ok(())
    }

    fn draw_segment(&mut self, _from: Point, to: Point) -> Result<()> {
        self.journal.borrow_mut().push("segment".into());
        self.position = Some(to);
        Ok(())
    }

    fn finalize(&mut self) -> Result<RenderOutput> {
        self.journal.borrow_mut().push("finalize".into());
        Ok(RenderOutput::Plotted(PlotSummary::default()))
    }
}

fn letter_font() -> Font {
    let mut font = Font::new(
        "letters",
        0.1,
        vec![
            Glyph::new(
                "A",
                vec![Stroke::segment(0.0, 0.0, 0.5, 2.0), Stroke::line_to(1.0, 0.0)],
            ),
            Glyph::new("I", vec![Stroke::segment(0.0, 0.0, 0.0, 2.0)]),
        ],
    );
    font.set_value_map(&[(&["a", "A"], "A"), (&["i", "I"], "I")])
        .unwrap();
    font
}

#[test]
fn missing_engine_is_a_config_error() {
    let err = Pipeline::builder().build().err().unwrap();
    assert!(matches!(err, QuillError::Config(ConfigError::MissingEngine)));
}

#[test]
fn canvas_defaults_to_engine_canvas() {
    let journal = Journal::default();
    let pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal)))
        .build()
        .unwrap();
    assert_eq!(pipeline.canvas(), BBox::new(0.0, 210.0, 105.0, 0.0));
    assert_eq!(pipeline.engine_name(), "journal");
}

#[test]
fn degenerate_canvas_is_rejected() {
    let journal = Journal::default();
    let err = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal)))
        .canvas(BBox::new(0.0, 0.0, 0.0, 10.0))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, QuillError::Config(ConfigError::DegenerateBox { .. })));
}

#[test]
fn invalid_margin_is_rejected() {
    let journal = Journal::default();
    let result = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal)))
        .params(RenderParams {
            margin: -0.5,
            ..Default::default()
        })
        .build();
    assert!(result.is_err());
}

#[test]
fn unknown_characters_do_not_stop_writing() {
    let font = letter_font();

    let noisy = Journal::default();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(noisy.clone())))
        .build()
        .unwrap();
    let outcome = pipeline.write("a1i 2A", &font).unwrap();

    let clean = Journal::default();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(clean.clone())))
        .build()
        .unwrap();
    pipeline.write("aiA", &font).unwrap();

    assert_eq!(outcome.glyphs, 3);
    assert_eq!(
        outcome.unresolved.iter().collect::<String>(),
        " 12".to_string()
    );
    assert_eq!(*noisy.borrow(), *clean.borrow());
}

#[test]
fn write_replays_every_stroke_then_finalizes_once() {
    let font = letter_font();
    let journal = Journal::default();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal.clone())))
        .build()
        .unwrap();

    pipeline.write("AI", &font).unwrap();

    assert_eq!(
        *journal.borrow(),
        vec!["segment", "to", "segment", "finalize"]
    );
}

#[test]
fn guide_comes_first() {
    let font = letter_font().with_guide(Guide::Stemline { y: 1.0 });
    let journal = Journal::default();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal.clone())))
        .build()
        .unwrap();

    pipeline.write("AI", &font).unwrap();

    assert_eq!(
        *journal.borrow(),
        vec!["segment", "segment", "to", "segment", "finalize"]
    );
}

#[test]
fn zero_width_text_fails_before_drawing() {
    let font = letter_font();
    let journal = Journal::default();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal.clone())))
        .build()
        .unwrap();

    let err = pipeline.write("I", &font).unwrap_err();
    assert!(matches!(err, QuillError::Config(ConfigError::DegenerateBox { .. })));
    assert!(journal.borrow().is_empty());
}

#[test]
fn all_unknown_text_is_nothing_to_draw() {
    let font = letter_font();
    let journal = Journal::default();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal.clone())))
        .build()
        .unwrap();

    let err = pipeline.write("123", &font).unwrap_err();
    assert!(matches!(err, QuillError::Config(ConfigError::NothingToDraw)));
    assert!(journal.borrow().is_empty());
}

#[test]
fn trace_draws_closed_curve() {
    let journal = Journal::default();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(JournalEngine::new(journal.clone())))
        .build()
        .unwrap();

    let points = [
        Point::new(-1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, -1.0),
    ];
    pipeline.trace(&points).unwrap();

    assert_eq!(
        *journal.borrow(),
        vec!["set", "to", "to", "to", "to", "finalize"]
    );
}
